//! Priority-aware policy.

use crate::domain::ports::ReplacementPolicy;
use crate::domain::Process;

/// Evicts the lowest-priority process that has been admitted the longest, if
/// and only if the candidate has a strictly higher priority.
///
/// When nothing running has a lower priority than the candidate the policy
/// declines and the candidate is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityAwarePolicy;

impl ReplacementPolicy for PriorityAwarePolicy {
    fn name(&self) -> &'static str {
        "priority-aware"
    }

    fn choose<'a>(&self, active: &[&'a Process], candidate: &Process) -> Option<&'a Process> {
        active
            .iter()
            .copied()
            .min_by_key(|process| (process.priority(), process.admitted_at(), process.id()))
            .filter(|victim| victim.priority() < candidate.priority())
    }
}
