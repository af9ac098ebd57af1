//! Oldest-first policy: evict the process admitted earliest.

use crate::domain::ports::ReplacementPolicy;
use crate::domain::Process;

/// Picks the process with the earliest admission time, lowest id on ties.
/// The candidate is always accepted as long as something is admitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct OldestFirstPolicy;

impl ReplacementPolicy for OldestFirstPolicy {
    fn name(&self) -> &'static str {
        "oldest-first"
    }

    fn choose<'a>(&self, active: &[&'a Process], _candidate: &Process) -> Option<&'a Process> {
        active
            .iter()
            .copied()
            .min_by_key(|process| (process.admitted_at(), process.id()))
    }
}
