//! Never-evict policy: a full registry rejects every newcomer.

use crate::domain::ports::ReplacementPolicy;
use crate::domain::Process;

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverEvictPolicy;

impl ReplacementPolicy for NeverEvictPolicy {
    fn name(&self) -> &'static str {
        "never-evict"
    }

    fn choose<'a>(&self, _active: &[&'a Process], _candidate: &Process) -> Option<&'a Process> {
        None
    }
}
