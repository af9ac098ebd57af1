//! Replacement policy port
//!
//! When a registry is full it delegates the decision of which admitted
//! process (if any) may be evicted for a newcomer to an implementation of
//! this trait. Built-in implementations live in `domain::policies`.

use crate::domain::Process;
use std::fmt::Debug;

/// Port for eviction decisions
///
/// Implementations must be pure: no hidden state, no mutation of the
/// processes they are shown. The returned reference must come from `active`;
/// the registry does not re-check membership.
pub trait ReplacementPolicy: Send + Sync + Debug {
    /// Short name used in logs and configuration
    fn name(&self) -> &'static str;

    /// Select the process to evict so that `candidate` can take its place
    ///
    /// # Arguments
    /// * `active` - All processes currently admitted by the registry
    /// * `candidate` - The pending process waiting for admission
    ///
    /// # Returns
    /// The victim, or `None` to reject the candidate and free nothing
    fn choose<'a>(&self, active: &[&'a Process], candidate: &Process) -> Option<&'a Process>;
}
