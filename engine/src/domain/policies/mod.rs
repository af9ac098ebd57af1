//! Built-in replacement policies
//!
//! Implementations of the [`ReplacementPolicy`](crate::domain::ports::ReplacementPolicy)
//! port. All of them break ties between equal admission times on the lowest
//! process id, so a decision never depends on iteration order.

pub mod never_evict;
pub mod oldest_first;
pub mod priority_aware;

pub use never_evict::NeverEvictPolicy;
pub use oldest_first::OldestFirstPolicy;
pub use priority_aware::PriorityAwarePolicy;
