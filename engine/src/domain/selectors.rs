//! Selectors for `ProcessRegistry::kill`
//!
//! Pure predicates over a [`Process`]. Combine them with ordinary closures:
//!
//! ```
//! use procreg_engine::domain::selectors;
//! use procreg_engine::domain::Process;
//!
//! let low = selectors::by_priority(1);
//! let not_seven = |p: &Process| !selectors::by_id(7)(p);
//! let selector = move |p: &Process| low(p) && not_seven(p);
//!
//! assert!(selector(&Process::new(3, 1)));
//! assert!(!selector(&Process::new(7, 1)));
//! ```

use crate::domain::{Priority, Process, ProcessId};

/// Matches every process
pub fn all() -> impl Fn(&Process) -> bool + Clone + Send + Sync {
    |_| true
}

/// Matches the process with the given id
pub fn by_id(id: impl Into<ProcessId>) -> impl Fn(&Process) -> bool + Clone + Send + Sync {
    let id = id.into();
    move |process| process.id() == id
}

/// Matches every process with the given priority
pub fn by_priority(
    priority: impl Into<Priority>,
) -> impl Fn(&Process) -> bool + Clone + Send + Sync {
    let priority = priority.into();
    move |process| process.priority() == priority
}
