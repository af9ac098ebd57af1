//! Clock port
//! Time source used to stamp admissions

use std::time::SystemTime;

/// Source of admission timestamps
///
/// A registry reads its clock exactly once per successful admission.
/// Implementations must be monotonically non-decreasing for the lifetime of
/// one registry; oldest-first ordering relies on it.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> SystemTime;
}
