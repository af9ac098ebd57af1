//! Bounded in-process registry of processes with pluggable replacement
//! policies.
//!
//! ```rust
//! use procreg_engine::domain::{selectors, ListOrder, OldestFirstPolicy, Process};
//! use procreg_engine::infrastructure::SteppingClock;
//! use procreg_engine::ProcessRegistry;
//! use std::sync::Arc;
//!
//! let registry = ProcessRegistry::new(
//!     Arc::new(OldestFirstPolicy),
//!     2,
//!     Arc::new(SteppingClock::default()),
//! )?;
//!
//! let first = Process::new(1, 5);
//! registry.add(first.clone())?;
//! registry.add(Process::new(2, 5))?;
//! registry.add(Process::new(3, 5))?;
//!
//! assert!(first.is_terminated());
//! assert_eq!(registry.list(ListOrder::ById).len(), 2);
//! assert_eq!(registry.kill(selectors::all()).len(), 2);
//! # Ok::<(), procreg_engine::domain::DomainError>(())
//! ```

pub mod application;
pub mod constants;
pub mod domain;
pub mod infrastructure;

pub use application::ProcessRegistry;
pub use domain::{DomainError, ErrorKind, ListOrder, Process, ProcessId, Result};
