pub mod constants;
pub mod entities;
pub mod error;
pub mod policies;
pub mod ports;
pub mod selectors;
pub mod value_objects;

pub use entities::{Process, ProcessBuilder};
pub use error::{DomainError, ErrorKind, Result};
pub use policies::{NeverEvictPolicy, OldestFirstPolicy, PriorityAwarePolicy};
pub use ports::{Clock, ReplacementPolicy};
pub use value_objects::{ListOrder, PolicyKind, Priority, ProcessId, ProcessState};
