//! Domain Constants
//!
//! Common constants used throughout the domain layer

/// Default number of processes a registry admits before consulting its policy
pub const DEFAULT_CAPACITY: usize = 10;
