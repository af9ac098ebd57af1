//! Infrastructure Layer
//!
//! Adapters implementing the ports defined in the domain layer, plus
//! configuration loading.
//!
//! ## Adapters
//!
//! - `SystemClock`: wall clock time source
//! - `SteppingClock`: deterministic, strictly increasing time source
//!
//! ## Usage
//!
//! ```rust
//! use procreg_engine::infrastructure::{RegistryConfig, SteppingClock};
//! use procreg_engine::ProcessRegistry;
//! use std::sync::Arc;
//!
//! let config = RegistryConfig::from_yaml("capacity: 2\npolicy: oldest-first\n")?;
//! let registry = ProcessRegistry::from_config(&config, Arc::new(SteppingClock::default()))?;
//! assert_eq!(registry.capacity(), 2);
//! # Ok::<(), procreg_engine::domain::DomainError>(())
//! ```

pub mod clock;
pub mod config;

pub use clock::{SteppingClock, SystemClock};
pub use config::{RegistryConfig, WorkloadStep};
