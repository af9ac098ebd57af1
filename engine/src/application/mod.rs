//! Application Layer
//!
//! Orchestration on top of the domain: the process registry

pub mod registry;

pub use registry::ProcessRegistry;
