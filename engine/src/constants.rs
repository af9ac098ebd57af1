//! Application-wide constants and default values
//!
//! Centralizes environment variable names and defaults for the driver binary

/// Environment variables read by the `procreg` binary
pub mod env {
    /// Path to a registry/workload YAML file
    pub const CONFIG_FILE: &str = "PROCREG_CONFIG_FILE";

    /// Overrides the configured capacity
    pub const CAPACITY: &str = "PROCREG_CAPACITY";

    /// Overrides the configured replacement policy
    pub const POLICY: &str = "PROCREG_POLICY";

    /// Clock used to stamp admissions: "system" or "stepping"
    pub const CLOCK: &str = "PROCREG_CLOCK";

    /// Log filter, takes priority over RUST_LOG
    pub const LOG_LEVEL: &str = "PROCREG_LOG_LEVEL";
}

/// Clock defaults
pub mod clock {
    /// Distance between two consecutive readings of a stepping clock (seconds)
    pub const DEFAULT_STEP_SEC: u64 = 1;
}

/// Logging defaults
pub mod logging {
    pub const DEFAULT_LOG_LEVEL: &str = "info";
}
