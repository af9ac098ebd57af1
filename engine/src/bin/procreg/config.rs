//! Driver configuration from environment variables
//!
//! The registry itself is described by a YAML file (`PROCREG_CONFIG_FILE`);
//! capacity and policy can be overridden from the environment.

use procreg_engine::constants::{env as vars, logging::DEFAULT_LOG_LEVEL};
use procreg_engine::domain::{DomainError, PolicyKind};
use procreg_engine::infrastructure::RegistryConfig;
use std::env;

/// Driver configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ProcregConfig {
    /// Registry and workload file
    pub config_file: Option<String>,

    /// Capacity override
    pub capacity: Option<usize>,

    /// Replacement policy override
    pub policy: Option<PolicyKind>,

    /// Time source stamping admissions
    pub clock: ClockKind,

    /// Log filter directive
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockKind {
    #[default]
    System,
    /// Deterministic clock, one second per admission starting at the epoch
    Stepping,
}

impl ProcregConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            config_file: env::var(vars::CONFIG_FILE).ok(),
            capacity: Self::parse_capacity()?,
            policy: Self::parse_policy()?,
            clock: Self::parse_clock()?,
            log_level: Self::parse_log_level(),
        })
    }

    fn parse_capacity() -> Result<Option<usize>, String> {
        match env::var(vars::CAPACITY) {
            Ok(s) => s
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| format!("Invalid {}: '{}'", vars::CAPACITY, s)),
            Err(_) => Ok(None),
        }
    }

    fn parse_policy() -> Result<Option<PolicyKind>, String> {
        match env::var(vars::POLICY) {
            Ok(s) => s.parse().map(Some),
            Err(_) => Ok(None),
        }
    }

    fn parse_clock() -> Result<ClockKind, String> {
        match env::var(vars::CLOCK) {
            Ok(s) => match s.to_lowercase().as_str() {
                "system" => Ok(ClockKind::System),
                "stepping" => Ok(ClockKind::Stepping),
                other => Err(format!(
                    "Invalid {}: '{}'. Valid values: system, stepping",
                    vars::CLOCK,
                    other
                )),
            },
            Err(_) => Ok(ClockKind::default()),
        }
    }

    fn parse_log_level() -> String {
        // Priority: PROCREG_LOG_LEVEL > RUST_LOG > default
        env::var(vars::LOG_LEVEL)
            .or_else(|_| env::var("RUST_LOG"))
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.capacity == Some(0) {
            return Err(format!("{} must be a positive number", vars::CAPACITY));
        }
        Ok(())
    }

    /// Registry configuration: the file (or defaults) with overrides applied
    pub fn registry_config(&self) -> Result<RegistryConfig, DomainError> {
        let mut config = match &self.config_file {
            Some(path) => RegistryConfig::load(path)?,
            None => RegistryConfig::default(),
        };

        if let Some(capacity) = self.capacity {
            config.capacity = capacity;
        }
        if let Some(policy) = self.policy {
            config.policy = policy;
        }

        config.validate()?;
        Ok(config)
    }
}
