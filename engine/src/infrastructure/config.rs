//! Configuration loading from YAML files
//!
//! A configuration file describes one registry (capacity and replacement
//! policy) and, optionally, a workload to replay against it:
//!
//! ```yaml
//! capacity: 3
//! policy: priority-aware
//! workload:
//!   - action: add
//!     id: 1
//!     priority: 2
//!   - action: kill
//!     priority: 2
//!   - action: list
//!     order: by-priority
//! ```

use crate::domain::constants::DEFAULT_CAPACITY;
use crate::domain::{
    selectors, DomainError, ListOrder, PolicyKind, Priority, Process, ProcessId,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    #[serde(default)]
    pub policy: PolicyKind,

    #[serde(default)]
    pub workload: Vec<WorkloadStep>,
}

/// One step of a replayed workload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum WorkloadStep {
    /// Add a new process; priority defaults to the id
    Add {
        id: ProcessId,
        #[serde(default)]
        priority: Option<Priority>,
    },

    /// Kill matching processes; no filter means every process
    Kill {
        #[serde(default)]
        id: Option<ProcessId>,
        #[serde(default)]
        priority: Option<Priority>,
    },

    /// List admitted processes
    List {
        #[serde(default)]
        order: ListOrder,
    },
}

impl WorkloadStep {
    /// Build the pending process an `add` step describes
    pub fn to_process(&self) -> Option<Process> {
        match self {
            WorkloadStep::Add { id, priority } => {
                let builder = Process::builder(*id);
                Some(match priority {
                    Some(priority) => builder.priority(*priority).build(),
                    None => builder.build(),
                })
            }
            _ => None,
        }
    }

    /// Predicate selecting the processes a `kill` step targets
    pub fn kill_selector(&self) -> Option<Box<dyn Fn(&Process) -> bool + Send + Sync>> {
        match self {
            WorkloadStep::Kill { id: Some(id), .. } => Some(Box::new(selectors::by_id(*id))),
            WorkloadStep::Kill {
                priority: Some(priority),
                ..
            } => Some(Box::new(selectors::by_priority(*priority))),
            WorkloadStep::Kill { .. } => Some(Box::new(selectors::all())),
            _ => None,
        }
    }
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            policy: PolicyKind::default(),
            workload: Vec::new(),
        }
    }
}

impl RegistryConfig {
    /// Load and validate configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            DomainError::InvalidConfiguration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&contents).map_err(|e| match e {
            DomainError::InvalidConfiguration(msg) => DomainError::InvalidConfiguration(format!(
                "'{}': {}",
                path.display(),
                msg
            )),
            other => other,
        })
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(contents: &str) -> Result<Self, DomainError> {
        // An empty document is a valid, all-defaults configuration
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(contents).map_err(|e| {
            DomainError::InvalidConfiguration(format!("Failed to parse YAML: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.capacity == 0 {
            return Err(DomainError::InvalidConfiguration(
                "capacity must be a positive number".to_string(),
            ));
        }

        for (index, step) in self.workload.iter().enumerate() {
            if let WorkloadStep::Kill {
                id: Some(_),
                priority: Some(_),
            } = step
            {
                return Err(DomainError::InvalidConfiguration(format!(
                    "workload step {}: kill accepts either 'id' or 'priority', not both",
                    index + 1
                )));
            }
        }

        Ok(())
    }
}
