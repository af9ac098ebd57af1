//! ProcessState value object
//! Represents the lifecycle state of a process

use serde::{Deserialize, Serialize};
use std::fmt;

/// The state of a process in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProcessState {
    /// Constructed, not yet admitted into a registry
    #[default]
    Pending,

    /// Admitted into a registry; admission time is set
    Active,

    /// Evicted or explicitly killed. Terminal.
    Terminated,
}

impl ProcessState {
    pub fn is_pending(&self) -> bool {
        matches!(self, ProcessState::Pending)
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ProcessState::Active)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ProcessState::Terminated)
    }

    /// Validate state transition
    ///
    /// Pending -> Active -> Terminated, each step at most once.
    pub fn can_transition_to(&self, new_state: ProcessState) -> bool {
        use ProcessState::*;

        matches!((self, new_state), (Pending, Active) | (Active, Terminated))
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessState::Pending => write!(f, "pending"),
            ProcessState::Active => write!(f, "active"),
            ProcessState::Terminated => write!(f, "terminated"),
        }
    }
}
