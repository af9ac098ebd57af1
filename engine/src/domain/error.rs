//! Domain-level errors
//! These represent business rule violations, not infrastructure failures

use crate::domain::{ProcessId, ProcessState};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // Argument errors
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Process with id {0} is already registered")]
    DuplicateProcess(ProcessId),

    #[error("Process {id} cannot be added: it is already {state}")]
    AlreadyAdmitted { id: ProcessId, state: ProcessState },

    // Lifecycle errors
    #[error("Invalid state transition from {from} to {to}")]
    InvalidStateTransition {
        from: ProcessState,
        to: ProcessState,
    },

    // Capacity errors
    #[error("No free capacity to accept new processes (capacity: {capacity})")]
    CapacityExhausted { capacity: usize },

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Coarse classification of a [`DomainError`]
///
/// `InvalidArgument` and `InvalidState` point at caller misuse.
/// `CapacityExhausted` is an expected outcome callers should handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    InvalidState,
    CapacityExhausted,
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::InvalidArgument(_)
            | DomainError::DuplicateProcess(_)
            | DomainError::AlreadyAdmitted { .. }
            | DomainError::InvalidConfiguration(_) => ErrorKind::InvalidArgument,
            DomainError::InvalidStateTransition { .. } => ErrorKind::InvalidState,
            DomainError::CapacityExhausted { .. } => ErrorKind::CapacityExhausted,
        }
    }

    pub fn is_capacity_exhausted(&self) -> bool {
        self.kind() == ErrorKind::CapacityExhausted
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(
            DomainError::InvalidArgument("x".to_string()).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            DomainError::DuplicateProcess(ProcessId::new(1)).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            DomainError::AlreadyAdmitted {
                id: ProcessId::new(1),
                state: ProcessState::Active,
            }
            .kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            DomainError::InvalidConfiguration("bad".to_string()).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            DomainError::InvalidStateTransition {
                from: ProcessState::Pending,
                to: ProcessState::Terminated,
            }
            .kind(),
            ErrorKind::InvalidState
        );
        assert_eq!(
            DomainError::CapacityExhausted { capacity: 3 }.kind(),
            ErrorKind::CapacityExhausted
        );
    }

    #[test]
    fn test_is_capacity_exhausted() {
        assert!(DomainError::CapacityExhausted { capacity: 1 }.is_capacity_exhausted());
        assert!(!DomainError::DuplicateProcess(ProcessId::new(7)).is_capacity_exhausted());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            DomainError::DuplicateProcess(ProcessId::new(42)).to_string(),
            "Process with id 42 is already registered"
        );
        assert_eq!(
            DomainError::InvalidStateTransition {
                from: ProcessState::Terminated,
                to: ProcessState::Active,
            }
            .to_string(),
            "Invalid state transition from terminated to active"
        );
        assert_eq!(
            DomainError::CapacityExhausted { capacity: 10 }.to_string(),
            "No free capacity to accept new processes (capacity: 10)"
        );
    }
}
