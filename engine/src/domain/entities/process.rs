//! Process entity
//! A unit of work tracked by a registry

use crate::domain::{DomainError, Priority, ProcessId, ProcessState};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::SystemTime;

/// Process entity
///
/// A `Process` is a handle: clones share the same lifecycle, so a caller that
/// keeps a clone after handing one to a registry observes the admission,
/// eviction or kill performed by the registry. Identity (id and priority) is
/// fixed at construction.
#[derive(Clone)]
pub struct Process {
    inner: Arc<ProcessInner>,
}

struct ProcessInner {
    id: ProcessId,
    priority: Priority,
    lifecycle: RwLock<Lifecycle>,
}

#[derive(Debug, Clone, Copy, Default)]
struct Lifecycle {
    state: ProcessState,
    admitted_at: Option<SystemTime>,
}

impl Process {
    /// Create a pending process
    pub fn new(id: impl Into<ProcessId>, priority: impl Into<Priority>) -> Self {
        Self {
            inner: Arc::new(ProcessInner {
                id: id.into(),
                priority: priority.into(),
                lifecycle: RwLock::new(Lifecycle::default()),
            }),
        }
    }

    /// Create a builder for constructing a Process
    ///
    /// # Example
    /// ```
    /// use procreg_engine::domain::Process;
    ///
    /// let process = Process::builder(7).priority(3).build();
    /// assert_eq!(process.id().as_u32(), 7);
    /// assert_eq!(process.priority().value(), 3);
    /// assert!(process.is_pending());
    /// ```
    pub fn builder(id: impl Into<ProcessId>) -> ProcessBuilder {
        ProcessBuilder::new(id)
    }

    // ===== Getters =====

    pub fn id(&self) -> ProcessId {
        self.inner.id
    }

    pub fn priority(&self) -> Priority {
        self.inner.priority
    }

    pub fn state(&self) -> ProcessState {
        self.read_lifecycle().state
    }

    /// Time at which a registry admitted this process, if it ever did
    pub fn admitted_at(&self) -> Option<SystemTime> {
        self.read_lifecycle().admitted_at
    }

    pub fn is_pending(&self) -> bool {
        self.state().is_pending()
    }

    pub fn is_active(&self) -> bool {
        self.state().is_active()
    }

    pub fn is_terminated(&self) -> bool {
        self.state().is_terminal()
    }

    /// True when both handles refer to the same record
    pub fn same_record(&self, other: &Process) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    // ===== Business Logic: State Transitions =====

    /// Mark the process as admitted at `now`
    ///
    /// Only a pending process can be admitted, and only once.
    pub(crate) fn mark_admitted(&self, now: SystemTime) -> Result<(), DomainError> {
        self.admit_with(|| Ok(now))
    }

    /// Admit the process, taking the admission time from `prepare`
    ///
    /// The lifecycle stays locked while `prepare` runs, so no other admission
    /// of this record can interleave. `prepare` runs only when the record is
    /// pending; when it fails the record is left pending. It must not query
    /// this record's state.
    pub(crate) fn admit_with<F>(&self, prepare: F) -> Result<(), DomainError>
    where
        F: FnOnce() -> Result<SystemTime, DomainError>,
    {
        let mut lifecycle = self.write_lifecycle();
        if !lifecycle.state.can_transition_to(ProcessState::Active) {
            return Err(DomainError::InvalidStateTransition {
                from: lifecycle.state,
                to: ProcessState::Active,
            });
        }

        let now = prepare()?;
        lifecycle.state = ProcessState::Active;
        lifecycle.admitted_at = Some(now);
        Ok(())
    }

    /// Mark the process as terminated
    ///
    /// Fails for a pending process (it was never admitted) and for a process
    /// that is already terminated; terminating twice is never a no-op.
    pub(crate) fn mark_terminated(&self) -> Result<(), DomainError> {
        let mut lifecycle = self.write_lifecycle();
        if !lifecycle.state.can_transition_to(ProcessState::Terminated) {
            return Err(DomainError::InvalidStateTransition {
                from: lifecycle.state,
                to: ProcessState::Terminated,
            });
        }

        lifecycle.state = ProcessState::Terminated;
        Ok(())
    }

    // Lifecycle writes validate before mutating, so a poisoned lock still
    // holds a consistent value.
    fn read_lifecycle(&self) -> RwLockReadGuard<'_, Lifecycle> {
        self.inner
            .lifecycle
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_lifecycle(&self) -> RwLockWriteGuard<'_, Lifecycle> {
        self.inner
            .lifecycle
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lifecycle = *self.read_lifecycle();
        f.debug_struct("Process")
            .field("id", &self.inner.id)
            .field("priority", &self.inner.priority)
            .field("state", &lifecycle.state)
            .field("admitted_at", &lifecycle.admitted_at)
            .finish()
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "process[id={}, priority={}, state={}]",
            self.id(),
            self.priority(),
            self.state()
        )
    }
}

/// Builder for [`Process`]
///
/// Priority defaults to the numeric id when it is not set explicitly. Ids
/// above `i32::MAX` saturate to `i32::MAX`.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    id: ProcessId,
    priority: Option<Priority>,
}

impl ProcessBuilder {
    pub fn new(id: impl Into<ProcessId>) -> Self {
        Self {
            id: id.into(),
            priority: None,
        }
    }

    pub fn priority(mut self, priority: impl Into<Priority>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn build(self) -> Process {
        let priority = self.priority.unwrap_or_else(|| {
            Priority::new(i32::try_from(self.id.as_u32()).unwrap_or(i32::MAX))
        });
        Process::new(self.id, priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn at(secs: u64) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
    }

    #[test]
    fn test_new_process_is_pending() {
        let process = Process::new(3, 1);
        assert_eq!(process.id(), ProcessId::new(3));
        assert_eq!(process.priority(), Priority::new(1));
        assert_eq!(process.state(), ProcessState::Pending);
        assert!(process.admitted_at().is_none());
    }

    #[test]
    fn test_builder_defaults_priority_to_id() {
        let process = Process::builder(12).build();
        assert_eq!(process.priority(), Priority::new(12));

        let process = Process::builder(12).priority(-4).build();
        assert_eq!(process.priority(), Priority::new(-4));
    }

    #[test]
    fn test_default_priority_saturates_for_large_ids() {
        let process = Process::builder(u32::MAX).build();
        assert_eq!(process.priority(), Priority::new(i32::MAX));

        let process = Process::builder(i32::MAX as u32 + 1).build();
        assert_eq!(process.priority(), Priority::new(i32::MAX));
    }

    #[test]
    fn test_admit_with_failing_preparation_stays_pending() {
        let process = Process::new(1, 1);
        let result = process.admit_with(|| Err(DomainError::CapacityExhausted { capacity: 1 }));

        assert_eq!(result, Err(DomainError::CapacityExhausted { capacity: 1 }));
        assert!(process.is_pending());
        assert!(process.admitted_at().is_none());
    }

    #[test]
    fn test_admit_with_skips_preparation_unless_pending() {
        let process = Process::new(1, 1);
        process.mark_admitted(at(1)).unwrap();

        let mut prepared = false;
        let result = process.admit_with(|| {
            prepared = true;
            Ok(at(2))
        });

        assert!(result.is_err());
        assert!(!prepared);
        assert_eq!(process.admitted_at(), Some(at(1)));
    }

    #[test]
    fn test_mark_admitted() {
        let process = Process::new(1, 1);
        process.mark_admitted(at(10)).unwrap();

        assert!(process.is_active());
        assert_eq!(process.admitted_at(), Some(at(10)));
    }

    #[test]
    fn test_cannot_admit_twice() {
        let process = Process::new(1, 1);
        process.mark_admitted(at(10)).unwrap();

        let result = process.mark_admitted(at(20));
        assert_eq!(
            result,
            Err(DomainError::InvalidStateTransition {
                from: ProcessState::Active,
                to: ProcessState::Active,
            })
        );
        // First admission time is kept
        assert_eq!(process.admitted_at(), Some(at(10)));
    }

    #[test]
    fn test_mark_terminated_keeps_admission_time() {
        let process = Process::new(1, 1);
        process.mark_admitted(at(5)).unwrap();
        process.mark_terminated().unwrap();

        assert!(process.is_terminated());
        assert_eq!(process.admitted_at(), Some(at(5)));
    }

    #[test]
    fn test_cannot_terminate_pending_process() {
        let process = Process::new(1, 1);
        let result = process.mark_terminated();

        assert!(matches!(
            result,
            Err(DomainError::InvalidStateTransition {
                from: ProcessState::Pending,
                ..
            })
        ));
        assert!(process.is_pending());
    }

    #[test]
    fn test_cannot_terminate_twice() {
        let process = Process::new(1, 1);
        process.mark_admitted(at(5)).unwrap();
        process.mark_terminated().unwrap();

        assert!(matches!(
            process.mark_terminated(),
            Err(DomainError::InvalidStateTransition {
                from: ProcessState::Terminated,
                to: ProcessState::Terminated,
            })
        ));
    }

    #[test]
    fn test_terminated_process_cannot_be_readmitted() {
        let process = Process::new(1, 1);
        process.mark_admitted(at(5)).unwrap();
        process.mark_terminated().unwrap();

        assert!(process.mark_admitted(at(6)).is_err());
        assert!(process.is_terminated());
    }

    #[test]
    fn test_clones_share_lifecycle() {
        let process = Process::new(8, 2);
        let observer = process.clone();

        process.mark_admitted(at(1)).unwrap();
        assert!(observer.is_active());
        assert!(observer.same_record(&process));

        // Same id, different record
        let other = Process::new(8, 2);
        assert!(!other.same_record(&process));
        assert!(other.is_pending());
    }

    #[test]
    fn test_display() {
        let process = Process::new(4, 2);
        assert_eq!(
            process.to_string(),
            "process[id=4, priority=2, state=pending]"
        );
    }
}
