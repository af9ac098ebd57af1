//! Process Registry
//! Bounded collection of admitted processes, with capacity enforced through a
//! pluggable replacement policy

use crate::domain::constants::DEFAULT_CAPACITY;
use crate::domain::ports::{Clock, ReplacementPolicy};
use crate::domain::{DomainError, ListOrder, NeverEvictPolicy, Process, ProcessId, Result};
use crate::infrastructure::{RegistryConfig, SystemClock};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// Registry of running processes
///
/// Add, list and kill all run under one lock, so the capacity check, the
/// eviction and the insertion of an `add` are atomic with respect to every
/// other operation.
pub struct ProcessRegistry {
    capacity: usize,
    policy: Arc<dyn ReplacementPolicy>,
    clock: Arc<dyn Clock>,
    processes: Mutex<HashMap<ProcessId, Process>>,
}

impl ProcessRegistry {
    /// Create a registry
    ///
    /// # Arguments
    ///
    /// * `policy` - Decides which process is evicted once the registry is full
    /// * `capacity` - Maximum number of admitted processes, must be positive
    /// * `clock` - Time source for admission timestamps
    pub fn new(
        policy: Arc<dyn ReplacementPolicy>,
        capacity: usize,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        if capacity == 0 {
            return Err(DomainError::InvalidArgument(
                "capacity must be a positive number".to_string(),
            ));
        }

        debug!(capacity, policy = policy.name(), "Creating process registry");

        Ok(Self {
            capacity,
            policy,
            clock,
            processes: Mutex::new(HashMap::with_capacity(capacity)),
        })
    }

    /// Registry with the default capacity and a wall clock
    pub fn with_policy(policy: Arc<dyn ReplacementPolicy>) -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            policy,
            clock: Arc::new(SystemClock::new()),
            processes: Mutex::new(HashMap::with_capacity(DEFAULT_CAPACITY)),
        }
    }

    /// Build a registry from configuration
    pub fn from_config(config: &RegistryConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        config.validate()?;
        Self::new(config.policy.build(), config.capacity, clock)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn contains(&self, id: impl Into<ProcessId>) -> bool {
        self.lock().contains_key(&id.into())
    }

    pub fn get(&self, id: impl Into<ProcessId>) -> Option<Process> {
        self.lock().get(&id.into()).cloned()
    }

    /// Admit a pending process
    ///
    /// When the registry is full the replacement policy is asked for a victim.
    /// The victim is terminated and removed before the new process is admitted
    /// and stamped. Returns the evicted process, if any.
    ///
    /// # Errors
    ///
    /// * `AlreadyAdmitted` - the process is not pending
    /// * `DuplicateProcess` - a process with the same id is registered
    /// * `CapacityExhausted` - the registry is full and the policy declined
    ///
    /// Nothing changes when an error is returned.
    pub fn add(&self, process: Process) -> Result<Option<Process>> {
        let mut processes = self.lock();

        // 1. Validate the candidate
        if !process.is_pending() {
            debug!(process_id = %process.id(), state = %process.state(), "Rejecting process that was already started");
            return Err(DomainError::AlreadyAdmitted {
                id: process.id(),
                state: process.state(),
            });
        }

        if processes.contains_key(&process.id()) {
            debug!(process_id = %process.id(), "Rejecting process with duplicate id");
            return Err(DomainError::DuplicateProcess(process.id()));
        }

        // 2-4. Make room if needed, then admit. The candidate's lifecycle is
        // held throughout, and an eviction is the last fallible step before
        // the clock is read.
        let mut evicted = None;
        process.admit_with(|| {
            if processes.len() >= self.capacity {
                evicted = Some(self.evict_for(&mut processes, &process)?);
            }
            Ok(self.clock.now())
        })?;

        info!(
            process_id = %process.id(),
            priority = %process.priority(),
            total_processes = processes.len() + 1,
            "Process admitted"
        );

        processes.insert(process.id(), process);
        Ok(evicted)
    }

    fn evict_for(
        &self,
        processes: &mut HashMap<ProcessId, Process>,
        candidate: &Process,
    ) -> Result<Process> {
        // The candidate's lifecycle is locked while it is being admitted, so
        // the policy is shown a detached pending copy
        let view = Process::new(candidate.id(), candidate.priority());
        let victim = {
            let active: Vec<&Process> = processes.values().collect();
            match self.policy.choose(&active, &view) {
                Some(victim) => victim.clone(),
                None => {
                    warn!(
                        process_id = %candidate.id(),
                        priority = %candidate.priority(),
                        capacity = self.capacity,
                        policy = self.policy.name(),
                        "Registry full, process rejected"
                    );
                    return Err(DomainError::CapacityExhausted {
                        capacity: self.capacity,
                    });
                }
            }
        };

        // Terminate before removing so a failed transition leaves the map as is
        victim.mark_terminated()?;
        processes.remove(&victim.id());

        info!(
            process_id = %victim.id(),
            priority = %victim.priority(),
            replaced_by = %candidate.id(),
            policy = self.policy.name(),
            "Process evicted"
        );

        Ok(victim)
    }

    /// Snapshot of the admitted processes in the requested order
    pub fn list(&self, order: ListOrder) -> Vec<Process> {
        let processes = self.lock();
        let mut listed: Vec<Process> = processes.values().cloned().collect();
        listed.sort_by(|a, b| order.compare(a, b));

        debug!(order = %order, count = listed.len(), "Listed processes");
        listed
    }

    /// Kill every process matching `selector`
    ///
    /// Matching processes are removed and terminated in one step. Returns the
    /// ids of the killed processes in ascending order; an empty vector when
    /// nothing matched. Only ids whose termination succeeded are returned.
    pub fn kill<F>(&self, selector: F) -> Vec<ProcessId>
    where
        F: Fn(&Process) -> bool,
    {
        let mut processes = self.lock();

        let mut matched: Vec<ProcessId> = processes
            .values()
            .filter(|process| selector(process))
            .map(Process::id)
            .collect();
        matched.sort();

        let mut killed = Vec::with_capacity(matched.len());
        for id in matched {
            let Some(process) = processes.remove(&id) else {
                continue;
            };
            match process.mark_terminated() {
                Ok(()) => {
                    info!(process_id = %id, priority = %process.priority(), "Process killed");
                    killed.push(id);
                }
                // Stored records are always active; drop a stale one without reporting it
                Err(e) => {
                    warn!(process_id = %id, error = %e, "Dropped process that was not active");
                }
            }
        }

        debug!(
            killed = killed.len(),
            remaining_processes = processes.len(),
            "Kill completed"
        );
        killed
    }

    // Every critical section validates before mutating, so the map behind a
    // poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<ProcessId, Process>> {
        self.processes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ProcessRegistry {
    fn default() -> Self {
        Self::with_policy(Arc::new(NeverEvictPolicy))
    }
}

impl fmt::Debug for ProcessRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessRegistry")
            .field("capacity", &self.capacity)
            .field("policy", &self.policy)
            .field("len", &self.len())
            .finish()
    }
}
