//! Shared helpers for registry integration tests

#![allow(dead_code)]

use procreg_engine::domain::ports::ReplacementPolicy;
use procreg_engine::domain::{ListOrder, Process};
use procreg_engine::infrastructure::SteppingClock;
use procreg_engine::ProcessRegistry;
use std::process::Command;
use std::sync::Arc;

/// Registry with a deterministic clock, one second per admission
pub fn registry(policy: Arc<dyn ReplacementPolicy>, capacity: usize) -> ProcessRegistry {
    ProcessRegistry::new(policy, capacity, Arc::new(SteppingClock::default()))
        .expect("positive capacity")
}

/// Ids of the admitted processes, ascending
pub fn listed_ids(registry: &ProcessRegistry) -> Vec<u32> {
    registry
        .list(ListOrder::ById)
        .iter()
        .map(|p| p.id().as_u32())
        .collect()
}

pub fn ids(processes: &[Process]) -> Vec<u32> {
    processes.iter().map(|p| p.id().as_u32()).collect()
}

/// Run the procreg binary with the given environment, returns (stdout, stderr, exit code)
pub fn run_procreg(envs: &[(&str, &str)]) -> (String, String, i32) {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_procreg"));
    for var in [
        "PROCREG_CONFIG_FILE",
        "PROCREG_CAPACITY",
        "PROCREG_POLICY",
        "PROCREG_CLOCK",
        "PROCREG_LOG_LEVEL",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd.envs(envs.iter().copied());

    let output = cmd.output().expect("Failed to run procreg");
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}
