//! procreg - replay a workload against a bounded process registry
//!
//! Configuration comes from the environment (see `config.rs`). Step results
//! and `list` tables go to stdout, logs to stderr.

mod config;

use chrono::{DateTime, Local};
use config::{ClockKind, ProcregConfig};
use procreg_engine::constants::{clock::DEFAULT_STEP_SEC, logging::DEFAULT_LOG_LEVEL};
use procreg_engine::domain::ports::Clock;
use procreg_engine::domain::Process;
use procreg_engine::infrastructure::{RegistryConfig, SteppingClock, SystemClock, WorkloadStep};
use procreg_engine::{DomainError, ProcessRegistry};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ProcregConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level)
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
        )
        .with_writer(std::io::stderr)
        .init();

    config.validate()?;
    let registry_config = config.registry_config()?;

    let clock: Arc<dyn Clock> = match config.clock {
        ClockKind::System => Arc::new(SystemClock::new()),
        ClockKind::Stepping => Arc::new(SteppingClock::new(
            UNIX_EPOCH,
            Duration::from_secs(DEFAULT_STEP_SEC),
        )),
    };

    let registry = ProcessRegistry::from_config(&registry_config, clock)?;

    info!(
        capacity = registry.capacity(),
        policy = registry.policy_name(),
        steps = registry_config.workload.len(),
        "Starting workload replay"
    );

    replay(&registry, &registry_config)?;

    info!(remaining_processes = registry.len(), "Workload replay finished");
    Ok(())
}

fn replay(registry: &ProcessRegistry, config: &RegistryConfig) -> Result<(), DomainError> {
    for (index, step) in config.workload.iter().enumerate() {
        let step_no = index + 1;

        if let Some(process) = step.to_process() {
            let id = process.id();
            match registry.add(process) {
                Ok(Some(evicted)) => {
                    println!("step {}: added {} (evicted {})", step_no, id, evicted.id())
                }
                Ok(None) => println!("step {}: added {}", step_no, id),
                Err(e) if e.is_capacity_exhausted() => {
                    warn!(step = step_no, process_id = %id, "Add rejected");
                    println!("step {}: rejected {}: {}", step_no, id, e);
                }
                Err(e) => return Err(e),
            }
        } else if let Some(selector) = step.kill_selector() {
            let killed = registry.kill(selector);
            let ids: Vec<String> = killed.iter().map(ToString::to_string).collect();
            println!("step {}: killed [{}]", step_no, ids.join(", "));
        } else if let WorkloadStep::List { order } = step {
            println!("step {}: list {}", step_no, order);
            print_table(&registry.list(*order));
        }
    }

    Ok(())
}

fn print_table(processes: &[Process]) {
    if processes.is_empty() {
        println!("No processes");
        return;
    }

    println!(
        "{:<10}  {:<10}  {:<10}  {:<19}",
        "ID", "PRIORITY", "STATE", "ADMITTED"
    );
    println!("{:-<10}  {:-<10}  {:-<10}  {:-<19}", "", "", "", "");

    for p in processes {
        println!(
            "{:<10}  {:<10}  {:<10}  {:<19}",
            p.id().to_string(),
            p.priority().to_string(),
            p.state().to_string(),
            format_admitted(p.admitted_at())
        );
    }
}

/// Format an admission time as local date/time
fn format_admitted(at: Option<SystemTime>) -> String {
    match at {
        Some(at) => DateTime::<Local>::from(at)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => "-".to_string(),
    }
}
