//! Single-CPU scheduling engine.
//!
//! One entry point per discipline. Each validates its input, builds
//! engine-owned working records, and returns a [`ScheduleResult`]. No
//! state survives between calls.
//!
//! | Entry point | Engine | Selection | Tie-break |
//! |-------------|--------|-----------|-----------|
//! | `run_fcfs` | run-to-completion | earliest arrival | input order |
//! | `run_sjf(false)` | run-to-completion | shortest burst | arrival order |
//! | `run_sjf(true)` | preemptive (SRTF) | shortest remaining | process id |
//! | `run_priority(false)` | run-to-completion | lowest priority value | arrival order |
//! | `run_priority(true)` | preemptive | lowest priority value | arrival order |
//! | `run_round_robin` | time-sliced | FIFO queue head | arrival order |
//!
//! # Example
//!
//! ```
//! use u_cpu_sched::models::{ExecutionSegment, Process};
//! use u_cpu_sched::scheduler::run_sjf;
//!
//! let processes = vec![Process::new("P0", 0, 5), Process::new("P1", 1, 3)];
//! let result = run_sjf(&processes, true).unwrap();
//!
//! assert_eq!(result.schedule[1], ExecutionSegment::new("P1", 1, 4));
//! assert_eq!(result.completion_time("P0"), Some(8));
//! ```
//!
//! Working records and selection rules stay inside the engine:
//!
//! ```compile_fail
//! use u_cpu_sched::scheduler::rules::SelectionRule;
//! ```
//!
//! ```compile_fail
//! use u_cpu_sched::scheduler::Job;
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod algorithm;
mod job;
mod non_preemptive;
mod preemptive;
mod round_robin;
mod rules;

pub use algorithm::{Algorithm, Simulation, SimulationRequest, DEFAULT_QUANTUM};

use tracing::debug;

use crate::error::SchedulingResult;
use crate::models::{Process, ScheduleResult};
use crate::validation::{validate_processes, validate_quantum, Requirements};
use rules::{FirstCome, HighestPriority, ShortestJob, ShortestRemaining};

/// First-come-first-served.
pub fn run_fcfs(processes: &[Process]) -> SchedulingResult<ScheduleResult> {
    validate_processes(processes, Requirements::default())?;
    debug!(processes = processes.len(), "running FCFS");
    non_preemptive::run_to_completion(processes, &FirstCome)
}

/// Shortest job first; `preemptive` selects SRTF.
pub fn run_sjf(processes: &[Process], preemptive: bool) -> SchedulingResult<ScheduleResult> {
    validate_processes(processes, Requirements::default())?;
    debug!(processes = processes.len(), preemptive, "running SJF");
    if preemptive {
        preemptive::run_preemptive(processes, &ShortestRemaining)
    } else {
        non_preemptive::run_to_completion(processes, &ShortestJob)
    }
}

/// Priority scheduling (lower value = higher priority).
pub fn run_priority(processes: &[Process], preemptive: bool) -> SchedulingResult<ScheduleResult> {
    validate_processes(processes, Requirements::with_priority())?;
    debug!(processes = processes.len(), preemptive, "running priority");
    if preemptive {
        preemptive::run_preemptive(processes, &HighestPriority)
    } else {
        non_preemptive::run_to_completion(processes, &HighestPriority)
    }
}

/// Round-robin with a positive time quantum.
pub fn run_round_robin(processes: &[Process], quantum: i64) -> SchedulingResult<ScheduleResult> {
    validate_processes(processes, Requirements::default())?;
    validate_quantum(quantum)?;
    debug!(processes = processes.len(), quantum, "running round robin");
    round_robin::run_time_sliced(processes, quantum)
}
