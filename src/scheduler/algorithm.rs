//! Algorithm selection and simulation requests.
//!
//! `Algorithm` names one discipline plus its parameters; a
//! `SimulationRequest` pairs it with a process list and produces the
//! schedule together with its metrics.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{run_fcfs, run_priority, run_round_robin, run_sjf};
use crate::error::SchedulingResult;
use crate::metrics::ScheduleMetrics;
use crate::models::{Process, ScheduleResult};

/// Quantum used when a round-robin hint carries none.
pub const DEFAULT_QUANTUM: i64 = 2;

/// A scheduling discipline and its parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Algorithm {
    /// First-come-first-served.
    #[default]
    Fcfs,
    /// Shortest job first; preemptive form is SRTF.
    Sjf {
        /// Re-evaluate at every arrival.
        preemptive: bool,
    },
    /// Lowest priority value first.
    Priority {
        /// Re-evaluate at every arrival.
        preemptive: bool,
    },
    /// Fixed time slices from a FIFO queue.
    RoundRobin {
        /// Maximum slice length.
        quantum: i64,
    },
}

impl Algorithm {
    /// Every discipline, with round-robin at `quantum`.
    pub fn all(quantum: i64) -> [Algorithm; 6] {
        [
            Self::Fcfs,
            Self::Sjf { preemptive: false },
            Self::Sjf { preemptive: true },
            Self::Priority { preemptive: false },
            Self::Priority { preemptive: true },
            Self::RoundRobin { quantum },
        ]
    }

    /// Runs this discipline on `processes`.
    pub fn run(&self, processes: &[Process]) -> SchedulingResult<ScheduleResult> {
        match *self {
            Self::Fcfs => run_fcfs(processes),
            Self::Sjf { preemptive } => run_sjf(processes, preemptive),
            Self::Priority { preemptive } => run_priority(processes, preemptive),
            Self::RoundRobin { quantum } => run_round_robin(processes, quantum),
        }
    }

    /// Whether every process must carry a priority.
    pub fn requires_priority(&self) -> bool {
        matches!(self, Self::Priority { .. })
    }

    /// Whether a running process can lose the CPU before finishing.
    pub fn is_preemptive(&self) -> bool {
        match *self {
            Self::Fcfs => false,
            Self::Sjf { preemptive } | Self::Priority { preemptive } => preemptive,
            Self::RoundRobin { .. } => true,
        }
    }

    /// Short label used by recommendation hints.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf { preemptive: false } => "SJF",
            Self::Sjf { preemptive: true } => "SRTF",
            Self::Priority { preemptive: false } => "Priority",
            Self::Priority { preemptive: true } => "PreemptivePriority",
            Self::RoundRobin { .. } => "RoundRobin",
        }
    }

    /// Maps a recommendation label back to an algorithm.
    ///
    /// Matching is case-insensitive. Round-robin gets [`DEFAULT_QUANTUM`].
    pub fn from_hint(hint: &str) -> Option<Self> {
        let algorithm = match hint.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Self::Fcfs,
            "sjf" => Self::Sjf { preemptive: false },
            "srtf" => Self::Sjf { preemptive: true },
            "priority" => Self::Priority { preemptive: false },
            "preemptivepriority" => Self::Priority { preemptive: true },
            "roundrobin" | "rr" => Self::RoundRobin {
                quantum: DEFAULT_QUANTUM,
            },
            _ => return None,
        };
        Some(algorithm)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fcfs => f.write_str("First-Come-First-Served"),
            Self::Sjf { preemptive: false } => f.write_str("Shortest Job First"),
            Self::Sjf { preemptive: true } => f.write_str("Shortest Remaining Time First"),
            Self::Priority { preemptive: false } => f.write_str("Priority (non-preemptive)"),
            Self::Priority { preemptive: true } => f.write_str("Priority (preemptive)"),
            Self::RoundRobin { quantum } => write!(f, "Round Robin (quantum {quantum})"),
        }
    }
}

/// Input container for one simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Discipline to apply.
    #[serde(default)]
    pub algorithm: Algorithm,
}

impl SimulationRequest {
    /// Creates a FCFS request.
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            processes,
            algorithm: Algorithm::default(),
        }
    }

    /// Sets the algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Switches to round-robin with the given quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.algorithm = Algorithm::RoundRobin { quantum };
        self
    }

    /// Runs the simulation and derives its metrics.
    pub fn run(&self) -> SchedulingResult<Simulation> {
        info!(
            algorithm = self.algorithm.label(),
            processes = self.processes.len(),
            "simulation started"
        );
        let result = self.algorithm.run(&self.processes)?;
        let metrics = ScheduleMetrics::calculate(&self.processes, &result);
        info!(
            algorithm = self.algorithm.label(),
            makespan = result.makespan(),
            segments = result.segment_count(),
            avg_waiting = metrics.average_waiting_time,
            "simulation finished"
        );
        Ok(Simulation {
            algorithm: self.algorithm,
            result,
            metrics,
        })
    }
}

/// Output of one simulation: the schedule and its metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Simulation {
    /// Discipline that produced the schedule.
    pub algorithm: Algorithm,
    /// Schedule and completion times.
    pub result: ScheduleResult,
    /// Waiting, turnaround, and throughput.
    pub metrics: ScheduleMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn sample() -> Vec<Process> {
        vec![
            Process::new("P0", 0, 5).with_priority(2),
            Process::new("P1", 1, 3).with_priority(1),
        ]
    }

    #[test]
    fn test_hint_round_trip() {
        for algorithm in Algorithm::all(DEFAULT_QUANTUM) {
            assert_eq!(Algorithm::from_hint(algorithm.label()), Some(algorithm));
        }
        assert_eq!(Algorithm::from_hint(" srtf "), Some(Algorithm::Sjf { preemptive: true }));
        assert_eq!(Algorithm::from_hint("lottery"), None);
    }

    #[test]
    fn test_flags() {
        assert!(Algorithm::Priority { preemptive: false }.requires_priority());
        assert!(!Algorithm::Sjf { preemptive: true }.requires_priority());
        assert!(Algorithm::RoundRobin { quantum: 1 }.is_preemptive());
        assert!(!Algorithm::Fcfs.is_preemptive());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Algorithm::RoundRobin { quantum: 4 }.to_string(),
            "Round Robin (quantum 4)"
        );
        assert_eq!(
            Algorithm::Sjf { preemptive: true }.to_string(),
            "Shortest Remaining Time First"
        );
    }

    #[test]
    fn test_algorithm_json() {
        let json = serde_json::to_string(&Algorithm::RoundRobin { quantum: 3 }).unwrap();
        assert_eq!(json, r#"{"kind":"round_robin","quantum":3}"#);
        let parsed: Algorithm = serde_json::from_str(r#"{"kind":"fcfs"}"#).unwrap();
        assert_eq!(parsed, Algorithm::Fcfs);
    }

    #[test]
    fn test_request_runs_with_metrics() {
        let sim = SimulationRequest::new(sample())
            .with_algorithm(Algorithm::Sjf { preemptive: true })
            .run()
            .unwrap();
        assert_eq!(sim.result.completion_time("P1"), Some(4));
        assert_eq!(sim.result.completion_time("P0"), Some(8));
        // P0 waits 3, P1 waits 0
        assert!((sim.metrics.average_waiting_time - 1.5).abs() < 1e-10);
        assert!((sim.metrics.throughput - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_request_with_quantum() {
        let req = SimulationRequest::new(sample()).with_quantum(2);
        assert_eq!(req.algorithm, Algorithm::RoundRobin { quantum: 2 });
        assert!(req.run().is_ok());
    }

    #[test]
    fn test_request_propagates_errors() {
        let err = SimulationRequest::new(sample())
            .with_quantum(0)
            .run()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidQuantum);
    }

    #[test]
    fn test_request_json_defaults_to_fcfs() {
        let json = r#"{"processes":[{"id":"P0","arrivalTime":0,"burstTime":2}]}"#;
        let req: SimulationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.algorithm, Algorithm::Fcfs);
        let sim = req.run().unwrap();
        assert_eq!(sim.result.makespan(), 2);
    }
}
