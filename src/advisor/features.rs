//! Aggregate workload statistics.

use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Summary statistics of a process set, as sent to a recommender.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkloadFeatures {
    /// Mean arrival time.
    pub avg_arrival: f64,
    /// Mean burst time.
    pub avg_burst: f64,
    /// Mean priority over processes that carry one (0 if none do).
    pub avg_priority: f64,
    /// Sample standard deviation of burst times (n - 1 divisor, 0 for a
    /// single process).
    pub std_burst: f64,
    /// Number of processes.
    pub num_processes: usize,
}

impl WorkloadFeatures {
    /// Computes features from a process list. Empty input yields zeros.
    pub fn from_processes(processes: &[Process]) -> Self {
        if processes.is_empty() {
            return Self::default();
        }

        let n = processes.len() as f64;
        let avg_arrival = processes.iter().map(|p| p.arrival_time as f64).sum::<f64>() / n;
        let avg_burst = processes.iter().map(|p| p.burst_time as f64).sum::<f64>() / n;

        let priorities: Vec<f64> = processes
            .iter()
            .filter_map(|p| p.priority.map(f64::from))
            .collect();
        let avg_priority = if priorities.is_empty() {
            0.0
        } else {
            priorities.iter().sum::<f64>() / priorities.len() as f64
        };

        let variance = if processes.len() < 2 {
            0.0
        } else {
            processes
                .iter()
                .map(|p| (p.burst_time as f64 - avg_burst).powi(2))
                .sum::<f64>()
                / (n - 1.0)
        };

        Self {
            avg_arrival,
            avg_burst,
            avg_priority,
            std_burst: variance.sqrt(),
            num_processes: processes.len(),
        }
    }
}
