//! Per-process metric rows and their averages.
//!
//! This is the data a summary table renders: one row per process plus
//! column averages and overall throughput.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{throughput, turnaround_time, waiting_time};
use crate::models::{CompletionTimes, Process, ScheduleResult};

/// Metrics of one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessMetrics {
    /// Process id.
    pub id: String,
    /// Arrival time.
    pub arrival_time: i64,
    /// Burst time.
    pub burst_time: i64,
    /// Completion time.
    pub completion_time: i64,
    /// Time spent ready but not running.
    pub waiting_time: i64,
    /// Completion minus arrival.
    pub turnaround_time: i64,
}

/// Schedule performance summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleMetrics {
    /// Rows in input order.
    pub processes: Vec<ProcessMetrics>,
    /// Mean waiting time over all rows.
    pub average_waiting_time: f64,
    /// Mean turnaround time over all rows.
    pub average_turnaround_time: f64,
    /// Processes per unit time.
    pub throughput: f64,
}

impl ScheduleMetrics {
    /// Computes metrics from a scheduling result.
    pub fn calculate(processes: &[Process], result: &ScheduleResult) -> Self {
        Self::from_completion_times(processes, &result.completion_times)
    }

    /// Computes metrics from completion times.
    ///
    /// Processes without a completion time are skipped.
    pub fn from_completion_times(processes: &[Process], completion_times: &CompletionTimes) -> Self {
        let mut rows = Vec::with_capacity(processes.len());

        for p in processes {
            let (Some(&completion), Some(waiting), Some(turnaround)) = (
                completion_times.get(&p.id),
                waiting_time(p, completion_times),
                turnaround_time(p, completion_times),
            ) else {
                warn!(process = %p.id, "no completion time, skipped");
                continue;
            };

            if waiting < 0 {
                warn!(process = %p.id, waiting = waiting, "negative waiting time");
            }

            rows.push(ProcessMetrics {
                id: p.id.clone(),
                arrival_time: p.arrival_time,
                burst_time: p.burst_time,
                completion_time: completion,
                waiting_time: waiting,
                turnaround_time: turnaround,
            });
        }

        let (average_waiting_time, average_turnaround_time) = if rows.is_empty() {
            (0.0, 0.0)
        } else {
            let n = rows.len() as f64;
            let total_wt: i64 = rows.iter().map(|r| r.waiting_time).sum();
            let total_tat: i64 = rows.iter().map(|r| r.turnaround_time).sum();
            (total_wt as f64 / n, total_tat as f64 / n)
        };

        Self {
            processes: rows,
            average_waiting_time,
            average_turnaround_time,
            throughput: throughput(processes, completion_times),
        }
    }

    /// Row for one process.
    pub fn row(&self, process_id: &str) -> Option<&ProcessMetrics> {
        self.processes.iter().find(|r| r.id == process_id)
    }

    /// Sum of waiting times.
    pub fn total_waiting_time(&self) -> i64 {
        self.processes.iter().map(|r| r.waiting_time).sum()
    }
}
