//! Schedule performance metrics.
//!
//! Pure functions over `(processes, completion_times)`; every algorithm's
//! output feeds them the same way.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion − arrival |
//! | Waiting | turnaround − burst |
//! | Throughput | processes / (max completion − min arrival) |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

mod summary;

pub use summary::{ProcessMetrics, ScheduleMetrics};

use std::collections::BTreeMap;

use crate::models::{CompletionTimes, Process};

/// Turnaround time of one process, or `None` if it has no completion time.
pub fn turnaround_time(process: &Process, completion_times: &CompletionTimes) -> Option<i64> {
    completion_times
        .get(&process.id)
        .map(|&completion| completion - process.arrival_time)
}

/// Waiting time of one process, or `None` if it has no completion time.
///
/// Never negative for output of a correct engine.
pub fn waiting_time(process: &Process, completion_times: &CompletionTimes) -> Option<i64> {
    turnaround_time(process, completion_times).map(|tat| tat - process.burst_time)
}

/// Turnaround time per process id.
pub fn turnaround_times(
    processes: &[Process],
    completion_times: &CompletionTimes,
) -> BTreeMap<String, i64> {
    processes
        .iter()
        .filter_map(|p| turnaround_time(p, completion_times).map(|t| (p.id.clone(), t)))
        .collect()
}

/// Waiting time per process id.
pub fn waiting_times(
    processes: &[Process],
    completion_times: &CompletionTimes,
) -> BTreeMap<String, i64> {
    processes
        .iter()
        .filter_map(|p| waiting_time(p, completion_times).map(|t| (p.id.clone(), t)))
        .collect()
}

/// Processes completed per unit of simulated time.
///
/// When every process arrives and completes at the same instant the
/// span is zero and the throughput is the process count. Returns 0 for
/// empty input.
pub fn throughput(processes: &[Process], completion_times: &CompletionTimes) -> f64 {
    let Some(max_completion) = completion_times.values().copied().max() else {
        return 0.0;
    };
    let Some(min_arrival) = processes.iter().map(|p| p.arrival_time).min() else {
        return 0.0;
    };

    let count = processes.len() as f64;
    let span = max_completion - min_arrival;
    if span <= 0 {
        return count;
    }
    count / span as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Vec<Process>, CompletionTimes) {
        let processes = vec![Process::new("P0", 0, 5), Process::new("P1", 1, 3)];
        let completion: CompletionTimes =
            [("P0".to_string(), 5), ("P1".to_string(), 8)].into_iter().collect();
        (processes, completion)
    }

    #[test]
    fn test_turnaround_and_waiting() {
        let (processes, ct) = sample();
        assert_eq!(turnaround_time(&processes[0], &ct), Some(5));
        assert_eq!(turnaround_time(&processes[1], &ct), Some(7));
        assert_eq!(waiting_time(&processes[0], &ct), Some(0));
        assert_eq!(waiting_time(&processes[1], &ct), Some(4));
    }

    #[test]
    fn test_maps() {
        let (processes, ct) = sample();
        let tat = turnaround_times(&processes, &ct);
        let wt = waiting_times(&processes, &ct);
        assert_eq!(tat["P1"], 7);
        assert_eq!(wt["P1"], 4);
        for p in &processes {
            assert_eq!(tat[&p.id], wt[&p.id] + p.burst_time);
        }
    }

    #[test]
    fn test_missing_completion() {
        let (processes, _) = sample();
        let ct = CompletionTimes::new();
        assert_eq!(waiting_time(&processes[0], &ct), None);
        assert!(waiting_times(&processes, &ct).is_empty());
        assert!((throughput(&processes, &ct) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_throughput() {
        let (processes, ct) = sample();
        // 2 processes over [0, 8]
        assert!((throughput(&processes, &ct) - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_throughput_offset_start() {
        let processes = vec![Process::new("P0", 4, 2), Process::new("P1", 6, 2)];
        let ct: CompletionTimes =
            [("P0".to_string(), 6), ("P1".to_string(), 8)].into_iter().collect();
        assert!((throughput(&processes, &ct) - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_throughput_degenerate_span() {
        let processes = vec![Process::new("P0", 3, 1), Process::new("P1", 3, 1)];
        let ct: CompletionTimes =
            [("P0".to_string(), 3), ("P1".to_string(), 3)].into_iter().collect();
        assert!((throughput(&processes, &ct) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_throughput_empty() {
        assert!((throughput(&[], &CompletionTimes::new()) - 0.0).abs() < 1e-10);
    }
}
