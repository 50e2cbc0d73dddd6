//! Algorithm recommendation boundary.
//!
//! A recommender sees only aggregate statistics of a workload and answers
//! with an algorithm label. The engine never calls one; callers use the
//! hint to pick which discipline to run.
//!
//! `label_workload` produces the ground truth such a recommender is
//! trained on: it simulates the candidate disciplines and picks the one
//! with the lowest average waiting time.

mod features;

pub use features::WorkloadFeatures;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SchedulingError, SchedulingResult};
use crate::metrics::{throughput, ScheduleMetrics};
use crate::models::Process;
use crate::scheduler::Algorithm;

/// An advisory service that suggests an algorithm from workload features.
pub trait Recommender {
    /// Returns an algorithm label (e.g. "SRTF"), or `None` if no advice.
    fn recommend(&self, features: &WorkloadFeatures) -> Option<String>;
}

/// Asks `recommender` for a hint on `processes` and maps it to an
/// algorithm. Unknown labels yield `None`.
pub fn recommend_algorithm<R: Recommender + ?Sized>(
    recommender: &R,
    processes: &[Process],
) -> Option<Algorithm> {
    let features = WorkloadFeatures::from_processes(processes);
    let hint = recommender.recommend(&features)?;
    let algorithm = Algorithm::from_hint(&hint);
    debug!(hint = %hint, recognized = algorithm.is_some(), "recommendation received");
    algorithm
}

/// A workload labelled with its best discipline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadLabel {
    /// Workload statistics.
    pub features: WorkloadFeatures,
    /// Discipline with the lowest average waiting time.
    pub best: Algorithm,
    /// Average waiting time under `best`.
    pub best_avg_waiting_time: f64,
    /// Average turnaround time under `best`.
    pub best_avg_turnaround_time: f64,
    /// Throughput under `best`.
    pub throughput: f64,
}

/// Simulates the candidate disciplines and labels the workload with the
/// one that minimizes average waiting time.
///
/// Candidates are FCFS, SJF, and SRTF, plus both priority variants when
/// every process carries a priority and the mean priority is non-zero.
/// The first candidate wins ties.
pub fn label_workload(processes: &[Process]) -> SchedulingResult<WorkloadLabel> {
    let features = WorkloadFeatures::from_processes(processes);

    let mut candidates = vec![
        Algorithm::Fcfs,
        Algorithm::Sjf { preemptive: false },
        Algorithm::Sjf { preemptive: true },
    ];
    if processes.iter().all(Process::has_priority) && features.avg_priority != 0.0 {
        candidates.push(Algorithm::Priority { preemptive: false });
        candidates.push(Algorithm::Priority { preemptive: true });
    }

    let mut best: Option<(Algorithm, ScheduleMetrics, f64)> = None;
    for algorithm in candidates {
        let result = algorithm.run(processes)?;
        let metrics = ScheduleMetrics::calculate(processes, &result);
        debug!(
            algorithm = algorithm.label(),
            avg_waiting = metrics.average_waiting_time,
            "candidate evaluated"
        );
        let improves = match &best {
            Some((_, m, _)) => metrics.average_waiting_time < m.average_waiting_time,
            None => true,
        };
        if improves {
            let tp = throughput(processes, &result.completion_times);
            best = Some((algorithm, metrics, tp));
        }
    }

    let (best, metrics, best_throughput) = best.ok_or_else(|| {
        SchedulingError::invariant(0, None, "no candidate algorithm was evaluated")
    })?;
    Ok(WorkloadLabel {
        features,
        best,
        best_avg_waiting_time: metrics.average_waiting_time,
        best_avg_turnaround_time: metrics.average_turnaround_time,
        throughput: best_throughput,
    })
}
