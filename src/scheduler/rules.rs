//! Ready-set selection rules.
//!
//! Every decision an engine makes is "which ready job runs next". A rule
//! answers it with a primary key (lower runs first) and an explicit
//! tie-breaker, so ordering never depends on sort stability.
//!
//! | Rule | Key | Tie-break |
//! |------|-----|-----------|
//! | `FirstCome` | arrival time | arrival order |
//! | `ShortestJob` | burst time | arrival order |
//! | `ShortestRemaining` | remaining time | process id |
//! | `HighestPriority` | priority value | arrival order |
//!
//! Under preemption a newcomer with the same priority as the running job
//! does not take the CPU: the running job arrived earlier and wins the
//! arrival-order tie-break. A FIFO ready queue that re-queues the running
//! job behind newcomers would hand the CPU over instead.

use std::cmp::Ordering;
use std::fmt::Debug;

use super::job::Job;

/// How ties on the primary key are broken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Earlier arrival first, then earlier input position.
    #[default]
    ArrivalOrder,
    /// Ascending process id (lexicographic).
    ById,
}

impl TieBreaker {
    /// Compares two jobs whose primary keys are equal.
    pub fn compare(&self, a: &Job<'_>, b: &Job<'_>) -> Ordering {
        match self {
            Self::ArrivalOrder => (a.arrival_time, a.index).cmp(&(b.arrival_time, b.index)),
            Self::ById => a.id.cmp(b.id).then(a.index.cmp(&b.index)),
        }
    }
}

/// A rule that ranks ready jobs.
///
/// # Key Convention
/// **Lower key = runs first.**
pub trait SelectionRule: Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Primary ranking key.
    fn key(&self, job: &Job<'_>) -> i64;

    /// Secondary ordering on equal keys.
    fn tie_breaker(&self) -> TieBreaker {
        TieBreaker::ArrivalOrder
    }

    /// Total order over jobs.
    fn compare(&self, a: &Job<'_>, b: &Job<'_>) -> Ordering {
        self.key(a)
            .cmp(&self.key(b))
            .then_with(|| self.tie_breaker().compare(a, b))
    }
}

/// Earliest arrival first.
#[derive(Debug, Clone, Copy)]
pub struct FirstCome;

impl SelectionRule for FirstCome {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn key(&self, job: &Job<'_>) -> i64 {
        job.arrival_time
    }
}

/// Shortest total burst first.
#[derive(Debug, Clone, Copy)]
pub struct ShortestJob;

impl SelectionRule for ShortestJob {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn key(&self, job: &Job<'_>) -> i64 {
        job.burst_time
    }
}

/// Shortest remaining time first.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn key(&self, job: &Job<'_>) -> i64 {
        job.remaining_time
    }

    fn tie_breaker(&self) -> TieBreaker {
        TieBreaker::ById
    }
}

/// Lowest priority value first.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, job: &Job<'_>) -> i64 {
        i64::from(job.priority)
    }
}

/// Position in `ready` of the job the rule picks, or `None` if `ready`
/// is empty.
pub(crate) fn select_best<R: SelectionRule + ?Sized>(
    rule: &R,
    jobs: &[Job<'_>],
    ready: &[usize],
) -> Option<usize> {
    ready
        .iter()
        .enumerate()
        .min_by(|a, b| rule.compare(&jobs[*a.1], &jobs[*b.1]))
        .map(|(pos, _)| pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(index: usize, id: &'static str, arrival: i64, burst: i64, priority: i32) -> Job<'static> {
        Job {
            index,
            id,
            arrival_time: arrival,
            burst_time: burst,
            priority,
            remaining_time: burst,
        }
    }

    #[test]
    fn test_first_come() {
        let jobs = vec![job(0, "A", 3, 1, 0), job(1, "B", 1, 9, 0)];
        assert_eq!(select_best(&FirstCome, &jobs, &[0, 1]), Some(1));
    }

    #[test]
    fn test_shortest_job_ties_keep_arrival_order() {
        let jobs = vec![
            job(0, "late", 2, 4, 0),
            job(1, "early", 1, 4, 0),
            job(2, "long", 0, 9, 0),
        ];
        let pos = select_best(&ShortestJob, &jobs, &[0, 1, 2]).unwrap();
        assert_eq!(pos, 1);
    }

    #[test]
    fn test_shortest_remaining_ties_by_id() {
        let mut jobs = vec![job(0, "P2", 0, 8, 0), job(1, "P1", 1, 3, 0)];
        jobs[0].remaining_time = 3;
        // Equal remaining time → "P1" < "P2"
        assert_eq!(select_best(&ShortestRemaining, &jobs, &[0, 1]), Some(1));
    }

    #[test]
    fn test_highest_priority_lower_value_wins() {
        let jobs = vec![job(0, "A", 0, 5, 3), job(1, "B", 0, 5, 1)];
        assert_eq!(select_best(&HighestPriority, &jobs, &[0, 1]), Some(1));
    }

    #[test]
    fn test_highest_priority_tie_uses_input_order() {
        let jobs = vec![job(0, "X", 0, 5, 1), job(1, "Y", 0, 2, 1)];
        assert_eq!(select_best(&HighestPriority, &jobs, &[1, 0]), Some(1));
    }

    #[test]
    fn test_empty_ready_set() {
        assert_eq!(select_best(&FirstCome, &[], &[]), None);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(FirstCome.name(), "FCFS");
        assert_eq!(ShortestJob.name(), "SJF");
        assert_eq!(ShortestRemaining.name(), "SRTF");
        assert_eq!(HighestPriority.name(), "PRIORITY");
    }
}
