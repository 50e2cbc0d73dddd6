//! Schedule (result contract) model.
//!
//! A `ScheduleResult` is the shape every algorithm returns and every
//! consumer (metrics, renderers) reads: the time-ordered execution
//! segments plus each process's completion time.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Completion time per process id.
pub type CompletionTimes = BTreeMap<String, i64>;

/// A contiguous interval during which one process held the CPU.
///
/// Invariant: `end_time > start_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionSegment {
    /// Running process.
    pub process_id: String,
    /// Start time (inclusive).
    pub start_time: i64,
    /// End time (exclusive).
    pub end_time: i64,
}

impl ExecutionSegment {
    /// Creates a new segment.
    pub fn new(process_id: impl Into<String>, start_time: i64, end_time: i64) -> Self {
        Self {
            process_id: process_id.into(),
            start_time,
            end_time,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }
}

/// Output of one scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResult {
    /// Execution segments ordered by start time.
    pub schedule: Vec<ExecutionSegment>,
    /// Completion time per process id.
    pub completion_times: CompletionTimes,
}

impl ScheduleResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment, extending the previous one when it belongs to
    /// the same process and ends exactly where this one starts.
    ///
    /// Empty intervals are ignored.
    pub fn push_segment(&mut self, process_id: &str, start_time: i64, end_time: i64) {
        if end_time <= start_time {
            return;
        }
        if let Some(last) = self.schedule.last_mut() {
            if last.process_id == process_id && last.end_time == start_time {
                last.end_time = end_time;
                return;
            }
        }
        self.schedule
            .push(ExecutionSegment::new(process_id, start_time, end_time));
    }

    /// Records when a process finished its last unit of work.
    pub fn record_completion(&mut self, process_id: &str, time: i64) {
        self.completion_times.insert(process_id.to_string(), time);
    }

    /// Completion time of one process.
    pub fn completion_time(&self, process_id: &str) -> Option<i64> {
        self.completion_times.get(process_id).copied()
    }

    /// Latest completion time, or 0 for an empty result.
    pub fn makespan(&self) -> i64 {
        self.completion_times.values().copied().max().unwrap_or(0)
    }

    /// Segments belonging to one process, in time order.
    pub fn segments_for(&self, process_id: &str) -> Vec<&ExecutionSegment> {
        self.schedule
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Total time the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.schedule.iter().map(ExecutionSegment::duration).sum()
    }

    /// Gaps between consecutive segments where no process was ready.
    pub fn idle_periods(&self) -> Vec<(i64, i64)> {
        self.schedule
            .windows(2)
            .filter(|w| w[1].start_time > w[0].end_time)
            .map(|w| (w[0].end_time, w[1].start_time))
            .collect()
    }

    /// Number of segments.
    pub fn segment_count(&self) -> usize {
        self.schedule.len()
    }
}
