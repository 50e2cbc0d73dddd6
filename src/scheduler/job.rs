//! Engine-owned working records.
//!
//! Each run copies the caller's processes into `Job`s indexed by input
//! position. Remaining time is tracked here, never on the caller's
//! `Process`, so nothing leaks across calls.

use crate::models::Process;

/// Run-time state of one process during a single simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job<'a> {
    /// Position in the caller's process list.
    pub index: usize,
    /// Process identifier.
    pub id: &'a str,
    /// Arrival time.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Priority value (0 when the process carries none).
    pub priority: i32,
    /// CPU time still owed.
    pub remaining_time: i64,
}

impl<'a> Job<'a> {
    fn from_process(index: usize, process: &'a Process) -> Self {
        Self {
            index,
            id: &process.id,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority.unwrap_or(0),
            remaining_time: process.burst_time,
        }
    }

    /// Whether all burst time has been served.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time <= 0
    }
}

/// All jobs of one run plus the not-yet-arrived cursor.
///
/// Jobs are released in `(arrival_time, index)` order, so equal arrivals
/// keep their input order.
#[derive(Debug, Clone)]
pub(crate) struct Workload<'a> {
    jobs: Vec<Job<'a>>,
    arrival_order: Vec<usize>,
    cursor: usize,
}

impl<'a> Workload<'a> {
    pub(crate) fn new(processes: &'a [Process]) -> Self {
        let jobs: Vec<Job<'a>> = processes
            .iter()
            .enumerate()
            .map(|(i, p)| Job::from_process(i, p))
            .collect();

        let mut arrival_order: Vec<usize> = (0..jobs.len()).collect();
        arrival_order.sort_by_key(|&i| (jobs[i].arrival_time, i));

        Self {
            jobs,
            arrival_order,
            cursor: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.jobs.len()
    }

    pub(crate) fn jobs(&self) -> &[Job<'a>] {
        &self.jobs
    }

    pub(crate) fn job(&self, index: usize) -> &Job<'a> {
        &self.jobs[index]
    }

    pub(crate) fn job_mut(&mut self, index: usize) -> &mut Job<'a> {
        &mut self.jobs[index]
    }

    /// Arrival time of the next job not yet released.
    pub(crate) fn next_arrival(&self) -> Option<i64> {
        self.arrival_order
            .get(self.cursor)
            .map(|&i| self.jobs[i].arrival_time)
    }

    /// Releases every job with `arrival_time <= now` into `ready`, in
    /// arrival order. Returns the number released.
    pub(crate) fn admit<E: Extend<usize>>(&mut self, now: i64, ready: &mut E) -> usize {
        let start = self.cursor;
        while let Some(&i) = self.arrival_order.get(self.cursor) {
            if self.jobs[i].arrival_time > now {
                break;
            }
            self.cursor += 1;
        }
        ready.extend(self.arrival_order[start..self.cursor].iter().copied());
        self.cursor - start
    }
}
