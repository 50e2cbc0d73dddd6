//! Round-robin engine.
//!
//! # Algorithm
//!
//! 1. Release every job that has arrived by `now` to the queue tail.
//! 2. If the queue is empty, jump `now` to the next arrival.
//! 3. Dequeue the head and run it for `min(quantum, remaining)`.
//! 4. Release jobs that arrived during the slice, then re-enqueue the
//!    job that just ran (if unfinished), so newcomers go first.

use std::collections::VecDeque;

use tracing::debug;

use super::job::Workload;
use crate::error::{SchedulingError, SchedulingResult};
use crate::models::{Process, ScheduleResult};

/// Runs processes round-robin with the given time quantum.
///
/// Expects validated input and a positive quantum.
pub(crate) fn run_time_sliced(
    processes: &[Process],
    quantum: i64,
) -> SchedulingResult<ScheduleResult> {
    let mut workload = Workload::new(processes);
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(workload.len());
    let mut result = ScheduleResult::new();
    let mut now = workload.next_arrival().unwrap_or(0);
    let mut completed = 0;

    while completed < workload.len() {
        workload.admit(now, &mut queue);

        let Some(index) = queue.pop_front() else {
            match workload.next_arrival() {
                Some(next) => {
                    debug!(from = now, to = next, "cpu idle");
                    now = next;
                    continue;
                }
                None => {
                    return Err(SchedulingError::invariant(
                        now,
                        None,
                        "ready queue empty while work remains",
                    ));
                }
            }
        };

        let job = workload.job_mut(index);
        let slice = quantum.min(job.remaining_time);
        let id = job.id;
        job.remaining_time -= slice;
        let finished = job.is_finished();

        debug!(process = id, start = now, end = now + slice, "slice");
        result.push_segment(id, now, now + slice);
        now += slice;

        workload.admit(now, &mut queue);
        if finished {
            result.record_completion(id, now);
            completed += 1;
        } else {
            queue.push_back(index);
        }
    }

    Ok(result)
}
