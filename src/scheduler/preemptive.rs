//! Preemptive engine (SRTF, preemptive priority).
//!
//! # Algorithm
//!
//! At time `now`:
//! 1. Release every job with `arrival_time <= now` into the ready set.
//! 2. Pick the best ready job by the selection rule.
//! 3. Run it until `min(now + remaining, next_arrival)`.
//! 4. If its remaining time hits zero, record completion and drop it;
//!    otherwise it stays ready and is re-ranked at the next decision.
//!
//! Decisions happen only at arrivals and completions, never per time
//! unit. A slice of zero length means the loop cannot advance; it is
//! reported as `InternalInvariantViolation` instead of nudging time.

use tracing::{debug, error};

use super::job::Workload;
use super::rules::{select_best, SelectionRule};
use crate::error::{SchedulingError, SchedulingResult};
use crate::models::{Process, ScheduleResult};

/// Runs processes with preemption at every arrival.
///
/// Expects validated input.
pub(crate) fn run_preemptive<R: SelectionRule + ?Sized>(
    processes: &[Process],
    rule: &R,
) -> SchedulingResult<ScheduleResult> {
    let mut workload = Workload::new(processes);
    let mut ready: Vec<usize> = Vec::with_capacity(workload.len());
    let mut result = ScheduleResult::new();
    let mut now = workload.next_arrival().unwrap_or(0);
    let mut completed = 0;

    while completed < workload.len() {
        workload.admit(now, &mut ready);

        let Some(pos) = select_best(rule, workload.jobs(), &ready) else {
            match workload.next_arrival() {
                Some(next) => {
                    debug!(rule = rule.name(), from = now, to = next, "cpu idle");
                    now = next;
                    continue;
                }
                None => {
                    return Err(SchedulingError::invariant(
                        now,
                        None,
                        "no ready or pending process while work remains",
                    ));
                }
            }
        };

        let next_arrival = workload.next_arrival();
        let job = workload.job_mut(ready[pos]);
        let until = match next_arrival {
            Some(arrival) => (now + job.remaining_time).min(arrival),
            None => now + job.remaining_time,
        };
        let slice = until - now;

        if slice <= 0 {
            error!(
                rule = rule.name(),
                process = job.id,
                time = now,
                remaining = job.remaining_time,
                "zero-length slice"
            );
            return Err(SchedulingError::invariant(
                now,
                Some(job.id),
                format!("slice of length {slice} would not advance time"),
            ));
        }

        debug!(rule = rule.name(), process = job.id, start = now, end = until, "run");
        result.push_segment(job.id, now, until);
        job.remaining_time -= slice;
        now = until;

        if job.is_finished() {
            result.record_completion(job.id, now);
            ready.swap_remove(pos);
            completed += 1;
        }
    }

    Ok(result)
}
