//! Run-to-completion engine (FCFS, SJF, non-preemptive priority).
//!
//! # Algorithm
//!
//! 1. Release every job that has arrived by `now` into the ready set.
//! 2. If the ready set is empty, jump `now` to the next arrival.
//! 3. Otherwise pick the best job by the selection rule and run it for
//!    its whole burst.
//!
//! # Complexity
//! O(n²) in the worst case (one ready-set scan per job).

use tracing::debug;

use super::job::Workload;
use super::rules::{select_best, SelectionRule};
use crate::error::{SchedulingError, SchedulingResult};
use crate::models::{Process, ScheduleResult};

/// Runs every process to completion in the order chosen by `rule`.
///
/// Expects validated input.
pub(crate) fn run_to_completion<R: SelectionRule + ?Sized>(
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

        let job = workload.job(ready.swap_remove(pos));
        let end = now + job.burst_time;
        debug!(rule = rule.name(), process = job.id, start = now, end = end, "dispatch");

        result.push_segment(job.id, now, end);
        result.record_completion(job.id, end);
        now = end;
        completed += 1;
    }

    Ok(result)
}
