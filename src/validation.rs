//! Input validation for scheduling runs.
//!
//! Checks the process list before any simulation step runs. Detects:
//! - Empty process lists
//! - Duplicate process IDs
//! - Negative arrival times and non-positive burst times
//! - Missing priorities (priority disciplines only)
//! - Workloads whose time horizon does not fit in `i64`
//! - Non-positive round-robin quanta
//!
//! Validation is fail-fast: the first offending process is reported.

use std::collections::HashSet;

use crate::error::{ProcessField, SchedulingError, SchedulingResult};
use crate::models::Process;

/// Which optional fields a discipline needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Requirements {
    /// Every process must carry a priority.
    pub priority: bool,
}

impl Requirements {
    /// Requirements of the priority disciplines.
    pub fn with_priority() -> Self {
        Self { priority: true }
    }
}

/// Validates a process list.
///
/// Checks, in order:
/// 1. The list is non-empty
/// 2. No duplicate process IDs
/// 3. Every process has `arrival_time >= 0` and `burst_time > 0`
/// 4. Every process has a priority, if `requirements.priority`
/// 5. `max(arrival_time) + sum(burst_time)` fits in `i64`, which bounds
///    every time an engine computes
pub fn validate_processes(processes: &[Process], requirements: Requirements) -> SchedulingResult<()> {
    if processes.is_empty() {
        return Err(SchedulingError::invalid_input(
            "processes should be a non-empty list",
        ));
    }

    let mut ids = HashSet::with_capacity(processes.len());
    for p in processes {
        if !ids.insert(p.id.as_str()) {
            return Err(SchedulingError::invalid_input(format!(
                "duplicate process ID: {}",
                p.id
            )));
        }
    }

    for p in processes {
        if p.arrival_time < 0 {
            return Err(SchedulingError::invalid_process(
                &p.id,
                ProcessField::ArrivalTime,
                p.arrival_time,
            ));
        }
        if p.burst_time <= 0 {
            return Err(SchedulingError::invalid_process(
                &p.id,
                ProcessField::BurstTime,
                p.burst_time,
            ));
        }
        if requirements.priority && p.priority.is_none() {
            return Err(SchedulingError::invalid_process(
                &p.id,
                ProcessField::Priority,
                "missing",
            ));
        }
    }

    let horizon = processes
        .iter()
        .try_fold(0i64, |total, p| total.checked_add(p.burst_time))
        .and_then(|total| {
            let latest = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
            total.checked_add(latest)
        });
    if horizon.is_none() {
        return Err(SchedulingError::invalid_input(
            "latest arrival plus total burst time overflows the time range",
        ));
    }

    Ok(())
}

/// Validates a round-robin time quantum.
pub fn validate_quantum(quantum: i64) -> SchedulingResult<()> {
    if quantum <= 0 {
        return Err(SchedulingError::InvalidQuantum { quantum });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P0", 0, 5).with_priority(2),
            Process::new("P1", 1, 3).with_priority(1),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes(), Requirements::default()).is_ok());
        assert!(validate_processes(&sample_processes(), Requirements::with_priority()).is_ok());
    }

    #[test]
    fn test_empty_input() {
        let err = validate_processes(&[], Requirements::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new("P0", 0, 1), Process::new("P0", 2, 1)];
        let err = validate_processes(&processes, Requirements::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_zero_burst() {
        let processes = vec![Process::new("P0", 0, 3), Process::new("P1", 1, 0)];
        let err = validate_processes(&processes, Requirements::default()).unwrap_err();
        assert_eq!(
            err,
            SchedulingError::InvalidProcess {
                process_id: "P1".into(),
                field: ProcessField::BurstTime,
                value: "0".into(),
            }
        );
    }

    #[test]
    fn test_negative_arrival() {
        let processes = vec![Process::new("P0", -1, 3)];
        let err = validate_processes(&processes, Requirements::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidProcess);
        assert_eq!(err.process_id(), Some("P0"));
    }

    #[test]
    fn test_missing_priority_only_for_priority_disciplines() {
        let processes = vec![Process::new("P0", 0, 3)];
        assert!(validate_processes(&processes, Requirements::default()).is_ok());

        let err = validate_processes(&processes, Requirements::with_priority()).unwrap_err();
        assert!(matches!(
            err,
            SchedulingError::InvalidProcess {
                field: ProcessField::Priority,
                ..
            }
        ));
    }

    #[test]
    fn test_time_horizon_overflow() {
        let processes = vec![Process::new("P0", i64::MAX - 1, 5)];
        let err = validate_processes(&processes, Requirements::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let processes = vec![Process::new("P0", 0, i64::MAX), Process::new("P1", 0, 1)];
        let err = validate_processes(&processes, Requirements::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_time_horizon_at_limit() {
        let processes = vec![Process::new("P0", i64::MAX - 5, 5)];
        assert!(validate_processes(&processes, Requirements::default()).is_ok());
    }

    #[test]
    fn test_quantum() {
        assert!(validate_quantum(2).is_ok());
        assert_eq!(
            validate_quantum(0).unwrap_err(),
            SchedulingError::InvalidQuantum { quantum: 0 }
        );
        assert_eq!(
            validate_quantum(-3).unwrap_err().kind(),
            ErrorKind::InvalidQuantum
        );
    }
}
