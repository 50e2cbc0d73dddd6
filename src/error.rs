//! Error types for scheduling runs.
//!
//! Every failure aborts the current call. Validation errors are raised
//! before any segment is produced, so a caller never sees a partial
//! schedule.

use std::fmt;

/// Result alias used by the engine entry points.
pub type SchedulingResult<T> = Result<T, SchedulingError>;

/// A process field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessField {
    /// `arrival_time < 0`.
    ArrivalTime,
    /// `burst_time <= 0`.
    BurstTime,
    /// Missing priority on a priority discipline.
    Priority,
}

impl fmt::Display for ProcessField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ArrivalTime => "arrival_time",
            Self::BurstTime => "burst_time",
            Self::Priority => "priority",
        };
        f.write_str(name)
    }
}

/// Categories of scheduling errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The process list is empty or malformed as a whole.
    InvalidInput,
    /// A single process carries an invalid field.
    InvalidProcess,
    /// Round-robin quantum is not positive.
    InvalidQuantum,
    /// The simulation stopped making progress.
    InternalInvariantViolation,
}

/// A scheduling error with full diagnostic context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    /// The process list is empty or malformed (e.g. duplicate ids).
    InvalidInput {
        /// Human-readable description.
        reason: String,
    },
    /// One process failed validation.
    InvalidProcess {
        /// Offending process id.
        process_id: String,
        /// Offending field.
        field: ProcessField,
        /// Offending value, rendered for diagnostics.
        value: String,
    },
    /// Round-robin quantum is zero or negative.
    InvalidQuantum {
        /// The rejected quantum.
        quantum: i64,
    },
    /// A simulation step would not advance time.
    InternalInvariantViolation {
        /// Simulated time at which the step was attempted.
        time: i64,
        /// Process selected for the step, if one was.
        process_id: Option<String>,
        /// Description of the broken invariant.
        detail: String,
    },
}

impl SchedulingError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn invariant(time: i64, process_id: Option<&str>, detail: impl Into<String>) -> Self {
        Self::InternalInvariantViolation {
            time,
            process_id: process_id.map(str::to_string),
            detail: detail.into(),
        }
    }

    pub(crate) fn invalid_process(
        process_id: impl Into<String>,
        field: ProcessField,
        value: impl fmt::Display,
    ) -> Self {
        Self::InvalidProcess {
            process_id: process_id.into(),
            field,
            value: value.to_string(),
        }
    }

    /// Error category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::InvalidProcess { .. } => ErrorKind::InvalidProcess,
            Self::InvalidQuantum { .. } => ErrorKind::InvalidQuantum,
            Self::InternalInvariantViolation { .. } => ErrorKind::InternalInvariantViolation,
        }
    }

    /// Id of the process the error refers to, if any.
    pub fn process_id(&self) -> Option<&str> {
        match self {
            Self::InvalidProcess { process_id, .. } => Some(process_id),
            Self::InternalInvariantViolation { process_id, .. } => process_id.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for SchedulingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => write!(f, "invalid input: {reason}"),
            Self::InvalidProcess {
                process_id,
                field: ProcessField::Priority,
                value,
            } => write!(f, "invalid process '{process_id}': priority is {value}"),
            Self::InvalidProcess {
                process_id,
                field,
                value,
            } => write!(
                f,
                "invalid process '{process_id}': {field} = {value} is out of range"
            ),
            Self::InvalidQuantum { quantum } => {
                write!(f, "invalid quantum: {quantum} (must be positive)")
            }
            Self::InternalInvariantViolation {
                time,
                process_id: Some(process_id),
                detail,
            } => write!(
                f,
                "internal invariant violated at t={time} running '{process_id}': {detail}"
            ),
            Self::InternalInvariantViolation {
                time,
                process_id: None,
                detail,
            } => write!(f, "internal invariant violated at t={time}: {detail}"),
        }
    }
}

impl std::error::Error for SchedulingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            SchedulingError::invalid_input("empty").kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            SchedulingError::InvalidQuantum { quantum: 0 }.kind(),
            ErrorKind::InvalidQuantum
        );
        let e = SchedulingError::invalid_process("P3", ProcessField::BurstTime, 0);
        assert_eq!(e.kind(), ErrorKind::InvalidProcess);
        assert_eq!(e.process_id(), Some("P3"));
    }

    #[test]
    fn test_display_names_offender() {
        let e = SchedulingError::invalid_process("P7", ProcessField::ArrivalTime, -2);
        let msg = e.to_string();
        assert!(msg.contains("P7"));
        assert!(msg.contains("arrival_time"));
        assert!(msg.contains("-2"));
    }

    #[test]
    fn test_invariant_without_process() {
        let e = SchedulingError::invariant(12, None, "ready set empty with work remaining");
        assert_eq!(e.kind(), ErrorKind::InternalInvariantViolation);
        assert_eq!(e.process_id(), None);
        assert!(e.to_string().starts_with("internal invariant violated at t=12"));
    }

    #[test]
    fn test_missing_priority_display() {
        let e = SchedulingError::invalid_process("P1", ProcessField::Priority, "missing");
        assert_eq!(
            e.to_string(),
            "invalid process 'P1': priority is missing"
        );
    }
}
