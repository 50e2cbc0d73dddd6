//! Process model.
//!
//! A process is the unit of work handed to the CPU. It is caller-owned
//! and never mutated by the engine; run-time state (remaining time)
//! lives in engine-owned working records.

use serde::{Deserialize, Serialize};

/// A process to be scheduled on the single CPU.
///
/// # Time Representation
/// All times are integer simulated time units relative to t=0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Time at which the process becomes eligible to run (>= 0).
    pub arrival_time: i64,
    /// Total CPU time required (> 0).
    pub burst_time: i64,
    /// Scheduling priority (lower = more urgent). Only read by the
    /// priority disciplines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl Process {
    /// Creates a process without a priority.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: None,
        }
    }

    /// Sets the priority (lower value = higher priority).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Whether this process carries a priority.
    pub fn has_priority(&self) -> bool {
        self.priority.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P0", 2, 7).with_priority(3);
        assert_eq!(p.id, "P0");
        assert_eq!(p.arrival_time, 2);
        assert_eq!(p.burst_time, 7);
        assert_eq!(p.priority, Some(3));
        assert!(p.has_priority());
    }

    #[test]
    fn test_process_without_priority() {
        let p = Process::new("P1", 0, 1);
        assert!(!p.has_priority());
    }

    #[test]
    fn test_process_json_shape() {
        let json = r#"{"id":"P2","arrivalTime":1,"burstTime":4}"#;
        let p: Process = serde_json::from_str(json).unwrap();
        assert_eq!(p, Process::new("P2", 1, 4));

        let out = serde_json::to_string(&p.with_priority(1)).unwrap();
        assert!(out.contains("\"arrivalTime\":1"));
        assert!(out.contains("\"priority\":1"));
    }

    #[test]
    fn test_non_numeric_priority_rejected_at_boundary() {
        let json = r#"{"id":"P2","arrivalTime":1,"burstTime":4,"priority":"high"}"#;
        assert!(serde_json::from_str::<Process>(json).is_err());
    }
}
