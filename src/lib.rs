//! Single-processor CPU scheduling simulator.
//!
//! Turns a set of processes into an execution timeline and completion
//! times under one of the classical disciplines, then derives waiting
//! time, turnaround time, and throughput from the result.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ExecutionSegment`, `ScheduleResult`
//! - **`scheduler`**: The engine: FCFS, SJF/SRTF, priority, round-robin,
//!   plus `Algorithm` and `SimulationRequest`
//! - **`metrics`**: Waiting, turnaround, throughput, summary table data
//! - **`validation`**: Input checks run before any simulation step
//! - **`advisor`**: Workload statistics and the recommendation boundary
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use u_cpu_sched::models::Process;
//! use u_cpu_sched::scheduler::{Algorithm, SimulationRequest};
//!
//! let processes = vec![Process::new("P0", 0, 5), Process::new("P1", 0, 3)];
//! let sim = SimulationRequest::new(processes)
//!     .with_algorithm(Algorithm::RoundRobin { quantum: 2 })
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(sim.result.completion_time("P1"), Some(7));
//! assert_eq!(sim.result.completion_time("P0"), Some(8));
//! assert!((sim.metrics.throughput - 0.25).abs() < 1e-10);
//! ```
//!
//! # Architecture
//!
//! The engine is synchronous and single-threaded: each call owns its
//! working state and returns only after the whole schedule is built.
//! Rendering, input forms, and remote recommendation services live
//! outside this crate and consume its output types.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod advisor;
pub mod error;
pub mod metrics;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{ErrorKind, ProcessField, SchedulingError, SchedulingResult};
