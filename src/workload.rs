//! Random process-set generation.
//!
//! Produces reproducible workloads from any `rand::Rng`, for labelling
//! recommendation data and for randomized checks of the engine.
//!
//! # Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use u_cpu_sched::workload::WorkloadGenerator;
//!
//! let mut rng = SmallRng::seed_from_u64(1);
//! let processes = WorkloadGenerator::new(4).generate(&mut rng);
//! assert_eq!(processes.len(), 4);
//! assert_eq!(processes[0].id, "P0");
//! ```

use std::ops::RangeInclusive;

use rand::Rng;

use crate::models::Process;

/// Builder for random process sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadGenerator {
    /// Number of processes to generate.
    pub num_processes: usize,
    /// Arrival times are drawn uniformly from this range.
    pub arrival_range: RangeInclusive<i64>,
    /// Burst times are drawn uniformly from this range.
    pub burst_range: RangeInclusive<i64>,
    /// Priorities are drawn from this range; `None` leaves them unset.
    pub priority_range: Option<RangeInclusive<i32>>,
}

impl WorkloadGenerator {
    /// Creates a generator for `num_processes` processes with arrivals in
    /// `0..=10`, bursts in `5..=20`, and priorities in `1..=5`.
    pub fn new(num_processes: usize) -> Self {
        Self {
            num_processes,
            ..Self::default()
        }
    }

    /// Sets the number of processes.
    pub fn with_process_count(mut self, num_processes: usize) -> Self {
        self.num_processes = num_processes;
        self
    }

    /// Sets the arrival time range.
    pub fn with_arrival_range(mut self, range: RangeInclusive<i64>) -> Self {
        self.arrival_range = range;
        self
    }

    /// Sets the burst time range.
    pub fn with_burst_range(mut self, range: RangeInclusive<i64>) -> Self {
        self.burst_range = range;
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, range: RangeInclusive<i32>) -> Self {
        self.priority_range = Some(range);
        self
    }

    /// Generates processes without priorities.
    pub fn without_priority(mut self) -> Self {
        self.priority_range = None;
        self
    }

    /// Draws a process set with ids `P0..P{n-1}`.
    ///
    /// An empty range yields its start bound.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        (0..self.num_processes)
            .map(|i| {
                let arrival = sample(rng, &self.arrival_range);
                let burst = sample(rng, &self.burst_range);
                let process = Process::new(format!("P{i}"), arrival, burst);
                match &self.priority_range {
                    Some(range) => process.with_priority(sample(rng, range)),
                    None => process,
                }
            })
            .collect()
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            num_processes: 5,
            arrival_range: 0..=10,
            burst_range: 5..=20,
            priority_range: Some(1..=5),
        }
    }
}

fn sample<R, T>(rng: &mut R, range: &RangeInclusive<T>) -> T
where
    R: Rng,
    T: rand::distr::uniform::SampleUniform + PartialOrd + Copy,
{
    if range.is_empty() {
        *range.start()
    } else {
        rng.random_range(range.clone())
    }
}
