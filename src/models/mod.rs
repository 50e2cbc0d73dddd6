//! CPU scheduling domain models.
//!
//! Provides the input record (`Process`) and the result contract shared
//! by every algorithm, the metrics module, and external renderers
//! (`ScheduleResult`, `ExecutionSegment`, `CompletionTimes`).
//!
//! # Wire Shape
//!
//! | Type | JSON keys |
//! |------|-----------|
//! | Process | `id`, `arrivalTime`, `burstTime`, `priority?` |
//! | ExecutionSegment | `processId`, `startTime`, `endTime` |
//! | ScheduleResult | `schedule`, `completionTimes` |

mod process;
mod schedule;

pub use process::Process;
pub use schedule::{CompletionTimes, ExecutionSegment, ScheduleResult};
