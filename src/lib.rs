//! Weekly study-time planning engine.
//!
//! Allocates a finite weekly study budget across subjects with deadlines
//! and difficulty levels, turns the daily hour allocations into
//! non-overlapping clock-time slots that avoid blocked intervals (prayer and
//! meal breaks), and repairs a plan when a study day is missed.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Subject`, `AvailabilityConfig`,
//!   `ConflictCalendar`, `TaskAllocation`, `TimeSlot`, `DayPlan`, `WeeklyPlan`
//! - **`dispatching`**: Subject ranking rules and the `PriorityRanker`
//! - **`scheduler`**: `DailyAllocator`, `SlotScheduler`, `PlanRepairer`,
//!   `LoadSummary`, and the `StudyPlanner` entry point
//! - **`validation`**: Input integrity checks (duplicate names, bad limits)
//!
//! # Operations
//!
//! - [`scheduler::generate_plan`]: subjects + availability → plan + advisories
//! - [`scheduler::repair_plan`]: original plan + missed day → revised plan
//! - [`scheduler::summarize_load`]: original plan → hours per subject
//!
//! The crate logs through `tracing` and never installs a subscriber.

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{PlannerError, PlannerResult};
