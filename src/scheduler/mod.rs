//! Plan generation, repair, and load summaries.
//!
//! # Pipeline
//!
//! `PriorityRanker` → `DailyAllocator` → `SlotScheduler` → `WeeklyPlan`.
//! `PlanRepairer` works on a finished plan and never re-runs allocation.
//!
//! # Algorithm
//!
//! Allocation and slot placement are greedy: subjects and tasks are
//! processed once in priority order with a single corrective sweep. The
//! result is deterministic and fast, not globally optimal.

mod allocator;
mod load;
mod planner;
mod repair;
pub mod slots;

pub use allocator::{Allocation, DailyAllocator};
pub use load::{summarize_load, LoadSummary, SubjectLoad};
pub use planner::{generate_plan, PlanRequest, StudyPlanner};
pub use repair::{repair_plan, PlanRepairer};
pub use slots::{DaySlots, SlotScheduler, SLOT_MINUTES};
