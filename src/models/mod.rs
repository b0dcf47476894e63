//! Study-planning domain models.
//!
//! Inputs (`Subject`, `AvailabilityConfig`), the blocked-time calendar,
//! and the produced plan (`WeeklyPlan` of `DayPlan`s with `TaskAllocation`s
//! and `TimeSlot`s).
//!
//! # Domain Mappings
//!
//! | study-planner | Generic scheduling |
//! |---------------|--------------------|
//! | Subject | Job with due date and weight |
//! | TaskAllocation | Job fragment assigned to a day |
//! | TimeSlot | Clock-time assignment |
//! | ConflictCalendar | Blocked periods |

mod availability;
mod calendar;
mod plan;
mod subject;

pub use availability::{AllocationProfile, AvailabilityConfig};
pub use calendar::{ClockWindow, ConflictCalendar};
pub use plan::{
    weekday_name, Advisory, AdvisoryKind, DayPlan, ExportedDay, PlanOutcome, TaskAllocation,
    TimeSlot, WeeklyPlan,
};
pub use subject::{Difficulty, Subject};
