//! Missed-day repair.
//!
//! Removes the missed day from the original plan and appends all of its
//! task allocations, in order, to the first remaining day. The receiving
//! day is not re-balanced: its allocated hours may exceed the daily
//! capacity afterwards, and its time slots are kept as they were, so the
//! migrated tasks carry hours but no clock placement.
//!
//! Repair always reads the original plan and returns a new one; the
//! original is never mutated.

use tracing::info;

use crate::error::{PlannerError, PlannerResult};
use crate::models::WeeklyPlan;

/// Redistributes a missed day's workload.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanRepairer;

impl PlanRepairer {
    /// Creates a repairer.
    pub fn new() -> Self {
        Self
    }

    /// Produces a revised plan without `missed_day_label`.
    ///
    /// # Errors
    /// - [`PlannerError::DayNotFound`] if no day carries the label.
    /// - [`PlannerError::NoReceivingDay`] if the missed day is the only day.
    pub fn repair(&self, original: &WeeklyPlan, missed_day_label: &str) -> PlannerResult<WeeklyPlan> {
        let missed_idx = original
            .days
            .iter()
            .position(|d| d.day_label == missed_day_label)
            .ok_or_else(|| PlannerError::day_not_found(missed_day_label))?;

        let mut days = original.days.clone();
        let missed = days.remove(missed_idx);

        let receiver = days.first_mut().ok_or_else(|| PlannerError::NoReceivingDay {
            label: missed_day_label.to_string(),
        })?;

        info!(
            missed = %missed.day_label,
            receiver = %receiver.day_label,
            tasks = missed.tasks.len(),
            "missed day redistributed"
        );
        receiver.tasks.extend(missed.tasks);

        Ok(WeeklyPlan { days })
    }
}

/// Convenience wrapper around [`PlanRepairer::repair`].
///
/// # Errors
/// - [`PlannerError::DayNotFound`] if no day carries the label.
/// - [`PlannerError::NoReceivingDay`] if the missed day is the only day in
///   the plan. Its tasks would have nowhere to go, so the plan is rejected
///   instead of being returned empty.
pub fn repair_plan(original: &WeeklyPlan, missed_day_label: &str) -> PlannerResult<WeeklyPlan> {
    PlanRepairer::new().repair(original, missed_day_label)
}
