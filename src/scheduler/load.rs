//! Weekly load summary.
//!
//! Aggregates allocated hours per subject across all days of a plan. Meant
//! to be computed from the original plan, so repairs never change it.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Hours | Sum of `hours_allocated` for the subject |
//! | Max hours | Largest per-subject total |
//! | Share | hours / max hours (0 when max is 0) |

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::WeeklyPlan;

/// Total hours for one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectLoad {
    pub subject_name: String,
    pub hours: f64,
}

/// Per-subject totals in order of first appearance in the plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadSummary {
    pub entries: Vec<SubjectLoad>,
}

impl LoadSummary {
    /// Computes totals from a plan.
    pub fn calculate(plan: &WeeklyPlan) -> Self {
        let mut entries: Vec<SubjectLoad> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for task in plan.days.iter().flat_map(|d| &d.tasks) {
            match index.get(task.subject_name.as_str()) {
                Some(&i) => entries[i].hours += task.hours_allocated,
                None => {
                    index.insert(&task.subject_name, entries.len());
                    entries.push(SubjectLoad {
                        subject_name: task.subject_name.clone(),
                        hours: task.hours_allocated,
                    });
                }
            }
        }

        Self { entries }
    }

    /// Total hours for a subject, if it appears in the plan.
    pub fn hours_for(&self, subject_name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.subject_name == subject_name)
            .map(|e| e.hours)
    }

    /// Largest per-subject total (0 for an empty plan).
    pub fn max_hours(&self) -> f64 {
        self.entries.iter().map(|e| e.hours).fold(0.0, f64::max)
    }

    /// Fraction of the largest total (0.0..=1.0), used for progress bars.
    pub fn share(&self, subject_name: &str) -> Option<f64> {
        let max = self.max_hours();
        self.hours_for(subject_name)
            .map(|h| if max > 0.0 { h / max } else { 0.0 })
    }

    /// Totals as a map.
    pub fn to_map(&self) -> HashMap<String, f64> {
        self.entries
            .iter()
            .map(|e| (e.subject_name.clone(), e.hours))
            .collect()
    }

    /// Whether the plan contained no tasks.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Convenience wrapper around [`LoadSummary::calculate`].
pub fn summarize_load(original: &WeeklyPlan) -> LoadSummary {
    LoadSummary::calculate(original)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayPlan, TaskAllocation};
    use chrono::Weekday;

    fn sample_plan() -> WeeklyPlan {
        let mut mon = DayPlan::new("Day 1 - Monday", Weekday::Mon);
        mon.tasks.push(TaskAllocation::new("CS101", 2.25));
        let mut tue = DayPlan::new("Day 2 - Tuesday", Weekday::Tue);
        tue.tasks.push(TaskAllocation::new("MATH", 1.0));
        tue.tasks.push(TaskAllocation::new("CS101", 1.5));
        tue.tasks.push(TaskAllocation::supplemental("MATH", 1.0));
        WeeklyPlan { days: vec![mon, tue] }
    }

    #[test]
    fn test_totals_in_first_appearance_order() {
        let summary = summarize_load(&sample_plan());
        let names: Vec<&str> = summary.entries.iter().map(|e| e.subject_name.as_str()).collect();
        assert_eq!(names, vec!["CS101", "MATH"]);
        assert!((summary.hours_for("CS101").unwrap() - 3.75).abs() < 1e-9);
        // Supplemental sessions aggregate under the same subject
        assert!((summary.hours_for("MATH").unwrap() - 2.0).abs() < 1e-9);
        assert!(summary.hours_for("PHYS").is_none());
    }

    #[test]
    fn test_share_relative_to_max() {
        let summary = summarize_load(&sample_plan());
        assert!((summary.max_hours() - 3.75).abs() < 1e-9);
        assert!((summary.share("CS101").unwrap() - 1.0).abs() < 1e-9);
        assert!((summary.share("MATH").unwrap() - 2.0 / 3.75).abs() < 1e-9);
    }

    #[test]
    fn test_idempotent() {
        let plan = sample_plan();
        assert_eq!(summarize_load(&plan), summarize_load(&plan));
        assert_eq!(summarize_load(&plan).to_map(), summarize_load(&plan).to_map());
    }

    #[test]
    fn test_empty_plan() {
        let summary = summarize_load(&WeeklyPlan::new());
        assert!(summary.is_empty());
        assert!((summary.max_hours() - 0.0).abs() < 1e-10);
        assert!(summary.to_map().is_empty());
    }
}
