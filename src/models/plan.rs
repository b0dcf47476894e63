//! Weekly plan (solution) model.
//!
//! A weekly plan is an ordered list of day plans. Each day carries the
//! hour allocations produced by the allocator and the clock-time slots
//! produced by the slot scheduler. Non-fatal problems found while building
//! a plan travel next to it as advisories.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hours of one subject committed to one day.
///
/// A subject may appear more than once per day; extra sessions added by the
/// remediation pass are flagged `supplemental` but aggregate under the same
/// `subject_name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskAllocation {
    /// Subject this session belongs to.
    pub subject_name: String,
    /// Session length in hours.
    pub hours_allocated: f64,
    /// Added by the remediation pass.
    pub supplemental: bool,
}

impl TaskAllocation {
    /// Creates a regular session.
    pub fn new(subject_name: impl Into<String>, hours_allocated: f64) -> Self {
        Self {
            subject_name: subject_name.into(),
            hours_allocated,
            supplemental: false,
        }
    }

    /// Creates a supplemental session.
    pub fn supplemental(subject_name: impl Into<String>, hours_allocated: f64) -> Self {
        Self {
            supplemental: true,
            ..Self::new(subject_name, hours_allocated)
        }
    }
}

impl fmt::Display for TaskAllocation {
    /// `Name (1.5h)`, or `Name (extra) (1.0h)` for supplemental sessions.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.supplemental {
            write!(f, "{} (extra) ({:.1}h)", self.subject_name, self.hours_allocated)
        } else {
            write!(f, "{} ({:.1}h)", self.subject_name, self.hours_allocated)
        }
    }
}

/// A subject placed on the clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Start time (inclusive).
    pub start: NaiveTime,
    /// End time (exclusive).
    pub end: NaiveTime,
    /// Subject studied in this slot.
    pub subject_name: String,
}

impl TimeSlot {
    /// Creates a new slot.
    pub fn new(start: NaiveTime, end: NaiveTime, subject_name: impl Into<String>) -> Self {
        Self {
            start,
            end,
            subject_name: subject_name.into(),
        }
    }

    /// Slot length in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

impl fmt::Display for TimeSlot {
    /// `09:00 AM - 10:30 AM: Name`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}: {}",
            self.start.format("%I:%M %p"),
            self.end.format("%I:%M %p"),
            self.subject_name
        )
    }
}

/// One study day of the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Display label, e.g. `Day 1 - Monday`.
    pub day_label: String,
    /// Weekday this plan covers.
    pub weekday: Weekday,
    /// Hour allocations, in commit order.
    pub tasks: Vec<TaskAllocation>,
    /// Clock placements, chronological.
    pub time_slots: Vec<TimeSlot>,
}

/// Export shape of a day: label plus display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedDay {
    pub label: String,
    pub tasks: Vec<String>,
    pub time_slots: Vec<String>,
}

impl DayPlan {
    /// Creates an empty day.
    pub fn new(day_label: impl Into<String>, weekday: Weekday) -> Self {
        Self {
            day_label: day_label.into(),
            weekday,
            tasks: Vec::new(),
            time_slots: Vec::new(),
        }
    }

    /// Builds the `Day N - Weekday` label, `ordinal` being 1-based.
    pub fn label_for(ordinal: usize, weekday: Weekday) -> String {
        format!("Day {ordinal} - {}", weekday_name(weekday))
    }

    /// Sum of allocated hours.
    pub fn used_hours(&self) -> f64 {
        self.tasks.iter().map(|t| t.hours_allocated).sum()
    }

    /// Whether any session of `subject_name` is allocated to this day.
    pub fn has_subject(&self, subject_name: &str) -> bool {
        self.tasks.iter().any(|t| t.subject_name == subject_name)
    }

    /// Converts the day into its export shape.
    pub fn export(&self) -> ExportedDay {
        ExportedDay {
            label: self.day_label.clone(),
            tasks: self.tasks.iter().map(ToString::to_string).collect(),
            time_slots: self.time_slots.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Full English weekday name.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// An ordered sequence of day plans.
///
/// Only days that received at least one task are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub days: Vec<DayPlan>,
}

impl WeeklyPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a day.
    pub fn add_day(&mut self, day: DayPlan) {
        self.days.push(day);
    }

    /// Finds a day by label.
    pub fn day(&self, label: &str) -> Option<&DayPlan> {
        self.days.iter().find(|d| d.day_label == label)
    }

    /// Day labels in plan order.
    pub fn labels(&self) -> Vec<&str> {
        self.days.iter().map(|d| d.day_label.as_str()).collect()
    }

    /// Number of days.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Number of task allocations across all days.
    pub fn task_count(&self) -> usize {
        self.days.iter().map(|d| d.tasks.len()).sum()
    }

    /// Total allocated hours across all days.
    pub fn total_hours(&self) -> f64 {
        self.days.iter().map(DayPlan::used_hours).sum()
    }

    /// Whether the plan has no days.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Export shapes of every day.
    pub fn export(&self) -> Vec<ExportedDay> {
        self.days.iter().map(DayPlan::export).collect()
    }
}

/// Classification of non-fatal planning findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdvisoryKind {
    /// Total weekly need exceeds total available hours.
    InsufficientCapacity,
    /// A subject still has hours left after allocation.
    UnscheduledHours,
    /// A day with tasks received no time slots at all.
    NoAvailableSlots,
    /// One session of a day could not be placed on the clock.
    UnplacedSession,
}

/// A non-fatal finding attached to a generated plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    /// Type of finding.
    pub kind: AdvisoryKind,
    /// Related entity (subject name or day label; empty for plan-wide findings).
    pub entity: String,
    /// Human-readable description.
    pub message: String,
    /// Hours involved, where meaningful.
    pub hours: Option<f64>,
}

impl Advisory {
    /// Creates an insufficient-capacity advisory.
    pub fn insufficient_capacity(requested: f64, available: f64) -> Self {
        Self {
            kind: AdvisoryKind::InsufficientCapacity,
            entity: String::new(),
            message: format!(
                "Requested {requested:.1}h exceeds available {available:.1}h this week"
            ),
            hours: Some(requested - available),
        }
    }

    /// Creates an unscheduled-hours advisory for a subject.
    pub fn unscheduled_hours(subject: impl Into<String>, hours: f64) -> Self {
        let subject = subject.into();
        Self {
            kind: AdvisoryKind::UnscheduledHours,
            message: format!("{subject} has {hours:.1}h left unscheduled"),
            entity: subject,
            hours: Some(hours),
        }
    }

    /// Creates a no-available-slots advisory for a day.
    pub fn no_available_slots(day_label: impl Into<String>) -> Self {
        let day_label = day_label.into();
        Self {
            kind: AdvisoryKind::NoAvailableSlots,
            message: format!("{day_label} has tasks but no conflict-free time slots"),
            entity: day_label,
            hours: None,
        }
    }

    /// Creates an unplaced-session advisory.
    pub fn unplaced_session(day_label: &str, task: &TaskAllocation) -> Self {
        Self {
            kind: AdvisoryKind::UnplacedSession,
            entity: day_label.to_string(),
            message: format!("{day_label}: no contiguous free time for {task}"),
            hours: Some(task.hours_allocated),
        }
    }
}

/// Result of a generation run: the plan plus any advisories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanOutcome {
    pub plan: WeeklyPlan,
    pub advisories: Vec<Advisory>,
}

impl PlanOutcome {
    /// Whether the run raised no advisories.
    pub fn is_clean(&self) -> bool {
        self.advisories.is_empty()
    }

    /// Advisories of one kind.
    pub fn advisories_of(&self, kind: AdvisoryKind) -> Vec<&Advisory> {
        self.advisories.iter().filter(|a| a.kind == kind).collect()
    }

    /// Subjects with hours left after allocation, with the leftover hours.
    pub fn unscheduled(&self) -> Vec<(&str, f64)> {
        self.advisories
            .iter()
            .filter(|a| a.kind == AdvisoryKind::UnscheduledHours)
            .map(|a| (a.entity.as_str(), a.hours.unwrap_or(0.0)))
            .collect()
    }
}
