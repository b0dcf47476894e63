//! Availability configuration and allocation profiles.
//!
//! `AvailabilityConfig` is the whole per-run configuration surface: which
//! weekdays are studied, how many hours fit in a day, session limits,
//! preferred clock windows, blocked intervals, and the allocation profile.
//! It deserializes from JSON with every omitted field taken from `Default`.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::{ClockWindow, ConflictCalendar};
use crate::error::PlannerResult;

/// Tuning knobs of the daily allocator.
///
/// Two named presets exist; see [`AllocationProfile::simple`] and
/// [`AllocationProfile::constrained`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationProfile {
    /// Hours granted per unit of priority weight in a single session.
    pub session_factor: f64,
    /// Whether `min_session_hours` acts as a floor on session size.
    pub min_session_floor: bool,
    /// Whether the one-sweep remediation pass runs after the main pass.
    pub remediation: bool,
}

impl AllocationProfile {
    /// Session factor 0.5, no minimum-session floor, no remediation.
    pub const fn simple() -> Self {
        Self {
            session_factor: 0.5,
            min_session_floor: false,
            remediation: false,
        }
    }

    /// Session factor 0.75, minimum-session floor, remediation pass.
    pub const fn constrained() -> Self {
        Self {
            session_factor: 0.75,
            min_session_floor: true,
            remediation: true,
        }
    }

    /// Overrides the session factor.
    pub fn with_session_factor(mut self, factor: f64) -> Self {
        self.session_factor = factor;
        self
    }
}

impl Default for AllocationProfile {
    fn default() -> Self {
        Self::constrained()
    }
}

/// Student availability for one planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvailabilityConfig {
    /// Study days in planning order.
    pub study_days: Vec<Weekday>,
    /// Maximum study hours per day.
    pub daily_capacity_hours: f64,
    /// Maximum distinct sessions per day in the main pass.
    pub max_subjects_per_day: usize,
    /// Minimum length of a committed session (constrained profile).
    pub min_session_hours: f64,
    /// Clock windows the student prefers to study in, chronological.
    pub preferred_time_windows: Vec<ClockWindow>,
    /// Recurring daily blocked intervals.
    pub blocked: ConflictCalendar,
    /// Allocation profile.
    pub profile: AllocationProfile,
    /// Whether slot placement may fall back to gaps behind the scan cursor.
    pub reuse_skipped_gaps: bool,
}

impl Default for AvailabilityConfig {
    fn default() -> Self {
        Self {
            study_days: vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ],
            daily_capacity_hours: 2.5,
            max_subjects_per_day: 5,
            min_session_hours: 1.0,
            preferred_time_windows: [((9, 0), (12, 0)), ((14, 0), (17, 0)), ((19, 0), (22, 0))]
                .into_iter()
                .filter_map(|(s, e)| ClockWindow::hm(s, e))
                .collect(),
            blocked: ConflictCalendar::daily_breaks(),
            profile: AllocationProfile::constrained(),
            reuse_skipped_gaps: false,
        }
    }
}

impl AvailabilityConfig {
    /// Parses a configuration from JSON. Missing fields take default values.
    pub fn from_json(json: &str) -> PlannerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the study days.
    pub fn with_study_days(mut self, days: Vec<Weekday>) -> Self {
        self.study_days = days;
        self
    }

    /// Sets the daily capacity.
    pub fn with_daily_capacity(mut self, hours: f64) -> Self {
        self.daily_capacity_hours = hours;
        self
    }

    /// Sets the per-day subject limit.
    pub fn with_max_subjects_per_day(mut self, max: usize) -> Self {
        self.max_subjects_per_day = max;
        self
    }

    /// Sets the minimum session length.
    pub fn with_min_session(mut self, hours: f64) -> Self {
        self.min_session_hours = hours;
        self
    }

    /// Replaces the preferred windows.
    pub fn with_preferred_windows(mut self, windows: Vec<ClockWindow>) -> Self {
        self.preferred_time_windows = windows;
        self
    }

    /// Replaces the blocked-interval calendar.
    pub fn with_blocked(mut self, calendar: ConflictCalendar) -> Self {
        self.blocked = calendar;
        self
    }

    /// Sets the allocation profile.
    pub fn with_profile(mut self, profile: AllocationProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Enables or disables gap reuse during slot placement.
    pub fn with_gap_reuse(mut self, enabled: bool) -> Self {
        self.reuse_skipped_gaps = enabled;
        self
    }

    /// Total hours available across all study days.
    pub fn weekly_capacity_hours(&self) -> f64 {
        self.study_days.len() as f64 * self.daily_capacity_hours
    }
}
