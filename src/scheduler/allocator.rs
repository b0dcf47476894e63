//! Greedy per-day hour allocation.
//!
//! # Algorithm
//!
//! 1. Walk the study days in configured order, keeping `used` hours per day.
//! 2. On each day, walk the ranked subjects; a subject with hours left and
//!    room under `max_subjects_per_day` gets
//!    `cap = min(capacity - used, remaining, session)` where
//!    `session = weight × session_factor`, floored at `min_session_hours`
//!    when the profile enables the floor.
//! 3. Commit `cap` if it reaches the minimum session (or is positive without
//!    the floor); otherwise skip the subject for that day only.
//! 4. Days with no commits are dropped.
//! 5. Remediation (constrained profile): one sweep over subjects with hours
//!    left, appending a supplemental session to the first day that already
//!    holds the subject and still has a minimum session of spare capacity.
//!
//! Hours left after remediation are reported, never carried to a day that
//! does not exist.
//!
//! # Complexity
//! O(d × s) for the main pass, O(s × d × k) for remediation, where
//! d = study days, s = subjects, k = tasks per day.

use tracing::{debug, warn};

use crate::models::{Advisory, AvailabilityConfig, DayPlan, Subject, TaskAllocation};

/// Tolerance for hour comparisons.
pub(crate) const HOURS_EPSILON: f64 = 1e-9;

/// Output of the allocator: day plans without time slots, plus advisories.
#[derive(Debug, Clone, Default)]
pub struct Allocation {
    /// Days that received at least one task, in study-day order.
    pub days: Vec<DayPlan>,
    /// Hours left per subject after all passes, in ranked order (only > 0).
    pub leftover: Vec<(String, f64)>,
    /// Capacity and unscheduled-hours advisories.
    pub advisories: Vec<Advisory>,
}

/// Distributes weekly subject hours across study days.
#[derive(Debug, Clone, Copy)]
pub struct DailyAllocator<'a> {
    config: &'a AvailabilityConfig,
}

impl<'a> DailyAllocator<'a> {
    /// Creates an allocator bound to a configuration.
    pub fn new(config: &'a AvailabilityConfig) -> Self {
        Self { config }
    }

    /// Allocates hours for subjects given in priority order.
    pub fn allocate(&self, ranked: &[&Subject]) -> Allocation {
        let mut allocation = Allocation::default();

        let requested: f64 = ranked.iter().map(|s| s.weekly_hours_needed).sum();
        let available = self.config.weekly_capacity_hours();
        if requested > available + HOURS_EPSILON {
            let advisory = Advisory::insufficient_capacity(requested, available);
            warn!(requested, available, "{}", advisory.message);
            allocation.advisories.push(advisory);
        }

        let mut remaining: Vec<f64> = ranked.iter().map(|s| s.weekly_hours_needed).collect();

        for (ordinal, &weekday) in self.config.study_days.iter().enumerate() {
            let mut day = DayPlan::new(DayPlan::label_for(ordinal + 1, weekday), weekday);
            self.fill_day(&mut day, ranked, &mut remaining);
            if day.tasks.is_empty() {
                debug!(day = %day.day_label, "no sessions committed, day omitted");
            } else {
                allocation.days.push(day);
            }
        }

        if self.config.profile.remediation {
            self.remediate(&mut allocation.days, ranked, &mut remaining);
        }

        for (subject, &left) in ranked.iter().zip(&remaining) {
            if left > HOURS_EPSILON {
                let advisory = Advisory::unscheduled_hours(&subject.name, left);
                warn!(subject = %subject.name, hours = left, "{}", advisory.message);
                allocation.advisories.push(advisory);
                allocation.leftover.push((subject.name.clone(), left));
            }
        }

        allocation
    }

    /// Size of one session for a subject before capacity limits.
    fn session_hours(&self, subject: &Subject) -> f64 {
        let profile = &self.config.profile;
        let session = subject.priority_weight() as f64 * profile.session_factor;
        if profile.min_session_floor {
            session.max(self.config.min_session_hours)
        } else {
            session
        }
    }

    fn is_committable(&self, cap: f64) -> bool {
        if self.config.profile.min_session_floor {
            cap + HOURS_EPSILON >= self.config.min_session_hours
        } else {
            cap > HOURS_EPSILON
        }
    }

    fn fill_day(&self, day: &mut DayPlan, ranked: &[&Subject], remaining: &mut [f64]) {
        let capacity = self.config.daily_capacity_hours;
        let mut used = 0.0;

        for (subject, left) in ranked.iter().zip(remaining.iter_mut()) {
            if *left <= HOURS_EPSILON || day.tasks.len() >= self.config.max_subjects_per_day {
                continue;
            }

            let cap = (capacity - used).min(*left).min(self.session_hours(subject));
            if !self.is_committable(cap) {
                continue;
            }

            debug!(day = %day.day_label, subject = %subject.name, hours = cap, "session committed");
            day.tasks.push(TaskAllocation::new(&subject.name, cap));
            used += cap;
            *left -= cap;
            if *left < HOURS_EPSILON {
                *left = 0.0;
            }
        }
    }

    fn remediate(&self, days: &mut [DayPlan], ranked: &[&Subject], remaining: &mut [f64]) {
        let capacity = self.config.daily_capacity_hours;
        let min_session = self.config.min_session_hours;

        for (subject, left) in ranked.iter().zip(remaining.iter_mut()) {
            if *left <= HOURS_EPSILON {
                continue;
            }

            let target = days.iter_mut().find(|d| {
                d.has_subject(&subject.name)
                    && capacity - d.used_hours() + HOURS_EPSILON >= min_session
                    && d.tasks.len() < self.config.max_subjects_per_day
            });

            if let Some(day) = target {
                let spare = capacity - day.used_hours();
                let extra = spare.min(*left).min(2.0 * min_session);
                debug!(
                    day = %day.day_label,
                    subject = %subject.name,
                    hours = extra,
                    "supplemental session added"
                );
                day.tasks.push(TaskAllocation::supplemental(&subject.name, extra));
                *left -= extra;
                if *left < HOURS_EPSILON {
                    *left = 0.0;
                }
            }
        }
    }
}
