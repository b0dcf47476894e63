//! End-to-end plan generation: rank → allocate → place on the clock.
//!
//! Each run is a pure function of its request: subjects and availability
//! are read-only snapshots, the reference date is part of the request, and
//! the output is a new plan. Runs share no state and can execute in
//! parallel without synchronization.

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use super::allocator::DailyAllocator;
use super::slots::SlotScheduler;
use crate::dispatching::PriorityRanker;
use crate::error::{PlannerError, PlannerResult};
use crate::models::{Advisory, AvailabilityConfig, PlanOutcome, Subject, WeeklyPlan};
use crate::validation::validate_input;

/// Input container for one planning run.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Subjects to plan.
    pub subjects: Vec<Subject>,
    /// Availability for the week.
    pub config: AvailabilityConfig,
    /// Date deadlines are measured from.
    pub today: NaiveDate,
}

impl PlanRequest {
    /// Creates a request dated today (local time).
    pub fn new(subjects: Vec<Subject>, config: AvailabilityConfig) -> Self {
        Self {
            subjects,
            config,
            today: Local::now().date_naive(),
        }
    }

    /// Sets the reference date.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }
}

/// Study plan generator.
///
/// # Example
///
/// ```
/// use study_planner::scheduler::{PlanRequest, StudyPlanner};
/// use study_planner::models::{AvailabilityConfig, Difficulty, Subject};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let subjects = vec![
///     Subject::new("CS101", NaiveDate::from_ymd_opt(2025, 3, 13).unwrap(), Difficulty::Hard, 6.0),
///     Subject::new("MATH", NaiveDate::from_ymd_opt(2025, 3, 20).unwrap(), Difficulty::Easy, 4.0),
/// ];
/// let request = PlanRequest::new(subjects, AvailabilityConfig::default()).with_today(today);
///
/// let outcome = StudyPlanner::new().generate(&request);
/// assert_eq!(outcome.plan.day_count(), 5);
/// assert_eq!(outcome.plan.days[0].tasks[0].subject_name, "CS101");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StudyPlanner {
    ranker: PriorityRanker,
}

impl StudyPlanner {
    /// Creates a planner with the default urgency-then-difficulty ranking.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a custom ranker.
    pub fn with_ranker(mut self, ranker: PriorityRanker) -> Self {
        self.ranker = ranker;
        self
    }

    /// Generates a plan, assuming the input is already valid.
    pub fn generate(&self, request: &PlanRequest) -> PlanOutcome {
        let config = &request.config;
        let ranked = self.ranker.rank(&request.subjects, request.today);
        let allocation = DailyAllocator::new(config).allocate(&ranked);

        let slot_scheduler = SlotScheduler::new(&config.preferred_time_windows, &config.blocked)
            .with_gap_reuse(config.reuse_skipped_gaps);
        let mut advisories = allocation.advisories;
        let mut plan = WeeklyPlan::new();

        for mut day in allocation.days {
            let placed = slot_scheduler.schedule_day(&day.tasks);
            if placed.slots.is_empty() {
                let advisory = Advisory::no_available_slots(&day.day_label);
                warn!(day = %day.day_label, "{}", advisory.message);
                advisories.push(advisory);
            } else {
                for &idx in &placed.unplaced {
                    let advisory = Advisory::unplaced_session(&day.day_label, &day.tasks[idx]);
                    warn!(day = %day.day_label, "{}", advisory.message);
                    advisories.push(advisory);
                }
            }
            day.time_slots = placed.slots;
            plan.add_day(day);
        }

        info!(
            subjects = request.subjects.len(),
            days = plan.day_count(),
            hours = plan.total_hours(),
            advisories = advisories.len(),
            "study plan generated"
        );

        PlanOutcome { plan, advisories }
    }

    /// Validates the input, then generates a plan.
    ///
    /// # Errors
    /// [`PlannerError::Validation`] listing every problem found.
    pub fn generate_checked(&self, request: &PlanRequest) -> PlannerResult<PlanOutcome> {
        validate_input(&request.subjects, &request.config).map_err(PlannerError::Validation)?;
        Ok(self.generate(request))
    }
}

/// Generates a plan with the default planner.
pub fn generate_plan(request: &PlanRequest) -> PlanOutcome {
    StudyPlanner::new().generate(request)
}
