//! Input validation for planning runs.
//!
//! Checks structural integrity of subjects and availability before
//! planning. Detects:
//! - Duplicate subject names
//! - Non-positive weekly hours
//! - Empty or repeated study days
//! - Capacity, subject-limit and minimum-session values out of range
//! - Inverted or empty preferred/blocked windows
//!
//! The planner itself assumes valid input; run these checks at the edge
//! where input is collected, or use `StudyPlanner::generate_checked`.

use std::collections::HashSet;
use std::fmt;

use crate::models::{AvailabilityConfig, Subject};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two subjects share the same name.
    DuplicateSubject,
    /// A subject needs zero, negative, or non-finite hours.
    InvalidHours,
    /// No study days were selected.
    NoStudyDays,
    /// A weekday appears twice in the study days.
    DuplicateStudyDay,
    /// Daily capacity, subject limit, or minimum session is out of range.
    InvalidLimit,
    /// A preferred or blocked window ends at or before its start.
    InvalidWindow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates subjects and availability for a planning run.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(subjects: &[Subject], config: &AvailabilityConfig) -> ValidationResult {
    let mut errors = Vec::new();

    let mut names = HashSet::new();
    for s in subjects {
        if !names.insert(s.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSubject,
                format!("Duplicate subject: {}", s.name),
            ));
        }
        if !(s.weekly_hours_needed.is_finite() && s.weekly_hours_needed > 0.0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidHours,
                format!(
                    "Subject '{}' needs {} hours; must be positive",
                    s.name, s.weekly_hours_needed
                ),
            ));
        }
    }

    if config.study_days.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoStudyDays,
            "No study days selected",
        ));
    }
    let mut days = HashSet::new();
    for day in &config.study_days {
        if !days.insert(*day) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateStudyDay,
                format!("Study day listed twice: {day}"),
            ));
        }
    }

    let capacity = config.daily_capacity_hours;
    if !(capacity.is_finite() && capacity > 0.0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidLimit,
            format!("Daily capacity must be positive, got {capacity}"),
        ));
    }
    if config.max_subjects_per_day == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidLimit,
            "Max subjects per day must be at least 1",
        ));
    }
    let min_session = config.min_session_hours;
    if !(min_session > 0.0 && min_session <= capacity) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidLimit,
            format!("Minimum session {min_session}h must be in (0, {capacity}]"),
        ));
    }
    if !(config.profile.session_factor.is_finite() && config.profile.session_factor > 0.0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidLimit,
            "Session factor must be positive",
        ));
    }

    for window in &config.preferred_time_windows {
        if !window.is_valid() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWindow,
                format!("Preferred window {}-{} is empty", window.start, window.end),
            ));
        }
    }
    for window in &config.blocked.blocked {
        if !window.is_valid() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWindow,
                format!("Blocked window {}-{} is empty", window.start, window.end),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClockWindow, ConflictCalendar, Difficulty};
    use chrono::{NaiveDate, Weekday};

    fn deadline() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 20).unwrap()
    }

    fn sample_subjects() -> Vec<Subject> {
        vec![
            Subject::new("CS101", deadline(), Difficulty::Hard, 6.0),
            Subject::new("MATH", deadline(), Difficulty::Easy, 4.0),
        ]
    }

    fn kinds(errors: &[ValidationError]) -> Vec<ValidationErrorKind> {
        errors.iter().map(|e| e.kind.clone()).collect()
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_subjects(), &AvailabilityConfig::default()).is_ok());
    }

    #[test]
    fn test_duplicate_subject() {
        let mut subjects = sample_subjects();
        subjects.push(Subject::new("MATH", deadline(), Difficulty::Medium, 2.0));

        let errors = validate_input(&subjects, &AvailabilityConfig::default()).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::DuplicateSubject]);
        assert!(errors[0].message.contains("MATH"));
    }

    #[test]
    fn test_invalid_hours() {
        let subjects = vec![
            Subject::new("ZERO", deadline(), Difficulty::Easy, 0.0),
            Subject::new("NEG", deadline(), Difficulty::Easy, -1.0),
        ];
        let errors = validate_input(&subjects, &AvailabilityConfig::default()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.kind == ValidationErrorKind::InvalidHours));
    }

    #[test]
    fn test_study_days() {
        let config = AvailabilityConfig::default().with_study_days(Vec::new());
        let errors = validate_input(&sample_subjects(), &config).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::NoStudyDays]);

        let config = AvailabilityConfig::default().with_study_days(vec![Weekday::Mon, Weekday::Mon]);
        let errors = validate_input(&sample_subjects(), &config).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::DuplicateStudyDay]);
    }

    #[test]
    fn test_min_session_above_capacity() {
        let config = AvailabilityConfig::default()
            .with_daily_capacity(1.0)
            .with_min_session(1.5);
        let errors = validate_input(&sample_subjects(), &config).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::InvalidLimit]);
    }

    #[test]
    fn test_zero_limits() {
        let config = AvailabilityConfig::default()
            .with_daily_capacity(0.0)
            .with_max_subjects_per_day(0);
        let errors = validate_input(&sample_subjects(), &config).unwrap_err();
        // capacity, subject limit, and min session (1.0 > 0.0)
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|e| e.kind == ValidationErrorKind::InvalidLimit));
    }

    #[test]
    fn test_inverted_windows() {
        let inverted = ClockWindow::hm((12, 0), (11, 0)).unwrap();
        let config = AvailabilityConfig::default()
            .with_preferred_windows(vec![inverted])
            .with_blocked(ConflictCalendar::new().with_blocked(inverted));
        let errors = validate_input(&sample_subjects(), &config).unwrap_err();
        assert_eq!(
            kinds(&errors),
            vec![ValidationErrorKind::InvalidWindow, ValidationErrorKind::InvalidWindow]
        );
    }

    #[test]
    fn test_multiple_errors() {
        let subjects = vec![
            Subject::new("A", deadline(), Difficulty::Easy, 1.0),
            Subject::new("A", deadline(), Difficulty::Easy, -2.0),
        ];
        let config = AvailabilityConfig::default().with_study_days(Vec::new());
        let errors = validate_input(&subjects, &config).unwrap_err();
        assert!(errors.len() >= 3);
        assert_eq!(errors[0].to_string(), "Duplicate subject: A");
    }
}
