//! Subject model.
//!
//! A subject is one course or topic competing for weekly study time.
//! Subjects are snapshots: a planning run reads them and never mutates them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Perceived difficulty of a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Priority weight derived 1:1 from difficulty (Easy=1, Medium=2, Hard=3).
    #[inline]
    pub fn priority_weight(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        })
    }
}

/// A subject to be studied during the week.
///
/// `name` is the unique key used by allocations, slots and load summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject name.
    pub name: String,
    /// Exam or submission date.
    pub deadline: NaiveDate,
    /// Difficulty level.
    pub difficulty: Difficulty,
    /// Hours of study needed this week.
    pub weekly_hours_needed: f64,
}

impl Subject {
    /// Creates a new subject.
    pub fn new(
        name: impl Into<String>,
        deadline: NaiveDate,
        difficulty: Difficulty,
        weekly_hours_needed: f64,
    ) -> Self {
        Self {
            name: name.into(),
            deadline,
            difficulty,
            weekly_hours_needed,
        }
    }

    /// Priority weight (see [`Difficulty::priority_weight`]).
    #[inline]
    pub fn priority_weight(&self) -> u32 {
        self.difficulty.priority_weight()
    }

    /// Signed whole days from `today` until the deadline.
    ///
    /// Negative for overdue subjects.
    pub fn days_until_deadline(&self, today: NaiveDate) -> i64 {
        (self.deadline - today).num_days()
    }
}
