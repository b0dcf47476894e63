//! Ranking context for dispatching rule evaluation.

use chrono::NaiveDate;

/// State passed to dispatching rules.
///
/// Holds the reference date deadlines are measured from. Passing it in
/// explicitly keeps ranking a pure function of its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingContext {
    /// Date the plan is generated on.
    pub today: NaiveDate,
}

impl RankingContext {
    /// Creates a context for the given date.
    pub fn on(today: NaiveDate) -> Self {
        Self { today }
    }
}
