//! Built-in dispatching rules.
//!
//! - **Due-date**: `NearestDeadline` (EDD over signed day counts)
//! - **Weight**: `HardestFirst`
//!
//! # Score Convention
//! All rules return lower scores for higher priority subjects.

use super::{DispatchingRule, RankingContext, RuleScore};
use crate::models::Subject;

/// Earliest due date, measured in whole days from `context.today`.
///
/// The day count is signed: overdue subjects score negative and therefore
/// rank ahead of every subject still in the future, regardless of difficulty.
#[derive(Debug, Clone, Copy)]
pub struct NearestDeadline;

impl DispatchingRule for NearestDeadline {
    fn name(&self) -> &'static str {
        "EDD"
    }

    fn evaluate(&self, subject: &Subject, context: &RankingContext) -> RuleScore {
        subject.days_until_deadline(context.today) as f64
    }

    fn description(&self) -> &'static str {
        "Earliest Due Date"
    }
}

/// Highest priority weight (hardest difficulty) first.
#[derive(Debug, Clone, Copy)]
pub struct HardestFirst;

impl DispatchingRule for HardestFirst {
    fn name(&self) -> &'static str {
        "HARD"
    }

    fn evaluate(&self, subject: &Subject, _context: &RankingContext) -> RuleScore {
        -(subject.priority_weight() as f64)
    }

    fn description(&self) -> &'static str {
        "Hardest Subject First"
    }
}
