//! Default subject ordering used by the planner.

use chrono::NaiveDate;
use tracing::debug;

use super::{rules, RankingContext, RuleEngine};
use crate::models::Subject;

/// Orders subjects by urgency, then difficulty.
///
/// Sort key: ascending signed days until deadline, tie-broken by descending
/// priority weight. Fully tied subjects keep their input order.
///
/// Overdue subjects have negative day counts and so outrank every subject
/// with a future deadline, even much harder ones.
#[derive(Debug, Clone)]
pub struct PriorityRanker {
    engine: RuleEngine,
}

impl PriorityRanker {
    /// Creates the default urgency-then-difficulty ranker.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new()
                .with_rule(rules::NearestDeadline)
                .with_rule(rules::HardestFirst),
        }
    }

    /// Uses a custom rule engine instead of the default ordering.
    pub fn with_engine(engine: RuleEngine) -> Self {
        Self { engine }
    }

    /// Returns the subjects in priority order.
    pub fn rank<'a>(&self, subjects: &'a [Subject], today: NaiveDate) -> Vec<&'a Subject> {
        let context = RankingContext::on(today);
        let ranked: Vec<&Subject> = self
            .engine
            .sort_indices(subjects, &context)
            .into_iter()
            .map(|i| &subjects[i])
            .collect();
        debug!(
            order = ?ranked.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
            "ranked subjects"
        );
        ranked
    }
}

impl Default for PriorityRanker {
    fn default() -> Self {
        Self::new()
    }
}
