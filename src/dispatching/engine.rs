//! Rule engine for multi-criteria subject ranking.
//!
//! Applies rules in sequence: the first rule whose scores differ by more
//! than `epsilon` decides, later rules only break ties.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchingRule, RankingContext, RuleScore};
use crate::models::Subject;

/// A composable rule engine for subject prioritization.
///
/// # Example
/// ```
/// use study_planner::dispatching::{RankingContext, RuleEngine};
/// use study_planner::dispatching::rules;
/// use study_planner::models::{Difficulty, Subject};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let subjects = vec![
///     Subject::new("Late", NaiveDate::from_ymd_opt(2025, 3, 20).unwrap(), Difficulty::Hard, 3.0),
///     Subject::new("Soon", NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(), Difficulty::Easy, 3.0),
/// ];
///
/// let engine = RuleEngine::new().with_rule(rules::NearestDeadline);
/// let order = engine.sort_indices(&subjects, &RankingContext::on(today));
/// assert_eq!(subjects[order[0]].name, "Soon");
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            epsilon: 1e-9,
        }
    }

    /// Appends a rule. Earlier rules take precedence.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Number of configured rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Sorts subjects by priority (highest priority first).
    ///
    /// Returns indices into the original slice. The sort is stable, so
    /// fully tied subjects keep their input order.
    pub fn sort_indices(&self, subjects: &[Subject], context: &RankingContext) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..subjects.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&subjects[a], &subjects[b], context));
        indices
    }

    /// Evaluates a single subject and returns scores from each rule.
    pub fn evaluate(&self, subject: &Subject, context: &RankingContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(subject, context))
            .collect()
    }

    fn compare(&self, a: &Subject, b: &Subject, context: &RankingContext) -> Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a, context);
            let score_b = rule.evaluate(b, context);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a.partial_cmp(&score_b).unwrap_or(Ordering::Equal);
            }
        }

        Ordering::Equal
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .field("epsilon", &self.epsilon)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;
    use crate::models::Difficulty;
    use chrono::{Duration, NaiveDate};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn make_subject(name: &str, days: i64, difficulty: Difficulty, hours: f64) -> Subject {
        Subject::new(name, today() + Duration::days(days), difficulty, hours)
    }

    #[test]
    fn test_deadline_ordering() {
        let subjects = vec![
            make_subject("late", 20, Difficulty::Easy, 2.0),
            make_subject("early", 2, Difficulty::Easy, 2.0),
            make_subject("middle", 7, Difficulty::Easy, 2.0),
        ];
        let ctx = RankingContext::on(today());
        let engine = RuleEngine::new().with_rule(rules::NearestDeadline);

        let indices = engine.sort_indices(&subjects, &ctx);
        assert_eq!(subjects[indices[0]].name, "early");
        assert_eq!(subjects[indices[1]].name, "middle");
        assert_eq!(subjects[indices[2]].name, "late");
    }

    #[test]
    fn test_sequential_with_tie_breaker() {
        let subjects = vec![
            make_subject("A", 5, Difficulty::Easy, 2.0),
            make_subject("B", 5, Difficulty::Hard, 2.0), // Same deadline as A
        ];
        let ctx = RankingContext::on(today());
        let engine = RuleEngine::new()
            .with_rule(rules::NearestDeadline)
            .with_rule(rules::HardestFirst);

        let indices = engine.sort_indices(&subjects, &ctx);
        // EDD ties, difficulty breaks it: B (harder) first
        assert_eq!(subjects[indices[0]].name, "B");
    }

    #[test]
    fn test_input_order_preserved_on_full_tie() {
        let subjects = vec![
            make_subject("second", 5, Difficulty::Medium, 2.0),
            make_subject("first", 5, Difficulty::Medium, 2.0),
        ];
        let ctx = RankingContext::on(today());
        let engine = RuleEngine::new()
            .with_rule(rules::NearestDeadline)
            .with_rule(rules::HardestFirst);

        assert_eq!(engine.sort_indices(&subjects, &ctx), vec![0, 1]);
    }

    #[test]
    fn test_empty_subjects() {
        let ctx = RankingContext::on(today());
        let engine = RuleEngine::new().with_rule(rules::NearestDeadline);
        assert!(engine.sort_indices(&[], &ctx).is_empty());
    }

    #[test]
    fn test_evaluate_scores() {
        let subject = make_subject("T1", 4, Difficulty::Medium, 2.0);
        let ctx = RankingContext::on(today());
        let engine = RuleEngine::new()
            .with_rule(rules::NearestDeadline)
            .with_rule(rules::HardestFirst);

        let scores = engine.evaluate(&subject, &ctx);
        assert_eq!(scores.len(), 2);
        assert!((scores[0] - 4.0).abs() < 1e-10);
        assert!((scores[1] + 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_debug_lists_rule_names() {
        let engine = RuleEngine::new()
            .with_rule(rules::NearestDeadline)
            .with_rule(rules::HardestFirst);
        let dbg = format!("{engine:?}");
        assert!(dbg.contains("EDD"));
        assert!(dbg.contains("HARD"));
        assert_eq!(engine.rule_count(), 2);
    }
}
