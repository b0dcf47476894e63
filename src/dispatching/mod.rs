//! Subject ranking: dispatching rules and the rule engine.
//!
//! Subjects are ordered by composable rules evaluated in sequence, the
//! next rule consulted only when the previous one ties. The planner's
//! default ordering is [`PriorityRanker`]: nearest deadline first, then
//! hardest subject first.
//!
//! # Usage
//!
//! ```
//! use study_planner::dispatching::{RankingContext, RuleEngine};
//! use study_planner::dispatching::rules;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::NearestDeadline)
//!     .with_rule(rules::HardestFirst);
//!
//! let today = chrono::NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
//! let context = RankingContext::on(today);
//! assert!(engine.sort_indices(&[], &context).is_empty());
//! ```

mod context;
mod engine;
mod ranker;
pub mod rules;

pub use context::RankingContext;
pub use engine::RuleEngine;
pub use ranker::PriorityRanker;

use crate::models::Subject;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (scheduled first).
pub type RuleScore = f64;

/// A rule that scores a subject's urgency.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules return smaller values for
/// subjects that should receive study time first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "EDD").
    fn name(&self) -> &'static str;

    /// Evaluates a subject in the given ranking context.
    fn evaluate(&self, subject: &Subject, context: &RankingContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
