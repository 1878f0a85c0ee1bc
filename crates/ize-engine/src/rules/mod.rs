//! Greedy decision-list induction and rule-based re-partitioning.
//!
//! Each surviving cluster gets a rule of at most three clauses explaining
//! its membership; every item is then re-evaluated against every rule, so
//! the final groups may overlap.

pub mod fit;
pub mod lift;
pub mod reassign;

pub use fit::{fit_decision_list, RuleEvaluator};
pub use lift::{collect_facet_stats, eligible_values, FacetValueStats, ValueCounts};
pub use reassign::{fit_and_reassign, fit_rules, reassign, FittedRule};

use ize_core::config::RulesConfig;
use ize_core::constants;

/// Acceptance thresholds for clause selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleThresholds {
    pub max_clauses: usize,
    pub min_lift: f64,
    pub max_recall_drop: f64,
    pub min_recall: f64,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            max_clauses: constants::DEFAULT_MAX_CLAUSES,
            min_lift: constants::DEFAULT_MIN_LIFT,
            max_recall_drop: constants::DEFAULT_MAX_RECALL_DROP,
            min_recall: constants::DEFAULT_MIN_RECALL,
        }
    }
}

impl From<&RulesConfig> for RuleThresholds {
    fn from(config: &RulesConfig) -> Self {
        Self {
            max_clauses: config.effective_max_clauses(),
            min_lift: config.effective_min_lift(),
            max_recall_drop: config.effective_max_recall_drop(),
            min_recall: config.effective_min_recall(),
        }
    }
}
