//! Decision-list rule fitting configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Thresholds for greedy rule induction.
///
/// The defaults are load-bearing: changing them changes which clauses are
/// accepted and therefore every downstream group.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RulesConfig {
    /// Maximum clauses per rule. Default: 3.
    pub max_clauses: Option<usize>,
    /// Minimum lift for a value to join a clause. Default: 1.2.
    pub min_lift: Option<f64>,
    /// Largest recall drop tolerated per added clause. Default: 0.1.
    pub max_recall_drop: Option<f64>,
    /// Minimum recall after adding a clause. Default: 0.5.
    pub min_recall: Option<f64>,
}

impl RulesConfig {
    pub fn effective_max_clauses(&self) -> usize {
        self.max_clauses.unwrap_or(constants::DEFAULT_MAX_CLAUSES)
    }

    pub fn effective_min_lift(&self) -> f64 {
        self.min_lift.unwrap_or(constants::DEFAULT_MIN_LIFT)
    }

    pub fn effective_max_recall_drop(&self) -> f64 {
        self.max_recall_drop
            .unwrap_or(constants::DEFAULT_MAX_RECALL_DROP)
    }

    pub fn effective_min_recall(&self) -> f64 {
        self.min_recall.unwrap_or(constants::DEFAULT_MIN_RECALL)
    }
}
