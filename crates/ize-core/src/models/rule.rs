//! Decision-list rules: an AND of clauses, each an OR over one facet's values.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::facet_set::{token, FacetSet};
use crate::types::collections::SmallVec3;

/// Rendering of a rule with no clauses.
pub const EMPTY_RULE: &str = "(empty rule)";

/// One facet with the values it accepts (OR semantics).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clause {
    pub facet_name: String,
    pub values: Vec<String>,
}

impl Clause {
    pub fn new(facet_name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            facet_name: facet_name.into(),
            values,
        }
    }

    /// True when at least one accepted value is present. A clause without
    /// values matches nothing.
    pub fn matches(&self, facets: &FacetSet) -> bool {
        self.values
            .iter()
            .any(|v| facets.contains_pair(&self.facet_name, v))
    }

    /// `facet:value` tokens, one per accepted value.
    pub fn tokens(&self) -> Vec<String> {
        self.values
            .iter()
            .map(|v| token(&self.facet_name, v))
            .collect()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens = self.tokens();
        if tokens.len() == 1 {
            f.write_str(&tokens[0])
        } else {
            write!(f, "({})", tokens.join(" OR "))
        }
    }
}

/// An interpretable membership rule for a cluster.
///
/// Holds at most three clauses in practice; the inline capacity reflects that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionList {
    pub clauses: SmallVec3<Clause>,
}

impl DecisionList {
    pub fn new(clauses: impl IntoIterator<Item = Clause>) -> Self {
        Self {
            clauses: clauses.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Every clause must match. The empty rule matches everything.
    pub fn matches(&self, facets: &FacetSet) -> bool {
        self.clauses.iter().all(|c| c.matches(facets))
    }

    /// Filter form consumed by the search backend: outer AND, inner OR,
    /// entries `facet:value`. Clauses without values are skipped.
    pub fn to_filter_expression(&self) -> Vec<Vec<String>> {
        self.clauses
            .iter()
            .filter(|c| !c.values.is_empty())
            .map(Clause::tokens)
            .collect()
    }
}

impl fmt::Display for DecisionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.clauses.is_empty() {
            return f.write_str(EMPTY_RULE);
        }
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(" AND ")?;
            }
            write!(f, "{clause}")?;
        }
        Ok(())
    }
}

/// How well a rule captures its cluster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleQuality {
    /// Fraction of rule matches that are cluster members.
    pub precision: f64,
    /// Fraction of cluster members matched by the rule.
    pub recall: f64,
    pub f1: f64,
}

impl RuleQuality {
    pub fn new(precision: f64, recall: f64) -> Self {
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };
        Self {
            precision,
            recall,
            f1,
        }
    }
}
