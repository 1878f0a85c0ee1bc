//! Output types of the similarity-clustering engine.

use serde::{Deserialize, Serialize};

use super::facet_count::FacetCount;
use super::item::Item;
use super::rule::{DecisionList, RuleQuality};
use crate::types::collections::BTreeMap;

/// Summary handed to a label generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterStats {
    pub size: usize,
    pub top_facets: Vec<FacetCount>,
}

/// One group of similar items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterGroup {
    /// Display name. Starts as `Cluster N`, then the rule text, then
    /// whatever a label generator returns.
    pub name: String,
    pub items: Vec<Item>,
    pub top_facets: Vec<FacetCount>,
    /// Share of the whole result set held by this group, in percent.
    pub percentage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<DecisionList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_quality: Option<RuleQuality>,
}

impl ClusterGroup {
    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn stats(&self) -> ClusterStats {
        ClusterStats {
            size: self.items.len(),
            top_facets: self.top_facets.clone(),
        }
    }

    /// Filter form of the fitted rule, empty when no rule was fitted.
    pub fn filter_expression(&self) -> Vec<Vec<String>> {
        self.rule
            .as_ref()
            .map(DecisionList::to_filter_expression)
            .unwrap_or_default()
    }
}

/// Result of one clustering call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterResult {
    pub groups: Vec<ClusterGroup>,
    pub other: Vec<Item>,
    /// Number of groups actually returned.
    pub cluster_count: usize,
    /// The k chosen by silhouette selection, if clustering ran.
    pub selected_k: Option<usize>,
    /// Silhouette score of every k that produced a full partition.
    pub silhouette_scores: BTreeMap<usize, f64>,
}

impl ClusterResult {
    /// Result with every item in "Other".
    pub fn all_other(items: Vec<Item>) -> Self {
        Self {
            other: items,
            ..Self::default()
        }
    }
}
