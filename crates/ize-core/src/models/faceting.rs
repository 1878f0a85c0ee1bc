//! Output types of the greedy faceting engine.

use serde::{Deserialize, Serialize};

use super::item::Item;
use crate::types::collections::BTreeMap;

/// Authoritative per-value counts from the search backend:
/// facet name -> value -> number of matching records.
pub type PopulationCounts = BTreeMap<String, BTreeMap<String, u64>>;

/// Items grouped under one selected facet value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RipperGroup {
    pub facet_name: String,
    pub facet_value: String,
    /// Items that were unassigned when this value was selected.
    pub items: Vec<Item>,
    /// Display count: the value's population count, not `items.len()`.
    pub total_count: u64,
}

/// Result of one greedy faceting call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetingResult {
    pub groups: Vec<RipperGroup>,
    pub other: Vec<Item>,
}

impl FacetingResult {
    pub fn all_other(items: Vec<Item>) -> Self {
        Self {
            groups: Vec::new(),
            other: items,
        }
    }
}
