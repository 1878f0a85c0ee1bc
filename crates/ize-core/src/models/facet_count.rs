use serde::{Deserialize, Serialize};

/// A `facet:value` pair with its occurrence count inside a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetCount {
    pub facet_name: String,
    pub facet_value: String,
    pub count: usize,
    /// `count / group size * 100`.
    pub percentage: f64,
}
