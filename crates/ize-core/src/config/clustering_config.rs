//! Similarity clustering configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the hierarchical clustering pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Smallest k tried during silhouette selection. Default: 2.
    pub min_k: Option<usize>,
    /// Largest k tried (further capped at n-1). Default: 6.
    pub max_k: Option<usize>,
    /// Clusters below this size go to "Other". Default: 2.
    pub min_cluster_size: Option<usize>,
    /// Facet tokens reported per cluster. Default: 5.
    pub top_facets: Option<usize>,
}

impl ClusteringConfig {
    /// Returns the effective minimum k, defaulting to 2.
    pub fn effective_min_k(&self) -> usize {
        self.min_k.unwrap_or(constants::DEFAULT_MIN_K)
    }

    /// Returns the effective maximum k, defaulting to 6.
    pub fn effective_max_k(&self) -> usize {
        self.max_k.unwrap_or(constants::DEFAULT_MAX_K)
    }

    /// Returns the effective minimum cluster size, defaulting to 2.
    pub fn effective_min_cluster_size(&self) -> usize {
        self.min_cluster_size
            .unwrap_or(constants::DEFAULT_MIN_CLUSTER_SIZE)
    }

    /// Returns the effective top-facet count, defaulting to 5.
    pub fn effective_top_facets(&self) -> usize {
        self.top_facets.unwrap_or(constants::DEFAULT_TOP_FACETS)
    }
}
