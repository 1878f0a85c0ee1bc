//! Strategy selection for processing a page of search hits.

use std::fmt;
use std::str::FromStr;

use ize_core::config::IzeConfig;
use ize_core::models::{ClusterResult, FacetingResult, Hit, Item, PopulationCounts};
use serde::{Deserialize, Serialize};

use crate::faceting::FacetingEngine;
use crate::pipeline::ClusterEngine;

/// How results are post-processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Hits mapped to items unchanged.
    #[default]
    PassThrough,
    /// Similarity clustering with fitted rules.
    Cluster,
    /// Greedy faceting.
    Facet,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PassThrough => "pass_through",
            Self::Cluster => "cluster",
            Self::Facet => "facet",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown processing strategy: {0}")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pass_through" | "passthrough" | "default" | "" => Ok(Self::PassThrough),
            "cluster" => Ok(Self::Cluster),
            "facet" | "ripper" => Ok(Self::Facet),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}

/// Output of [`process`], one variant per strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", content = "result", rename_all = "snake_case")]
pub enum Processed {
    PassThrough(Vec<Item>),
    Cluster(ClusterResult),
    Facet(FacetingResult),
}

/// Maps hits to items without modification.
pub fn pass_through(hits: &[Hit]) -> Vec<Item> {
    hits.iter().map(Item::from).collect()
}

/// Runs the chosen strategy. `population` is only used by faceting.
pub fn process(
    strategy: Strategy,
    hits: &[Hit],
    population: Option<&PopulationCounts>,
    config: &IzeConfig,
) -> Processed {
    tracing::debug!(%strategy, hits_count = hits.len(), "processing hits");
    match strategy {
        Strategy::PassThrough => Processed::PassThrough(pass_through(hits)),
        Strategy::Cluster => Processed::Cluster(ClusterEngine::from_config(config).cluster(hits)),
        Strategy::Facet => Processed::Facet(
            FacetingEngine::from_config(config).facet_greedy(hits, population),
        ),
    }
}
