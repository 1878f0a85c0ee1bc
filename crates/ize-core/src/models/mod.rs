//! Data model shared by the clustering and faceting engines.

pub mod cluster;
pub mod facet_count;
pub mod facet_set;
pub mod faceting;
pub mod item;
pub mod rule;

pub use cluster::{ClusterGroup, ClusterResult, ClusterStats};
pub use facet_count::FacetCount;
pub use facet_set::{split_token, token, FacetSet};
pub use faceting::{FacetingResult, PopulationCounts, RipperGroup};
pub use item::{Hit, Item};
pub use rule::{Clause, DecisionList, RuleQuality};
