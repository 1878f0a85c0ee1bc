//! Configuration system for ize.
//! TOML-based, layered resolution: env > project > user > defaults.

pub mod clustering_config;
pub mod faceting_config;
pub mod facets_config;
pub mod ize_config;
pub mod labels_config;
pub mod rules_config;

pub use clustering_config::ClusteringConfig;
pub use faceting_config::FacetingConfig;
pub use facets_config::{FacetField, FacetsConfig};
pub use ize_config::IzeConfig;
pub use labels_config::LabelsConfig;
pub use rules_config::RulesConfig;
