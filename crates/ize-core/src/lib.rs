//! # ize-core
//!
//! Foundation crate for the ize facet grouping engine.
//! Defines the item and group model, the decision-list rule type, errors,
//! configuration, tracing setup, and the label generator trait.
//! The algorithm crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::IzeConfig;
pub use errors::{IzeError, IzeResult};
pub use models::{
    Clause, ClusterGroup, ClusterResult, ClusterStats, DecisionList, FacetCount, FacetSet,
    FacetingResult, Hit, Item, PopulationCounts, RipperGroup, RuleQuality,
};
pub use traits::ILabelGenerator;
