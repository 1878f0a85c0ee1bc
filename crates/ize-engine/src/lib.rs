//! # ize-engine
//!
//! Grouping engines over a page of search hits:
//! - similarity clustering (Jaccard distance, average-linkage dendrogram,
//!   silhouette k selection) with decision-list rules per cluster,
//! - greedy entropy-weighted faceting,
//! - cluster labeling through an injected generator.
//!
//! Both engines are deterministic, synchronous and never fail.

pub mod assemble;
pub mod extract;
pub mod faceting;
pub mod hierarchy;
pub mod labeling;
pub mod pipeline;
pub mod processor;
pub mod quality;
pub mod rules;
pub mod similarity;
pub mod stats;

pub use faceting::FacetingEngine;
pub use labeling::{apply_labels, render_prompt, CachedLabelGenerator, RetryingLabelGenerator};
pub use pipeline::{cluster, facet_greedy, ClusterEngine};
pub use processor::{process, Processed, Strategy};
pub use rules::RuleThresholds;
pub use similarity::{jaccard_distance, DistanceMatrix};
