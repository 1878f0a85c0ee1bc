//! Average-linkage agglomerative clustering and dendrogram cutting.

pub mod cut;
pub mod dendrogram;

pub use dendrogram::{Dendrogram, MergeNode, NodeId};
