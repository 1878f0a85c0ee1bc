//! The similarity-clustering pipeline:
//! extract → distances → dendrogram → k selection → assembly → rules.

use ize_core::config::{ClusteringConfig, FacetsConfig, IzeConfig};
use ize_core::models::{ClusterResult, FacetSet, FacetingResult, Hit, Item, PopulationCounts};

use crate::assemble::{assemble, build_group, Assembly};
use crate::extract::extract_all;
use crate::faceting::FacetingEngine;
use crate::hierarchy::Dendrogram;
use crate::quality::{select_k, KSelection};
use crate::rules::{fit_and_reassign, RuleThresholds};
use crate::similarity::DistanceMatrix;

/// Clusters hits by facet-profile overlap and explains each cluster with a
/// decision-list rule.
#[derive(Debug, Clone, Default)]
pub struct ClusterEngine {
    clustering: ClusteringConfig,
    rules: RuleThresholds,
    facets: FacetsConfig,
}

/// Everything computed up to assembly.
struct Assembled {
    items: Vec<Item>,
    facet_sets: Vec<FacetSet>,
    selection: KSelection,
    assembly: Assembly,
}

enum Stage {
    /// An edge case settled the result before clustering.
    Finished(ClusterResult),
    Assembled(Assembled),
}

impl ClusterEngine {
    pub fn new(clustering: ClusteringConfig, rules: RuleThresholds, facets: FacetsConfig) -> Self {
        Self {
            clustering,
            rules,
            facets,
        }
    }

    pub fn from_config(config: &IzeConfig) -> Self {
        Self::new(
            config.clustering.clone(),
            RuleThresholds::from(&config.rules),
            config.facets.clone(),
        )
    }

    /// Full pipeline. Groups are rule-defined and may overlap; "Other" holds
    /// the items no rule matches.
    pub fn cluster(&self, hits: &[Hit]) -> ClusterResult {
        let assembled = match self.run_to_assembly(hits) {
            Stage::Finished(result) => return result,
            Stage::Assembled(a) => a,
        };
        let Assembled {
            items,
            facet_sets,
            selection,
            assembly,
        } = assembled;

        let (groups, other) = if assembly.drafts.is_empty() {
            (Vec::new(), indices_to_items(&assembly.other, &items))
        } else {
            fit_and_reassign(
                &assembly.drafts,
                &items,
                &facet_sets,
                &self.rules,
                self.clustering.effective_top_facets(),
            )
        };

        tracing::info!(
            selected_k = selection.k,
            actual_clusters = groups.len(),
            other_count = other.len(),
            "clustering completed"
        );

        ClusterResult {
            cluster_count: groups.len(),
            groups,
            other,
            selected_k: Some(selection.k),
            silhouette_scores: selection.scores,
        }
    }

    /// Pipeline up to assembly, without rule fitting. Every item ends in
    /// exactly one group or in "Other", and no group is below the minimum
    /// cluster size.
    pub fn assemble_clusters(&self, hits: &[Hit]) -> ClusterResult {
        let assembled = match self.run_to_assembly(hits) {
            Stage::Finished(result) => return result,
            Stage::Assembled(a) => a,
        };
        let top_n = self.clustering.effective_top_facets();
        let groups: Vec<_> = assembled
            .assembly
            .drafts
            .iter()
            .map(|d| {
                build_group(
                    d.fallback_name(),
                    &d.members,
                    &assembled.items,
                    &assembled.facet_sets,
                    top_n,
                )
            })
            .collect();

        ClusterResult {
            cluster_count: groups.len(),
            groups,
            other: indices_to_items(&assembled.assembly.other, &assembled.items),
            selected_k: Some(assembled.selection.k),
            silhouette_scores: assembled.selection.scores,
        }
    }

    fn run_to_assembly(&self, hits: &[Hit]) -> Stage {
        tracing::debug!(hits_count = hits.len(), "clustering started");

        if hits.is_empty() {
            return Stage::Finished(ClusterResult::default());
        }
        let items: Vec<Item> = hits.iter().map(Item::from).collect();
        if items.len() < 2 {
            tracing::debug!("too few items for clustering");
            return Stage::Finished(ClusterResult::all_other(items));
        }

        let facet_sets = extract_all(hits, &self.facets);
        tracing::debug!(total_items = items.len(), "extracted facet sets");
        if facet_sets.iter().all(FacetSet::is_empty) {
            tracing::debug!("no items have facets, returning all as Other");
            return Stage::Finished(ClusterResult::all_other(items));
        }

        let matrix = DistanceMatrix::build(&facet_sets);
        tracing::debug!(matrix_size = matrix.len(), "built distance matrix");

        let tree = Dendrogram::build(&matrix);
        let Some(selection) = select_k(
            &tree,
            &matrix,
            self.clustering.effective_min_k(),
            self.clustering.effective_max_k(),
        ) else {
            tracing::debug!("no feasible k, returning all as Other");
            return Stage::Finished(ClusterResult::all_other(items));
        };
        tracing::info!(
            selected_k = selection.k,
            silhouette_scores = ?selection.scores,
            "selected k"
        );

        let assembly = assemble(
            &selection.partition,
            self.clustering.effective_min_cluster_size(),
        );
        Stage::Assembled(Assembled {
            items,
            facet_sets,
            selection,
            assembly,
        })
    }
}

fn indices_to_items(indices: &[usize], items: &[Item]) -> Vec<Item> {
    indices.iter().map(|&i| items[i].clone()).collect()
}

/// [`ClusterEngine::cluster`] with default configuration.
pub fn cluster(hits: &[Hit]) -> ClusterResult {
    ClusterEngine::default().cluster(hits)
}

/// [`FacetingEngine::facet_greedy`] with default configuration.
pub fn facet_greedy(hits: &[Hit], population: Option<&PopulationCounts>) -> FacetingResult {
    FacetingEngine::default().facet_greedy(hits, population)
}
