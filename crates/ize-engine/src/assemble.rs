//! Turning a partition into named cluster groups.

use ize_core::models::{split_token, ClusterGroup, FacetCount, FacetSet, Item};
use ize_core::types::collections::FxHashMap;

use crate::quality::Partition;
use crate::stats::percentage;

/// A surviving cluster before rule fitting: its id in the partition and
/// its member item indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterDraft {
    pub cluster_id: usize,
    pub members: Vec<usize>,
}

impl ClusterDraft {
    /// `Cluster <1-based id>`.
    pub fn fallback_name(&self) -> String {
        format!("Cluster {}", self.cluster_id + 1)
    }
}

/// Drafts plus the item indices evicted to "Other".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembly {
    pub drafts: Vec<ClusterDraft>,
    pub other: Vec<usize>,
}

/// Keeps every cluster with at least `min_cluster_size` members.
///
/// "Other" lists unassigned items first, then evicted clusters in id order.
pub fn assemble(partition: &Partition, min_cluster_size: usize) -> Assembly {
    let mut assembly = Assembly {
        drafts: Vec::new(),
        other: partition.unassigned(),
    };

    for (cluster_id, members) in partition.members().into_iter().enumerate() {
        if members.is_empty() {
            continue;
        }
        if members.len() < min_cluster_size {
            tracing::debug!(
                cluster_id,
                size = members.len(),
                min_size = min_cluster_size,
                "moving small cluster to Other"
            );
            assembly.other.extend(members);
            continue;
        }
        assembly.drafts.push(ClusterDraft {
            cluster_id,
            members,
        });
    }
    assembly
}

/// The `limit` most frequent tokens among `members`, by count descending
/// then token ascending. Percentages are relative to the member count.
pub fn top_facets(members: &[usize], facet_sets: &[FacetSet], limit: usize) -> Vec<FacetCount> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for &idx in members {
        for token in facet_sets[idx].iter() {
            *counts.entry(token).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(limit);

    ranked
        .into_iter()
        .map(|(token, count)| {
            let (name, value) = split_token(token);
            FacetCount {
                facet_name: name.to_string(),
                facet_value: value.to_string(),
                count,
                percentage: percentage(count, members.len()),
            }
        })
        .collect()
}

/// Materializes a group from member indices.
pub fn build_group(
    name: String,
    members: &[usize],
    items: &[Item],
    facet_sets: &[FacetSet],
    top_n: usize,
) -> ClusterGroup {
    ClusterGroup {
        name,
        items: members.iter().map(|&i| items[i].clone()).collect(),
        top_facets: top_facets(members, facet_sets, top_n),
        percentage: percentage(members.len(), items.len()),
        rule: None,
        rule_quality: None,
    }
}
