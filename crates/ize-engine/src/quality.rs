//! Silhouette scoring and k selection.

use ize_core::types::collections::BTreeMap;

use crate::hierarchy::Dendrogram;
use crate::similarity::DistanceMatrix;

/// Assignment of every item to a cluster id in `[0, k)`, or to none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    assignments: Vec<Option<usize>>,
    k: usize,
}

impl Partition {
    /// Converts member lists (as produced by a cut) into assignments.
    /// Items not listed stay unassigned.
    pub fn from_clusters(clusters: &[Vec<usize>], n: usize) -> Self {
        let mut assignments = vec![None; n];
        for (cluster, members) in clusters.iter().enumerate() {
            for &item in members {
                if let Some(slot) = assignments.get_mut(item) {
                    *slot = Some(cluster);
                }
            }
        }
        Self {
            assignments,
            k: clusters.len(),
        }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn cluster_of(&self, item: usize) -> Option<usize> {
        self.assignments.get(item).copied().flatten()
    }

    /// Members of each cluster id, in item order.
    pub fn members(&self) -> Vec<Vec<usize>> {
        let mut clusters = vec![Vec::new(); self.k];
        for (item, cluster) in self.assignments.iter().enumerate() {
            if let Some(c) = *cluster {
                clusters[c].push(item);
            }
        }
        clusters
    }

    /// Items assigned to no cluster.
    pub fn unassigned(&self) -> Vec<usize> {
        self.assignments
            .iter()
            .enumerate()
            .filter_map(|(item, c)| c.is_none().then_some(item))
            .collect()
    }
}

/// Mean silhouette over every item that yields a defined score.
///
/// Items in singleton clusters are skipped, as are items with no other
/// nonempty cluster or with `max(a, b) = 0`. Returns 0 when nothing is valid.
pub fn silhouette_score(matrix: &DistanceMatrix, partition: &Partition) -> f64 {
    if partition.len() < 2 || partition.k() < 2 {
        return 0.0;
    }
    let clusters = partition.members();

    let mut total = 0.0;
    let mut valid = 0usize;
    for item in 0..partition.len() {
        if let Some(s) = point_silhouette(item, partition, &clusters, matrix) {
            total += s;
            valid += 1;
        }
    }

    if valid == 0 {
        0.0
    } else {
        total / valid as f64
    }
}

fn point_silhouette(
    item: usize,
    partition: &Partition,
    clusters: &[Vec<usize>],
    matrix: &DistanceMatrix,
) -> Option<f64> {
    let own = partition.cluster_of(item)?;
    let members = &clusters[own];
    if members.len() <= 1 {
        return None;
    }

    let a = matrix.mean_distance_to(item, members)?;
    let b = clusters
        .iter()
        .enumerate()
        .filter(|(c, m)| *c != own && !m.is_empty())
        .filter_map(|(_, m)| matrix.mean_distance_to(item, m))
        .fold(f64::INFINITY, f64::min);
    if b.is_infinite() {
        return None;
    }

    let max_ab = a.max(b);
    if max_ab == 0.0 {
        return None;
    }
    Some((b - a) / max_ab)
}

/// Outcome of silhouette-driven k selection.
#[derive(Debug, Clone)]
pub struct KSelection {
    pub k: usize,
    pub partition: Partition,
    pub score: f64,
    /// Score of every k that produced a full partition.
    pub scores: BTreeMap<usize, f64>,
}

/// Tries k in `[min_k, max(min_k, min(max_k, n - 1))]` and keeps the
/// strictly best silhouette; the first k wins ties. A k whose cut yields
/// fewer than k clusters is skipped. `None` when no k was feasible.
pub fn select_k(
    tree: &Dendrogram,
    matrix: &DistanceMatrix,
    min_k: usize,
    max_k: usize,
) -> Option<KSelection> {
    let n = matrix.len();
    let upper = max_k.min(n.saturating_sub(1)).max(min_k);

    let mut scores = BTreeMap::new();
    let mut best: Option<KSelection> = None;

    for k in min_k..=upper {
        let clusters = tree.cut(k);
        if clusters.len() < k {
            continue;
        }
        let partition = Partition::from_clusters(&clusters, n);
        let score = silhouette_score(matrix, &partition);
        scores.insert(k, score);

        tracing::debug!(k, silhouette_score = format_args!("{score:.4}"), "evaluated k");

        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(KSelection {
                k,
                partition,
                score,
                scores: BTreeMap::new(),
            });
        }
    }

    best.map(|mut selection| {
        selection.scores = scores;
        selection
    })
}
