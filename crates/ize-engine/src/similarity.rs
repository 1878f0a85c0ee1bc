//! Jaccard distances between facet sets.

use ize_core::models::FacetSet;

/// `1 - |A ∩ B| / |A ∪ B|`.
///
/// Two empty sets are maximally distant: having no facets says nothing
/// about similarity.
pub fn jaccard_distance(a: &FacetSet, b: &FacetSet) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let intersection = a.intersection_len(b);
    let union = a.len() + b.len() - intersection;
    1.0 - intersection as f64 / union as f64
}

/// Dense symmetric n×n distance matrix with a zero diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Computes every pairwise distance once and mirrors it.
    pub fn build(facet_sets: &[FacetSet]) -> Self {
        let n = facet_sets.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = jaccard_distance(&facet_sets[i], &facet_sets[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { n, data }
    }

    /// Builds a matrix from explicit rows. Rows must form a square.
    pub fn from_rows(rows: &[Vec<f64>]) -> Self {
        let n = rows.len();
        let data = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Self { n, data }
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Mean distance from `i` to every index in `members`, skipping `i` itself.
    /// `None` when nothing is left to average over.
    pub fn mean_distance_to(&self, i: usize, members: &[usize]) -> Option<f64> {
        let mut sum = 0.0;
        let mut count = 0usize;
        for &j in members {
            if j != i {
                sum += self.get(i, j);
                count += 1;
            }
        }
        (count > 0).then(|| sum / count as f64)
    }
}
