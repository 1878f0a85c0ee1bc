//! Per-value counts and lift-based value eligibility.

use ize_core::models::{split_token, FacetSet};
use ize_core::types::collections::BTreeMap;

use crate::stats::ratio;

/// How often one facet value occurs among positives and overall.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValueCounts {
    pub positive: usize,
    pub total: usize,
}

/// facet name -> value -> counts, sorted for deterministic iteration.
pub type FacetValueStats = BTreeMap<String, BTreeMap<String, ValueCounts>>;

/// Counts every token of every item, marking those of positive items.
/// Tokens with an empty facet name are ignored.
pub fn collect_facet_stats(is_positive: &[bool], facet_sets: &[FacetSet]) -> FacetValueStats {
    let mut stats = FacetValueStats::new();
    for (idx, set) in facet_sets.iter().enumerate() {
        let positive = is_positive.get(idx).copied().unwrap_or(false);
        for token in set.iter() {
            let (name, value) = split_token(token);
            if name.is_empty() {
                continue;
            }
            let counts = stats
                .entry(name.to_string())
                .or_default()
                .entry(value.to_string())
                .or_default();
            counts.total += 1;
            if positive {
                counts.positive += 1;
            }
        }
    }
    stats
}

/// `P(value | positive) / P(value | all)`. `None` for values never seen
/// among positives.
pub fn lift(counts: ValueCounts, total_positives: usize, total_items: usize) -> Option<f64> {
    if counts.total == 0 || counts.positive == 0 {
        return None;
    }
    let p_all = ratio(counts.total, total_items);
    if p_all <= 0.0 {
        return None;
    }
    Some(ratio(counts.positive, total_positives) / p_all)
}

/// Values of one facet whose lift reaches `min_lift`, in sorted order.
pub fn eligible_values(
    values: &BTreeMap<String, ValueCounts>,
    total_positives: usize,
    total_items: usize,
    min_lift: f64,
) -> Vec<String> {
    values
        .iter()
        .filter(|(_, counts)| {
            lift(**counts, total_positives, total_items).is_some_and(|l| l >= min_lift)
        })
        .map(|(value, _)| value.clone())
        .collect()
}
