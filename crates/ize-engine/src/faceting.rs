//! Greedy, entropy-weighted faceting into disjoint groups.

use std::cmp::Ordering;

use ize_core::config::{FacetingConfig, FacetsConfig, IzeConfig};
use ize_core::models::{token, FacetingResult, Hit, Item, PopulationCounts, RipperGroup};
use ize_core::types::collections::BTreeMap;

use crate::extract::for_each_facet_value;
use crate::stats::binary_entropy;

/// facet name -> value -> indices of items carrying it, ascending.
type ValueIndex<'a> = BTreeMap<&'a str, BTreeMap<&'a str, Vec<usize>>>;

/// Balanced-split gain for a value covering `p` of `t` unassigned items:
/// `H(p/t) * p * (1 - p/t)`, and 0 when `p` is 0 or `t`.
pub fn split_gain(p: usize, t: usize) -> f64 {
    if p == 0 || t == 0 || p == t {
        return 0.0;
    }
    let ratio = p as f64 / t as f64;
    binary_entropy(ratio) * p as f64 * (1.0 - ratio)
}

#[derive(Debug)]
struct Selection<'a> {
    facet: &'a str,
    value: &'a str,
    token: String,
    gain: f64,
    indices: Vec<usize>,
}

impl Selection<'_> {
    /// Higher gain, then more items, then the smaller `facet:value` token.
    fn beats(&self, other: &Selection<'_>) -> bool {
        match self.gain.partial_cmp(&other.gain) {
            Some(Ordering::Greater) => true,
            Some(Ordering::Equal) => match self.indices.len().cmp(&other.indices.len()) {
                Ordering::Greater => true,
                Ordering::Equal => self.token < other.token,
                Ordering::Less => false,
            },
            _ => false,
        }
    }
}

/// RIPPER-style greedy faceting.
///
/// Up to `max_groups` rounds each pick the not-yet-selected facet value
/// with the best [`split_gain`] over the still-unassigned items, skipping
/// values that cover fewer than the minimum group size. Items land in the
/// first selected group they match; the rest form "Other".
#[derive(Debug, Clone, Default)]
pub struct FacetingEngine {
    config: FacetingConfig,
    facets: FacetsConfig,
}

impl FacetingEngine {
    pub fn new(config: FacetingConfig, facets: FacetsConfig) -> Self {
        Self { config, facets }
    }

    pub fn from_config(config: &IzeConfig) -> Self {
        Self::new(config.faceting.clone(), config.facets.clone())
    }

    /// Groups `hits`. `population` supplies authoritative per-value counts
    /// for display; values missing from it fall back to the local count.
    pub fn facet_greedy(&self, hits: &[Hit], population: Option<&PopulationCounts>) -> FacetingResult {
        tracing::debug!(hits_count = hits.len(), "faceting started");

        let total_items = hits.len();
        if total_items == 0 {
            return FacetingResult::default();
        }
        let items: Vec<Item> = hits.iter().map(Item::from).collect();
        let min_group_size = self.config.min_group_size(total_items);
        let max_groups = self.config.effective_max_groups();

        let index = self.build_index(hits);
        tracing::debug!(
            total_items,
            min_group_size,
            facet_names_count = index.len(),
            "extracted facets"
        );

        let mut assigned = vec![false; total_items];
        let mut assigned_count = 0usize;
        let mut selected: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        let mut groups: Vec<RipperGroup> = Vec::with_capacity(max_groups);

        for iteration in 1..=max_groups {
            let unassigned = total_items - assigned_count;
            if unassigned < min_group_size {
                tracing::debug!(
                    iteration,
                    unassigned,
                    min_group_size,
                    "stopping early, insufficient unassigned items"
                );
                break;
            }

            let mut best: Option<Selection> = None;
            for (&facet, values) in &index {
                for (&value, all_indices) in values {
                    if selected
                        .get(facet)
                        .is_some_and(|vals| vals.contains(&value))
                    {
                        continue;
                    }
                    let indices: Vec<usize> = all_indices
                        .iter()
                        .copied()
                        .filter(|&i| !assigned[i])
                        .collect();
                    if indices.is_empty() || indices.len() < min_group_size {
                        continue;
                    }

                    let candidate = Selection {
                        facet,
                        value,
                        token: token(facet, value),
                        gain: split_gain(indices.len(), unassigned),
                        indices,
                    };
                    if best.as_ref().map_or(true, |b| candidate.beats(b)) {
                        best = Some(candidate);
                    }
                }
            }

            let Some(choice) = best else {
                tracing::debug!(iteration, "no valid facet value found, stopping");
                break;
            };

            tracing::debug!(
                iteration,
                facet_name = choice.facet,
                facet_value = choice.value,
                items_count = choice.indices.len(),
                information_gain = format_args!("{:.4}", choice.gain),
                "selected facet value"
            );

            for &i in &choice.indices {
                assigned[i] = true;
            }
            assigned_count += choice.indices.len();
            selected.entry(choice.facet).or_default().push(choice.value);

            let local_count = index
                .get(choice.facet)
                .and_then(|v| v.get(choice.value))
                .map_or(0, Vec::len) as u64;
            let total_count = population
                .and_then(|p| p.get(choice.facet))
                .and_then(|v| v.get(choice.value))
                .copied()
                .unwrap_or(local_count);

            groups.push(RipperGroup {
                facet_name: choice.facet.to_string(),
                facet_value: choice.value.to_string(),
                items: choice.indices.iter().map(|&i| items[i].clone()).collect(),
                total_count,
            });
        }

        let other: Vec<Item> = items
            .iter()
            .zip(&assigned)
            .filter(|(_, a)| !**a)
            .map(|(item, _)| item.clone())
            .collect();

        tracing::debug!(
            selected_groups_count = groups.len(),
            other_count = other.len(),
            total_assigned = assigned_count,
            total_items,
            "faceting completed"
        );

        FacetingResult { groups, other }
    }

    fn build_index<'a>(&self, hits: &'a [Hit]) -> ValueIndex<'a> {
        let mut index: ValueIndex<'a> = BTreeMap::new();
        for (i, hit) in hits.iter().enumerate() {
            for_each_facet_value(&hit.facets, &self.facets, |name, value| {
                let indices = index.entry(name).or_default().entry(value).or_default();
                // An item repeating a value inside one array counts once.
                if indices.last() != Some(&i) {
                    indices.push(i);
                }
            });
        }
        index
    }
}
