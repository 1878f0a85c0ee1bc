//! Property-based tests for grouping guarantees.

use std::collections::BTreeSet;

use ize_core::config::{FacetingConfig, FacetsConfig};
use ize_core::models::Hit;
use ize_engine::extract::extract_all;
use ize_engine::{cluster, facet_greedy, ClusterEngine, DistanceMatrix};
use proptest::prelude::*;

const CATEGORIES: [&str; 4] = ["Chairs", "Tables", "Lamps", "Rugs"];
const COLORS: [&str; 3] = ["Red", "Blue", "Oak"];

/// Hits with an optional category, an optional color and an optional tag list.
fn arb_hits(max: usize) -> impl Strategy<Value = Vec<Hit>> {
    prop::collection::vec(
        (
            prop::option::of(0..CATEGORIES.len()),
            prop::option::of(0..COLORS.len()),
            prop::collection::vec(prop::sample::select(vec!["sale", "new", "eco"]), 0..3),
        ),
        0..max,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (category, color, tags))| {
                let mut hit = Hit::new(format!("sku-{i}"), format!("Item {i}"));
                if let Some(c) = category {
                    hit = hit.with_facet("category", CATEGORIES[c]);
                }
                if let Some(c) = color {
                    hit = hit.with_facet("color", COLORS[c]);
                }
                if !tags.is_empty() {
                    hit = hit.with_facet("tags", tags);
                }
                hit
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn distances_are_symmetric_and_bounded(hits in arb_hits(20)) {
        let sets = extract_all(&hits, &FacetsConfig::default());
        let matrix = DistanceMatrix::build(&sets);
        for i in 0..matrix.len() {
            for j in 0..matrix.len() {
                let d = matrix.get(i, j);
                prop_assert!((0.0..=1.0).contains(&d));
                prop_assert_eq!(d, matrix.get(j, i));
            }
        }
    }

    #[test]
    fn assembled_clusters_cover_every_item_once(hits in arb_hits(30)) {
        let result = ClusterEngine::default().assemble_clusters(&hits);

        let mut seen = BTreeSet::new();
        for group in &result.groups {
            prop_assert!(group.size() >= 2);
            for item in &group.items {
                prop_assert!(seen.insert(item.id.clone()));
            }
        }
        for item in &result.other {
            prop_assert!(seen.insert(item.id.clone()));
        }
        prop_assert_eq!(seen.len(), hits.len());
        prop_assert_eq!(result.cluster_count, result.groups.len());
    }

    #[test]
    fn selected_k_stays_in_range(hits in arb_hits(30)) {
        let result = cluster(&hits);
        if let Some(k) = result.selected_k {
            prop_assert!(k >= 2);
            prop_assert!(k <= 6);
            prop_assert!(k <= hits.len());
        }
    }

    #[test]
    fn rule_groups_and_other_are_disjoint(hits in arb_hits(30)) {
        let result = cluster(&hits);
        let other: BTreeSet<&str> = result.other.iter().map(|i| i.id.as_str()).collect();
        let mut covered: BTreeSet<&str> = other.clone();
        for group in &result.groups {
            for item in &group.items {
                prop_assert!(!other.contains(item.id.as_str()));
                covered.insert(item.id.as_str());
            }
        }
        prop_assert_eq!(covered.len(), hits.len());
    }

    #[test]
    fn faceting_respects_cap_and_min_size(hits in arb_hits(60)) {
        let result = facet_greedy(&hits, None);
        let min_size = FacetingConfig::default().min_group_size(hits.len());

        prop_assert!(result.groups.len() <= 5);
        let mut seen = BTreeSet::new();
        for group in &result.groups {
            prop_assert!(group.items.len() >= min_size);
            prop_assert!(group.total_count >= group.items.len() as u64);
            for item in &group.items {
                prop_assert!(seen.insert(item.id.clone()));
            }
        }
        for item in &result.other {
            prop_assert!(seen.insert(item.id.clone()));
        }
        prop_assert_eq!(seen.len(), hits.len());
    }

    #[test]
    fn grouping_is_deterministic(hits in arb_hits(25)) {
        prop_assert_eq!(cluster(&hits), cluster(&hits));
        prop_assert_eq!(facet_greedy(&hits, None), facet_greedy(&hits, None));
    }
}
