//! Fitting rules for every cluster and re-partitioning by rule membership.

use ize_core::models::{ClusterGroup, DecisionList, FacetSet, Item, RuleQuality};

use super::fit::fit_decision_list;
use super::RuleThresholds;
use crate::assemble::{build_group, ClusterDraft};

/// A cluster's fitted rule and the display name derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedRule {
    pub name: String,
    pub rule: DecisionList,
    pub quality: RuleQuality,
}

/// Fits one rule per draft using the draft's original members as positives.
/// The name is the rule text, or the draft's fallback name for empty rules.
pub fn fit_rules(
    drafts: &[ClusterDraft],
    facet_sets: &[FacetSet],
    thresholds: &RuleThresholds,
) -> Vec<FittedRule> {
    drafts
        .iter()
        .map(|draft| {
            let (rule, quality) = fit_decision_list(&draft.members, facet_sets, thresholds);
            let name = if rule.is_empty() {
                draft.fallback_name()
            } else {
                rule.to_string()
            };
            tracing::debug!(
                cluster_id = draft.cluster_id,
                original_size = draft.members.len(),
                rule = %rule,
                recall = format_args!("{:.3}", quality.recall),
                precision = format_args!("{:.3}", quality.precision),
                "fitted rule for cluster"
            );
            FittedRule {
                name,
                rule,
                quality,
            }
        })
        .collect()
}

/// Assigns every item to every group whose rule it matches and recomputes
/// each group's top facets. Returns the groups and the items no rule matched.
pub fn reassign(
    fitted: Vec<FittedRule>,
    items: &[Item],
    facet_sets: &[FacetSet],
    top_n: usize,
) -> (Vec<ClusterGroup>, Vec<Item>) {
    let mut members: Vec<Vec<usize>> = vec![Vec::new(); fitted.len()];
    let mut unmatched = Vec::new();

    for (idx, set) in facet_sets.iter().enumerate() {
        let mut matched_any = false;
        for (g, f) in fitted.iter().enumerate() {
            if f.rule.matches(set) {
                members[g].push(idx);
                matched_any = true;
            }
        }
        if !matched_any {
            unmatched.push(items[idx].clone());
        }
    }

    let groups = fitted
        .into_iter()
        .zip(members)
        .enumerate()
        .map(|(g, (f, members))| {
            tracing::debug!(cluster = g, new_size = members.len(), "reassigned cluster");
            let mut group = build_group(f.name, &members, items, facet_sets, top_n);
            group.rule = Some(f.rule);
            group.rule_quality = Some(f.quality);
            group
        })
        .collect();

    (groups, unmatched)
}

/// [`fit_rules`] followed by [`reassign`].
pub fn fit_and_reassign(
    drafts: &[ClusterDraft],
    items: &[Item],
    facet_sets: &[FacetSet],
    thresholds: &RuleThresholds,
    top_n: usize,
) -> (Vec<ClusterGroup>, Vec<Item>) {
    let fitted = fit_rules(drafts, facet_sets, thresholds);
    reassign(fitted, items, facet_sets, top_n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ize_core::models::Clause;

    fn set(tokens: &[&str]) -> FacetSet {
        tokens.iter().copied().collect()
    }

    fn items(n: usize) -> Vec<Item> {
        (0..n)
            .map(|i| Item {
                id: format!("item-{i}"),
                ..Item::default()
            })
            .collect()
    }

    #[test]
    fn overlapping_rules_share_items() {
        let sets = vec![
            set(&["color:Red", "size:S"]),
            set(&["color:Red", "size:L"]),
            set(&["color:Blue", "size:L"]),
            set(&["color:Green"]),
        ];
        let fitted = vec![
            FittedRule {
                name: "color:Red".to_string(),
                rule: DecisionList::new([Clause::new("color", vec!["Red".to_string()])]),
                quality: RuleQuality::default(),
            },
            FittedRule {
                name: "size:L".to_string(),
                rule: DecisionList::new([Clause::new("size", vec!["L".to_string()])]),
                quality: RuleQuality::default(),
            },
        ];
        let (groups, other) = reassign(fitted, &items(4), &sets, 5);

        let ids = |g: &ClusterGroup| g.items.iter().map(|i| i.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&groups[0]), vec!["item-0", "item-1"]);
        assert_eq!(ids(&groups[1]), vec!["item-1", "item-2"]);
        assert_eq!(other.len(), 1);
        assert_eq!(other[0].id, "item-3");
        assert!(groups[0].rule.is_some());
        assert_eq!(groups[0].top_facets[0].facet_name, "color");
    }

    #[test]
    fn empty_rule_keeps_fallback_name() {
        // Every item identical: no value has lift above 1.
        let sets = vec![set(&["color:Red"]); 4];
        let drafts = vec![ClusterDraft {
            cluster_id: 1,
            members: vec![0, 1],
        }];
        let fitted = fit_rules(&drafts, &sets, &RuleThresholds::default());
        assert!(fitted[0].rule.is_empty());
        assert_eq!(fitted[0].name, "Cluster 2");

        // The empty rule then matches everything.
        let (groups, other) = reassign(fitted, &items(4), &sets, 5);
        assert_eq!(groups[0].items.len(), 4);
        assert!(other.is_empty());
    }
}
