//! Greedy clause selection for one cluster.

use ize_core::models::{Clause, DecisionList, FacetSet, RuleQuality};
use ize_core::types::collections::FxHashSet;

use super::lift::{collect_facet_stats, eligible_values};
use super::RuleThresholds;
use crate::stats::ratio;

/// Scores rules against a fixed positive set within a corpus.
pub struct RuleEvaluator<'a> {
    facet_sets: &'a [FacetSet],
    positives: &'a [usize],
    is_positive: Vec<bool>,
}

impl<'a> RuleEvaluator<'a> {
    pub fn new(positives: &'a [usize], facet_sets: &'a [FacetSet]) -> Self {
        let mut is_positive = vec![false; facet_sets.len()];
        for &idx in positives {
            if let Some(flag) = is_positive.get_mut(idx) {
                *flag = true;
            }
        }
        Self {
            facet_sets,
            positives,
            is_positive,
        }
    }

    /// Fraction of positives matched by `rule`.
    pub fn recall(&self, rule: &DecisionList) -> f64 {
        let matched = self
            .positives
            .iter()
            .filter(|&&idx| rule.matches(&self.facet_sets[idx]))
            .count();
        ratio(matched, self.positives.len())
    }

    /// Fraction of all matches that are positives. 0 when nothing matches.
    pub fn precision(&self, rule: &DecisionList) -> f64 {
        let mut matches = 0usize;
        let mut true_positives = 0usize;
        for (idx, set) in self.facet_sets.iter().enumerate() {
            if rule.matches(set) {
                matches += 1;
                if self.is_positive[idx] {
                    true_positives += 1;
                }
            }
        }
        ratio(true_positives, matches)
    }

    pub fn quality(&self, rule: &DecisionList) -> RuleQuality {
        RuleQuality::new(self.precision(rule), self.recall(rule))
    }
}

struct Candidate<'s> {
    facet: &'s str,
    clause: Clause,
    recall: f64,
    recall_gain: f64,
}

/// Fits a decision list of at most `max_clauses` clauses for `positives`.
///
/// Values enter a clause when their lift reaches `min_lift`. The first
/// clause maximizes recall. Later clauses must keep the recall drop within
/// `max_recall_drop`, keep recall at or above `min_recall`, and strictly
/// raise precision; among those, higher recall then higher recall gain
/// wins. Facets are tried in name order and the first best candidate is
/// kept.
pub fn fit_decision_list(
    positives: &[usize],
    facet_sets: &[FacetSet],
    thresholds: &RuleThresholds,
) -> (DecisionList, RuleQuality) {
    if positives.is_empty() || facet_sets.is_empty() {
        return (DecisionList::default(), RuleQuality::default());
    }

    let evaluator = RuleEvaluator::new(positives, facet_sets);
    let stats = collect_facet_stats(&evaluator.is_positive, facet_sets);
    let total_positives = positives.len();
    let total_items = facet_sets.len();

    let mut rule = DecisionList::default();
    let mut used: FxHashSet<&str> = FxHashSet::default();

    while rule.len() < thresholds.max_clauses {
        let current_recall = evaluator.recall(&rule);
        let current_precision = (!rule.is_empty()).then(|| evaluator.precision(&rule));
        let mut best: Option<Candidate> = None;

        for (facet, values) in &stats {
            if used.contains(facet.as_str()) {
                continue;
            }
            let selected = eligible_values(values, total_positives, total_items, thresholds.min_lift);
            if selected.is_empty() {
                continue;
            }

            let clause = Clause::new(facet.clone(), selected);
            let mut candidate_rule = rule.clone();
            candidate_rule.clauses.push(clause.clone());

            let recall = evaluator.recall(&candidate_rule);
            let recall_gain = recall - current_recall;
            let (best_recall, best_gain) = best
                .as_ref()
                .map_or((0.0, 0.0), |b| (b.recall, b.recall_gain));

            let accept = match current_precision {
                None => recall > best_recall,
                Some(precision) => {
                    recall_gain >= -thresholds.max_recall_drop
                        && recall >= thresholds.min_recall
                        && evaluator.precision(&candidate_rule) > precision
                        && (recall > best_recall
                            || (recall == best_recall && recall_gain > best_gain))
                }
            };

            if accept {
                best = Some(Candidate {
                    facet: facet.as_str(),
                    clause,
                    recall,
                    recall_gain,
                });
            }
        }

        let Some(chosen) = best else {
            break;
        };
        tracing::debug!(
            facet = %chosen.clause.facet_name,
            values_count = chosen.clause.values.len(),
            recall_gain = format_args!("{:.3}", chosen.recall_gain),
            new_recall = format_args!("{:.3}", chosen.recall),
            "added clause"
        );
        used.insert(chosen.facet);
        rule.clauses.push(chosen.clause);
    }

    let quality = evaluator.quality(&rule);
    tracing::debug!(
        clauses = rule.len(),
        precision = format_args!("{:.3}", quality.precision),
        recall = format_args!("{:.3}", quality.recall),
        f1 = format_args!("{:.3}", quality.f1),
        "fitted decision list"
    );
    (rule, quality)
}
