//! Cluster labeling through an injected [`ILabelGenerator`].
//!
//! The engines never require a generator: every group already carries a
//! usable name, and a failed request leaves it untouched.

pub mod cache;
pub mod retry;

pub use cache::{cache_key, CachedLabelGenerator};
pub use retry::RetryingLabelGenerator;

use std::fmt::Write as _;

use ize_core::config::{FacetsConfig, IzeConfig, LabelsConfig};
use ize_core::models::{ClusterGroup, ClusterStats};
use ize_core::traits::ILabelGenerator;
use rayon::prelude::*;

/// Builds the instruction text a language-model generator receives.
pub fn render_prompt(stats: &ClusterStats) -> String {
    let mut prompt = String::from("Given these facet characteristics of a product cluster:\n");
    for facet in &stats.top_facets {
        let _ = writeln!(
            prompt,
            "- {}:{} ({:.0}%)",
            facet.facet_name, facet.facet_value, facet.percentage
        );
    }
    let _ = writeln!(prompt, "- {} items total", stats.size);
    prompt.push_str(
        "\nGenerate a pithy 1-3 word label for this cluster that captures what makes these \
         items similar.\nRespond with ONLY the label. No quotes, no punctuation, just the label words.",
    );
    prompt
}

/// Stats for one group with facet names replaced by their display names.
pub fn label_stats(group: &ClusterGroup, facets: &FacetsConfig) -> ClusterStats {
    let mut stats = group.stats();
    for facet in &mut stats.top_facets {
        let display = facets.display_name(&facet.facet_name).to_string();
        facet.facet_name = display;
    }
    stats
}

/// Normalizes a raw label: trims whitespace and surrounding quotes or
/// trailing punctuation. `None` when nothing is left.
pub fn clean_label(raw: &str) -> Option<String> {
    let trimmed = raw
        .trim()
        .trim_matches(|c: char| c == '"' || c == '\'' || c == '`')
        .trim_end_matches(|c: char| matches!(c, '.' | '!' | ',' | ';' | ':'))
        .trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// What happened during one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelReport {
    pub labeled: usize,
    pub fallbacks: usize,
}

/// Requests a label for every group in parallel. Groups whose request fails
/// or returns an empty label keep their current name. Nothing is requested
/// when `labels.enabled` is off.
pub fn apply_labels(
    groups: &mut [ClusterGroup],
    generator: &dyn ILabelGenerator,
    config: &IzeConfig,
) -> LabelReport {
    if !config.labels.effective_enabled() {
        tracing::debug!(groups_count = groups.len(), "labeling disabled, keeping fallback names");
        return LabelReport {
            labeled: 0,
            fallbacks: groups.len(),
        };
    }
    if !generator.is_available() {
        tracing::debug!(label_provider = generator.name(), "label generator unavailable");
        return LabelReport {
            labeled: 0,
            fallbacks: groups.len(),
        };
    }

    let outcomes: Vec<bool> = groups
        .par_iter_mut()
        .map(|group| {
            let stats = label_stats(group, &config.facets);
            match generator.generate(&stats).map(|raw| clean_label(&raw)) {
                Ok(Some(label)) => {
                    group.name = label;
                    true
                }
                Ok(None) => {
                    tracing::warn!(
                        label_provider = generator.name(),
                        fallback = %group.name,
                        "empty label, keeping existing name"
                    );
                    false
                }
                Err(error) => {
                    tracing::warn!(
                        label_provider = generator.name(),
                        fallback = %group.name,
                        %error,
                        "label generation failed, keeping existing name"
                    );
                    false
                }
            }
        })
        .collect();

    let labeled = outcomes.iter().filter(|ok| **ok).count();
    LabelReport {
        labeled,
        fallbacks: outcomes.len() - labeled,
    }
}

/// Wraps `inner` with retry/backoff and a TTL cache as configured.
/// The cache sits outside so hits skip retries entirely.
pub fn layered<G: ILabelGenerator>(
    inner: G,
    config: &LabelsConfig,
) -> CachedLabelGenerator<RetryingLabelGenerator<G>> {
    let retrying = RetryingLabelGenerator::new(
        inner,
        config.effective_max_retries(),
        config.effective_initial_backoff(),
    );
    CachedLabelGenerator::new(
        retrying,
        config.effective_cache_max_entries(),
        config.effective_cache_ttl(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ize_core::config::FacetField;
    use ize_core::errors::LabelError;
    use ize_core::models::FacetCount;
    use ize_core::traits::NoOpLabelGenerator;

    fn group(name: &str, facet: &str, value: &str) -> ClusterGroup {
        ClusterGroup {
            name: name.to_string(),
            top_facets: vec![FacetCount {
                facet_name: facet.to_string(),
                facet_value: value.to_string(),
                count: 4,
                percentage: 80.0,
            }],
            ..ClusterGroup::default()
        }
    }

    /// Labels by echoing the first facet value; fails for "bad".
    struct EchoGenerator;

    impl ILabelGenerator for EchoGenerator {
        fn generate(&self, stats: &ClusterStats) -> Result<String, LabelError> {
            match stats.top_facets.first() {
                Some(f) if f.facet_value == "bad" => Err(LabelError::Rejected {
                    status: 400,
                    message: "nope".into(),
                }),
                Some(f) if f.facet_value == "blank" => Ok("  ".into()),
                Some(f) => Ok(format!("\"{} {}.\"", f.facet_name, f.facet_value)),
                None => Err(LabelError::EmptyLabel),
            }
        }

        fn name(&self) -> &str {
            "echo"
        }
    }

    #[test]
    fn prompt_lists_facets_and_size() {
        let mut g = group("Cluster 1", "color", "Red");
        g.items = vec![Default::default(); 5];
        let prompt = render_prompt(&g.stats());
        assert!(prompt.contains("- color:Red (80%)\n"));
        assert!(prompt.contains("- 5 items total\n"));
        assert!(prompt.contains("1-3 word label"));
    }

    #[test]
    fn clean_label_strips_quotes_and_punctuation() {
        assert_eq!(clean_label("  \"Red Chairs.\" "), Some("Red Chairs".to_string()));
        assert_eq!(clean_label(" '' "), None);
    }

    #[test]
    fn failures_keep_existing_names() {
        let mut groups = vec![
            group("Cluster 1", "color", "Red"),
            group("Cluster 2", "color", "bad"),
            group("Cluster 3", "color", "blank"),
        ];
        let report = apply_labels(&mut groups, &EchoGenerator, &IzeConfig::default());
        assert_eq!(report, LabelReport { labeled: 1, fallbacks: 2 });
        assert_eq!(groups[0].name, "color Red");
        assert_eq!(groups[1].name, "Cluster 2");
        assert_eq!(groups[2].name, "Cluster 3");
    }

    #[test]
    fn display_names_reach_the_generator() {
        let config = IzeConfig {
            facets: FacetsConfig {
                fields: vec![FacetField {
                    field: "attributes.Color".to_string(),
                    display_name: Some("Color".to_string()),
                    remove_prefix: None,
                }],
            },
            ..IzeConfig::default()
        };
        let mut groups = vec![group("Cluster 1", "attributes.Color", "Red")];
        apply_labels(&mut groups, &EchoGenerator, &config);
        assert_eq!(groups[0].name, "Color Red");
    }

    #[test]
    fn unavailable_generator_is_skipped() {
        let mut groups = vec![group("Cluster 1", "color", "Red")];
        let report = apply_labels(&mut groups, &NoOpLabelGenerator, &IzeConfig::default());
        assert_eq!(report.fallbacks, 1);
        assert_eq!(groups[0].name, "Cluster 1");
    }

    #[test]
    fn disabled_labels_skip_the_generator() {
        let config = IzeConfig {
            labels: LabelsConfig {
                enabled: Some(false),
                ..LabelsConfig::default()
            },
            ..IzeConfig::default()
        };
        let mut groups = vec![
            group("Cluster 1", "color", "Red"),
            group("Cluster 2", "color", "bad"),
        ];
        let report = apply_labels(&mut groups, &EchoGenerator, &config);
        assert_eq!(report, LabelReport { labeled: 0, fallbacks: 2 });
        assert_eq!(groups[0].name, "Cluster 1");
        assert_eq!(groups[1].name, "Cluster 2");
    }
}
