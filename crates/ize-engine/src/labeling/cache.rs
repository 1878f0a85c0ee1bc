//! TTL cache in front of a label generator, using moka.
//!
//! Keys are blake3 digests of the canonical cluster statistics, so two
//! clusters with the same size and top facets share a label.

use std::time::Duration;

use ize_core::errors::LabelError;
use ize_core::models::ClusterStats;
use ize_core::traits::ILabelGenerator;
use moka::sync::Cache;

/// Canonical cache key: `size:N` plus sorted `name:value:pct` entries
/// (percentage to one decimal), hashed and truncated to 32 hex chars.
pub fn cache_key(stats: &ClusterStats) -> String {
    let mut facets: Vec<String> = stats
        .top_facets
        .iter()
        .map(|f| format!("{}:{}:{:.1}", f.facet_name, f.facet_value, f.percentage))
        .collect();
    facets.sort_unstable();

    let mut canonical = format!("size:{}", stats.size);
    for facet in &facets {
        canonical.push('|');
        canonical.push_str(facet);
    }

    let hash = blake3::hash(canonical.as_bytes());
    hash.to_hex().as_str()[..32].to_string()
}

/// Caches successful labels. Errors are never cached.
pub struct CachedLabelGenerator<G> {
    inner: G,
    cache: Cache<String, String>,
}

impl<G: ILabelGenerator> CachedLabelGenerator<G> {
    pub fn new(inner: G, max_entries: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();
        Self { inner, cache }
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }

    /// Number of cached labels. moka updates this lazily.
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

impl<G: ILabelGenerator> ILabelGenerator for CachedLabelGenerator<G> {
    fn generate(&self, stats: &ClusterStats) -> Result<String, LabelError> {
        let key = cache_key(stats);
        if let Some(label) = self.cache.get(&key) {
            tracing::debug!(cluster_size = stats.size, name = %label, "cluster name cache hit");
            return Ok(label);
        }

        let label = self.inner.generate(stats)?;
        self.cache.insert(key, label.clone());
        Ok(label)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn is_available(&self) -> bool {
        self.inner.is_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ize_core::models::FacetCount;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counting {
        calls: AtomicUsize,
        fail: bool,
    }

    impl ILabelGenerator for Counting {
        fn generate(&self, _stats: &ClusterStats) -> Result<String, LabelError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(LabelError::Timeout { timeout_ms: 1 })
            } else {
                Ok("Red Things".to_string())
            }
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    fn stats(order: &[(&str, f64)]) -> ClusterStats {
        ClusterStats {
            size: 4,
            top_facets: order
                .iter()
                .map(|(v, pct)| FacetCount {
                    facet_name: "color".into(),
                    facet_value: (*v).into(),
                    count: 1,
                    percentage: *pct,
                })
                .collect(),
        }
    }

    #[test]
    fn key_ignores_facet_order() {
        let a = stats(&[("Red", 50.0), ("Blue", 25.0)]);
        let b = stats(&[("Blue", 25.0), ("Red", 50.0)]);
        assert_eq!(cache_key(&a), cache_key(&b));
        assert_eq!(cache_key(&a).len(), 32);
    }

    #[test]
    fn key_depends_on_size_and_rounded_percentage() {
        let a = stats(&[("Red", 50.0)]);
        let mut b = a.clone();
        b.size = 5;
        assert_ne!(cache_key(&a), cache_key(&b));

        let c = stats(&[("Red", 50.04)]);
        assert_eq!(cache_key(&a), cache_key(&c));
    }

    #[test]
    fn second_request_is_served_from_cache() {
        let cached = CachedLabelGenerator::new(
            Counting {
                calls: AtomicUsize::new(0),
                fail: false,
            },
            16,
            Duration::from_secs(60),
        );
        let s = stats(&[("Red", 100.0)]);
        assert_eq!(cached.generate(&s).unwrap(), "Red Things");
        assert_eq!(cached.generate(&s).unwrap(), "Red Things");
        assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failures_are_not_cached() {
        let cached = CachedLabelGenerator::new(
            Counting {
                calls: AtomicUsize::new(0),
                fail: true,
            },
            16,
            Duration::from_secs(60),
        );
        let s = stats(&[("Red", 100.0)]);
        assert!(cached.generate(&s).is_err());
        assert!(cached.generate(&s).is_err());
        assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 2);
    }
}
