//! Top-level ize configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ClusteringConfig, FacetingConfig, FacetsConfig, LabelsConfig, RulesConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`IZE_*`)
/// 2. Project config (`ize.toml` in the given root)
/// 3. User config (`~/.ize/config.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IzeConfig {
    pub clustering: ClusteringConfig,
    pub rules: RulesConfig,
    pub faceting: FacetingConfig,
    pub labels: LabelsConfig,
    pub facets: FacetsConfig,
}

impl IzeConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. Only a malformed file is fatal.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(constants::CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &IzeConfig) -> Result<(), ConfigError> {
        let min_k = config.clustering.effective_min_k();
        let max_k = config.clustering.effective_max_k();
        if min_k < 2 {
            return Err(invalid("clustering.min_k", "must be at least 2"));
        }
        if max_k < min_k {
            return Err(invalid("clustering.max_k", "must be >= clustering.min_k"));
        }
        if config.clustering.effective_min_cluster_size() == 0 {
            return Err(invalid("clustering.min_cluster_size", "must be greater than 0"));
        }
        if !(1..=constants::MAX_RULE_CLAUSES).contains(&config.rules.effective_max_clauses()) {
            return Err(invalid("rules.max_clauses", "must be between 1 and 3"));
        }
        if config.rules.effective_min_lift() <= 0.0 {
            return Err(invalid("rules.min_lift", "must be greater than 0.0"));
        }
        for (field, value) in [
            ("rules.max_recall_drop", config.rules.effective_max_recall_drop()),
            ("rules.min_recall", config.rules.effective_min_recall()),
            (
                "faceting.min_group_fraction",
                config.faceting.effective_min_group_fraction(),
            ),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, "must be between 0.0 and 1.0"));
            }
        }
        if config.faceting.effective_max_groups() == 0 {
            return Err(invalid("faceting.max_groups", "must be greater than 0"));
        }
        if config.faceting.effective_min_group_floor() == 0 {
            return Err(invalid("faceting.min_group_floor", "must be greater than 0"));
        }
        if config.labels.effective_cache_max_entries() == 0 {
            return Err(invalid("labels.cache_max_entries", "must be greater than 0"));
        }
        Ok(())
    }

    /// Returns the user config path: `~/.ize/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".ize").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut IzeConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: IzeConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut IzeConfig, other: &IzeConfig) {
        // Clustering
        if other.clustering.min_k.is_some() {
            base.clustering.min_k = other.clustering.min_k;
        }
        if other.clustering.max_k.is_some() {
            base.clustering.max_k = other.clustering.max_k;
        }
        if other.clustering.min_cluster_size.is_some() {
            base.clustering.min_cluster_size = other.clustering.min_cluster_size;
        }
        if other.clustering.top_facets.is_some() {
            base.clustering.top_facets = other.clustering.top_facets;
        }

        // Rules
        if other.rules.max_clauses.is_some() {
            base.rules.max_clauses = other.rules.max_clauses;
        }
        if other.rules.min_lift.is_some() {
            base.rules.min_lift = other.rules.min_lift;
        }
        if other.rules.max_recall_drop.is_some() {
            base.rules.max_recall_drop = other.rules.max_recall_drop;
        }
        if other.rules.min_recall.is_some() {
            base.rules.min_recall = other.rules.min_recall;
        }

        // Faceting
        if other.faceting.max_groups.is_some() {
            base.faceting.max_groups = other.faceting.max_groups;
        }
        if other.faceting.min_group_fraction.is_some() {
            base.faceting.min_group_fraction = other.faceting.min_group_fraction;
        }
        if other.faceting.min_group_floor.is_some() {
            base.faceting.min_group_floor = other.faceting.min_group_floor;
        }

        // Labels
        if other.labels.enabled.is_some() {
            base.labels.enabled = other.labels.enabled;
        }
        if other.labels.cache_ttl_secs.is_some() {
            base.labels.cache_ttl_secs = other.labels.cache_ttl_secs;
        }
        if other.labels.cache_max_entries.is_some() {
            base.labels.cache_max_entries = other.labels.cache_max_entries;
        }
        if other.labels.max_retries.is_some() {
            base.labels.max_retries = other.labels.max_retries;
        }
        if other.labels.initial_backoff_ms.is_some() {
            base.labels.initial_backoff_ms = other.labels.initial_backoff_ms;
        }

        // Facets
        if !other.facets.fields.is_empty() {
            base.facets.fields = other.facets.fields.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `IZE_CLUSTERING_MAX_K`, `IZE_RULES_MIN_LIFT`, etc.
    fn apply_env_overrides(config: &mut IzeConfig) {
        // Clustering
        if let Some(v) = env_parse::<usize>("IZE_CLUSTERING_MIN_K") {
            config.clustering.min_k = Some(v);
        }
        if let Some(v) = env_parse::<usize>("IZE_CLUSTERING_MAX_K") {
            config.clustering.max_k = Some(v);
        }
        if let Some(v) = env_parse::<usize>("IZE_CLUSTERING_MIN_CLUSTER_SIZE") {
            config.clustering.min_cluster_size = Some(v);
        }
        if let Some(v) = env_parse::<usize>("IZE_CLUSTERING_TOP_FACETS") {
            config.clustering.top_facets = Some(v);
        }

        // Rules
        if let Some(v) = env_parse::<usize>("IZE_RULES_MAX_CLAUSES") {
            config.rules.max_clauses = Some(v);
        }
        if let Some(v) = env_parse::<f64>("IZE_RULES_MIN_LIFT") {
            config.rules.min_lift = Some(v);
        }
        if let Some(v) = env_parse::<f64>("IZE_RULES_MAX_RECALL_DROP") {
            config.rules.max_recall_drop = Some(v);
        }
        if let Some(v) = env_parse::<f64>("IZE_RULES_MIN_RECALL") {
            config.rules.min_recall = Some(v);
        }

        // Faceting
        if let Some(v) = env_parse::<usize>("IZE_FACETING_MAX_GROUPS") {
            config.faceting.max_groups = Some(v);
        }
        if let Some(v) = env_parse::<f64>("IZE_FACETING_MIN_GROUP_FRACTION") {
            config.faceting.min_group_fraction = Some(v);
        }
        if let Some(v) = env_parse::<usize>("IZE_FACETING_MIN_GROUP_FLOOR") {
            config.faceting.min_group_floor = Some(v);
        }

        // Labels
        if let Some(v) = env_parse::<bool>("IZE_LABELS_ENABLED") {
            config.labels.enabled = Some(v);
        }
        if let Some(v) = env_parse::<u64>("IZE_LABELS_CACHE_TTL_SECS") {
            config.labels.cache_ttl_secs = Some(v);
        }
        if let Some(v) = env_parse::<u64>("IZE_LABELS_CACHE_MAX_ENTRIES") {
            config.labels.cache_max_entries = Some(v);
        }
        if let Some(v) = env_parse::<u32>("IZE_LABELS_MAX_RETRIES") {
            config.labels.max_retries = Some(v);
        }
        if let Some(v) = env_parse::<u64>("IZE_LABELS_INITIAL_BACKOFF_MS") {
            config.labels.initial_backoff_ms = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Reads and parses an env var; unparsable values are ignored.
fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
