//! Label generation configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the external label generator wrappers.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LabelsConfig {
    /// Request labels at all. Default: true.
    pub enabled: Option<bool>,
    /// Label cache TTL in seconds. Default: 3600.
    pub cache_ttl_secs: Option<u64>,
    /// Label cache capacity. Default: 1024.
    pub cache_max_entries: Option<u64>,
    /// Retries after the first failed request. Default: 3.
    pub max_retries: Option<u32>,
    /// First retry delay in milliseconds, doubled per attempt. Default: 500.
    pub initial_backoff_ms: Option<u64>,
}

impl LabelsConfig {
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    pub fn effective_cache_ttl(&self) -> Duration {
        Duration::from_secs(
            self.cache_ttl_secs
                .unwrap_or(constants::DEFAULT_LABEL_CACHE_TTL_SECS),
        )
    }

    pub fn effective_cache_max_entries(&self) -> u64 {
        self.cache_max_entries
            .unwrap_or(constants::DEFAULT_LABEL_CACHE_MAX_ENTRIES)
    }

    pub fn effective_max_retries(&self) -> u32 {
        self.max_retries
            .unwrap_or(constants::DEFAULT_LABEL_MAX_RETRIES)
    }

    pub fn effective_initial_backoff(&self) -> Duration {
        Duration::from_millis(
            self.initial_backoff_ms
                .unwrap_or(constants::DEFAULT_LABEL_INITIAL_BACKOFF_MS),
        )
    }
}
