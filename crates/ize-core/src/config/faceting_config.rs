//! Greedy faceting configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the greedy (RIPPER-style) faceting engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FacetingConfig {
    /// Maximum number of selected groups. Default: 5.
    pub max_groups: Option<usize>,
    /// Minimum group size as a fraction of all items. Default: 0.05.
    pub min_group_fraction: Option<f64>,
    /// Absolute floor for the minimum group size. Default: 2.
    pub min_group_floor: Option<usize>,
}

impl FacetingConfig {
    pub fn effective_max_groups(&self) -> usize {
        self.max_groups.unwrap_or(constants::DEFAULT_MAX_FACET_GROUPS)
    }

    pub fn effective_min_group_fraction(&self) -> f64 {
        self.min_group_fraction
            .unwrap_or(constants::DEFAULT_MIN_GROUP_FRACTION)
    }

    pub fn effective_min_group_floor(&self) -> usize {
        self.min_group_floor
            .unwrap_or(constants::DEFAULT_MIN_GROUP_FLOOR)
    }

    /// Minimum acceptable group size for `total_items` results:
    /// `max(ceil(fraction * total_items), floor)`.
    pub fn min_group_size(&self, total_items: usize) -> usize {
        let scaled = (total_items as f64 * self.effective_min_group_fraction()).ceil() as usize;
        scaled.max(self.effective_min_group_floor())
    }
}
