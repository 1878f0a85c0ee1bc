//! Shared constants for the ize engine.

/// ize version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Smallest number of clusters considered during k selection.
pub const DEFAULT_MIN_K: usize = 2;

/// Largest number of clusters considered during k selection.
pub const DEFAULT_MAX_K: usize = 6;

/// Clusters smaller than this are moved to "Other".
pub const DEFAULT_MIN_CLUSTER_SIZE: usize = 2;

/// Number of facet tokens reported per cluster.
pub const DEFAULT_TOP_FACETS: usize = 5;

/// Maximum number of clauses in a fitted decision list.
pub const DEFAULT_MAX_CLAUSES: usize = 3;

/// Upper bound on `rules.max_clauses`; a decision list never exceeds it.
pub const MAX_RULE_CLAUSES: usize = 3;

/// Minimum lift for a facet value to enter a clause.
pub const DEFAULT_MIN_LIFT: f64 = 1.2;

/// Largest recall drop tolerated when adding a clause after the first.
pub const DEFAULT_MAX_RECALL_DROP: f64 = 0.1;

/// Minimum recall a rule must keep when adding a clause after the first.
pub const DEFAULT_MIN_RECALL: f64 = 0.5;

/// Maximum number of greedy faceting groups.
pub const DEFAULT_MAX_FACET_GROUPS: usize = 5;

/// Minimum faceting group size as a fraction of the result count.
pub const DEFAULT_MIN_GROUP_FRACTION: f64 = 0.05;

/// Absolute floor for the faceting minimum group size.
pub const DEFAULT_MIN_GROUP_FLOOR: usize = 2;

/// Label cache time-to-live in seconds (1 hour).
pub const DEFAULT_LABEL_CACHE_TTL_SECS: u64 = 3600;

/// Label cache capacity.
pub const DEFAULT_LABEL_CACHE_MAX_ENTRIES: u64 = 1024;

/// Retries after the first failed label request.
pub const DEFAULT_LABEL_MAX_RETRIES: u32 = 3;

/// First retry delay for label requests; doubles per attempt.
pub const DEFAULT_LABEL_INITIAL_BACKOFF_MS: u64 = 500;

/// Project-level config file name.
pub const CONFIG_FILE_NAME: &str = "ize.toml";
