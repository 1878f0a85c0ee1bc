//! Tests for the ize configuration system.

use std::sync::Mutex;

use ize_core::config::IzeConfig;
use ize_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all IZE_ env vars and point HOME at an empty directory so a
/// developer's own `~/.ize/config.toml` cannot leak into assertions.
fn isolate_env(home: &std::path::Path) {
    for key in [
        "IZE_CLUSTERING_MIN_K",
        "IZE_CLUSTERING_MAX_K",
        "IZE_CLUSTERING_MIN_CLUSTER_SIZE",
        "IZE_CLUSTERING_TOP_FACETS",
        "IZE_RULES_MAX_CLAUSES",
        "IZE_RULES_MIN_LIFT",
        "IZE_RULES_MAX_RECALL_DROP",
        "IZE_RULES_MIN_RECALL",
        "IZE_FACETING_MAX_GROUPS",
        "IZE_FACETING_MIN_GROUP_FRACTION",
        "IZE_FACETING_MIN_GROUP_FLOOR",
        "IZE_LABELS_ENABLED",
        "IZE_LABELS_CACHE_TTL_SECS",
        "IZE_LABELS_CACHE_MAX_ENTRIES",
        "IZE_LABELS_MAX_RETRIES",
        "IZE_LABELS_INITIAL_BACKOFF_MS",
    ] {
        std::env::remove_var(key);
    }
    std::env::set_var("HOME", home);
}

#[test]
fn test_load_missing_files_fallback() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    let config = IzeConfig::load(dir.path()).unwrap();

    assert_eq!(config.clustering.effective_min_k(), 2);
    assert_eq!(config.clustering.effective_max_k(), 6);
    assert_eq!(config.clustering.effective_min_cluster_size(), 2);
    assert_eq!(config.rules.effective_max_clauses(), 3);
    assert!((config.rules.effective_min_lift() - 1.2).abs() < f64::EPSILON);
    assert_eq!(config.faceting.effective_max_groups(), 5);
    assert!(config.labels.effective_enabled());
    assert!(config.facets.allows_all());
}

#[test]
fn test_three_layer_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::fs::create_dir_all(home.path().join(".ize")).unwrap();
    std::fs::write(
        home.path().join(".ize").join("config.toml"),
        r#"
[clustering]
max_k = 4
min_cluster_size = 3

[labels]
enabled = false
"#,
    )
    .unwrap();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("ize.toml"),
        r#"
[clustering]
max_k = 5

[rules]
min_lift = 1.5
"#,
    )
    .unwrap();

    std::env::set_var("IZE_RULES_MIN_LIFT", "2.0");

    let config = IzeConfig::load(dir.path()).unwrap();

    // Project overrides user.
    assert_eq!(config.clustering.max_k, Some(5));
    // User survives where the project is silent.
    assert_eq!(config.clustering.min_cluster_size, Some(3));
    assert_eq!(config.labels.enabled, Some(false));
    // Env overrides project.
    assert_eq!(config.rules.min_lift, Some(2.0));

    std::env::remove_var("IZE_RULES_MIN_LIFT");
}

#[test]
fn test_unparsable_env_value_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::env::set_var("IZE_FACETING_MAX_GROUPS", "lots");
    let dir = tempdir();
    let config = IzeConfig::load(dir.path()).unwrap();
    assert_eq!(config.faceting.max_groups, None);
    std::env::remove_var("IZE_FACETING_MAX_GROUPS");
}

#[test]
fn test_every_setting_has_env_override() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let overrides = [
        ("IZE_CLUSTERING_TOP_FACETS", "7"),
        ("IZE_RULES_MAX_RECALL_DROP", "0.2"),
        ("IZE_RULES_MIN_RECALL", "0.7"),
        ("IZE_FACETING_MIN_GROUP_FLOOR", "3"),
        ("IZE_LABELS_CACHE_MAX_ENTRIES", "64"),
        ("IZE_LABELS_MAX_RETRIES", "1"),
        ("IZE_LABELS_INITIAL_BACKOFF_MS", "250"),
        ("IZE_LABELS_ENABLED", "false"),
    ];
    for (key, value) in overrides {
        std::env::set_var(key, value);
    }

    let dir = tempdir();
    let config = IzeConfig::load(dir.path()).unwrap();

    assert_eq!(config.clustering.effective_top_facets(), 7);
    assert_eq!(config.rules.max_recall_drop, Some(0.2));
    assert_eq!(config.rules.min_recall, Some(0.7));
    assert_eq!(config.faceting.effective_min_group_floor(), 3);
    assert_eq!(config.labels.effective_cache_max_entries(), 64);
    assert_eq!(config.labels.effective_max_retries(), 1);
    assert_eq!(config.labels.effective_initial_backoff().as_millis(), 250);
    assert!(!config.labels.effective_enabled());

    for (key, _) in overrides {
        std::env::remove_var(key);
    }
}

#[test]
fn test_invalid_toml_syntax() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    std::fs::write(dir.path().join("ize.toml"), "this is not valid toml {{{{").unwrap();

    match IzeConfig::load(dir.path()).unwrap_err() {
        ConfigError::ParseError { .. } => {}
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn test_invalid_values() {
    let cases = [
        "[clustering]\nmin_k = 1\n",
        "[clustering]\nmin_k = 4\nmax_k = 3\n",
        "[rules]\nmax_clauses = 0\n",
        "[rules]\nmax_clauses = 4\n",
        "[faceting]\nmin_group_fraction = 0.0\nmin_group_floor = 0\n",
        "[rules]\nmin_lift = 0.0\n",
        "[rules]\nmin_recall = 1.5\n",
        "[faceting]\nmin_group_fraction = -0.1\n",
        "[faceting]\nmax_groups = 0\n",
    ];
    for toml in cases {
        match IzeConfig::from_toml(toml) {
            Err(ConfigError::ValidationFailed { .. }) => {}
            other => panic!("Expected ValidationFailed for {toml:?}, got: {other:?}"),
        }
    }
}

#[test]
fn test_unrecognized_keys_accepted() {
    let config = IzeConfig::from_toml(
        r#"
[clustering]
max_k = 3
some_future_knob = true

[unknown_section]
x = 1
"#,
    )
    .unwrap();
    assert_eq!(config.clustering.effective_max_k(), 3);
}

#[test]
fn test_facet_fields_parse() {
    let config = IzeConfig::from_toml(
        r#"
[[facets.fields]]
field = "attributes.Brand"
display_name = "Brand"

[[facets.fields]]
field = "material"
remove_prefix = "Materials > "
"#,
    )
    .unwrap();
    assert_eq!(config.facets.fields.len(), 2);
    assert_eq!(config.facets.display_name("attributes.Brand"), "Brand");
    assert_eq!(config.facets.normalize_value("material", "Materials > Oak"), "Oak");
    assert!(!config.facets.is_allowed("color"));
}

#[test]
fn test_config_round_trip() {
    let original = IzeConfig::from_toml(
        r#"
[clustering]
max_k = 4

[rules]
min_recall = 0.6

[labels]
cache_ttl_secs = 60
"#,
    )
    .unwrap();

    let serialized = original.to_toml().unwrap();
    let restored = IzeConfig::from_toml(&serialized).unwrap();

    assert_eq!(restored.clustering.max_k, Some(4));
    assert_eq!(restored.rules.min_recall, Some(0.6));
    assert_eq!(restored.labels.effective_cache_ttl().as_secs(), 60);
    assert_eq!(restored.faceting.max_groups, None);
}
