//! Test fixture loader for ize grouping scenarios.
//!
//! Scenarios are JSON files under the workspace `test-fixtures/` directory,
//! each holding a page of hits and, optionally, backend population counts.

use std::path::PathBuf;

use ize_core::models::{Hit, PopulationCounts};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// One grouping scenario.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub hits: Vec<Hit>,
    #[serde(default)]
    pub population_counts: Option<PopulationCounts>,
}

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("scenarios").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load `scenarios/<name>.json`.
pub fn load_scenario(name: &str) -> Scenario {
    load_fixture(&format!("scenarios/{name}.json"))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// All scenario files, sorted by path.
pub fn list_scenarios() -> Vec<PathBuf> {
    let dir = fixtures_root().join("scenarios");
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    paths.sort();
    paths
}

/// Builds `n` hits with a `category` facet cycling through `categories`
/// and a `color` facet cycling through `colors`.
pub fn synthetic_catalog(n: usize, categories: &[&str], colors: &[&str]) -> Vec<Hit> {
    (0..n)
        .map(|i| {
            let mut hit = Hit::new(format!("sku-{i:03}"), format!("Product {i}"));
            if !categories.is_empty() {
                hit = hit.with_facet("category", categories[i % categories.len()]);
            }
            if !colors.is_empty() {
                hit = hit.with_facet("color", colors[i % colors.len()]);
            }
            hit
        })
        .collect()
}
