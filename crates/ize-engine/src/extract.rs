//! Facet-set extraction from raw hit attributes.

use ize_core::config::FacetsConfig;
use ize_core::models::{FacetSet, Hit};
use serde_json::{Map, Value};
use smallvec::SmallVec;

/// String values carried by one raw attribute. Strings yield one value,
/// arrays yield their string elements, anything else yields nothing.
pub fn string_values(value: &Value) -> SmallVec<[&str; 4]> {
    match value {
        Value::String(s) => SmallVec::from_slice(&[s.as_str()]),
        Value::Array(values) => values.iter().filter_map(Value::as_str).collect(),
        _ => SmallVec::new(),
    }
}

/// Visits every `(facet name, value)` pair a hit contributes, after the
/// allow-list and prefix stripping in `config` are applied. Pairs are not
/// deduplicated.
pub fn for_each_facet_value<'a, F>(facets: &'a Map<String, Value>, config: &FacetsConfig, mut f: F)
where
    F: FnMut(&'a str, &'a str),
{
    for (name, raw) in facets {
        if !config.is_allowed(name) {
            continue;
        }
        for value in string_values(raw) {
            f(name.as_str(), config.normalize_value(name, value));
        }
    }
}

/// Builds the facet set of one attribute mapping.
pub fn extract_facet_set(facets: &Map<String, Value>, config: &FacetsConfig) -> FacetSet {
    let mut set = FacetSet::new();
    for_each_facet_value(facets, config, |name, value| {
        set.insert_pair(name, value);
    });
    set
}

/// Facet sets for every hit, in input order.
pub fn extract_all(hits: &[Hit], config: &FacetsConfig) -> Vec<FacetSet> {
    hits.iter()
        .map(|hit| extract_facet_set(&hit.facets, config))
        .collect()
}
