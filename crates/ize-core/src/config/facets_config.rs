//! Facet field selection and display configuration.

use serde::{Deserialize, Serialize};

/// One configured facet field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetField {
    /// Facet name as it appears on hits, e.g. `attributes.Brand`.
    pub field: String,
    /// User-facing name, e.g. `Brand`.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Prefix stripped from every value before tokenization,
    /// e.g. `Materials > `.
    #[serde(default)]
    pub remove_prefix: Option<String>,
}

/// Which facets take part in grouping.
///
/// An empty field list means every facet on a hit is used unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FacetsConfig {
    pub fields: Vec<FacetField>,
}

impl FacetsConfig {
    /// Whether no allow-list is configured.
    pub fn allows_all(&self) -> bool {
        self.fields.is_empty()
    }

    /// Looks up a configured field by name.
    pub fn field(&self, name: &str) -> Option<&FacetField> {
        self.fields.iter().find(|f| f.field == name)
    }

    /// Whether `name` participates in grouping.
    pub fn is_allowed(&self, name: &str) -> bool {
        self.allows_all() || self.field(name).is_some()
    }

    /// Display name for a facet, falling back to the field name itself.
    pub fn display_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.field(name)
            .and_then(|f| f.display_name.as_deref())
            .unwrap_or(name)
    }

    /// Applies the configured prefix stripping to a value.
    pub fn normalize_value<'a>(&self, name: &str, value: &'a str) -> &'a str {
        match self.field(name).and_then(|f| f.remove_prefix.as_deref()) {
            Some(prefix) => value.strip_prefix(prefix).unwrap_or(value),
            None => value,
        }
    }

    /// Field names to request from the search backend; `*` when unrestricted.
    pub fn requested_fields(&self) -> Vec<String> {
        if self.allows_all() {
            return vec!["*".to_string()];
        }
        self.fields.iter().map(|f| f.field.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> FacetsConfig {
        FacetsConfig {
            fields: vec![
                FacetField {
                    field: "attributes.Brand".to_string(),
                    display_name: Some("Brand".to_string()),
                    remove_prefix: None,
                },
                FacetField {
                    field: "material".to_string(),
                    display_name: None,
                    remove_prefix: Some("Materials > ".to_string()),
                },
            ],
        }
    }

    #[test]
    fn empty_config_allows_everything() {
        let config = FacetsConfig::default();
        assert!(config.is_allowed("anything"));
        assert_eq!(config.requested_fields(), vec!["*".to_string()]);
    }

    #[test]
    fn allow_list_filters_fields() {
        let config = configured();
        assert!(config.is_allowed("material"));
        assert!(!config.is_allowed("color"));
    }

    #[test]
    fn display_name_falls_back_to_field() {
        let config = configured();
        assert_eq!(config.display_name("attributes.Brand"), "Brand");
        assert_eq!(config.display_name("material"), "material");
        assert_eq!(config.display_name("unknown"), "unknown");
    }

    #[test]
    fn prefix_is_stripped_only_when_present() {
        let config = configured();
        assert_eq!(config.normalize_value("material", "Materials > Oak"), "Oak");
        assert_eq!(config.normalize_value("material", "Pine"), "Pine");
        assert_eq!(
            config.normalize_value("attributes.Brand", "Materials > Oak"),
            "Materials > Oak"
        );
    }
}
