//! Search hits as delivered by the item source, and their display projection.

use serde::{Deserialize, Serialize};

/// One raw search hit.
///
/// `facets` keeps the backend's JSON values untouched: strings and arrays of
/// strings become facet tokens, anything else is ignored at extraction time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hit {
    #[serde(alias = "objectID")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub facets: serde_json::Map<String, serde_json::Value>,
}

impl Hit {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder-style helper that sets one facet value.
    pub fn with_facet(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.facets.insert(name.into(), value.into());
        self
    }

    /// The display projection of this hit.
    pub fn to_item(&self) -> Item {
        Item::from(self)
    }
}

/// A display-only search result. Opaque to the algorithms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
}

impl From<&Hit> for Item {
    fn from(hit: &Hit) -> Self {
        Self {
            id: hit.id.clone(),
            name: hit.name.clone(),
            description: hit.description.clone(),
            image: hit.image.clone(),
        }
    }
}
