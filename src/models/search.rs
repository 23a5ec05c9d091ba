use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::document::{Command, Document};

/// Where a search result came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultSource {
    /// A ranked catalog document.
    #[default]
    Catalog,
    /// A library registry entry presented as a document.
    Library,
}

/// A catalog document together with its relevance score for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    #[serde(flatten)]
    pub document: Document,
    pub score: u32,
    #[serde(default)]
    pub source: ResultSource,
}

impl ScoredDocument {
    /// Page rendering this result.
    pub fn href(&self) -> String {
        match self.source {
            ResultSource::Catalog => format!("/docs/{}", self.document.id),
            ResultSource::Library => format!("/libraries/{}", self.document.id),
        }
    }
}

/// Query string accepted by every search-like endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchQuery {
    /// Absent `q` is treated as an empty query.
    #[serde(default)]
    pub q: String,
}

impl SearchQuery {
    /// Build from raw query-string pairs. `q` is only honoured when it
    /// appears exactly once; absent or repeated `q` becomes the empty query.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut values = pairs.iter().filter(|(key, _)| key == "q");
        let q = match (values.next(), values.next()) {
            (Some((_, value)), None) => value.clone(),
            _ => String::new(),
        };
        Self { q }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

/// Body of one language inside the `/api/search` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageMatch {
    pub commands: Vec<Command>,
    pub documentation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageSearchResponse {
    pub languages: BTreeMap<String, LanguageMatch>,
}
