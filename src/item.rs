use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An archival audiovisual record from the heritage aggregator.
///
/// The metadata shape is not uniform across events: any of the language
/// fields may be missing, and `dcLanguage` holds two-letter codes for some
/// collections and three-letter codes for others. Items are fetched read-only
/// and never mutated client-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArchivalItem {
    /// External aggregator id, slash-containing (e.g., "/2051906/data_foo_bar").
    pub id: String,

    #[serde(default)]
    pub title: Option<String>,

    /// Content-declared language codes.
    #[serde(default)]
    pub language: Vec<String>,

    /// Dublin-Core language codes.
    #[serde(rename = "dcLanguage", default)]
    pub dc_language: Vec<String>,

    /// Free-text descriptions keyed by language code. Keys "def" and "en"
    /// denote non-authoritative defaults. BTreeMap keeps key iteration
    /// deterministic for the resolver heuristics.
    #[serde(rename = "dcDescriptionLangAware", default)]
    pub dc_description_lang_aware: BTreeMap<String, Vec<String>>,
}

impl ArchivalItem {
    /// The id in backend route-parameter form: every `/` escaped as `%2F`
    /// so the whole id fits in a single path segment.
    pub fn safe_id(&self) -> String {
        self.id.replace('/', "%2F")
    }
}
