//! Locale catalog: single source of truth for all languages the platform knows.
//!
//! The catalog is loaded once from the embedded `lang.json` table and remains
//! immutable for the lifetime of the process. Catalog order is significant:
//! the resolver and the eligibility filter both produce results in catalog
//! order, and the option list shown to users follows it.

use serde::Deserialize;
use std::sync::OnceLock;

/// One language known to the platform.
///
/// `iso` is the full locale tag used everywhere in the backend protocol
/// (reservations, allowed-language lists, support matrices). `code` and
/// `iso_alpha3` are the short forms found in archival item metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocaleEntry {
    /// Full locale tag (e.g., "en-GB")
    pub iso: String,

    /// ISO 639-1 two-letter code (e.g., "en")
    pub code: String,

    /// ISO 639-2 three-letter code (e.g., "eng")
    #[serde(rename = "isoAlpha3")]
    pub iso_alpha3: String,

    /// English display name (e.g., "English")
    pub name: String,
}

/// Locale tag assumed when an item's original language cannot be determined.
pub const DEFAULT_ISO: &str = "en-GB";

/// Global locale catalog singleton.
///
/// Initialized lazily on first access from the embedded table and immutable
/// thereafter. All lookups return `Option` — callers must handle a miss
/// explicitly rather than assume every metadata code maps to an entry.
pub struct LocaleCatalog {
    entries: Vec<LocaleEntry>,
}

static CATALOG: OnceLock<LocaleCatalog> = OnceLock::new();

/// Embedded static language table, shipped with the crate.
const LANG_TABLE: &str = include_str!("../data/lang.json");

impl LocaleCatalog {
    /// Get the global catalog instance.
    ///
    /// # Panics
    /// Panics if the embedded `lang.json` is malformed, contains a duplicate
    /// `iso` tag, or lacks the default locale. These are build-time data
    /// errors, not runtime conditions.
    pub fn get() -> &'static LocaleCatalog {
        CATALOG.get_or_init(|| {
            let entries: Vec<LocaleEntry> =
                serde_json::from_str(LANG_TABLE).expect("embedded lang.json should parse");

            for (i, entry) in entries.iter().enumerate() {
                if entries[..i].iter().any(|other| other.iso == entry.iso) {
                    panic!("duplicate iso tag '{}' in lang.json", entry.iso);
                }
            }
            if !entries.iter().any(|entry| entry.iso == DEFAULT_ISO) {
                panic!("default locale '{}' missing from lang.json", DEFAULT_ISO);
            }

            LocaleCatalog { entries }
        })
    }

    /// Look up an entry by its full locale tag (e.g., "de-DE").
    pub fn lookup_by_iso(&self, iso: &str) -> Option<&LocaleEntry> {
        self.entries.iter().find(|entry| entry.iso == iso)
    }

    /// Look up an entry by its two-letter code (e.g., "de").
    pub fn lookup_by_code(&self, code: &str) -> Option<&LocaleEntry> {
        self.entries.iter().find(|entry| entry.code == code)
    }

    /// Look up an entry by its three-letter code (e.g., "deu").
    pub fn lookup_by_alpha3(&self, code: &str) -> Option<&LocaleEntry> {
        self.entries.iter().find(|entry| entry.iso_alpha3 == code)
    }

    /// All entries in catalog order. The order is stable across calls.
    pub fn all(&self) -> &[LocaleEntry] {
        &self.entries
    }

    /// The default entry assumed when resolution fails.
    ///
    /// Presence is validated at initialization, so this cannot miss.
    pub fn default_entry(&self) -> &LocaleEntry {
        self.lookup_by_iso(DEFAULT_ISO)
            .expect("default locale should always be in the catalog")
    }
}
