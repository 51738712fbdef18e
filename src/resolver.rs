//! Source-language resolution: best-guess original language of an archival
//! item from its heterogeneous metadata, under an event's policy.

use crate::catalog::{LocaleCatalog, LocaleEntry};
use crate::item::ArchivalItem;
use crate::policy::{EventPolicy, SourceField};

/// Resolve the original language of an item.
///
/// Pure and deterministic; performs no I/O and always produces an entry
/// (the catalog default stands in when nothing resolves). Precedence:
///
/// 1. explicit metadata fields, in the policy's order, ignoring codes the
///    policy marks uninformative — the winner is the first matching entry in
///    *catalog* order, not the item's field order;
/// 2. a description key carrying the policy's marker prefix, when set;
/// 3. the description-key heuristics (one key: that key; two keys: the one
///    that is neither "def" nor "en"); anything else falls back to the
///    default locale.
pub fn resolve_source_language(
    item: &ArchivalItem,
    policy: &EventPolicy,
) -> &'static LocaleEntry {
    let catalog = LocaleCatalog::get();

    for field in policy.source_field_precedence {
        let values = match field {
            SourceField::Language => &item.language,
            SourceField::DcLanguage => &item.dc_language,
        };
        let informative: Vec<&str> = values
            .iter()
            .map(String::as_str)
            .filter(|value| !policy.uninformative_codes.contains(value))
            .collect();
        if informative.is_empty() {
            continue;
        }
        let matched = catalog.all().iter().find(|entry| {
            informative
                .iter()
                .any(|value| *value == entry.code || *value == entry.iso_alpha3)
        });
        if let Some(entry) = matched {
            return entry;
        }
    }

    if let Some(marker) = policy.description_marker {
        let marked_key = item
            .dc_description_lang_aware
            .iter()
            .find(|(_, texts)| texts.iter().any(|text| text.starts_with(marker)))
            .map(|(key, _)| key.as_str());
        if let Some(entry) = marked_key.and_then(|key| resolve_short_code(catalog, key)) {
            return entry;
        }
    }

    let keys: Vec<&str> = item
        .dc_description_lang_aware
        .keys()
        .map(String::as_str)
        .collect();
    let chosen = match keys.len() {
        1 => Some(keys[0]),
        2 => keys.iter().copied().find(|key| *key != "def" && *key != "en"),
        _ => None,
    };

    chosen
        .and_then(|key| resolve_short_code(catalog, key))
        .unwrap_or_else(|| catalog.default_entry())
}

/// Description keys are two-letter codes on most collections but three-letter
/// on a few; try both forms.
fn resolve_short_code(catalog: &'static LocaleCatalog, code: &str) -> Option<&'static LocaleEntry> {
    catalog
        .lookup_by_code(code)
        .or_else(|| catalog.lookup_by_alpha3(code))
}
