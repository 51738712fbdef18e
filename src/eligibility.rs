//! Eligibility filter: which catalog languages a user may pick as a subtitle
//! target for an item, given the resolved source language and event policy.

use crate::catalog::{LocaleCatalog, LocaleEntry};
use crate::policy::EventPolicy;
use tracing::warn;

/// Compute the eligible target languages, in catalog order.
///
/// A target is eligible when the event offers it (`allowed_languages`), it is
/// not the item's own source language, and the event's support matrix lists
/// it for the resolved source. A source with no matrix entry yields an empty
/// set — the matrix is policy data and may lag behind what the resolver can
/// produce, so a miss fails closed instead of raising.
pub fn eligible_targets(
    source: &LocaleEntry,
    allowed_languages: &[String],
    policy: &EventPolicy,
) -> Vec<&'static LocaleEntry> {
    let catalog = LocaleCatalog::get();

    let Some(targets) = policy.supported_targets(&source.iso) else {
        warn!(
            "no support matrix entry for source '{}' on event '{}', nothing selectable",
            source.iso, policy.event_id
        );
        return Vec::new();
    };

    catalog
        .all()
        .iter()
        .filter(|entry| allowed_languages.iter().any(|iso| iso == &entry.iso))
        .filter(|entry| entry.iso != source.iso)
        .filter(|entry| targets.contains(&entry.iso.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(event_id: &str) -> &'static EventPolicy {
        EventPolicy::for_event(event_id).expect("known event")
    }

    fn source(iso: &str) -> &'static LocaleEntry {
        LocaleCatalog::get().lookup_by_iso(iso).expect("catalog iso")
    }

    fn allowed(isos: &[&str]) -> Vec<String> {
        isos.iter().map(|iso| iso.to_string()).collect()
    }

    fn isos<'a>(entries: &[&'a LocaleEntry]) -> Vec<&'a str> {
        entries.iter().map(|entry| entry.iso.as_str()).collect()
    }

    #[test]
    fn test_intersection_of_allowed_and_matrix() {
        // nl-NL supports en-GB/de-DE/fr-FR on amsterdam, but the event only
        // offers en-GB and de-DE.
        let eligible = eligible_targets(
            source("nl-NL"),
            &allowed(&["en-GB", "de-DE"]),
            policy("amsterdam-2024"),
        );

        assert_eq!(isos(&eligible), vec!["en-GB", "de-DE"]);
    }

    #[test]
    fn test_source_language_never_eligible() {
        // it-IT present in allowedLanguages must still be excluded for an
        // Italian item.
        let eligible = eligible_targets(
            source("it-IT"),
            &allowed(&["en-GB", "de-DE", "it-IT"]),
            policy("amsterdam-2024"),
        );

        assert_eq!(isos(&eligible), vec!["en-GB", "de-DE"]);
    }

    #[test]
    fn test_matrix_limits_allowed_languages() {
        // fr-FR is offered by the event but not a permitted target for
        // de-DE sources.
        let eligible = eligible_targets(
            source("de-DE"),
            &allowed(&["en-GB", "nl-NL", "fr-FR"]),
            policy("amsterdam-2024"),
        );

        assert_eq!(isos(&eligible), vec!["en-GB", "nl-NL"]);
    }

    #[test]
    fn test_missing_matrix_entry_fails_closed() {
        // pt-PT resolves from metadata but no event matrix covers it.
        let eligible = eligible_targets(
            source("pt-PT"),
            &allowed(&["en-GB", "de-DE"]),
            policy("amsterdam-2024"),
        );

        assert!(eligible.is_empty());
    }

    #[test]
    fn test_result_in_catalog_order() {
        // allowedLanguages arrives in arbitrary backend order; output order
        // is the catalog's.
        let eligible = eligible_targets(
            source("pl-PL"),
            &allowed(&["cs-CZ", "de-DE", "en-GB"]),
            policy("warsaw-2023"),
        );

        assert_eq!(isos(&eligible), vec!["en-GB", "de-DE", "cs-CZ"]);
    }

    #[test]
    fn test_empty_allowed_languages() {
        let eligible = eligible_targets(source("nl-NL"), &[], policy("amsterdam-2024"));

        assert!(eligible.is_empty());
    }
}
