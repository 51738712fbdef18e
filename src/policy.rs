//! Per-event language policy: single source of truth for how each event
//! resolves an item's source language and which subtitle targets it permits.
//!
//! Historically this varied by copy-pasted page, one per event. Here every
//! knob that differed between events is data on `EventPolicy`, and the
//! resolver/filter stay generic.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Item metadata field consulted for an explicit language declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceField {
    /// The content-declared `language` field.
    Language,
    /// The Dublin-Core `dcLanguage` field.
    DcLanguage,
}

/// Language policy for one event.
#[derive(Debug, Clone)]
pub struct EventPolicy {
    /// Event this policy belongs to.
    pub event_id: &'static str,

    /// Which explicit metadata fields to consult, in order.
    pub source_field_precedence: &'static [SourceField],

    /// Codes treated as "not informative, fall through" when seen in an
    /// explicit field (e.g., "en" on collections that tag everything
    /// English, "mul" for multilingual records).
    pub uninformative_codes: &'static [&'static str],

    /// Literal prefix marking the description key that names the original
    /// language. When set, a marked key wins over the generic key heuristic.
    pub description_marker: Option<&'static str>,

    /// Source iso → permitted target isos. Event policy data, hardcoded per
    /// event like the prize copy and dates were.
    support_matrix: HashMap<&'static str, &'static [&'static str]>,
}

impl EventPolicy {
    /// Get the policy for an event, if the event is known.
    pub fn for_event(event_id: &str) -> Option<&'static EventPolicy> {
        policies().iter().find(|policy| policy.event_id == event_id)
    }

    /// Permitted target isos for a resolved source language.
    ///
    /// `None` means the matrix has no entry for this source — the caller
    /// must fail closed, not assume full population.
    pub fn supported_targets(&self, source_iso: &str) -> Option<&'static [&'static str]> {
        self.support_matrix.get(source_iso).copied()
    }

    /// All known event ids, in registration order.
    pub fn known_events() -> Vec<&'static str> {
        policies().iter().map(|policy| policy.event_id).collect()
    }
}

static POLICIES: OnceLock<Vec<EventPolicy>> = OnceLock::new();

fn policies() -> &'static [EventPolicy] {
    POLICIES.get_or_init(default_policies)
}

/// The marker one event's collection uses to name the original language
/// inside `dcDescriptionLangAware`.
pub const ORIGINAL_LANGUAGE_MARKER: &str = "Original language summary:";

fn default_policies() -> Vec<EventPolicy> {
    vec![
        // Broadcast-archive collection: dcLanguage is authoritative, but the
        // aggregator stamps "en" and "mul" on records it could not classify.
        EventPolicy {
            event_id: "amsterdam-2024",
            source_field_precedence: &[SourceField::DcLanguage, SourceField::Language],
            uninformative_codes: &["en", "mul"],
            description_marker: None,
            support_matrix: HashMap::from([
                ("nl-NL", &["en-GB", "de-DE", "fr-FR"] as &[_]),
                ("de-DE", &["en-GB", "nl-NL"] as &[_]),
                ("fr-FR", &["en-GB", "nl-NL"] as &[_]),
                ("it-IT", &["en-GB", "de-DE"] as &[_]),
                ("en-GB", &["nl-NL", "de-DE", "fr-FR"] as &[_]),
            ]),
        },
        // Newsreel collection: language fields are mostly absent; the
        // original language is named in a marked description entry.
        EventPolicy {
            event_id: "warsaw-2023",
            source_field_precedence: &[SourceField::Language, SourceField::DcLanguage],
            uninformative_codes: &[],
            description_marker: Some(ORIGINAL_LANGUAGE_MARKER),
            support_matrix: HashMap::from([
                ("pl-PL", &["en-GB", "de-DE", "cs-CZ"] as &[_]),
                ("cs-CZ", &["en-GB", "pl-PL"] as &[_]),
                ("de-DE", &["en-GB", "pl-PL"] as &[_]),
                ("en-GB", &["pl-PL", "cs-CZ"] as &[_]),
            ]),
        },
        // Baltic collection: only the content-declared field is trusted,
        // "mul" records fall through to the description heuristics.
        EventPolicy {
            event_id: "riga-2023",
            source_field_precedence: &[SourceField::Language],
            uninformative_codes: &["mul"],
            description_marker: None,
            support_matrix: HashMap::from([
                ("lv-LV", &["en-GB", "de-DE", "sv-SE"] as &[_]),
                ("de-DE", &["en-GB", "lv-LV"] as &[_]),
                ("sv-SE", &["en-GB", "lv-LV"] as &[_]),
                ("en-GB", &["lv-LV", "sv-SE"] as &[_]),
            ]),
        },
    ]
}
