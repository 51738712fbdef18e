//! Reservation gate: disable eligible languages that are already claimed.

use crate::catalog::LocaleEntry;
use serde::{Deserialize, Serialize};

/// One existing reservation for an item, as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationRecord {
    /// Reserved target language (full iso tag).
    pub language: String,

    /// Owning user, when the backend discloses it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub userid: Option<String>,
}

/// One entry of the option list shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleOption {
    pub entry: &'static LocaleEntry,

    /// The language is already reserved and cannot be picked.
    pub disabled: bool,

    /// The current user holds the reservation. Display-only: an own
    /// reservation still disables the option.
    pub own: bool,
}

/// Mark each eligible entry disabled when any reservation covers its iso,
/// regardless of who owns the reservation. Order is preserved.
pub fn apply_reservations(
    eligible: &[&'static LocaleEntry],
    reservations: &[ReservationRecord],
    current_user: Option<&str>,
) -> Vec<SubtitleOption> {
    eligible
        .iter()
        .map(|entry| {
            let held = reservations
                .iter()
                .find(|record| record.language == entry.iso);
            SubtitleOption {
                entry,
                disabled: held.is_some(),
                own: held
                    .and_then(|record| record.userid.as_deref())
                    .is_some_and(|owner| current_user == Some(owner)),
            }
        })
        .collect()
}
