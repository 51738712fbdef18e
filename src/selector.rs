//! Selector pipeline: resolver → eligibility filter → reservation gate,
//! composed into the option list a page renders, plus the page-mount fetches.

use crate::backend::{BackendClient, BackendError, EventInfo, EventStatistics, LeaderboardEntry};
use crate::eligibility::eligible_targets;
use crate::item::ArchivalItem;
use crate::policy::EventPolicy;
use crate::reservation::{apply_reservations, ReservationRecord, SubtitleOption};
use crate::resolver::resolve_source_language;
use crate::session::SessionUser;

/// What an event page renders where the language selector goes.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorView {
    /// The selectable (and disabled) target options, in catalog order.
    Options(Vec<SubtitleOption>),

    /// The fixed "Login to subtitle" state. A failed reservation fetch lands
    /// here too: the platform does not distinguish it from "not authorized".
    LoginRequired,
}

/// Build the selector for one item.
///
/// Pure given its inputs; the reservation fetch result is passed in rather
/// than performed here, so render code stays synchronous.
pub fn build_selector(
    policy: &EventPolicy,
    item: &ArchivalItem,
    allowed_languages: &[String],
    reservations: Result<Vec<ReservationRecord>, BackendError>,
    session: Option<&SessionUser>,
) -> SelectorView {
    let (Some(user), Ok(reservations)) = (session, reservations) else {
        return SelectorView::LoginRequired;
    };

    let source = resolve_source_language(item, policy);
    let eligible = eligible_targets(source, allowed_languages, policy);
    SelectorView::Options(apply_reservations(
        &eligible,
        &reservations,
        Some(user.userid.as_str()),
    ))
}

/// Everything an event landing page fetches on mount.
#[derive(Debug, Clone)]
pub struct EventPageData {
    pub info: EventInfo,
    pub allowed_languages: Vec<String>,
    pub statistics: EventStatistics,
    pub leaderboard: Vec<LeaderboardEntry>,
}

/// Issue the independent page-mount fetches concurrently.
///
/// The four reads have no ordering between them; any single failure fails
/// the page load as a whole.
pub async fn fetch_event_page_data(
    client: &BackendClient,
    event_id: &str,
) -> Result<EventPageData, BackendError> {
    let (info, allowed_languages, statistics, leaderboard) = futures::try_join!(
        client.event_info(event_id),
        client.available_languages(event_id),
        client.statistics(event_id),
        client.leaderboard(event_id),
    )?;

    Ok(EventPageData {
        info,
        allowed_languages,
        statistics,
        leaderboard,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> &'static EventPolicy {
        EventPolicy::for_event("amsterdam-2024").expect("known event")
    }

    fn dutch_item() -> ArchivalItem {
        ArchivalItem {
            id: "/2051906/data_abc".to_string(),
            dc_language: vec!["nl".to_string()],
            ..Default::default()
        }
    }

    fn user(userid: &str) -> SessionUser {
        SessionUser {
            userid: userid.to_string(),
            username: None,
            admin: false,
            admin_event: None,
            reviewer: false,
        }
    }

    fn allowed() -> Vec<String> {
        vec!["en-GB".to_string(), "de-DE".to_string(), "fr-FR".to_string()]
    }

    #[test]
    fn test_full_pipeline_options() {
        let reservations = vec![ReservationRecord {
            language: "de-DE".to_string(),
            userid: Some("7".to_string()),
        }];

        let view = build_selector(
            policy(),
            &dutch_item(),
            &allowed(),
            Ok(reservations),
            Some(&user("42")),
        );

        let SelectorView::Options(options) = view else {
            panic!("expected options");
        };
        let rendered: Vec<(&str, bool)> = options
            .iter()
            .map(|o| (o.entry.iso.as_str(), o.disabled))
            .collect();
        assert_eq!(
            rendered,
            vec![("en-GB", false), ("de-DE", true), ("fr-FR", false)]
        );
    }

    #[test]
    fn test_fetch_failure_collapses_to_login_required() {
        let view = build_selector(
            policy(),
            &dutch_item(),
            &allowed(),
            Err(BackendError::Api("not logged in".to_string())),
            Some(&user("42")),
        );

        assert_eq!(view, SelectorView::LoginRequired);
    }

    #[test]
    fn test_anonymous_gets_login_required() {
        let view = build_selector(policy(), &dutch_item(), &allowed(), Ok(Vec::new()), None);

        assert_eq!(view, SelectorView::LoginRequired);
    }

    #[test]
    fn test_unmapped_source_yields_empty_options() {
        // A Portuguese record has no matrix entry on this event: the
        // selector renders, but with nothing selectable.
        let item = ArchivalItem {
            id: "/x/y".to_string(),
            dc_language: vec!["pt".to_string()],
            ..Default::default()
        };

        let view = build_selector(policy(), &item, &allowed(), Ok(Vec::new()), Some(&user("42")));

        assert_eq!(view, SelectorView::Options(Vec::new()));
    }
}
