use crate::config::Config;
use crate::item::ArchivalItem;
use crate::reservation::ReservationRecord;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Backend request failure.
///
/// Deliberately coarse: the platform does not distinguish "unauthenticated",
/// "not found" and transport errors to callers, and consuming pages render
/// one generic message for all of them. Keep that contract when adding
/// variants.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend request failed ({status}): {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("backend request failed: {0}")]
    Api(String),
}

/// Event read model from `/event/list/{eventId}`.
#[derive(Debug, Clone, Deserialize)]
pub struct EventInfo {
    pub id: String,
    pub name: String,
    #[serde(rename = "startDate")]
    pub start_date: DateTime<Utc>,
    #[serde(rename = "endDate")]
    pub end_date: DateTime<Utc>,
}

impl EventInfo {
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        now >= self.start_date && now <= self.end_date
    }
}

/// Aggregate counters from `/event/statistics/{eventId}`.
#[derive(Debug, Clone, Deserialize)]
pub struct EventStatistics {
    pub items: u32,
    pub reservations: u32,
    pub completed: u32,
    pub reviews: u32,
}

/// One row of `/event/leaderboard/{eventId}`.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub points: u32,
}

/// `{ results } | { error }` envelope used by the read endpoints.
#[derive(Debug, Deserialize)]
struct ResultsEnvelope<T> {
    results: Option<T>,
    error: Option<String>,
}

/// `{ success: { key } } | { error }` envelope of the reserve endpoint.
#[derive(Debug, Deserialize)]
struct ReserveEnvelope {
    success: Option<ReserveSuccess>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReserveSuccess {
    key: String,
}

#[derive(Debug, Serialize)]
struct ReserveRequest<'a> {
    eventid: &'a str,
    itemid: &'a str,
    language: &'a str,
}

/// Thin client for the remote backend that owns all real state.
///
/// The session cookie, when present, is forwarded verbatim; it is never
/// decoded or verified here — the trust boundary lives server-side.
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    cookie: Option<String>,
}

impl BackendClient {
    pub fn new(config: &Config) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base.trim_end_matches('/').to_string(),
            cookie: config.session_cookie.clone(),
        })
    }

    /// Languages already reserved for an item, for any user.
    pub async fn reserved_subtitles(
        &self,
        event_id: &str,
        item: &ArchivalItem,
    ) -> Result<Vec<ReservationRecord>, BackendError> {
        let path = format!(
            "/item/getreservedsubtitles/{}/{}",
            event_id,
            item.safe_id()
        );
        let records: Vec<ReservationRecord> = self.get_results(&path).await?;

        info!(
            "Fetched {} reservations for item {}",
            records.len(),
            item.id
        );
        Ok(records)
    }

    /// Claim an item/language pair. Returns the editor deep-link key.
    ///
    /// Conflict enforcement ("exactly one reservation per language per
    /// item") is entirely the server's job; a lost race surfaces as an
    /// `{ error }` payload like any other rejection.
    pub async fn reserve_subtitle(
        &self,
        event_id: &str,
        item: &ArchivalItem,
        language: &str,
    ) -> Result<String, BackendError> {
        let url = format!("{}/item/reservesubtitle", self.base_url);
        let body = ReserveRequest {
            eventid: event_id,
            itemid: &item.id,
            language,
        };

        let mut request = self.http.post(&url).json(&body);
        if let Some(cookie) = &self.cookie {
            request = request.header(reqwest::header::COOKIE, cookie);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status { status, body });
        }

        let envelope: ReserveEnvelope = response.json().await?;
        match envelope {
            ReserveEnvelope {
                success: Some(success),
                ..
            } => {
                info!("Reserved {} for item {}", language, item.id);
                Ok(success.key)
            }
            ReserveEnvelope {
                error: Some(error), ..
            } => Err(BackendError::Api(error)),
            _ => Err(BackendError::Api("empty backend response".to_string())),
        }
    }

    pub async fn event_info(&self, event_id: &str) -> Result<EventInfo, BackendError> {
        self.get_results(&format!("/event/list/{}", event_id)).await
    }

    /// ISO tags the event offers as subtitle targets.
    pub async fn available_languages(&self, event_id: &str) -> Result<Vec<String>, BackendError> {
        self.get_results(&format!("/event/availableLanguages/{}", event_id))
            .await
    }

    pub async fn statistics(&self, event_id: &str) -> Result<EventStatistics, BackendError> {
        self.get_results(&format!("/event/statistics/{}", event_id))
            .await
    }

    pub async fn leaderboard(
        &self,
        event_id: &str,
    ) -> Result<Vec<LeaderboardEntry>, BackendError> {
        self.get_results(&format!("/event/leaderboard/{}", event_id))
            .await
    }

    async fn get_results<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.http.get(&url);
        if let Some(cookie) = &self.cookie {
            request = request.header(reqwest::header::COOKIE, cookie);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status { status, body });
        }

        let envelope: ResultsEnvelope<T> = response.json().await?;
        match envelope {
            ResultsEnvelope {
                results: Some(results),
                ..
            } => Ok(results),
            ResultsEnvelope {
                error: Some(error), ..
            } => Err(BackendError::Api(error)),
            _ => Err(BackendError::Api("empty backend response".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Envelope Format Tests ====================

    #[test]
    fn test_results_envelope_with_results() {
        let json = r#"{ "results": ["en-GB", "de-DE"] }"#;
        let envelope: ResultsEnvelope<Vec<String>> =
            serde_json::from_str(json).expect("Should deserialize");

        assert_eq!(envelope.results, Some(vec!["en-GB".into(), "de-DE".into()]));
        assert!(envelope.error.is_none());
    }

    #[test]
    fn test_results_envelope_with_error() {
        let json = r#"{ "error": "not logged in" }"#;
        let envelope: ResultsEnvelope<Vec<String>> =
            serde_json::from_str(json).expect("Should deserialize");

        assert!(envelope.results.is_none());
        assert_eq!(envelope.error.as_deref(), Some("not logged in"));
    }

    #[test]
    fn test_reserve_envelope_success() {
        let json = r#"{ "success": { "key": "abc123" } }"#;
        let envelope: ReserveEnvelope = serde_json::from_str(json).expect("Should deserialize");

        assert_eq!(envelope.success.map(|s| s.key).as_deref(), Some("abc123"));
    }

    // ==================== Model Tests ====================

    #[test]
    fn test_event_info_deserialization_and_is_live() {
        let json = r#"{
            "id": "amsterdam-2024",
            "name": "Subtitle-a-thon Amsterdam",
            "startDate": "2024-05-01T09:00:00Z",
            "endDate": "2024-05-05T18:00:00Z"
        }"#;
        let info: EventInfo = serde_json::from_str(json).expect("Should deserialize");

        assert_eq!(info.name, "Subtitle-a-thon Amsterdam");
        assert!(info.is_live("2024-05-03T12:00:00Z".parse().unwrap()));
        assert!(!info.is_live("2024-05-06T12:00:00Z".parse().unwrap()));
        assert!(!info.is_live("2024-04-30T12:00:00Z".parse().unwrap()));
    }

    #[test]
    fn test_statistics_deserialization() {
        let json = r#"{ "items": 120, "reservations": 34, "completed": 18, "reviews": 9 }"#;
        let stats: EventStatistics = serde_json::from_str(json).expect("Should deserialize");

        assert_eq!(stats.items, 120);
        assert_eq!(stats.reviews, 9);
    }

    #[test]
    fn test_leaderboard_entry_deserialization() {
        let json = r#"[{ "username": "annak", "points": 240 }]"#;
        let rows: Vec<LeaderboardEntry> = serde_json::from_str(json).expect("Should deserialize");

        assert_eq!(rows[0].username, "annak");
        assert_eq!(rows[0].points, 240);
    }

    // ==================== Error Taxonomy Tests ====================

    #[test]
    fn test_error_messages_share_one_prefix() {
        // The collapsed taxonomy is the external contract: every variant
        // reads as the same generic failure.
        let api = BackendError::Api("not logged in".to_string());
        let status = BackendError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
            body: String::new(),
        };

        assert!(api.to_string().starts_with("backend request failed"));
        assert!(status.to_string().starts_with("backend request failed"));
    }

    // ==================== URL Format Tests ====================

    #[test]
    fn test_reserved_subtitles_path_uses_safe_id() {
        let item = ArchivalItem {
            id: "/2051906/data_abc".to_string(),
            ..Default::default()
        };
        let path = format!(
            "/item/getreservedsubtitles/{}/{}",
            "amsterdam-2024",
            item.safe_id()
        );

        assert_eq!(
            path,
            "/item/getreservedsubtitles/amsterdam-2024/%2F2051906%2Fdata_abc"
        );
    }
}
