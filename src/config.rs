use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Backend
    pub api_base: String,

    // Event
    pub event_id: String,

    // Session (raw Cookie header value, optional for anonymous calls)
    pub session_cookie: Option<String>,

    // HTTP
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Backend base URL, e.g. https://api.subtitleathon.example
            api_base: std::env::var("SUBTITLEATHON_API_BASE")
                .context("SUBTITLEATHON_API_BASE not set")?,

            // Event
            event_id: std::env::var("SUBTITLEATHON_EVENT_ID")
                .context("SUBTITLEATHON_EVENT_ID not set")?,

            // Session
            session_cookie: std::env::var("SUBTITLEATHON_COOKIE").ok(),

            // HTTP
            http_timeout_secs: std::env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }
}
