use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;
use tracing::debug;

/// Name of the browser cookie carrying the session user.
pub const SESSION_COOKIE: &str = "subtitleathon_user";

/// Session identity as stored client-side.
///
/// Read-only and never verified here: the cookie is an unauthenticated hint
/// for display and routing, and the backend re-checks every privileged call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionUser {
    pub userid: String,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub admin: bool,

    /// Event this user administers, when `admin` is scoped.
    #[serde(default)]
    pub admin_event: Option<String>,

    #[serde(default)]
    pub reviewer: bool,
}

static COOKIE_RE: OnceLock<Regex> = OnceLock::new();

/// Extract the session user from a raw `Cookie` header value.
///
/// An absent cookie or a garbled payload both mean "anonymous"; nothing here
/// fails loudly on untrusted input.
pub fn parse_session_cookie(header: &str) -> Option<SessionUser> {
    let re = COOKIE_RE.get_or_init(|| {
        Regex::new(&format!(r"(?:^|;\s*){}=([^;]+)", SESSION_COOKIE)).unwrap()
    });

    let raw = re.captures(header)?.get(1)?.as_str();
    match serde_json::from_str(raw) {
        Ok(user) => Some(user),
        Err(err) => {
            debug!("Ignoring malformed session cookie: {}", err);
            None
        }
    }
}
