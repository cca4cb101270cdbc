//! Verification session state
//!
//! Holds the token read from the verification link and the account obtained
//! from the wallet provider for the lifetime of one widget.

use reqwest::Url;

/// Where the session is in the connect → sign → verify flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Disconnected,
    Connected,
    Verified,
    Rejected,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Disconnected => "disconnected",
            SessionState::Connected => "connected",
            SessionState::Verified => "verified",
            SessionState::Rejected => "rejected",
        }
    }

    /// Whether an account is available for signing
    pub fn is_connected(&self) -> bool {
        !matches!(self, SessionState::Disconnected)
    }
}

/// Extract the `token` query parameter from a verification link.
///
/// Returns `None` when the link does not parse or carries no non-empty token.
pub fn token_from_link(link: &str) -> Option<String> {
    let url = match Url::parse(link) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!(link = %link, error = %e, "Verification link is not a valid URL");
            return None;
        }
    };

    url.query_pairs()
        .find(|(key, _)| key == "token")
        .map(|(_, value)| value.into_owned())
        .filter(|token| !token.is_empty())
}

/// Per-widget session
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
    account: Option<String>,
    state: SessionState,
}

impl Session {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token,
            account: None,
            state: SessionState::Disconnected,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Record the account granted by the wallet provider
    pub fn connect(&mut self, account: String) {
        self.account = Some(account);
        self.state = SessionState::Connected;
    }

    /// Record the verification server's verdict
    pub fn record_outcome(&mut self, verified: bool) {
        if self.account.is_none() {
            return;
        }
        self.state = if verified {
            SessionState::Verified
        } else {
            SessionState::Rejected
        };
    }
}
