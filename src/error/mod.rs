//! Error handling for the wallet verifier
//!
//! Every failure a widget action can hit maps to one [`WidgetError`]
//! variant. Whether a failure is shown to the user or only logged is decided
//! by [`WidgetError::is_user_visible`].

use thiserror::Error;

/// JSON-RPC error code a wallet returns when the user rejects a request
pub const USER_REJECTED_CODE: i64 = 4001;

/// Errors raised by widget actions
#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("No Ethereum provider found")]
    ProviderMissing,

    #[error("Wallet provider rejected the request ({code}): {message}")]
    ProviderRejected { code: i64, message: String },

    #[error("Wallet provider returned no accounts")]
    NoAccounts,

    #[error("No wallet connected")]
    NotConnected,

    #[error("Verification token is missing")]
    MissingToken,

    #[error("Invalid verification endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed provider response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl WidgetError {
    /// Get the error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            WidgetError::ProviderMissing => "PROVIDER_MISSING",
            WidgetError::ProviderRejected { .. } => "PROVIDER_REJECTED",
            WidgetError::NoAccounts => "NO_ACCOUNTS",
            WidgetError::NotConnected => "NOT_CONNECTED",
            WidgetError::MissingToken => "MISSING_TOKEN",
            WidgetError::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            WidgetError::Transport(_) => "TRANSPORT_ERROR",
            WidgetError::Decode(_) => "DECODE_ERROR",
        }
    }

    /// Whether the user declined the request in their wallet
    pub fn is_user_rejection(&self) -> bool {
        matches!(
            self,
            WidgetError::ProviderRejected { code, .. } if *code == USER_REJECTED_CODE
        )
    }

    /// Whether this failure is raised as a user alert.
    ///
    /// Declined requests, signing failures and network errors are logged only.
    pub fn is_user_visible(&self) -> bool {
        matches!(self, WidgetError::ProviderMissing | WidgetError::MissingToken)
    }

    /// Message shown to the user for visible failures
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            WidgetError::ProviderMissing => {
                Some("No Ethereum provider found. Please install a wallet provider.")
            }
            WidgetError::MissingToken => Some("Verification token is missing from the URL."),
            _ => None,
        }
    }
}

/// Result type alias using WidgetError
pub type WidgetResult<T> = Result<T, WidgetError>;
