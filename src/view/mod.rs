//! Output surface of the widget
//!
//! A [`View`] owns the containers the user sees: the connected wallet
//! address, the challenge messages, the signatures and the result alerts.
//! Messages and signatures are append-only; the alert container is cleared
//! before every verification result is rendered.

mod console;
mod page;

pub use console::Console;
pub use page::Page;

/// Kind of result alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

impl AlertKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertKind::Success => "alert alert-success",
            AlertKind::Error => "alert alert-error",
        }
    }
}

/// Result alert rendered in the alert container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub text: String,
}

impl Alert {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            text: text.into(),
        }
    }
}

/// Containers and controls the widget renders into
pub trait View: Send {
    /// Interrupt the user with a message (configuration and capability problems)
    fn notify(&mut self, message: &str);

    /// Replace the connected wallet address text
    fn set_wallet_address(&mut self, text: &str);

    /// Enable or disable the sign action
    fn set_sign_enabled(&mut self, enabled: bool);

    /// Append a challenge message to the message container
    fn append_message(&mut self, message: &str);

    /// Append a signature display to the signature container
    fn append_signature(&mut self, text: &str);

    /// Remove every alert from the alert container
    fn clear_alerts(&mut self);

    /// Add an alert to the alert container
    fn push_alert(&mut self, alert: Alert);
}
