use super::{Alert, AlertKind, View};

/// In-memory view, keeps every container's contents for inspection
#[derive(Debug, Clone, Default)]
pub struct Page {
    notifications: Vec<String>,
    wallet_address: Option<String>,
    sign_enabled: bool,
    messages: Vec<String>,
    signatures: Vec<String>,
    alerts: Vec<Alert>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    pub fn wallet_address(&self) -> Option<&str> {
        self.wallet_address.as_deref()
    }

    pub fn sign_enabled(&self) -> bool {
        self.sign_enabled
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn signatures(&self) -> &[String] {
        &self.signatures
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Number of alerts of the given kind currently shown
    pub fn count_alerts(&self, kind: AlertKind) -> usize {
        self.alerts.iter().filter(|a| a.kind == kind).count()
    }
}

impl View for Page {
    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }

    fn set_wallet_address(&mut self, text: &str) {
        self.wallet_address = Some(text.to_string());
    }

    fn set_sign_enabled(&mut self, enabled: bool) {
        self.sign_enabled = enabled;
    }

    fn append_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    fn append_signature(&mut self, text: &str) {
        self.signatures.push(text.to_string());
    }

    fn clear_alerts(&mut self) {
        self.alerts.clear();
    }

    fn push_alert(&mut self, alert: Alert) {
        self.alerts.push(alert);
    }
}
