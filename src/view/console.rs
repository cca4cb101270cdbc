use std::io::Write;

use super::{Alert, AlertKind, View};

/// Terminal view, writes every update as plain text lines
pub struct Console<W: Write + Send> {
    out: W,
    sign_enabled: bool,
}

impl<W: Write + Send> Console<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            sign_enabled: false,
        }
    }

    pub fn sign_enabled(&self) -> bool {
        self.sign_enabled
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "Failed to write to console");
        }
    }
}

impl<W: Write + Send> View for Console<W> {
    fn notify(&mut self, message: &str) {
        self.line(&format!("! {}", message));
    }

    fn set_wallet_address(&mut self, text: &str) {
        self.line(text);
    }

    fn set_sign_enabled(&mut self, enabled: bool) {
        self.sign_enabled = enabled;
    }

    fn append_message(&mut self, message: &str) {
        self.line(message);
    }

    fn append_signature(&mut self, text: &str) {
        self.line(text);
    }

    fn clear_alerts(&mut self) {}

    fn push_alert(&mut self, alert: Alert) {
        let marker = match alert.kind {
            AlertKind::Success => "[ok]",
            AlertKind::Error => "[error]",
        };
        self.line(&format!("{} {}", marker, alert.text));
    }
}
