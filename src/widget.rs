//! The verification widget
//!
//! Ties the session, the wallet provider, the verification client and the
//! view together behind the two user actions: connect and sign.
//!
//! Actions never return errors. Failures are either raised to the user
//! through [`View::notify`] (missing provider, missing token) or only logged
//! (declined wallet requests, signing and network failures).

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::challenge::challenge_message;
use crate::config::Config;
use crate::error::{WidgetError, WidgetResult};
use crate::provider::{JsonRpcProvider, WalletProvider};
use crate::session::{Session, SessionState};
use crate::verify::{VerificationClient, VerificationOutcome, VerifyRequest};
use crate::view::{Alert, View};

pub const SUCCESS_TEXT: &str = "Verification successful!";
pub const FAILURE_PREFIX: &str = "Verification failed: ";

/// Wallet verification widget
pub struct Widget<V: View> {
    config: Config,
    provider: Option<Arc<dyn WalletProvider>>,
    client: VerificationClient,
    session: Mutex<Session>,
    view: Mutex<V>,
}

impl<V: View> Widget<V> {
    pub fn new(
        config: Config,
        token: Option<String>,
        provider: Option<Arc<dyn WalletProvider>>,
        view: V,
    ) -> Self {
        let client = VerificationClient::new(config.verify_endpoint());
        Self {
            config,
            provider,
            client,
            session: Mutex::new(Session::new(token)),
            view: Mutex::new(view),
        }
    }

    /// Build a widget whose provider is the configured JSON-RPC wallet, if any
    pub fn from_config(config: Config, token: Option<String>, view: V) -> Self {
        let provider = config
            .wallet_rpc_url
            .clone()
            .map(|url| Arc::new(JsonRpcProvider::new(url)) as Arc<dyn WalletProvider>);
        Self::new(config, token, provider, view)
    }

    pub async fn view(&self) -> MutexGuard<'_, V> {
        self.view.lock().await
    }

    pub async fn state(&self) -> SessionState {
        self.session.lock().await.state()
    }

    pub async fn account(&self) -> Option<String> {
        self.session.lock().await.account().map(str::to_string)
    }

    /// Check the token and the server settings.
    ///
    /// Each problem is logged and shown to the user. Returns the messages
    /// shown; the widget stays usable either way.
    pub async fn load(&self) -> Vec<String> {
        let mut shown = Vec::new();

        if self.session.lock().await.token().is_none() {
            tracing::error!("Verification token is missing from the URL");
            shown.push("Verification token is missing from the URL.".to_string());
        }

        for problem in self.config.diagnose() {
            tracing::error!(error = %problem, "Verification server is not configured");
            shown.push(problem.user_message());
        }

        let mut view = self.view.lock().await;
        view.set_sign_enabled(false);
        for message in &shown {
            view.notify(message);
        }

        shown
    }

    /// Request account access from the wallet provider
    pub async fn connect(&self) -> SessionState {
        match self.try_connect().await {
            Ok(account) => {
                tracing::info!(account = %account, "Wallet connected");
            }
            Err(e) => self.report("connect", e).await,
        }
        self.state().await
    }

    async fn try_connect(&self) -> WidgetResult<String> {
        let provider = self.provider.as_ref().ok_or(WidgetError::ProviderMissing)?;

        let account = provider
            .request_accounts()
            .await?
            .into_iter()
            .next()
            .ok_or(WidgetError::NoAccounts)?;

        self.session.lock().await.connect(account.clone());

        let mut view = self.view.lock().await;
        view.set_wallet_address(&format!("Connected wallet address:\n{}", account));
        view.set_sign_enabled(true);
        view.append_message(&challenge_message(&account));

        Ok(account)
    }

    /// Sign the challenge and submit it for verification
    pub async fn sign_and_verify(&self) -> SessionState {
        match self.try_sign_and_verify().await {
            Ok(outcome) => {
                tracing::info!(verified = outcome.is_verified(), "Verification finished");
            }
            Err(e) => self.report("sign", e).await,
        }
        self.state().await
    }

    async fn try_sign_and_verify(&self) -> WidgetResult<VerificationOutcome> {
        let (account, token) = {
            let session = self.session.lock().await;
            let account = session
                .account()
                .map(str::to_string)
                .ok_or(WidgetError::NotConnected)?;
            (account, session.token().map(str::to_string))
        };

        if token.is_none() {
            if self.config.require_token {
                return Err(WidgetError::MissingToken);
            }
            tracing::warn!("Submitting verification without a token");
        }

        let provider = self.provider.as_ref().ok_or(WidgetError::ProviderMissing)?;
        let message = challenge_message(&account);
        let signature = provider.personal_sign(&message, &account).await?;

        self.view
            .lock()
            .await
            .append_signature(&format!("Signature:\n{}", signature));

        let request = VerifyRequest {
            token,
            wallet_address: account,
            signature,
        };
        let outcome = self.client.submit(&request).await?;

        self.session
            .lock()
            .await
            .record_outcome(outcome.is_verified());

        let alert = match &outcome {
            VerificationOutcome::Verified { .. } => Alert::success(SUCCESS_TEXT),
            VerificationOutcome::Rejected { message } => {
                Alert::error(format!("{}{}", FAILURE_PREFIX, message))
            }
        };

        let mut view = self.view.lock().await;
        view.clear_alerts();
        view.push_alert(alert);

        Ok(outcome)
    }

    async fn report(&self, action: &str, error: WidgetError) {
        if let Some(message) = error.user_message() {
            tracing::error!(action = %action, code = %error.error_code(), error = %error, "Action aborted");
            self.view.lock().await.notify(message);
        } else if error.is_user_rejection() {
            tracing::warn!(action = %action, error = %error, "User denied the wallet request");
        } else {
            tracing::error!(action = %action, code = %error.error_code(), error = %error, "Action failed");
        }
    }
}
