//! Shared fixtures: an in-process wallet and mock HTTP servers

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};

use wallet_verifier::error::{WidgetError, WidgetResult, USER_REJECTED_CODE};
use wallet_verifier::provider::WalletProvider;
use wallet_verifier::Config;

pub const ACCOUNT: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

/// Wallet whose answers are fixed up front
pub struct MockWallet {
    accounts: Option<Vec<String>>,
    signature: Option<String>,
    sign_calls: AtomicUsize,
    signed_messages: Mutex<Vec<(String, String)>>,
}

impl MockWallet {
    /// Grants access to [`ACCOUNT`] and signs everything
    pub fn granting() -> Self {
        Self {
            accounts: Some(vec![ACCOUNT.to_string(), "0x0000000000000000000000000000000000000001".to_string()]),
            signature: Some("0xsignature".to_string()),
            sign_calls: AtomicUsize::new(0),
            signed_messages: Mutex::new(Vec::new()),
        }
    }

    /// Rejects account access like a user pressing "cancel"
    pub fn denying() -> Self {
        Self {
            accounts: None,
            ..Self::granting()
        }
    }

    /// Grants access but refuses to sign
    pub fn refusing_to_sign() -> Self {
        Self {
            signature: None,
            ..Self::granting()
        }
    }

    /// Grants access with an empty account list
    pub fn without_accounts() -> Self {
        Self {
            accounts: Some(Vec::new()),
            ..Self::granting()
        }
    }

    pub fn sign_calls(&self) -> usize {
        self.sign_calls.load(Ordering::SeqCst)
    }

    pub fn signed_messages(&self) -> Vec<(String, String)> {
        self.signed_messages.lock().unwrap().clone()
    }
}

fn user_rejected() -> WidgetError {
    WidgetError::ProviderRejected {
        code: USER_REJECTED_CODE,
        message: "User rejected the request.".to_string(),
    }
}

#[async_trait]
impl WalletProvider for MockWallet {
    async fn request_accounts(&self) -> WidgetResult<Vec<String>> {
        self.accounts.clone().ok_or_else(user_rejected)
    }

    async fn personal_sign(&self, message: &str, address: &str) -> WidgetResult<String> {
        self.sign_calls.fetch_add(1, Ordering::SeqCst);
        self.signed_messages
            .lock()
            .unwrap()
            .push((message.to_string(), address.to_string()));
        self.signature.clone().ok_or_else(user_rejected)
    }
}

/// Running mock server
pub struct MockServer {
    pub base_url: String,
    pub port: u16,
    pub received: Arc<Mutex<Vec<Value>>>,
}

impl MockServer {
    pub fn url(&self) -> String {
        format!("{}:{}", self.base_url, self.port)
    }

    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }

    /// Configuration pointing the widget at this server
    pub fn config(&self) -> Config {
        Config {
            verify_url: Some(self.base_url.clone()),
            verify_port: Some(self.port.to_string()),
            log_level: "debug".to_string(),
            ..Config::default()
        }
    }
}

async fn serve(app: Router, received: Arc<Mutex<Vec<Value>>>) -> MockServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockServer {
        base_url: "http://127.0.0.1".to_string(),
        port,
        received,
    }
}

/// Verification endpoint answering every request with `status` and `body`
pub async fn spawn_verify_server(status: StatusCode, body: &'static str) -> MockServer {
    let received = Arc::new(Mutex::new(Vec::new()));
    let log = received.clone();

    let app = Router::new().route(
        "/verify",
        post(move |Json(payload): Json<Value>| {
            let log = log.clone();
            async move {
                log.lock().unwrap().push(payload);
                (status, body)
            }
        }),
    );

    serve(app, received).await
}

/// JSON-RPC wallet granting [`ACCOUNT`] and signing with a fixed signature
pub async fn spawn_wallet_server() -> MockServer {
    let received = Arc::new(Mutex::new(Vec::new()));
    let log = received.clone();

    let app = Router::new().route(
        "/",
        post(move |Json(request): Json<Value>| {
            let log = log.clone();
            async move {
                log.lock().unwrap().push(request.clone());
                let id = request["id"].clone();
                let reply = match request["method"].as_str() {
                    Some("eth_requestAccounts") => {
                        json!({"jsonrpc": "2.0", "id": id, "result": [ACCOUNT]})
                    }
                    Some("personal_sign") => {
                        json!({"jsonrpc": "2.0", "id": id, "result": "0xfeedface"})
                    }
                    _ => json!({
                        "jsonrpc": "2.0",
                        "id": id,
                        "error": {"code": -32601, "message": "Method not found"}
                    }),
                };
                Json(reply)
            }
        }),
    );

    serve(app, received).await
}

/// JSON-RPC wallet rejecting every request as declined by the user
pub async fn spawn_rejecting_wallet_server() -> MockServer {
    let received = Arc::new(Mutex::new(Vec::new()));
    let log = received.clone();

    let app = Router::new().route(
        "/",
        post(move |Json(request): Json<Value>| {
            let log = log.clone();
            async move {
                log.lock().unwrap().push(request.clone());
                Json(json!({
                    "jsonrpc": "2.0",
                    "id": request["id"].clone(),
                    "error": {"code": USER_REJECTED_CODE, "message": "User rejected the request."}
                }))
            }
        }),
    );

    serve(app, received).await
}
