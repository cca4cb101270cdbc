use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use super::types::RpcResponse;
use super::WalletProvider;
use crate::error::{WidgetError, WidgetResult};

/// Wallet reachable over HTTP JSON-RPC (a wallet daemon or signer proxy
/// exposing the EIP-1193 methods)
pub struct JsonRpcProvider {
    rpc_url: String,
    client: Client,
    next_id: AtomicU64,
}

impl JsonRpcProvider {
    pub fn new(rpc_url: String) -> Self {
        Self::with_client(rpc_url, Client::new())
    }

    pub fn with_client(rpc_url: String, client: Client) -> Self {
        Self {
            rpc_url,
            client,
            next_id: AtomicU64::new(1),
        }
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> WidgetResult<T> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let payload = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        tracing::debug!(method = %method, id = id, "Sending wallet request");

        let resp = self
            .client
            .post(&self.rpc_url)
            .json(&payload)
            .send()
            .await?
            .json::<Value>()
            .await?;

        let resp: RpcResponse = serde_json::from_value(resp)?;

        if let Some(err) = resp.error {
            return Err(WidgetError::ProviderRejected {
                code: err.code,
                message: err.message,
            });
        }

        let result = resp.result.unwrap_or(Value::Null);
        Ok(serde_json::from_value(result)?)
    }
}

#[async_trait]
impl WalletProvider for JsonRpcProvider {
    async fn request_accounts(&self) -> WidgetResult<Vec<String>> {
        self.call("eth_requestAccounts", json!([])).await
    }

    async fn personal_sign(&self, message: &str, address: &str) -> WidgetResult<String> {
        self.call(
            "personal_sign",
            json!([encode_personal_message(message), address]),
        )
        .await
    }
}

/// Hex-encode a UTF-8 message the way wallets expect `personal_sign` data
pub fn encode_personal_message(message: &str) -> String {
    format!("0x{}", hex::encode(message.as_bytes()))
}
