//! Wallet provider capability
//!
//! The verifier never holds keys. Account access and message signing are
//! requested from an external wallet through the [`WalletProvider`] trait.

use async_trait::async_trait;

use crate::error::WidgetResult;

mod json_rpc;
mod types;

pub use json_rpc::{encode_personal_message, JsonRpcProvider};
pub use types::{RpcErrorObject, RpcResponse};

/// Account access and personal-message signing offered by a wallet
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Ask the wallet for access to its accounts (`eth_requestAccounts`)
    async fn request_accounts(&self) -> WidgetResult<Vec<String>>;

    /// Ask the wallet to sign `message` with `address` (`personal_sign`)
    async fn personal_sign(&self, message: &str, address: &str) -> WidgetResult<String>;
}
