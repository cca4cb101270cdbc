//! Verification endpoint client
//!
//! Submits the signed challenge to `POST {base}:{port}/verify` and turns the
//! reply into a typed [`VerificationOutcome`].

use std::time::Instant;

use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{WidgetError, WidgetResult};

/// Failure text used when the server rejects without a usable `error` field
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Body of the verification request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub token: Option<String>,
    pub wallet_address: String,
    pub signature: String,
}

/// Failure body returned by the verification server
#[derive(Debug, Deserialize)]
struct VerifyErrorBody {
    #[serde(default)]
    error: Option<Value>,
}

/// Success body returned by the verification server
#[derive(Debug, Deserialize)]
struct VerifySuccessBody {
    #[serde(default)]
    message: Option<String>,
}

/// Verdict of the verification server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// 2xx reply, with the server's message when it sent one
    Verified { message: Option<String> },
    /// Non-2xx reply, with the server's error text
    Rejected { message: String },
}

impl VerificationOutcome {
    /// Classify a raw HTTP reply.
    ///
    /// Any 2xx status is a success regardless of body. A non-2xx reply whose
    /// body does not carry a string `error` falls back to [`UNKNOWN_ERROR`].
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        if status.is_success() {
            let message = serde_json::from_slice::<VerifySuccessBody>(body)
                .ok()
                .and_then(|b| b.message);
            return VerificationOutcome::Verified { message };
        }

        let message = match serde_json::from_slice::<VerifyErrorBody>(body) {
            Ok(VerifyErrorBody {
                error: Some(Value::String(error)),
            }) => error,
            Ok(other) => {
                tracing::warn!(status = %status.as_u16(), error = ?other.error, "Verification error has unexpected shape");
                UNKNOWN_ERROR.to_string()
            }
            Err(e) => {
                tracing::warn!(status = %status.as_u16(), error = %e, "Verification error body is not JSON");
                UNKNOWN_ERROR.to_string()
            }
        };

        VerificationOutcome::Rejected { message }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationOutcome::Verified { .. })
    }
}

/// Client for the verification endpoint
#[derive(Clone)]
pub struct VerificationClient {
    endpoint: String,
    client: Client,
}

impl VerificationClient {
    pub fn new(endpoint: String) -> Self {
        Self::with_client(endpoint, Client::new())
    }

    pub fn with_client(endpoint: String, client: Client) -> Self {
        Self { endpoint, client }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit one verification request. No retry and no timeout.
    pub async fn submit(&self, request: &VerifyRequest) -> WidgetResult<VerificationOutcome> {
        let url = Url::parse(&self.endpoint)
            .map_err(|e| WidgetError::InvalidEndpoint(format!("{}: {}", self.endpoint, e)))?;

        let start = Instant::now();

        tracing::info!(
            endpoint = %url,
            wallet_address = %request.wallet_address,
            has_token = request.token.is_some(),
            "Submitting verification"
        );

        let response = self.client.post(url).json(request).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        let duration = start.elapsed();
        let outcome = VerificationOutcome::from_response(status, &body);

        if outcome.is_verified() {
            tracing::info!(
                status = %status.as_u16(),
                duration_ms = %duration.as_millis(),
                "Verification accepted"
            );
        } else {
            tracing::warn!(
                status = %status.as_u16(),
                duration_ms = %duration.as_millis(),
                "Verification rejected"
            );
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = VerifyRequest {
            token: Some("tok".to_string()),
            wallet_address: "0xabc".to_string(),
            signature: "0xsig".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"token": "tok", "wallet_address": "0xabc", "signature": "0xsig"})
        );

        // A missing token is still sent, as null
        let request = VerifyRequest {
            token: None,
            ..request
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value["token"].is_null());
    }

    #[test]
    fn test_success_ignores_body() {
        let outcome = VerificationOutcome::from_response(
            StatusCode::OK,
            br#"{"message": "Verification successful"}"#,
        );
        assert_eq!(
            outcome,
            VerificationOutcome::Verified {
                message: Some("Verification successful".to_string())
            }
        );

        let outcome = VerificationOutcome::from_response(StatusCode::NO_CONTENT, b"");
        assert!(outcome.is_verified());
    }

    #[test]
    fn test_failure_carries_server_error() {
        let outcome =
            VerificationOutcome::from_response(StatusCode::BAD_REQUEST, br#"{"error": "bad signature"}"#);
        assert_eq!(
            outcome,
            VerificationOutcome::Rejected {
                message: "bad signature".to_string()
            }
        );
    }

    #[test]
    fn test_failure_fails_closed() {
        let bodies: [&[u8]; 4] = [b"{}", br#"{"error": 42}"#, b"<html>oops</html>", b""];
        for body in bodies {
            let outcome = VerificationOutcome::from_response(StatusCode::INTERNAL_SERVER_ERROR, body);
            assert_eq!(
                outcome,
                VerificationOutcome::Rejected {
                    message: UNKNOWN_ERROR.to_string()
                }
            );
        }
    }

    #[tokio::test]
    async fn test_malformed_endpoint() {
        let client = VerificationClient::new(":/verify".to_string());
        let request = VerifyRequest {
            token: None,
            wallet_address: "0xabc".to_string(),
            signature: "0xsig".to_string(),
        };
        let result = client.submit(&request).await;
        assert!(matches!(result, Err(WidgetError::InvalidEndpoint(_))));
    }
}
