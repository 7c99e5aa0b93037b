//! WhatsApp text delivery via an HTTP JSON API.
//!
//! [`WhatsappSender`] POSTs a text message payload to the configured API
//! endpoint with a bearer token. One attempt per call: retry policy belongs
//! to the caller, which records a receipt per attempt.

use std::time::Duration;

use crate::transport::ChatMessage;

/// HTTP request timeout for a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for WhatsApp delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum WhatsappError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("WhatsApp API returned HTTP {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// WhatsappConfig
// ---------------------------------------------------------------------------

/// Configuration for the WhatsApp delivery service.
#[derive(Debug, Clone)]
pub struct WhatsappConfig {
    /// Full messages endpoint URL.
    pub api_url: String,
    /// Bearer token for the API.
    pub access_token: String,
}

impl WhatsappConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `WHATSAPP_API_URL` or `WHATSAPP_ACCESS_TOKEN` is
    /// not set, signalling that WhatsApp delivery is not configured.
    ///
    /// | Variable                | Required |
    /// |-------------------------|----------|
    /// | `WHATSAPP_API_URL`      | yes      |
    /// | `WHATSAPP_ACCESS_TOKEN` | yes      |
    pub fn from_env() -> Option<Self> {
        let api_url = std::env::var("WHATSAPP_API_URL").ok()?;
        let access_token = std::env::var("WHATSAPP_ACCESS_TOKEN").ok()?;
        Some(Self {
            api_url,
            access_token,
        })
    }
}

// ---------------------------------------------------------------------------
// WhatsappSender
// ---------------------------------------------------------------------------

/// Delivers WhatsApp text messages through the HTTP API.
pub struct WhatsappSender {
    config: WhatsappConfig,
    client: reqwest::Client,
}

impl WhatsappSender {
    /// Create a new sender with a pre-configured HTTP client.
    pub fn new(config: WhatsappConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { config, client }
    }

    /// The JSON payload for one text message.
    fn payload(message: &ChatMessage) -> serde_json::Value {
        serde_json::json!({
            "messaging_product": "whatsapp",
            "to": message.to,
            "type": "text",
            "text": { "body": message.body },
        })
    }

    /// Execute one delivery attempt, returning the API message id when the
    /// response carries one.
    pub async fn send(&self, message: &ChatMessage) -> Result<Option<String>, WhatsappError> {
        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.access_token)
            .json(&Self::payload(message))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WhatsappError::HttpStatus(response.status().as_u16()));
        }

        let body: serde_json::Value = response.json().await.unwrap_or_default();
        let message_id = body
            .get("messages")
            .and_then(|m| m.get(0))
            .and_then(|m| m.get("id"))
            .and_then(|id| id.as_str())
            .map(str::to_string);

        tracing::info!(to = %message.to, "WhatsApp message sent");
        Ok(message_id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_returns_none_without_url() {
        std::env::remove_var("WHATSAPP_API_URL");
        assert!(WhatsappConfig::from_env().is_none());
    }

    #[test]
    fn payload_shape() {
        let payload = WhatsappSender::payload(&ChatMessage {
            to: "+447700900123".into(),
            body: "Your itinerary".into(),
        });

        assert_eq!(payload["messaging_product"], "whatsapp");
        assert_eq!(payload["to"], "+447700900123");
        assert_eq!(payload["type"], "text");
        assert_eq!(payload["text"]["body"], "Your itinerary");
    }

    #[test]
    fn error_display() {
        let err = WhatsappError::HttpStatus(401);
        assert_eq!(err.to_string(), "WhatsApp API returned HTTP 401");
    }
}
