//! The delivery transport seam.
//!
//! The composer talks to a [`Transport`] trait object injected through
//! application state; it never constructs SMTP or HTTP clients itself.
//! Transport methods do not return `Err`: every attempt resolves to a
//! [`SendOutcome`] so callers record receipts uniformly for successes and
//! failures.

use async_trait::async_trait;

use crate::email::SmtpMailer;
use crate::whatsapp::WhatsappSender;

/// An outbound email: recipient, subject, plain-text body, optional HTML
/// alternative.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: Option<String>,
}

/// An outbound chat message: normalized recipient number and body text.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub to: String,
    pub body: String,
}

/// The result of one delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOutcome {
    pub success: bool,
    pub message_id: Option<String>,
    pub error: Option<String>,
}

impl SendOutcome {
    pub fn sent(message_id: Option<String>) -> Self {
        Self {
            success: true,
            message_id,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message_id: None,
            error: Some(error.into()),
        }
    }
}

/// Outbound delivery capability consumed by the itinerary composer.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Attempt one email delivery.
    async fn send_email(&self, message: &EmailMessage) -> SendOutcome;

    /// Attempt one WhatsApp delivery. `message.to` must already be
    /// normalized.
    async fn send_chat(&self, message: &ChatMessage) -> SendOutcome;
}

/// Production transport: SMTP email and WhatsApp HTTP delivery, each
/// optional depending on configuration.
pub struct Notifier {
    mailer: Option<SmtpMailer>,
    whatsapp: Option<WhatsappSender>,
}

impl Notifier {
    pub fn new(mailer: Option<SmtpMailer>, whatsapp: Option<WhatsappSender>) -> Self {
        Self { mailer, whatsapp }
    }
}

#[async_trait]
impl Transport for Notifier {
    async fn send_email(&self, message: &EmailMessage) -> SendOutcome {
        let Some(mailer) = &self.mailer else {
            return SendOutcome::failed("email transport not configured");
        };
        match mailer.send(message).await {
            Ok(()) => SendOutcome::sent(None),
            Err(e) => {
                tracing::warn!(to = %message.to, error = %e, "Email delivery failed");
                SendOutcome::failed(e.to_string())
            }
        }
    }

    async fn send_chat(&self, message: &ChatMessage) -> SendOutcome {
        let Some(sender) = &self.whatsapp else {
            return SendOutcome::failed("WhatsApp transport not configured");
        };
        match sender.send(message).await {
            Ok(message_id) => SendOutcome::sent(message_id),
            Err(e) => {
                tracing::warn!(to = %message.to, error = %e, "WhatsApp delivery failed");
                SendOutcome::failed(e.to_string())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_channels_fail_without_panicking() {
        let notifier = Notifier::new(None, None);

        let email = notifier
            .send_email(&EmailMessage {
                to: "a@example.com".into(),
                subject: "s".into(),
                text: "t".into(),
                html: None,
            })
            .await;
        assert!(!email.success);
        assert_eq!(
            email.error.as_deref(),
            Some("email transport not configured")
        );

        let chat = notifier
            .send_chat(&ChatMessage {
                to: "+440000000000".into(),
                body: "hi".into(),
            })
            .await;
        assert!(!chat.success);
        assert_eq!(
            chat.error.as_deref(),
            Some("WhatsApp transport not configured")
        );
    }

    #[test]
    fn outcome_constructors() {
        let sent = SendOutcome::sent(Some("id-1".into()));
        assert!(sent.success);
        assert_eq!(sent.message_id.as_deref(), Some("id-1"));
        assert!(sent.error.is_none());

        let failed = SendOutcome::failed("boom");
        assert!(!failed.success);
        assert!(failed.message_id.is_none());
        assert_eq!(failed.error.as_deref(), Some("boom"));
    }
}
