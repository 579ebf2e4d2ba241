/// Notification delivery.
///
/// The runner only knows the [`Notifier`] trait: hand over a subject/body
/// pair, get back a delivery id to log. The production transport is a
/// webhook POST (the topic relay on the other end fans out to email), with
/// the endpoint taken from the environment so credentials and routing stay
/// out of the binary.

use serde::Serialize;
use std::env;
use tracing::info;

use crate::model::NotifyError;

/// Environment variable naming the webhook endpoint.
pub const WEBHOOK_URL_VAR: &str = "WINDMON_WEBHOOK_URL";

// ---------------------------------------------------------------------------
// Notifier capability
// ---------------------------------------------------------------------------

/// Outbound notification transport.
///
/// Implementations deliver one message and return a delivery id, which the
/// runner logs but does not act on. Tests substitute a recording fake.
pub trait Notifier {
    fn notify(&self, subject: &str, body: &str) -> Result<String, NotifyError>;
}

// ---------------------------------------------------------------------------
// Webhook transport
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct WebhookPayload<'a> {
    subject: &'a str,
    body: &'a str,
}

/// POSTs `{"subject": …, "body": …}` to a configured endpoint.
pub struct WebhookNotifier {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl WebhookNotifier {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint,
        }
    }

    /// Builds a notifier from `WINDMON_WEBHOOK_URL`. Returns `None` when
    /// the variable is unset; the caller decides whether that is fatal.
    pub fn from_env() -> Option<Self> {
        env::var(WEBHOOK_URL_VAR).ok().map(Self::new)
    }
}

impl Notifier for WebhookNotifier {
    fn notify(&self, subject: &str, body: &str) -> Result<String, NotifyError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&WebhookPayload { subject, body })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Status(status.as_u16()));
        }

        // Relays usually echo a message id; tolerate ones that don't.
        let message_id = response
            .json::<serde_json::Value>()
            .ok()
            .and_then(|value| {
                value
                    .get("messageId")
                    .and_then(|id| id.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "unknown".to_string());

        info!("Alert sent, message id = {}", message_id);
        Ok(message_id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
