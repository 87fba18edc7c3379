//! # Slack Webhook Delivery
//!
//! This module posts finished [`Message`] payloads to a Slack incoming
//! webhook. Building the payload is the job of [`crate::payload`]; this is the
//! thin HTTP step after it.
//!
//! ## Behaviour
//!
//! - **Optional Integration**: without `SLACK_WEBHOOK_URL` every send is
//!   skipped after a single warning at construction
//! - **Plain POST**: the serialized message is the request body, sent as
//!   `application/json`
//! - **No Retries**: a rejected payload is logged and returned as an error; the
//!   caller decides whether to fix and resend
//!
//! ## Environment Configuration
//!
//! Set `SLACK_WEBHOOK_URL` to the webhook URL from the Slack app settings,
//! e.g. `https://hooks.slack.com/services/T000/B000/XXXX`.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, info, warn};

use crate::payload::Message;
use crate::traits::Notifier;

/// Environment variable holding the webhook URL.
pub const WEBHOOK_URL_VAR: &str = "SLACK_WEBHOOK_URL";

/// Sends messages to a Slack incoming webhook.
///
/// Cloning is cheap: `reqwest::Client` shares its connection pool between
/// clones, so one notifier can be handed to several tasks.
#[derive(Clone)]
pub struct SlackNotifier {
    client: Client,

    /// `None` disables delivery.
    webhook_url: Option<String>,
}

impl SlackNotifier {
    /// Creates a notifier configured from `SLACK_WEBHOOK_URL`.
    ///
    /// A missing variable is not an error: the notifier is created disabled
    /// and logs a warning once.
    pub fn new() -> Self {
        let webhook_url = std::env::var(WEBHOOK_URL_VAR).ok();

        if webhook_url.is_none() {
            warn!("{WEBHOOK_URL_VAR} not set - Slack notifications will be disabled");
        }

        Self::with_webhook_url(webhook_url)
    }

    /// Creates a notifier for an explicit webhook URL, bypassing the
    /// environment.
    pub fn with_webhook_url(webhook_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            webhook_url,
        }
    }

    /// Whether a webhook URL is configured.
    pub fn is_enabled(&self) -> bool {
        self.webhook_url.is_some()
    }

    /// Posts `message` to the webhook.
    ///
    /// Returns `Ok(())` when Slack accepted the payload or when delivery is
    /// disabled. Network failures and non-success statuses are errors.
    pub async fn send(&self, message: &Message) -> Result<()> {
        let Some(webhook_url) = &self.webhook_url else {
            debug!("Slack disabled, dropping message: {}", message.text());
            return Ok(());
        };

        let request = self.request(webhook_url, message)?;
        let response = self.client.execute(request).await?;

        let status = response.status();
        if status.is_success() {
            info!(
                "Slack notification sent with {} attachment(s)",
                message.attachments().len()
            );
            Ok(())
        } else {
            let reason = response.text().await.unwrap_or_default();
            error!("Failed to send Slack notification: {status} {reason}");
            Err(anyhow!("Slack webhook rejected the message: {status} {reason}"))
        }
    }
}

impl SlackNotifier {
    /// JSON POST of `message` to `webhook_url`.
    fn request(&self, webhook_url: &str, message: &Message) -> reqwest::Result<reqwest::Request> {
        self.client.post(webhook_url).json(message).build()
    }
}

impl Default for SlackNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    async fn notify(&self, message: &Message) -> Result<()> {
        self.send(message).await
    }
}
