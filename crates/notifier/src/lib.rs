//! # Salescope Notifier
//!
//! The notification boundary of the system. Action handlers broadcast one
//! `Notification` per user-triggered action; this crate offers a long-running
//! service that forwards the high-severity ones to an optional webhook, plus
//! the (deliberately stubbed) report mailer and its recipient format check.

use crate::error::NotifierError;
use events::{Notification, Severity};
use reqwest::Client;
use tokio::sync::broadcast;

pub mod email;
pub mod error;

pub use email::{StubMailer, is_plausible_email};

/// A client for forwarding notifications to a configured webhook endpoint.
pub struct WebhookNotifier {
    client: Client,
    url: String,
}

impl WebhookNotifier {
    /// Creates a new `WebhookNotifier`.
    ///
    /// Returns `None` if no webhook URL is configured, allowing the system to
    /// gracefully disable forwarding.
    pub fn new(config: &configuration::Notifier) -> Option<Self> {
        if config.webhook_url.is_empty() {
            tracing::warn!("Webhook notifier is not configured (missing webhook_url).");
            return None;
        }
        Some(Self {
            client: Client::new(),
            url: config.webhook_url.clone(),
        })
    }

    /// Posts a single notification as JSON to the configured webhook.
    pub async fn send(&self, notification: &Notification) -> Result<(), NotifierError> {
        let response = self.client.post(&self.url).json(notification).send().await?;

        if !response.status().is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to decode error response".to_string());
            return Err(NotifierError::ApiError(error_text));
        }

        Ok(())
    }
}

/// A long-running service that listens to a broadcast channel of
/// `Notification` events and forwards the warning/error ones to the webhook.
pub async fn run_notifier_service(
    notifier: WebhookNotifier,
    mut event_rx: broadcast::Receiver<Notification>,
) {
    tracing::info!("Notifier service started. Forwarding high-severity notifications.");

    loop {
        match event_rx.recv().await {
            Ok(notification) => {
                // Info-level outcomes are already surfaced in the action's
                // own response; only problems get forwarded.
                if matches!(notification.severity, Severity::Warning | Severity::Error) {
                    if let Err(e) = notifier.send(&notification).await {
                        tracing::error!(error = ?e, "Failed to forward notification.");
                    }
                }
            }
            Err(broadcast::error::RecvError::Lagged(n)) => {
                tracing::warn!("Notifier service lagged, skipped {} notifications.", n);
            }
            Err(broadcast::error::RecvError::Closed) => {
                tracing::info!("Broadcast channel closed. Notifier service shutting down.");
                break;
            }
        }
    }
}
