//! Reminder alert delivery.
//!
//! Delivery first attempts a system-level notification; when that is
//! unavailable or unauthorized it falls back to an in-app transient message.
//! Delivery is fire-and-forget: no retry, no deduplication.

use crate::error::{NotifyError, NotifyResult};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Capability interface for delivering a reminder alert.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one alert.
    async fn notify(&self, title: &str, body: &str) -> NotifyResult<()>;
}

/// System-level notifications through the desktop notification daemon.
pub struct DesktopNotifier;

#[async_trait]
impl Notifier for DesktopNotifier {
    async fn notify(&self, title: &str, body: &str) -> NotifyResult<()> {
        let output = tokio::process::Command::new("notify-send")
            .arg(title)
            .arg(body)
            .output()
            .await
            .map_err(|e| NotifyError::Unavailable(e.to_string()))?;

        if output.status.success() {
            Ok(())
        } else {
            Err(NotifyError::Delivery(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ))
        }
    }
}

/// A transient message shown inside the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientMessage {
    pub title: String,
    pub body: String,
}

/// In-app fallback path: alerts land on a channel the presentation layer
/// drains. Sends into a closed channel are logged, never surfaced.
pub struct InAppNotifier {
    tx: mpsc::UnboundedSender<TransientMessage>,
}

impl InAppNotifier {
    /// Create the notifier and the receiving end for the presentation layer.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TransientMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl Notifier for InAppNotifier {
    async fn notify(&self, title: &str, body: &str) -> NotifyResult<()> {
        let message = TransientMessage {
            title: title.to_string(),
            body: body.to_string(),
        };
        if self.tx.send(message).is_err() {
            tracing::warn!("in-app message channel closed, alert dropped");
        }
        Ok(())
    }
}

/// Primary-with-fallback delivery: try the system path, fall back in-app.
pub struct FallbackNotifier {
    primary: Arc<dyn Notifier>,
    fallback: Arc<dyn Notifier>,
}

impl FallbackNotifier {
    pub fn new(primary: Arc<dyn Notifier>, fallback: Arc<dyn Notifier>) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl Notifier for FallbackNotifier {
    async fn notify(&self, title: &str, body: &str) -> NotifyResult<()> {
        match self.primary.notify(title, body).await {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::debug!("system notification unavailable ({}), using in-app path", e);
                self.fallback.notify(title, body).await
            }
        }
    }
}
