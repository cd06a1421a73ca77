use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity of a notification, used by listeners to decide presentation
/// (and by the webhook forwarder to decide what is worth forwarding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// The action outcome a notification describes. One notification is emitted
/// per user-triggered action, never more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    /// A calculate action was attempted with an invalid input set.
    InvalidInput,
    /// A calculation ran to completion and a fresh report snapshot exists.
    CalculationComplete,
    /// A report document export has been written.
    ExportComplete,
    /// A report document export failed; the last report remains usable.
    ExportFailed,
    /// The report was handed to the mail transport.
    EmailSent,
    /// The recipient address failed the format check; nothing was sent.
    EmailRejected,
    /// The mail transport reported a failure.
    EmailFailed,
}

/// A single transient, dismissible status message.
///
/// The `id` lets a client dismiss exactly this message; the timestamp orders
/// messages for display. Serialized as a flat JSON object for easy handling
/// by any frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub kind: NotificationKind,
    pub title: String,
    pub detail: String,
}

impl Notification {
    pub fn new(
        severity: Severity,
        kind: NotificationKind,
        title: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            severity,
            kind,
            title: title.into(),
            detail: detail.into(),
        }
    }

    pub fn info(kind: NotificationKind, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(Severity::Info, kind, title, detail)
    }

    pub fn warning(
        kind: NotificationKind,
        title: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Warning, kind, title, detail)
    }

    pub fn error(
        kind: NotificationKind,
        title: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Error, kind, title, detail)
    }
}
