use tracing::{info, warn};

/// Severity understood by the upload surface's toast widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Destructive,
}

/// One user-facing status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

/// Delivery channel for user-facing status messages.
///
/// Fire-and-forget: no return value, and the only ordering guarantee is
/// that a notification is sent after the state change it reports.
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, description: &str, severity: Severity);
}

/// Default notifier: forwards messages to the log stream. The real toast
/// widget lives in the upload surface, outside this crate.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, title: &str, description: &str, severity: Severity) {
        match severity {
            Severity::Info => info!("🔔 {}: {}", title, description),
            Severity::Destructive => warn!("⚠️  {}: {}", title, description),
        }
    }
}
