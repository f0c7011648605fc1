//! Operator-facing notices.

/// Sink for operator-facing notices.
///
/// This is intentionally separate from logging: notices are what the panel
/// shows the operator, diagnostics go to `tracing`.
pub trait Notifier: Send + Sync + 'static {
    fn success(&self, message: &str);
    fn failure(&self, message: &str);
}

/// A notice as the operator would see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Failure(String),
}

/// Notifier that forwards notices to the tracing pipeline (headless default).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(notice = message, "operator notice");
    }

    fn failure(&self, message: &str) {
        tracing::warn!(notice = message, "operator notice");
    }
}

/// In-memory notifier for tests/dev.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    inner: std::sync::Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<Notification> {
        self.inner.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.inner
            .lock()
            .unwrap()
            .push(Notification::Success(message.to_string()));
    }

    fn failure(&self, message: &str) {
        self.inner
            .lock()
            .unwrap()
            .push(Notification::Failure(message.to_string()));
    }
}
