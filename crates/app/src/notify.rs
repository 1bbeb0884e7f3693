use shared_ui::{ToastOptions, Toasts};

/// How a notification is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

/// A notification waiting to be shown. Produced by pure state transitions so
/// they can be asserted on without a toast host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            title: "Success",
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error",
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// Fire-and-forget toast.
pub fn notify(toasts: &Toasts, title: &str, message: &str, severity: Severity) {
    tracing::debug!(title, message, ?severity, "notify");
    let options = ToastOptions::new().description(message.to_string());
    match severity {
        Severity::Success => toasts.success(title.to_string(), options),
        Severity::Error => toasts.error(title.to_string(), options),
        Severity::Info => toasts.info(title.to_string(), options),
    }
}

/// Show a [`Notice`].
pub fn show(toasts: &Toasts, notice: &Notice) {
    notify(toasts, notice.title, &notice.message, notice.severity);
}
