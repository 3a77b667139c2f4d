use serde::{Deserialize, Serialize};

use crate::escape::escape_html;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    /// Font Awesome icon shown next to the message.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match *self {
            Self::Success => "check-circle",
            Self::Error => "exclamation-circle",
            Self::Info => "info-circle",
        }
    }
}

/// Short-lived notification shown after an action completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    #[must_use]
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self { message: message.into(), kind }
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Success)
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Error)
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Info)
    }
}

#[must_use]
pub fn render_toast(toast: &Toast) -> String {
    format!(
        r#"<div class="toast {kind}"><i class="fas fa-{icon}"></i><span>{message}</span></div>"#,
        kind = toast.kind.as_str(),
        icon = toast.kind.icon(),
        message = escape_html(&toast.message),
    )
}
