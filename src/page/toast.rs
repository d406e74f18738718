use std::time::Duration;

use uuid::Uuid;

const DEFAULT_TOAST_TTL: Duration = Duration::from_millis(6000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub text: String,
    pub ttl: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

impl Toast {
    pub fn success(text: impl Into<String>) -> Self {
        Self::with_ttl(ToastKind::Success, text, DEFAULT_TOAST_TTL)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::with_ttl(ToastKind::Error, text, DEFAULT_TOAST_TTL)
    }

    pub fn with_ttl(kind: ToastKind, text: impl Into<String>, ttl: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            text: text.into(),
            ttl,
        }
    }
}

/// Shows notifications to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}
