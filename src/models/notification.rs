use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    /// Sufijo de la clase CSS `notificacao-*`
    pub fn css_suffix(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            NotificationKind::Info => "#2196F3",
            NotificationKind::Success => "#4CAF50",
            NotificationKind::Warning => "#FF9800",
            NotificationKind::Error => "#F44336",
        }
    }
}

/// Notificación transitoria (solo una visible a la vez)
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
        }
    }
}
