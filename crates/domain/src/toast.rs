//! Toast notification requests and their presentation policy.
//!
//! A [`ToastRequest`] is what call sites raise; [`ToastRequest::present`]
//! maps it deterministically to the [`ToastPresentation`] a notification
//! queue displays.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default display time of a toast.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 4_000;

/// What a toast reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    /// An operation succeeded.
    #[default]
    Success,
    /// An operation failed.
    Error,
    /// Something needs attention.
    Warning,
    /// Neutral information.
    Info,
    /// Something was deleted.
    Delete,
}

/// Where on screen a toast is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    /// Top left corner.
    TopLeft,
    /// Top edge, centered.
    TopCenter,
    /// Top right corner.
    TopRight,
    /// Left edge, vertically centered.
    CenterLeft,
    /// Right edge, vertically centered.
    CenterRight,
    /// Bottom left corner.
    BottomLeft,
    /// Bottom edge, centered.
    BottomCenter,
    /// Bottom right corner.
    #[default]
    BottomRight,
}

impl ToastPosition {
    /// Returns the anchor as a kebab-case string (used as a CSS class).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopCenter => "top-center",
            Self::TopRight => "top-right",
            Self::CenterLeft => "center-left",
            Self::CenterRight => "center-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomCenter => "bottom-center",
            Self::BottomRight => "bottom-right",
        }
    }
}

/// Icon shown next to a toast message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastIcon {
    /// Check mark in a circle.
    CheckCircle,
    /// Trash can.
    Trash,
    /// Cross in a circle.
    XCircle,
    /// Warning triangle.
    TriangleAlert,
    /// Information mark.
    Info,
    /// A caller-supplied icon name.
    Custom(String),
}

impl ToastIcon {
    /// Default icon for a toast kind.
    #[must_use]
    pub const fn default_for(kind: ToastKind) -> Self {
        match kind {
            ToastKind::Success => Self::CheckCircle,
            ToastKind::Delete => Self::Trash,
            ToastKind::Error => Self::XCircle,
            ToastKind::Warning => Self::TriangleAlert,
            ToastKind::Info => Self::Info,
        }
    }

    /// Icon identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::CheckCircle => "check-circle",
            Self::Trash => "trash",
            Self::XCircle => "x-circle",
            Self::TriangleAlert => "triangle-alert",
            Self::Info => "info",
            Self::Custom(name) => name,
        }
    }
}

/// Visual style a toast is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    /// Green, success styling.
    Success,
    /// Red, error styling.
    Error,
    /// Amber, warning styling.
    Warning,
    /// Neutral styling.
    Info,
}

impl fmt::Display for ToastVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        };
        f.write_str(name)
    }
}

/// A request to show a transient, auto-dismissing notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastRequest {
    /// What the toast reports.
    pub kind: ToastKind,
    /// Main line.
    pub message: String,
    /// Optional title, also used to derive a default description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Secondary line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Icon override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<ToastIcon>,
    /// How long the toast stays visible.
    pub duration_ms: u64,
    /// Screen anchor.
    #[serde(default)]
    pub position: ToastPosition,
}

impl ToastRequest {
    /// Creates a toast of the given kind with default duration and position.
    #[must_use]
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            title: None,
            description: None,
            icon: None,
            duration_ms: DEFAULT_TOAST_DURATION_MS,
            position: ToastPosition::default(),
        }
    }

    /// Success toast.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    /// Error toast.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    /// Warning toast.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Warning, message)
    }

    /// Info toast.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, message)
    }

    /// Delete confirmation toast.
    #[must_use]
    pub fn delete(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Delete, message)
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Overrides the icon.
    #[must_use]
    pub fn with_icon(mut self, icon: ToastIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Overrides the duration.
    #[must_use]
    pub const fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Overrides the position.
    #[must_use]
    pub const fn with_position(mut self, position: ToastPosition) -> Self {
        self.position = position;
        self
    }

    /// Applies the presentation policy.
    ///
    /// `success` falls back to the title as description, `delete` to
    /// "`<title>` deleted successfully"; `delete` renders with error styling.
    #[must_use]
    pub fn present(&self) -> ToastPresentation {
        let variant = match self.kind {
            ToastKind::Success => ToastVariant::Success,
            ToastKind::Error | ToastKind::Delete => ToastVariant::Error,
            ToastKind::Warning => ToastVariant::Warning,
            ToastKind::Info => ToastVariant::Info,
        };

        let description = self.description.clone().or_else(|| match self.kind {
            ToastKind::Success => self.title.clone(),
            ToastKind::Delete => self
                .title
                .as_ref()
                .map(|title| format!("{title} deleted successfully")),
            ToastKind::Error | ToastKind::Warning | ToastKind::Info => None,
        });

        ToastPresentation {
            variant,
            message: self.message.clone(),
            description,
            icon: self
                .icon
                .clone()
                .unwrap_or_else(|| ToastIcon::default_for(self.kind)),
            duration_ms: self.duration_ms,
            position: self.position,
        }
    }
}

/// What the notification queue actually renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastPresentation {
    /// Visual style.
    pub variant: ToastVariant,
    /// Main line.
    pub message: String,
    /// Secondary line.
    pub description: Option<String>,
    /// Icon.
    pub icon: ToastIcon,
    /// How long the toast stays visible.
    pub duration_ms: u64,
    /// Screen anchor.
    pub position: ToastPosition,
}
