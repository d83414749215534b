//! Renderer input descriptors.
//!
//! Descriptors are transient values built by the page composer per render
//! call; the engine never retains references to them. Text fields are plain
//! strings (escaped at render time); fields typed [`Markup`] cross the trust
//! boundary verbatim.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::ChartmasterError;
use crate::domain::markup::Markup;

/// A single navigation entry. At most one item in a rendered header is
/// marked active, by exact match of `path` against the current path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    pub path: String,
}

impl NavItem {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Optional header slots. Omitted flags default to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderOptions {
    pub show_search: bool,
    pub show_notification_bell: bool,
    pub show_profile: bool,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            show_search: true,
            show_notification_bell: true,
            show_profile: true,
        }
    }
}

/// Widget size, mapping deterministically to a fixed grid span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetSize {
    Small,
    Medium,
    Large,
}

impl WidgetSize {
    /// Grid span as `(rows, columns)`: small=1×1, medium=1×2, large=2×2.
    pub fn grid_span(&self) -> (u8, u8) {
        match self {
            WidgetSize::Small => (1, 1),
            WidgetSize::Medium => (1, 2),
            WidgetSize::Large => (2, 2),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            WidgetSize::Small => "widget-small",
            WidgetSize::Medium => "widget-medium",
            WidgetSize::Large => "widget-large",
        }
    }
}

impl FromStr for WidgetSize {
    type Err = ChartmasterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(WidgetSize::Small),
            "medium" => Ok(WidgetSize::Medium),
            "large" => Ok(WidgetSize::Large),
            other => Err(ChartmasterError::InvalidSize { size: other.into() }),
        }
    }
}

/// A dashboard widget: title bar, optional action buttons, trusted body.
#[derive(Debug, Clone)]
pub struct WidgetDescriptor {
    pub title: String,
    pub content: Markup,
    pub size: WidgetSize,
    pub actions: Vec<String>,
}

impl WidgetDescriptor {
    pub fn new(title: impl Into<String>, content: Markup, size: WidgetSize) -> Self {
        Self {
            title: title.into(),
            content,
            size,
            actions: Vec::new(),
        }
    }

    pub fn with_actions(mut self, actions: Vec<String>) -> Self {
        self.actions = actions;
        self
    }
}

/// Column headers plus rows of cell values. Every row must have exactly
/// `headers.len()` cells; violations fail the render, they are never padded
/// or truncated.
#[derive(Debug, Clone, Default)]
pub struct TableDescriptor {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub sortable: bool,
}

impl TableDescriptor {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            headers,
            rows,
            sortable: false,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

/// Notification severity. Each kind maps to a semantic color token key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }

    /// Key of the `color` token carrying this kind's accent.
    pub fn color_token_key(&self) -> &'static str {
        match self {
            NotificationKind::Success => "positive",
            NotificationKind::Error => "negative",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "accent-blue",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            NotificationKind::Success => "Success",
            NotificationKind::Error => "Error",
            NotificationKind::Warning => "Warning",
            NotificationKind::Info => "Info",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// A notification carries no timing state; auto-dismiss is a host concern.
#[derive(Debug, Clone)]
pub struct NotificationDescriptor {
    pub kind: NotificationKind,
    pub message: String,
}

impl NotificationDescriptor {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Semantic role of a modal action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalRole {
    Primary,
    Secondary,
    Danger,
}

impl ModalRole {
    pub fn css_class(&self) -> &'static str {
        match self {
            ModalRole::Primary => "btn-primary",
            ModalRole::Secondary => "btn-secondary",
            ModalRole::Danger => "btn-danger",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ModalAction {
    pub label: String,
    pub role: ModalRole,
}

impl ModalAction {
    pub fn new(label: impl Into<String>, role: ModalRole) -> Self {
        Self {
            label: label.into(),
            role,
        }
    }
}

/// Modal dialog. Open/close lifecycle is a host concern; the engine only
/// emits the markup for a given instant's descriptor.
#[derive(Debug, Clone)]
pub struct ModalDescriptor {
    pub title: String,
    pub body: Markup,
    pub actions: Vec<ModalAction>,
}

/// Skeleton placeholder shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkeletonKind {
    Text,
    Chart,
    Table,
}

#[derive(Debug, Clone, Copy)]
pub struct SkeletonDescriptor {
    pub kind: SkeletonKind,
    pub count: usize,
}

impl SkeletonDescriptor {
    pub fn new(kind: SkeletonKind, count: usize) -> Self {
        Self { kind, count }
    }
}

/// Empty state: icon, title, description and an optional call to action.
#[derive(Debug, Clone)]
pub struct EmptyStateDescriptor {
    pub icon: Markup,
    pub title: String,
    pub description: String,
    pub action_label: Option<String>,
}

/// A compact metric tile. `change_class` is a caller-supplied styling class
/// (the engine holds no opinion on what positive/negative means).
#[derive(Debug, Clone)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub change: Option<String>,
    pub change_class: Option<String>,
}
