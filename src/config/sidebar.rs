//! Per-page side navigation groups.
//!
//! Three independent data sources live here:
//!
//! - [`default_sidebar`] — the hand-authored two-group structure that is
//!   actually wired into `themeConfig.sidebar`.
//! - [`build_sidebar_guide`] / [`build_sidebar_config`] — per-section
//!   sidebars the upstream starter defines but never wires in. They are kept
//!   as separate, clearly named sources instead of being merged into the
//!   default sidebar; `vpgen check` flags the divergence as a warning so it
//!   stays visible without changing the emitted shape.

use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// A collapsible section in the per-page side navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsible: Option<bool>,

    pub items: Vec<SidebarItem>,
}

/// A leaf link inside a sidebar group. The link is a content path with the
/// extension omitted; the host engine resolves it to the rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarItem {
    pub text: String,
    pub link: String,
}

impl SidebarItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

impl SidebarGroup {
    pub fn new(text: impl Into<String>, items: Vec<SidebarItem>) -> Self {
        Self {
            text: text.into(),
            collapsible: None,
            items,
        }
    }

    /// Mark the group as collapsible.
    pub fn collapsible(mut self) -> Self {
        self.collapsible = Some(true);
        self
    }

    /// Validate the group heading and its items.
    pub fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.text.is_empty() {
            diag.error(path.child("text"), "sidebar group heading must not be empty");
        }

        let items_path = path.child("items");
        for (i, item) in self.items.iter().enumerate() {
            let item_path = items_path.index(i);
            if item.text.is_empty() {
                diag.error(item_path.child("text"), "sidebar item text must not be empty");
            }
            if item.link.is_empty() {
                diag.error_with_hint(
                    item_path.child("link"),
                    "sidebar item link must not be empty",
                    "use a content path without extension, e.g. \"/guide/index\"",
                );
            }
        }
    }
}

/// The sidebar wired into `themeConfig.sidebar`.
pub fn default_sidebar() -> Vec<SidebarGroup> {
    vec![
        SidebarGroup::new("开始", vec![SidebarItem::new("简介", "/guide/index")]),
        SidebarGroup::new("项目", vec![SidebarItem::new("配置", "/config/index")]),
    ]
}

/// Guide-section sidebar. Unwired upstream; kept as its own source.
pub fn build_sidebar_guide() -> Vec<SidebarGroup> {
    vec![
        SidebarGroup::new(
            "Introduction",
            vec![SidebarItem::new("What is this?", "/guide/index")],
        )
        .collapsible(),
        SidebarGroup::new(
            "Features",
            vec![SidebarItem::new("Markdown Extensions", "/guide/features")],
        )
        .collapsible(),
    ]
}

/// Config-section sidebar. Unwired upstream; kept as its own source.
pub fn build_sidebar_config() -> Vec<SidebarGroup> {
    vec![SidebarGroup::new(
        "Config",
        vec![
            SidebarItem::new("Introduction", "/config/index"),
            SidebarItem::new("Theme Configs", "/config/theme"),
        ],
    )]
}
