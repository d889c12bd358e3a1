//! Site configuration for the vitepress-blog-starter blog.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── nav        # top navigation entries
//! ├── sidebar    # sidebar groups (wired + unwired sources)
//! ├── theme      # themeConfig (footer, search, socialLinks, nav, sidebar)
//! ├── markdown   # markdown renderer options
//! ├── vite       # build-tool plugin list
//! ├── types/     # Utility types
//! │   ├── error  # ConfigError, ConfigDiagnostics
//! │   └── field  # FieldPath
//! └── mod.rs     # SiteConfig (this file)
//! ```
//!
//! # Host contract
//!
//! The emitted JSON must use the host engine's exact field names and
//! nesting: `base`, `title`, `description`,
//! `themeConfig.{footer,search,socialLinks,nav,sidebar}`, `markdown`,
//! `vite.plugins`. Field renames here are breaking changes for the consumer.

pub mod nav;
pub mod sidebar;
pub mod theme;

mod markdown;
mod types;
mod vite;

pub use markdown::{MarkdownConfig, TocConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use vite::{ViteConfig, VitePlugin};

use nav::NavEntry;
use serde::{Deserialize, Serialize};
use theme::ThemeConfig;

/// Deployment path prefix. Static: the site is always served from the
/// project-page subdirectory, regardless of version input.
const BASE: &str = "/vitepress-blog-starter/";

/// Root configuration consumed by the host static-site-generation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub base: String,
    pub title: String,
    pub description: String,
    pub theme_config: ThemeConfig,
    pub markdown: MarkdownConfig,
    pub vite: ViteConfig,
}

impl SiteConfig {
    /// Build the full configuration tree.
    ///
    /// Pure and deterministic: the version string (from project metadata)
    /// is the only input, and it only shows up as the label of the
    /// changelog nav group. Called exactly once at startup; the tree is
    /// never mutated afterwards.
    pub fn build(version: &str) -> Self {
        Self {
            base: BASE.into(),
            title: "VitePress Blog Starter".into(),
            description: "A VitePress blog starter template.".into(),
            theme_config: ThemeConfig::build(version),
            markdown: MarkdownConfig::default(),
            vite: ViteConfig::default(),
        }
    }

    /// Validate the built tree against the host engine's shape rules.
    ///
    /// Construction itself is total; this is a separate, explicit pass used
    /// by `vpgen check`. Collects all errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        if self.base.is_empty() {
            diag.error(FieldPath::new("base"), "deployment prefix must not be empty");
        } else if !self.base.starts_with('/') || !self.base.ends_with('/') {
            diag.error_with_hint(
                FieldPath::new("base"),
                "deployment prefix must start and end with '/'",
                format!("use \"/{}/\"", self.base.trim_matches('/')),
            );
        }

        if self.title.is_empty() {
            diag.error(FieldPath::new("title"), "site title must not be empty");
        }

        self.theme_config.validate(&mut diag);

        // The per-section sidebars are defined upstream but never wired into
        // themeConfig.sidebar. Surface the divergence without merging them.
        for (name, groups) in [
            ("guide", sidebar::build_sidebar_guide()),
            ("config", sidebar::build_sidebar_config()),
        ] {
            if !groups.is_empty() {
                diag.warn(
                    FieldPath::new("themeConfig.sidebar"),
                    format!("unwired {name} sidebar source ({} group(s))", groups.len()),
                );
            }
        }

        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Serialize for the host engine.
    pub fn to_json(&self, pretty: bool) -> Result<String, ConfigError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// All nav entries, for shape assertions.
    pub fn nav(&self) -> &[NavEntry] {
        &self.theme_config.nav
    }
}
