//! `themeConfig` for the default theme.
//!
//! Footer, search, social links, plus the nav and sidebar trees built in
//! their own modules.

use crate::config::nav::{self, NavEntry};
use crate::config::sidebar::{self, SidebarGroup};
use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Theme settings consumed as `themeConfig` by the host engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub footer: FooterConfig,
    pub search: SearchConfig,
    pub social_links: Vec<SocialLink>,
    pub nav: Vec<NavEntry>,
    pub sidebar: Vec<SidebarGroup>,
}

/// Footer line shown on every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterConfig {
    pub message: String,
    pub copyright: String,
}

/// Search settings. The starter uses the engine-local provider; no external
/// indexing service is configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub provider: SearchProvider,
}

/// Search backend selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// Client-side index generated by the host engine.
    #[default]
    Local,
}

/// An icon link in the nav bar (e.g. the GitHub repository).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: String,
    pub link: String,
}

impl ThemeConfig {
    /// Build the fixed theme settings, with the nav labeled by `version`.
    pub fn build(version: &str) -> Self {
        Self {
            footer: FooterConfig {
                message: "Released under the MIT License.".into(),
                copyright: "Copyright © 2022-present sfxcode".into(),
            },
            search: SearchConfig {
                provider: SearchProvider::Local,
            },
            social_links: vec![SocialLink {
                icon: "github".into(),
                link: nav::REPO_URL.into(),
            }],
            nav: nav::build_nav(version),
            sidebar: sidebar::default_sidebar(),
        }
    }

    /// Validate nav and sidebar trees.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let nav_path = FieldPath::new("themeConfig.nav");
        for (i, entry) in self.nav.iter().enumerate() {
            entry.validate(&nav_path.index(i), diag);
        }

        let sidebar_path = FieldPath::new("themeConfig.sidebar");
        for (i, group) in self.sidebar.iter().enumerate() {
            group.validate(&sidebar_path.index(i), diag);
        }

        for (i, social) in self.social_links.iter().enumerate() {
            if social.link.is_empty() {
                diag.error(
                    FieldPath::new("themeConfig.socialLinks")
                        .index(i)
                        .child("link"),
                    "social link target must not be empty",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_provider_is_local() {
        let theme = ThemeConfig::build("1.0.0");
        assert_eq!(theme.search.provider, SearchProvider::Local);
        let json = serde_json::to_value(&theme.search).unwrap();
        assert_eq!(json["provider"], "local");
    }

    #[test]
    fn test_social_links_point_at_repo() {
        let theme = ThemeConfig::build("1.0.0");
        assert_eq!(theme.social_links.len(), 1);
        assert_eq!(theme.social_links[0].icon, "github");
        assert_eq!(
            theme.social_links[0].link,
            "https://github.com/sfxcode/vitepress-blog-starter"
        );
    }

    #[test]
    fn test_social_links_serialize_camel_case() {
        let theme = ThemeConfig::build("1.0.0");
        let json = serde_json::to_value(&theme).unwrap();
        assert!(json.get("socialLinks").is_some());
        assert!(json.get("social_links").is_none());
    }

    #[test]
    fn test_built_theme_passes_validation() {
        let theme = ThemeConfig::build("1.0.0");
        let mut diag = ConfigDiagnostics::new();
        theme.validate(&mut diag);
        assert!(diag.is_empty(), "{:?}", diag.errors());
    }
}
