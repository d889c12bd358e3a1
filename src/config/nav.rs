//! Top navigation bar entries.
//!
//! # Emitted shape
//!
//! ```json
//! { "text": "Guide", "link": "/guide/index", "activeMatch": "/guide/" }
//! { "text": "1.2.3", "items": [{ "text": "Changelog", "link": "..." }] }
//! ```

use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Upstream starter repository, used for the changelog link.
pub const REPO_URL: &str = "https://github.com/sfxcode/vitepress-blog-starter";

/// One clickable item (or dropdown group) in the top navigation bar.
///
/// The host engine requires `text`; an entry carries a `link`, a dropdown
/// `items` list, or both. `active_match` controls which entry is highlighted
/// for the current path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavEntry {
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_match: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<NavEntry>>,
}

impl NavEntry {
    /// A plain link entry.
    pub fn link(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
            active_match: None,
            items: None,
        }
    }

    /// A dropdown group entry.
    pub fn group(text: impl Into<String>, items: Vec<NavEntry>) -> Self {
        Self {
            text: text.into(),
            link: None,
            active_match: None,
            items: Some(items),
        }
    }

    /// Set the highlight pattern for this entry.
    pub fn with_active_match(mut self, pattern: impl Into<String>) -> Self {
        self.active_match = Some(pattern.into());
        self
    }

    /// Validate one entry (and its dropdown items, recursively).
    ///
    /// # Checks
    /// - `text` must not be empty
    /// - at least one of `link` / `items` must be present
    /// - a dropdown must not be empty
    pub fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.text.is_empty() {
            diag.error(path.child("text"), "nav entry text must not be empty");
        }

        if self.link.is_none() && self.items.is_none() {
            diag.error_with_hint(
                path.clone(),
                "nav entry has neither `link` nor `items`",
                "set a link target or turn the entry into a dropdown",
            );
        }

        if let Some(items) = &self.items {
            let items_path = path.child("items");
            if items.is_empty() {
                diag.error(items_path.clone(), "dropdown has no items");
            }
            for (i, item) in items.iter().enumerate() {
                item.validate(&items_path.index(i), diag);
            }
        }
    }
}

/// Build the fixed navigation entries.
///
/// The last group is labeled with the injected `version` string and links to
/// the upstream changelog, so the rendered menu always shows which release
/// the site was built from.
pub fn build_nav(version: &str) -> Vec<NavEntry> {
    vec![
        NavEntry::link("Guide", "/guide/index").with_active_match("/guide/"),
        NavEntry::link("Configs", "/config/index").with_active_match("/config/"),
        NavEntry::link("Blog", "/blog/index").with_active_match("/blog/"),
        NavEntry::group(
            "External Docs",
            vec![
                NavEntry::link("VitePress", "https://vitepress.vuejs.org"),
                NavEntry::link("UnoCSS", "https://github.com/unocss/unocss"),
            ],
        ),
        NavEntry::group(
            version,
            vec![NavEntry::link(
                "Changelog",
                format!("{REPO_URL}/blob/main/CHANGELOG.md"),
            )],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_texts_are_non_empty() {
        for entry in build_nav("0.9.1") {
            assert!(!entry.text.is_empty());
            for item in entry.items.iter().flatten() {
                assert!(!item.text.is_empty());
            }
        }
    }

    #[test]
    fn test_version_group_links_changelog() {
        let nav = build_nav("1.2.3");
        let group = nav
            .iter()
            .find(|entry| entry.text == "1.2.3")
            .expect("version-labeled group");
        let items = group.items.as_ref().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "Changelog");
        assert_eq!(
            items[0].link.as_deref(),
            Some("https://github.com/sfxcode/vitepress-blog-starter/blob/main/CHANGELOG.md")
        );
    }

    #[test]
    fn test_top_entries_carry_active_match() {
        let nav = build_nav("1.0.0");
        for text in ["Guide", "Configs", "Blog"] {
            let entry = nav.iter().find(|e| e.text == text).unwrap();
            assert!(entry.active_match.is_some(), "{text} has no activeMatch");
            assert!(entry.link.is_some());
        }
    }

    #[test]
    fn test_serializes_camel_case_active_match() {
        let entry = NavEntry::link("Guide", "/guide/index").with_active_match("/guide/");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["activeMatch"], "/guide/");
        // Absent optional fields are omitted, not null
        assert!(json.get("items").is_none());
    }

    #[test]
    fn test_validate_rejects_dangling_entry() {
        let entry = NavEntry {
            text: "Dangling".into(),
            link: None,
            active_match: None,
            items: None,
        };
        let mut diag = ConfigDiagnostics::new();
        entry.validate(&FieldPath::new("themeConfig.nav[0]"), &mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_validate_rejects_empty_dropdown() {
        let entry = NavEntry::group("Empty", vec![]);
        let mut diag = ConfigDiagnostics::new();
        entry.validate(&FieldPath::new("themeConfig.nav[0]"), &mut diag);
        assert!(diag.has_errors());
        assert!(
            diag.errors()[0]
                .field
                .as_str()
                .ends_with("nav[0].items")
        );
    }
}
