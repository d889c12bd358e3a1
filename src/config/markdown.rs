//! Markdown processing options.
//!
//! The upstream starter passes these as an open-ended option bag; here every
//! recognized option is enumerated so the emitted shape is checked at
//! compile time.

use serde::{Deserialize, Serialize};

/// Options forwarded to the host engine's markdown renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkdownConfig {
    /// Render line numbers in fenced code blocks.
    pub line_numbers: bool,

    /// Heading levels collected into the page outline.
    pub toc: TocConfig,
}

/// Outline extraction settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocConfig {
    /// Inclusive heading-level range, e.g. `[2, 3]` for h2 and h3.
    pub level: Vec<u32>,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            line_numbers: true,
            toc: TocConfig { level: vec![2, 3] },
        }
    }
}
