//! Build-tool plugin list.
//!
//! The starter registers one plugin: the UnoCSS utility-CSS generator. Its
//! single option is the path to an external config file, passed through
//! unevaluated; this module never reads or validates that file's content.

use serde::{Deserialize, Serialize};

/// Build-tool settings forwarded to the host engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViteConfig {
    pub plugins: Vec<VitePlugin>,
}

/// One plugin registration with its recognized options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitePlugin {
    pub name: String,

    /// Relative path to the plugin's own config file, opaque to this module.
    pub config_file: String,
}

impl Default for ViteConfig {
    fn default() -> Self {
        Self {
            plugins: vec![VitePlugin {
                name: "unocss".into(),
                config_file: "../unocss.config.ts".into(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unocss_plugin_config_file() {
        let vite = ViteConfig::default();
        assert_eq!(vite.plugins.len(), 1);
        let json = serde_json::to_value(&vite.plugins[0]).unwrap();
        assert_eq!(json["name"], "unocss");
        assert_eq!(json["configFile"], "../unocss.config.ts");
    }
}
