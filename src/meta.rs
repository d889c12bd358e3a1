//! Project metadata reader.
//!
//! The changelog nav group is labeled with the project version. The version
//! lives in the project's `package.json`; it is treated as an opaque string
//! and never parsed beyond extraction.

use anyhow::{Context, Result, anyhow};
use std::{fs, path::Path};

/// Read the `version` field from a `package.json` file.
pub fn read_version(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read project metadata `{}`", path.display()))?;

    let meta: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse `{}` as JSON", path.display()))?;

    meta.get("version")
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| anyhow!("no string `version` field in `{}`", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_package_json(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_version() {
        let file = write_package_json(r#"{"name": "blog", "version": "1.2.3"}"#);
        assert_eq!(read_version(file.path()).unwrap(), "1.2.3");
    }

    #[test]
    fn test_version_is_opaque() {
        // Non-semver labels pass through untouched
        let file = write_package_json(r#"{"version": "next"}"#);
        assert_eq!(read_version(file.path()).unwrap(), "next");
    }

    #[test]
    fn test_missing_version_field() {
        let file = write_package_json(r#"{"name": "blog"}"#);
        let err = read_version(file.path()).unwrap_err();
        assert!(err.to_string().contains("version"));
    }

    #[test]
    fn test_non_string_version_field() {
        let file = write_package_json(r#"{"version": 3}"#);
        assert!(read_version(file.path()).is_err());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_version(&dir.path().join("package.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
