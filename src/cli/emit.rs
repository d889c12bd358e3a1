//! `emit` command: build the configuration and write it as JSON.

use crate::cli::{EmitArgs, MetaArgs};
use crate::config::{ConfigError, SiteConfig};
use crate::{debug, log, logger, meta};
use anyhow::Result;
use std::fs;

/// Resolve the version label: explicit CLI override wins over metadata.
pub fn resolve_version(args: &MetaArgs) -> Result<String> {
    if let Some(label) = &args.version_label {
        return Ok(label.clone());
    }

    let version = meta::read_version(&args.package)?;
    debug!("meta"; "resolved version {} from {}", version, args.package.display());
    Ok(version)
}

/// Build the configuration and write it to stdout or `--output`.
pub fn emit_config(args: &EmitArgs) -> Result<()> {
    logger::set_verbose(args.meta.verbose);

    let version = resolve_version(&args.meta)?;
    let config = SiteConfig::build(&version);
    let json = config.to_json(args.pretty)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &json).map_err(|err| ConfigError::Io(path.clone(), err))?;
            log!("emit"; "wrote {} ({} bytes)", path.display(), json.len());
        }
        None => println!("{json}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn meta_args(package: PathBuf, label: Option<&str>) -> MetaArgs {
        MetaArgs {
            package,
            version_label: label.map(str::to_owned),
            verbose: false,
        }
    }

    #[test]
    fn test_label_overrides_metadata() {
        // No package.json needed when the label is explicit
        let args = meta_args(PathBuf::from("does-not-exist.json"), Some("2.0.0-rc.1"));
        assert_eq!(resolve_version(&args).unwrap(), "2.0.0-rc.1");
    }

    #[test]
    fn test_version_from_package_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"version": "0.4.2"}"#).unwrap();
        let args = meta_args(file.path().to_path_buf(), None);
        assert_eq!(resolve_version(&args).unwrap(), "0.4.2");
    }

    #[test]
    fn test_emit_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("config.json");
        let args = EmitArgs {
            meta: meta_args(PathBuf::new(), Some("1.2.3")),
            output: Some(out.clone()),
            pretty: false,
        };
        emit_config(&args).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(json["base"], "/vitepress-blog-starter/");
        assert_eq!(json["themeConfig"]["nav"][4]["text"], "1.2.3");
    }
}
