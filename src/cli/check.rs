//! `check` command: build the configuration and run the shape diagnostics.

use crate::cli::CheckArgs;
use crate::cli::emit::resolve_version;
use crate::config::SiteConfig;
use crate::{log, logger};
use anyhow::Result;

/// Build the configuration and validate it against the host shape rules.
///
/// Errors are collected and displayed all at once; the process exits
/// non-zero if any are found.
pub fn check_config(args: &CheckArgs) -> Result<()> {
    logger::set_verbose(args.meta.verbose);

    let version = resolve_version(&args.meta)?;
    let config = SiteConfig::build(&version);

    config.validate()?;

    log!(
        "check";
        "ok: {} nav entries, {} sidebar groups (version {})",
        config.nav().len(),
        config.theme_config.sidebar.len(),
        version
    );
    Ok(())
}
