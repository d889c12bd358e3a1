//! Vpgen - typed site configuration generator for the vitepress-blog-starter blog.

mod cli;
mod config;
mod logger;
mod meta;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    match &cli.command {
        Commands::Emit { args } => cli::emit::emit_config(args),
        Commands::Check { args } => cli::check::check_config(args),
    }
}
