//! CLI command implementations.

mod args;
pub mod check;
pub mod emit;

pub use args::{CheckArgs, Cli, Commands, EmitArgs, MetaArgs};
