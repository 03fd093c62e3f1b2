//! Configuration loading and resolution utilities.
//!
//! Configuration is layered: default config files, explicitly passed files,
//! `RELAUNCH__`-prefixed environment variables, then CLI overrides. `load`
//! is the primary entry point and returns a [`ResolvedConfig`] used by the
//! application.

mod raw;
mod resolved;
mod sources;

pub(crate) use resolved::ResolvedConfig;

use anyhow::{Result, anyhow};

use crate::cli::CliArgs;
use raw::RawConfig;
use sources::build_config;

/// Load configuration by combining CLI arguments, config files and
/// environment variables.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let builder = build_config(cli)?;
    let mut raw: RawConfig = builder
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
    raw.apply_cli_overrides(cli);
    raw.resolve()
}
