use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::ResolvedConfig;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    api: ApiSection,
    data: DataSection,
    filters: FiltersSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ApiSection {
    base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DataSection {
    programs_file: Option<PathBuf>,
    resources_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct FiltersSection {
    query: Option<String>,
    paid_only: Option<bool>,
    region: Option<String>,
    duration: Option<String>,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if cli.api_base.is_some() {
            self.api.base_url = cli.api_base.clone();
        }
        if cli.programs_file.is_some() {
            self.data.programs_file = cli.programs_file.clone();
        }
        if cli.resources_file.is_some() {
            self.data.resources_file = cli.resources_file.clone();
        }
        if cli.query.is_some() {
            self.filters.query = cli.query.clone();
        }
        if cli.paid_only.is_some() {
            self.filters.paid_only = cli.paid_only;
        }
        if cli.region.is_some() {
            self.filters.region = cli.region.clone();
        }
        if let Some(duration) = cli.duration {
            self.filters.duration = Some(duration.as_str().to_string());
        }
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating
    /// and filling defaults where required.
    pub(super) fn resolve(self) -> Result<ResolvedConfig> {
        ResolvedConfig::from_sections(
            self.api.base_url,
            self.data.programs_file,
            self.data.resources_file,
            self.filters.query,
            self.filters.paid_only,
            self.filters.region,
            self.filters.duration,
        )
    }
}
