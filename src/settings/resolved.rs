use std::path::PathBuf;

use anyhow::{Result, bail, ensure};

use relaunch::catalog::{DurationBand, FilterInput};

const DEFAULT_PROGRAMS_FILE: &str = "programs.json";
const DEFAULT_RESOURCES_FILE: &str = "resources.json";

/// Fully validated configuration consumed by the workflow.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
    pub(crate) api_base: Option<String>,
    pub(crate) programs_file: PathBuf,
    pub(crate) resources_file: PathBuf,
    pub(crate) filter: FilterInput,
}

impl ResolvedConfig {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn from_sections(
        api_base: Option<String>,
        programs_file: Option<PathBuf>,
        resources_file: Option<PathBuf>,
        query: Option<String>,
        paid_only: Option<bool>,
        region: Option<String>,
        duration: Option<String>,
    ) -> Result<Self> {
        if let Some(base) = api_base.as_deref() {
            ensure!(
                base.starts_with("http://") || base.starts_with("https://"),
                "api base URL must start with http:// or https://, got '{base}'"
            );
        }

        let filter = FilterInput {
            query: query.unwrap_or_default(),
            paid_only: paid_only.unwrap_or(false),
            region: region.unwrap_or_default(),
            duration: parse_duration(duration.as_deref())?,
        };

        Ok(Self {
            api_base,
            programs_file: programs_file.unwrap_or_else(|| PathBuf::from(DEFAULT_PROGRAMS_FILE)),
            resources_file: resources_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RESOURCES_FILE)),
            filter,
        })
    }

    /// Print a short summary of where data will come from and which filters
    /// start active.
    pub(crate) fn print_summary(&self) {
        match self.api_base.as_deref() {
            Some(base) => println!("api base: {base}"),
            None => println!("api base: (none, local file only)"),
        }
        println!("programmes file: {}", self.programs_file.display());
        println!("resources file: {}", self.resources_file.display());
        println!(
            "filters: query='{}' paid_only={} region='{}' duration={}",
            self.filter.query,
            self.filter.paid_only,
            self.filter.region,
            self.filter.duration.label()
        );
    }
}

fn parse_duration(value: Option<&str>) -> Result<DurationBand> {
    match value.map(str::trim) {
        None | Some("") | Some("any") => Ok(DurationBand::Any),
        Some("short") => Ok(DurationBand::Short),
        Some("mid") => Ok(DurationBand::Mid),
        Some("long") => Ok(DurationBand::Long),
        Some(other) => bail!("unknown duration band '{other}' (expected short, mid or long)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_in_local_files_and_empty_filter() {
        let config =
            ResolvedConfig::from_sections(None, None, None, None, None, None, None).expect("ok");

        assert!(config.api_base.is_none());
        assert_eq!(config.programs_file, PathBuf::from("programs.json"));
        assert_eq!(config.resources_file, PathBuf::from("resources.json"));
        assert!(config.filter.query.is_empty());
        assert_eq!(config.filter.duration, DurationBand::Any);
    }

    #[test]
    fn api_base_must_be_http() {
        let result = ResolvedConfig::from_sections(
            Some("ftp://example".into()),
            None,
            None,
            None,
            None,
            None,
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn duration_strings_map_to_bands() {
        for (raw, band) in [
            ("short", DurationBand::Short),
            ("mid", DurationBand::Mid),
            ("long", DurationBand::Long),
            ("any", DurationBand::Any),
            ("", DurationBand::Any),
        ] {
            assert_eq!(parse_duration(Some(raw)).expect("parses"), band);
        }
        assert!(parse_duration(Some("fortnight")).is_err());
    }
}
