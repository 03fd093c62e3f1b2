//! Dataset acquisition: a remote API first, a local JSON file second.
//!
//! The catalog core never learns which strategy produced the records; both
//! loaders resolve to the same `Vec<Program>`. When every strategy fails the
//! caller is expected to carry on with an empty dataset.

mod local;
mod remote;

pub use local::{builtin_resources, read_programs_file, read_resources_file};
pub use remote::{fetch_programs, post_suggestion};

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::{Program, Resource};

/// Failures surfaced by the programme and resource loaders.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("API error {status} from {url}")]
    RemoteStatus { status: u16, url: String },
    #[error("request failed")]
    Http(#[from] reqwest::Error),
    #[error("failed to read {path}")]
    File {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("no programme source configured")]
    NoSource,
}

/// Resolve the programme dataset: remote API when configured, local file
/// otherwise. A remote failure falls through to the file silently apart
/// from a warning in the log.
pub fn load_programs(
    api_base: Option<&str>,
    fallback_file: Option<&Path>,
) -> Result<Vec<Program>, SourceError> {
    if let Some(base) = api_base {
        match fetch_programs(base) {
            Ok(programs) => {
                log::info!("loaded {} programmes from {base}", programs.len());
                return Ok(programs);
            }
            Err(err) => {
                log::warn!("API fetch failed, trying local dataset: {err}");
            }
        }
    }

    let Some(path) = fallback_file else {
        return Err(SourceError::NoSource);
    };
    let programs = read_programs_file(path)?;
    log::info!("loaded {} programmes from {}", programs.len(), path.display());
    Ok(programs)
}

/// Resolve the support-resource catalog. This loader is infallible: a
/// missing or unreadable file degrades to the built-in resource set so the
/// resources tab is never blank.
pub fn load_resources(file: Option<&Path>) -> Vec<Resource> {
    if let Some(path) = file {
        match read_resources_file(path) {
            Ok(resources) => return resources,
            Err(err) => {
                log::warn!("falling back to built-in resources: {err}");
            }
        }
    }
    builtin_resources()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_strategies_are_an_error() {
        assert!(matches!(
            load_programs(None, None),
            Err(SourceError::NoSource)
        ));
    }

    #[test]
    fn file_fallback_is_used_without_an_api_base() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[{{"title":"Return to Tech","company":"Acme","durationWeeks":12}}]"#
        )
        .expect("write");

        let programs = load_programs(None, Some(file.path())).expect("loads");
        assert_eq!(programs.len(), 1);
        assert_eq!(programs[0].company_text(), "Acme");
    }

    #[test]
    fn resource_loading_never_fails() {
        let resources = load_resources(Some(Path::new("/definitely/not/here.json")));
        assert!(!resources.is_empty());
    }
}
