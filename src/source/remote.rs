use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::types::{Program, Suggestion};

use super::SourceError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Body shape of the `/programs` endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProgramsEnvelope {
    items: Vec<Program>,
}

fn client() -> Result<Client, SourceError> {
    Ok(Client::builder().timeout(REQUEST_TIMEOUT).build()?)
}

fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{path}", base.trim_end_matches('/'))
}

/// Fetch the programme dataset from `{base}/programs`.
pub fn fetch_programs(base: &str) -> Result<Vec<Program>, SourceError> {
    let url = endpoint(base, "programs");
    let response = client()?.get(&url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::RemoteStatus {
            status: status.as_u16(),
            url,
        });
    }
    let envelope: ProgramsEnvelope = response.json()?;
    Ok(envelope.items)
}

/// Post a validated suggestion to `{base}/suggestions`.
pub fn post_suggestion(base: &str, suggestion: &Suggestion) -> Result<(), SourceError> {
    let url = endpoint(base, "suggestions");
    let response = client()?.post(&url).json(suggestion).send()?;
    let status = response.status();
    if !status.is_success() {
        // Include the body in the log; the error itself stays typed.
        let body = response.text().unwrap_or_default();
        log::warn!("suggestion rejected with {status}: {body}");
        return Err(SourceError::RemoteStatus {
            status: status.as_u16(),
            url,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_doubling_slashes() {
        assert_eq!(
            endpoint("https://api.example/", "programs"),
            "https://api.example/programs"
        );
        assert_eq!(
            endpoint("https://api.example", "suggestions"),
            "https://api.example/suggestions"
        );
    }

    #[test]
    fn envelope_defaults_to_no_items() {
        let envelope: ProgramsEnvelope = serde_json::from_str("{}").expect("parses");
        assert!(envelope.items.is_empty());
    }
}
