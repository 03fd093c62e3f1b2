use std::fs;
use std::path::Path;

use crate::types::{Program, Resource};

use super::SourceError;

/// Read a programme dataset from a local JSON file (a bare array of
/// records, matching the static `programs.json` the API mirrors).
pub fn read_programs_file(path: &Path) -> Result<Vec<Program>, SourceError> {
    let raw = fs::read_to_string(path).map_err(|source| SourceError::File {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SourceError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a support-resource catalog from a local JSON file.
pub fn read_resources_file(path: &Path) -> Result<Vec<Resource>, SourceError> {
    let raw = fs::read_to_string(path).map_err(|source| SourceError::File {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SourceError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// The inline resource set used when no resources file is available.
#[must_use]
pub fn builtin_resources() -> Vec<Resource> {
    vec![
        Resource {
            id: "backtoworkconnect".into(),
            name: "Back to Work Connect".into(),
            url: "https://backtoworkconnect.ie/".into(),
            region: vec!["Ireland".into()],
            kind: Some("Directory".into()),
            description: Some(
                "Irish platform connecting returners with flexible roles, courses, and \
                 community resources."
                    .into(),
            ),
            logo: Some(
                "https://backtoworkconnect.ie/wp-content/uploads/2020/07/btwc-logo.svg".into(),
            ),
        },
        Resource {
            id: "employmum".into(),
            name: "Employmum | The Flexible Recruitment Company".into(),
            url: "https://employmum.ie/".into(),
            region: vec!["Ireland".into()],
            kind: Some("Recruitment".into()),
            description: Some(
                "Specialist in flexible work and returner opportunities, plus coaching and \
                 employer partnerships."
                    .into(),
            ),
            logo: Some(
                "https://employmum.ie/wp-content/uploads/2020/10/Employmum-logo.svg".into(),
            ),
        },
        Resource {
            id: "careerreturners-ireland".into(),
            name: "Career Returners – Ireland".into(),
            url: "https://careerreturners.com/career-returners-ireland/".into(),
            region: vec!["Ireland".into(), "UK".into(), "EU".into()],
            kind: Some("Programme Hub".into()),
            description: Some(
                "Curated returner programmes, events and guidance for experienced \
                 professionals returning to work."
                    .into(),
            ),
            logo: Some(
                "https://careerreturners.com/wp-content/uploads/2022/08/career-returners-logo.svg"
                    .into(),
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn programmes_file_round_trips_lenient_fields() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[{{"title":"Relaunch","paid":"yes","durationWeeks":"24","region":["Ireland"]}}]"#
        )
        .expect("write");

        let programs = read_programs_file(file.path()).expect("loads");
        assert_eq!(programs.len(), 1);
        assert!(!programs[0].paid);
        assert_eq!(programs[0].duration_weeks, 24);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "not json").expect("write");

        assert!(matches!(
            read_programs_file(file.path()),
            Err(SourceError::Parse { .. })
        ));
    }

    #[test]
    fn builtin_resources_cover_the_inline_set() {
        let resources = builtin_resources();
        assert_eq!(resources.len(), 3);
        assert!(resources.iter().all(|r| !r.url.is_empty()));
    }
}
