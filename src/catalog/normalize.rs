//! String normalisation shared by the filter predicates and sort keys.

/// Canonical form used for equality-style comparisons: trimmed and
/// lower-cased. Absent values are passed in as `""` by callers.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Turn a tag like `"Resume Guidance"` into `"#resume-guidance"`.
///
/// Each run of internal whitespace collapses to a single hyphen; an input
/// that is empty after trimming yields `""` rather than a bare `"#"`.
#[must_use]
pub fn to_hashtag(text: &str) -> String {
    let slug = text
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        String::new()
    } else {
        format!("#{slug}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Ireland "), "ireland");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn hashtag_collapses_whitespace_runs() {
        assert_eq!(to_hashtag("Resume Guidance"), "#resume-guidance");
        assert_eq!(to_hashtag("  career   coaching  "), "#career-coaching");
    }

    #[test]
    fn hashtag_of_empty_input_is_empty() {
        assert_eq!(to_hashtag(""), "");
        assert_eq!(to_hashtag("   "), "");
    }
}
