use serde::Serialize;
use thiserror::Error;

/// Raw form input for a programme suggestion, prior to validation.
#[derive(Debug, Clone, Default)]
pub struct SuggestionDraft {
    pub company: String,
    pub link: String,
    pub notes: String,
}

/// A validated suggestion payload ready to be posted to the API.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Suggestion {
    pub company: String,
    pub link: String,
    pub notes: String,
}

/// Why a [`SuggestionDraft`] could not be turned into a [`Suggestion`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SuggestionError {
    #[error("company is required")]
    MissingCompany,
    #[error("link is required")]
    MissingLink,
}

impl SuggestionDraft {
    /// Trim every field and require a non-empty company and link.
    pub fn validate(&self) -> Result<Suggestion, SuggestionError> {
        let company = self.company.trim();
        let link = self.link.trim();
        if company.is_empty() {
            return Err(SuggestionError::MissingCompany);
        }
        if link.is_empty() {
            return Err(SuggestionError::MissingLink);
        }
        Ok(Suggestion {
            company: company.to_string(),
            link: link.to_string(),
            notes: self.notes.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_trims_all_fields() {
        let draft = SuggestionDraft {
            company: "  Acme  ".into(),
            link: " https://acme.example/returners ".into(),
            notes: "  rolling intake  ".into(),
        };
        let suggestion = draft.validate().expect("valid");
        assert_eq!(suggestion.company, "Acme");
        assert_eq!(suggestion.link, "https://acme.example/returners");
        assert_eq!(suggestion.notes, "rolling intake");
    }

    #[test]
    fn whitespace_only_required_fields_are_rejected() {
        let missing_company = SuggestionDraft {
            company: "   ".into(),
            link: "https://acme.example".into(),
            notes: String::new(),
        };
        assert_eq!(
            missing_company.validate().unwrap_err(),
            SuggestionError::MissingCompany
        );

        let missing_link = SuggestionDraft {
            company: "Acme".into(),
            link: String::new(),
            notes: String::new(),
        };
        assert_eq!(
            missing_link.validate().unwrap_err(),
            SuggestionError::MissingLink
        );
    }
}
