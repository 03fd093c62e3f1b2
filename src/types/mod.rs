//! Data shapes shared between the catalog core, the data sources and the UI.

mod program;
mod resource;
mod suggestion;

pub use program::Program;
pub use resource::Resource;
pub use suggestion::{Suggestion, SuggestionDraft, SuggestionError};
