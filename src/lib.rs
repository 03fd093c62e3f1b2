//! Core crate exports for the `relaunch` catalog browser.
//!
//! The root module re-exports the catalog engine and the data types so the
//! binary and embedders can drive the application without digging through
//! the module hierarchy.

pub mod app_dirs;
pub mod catalog;
pub mod logging;
pub mod source;
pub mod types;
pub mod ui;

pub use catalog::{Catalog, DurationBand, FilterInput, PAGE_SIZE, build_suggestions};
pub use types::{Program, Resource, Suggestion, SuggestionDraft, SuggestionError};
