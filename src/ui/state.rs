use std::sync::mpsc::Receiver;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use throbber_widgets_tui::ThrobberState;

use crate::catalog::{Catalog, DurationBand, FilterInput, build_suggestions, normalize::normalize};
use crate::source::SourceError;
use crate::types::{Program, Resource};

use super::input::QueryInput;

/// Payload delivered by the background loader thread.
pub struct DatasetUpdate {
    pub programs: Result<Vec<Program>, SourceError>,
    pub resources: Vec<Resource>,
}

/// Which catalog the main pane is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Programmes,
    Resources,
}

impl Tab {
    pub fn toggled(self) -> Self {
        match self {
            Tab::Programmes => Tab::Resources,
            Tab::Resources => Tab::Programmes,
        }
    }
}

/// Interactive application state: the catalog plus the filter widgets that
/// feed it.
pub struct App {
    pub catalog: Catalog,
    pub resources: Vec<Resource>,
    pub suggestions: Vec<String>,
    pub tab: Tab,
    pub input: QueryInput,
    pub paid_only: bool,
    pub region: String,
    pub duration: DurationBand,
    pub loading: bool,
    pub status: Option<String>,
    pub(crate) throbber_state: ThrobberState,
    regions: Vec<String>,
    updates: Option<Receiver<DatasetUpdate>>,
}

impl App {
    /// Build an app that starts from the given filter snapshot and waits for
    /// its dataset.
    #[must_use]
    pub fn new(filter: FilterInput) -> Self {
        let mut catalog = Catalog::new();
        let input = QueryInput::new(filter.query.clone());
        let paid_only = filter.paid_only;
        let region = filter.region.clone();
        let duration = filter.duration;
        catalog.set_filter(filter);

        Self {
            catalog,
            resources: Vec::new(),
            suggestions: Vec::new(),
            tab: Tab::Programmes,
            input,
            paid_only,
            region,
            duration,
            loading: true,
            status: None,
            throbber_state: ThrobberState::default(),
            regions: Vec::new(),
            updates: None,
        }
    }

    pub fn attach_updates(&mut self, updates: Receiver<DatasetUpdate>) {
        self.updates = Some(updates);
    }

    /// Drain any pending dataset update from the loader thread.
    pub fn pump_updates(&mut self) {
        let Some(updates) = &self.updates else {
            return;
        };
        let Ok(update) = updates.try_recv() else {
            return;
        };
        self.apply_update(update);
    }

    pub fn apply_update(&mut self, update: DatasetUpdate) {
        self.loading = false;
        self.resources = update.resources;
        match update.programs {
            Ok(programs) => {
                log::info!("dataset ready with {} programmes", programs.len());
                self.suggestions = build_suggestions(&programs);
                self.catalog.set_dataset(programs);
                self.regions = self.catalog.region_labels();
                self.refresh();
            }
            Err(err) => {
                log::error!("dataset unavailable: {err}");
                self.status = Some("Programme data is unavailable right now.".to_string());
                self.catalog.set_dataset(Vec::new());
            }
        }
    }

    /// Snapshot the current widget state as a [`FilterInput`].
    #[must_use]
    pub fn current_filter(&self) -> FilterInput {
        FilterInput {
            query: self.input.value().to_string(),
            paid_only: self.paid_only,
            region: self.region.clone(),
            duration: self.duration,
        }
    }

    /// Re-run the catalog against the current widget state. Resets the
    /// pagination window as a side effect.
    pub fn refresh(&mut self) {
        self.catalog.set_filter(self.current_filter());
    }

    pub fn toggle_paid(&mut self) {
        self.paid_only = !self.paid_only;
        self.refresh();
    }

    /// Advance the region selector: all regions, then each known region in
    /// dataset order, then back to all.
    pub fn cycle_region(&mut self) {
        self.region = next_region(&self.regions, &self.region);
        self.refresh();
    }

    pub fn cycle_duration(&mut self) {
        self.duration = self.duration.cycled();
        self.refresh();
    }

    /// Query suggestions matching the current input, for the hint row.
    #[must_use]
    pub fn matching_suggestions(&self, limit: usize) -> Vec<&str> {
        let needle = normalize(self.input.value());
        if needle.is_empty() {
            return Vec::new();
        }
        self.suggestions
            .iter()
            .filter(|s| normalize(s).contains(&needle))
            .take(limit)
            .map(String::as_str)
            .collect()
    }

    /// Handle a key press; returns `true` when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => return true,
                KeyCode::Char('p') => self.toggle_paid(),
                KeyCode::Char('r') => self.cycle_region(),
                KeyCode::Char('d') => self.cycle_duration(),
                KeyCode::Char('u') => {
                    self.input.clear();
                    self.refresh();
                }
                _ => {}
            }
            return false;
        }

        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Tab => self.tab = self.tab.toggled(),
            KeyCode::Enter => {
                if self.tab == Tab::Programmes && !self.catalog.is_exhausted() {
                    self.catalog.advance_page();
                }
            }
            KeyCode::Backspace => {
                self.input.backspace();
                self.refresh();
            }
            KeyCode::Char(ch) => {
                self.input.push(ch);
                self.refresh();
            }
            _ => {}
        }
        false
    }
}

fn next_region(regions: &[String], current: &str) -> String {
    if regions.is_empty() {
        return String::new();
    }
    if current.is_empty() {
        return regions[0].clone();
    }
    let wanted = normalize(current);
    let position = regions.iter().position(|r| normalize(r) == wanted);
    match position {
        Some(index) if index + 1 < regions.len() => regions[index + 1].clone(),
        // Unknown or last region wraps back to "all regions".
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(company: &str, title: &str, region: &[&str]) -> Program {
        Program {
            title: Some(title.to_string()),
            company: Some(company.to_string()),
            region: region.iter().map(|r| r.to_string()).collect(),
            ..Program::default()
        }
    }

    fn loaded_app() -> App {
        let mut app = App::new(FilterInput::default());
        app.apply_update(DatasetUpdate {
            programs: Ok(vec![
                program("Acme", "Return to Tech", &["Ireland"]),
                program("Zeta", "Finance Relaunch", &["UK"]),
            ]),
            resources: Vec::new(),
        });
        app
    }

    #[test]
    fn dataset_update_populates_catalog_and_suggestions() {
        let app = loaded_app();
        assert!(!app.loading);
        assert_eq!(app.catalog.view_len(), 2);
        assert!(app.suggestions.iter().any(|s| s == "Acme"));
    }

    #[test]
    fn failed_dataset_leaves_an_empty_catalog_and_a_status() {
        let mut app = App::new(FilterInput::default());
        app.apply_update(DatasetUpdate {
            programs: Err(SourceError::NoSource),
            resources: Vec::new(),
        });

        assert_eq!(app.catalog.view_len(), 0);
        assert!(app.catalog.is_exhausted());
        assert!(app.status.is_some());
    }

    #[test]
    fn typing_refreshes_the_filter() {
        let mut app = loaded_app();
        for ch in "acme".chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(ch)));
        }
        assert_eq!(app.catalog.view_len(), 1);

        app.handle_key(KeyEvent::from(KeyCode::Backspace));
        assert_eq!(app.current_filter().query, "acm");
    }

    #[test]
    fn region_cycle_walks_dataset_regions_and_wraps() {
        let mut app = loaded_app();
        app.cycle_region();
        assert_eq!(app.region, "Ireland");
        app.cycle_region();
        assert_eq!(app.region, "UK");
        app.cycle_region();
        assert_eq!(app.region, "");
    }

    #[test]
    fn escape_exits() {
        let mut app = loaded_app();
        assert!(app.handle_key(KeyEvent::from(KeyCode::Esc)));
    }

    #[test]
    fn suggestion_hints_match_case_insensitively() {
        let mut app = loaded_app();
        for ch in "ACM".chars() {
            app.input.push(ch);
        }
        let hints = app.matching_suggestions(5);
        assert_eq!(hints, vec!["Acme"]);
    }
}
