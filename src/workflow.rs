use std::thread;

use anyhow::{Context, Result, bail};

use relaunch::catalog::Catalog;
use relaunch::source;
use relaunch::types::SuggestionDraft;
use relaunch::ui::{self, DatasetUpdate};

use crate::settings::ResolvedConfig;

/// Coordinates dataset loading and handing control to the presenter.
pub(crate) struct CatalogWorkflow {
    config: ResolvedConfig,
}

impl CatalogWorkflow {
    pub(crate) fn from_config(config: ResolvedConfig) -> Self {
        Self { config }
    }

    /// Load the dataset synchronously and return a filtered catalog, for the
    /// non-interactive output formats.
    pub(crate) fn load_catalog(&self) -> Result<Catalog> {
        let programs = source::load_programs(
            self.config.api_base.as_deref(),
            Some(&self.config.programs_file),
        )
        .context("failed to load the programme dataset")?;

        let mut catalog = Catalog::new();
        catalog.set_dataset(programs);
        catalog.set_filter(self.config.filter.clone());
        Ok(catalog)
    }

    /// Run the interactive browser. The dataset loads on a background thread
    /// so the UI can come up immediately with a progress indicator.
    pub(crate) fn run_interactive(self) -> Result<()> {
        let (tx, rx) = std::sync::mpsc::channel();
        let api_base = self.config.api_base.clone();
        let programs_file = self.config.programs_file.clone();
        let resources_file = self.config.resources_file.clone();

        thread::spawn(move || {
            let programs = source::load_programs(api_base.as_deref(), Some(&programs_file));
            let resources = source::load_resources(Some(&resources_file));
            // The receiver disappearing just means the UI already exited.
            let _ = tx.send(DatasetUpdate {
                programs,
                resources,
            });
        });

        ui::run(self.config.filter.clone(), rx)
    }
}

/// Validate and post a programme suggestion to the configured API.
pub(crate) fn submit_suggestion(config: &ResolvedConfig, draft: SuggestionDraft) -> Result<()> {
    let suggestion = draft.validate()?;
    let Some(base) = config.api_base.as_deref() else {
        bail!("an API base URL is required to submit suggestions (--api-base)");
    };

    source::post_suggestion(base, &suggestion)
        .context("failed to submit the suggestion")?;
    println!("Thanks! We received your suggestion.");
    Ok(())
}
