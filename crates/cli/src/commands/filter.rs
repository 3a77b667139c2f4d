use std::sync::Arc;

use anyhow::Result;
use workstation_core::{FilterCategory, FilterSelection, HubConfig};
use workstation_pipeline::{apply_filters, PageLocation, SearchDebouncer};

use crate::console::ConsoleNavigator;

pub(crate) fn run_filter(
    location: &str,
    stage: &[String],
    collaboration: &[String],
    status: &[String],
) -> Result<()> {
    let location = PageLocation::parse(location)?;
    let mut selection = FilterSelection::new();
    for (category, values) in [
        (FilterCategory::Stage, stage),
        (FilterCategory::Collaboration, collaboration),
        (FilterCategory::Status, status),
    ] {
        for value in values {
            selection.select(category, value.as_str());
        }
    }
    apply_filters(&location, &selection, &ConsoleNavigator);
    Ok(())
}

/// Replays `query` one keystroke at a time through the debouncer, then waits
/// out the quiet period.
pub(crate) async fn run_search(config: &HubConfig, query: &str, location: &str) -> Result<()> {
    let location = PageLocation::parse(location)?;
    let debouncer =
        SearchDebouncer::new(location, Arc::new(ConsoleNavigator), config.search_debounce);

    let mut typed = String::with_capacity(query.len());
    for ch in query.chars() {
        typed.push(ch);
        debouncer.input(&typed);
    }
    tokio::time::sleep(config.search_debounce.saturating_mul(2)).await;
    Ok(())
}
