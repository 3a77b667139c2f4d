use std::sync::Arc;

use anyhow::{bail, Result};
use workstation_client::ApiClient;
use workstation_core::{HubConfig, Tab};
use workstation_pipeline::{
    AppendOutcome, ContentPipeline, HtmlContainer, LoadOutcome, PageLocation, ScrollMetrics,
};

/// Viewport used for the simulated scroll to the bottom.
const VIEWPORT: ScrollMetrics =
    ScrollMetrics { scroll_top: 0, client_height: 900, scroll_height: 900 };

pub(crate) async fn run_tab(
    config: &HubConfig,
    name: &str,
    pages: u32,
    location: &str,
) -> Result<()> {
    let client = Arc::new(ApiClient::new(config)?);
    let location = PageLocation::parse(location)?;
    let pipeline = ContentPipeline::new(client, location, HtmlContainer::new());
    let tab = Tab::from_name(name);

    match pipeline.switch_tab(tab).await {
        LoadOutcome::Rendered { count } => tracing::info!(%tab, count, "tab loaded"),
        LoadOutcome::Failed(e) => {
            pipeline.with_container(|c| println!("{}", c.html()));
            bail!("failed to load {tab}: {e}");
        },
        LoadOutcome::Superseded => {},
    }

    for _ in 1..pages {
        match pipeline.on_scroll(VIEWPORT).await {
            AppendOutcome::Appended { count } => {
                tracing::info!(page = pipeline.cursor().page(), count, "page appended");
            },
            AppendOutcome::Failed(e) => {
                tracing::warn!(error = %e, "stopping after failed page");
                break;
            },
            other => {
                tracing::info!(outcome = ?other, "no more pages");
                break;
            },
        }
    }

    pipeline.with_container(|c| println!("{}", c.html()));
    Ok(())
}
