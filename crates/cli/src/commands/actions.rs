use std::sync::Arc;

use anyhow::{bail, Result};
use workstation_client::ApiClient;
use workstation_core::HubConfig;
use workstation_pipeline::ActionHandlers;

use crate::console::{ConsoleNavigator, ConsoleNotifier};

fn handlers(config: &HubConfig, html: bool) -> Result<ActionHandlers> {
    let client = Arc::new(ApiClient::new(config)?);
    Ok(ActionHandlers::new(client, Arc::new(ConsoleNavigator), Arc::new(ConsoleNotifier { html })))
}

pub(crate) async fn run_bookmark(config: &HubConfig, slug: &str, html: bool) -> Result<()> {
    let Some(icon) = handlers(config, html)?.bookmark(slug).await else {
        bail!("bookmark on {slug} failed");
    };
    println!("icon: {}", icon.css_class());
    Ok(())
}

pub(crate) async fn run_support(config: &HubConfig, slug: &str, html: bool) -> Result<()> {
    let Some(supported) = handlers(config, html)?.support(slug).await else {
        bail!("support for {slug} failed");
    };
    println!("supported: {supported}");
    Ok(())
}

pub(crate) fn run_join(config: &HubConfig, slug: &str) -> Result<()> {
    handlers(config, false)?.join(slug);
    Ok(())
}
