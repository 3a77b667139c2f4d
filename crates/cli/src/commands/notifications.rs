use std::sync::Arc;

use anyhow::{bail, Result};
use workstation_client::ApiClient;
use workstation_core::HubConfig;
use workstation_pipeline::NotificationPoller;

use crate::console::ConsoleBadge;

pub(crate) async fn run_notifications(config: &HubConfig, watch: bool) -> Result<()> {
    let client = Arc::new(ApiClient::new(config)?);
    let poller = NotificationPoller::new(client, Arc::new(ConsoleBadge), config.poll_interval);

    if !watch {
        if poller.poll_once().await.is_none() {
            bail!("could not fetch unread notification count");
        }
        return Ok(());
    }

    tokio::select! {
        () = poller.run() => {},
        result = tokio::signal::ctrl_c() => {
            result?;
            tracing::info!("interrupted");
        },
    }
    Ok(())
}
