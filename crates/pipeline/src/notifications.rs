//! Unread notification badge polling.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use workstation_client::ApiClient;
use workstation_core::constants::NOTIFICATION_POLL_SECS;

use crate::ports::NotificationBadge;

/// Keeps the header badge in sync with the unread notification count.
pub struct NotificationPoller {
    client: Arc<ApiClient>,
    badge: Arc<dyn NotificationBadge>,
    interval: Duration,
}

impl NotificationPoller {
    /// A zero `interval` is replaced by the default poll interval.
    #[must_use]
    pub fn new(
        client: Arc<ApiClient>,
        badge: Arc<dyn NotificationBadge>,
        interval: Duration,
    ) -> Self {
        let interval = if interval.is_zero() {
            tracing::warn!(
                default_secs = NOTIFICATION_POLL_SECS,
                "zero poll interval, using default"
            );
            Duration::from_secs(NOTIFICATION_POLL_SECS)
        } else {
            interval
        };
        Self { client, badge, interval }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Fetches the unread count once and updates the badge: shown with the
    /// count when positive, hidden at zero. Failures are logged and leave the
    /// badge as it was.
    pub async fn poll_once(&self) -> Option<u64> {
        match self.client.unread_notifications().await {
            Ok(count) => {
                if count > 0 {
                    self.badge.show(count);
                } else {
                    self.badge.hide();
                }
                tracing::debug!(count, "unread notifications");
                Some(count)
            },
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    transient = e.is_transient(),
                    "notification poll failed"
                );
                None
            },
        }
    }

    /// Polls right away and then once per interval, for as long as the badge
    /// is on the page. Returns immediately for signed-out visitors.
    pub async fn run(&self) {
        if !self.badge.is_present() {
            tracing::debug!("no notification badge, polling disabled");
            return;
        }
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tracing::info!(interval_secs = self.interval.as_secs_f64(), "notification polling started");
        loop {
            ticker.tick().await;
            if !self.badge.is_present() {
                break;
            }
            self.poll_once().await;
        }
        tracing::info!("notification polling stopped");
    }
}
