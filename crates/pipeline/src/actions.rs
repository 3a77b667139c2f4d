//! Card and header buttons: support, bookmark, join and plain navigations.

use std::sync::Arc;

use workstation_client::{ApiClient, SupportEndpoint};
use workstation_core::constants::{GENERIC_ERROR_MESSAGE, NOTIFICATIONS_PAGE};
use workstation_core::{message_path, project_path, user_path};
use workstation_render::{BookmarkIcon, Toast};

use crate::ports::{Navigator, Notifier};

/// Bookmark request failed: anonymous users, CSRF rejection, network errors.
pub const BOOKMARK_FAILED_MESSAGE: &str = "Please login to bookmark projects";

/// Runs the per-card actions and reports the result through toasts.
///
/// Nothing is changed optimistically: icons and toasts follow the state the
/// server confirms.
pub struct ActionHandlers {
    client: Arc<ApiClient>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

impl ActionHandlers {
    #[must_use]
    pub fn new(
        client: Arc<ApiClient>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self { client, navigator, notifier }
    }

    /// Toggles the bookmark on `slug`.
    ///
    /// Returns the icon the button should now show, or `None` on failure, in
    /// which case the icon must stay as it is.
    pub async fn bookmark(&self, slug: &str) -> Option<BookmarkIcon> {
        match self.client.toggle_support(slug, SupportEndpoint::Api).await {
            Ok(response) => {
                let icon = BookmarkIcon::from_supported(response.supported);
                let toast = if response.supported {
                    Toast::success("Added to bookmarks")
                } else {
                    Toast::info("Removed from bookmarks")
                };
                tracing::info!(slug, supported = response.supported, "bookmark toggled");
                self.notifier.show_toast(toast);
                Some(icon)
            },
            Err(e) => {
                tracing::warn!(slug, error = %e, "bookmark failed");
                self.notifier.show_toast(Toast::error(BOOKMARK_FAILED_MESSAGE));
                None
            },
        }
    }

    /// Toggles support for `slug`.
    ///
    /// Returns the confirmed support state, or `None` when the server refused
    /// or the request failed.
    pub async fn support(&self, slug: &str) -> Option<bool> {
        match self.client.toggle_support(slug, SupportEndpoint::Page).await {
            Ok(response) if response.success => {
                let message =
                    if response.supported { "Project supported!" } else { "Support removed" };
                tracing::info!(
                    slug,
                    supported = response.supported,
                    supporters = response.supporters_count,
                    "support toggled"
                );
                self.notifier.show_toast(Toast::success(message));
                Some(response.supported)
            },
            Ok(_) => {
                tracing::warn!(slug, "server declined support toggle");
                self.notifier.show_toast(Toast::error("Failed to support project"));
                None
            },
            Err(e) => {
                tracing::warn!(slug, error = %e, "support request failed");
                self.notifier.show_toast(Toast::error(GENERIC_ERROR_MESSAGE));
                None
            },
        }
    }

    /// Joining happens on the project page; no request is made here.
    pub fn join(&self, slug: &str) -> String {
        self.go(project_path(slug))
    }

    pub fn open_profile(&self, username: &str) -> String {
        self.go(user_path(username))
    }

    pub fn message(&self, username: &str) -> String {
        self.go(message_path(username))
    }

    pub fn open_notifications(&self) -> String {
        self.go(NOTIFICATIONS_PAGE.to_owned())
    }

    fn go(&self, target: String) -> String {
        self.navigator.navigate(&target);
        target
    }
}
