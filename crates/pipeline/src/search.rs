//! Header search box.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::AbortHandle;
use workstation_core::constants::MIN_SEARCH_LEN;

use crate::location::PageLocation;
use crate::ports::Navigator;

/// Navigates to the current page with `search` set to `query`, keeping the
/// other query parameters. Queries shorter than two characters are ignored.
///
/// Returns the navigation target, if any.
pub fn perform_search(
    location: &PageLocation,
    query: &str,
    navigator: &dyn Navigator,
) -> Option<String> {
    if query.chars().count() < MIN_SEARCH_LEN {
        tracing::debug!(query, "search query too short");
        return None;
    }
    let next = location.clone().with_param("search", query);
    let target = next.target_with_query(&next.encoded_query());
    navigator.navigate(&target);
    Some(target)
}

/// Delays [`perform_search`] until typing pauses.
///
/// Every keystroke aborts the pending timer and starts a new one, so a burst
/// of input results in at most one navigation, for the last value.
pub struct SearchDebouncer {
    location: PageLocation,
    navigator: Arc<dyn Navigator>,
    delay: Duration,
    pending: Mutex<Option<AbortHandle>>,
}

impl SearchDebouncer {
    #[must_use]
    pub fn new(location: PageLocation, navigator: Arc<dyn Navigator>, delay: Duration) -> Self {
        Self { location, navigator, delay, pending: Mutex::new(None) }
    }

    /// Records a keystroke. Must be called from within a tokio runtime.
    pub fn input(&self, value: &str) {
        let location = self.location.clone();
        let navigator = Arc::clone(&self.navigator);
        let value = value.to_owned();
        let delay = self.delay;

        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
        }
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            perform_search(&location, &value, navigator.as_ref());
        });
        *pending = Some(handle.abort_handle());
    }

    /// Drops a pending search without navigating.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = pending.take() {
            handle.abort();
            tracing::debug!("pending search cancelled");
        }
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::NavigationLog;

    fn explore() -> PageLocation {
        PageLocation::parse("/explore/?stage=idea&search=old").unwrap()
    }

    #[test]
    fn short_query_is_ignored() {
        let navigator = NavigationLog::new();
        assert_eq!(perform_search(&explore(), "k", &navigator), None);
        assert_eq!(perform_search(&explore(), "", &navigator), None);
        assert!(navigator.targets().is_empty());
    }

    #[test]
    fn search_replaces_previous_term_and_keeps_filters() {
        let navigator = NavigationLog::new();
        let target = perform_search(&explore(), "solar kiln", &navigator);
        assert_eq!(target.as_deref(), Some("/explore/?stage=idea&search=solar+kiln"));
        assert_eq!(navigator.last(), target);
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_typing_navigates_once_for_last_value() {
        let navigator = Arc::new(NavigationLog::new());
        let debouncer = SearchDebouncer::new(
            PageLocation::new("/explore/"),
            Arc::clone(&navigator) as Arc<dyn Navigator>,
            Duration::from_millis(500),
        );

        for value in ["s", "so", "sol", "sola", "solar"] {
            debouncer.input(value);
            tokio::time::sleep(Duration::from_millis(120)).await;
        }
        assert!(navigator.targets().is_empty());

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(navigator.targets(), ["/explore/?search=solar"]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_pending_search() {
        let navigator = Arc::new(NavigationLog::new());
        let debouncer = SearchDebouncer::new(
            PageLocation::new("/explore/"),
            Arc::clone(&navigator) as Arc<dyn Navigator>,
            Duration::from_millis(500),
        );

        debouncer.input("solar");
        debouncer.cancel();
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(navigator.targets().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn short_final_value_navigates_nowhere() {
        let navigator = Arc::new(NavigationLog::new());
        let debouncer = SearchDebouncer::new(
            PageLocation::new("/explore/"),
            Arc::clone(&navigator) as Arc<dyn Navigator>,
            Duration::from_millis(500),
        );

        debouncer.input("so");
        debouncer.input("s");
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(navigator.targets().is_empty());
    }
}
