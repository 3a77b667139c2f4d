//! Tab loading and infinite scroll over one results container.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use workstation_client::{with_query, ApiClient, ClientError};
use workstation_core::constants::SCROLL_THRESHOLD_PX;
use workstation_core::{ProjectSummary, Tab, UserSummary};
use workstation_render::{
    render_person_cards, render_person_list, render_project_cards, render_project_list,
    LOADING_PLACEHOLDER, LOAD_FAILED_PLACEHOLDER,
};

use crate::cursor::{AppendBlocked, PaginationCursor};
use crate::location::PageLocation;
use crate::ports::ResultsContainer;

/// Viewport geometry at the time of a scroll event, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollMetrics {
    pub scroll_top: u32,
    pub client_height: u32,
    pub scroll_height: u32,
}

impl ScrollMetrics {
    /// Whether the bottom of the viewport is within `threshold` of the end.
    #[must_use]
    pub fn near_bottom(&self, threshold: u32) -> bool {
        let viewport_bottom = u64::from(self.scroll_top) + u64::from(self.client_height);
        viewport_bottom >= u64::from(self.scroll_height.saturating_sub(threshold))
    }

    /// Metrics for a viewport scrolled all the way down.
    #[must_use]
    pub fn at_bottom(scroll_height: u32, client_height: u32) -> Self {
        Self {
            scroll_top: scroll_height.saturating_sub(client_height),
            client_height,
            scroll_height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStatus {
    Idle,
    /// First page of a tab is being fetched
    Loading,
    /// Next page is being fetched
    Appending,
}

#[derive(Debug)]
pub enum LoadOutcome {
    Rendered { count: usize },
    /// Fetch failed; the container shows the failure placeholder
    Failed(ClientError),
    /// A newer tab switch took over before this one completed
    Superseded,
}

#[derive(Debug)]
pub enum AppendOutcome {
    Appended { count: usize },
    /// The page came back empty; nothing was added
    NoMoreResults,
    NotNearBottom,
    Blocked(AppendBlocked),
    /// The first page of the current tab has not arrived yet
    StillLoading,
    Failed(ClientError),
    /// A tab switch happened while this page was in flight
    Superseded,
}

#[derive(Debug, Clone, Copy)]
enum RenderMode {
    Replace,
    Append,
}

struct Rendered {
    markup: String,
    count: usize,
    has_more: bool,
}

struct View<C> {
    container: C,
    cursor: PaginationCursor,
    tab: Tab,
    loading: bool,
}

/// Owns one results container and keeps it in sync with the backend.
///
/// View state is guarded by a mutex that is never held across a fetch, so a
/// scroll trigger arriving mid-fetch sees the in-flight flag and backs off.
pub struct ContentPipeline<C> {
    client: Arc<ApiClient>,
    location: PageLocation,
    view: Mutex<View<C>>,
}

impl<C: ResultsContainer> ContentPipeline<C> {
    #[must_use]
    pub fn new(client: Arc<ApiClient>, location: PageLocation, container: C) -> Self {
        Self {
            client,
            location,
            view: Mutex::new(View {
                container,
                cursor: PaginationCursor::new(),
                tab: Tab::default(),
                loading: false,
            }),
        }
    }

    #[must_use]
    pub fn location(&self) -> &PageLocation {
        &self.location
    }

    #[must_use]
    pub fn tab(&self) -> Tab {
        self.lock().tab
    }

    #[must_use]
    pub fn cursor(&self) -> PaginationCursor {
        self.lock().cursor
    }

    #[must_use]
    pub fn status(&self) -> PipelineStatus {
        let view = self.lock();
        if view.loading {
            PipelineStatus::Loading
        } else if view.cursor.in_flight() {
            PipelineStatus::Appending
        } else {
            PipelineStatus::Idle
        }
    }

    /// Runs `f` against the container.
    pub fn with_container<R>(&self, f: impl FnOnce(&C) -> R) -> R {
        f(&self.lock().container)
    }

    /// Shows `tab`: loading placeholder first, then its first page.
    pub async fn switch_tab(&self, tab: Tab) -> LoadOutcome {
        let generation = {
            let mut view = self.lock();
            view.tab = tab;
            view.loading = true;
            view.container.replace(LOADING_PLACEHOLDER);
            view.cursor.begin_generation()
        };
        let path = self.listing_path(tab, None);
        tracing::debug!(%tab, generation, path = %path, "loading tab");

        let result = self.fetch_rendered(tab, &path, RenderMode::Replace).await;

        let mut view = self.lock();
        if !view.cursor.is_current(generation) {
            tracing::debug!(%tab, generation, "discarding superseded tab load");
            return LoadOutcome::Superseded;
        }
        view.loading = false;
        match result {
            Ok(rendered) => {
                view.container.replace(&rendered.markup);
                view.cursor.set_has_more(rendered.has_more);
                LoadOutcome::Rendered { count: rendered.count }
            },
            Err(e) => {
                tracing::error!(
                    %tab,
                    path = %path,
                    error = %e,
                    transient = e.is_transient(),
                    "failed to load tab"
                );
                view.container.replace(LOAD_FAILED_PLACEHOLDER);
                view.cursor.set_has_more(false);
                LoadOutcome::Failed(e)
            },
        }
    }

    /// Scroll handler: appends the next page once the viewport nears the end.
    pub async fn on_scroll(&self, metrics: ScrollMetrics) -> AppendOutcome {
        if !metrics.near_bottom(SCROLL_THRESHOLD_PX) {
            return AppendOutcome::NotNearBottom;
        }
        self.load_more().await
    }

    /// Fetches and appends the next page, subject to the in-flight guard.
    pub async fn load_more(&self) -> AppendOutcome {
        let (tab, ticket) = {
            let mut view = self.lock();
            if view.loading {
                return AppendOutcome::StillLoading;
            }
            match view.cursor.try_begin_append() {
                Ok(ticket) => (view.tab, ticket),
                Err(blocked) => return AppendOutcome::Blocked(blocked),
            }
        };
        let path = self.listing_path(tab, Some(ticket.page));
        tracing::debug!(
            %tab,
            page = ticket.page,
            generation = ticket.generation,
            path = %path,
            "appending page"
        );

        let result = self.fetch_rendered(tab, &path, RenderMode::Append).await;

        let mut view = self.lock();
        let settled = view.cursor.finish_append(
            ticket,
            result.as_ref().ok().map(|rendered| rendered.has_more && rendered.count > 0),
        );
        if !settled {
            tracing::debug!(%tab, page = ticket.page, "discarding superseded page");
            return AppendOutcome::Superseded;
        }
        match result {
            Ok(rendered) if rendered.count == 0 => AppendOutcome::NoMoreResults,
            Ok(rendered) => {
                view.container.append(&rendered.markup);
                AppendOutcome::Appended { count: rendered.count }
            },
            Err(e) => {
                tracing::warn!(%tab, page = ticket.page, error = %e, "failed to append page");
                AppendOutcome::Failed(e)
            },
        }
    }

    /// Endpoint for `tab`. Appended pages also carry the page's own query
    /// parameters and the page number.
    fn listing_path(&self, tab: Tab, page: Option<u32>) -> String {
        let Some(page) = page else {
            return with_query(tab.endpoint(), tab.params().iter().copied());
        };
        let page = page.to_string();
        let tab_keys: Vec<&str> = tab.params().iter().map(|(k, _)| *k).collect();
        let inherited = self
            .location
            .query_pairs()
            .filter(|(k, _)| *k != "page" && !tab_keys.contains(k));
        let pairs = tab
            .params()
            .iter()
            .copied()
            .chain(inherited)
            .chain(std::iter::once(("page", page.as_str())));
        with_query(tab.endpoint(), pairs)
    }

    async fn fetch_rendered(
        &self,
        tab: Tab,
        path: &str,
        mode: RenderMode,
    ) -> Result<Rendered, ClientError> {
        if tab.lists_people() {
            let page = self.client.fetch_collection::<UserSummary>(path).await?;
            let markup = match mode {
                RenderMode::Replace => render_person_list(&page.items),
                RenderMode::Append => render_person_cards(&page.items),
            };
            Ok(Rendered { markup, count: page.len(), has_more: page.has_more() })
        } else {
            let page = self.client.fetch_collection::<ProjectSummary>(path).await?;
            let markup = match mode {
                RenderMode::Replace => render_project_list(&page.items),
                RenderMode::Append => render_project_cards(&page.items),
            };
            Ok(Rendered { markup, count: page.len(), has_more: page.has_more() })
        }
    }

    fn lock(&self) -> MutexGuard<'_, View<C>> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
