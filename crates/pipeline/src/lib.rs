//! Client-side content pipeline for Workstation Hub
//!
//! Tab loading with infinite scroll, filter and search navigation, card
//! actions and notification polling. Everything the browser would touch goes
//! through the traits in [`ports`].

mod actions;
mod content;
mod cursor;
mod filters;
mod location;
mod notifications;
pub mod ports;
mod search;


pub use actions::{ActionHandlers, BOOKMARK_FAILED_MESSAGE};
pub use content::{
    AppendOutcome, ContentPipeline, LoadOutcome, PipelineStatus, ScrollMetrics,
};
pub use cursor::{AppendBlocked, AppendTicket, PaginationCursor};
pub use filters::{apply_filters, build_query};
pub use location::{encode_pairs, PageLocation};
pub use notifications::NotificationPoller;
pub use ports::{
    BadgeState, HtmlContainer, NavigationLog, Navigator, NotificationBadge, Notifier,
    ResultsContainer, ToastLog,
};
pub use search::{perform_search, SearchDebouncer};
