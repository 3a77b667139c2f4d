//! Shared constants for the Workstation Hub client.
//!
//! Centralizes the endpoint paths, thresholds and user-facing strings that
//! the pipeline, renderer and CLI agree on.

/// Listing endpoint for projects and ideas.
pub const PROJECTS_ENDPOINT: &str = "/api/projects/";

/// Listing endpoint for people.
pub const USERS_ENDPOINT: &str = "/api/users/";

/// Unread notification counter endpoint.
pub const UNREAD_COUNT_ENDPOINT: &str = "/api/notifications/unread_count/";

/// Notifications page opened from the header button.
pub const NOTIFICATIONS_PAGE: &str = "/notifications/";

/// Cookie holding the CSRF token.
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

/// Header carrying the CSRF token on mutating requests.
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";

/// Distance from the document bottom (in pixels) that triggers an append.
pub const SCROLL_THRESHOLD_PX: u32 = 500;

/// Quiet period after the last keystroke before a search navigates.
pub const SEARCH_DEBOUNCE_MS: u64 = 500;

/// Shortest search query that triggers a navigation.
pub const MIN_SEARCH_LEN: usize = 2;

/// Interval between unread notification polls.
pub const NOTIFICATION_POLL_SECS: u64 = 30;

/// Maximum number of tags shown on a project card.
pub const MAX_CARD_TAGS: usize = 3;

/// Description length shown on a project card when no short description exists.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Default backend base URL.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Project stages offered by the explore page filters.
pub const PROJECT_STAGES: &[&str] = &["idea", "prototype", "mvp", "growth", "mature"];

/// Project statuses offered by the explore page filters.
pub const PROJECT_STATUSES: &[&str] = &["open", "closed", "paused"];

/// Collaboration kinds offered by the explore page filters.
pub const COLLABORATION_TYPES: &[&str] = &["co-founders", "mentors", "investors", "contributors"];

/// Generic message for any failed request.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";
