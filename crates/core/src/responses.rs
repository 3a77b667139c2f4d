//! Bodies returned by the mutating and counter endpoints.

use serde::{Deserialize, Serialize};

const fn default_success() -> bool {
    true
}

/// Answer to a support/bookmark toggle.
///
/// The page endpoint reports `success`; the API endpoint omits it, in which
/// case the toggle is taken as successful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    pub supported: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supporters_count: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnreadCount {
    pub unread_count: u64,
}
