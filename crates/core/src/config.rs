//! Client configuration read from the environment.
//!
//! Unset variables fall back to defaults silently; set-but-invalid values log a
//! warning and fall back as well, so a typo never aborts startup.

use std::time::Duration;

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, NOTIFICATION_POLL_SECS, SEARCH_DEBOUNCE_MS,
};

pub const BASE_URL_ENV: &str = "WORKSTATION_HUB_URL";
pub const COOKIE_ENV: &str = "WORKSTATION_HUB_COOKIE";
pub const TIMEOUT_ENV: &str = "WORKSTATION_HUB_TIMEOUT_SECS";
pub const POLL_ENV: &str = "WORKSTATION_HUB_POLL_SECS";
pub const DEBOUNCE_ENV: &str = "WORKSTATION_HUB_DEBOUNCE_MS";

/// Parse an environment variable, falling back to `default` when it is unset
/// or unparsable. Only the unparsable case is logged.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    let Ok(raw) = std::env::var(var) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(
                var,
                value = %raw,
                default = %default,
                "invalid env var value, using default"
            );
            default
        },
    }
}

/// [`env_parse_with_default`] for periods where zero is meaningless. Zero is
/// logged and replaced by `default`.
fn env_nonzero_with_default(var: &str, default: u64) -> u64 {
    match env_parse_with_default(var, default) {
        0 => {
            tracing::warn!(var, default, "zero is not allowed for this env var, using default");
            default
        },
        value => value,
    }
}

/// Settings shared by every Workstation Hub client component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubConfig {
    /// Backend origin, without a trailing slash.
    pub base_url: String,
    /// Raw `Cookie` header value (session and `csrftoken`).
    pub cookie_header: Option<String>,
    pub request_timeout: Duration,
    pub poll_interval: Duration,
    pub search_debounce: Duration,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            cookie_header: None,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            poll_interval: Duration::from_secs(NOTIFICATION_POLL_SECS),
            search_debounce: Duration::from_millis(SEARCH_DEBOUNCE_MS),
        }
    }
}

impl HubConfig {
    /// Build a configuration from `WORKSTATION_HUB_*` variables.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.base_url);
        let cookie_header =
            std::env::var(COOKIE_ENV).ok().filter(|v| !v.trim().is_empty());

        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            cookie_header,
            request_timeout: Duration::from_secs(env_nonzero_with_default(
                TIMEOUT_ENV,
                DEFAULT_TIMEOUT_SECS,
            )),
            poll_interval: Duration::from_secs(env_nonzero_with_default(
                POLL_ENV,
                NOTIFICATION_POLL_SECS,
            )),
            search_debounce: Duration::from_millis(env_parse_with_default(
                DEBOUNCE_ENV,
                SEARCH_DEBOUNCE_MS,
            )),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    #[must_use]
    pub fn with_cookie_header(mut self, cookie_header: impl Into<String>) -> Self {
        self.cookie_header = Some(cookie_header.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn set(var: &str, value: &str) {
        // SAFETY: tests touching the environment serialize on env_lock().
        unsafe { std::env::set_var(var, value) };
    }

    fn unset(var: &str) {
        // SAFETY: tests touching the environment serialize on env_lock().
        unsafe { std::env::remove_var(var) };
    }

    #[test]
    fn parse_valid_value() {
        let _guard = env_lock().lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        set("WSH_TEST_PARSE_VALID", " 42 ");
        let value: u64 = env_parse_with_default("WSH_TEST_PARSE_VALID", 7);
        assert_eq!(value, 42);
        unset("WSH_TEST_PARSE_VALID");
    }

    #[test]
    fn parse_garbage_falls_back() {
        let _guard = env_lock().lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        set("WSH_TEST_PARSE_GARBAGE", "soon");
        let value: u64 = env_parse_with_default("WSH_TEST_PARSE_GARBAGE", 7);
        assert_eq!(value, 7);
        unset("WSH_TEST_PARSE_GARBAGE");
    }

    #[test]
    fn missing_var_uses_default() {
        let _guard = env_lock().lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        unset("WSH_TEST_PARSE_MISSING");
        let value: u64 = env_parse_with_default("WSH_TEST_PARSE_MISSING", 7);
        assert_eq!(value, 7);
    }

    #[test]
    fn from_env_reads_overrides() {
        let _guard = env_lock().lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        set(BASE_URL_ENV, "https://hub.example.com/");
        set(COOKIE_ENV, "csrftoken=abc; sessionid=xyz");
        set(POLL_ENV, "5");
        unset(TIMEOUT_ENV);
        unset(DEBOUNCE_ENV);

        let config = HubConfig::from_env();
        assert_eq!(config.base_url, "https://hub.example.com");
        assert_eq!(config.cookie_header.as_deref(), Some("csrftoken=abc; sessionid=xyz"));
        assert_eq!(config.poll_interval, Duration::from_secs(5));
        assert_eq!(config.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.search_debounce, Duration::from_millis(SEARCH_DEBOUNCE_MS));

        unset(BASE_URL_ENV);
        unset(COOKIE_ENV);
        unset(POLL_ENV);
    }

    #[test]
    fn zero_periods_fall_back_to_defaults() {
        let _guard = env_lock().lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        set(POLL_ENV, "0");
        set(TIMEOUT_ENV, "0");
        set(DEBOUNCE_ENV, "0");

        let config = HubConfig::from_env();
        assert_eq!(config.poll_interval, Duration::from_secs(NOTIFICATION_POLL_SECS));
        assert_eq!(config.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.search_debounce, Duration::ZERO);

        unset(POLL_ENV);
        unset(TIMEOUT_ENV);
        unset(DEBOUNCE_ENV);
    }

    #[test]
    fn builder_trims_trailing_slash() {
        let config = HubConfig::default().with_base_url("http://localhost:8000///");
        assert_eq!(config.base_url, "http://localhost:8000");
    }
}
