//! Cookie header parsing.

use percent_encoding::percent_decode_str;

/// Returns the percent-decoded value of cookie `name` from a raw `Cookie`
/// header (`a=1; csrftoken=xyz`). The first matching pair wins; blank values
/// count as absent.
#[must_use]
pub fn cookie_value(cookie_header: &str, name: &str) -> Option<String> {
    cookie_header
        .split(';')
        .map(str::trim)
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| percent_decode_str(value.trim()).decode_utf8_lossy().into_owned())
        .filter(|value| !value.is_empty())
}
