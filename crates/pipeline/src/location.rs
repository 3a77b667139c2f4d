//! Current page address: the path that navigations stay on and the query
//! parameters that listings inherit.

use std::fmt;

use url::form_urlencoded;
use workstation_core::CoreError;

/// Path and decoded query of the page hosting the listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLocation {
    path: String,
    query: Vec<(String, String)>,
}

impl PageLocation {
    /// Parses `/explore/?stage=idea` or an absolute `https://host/explore/?..`.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidLocation`] for an absolute URL that does not
    /// parse, or a relative one that does not start with `/`.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let raw = raw.trim();
        if raw.contains("://") {
            let url = url::Url::parse(raw)
                .map_err(|e| CoreError::InvalidLocation(format!("{raw}: {e}")))?;
            return Ok(Self::from_parts(url.path(), url.query().unwrap_or_default()));
        }
        if raw.is_empty() {
            return Ok(Self::new("/"));
        }
        if !raw.starts_with('/') {
            return Err(CoreError::InvalidLocation(format!("{raw}: path must start with '/'")));
        }
        let without_fragment = raw.split_once('#').map_or(raw, |(head, _)| head);
        let (path, query) = without_fragment.split_once('?').unwrap_or((without_fragment, ""));
        Ok(Self::from_parts(path, query))
    }

    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), query: Vec::new() }
    }

    fn from_parts(path: &str, query: &str) -> Self {
        let query = form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { path: if path.is_empty() { "/".to_owned() } else { path.to_owned() }, query }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Decoded query pairs in page order.
    pub fn query_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.query.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.query.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Sets `key` to `value`: the first occurrence is overwritten and later
    /// ones dropped, or the pair is appended when absent.
    #[must_use]
    pub fn with_param(mut self, key: &str, value: &str) -> Self {
        let mut seen = false;
        self.query.retain_mut(|(k, v)| {
            if k != key {
                return true;
            }
            if seen {
                return false;
            }
            seen = true;
            value.clone_into(v);
            true
        });
        if !seen {
            self.query.push((key.to_owned(), value.to_owned()));
        }
        self
    }

    /// Encoded query string without the leading `?`.
    #[must_use]
    pub fn encoded_query(&self) -> String {
        encode_pairs(self.query_pairs())
    }

    /// Navigation target on this page's path with the given encoded query.
    #[must_use]
    pub fn target_with_query(&self, encoded_query: &str) -> String {
        format!("{}?{encoded_query}", self.path)
    }
}

impl fmt::Display for PageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.query.is_empty() {
            f.write_str(&self.path)
        } else {
            write!(f, "{}?{}", self.path, self.encoded_query())
        }
    }
}

/// `application/x-www-form-urlencoded` serialization, keys kept in order.
pub fn encode_pairs<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    form_urlencoded::Serializer::new(String::new()).extend_pairs(pairs).finish()
}
