//! Backend paths consumed by the client.

use workstation_core::project_path;

/// Which of the two support endpoints a toggle goes to.
///
/// Both toggle the same supporter relation. The page endpoint answers
/// `{success, supported, supporters_count}`, the API endpoint
/// `{supported, supporters_count}`. They are kept apart until the backend
/// confirms they are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportEndpoint {
    /// `/projects/<slug>/support/`, used by the card "Support" button
    Page,
    /// `/api/projects/<slug>/support/`, used by the card bookmark button
    Api,
}

impl SupportEndpoint {
    #[must_use]
    pub fn path(&self, slug: &str) -> String {
        match self {
            Self::Page => format!("{}support/", project_path(slug)),
            Self::Api => format!("/api{}support/", project_path(slug)),
        }
    }
}

/// Appends URL-encoded `pairs` to `path`. Repeated keys are kept in order.
pub fn with_query<'a, I>(path: &str, pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    let mut appended = 0usize;
    for (key, value) in pairs {
        serializer.append_pair(key, value);
        appended = appended.saturating_add(1);
    }
    if appended == 0 {
        return path.to_owned();
    }
    format!("{path}?{}", serializer.finish())
}
