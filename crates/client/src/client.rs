use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, COOKIE};
use serde::de::DeserializeOwned;
use workstation_core::constants::{
    CSRF_COOKIE_NAME, CSRF_HEADER_NAME, PROJECTS_ENDPOINT, UNREAD_COUNT_ENDPOINT, USERS_ENDPOINT,
};
use workstation_core::{
    Collection, HubConfig, Page, ProjectSummary, SupportResponse, UnreadCount, UserSummary,
};

use crate::csrf::cookie_value;
use crate::endpoints::{with_query, SupportEndpoint};
use crate::error::ClientError;

/// Longest body excerpt carried in error messages.
const ERROR_BODY_EXCERPT: usize = 200;

/// Client for the Workstation Hub JSON API.
///
/// Every request carries the configured cookie header so the backend sees the
/// same session as the browser. Mutating requests also carry the CSRF token
/// taken from the `csrftoken` cookie.
pub struct ApiClient {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) cookie_header: Option<String>,
    pub(crate) csrf_token: Option<String>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("client", &self.client)
            .field("base_url", &self.base_url)
            .field("cookie_header", &self.cookie_header.as_ref().map(|_| "***"))
            .field("csrf_token", &self.csrf_token.as_ref().map(|_| "***"))
            .finish()
    }
}

impl ApiClient {
    /// Creates a client from the shared configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(config: &HubConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ClientError::ClientInit(e.to_string()))?;
        let cookie_header = config.cookie_header.clone();
        let csrf_token =
            cookie_header.as_deref().and_then(|header| cookie_value(header, CSRF_COOKIE_NAME));
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            cookie_header,
            csrf_token,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn has_csrf_token(&self) -> bool {
        self.csrf_token.is_some()
    }

    /// Sends one request and decodes the JSON answer.
    ///
    /// # Errors
    /// Returns an error if the URL is malformed, the CSRF cookie is missing on
    /// a mutating request, the request fails, the status is not a success, or
    /// the body cannot be decoded as `T`.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<T, ClientError> {
        let url = self.resolve(path)?;
        let mut request = self.client.request(method.clone(), url);

        if let Some(cookies) = self.cookie_header.as_deref() {
            request = request.header(COOKIE, cookies);
        }

        if method != Method::GET {
            let Some(token) = self.csrf_token.as_deref() else {
                tracing::warn!(%method, path, "refusing mutating request without CSRF cookie");
                return Err(ClientError::MissingCsrfToken);
            };
            request =
                request.header(CSRF_HEADER_NAME, token).header(CONTENT_TYPE, "application/json");
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(%method, path, "sending request");
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Status {
                code: status.as_u16(),
                body: excerpt(&text, ERROR_BODY_EXCERPT).to_owned(),
            });
        }

        serde_json::from_str(&text).map_err(|source| ClientError::Decode {
            context: format!("{method} {path} (body: {})", excerpt(&text, ERROR_BODY_EXCERPT)),
            source,
        })
    }

    /// Fetches a listing, accepting both the bare-array and page-object shapes.
    ///
    /// # Errors
    /// Same as [`ApiClient::fetch_json`].
    pub async fn fetch_collection<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Page<T>, ClientError> {
        let collection: Collection<T> = self.fetch_json(Method::GET, path, None).await?;
        Ok(collection.into_page())
    }

    /// # Errors
    /// Same as [`ApiClient::fetch_json`].
    pub async fn fetch_projects(
        &self,
        params: &[(&str, &str)],
    ) -> Result<Page<ProjectSummary>, ClientError> {
        self.fetch_collection(&with_query(PROJECTS_ENDPOINT, params.iter().copied())).await
    }

    /// # Errors
    /// Same as [`ApiClient::fetch_json`].
    pub async fn fetch_users(
        &self,
        params: &[(&str, &str)],
    ) -> Result<Page<UserSummary>, ClientError> {
        self.fetch_collection(&with_query(USERS_ENDPOINT, params.iter().copied())).await
    }

    /// Toggles the caller's support for a project.
    ///
    /// # Errors
    /// Same as [`ApiClient::fetch_json`]; fails before sending when there is no
    /// CSRF cookie.
    pub async fn toggle_support(
        &self,
        slug: &str,
        endpoint: SupportEndpoint,
    ) -> Result<SupportResponse, ClientError> {
        self.fetch_json(Method::POST, &endpoint.path(slug), None).await
    }

    /// # Errors
    /// Same as [`ApiClient::fetch_json`].
    pub async fn unread_notifications(&self) -> Result<u64, ClientError> {
        let body: UnreadCount = self.fetch_json(Method::GET, UNREAD_COUNT_ENDPOINT, None).await?;
        Ok(body.unread_count)
    }

    fn resolve(&self, path: &str) -> Result<reqwest::Url, ClientError> {
        let raw = format!("{}{}", self.base_url, path);
        reqwest::Url::parse(&raw)
            .map_err(|e| ClientError::InvalidUrl { url: raw, reason: e.to_string() })
    }
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn excerpt(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end = end.saturating_sub(1);
    }
    s.get(..end).unwrap_or("")
}
