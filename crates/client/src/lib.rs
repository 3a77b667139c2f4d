//! HTTP adapter for the Workstation Hub backend
//!
//! Wraps `reqwest` with the conventions the backend expects: session cookie
//! on every call, `X-CSRFToken` on mutating calls, listings normalized into
//! [`workstation_core::Page`].

mod client;
mod csrf;
mod endpoints;
pub mod error;


pub use client::{excerpt, ApiClient};
pub use csrf::cookie_value;
pub use endpoints::{with_query, SupportEndpoint};
pub use error::ClientError;
pub use reqwest::Method;
