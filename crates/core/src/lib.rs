//! Core types for the Workstation Hub client
//!
//! Domain records, listing normalization, filter groups, tabs and
//! configuration shared by every other crate.

pub mod config;
pub mod constants;
mod collection;
mod error;
mod filter;
mod project;
mod responses;
mod tab;
mod user;

pub use collection::*;
pub use config::{env_parse_with_default, HubConfig};
pub use error::*;
pub use filter::*;
pub use project::*;
pub use responses::*;
pub use tab::*;
pub use user::*;
