use thiserror::Error;

/// Errors raised while building or decoding Workstation Hub domain values
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown filter category: {0}")]
    UnknownFilterCategory(String),

    #[error("Invalid location: {0}")]
    InvalidLocation(String),
}
