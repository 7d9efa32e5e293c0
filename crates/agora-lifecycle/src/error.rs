//! Error types for lifecycle operations.

use thiserror::Error;

/// Result type for lifecycle operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a lifecycle transition.
#[derive(Debug, Error)]
pub enum Error {
    /// API call failed
    #[error(transparent)]
    Client(#[from] agora_client::Error),

    /// The external incentive-selection call failed
    #[error(transparent)]
    Selector(#[from] crate::surface::SelectorError),
}
