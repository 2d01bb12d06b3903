use matchboard_marketplace::MarketplaceError;
use thiserror::Error;

/// Convenience alias used across the core crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Fetching listings from the upstream marketplace failed.
    #[error("Marketplace error: {0}")]
    Marketplace(#[from] MarketplaceError),

    /// A celebration timeline failed validation.
    #[error("Invalid celebration timeline: {0}")]
    InvalidTimeline(String),

    /// Catch-all for failures that have no dedicated variant.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
