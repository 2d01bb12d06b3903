//! Matchboard Marketplace Crate
//!
//! This crate models the marketplace API's response contract and provides
//! the HTTP client the rest of the application polls through.
//!
//! # Overview
//!
//! The marketplace server owns the wish and offer collections and computes
//! matches between them. Clients see matches only through the records
//! themselves: each wish embeds the offers it matched, each offer embeds the
//! wishes. This crate covers:
//!
//! - [`WishRecord`] / [`OfferRecord`] - the response models
//! - [`MarketplaceApi`] - the read seam orchestration code depends on
//! - [`HttpMarketplaceClient`] - the reqwest implementation
//! - [`MarketplaceError`] - error taxonomy for API operations

pub mod client;
pub mod errors;
pub mod models;

// Re-export the public surface
pub use client::{HttpMarketplaceClient, MarketplaceApi, DEFAULT_MARKETPLACE_API_URL};
pub use errors::MarketplaceError;
pub use models::{ListingId, OfferRecord, WishRecord};
