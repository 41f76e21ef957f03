//! Market intelligence extraction for Whop product listings.
//!
//! One query, one round trip to a search-grounded generative model,
//! one immutable [`Listing`] record back. The model endpoint sits
//! behind the [`MarketModel`] trait so it can be swapped or mocked.
//!
//! # Example
//!
//! ```rust,ignore
//! use intel::{GeminiModel, ListingFetcher};
//!
//! let fetcher = ListingFetcher::new(GeminiModel::from_env()?);
//! let listing = fetcher.fetch("https://whop.com/some-product").await?;
//! println!("{} ({}%)", listing.name, listing.confidence_score);
//! ```
//!
//! Built without the `fetch` feature the crate is types-only, which
//! keeps wasm frontend builds free of the HTTP stack.

pub mod error;
pub mod types;

#[cfg(feature = "fetch")]
pub mod fetcher;
#[cfg(feature = "fetch")]
pub mod model;
#[cfg(feature = "fetch")]
pub mod prompts;
#[cfg(feature = "fetch")]
pub mod testing;
#[cfg(feature = "fetch")]
pub mod traits;

pub use error::{IntelError, Result};
pub use types::{
    Competitor, ExtractedListing, Listing, Plan, SentimentBreakdown, SourceLink,
};

#[cfg(feature = "fetch")]
pub use fetcher::ListingFetcher;
#[cfg(feature = "fetch")]
pub use model::GeminiModel;
#[cfg(feature = "fetch")]
pub use traits::{GroundingChunk, MarketModel, ModelError, ModelReply, WebRef};
