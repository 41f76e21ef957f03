//! The Listing Fetcher.
//!
//! One fetch is one round trip: compose the prompt, call the model,
//! parse the reply strictly, filter citations, assemble the `Listing`.
//! No retries, no caching, no rate limiting, no cancellation.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{IntelError, Result};
use crate::prompts;
use crate::traits::{GroundingChunk, MarketModel};
use crate::types::{ExtractedListing, Listing, SourceLink};

/// Fetches one market-intelligence record per query.
#[derive(Clone)]
pub struct ListingFetcher {
    model: Arc<dyn MarketModel>,
}

impl ListingFetcher {
    /// Create a fetcher over the given model.
    pub fn new(model: impl MarketModel + 'static) -> Self {
        Self {
            model: Arc::new(model),
        }
    }

    /// Create a fetcher from an already-shared model.
    pub fn from_arc(model: Arc<dyn MarketModel>) -> Self {
        Self { model }
    }

    /// Fetch the market-intelligence record for a query.
    ///
    /// The query is either a free-form product name or a URL-like
    /// string; no format validation is performed. Every upstream
    /// failure is logged and re-signaled as the single
    /// `IntelError::DataBlock`.
    pub async fn fetch(&self, query: &str) -> Result<Listing> {
        info!(%query, "fetching listing intelligence");

        let prompt = prompts::extraction_prompt(query);

        let reply = match self.model.extract(&prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, %query, "model call failed");
                return Err(IntelError::DataBlock);
            }
        };

        // Strict parse: no fallback extraction, no partial recovery.
        let extraction: ExtractedListing = match serde_json::from_str(&reply.text) {
            Ok(extraction) => extraction,
            Err(e) => {
                warn!(error = %e, %query, "model returned non-conforming JSON");
                return Err(IntelError::DataBlock);
            }
        };

        let sources = filter_sources(reply.citations);
        info!(name = %extraction.name, sources = sources.len(), "listing extracted");

        Ok(assemble_listing(extraction, query, sources))
    }
}

/// Derive the human-readable `url` field from the raw query.
///
/// URL-like queries (prefix check only) pass through verbatim; anything
/// else is labeled as a search.
pub fn derive_url(query: &str) -> String {
    if query.starts_with("http") {
        query.to_string()
    } else {
        format!("Search: {query}")
    }
}

/// Keep only web-backed citation chunks, in service order, duplicates
/// included.
pub fn filter_sources(citations: Vec<GroundingChunk>) -> Vec<SourceLink> {
    citations
        .into_iter()
        .filter_map(|chunk| chunk.web)
        .map(|web| SourceLink {
            title: web.title,
            uri: web.uri,
        })
        .collect()
}

/// Merge the parsed extraction with the fetch-time fields.
fn assemble_listing(
    extraction: ExtractedListing,
    query: &str,
    sources: Vec<SourceLink>,
) -> Listing {
    Listing {
        id: Uuid::new_v4().to_string(),
        name: extraction.name,
        url: derive_url(query),
        creator: extraction.creator,
        category: extraction.category,
        plans: extraction.plans,
        description: extraction.description,
        features: extraction.features,
        sentiment_score: extraction.sentiment_score,
        sentiment_breakdown: extraction.sentiment_breakdown,
        competitors: extraction.competitors,
        growth_potential: extraction.growth_potential,
        pros: extraction.pros,
        cons: extraction.cons,
        confidence_score: extraction.confidence_score,
        extracted_at: Utc::now(),
        sources,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::WebRef;

    #[test]
    fn url_passes_through_for_url_like_queries() {
        assert_eq!(derive_url("https://whop.com/x"), "https://whop.com/x");
    }

    #[test]
    fn url_is_labeled_for_product_names() {
        assert_eq!(derive_url("Some Product"), "Search: Some Product");
    }

    #[test]
    fn filter_keeps_web_chunks_in_order() {
        let chunks = vec![
            GroundingChunk {
                web: Some(WebRef {
                    title: "A".into(),
                    uri: "u1".into(),
                }),
            },
            GroundingChunk { web: None },
            GroundingChunk {
                web: Some(WebRef {
                    title: "B".into(),
                    uri: "u2".into(),
                }),
            },
        ];

        let sources = filter_sources(chunks);
        assert_eq!(
            sources,
            vec![
                SourceLink {
                    title: "A".into(),
                    uri: "u1".into()
                },
                SourceLink {
                    title: "B".into(),
                    uri: "u2".into()
                },
            ]
        );
    }

    #[test]
    fn filter_does_not_deduplicate() {
        let chunk = GroundingChunk {
            web: Some(WebRef {
                title: "A".into(),
                uri: "u1".into(),
            }),
        };
        let sources = filter_sources(vec![chunk.clone(), chunk]);
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0], sources[1]);
    }
}
