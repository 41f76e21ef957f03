//! Model seam for the Listing Fetcher.
//!
//! The generative endpoint is treated as a black-box function
//! `prompt -> (json text, citations)` behind this trait, so it can be
//! swapped or mocked in tests without touching the fetcher.

use async_trait::async_trait;

/// Errors crossing the model seam. Implementations surface whatever
/// their transport produced; the fetcher logs it and collapses it.
pub type ModelError = Box<dyn std::error::Error + Send + Sync>;

/// A search-grounded generative model returning structured JSON.
#[async_trait]
pub trait MarketModel: Send + Sync {
    /// Run one extraction: send the prompt, return the raw JSON text
    /// plus whatever citation metadata the service attached.
    async fn extract(&self, prompt: &str) -> Result<ModelReply, ModelError>;
}

/// The raw reply of one model call.
#[derive(Debug, Clone)]
pub struct ModelReply {
    /// The model's text output, expected to be a JSON document
    pub text: String,

    /// Citation units in the order the service returned them
    pub citations: Vec<GroundingChunk>,
}

impl ModelReply {
    /// A reply with text only and no citations.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            citations: Vec::new(),
        }
    }

    /// Attach a web-backed citation.
    pub fn with_web_citation(mut self, title: impl Into<String>, uri: impl Into<String>) -> Self {
        self.citations.push(GroundingChunk {
            web: Some(WebRef {
                title: title.into(),
                uri: uri.into(),
            }),
        });
        self
    }

    /// Attach a citation that references no web resource.
    pub fn with_opaque_citation(mut self) -> Self {
        self.citations.push(GroundingChunk { web: None });
        self
    }
}

/// A citation unit; only web-backed chunks carry `web`.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundingChunk {
    pub web: Option<WebRef>,
}

/// A web resource referenced by a grounding chunk.
#[derive(Debug, Clone, PartialEq)]
pub struct WebRef {
    pub title: String,
    pub uri: String,
}
