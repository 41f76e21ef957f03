//! Gemini implementation of the `MarketModel` trait.
//!
//! One `generateContent` call per extraction: Google Search grounding
//! enabled and output constrained to the `ExtractedListing` schema.

use async_trait::async_trait;

use gemini_client::{GeminiClient, GenerateContentRequest, GeminiError, StructuredOutput};

use crate::traits::{GroundingChunk, MarketModel, ModelError, ModelReply, WebRef};
use crate::types::ExtractedListing;

/// Gemini-backed market model.
#[derive(Clone)]
pub struct GeminiModel {
    client: GeminiClient,
}

impl GeminiModel {
    /// Wrap an existing client.
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Create from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> gemini_client::Result<Self> {
        Ok(Self::new(GeminiClient::from_env()?))
    }
}

#[async_trait]
impl MarketModel for GeminiModel {
    async fn extract(&self, prompt: &str) -> Result<ModelReply, ModelError> {
        let request = GenerateContentRequest::from_prompt(prompt)
            .with_google_search()
            .with_json_schema(ExtractedListing::gemini_schema());

        let response = self.client.generate_content(request).await?;

        let text = response
            .text()
            .ok_or_else(|| GeminiError::Api("response has no text candidate".into()))?;

        let citations = response
            .grounding_chunks()
            .into_iter()
            .map(|chunk| GroundingChunk {
                web: chunk.web.map(|w| WebRef {
                    title: w.title,
                    uri: w.uri,
                }),
            })
            .collect();

        Ok(ModelReply { text, citations })
    }
}
