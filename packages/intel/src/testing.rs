//! Testing utilities including a mock model.
//!
//! Useful for testing the fetcher and anything built on it without
//! making real model calls.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::traits::{MarketModel, ModelError, ModelReply};

/// A mock market model returning a canned reply.
///
/// Records every prompt it receives so tests can assert on what the
/// fetcher sent.
#[derive(Clone)]
pub struct MockModel {
    reply: Arc<RwLock<Result<ModelReply, String>>>,
    prompts: Arc<RwLock<Vec<String>>>,
}

impl MockModel {
    /// A mock that answers every call with `reply`.
    pub fn returning(reply: ModelReply) -> Self {
        Self {
            reply: Arc::new(RwLock::new(Ok(reply))),
            prompts: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// A mock whose reply text is `text`, with no citations.
    pub fn returning_text(text: impl Into<String>) -> Self {
        Self::returning(ModelReply::from_text(text))
    }

    /// A mock that fails every call with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Arc::new(RwLock::new(Err(message.into()))),
            prompts: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.read().unwrap().clone()
    }
}

#[async_trait]
impl MarketModel for MockModel {
    async fn extract(&self, prompt: &str) -> Result<ModelReply, ModelError> {
        self.prompts.write().unwrap().push(prompt.to_string());
        match &*self.reply.read().unwrap() {
            Ok(reply) => Ok(reply.clone()),
            Err(message) => Err(message.clone().into()),
        }
    }
}
