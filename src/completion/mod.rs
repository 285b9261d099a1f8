//! Chat-completion adapter for OpenAI-compatible endpoints.

mod client;

pub use client::{CompletionClient, DEFAULT_ENDPOINT, DEFAULT_MODEL};

use async_trait::async_trait;

use crate::error::ChatResult;
use crate::session::Message;

/// A third-party chat-completion capability.
///
/// The model is stateless between calls; conversation continuity comes from
/// re-sending the full history on every call.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Sends the accumulated history and returns the first choice's content.
    ///
    /// Single blocking request, no retry, no streaming.
    async fn complete(&self, history: &[Message]) -> ChatResult<String>;
}
