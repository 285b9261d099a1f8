use std::borrow::Cow;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::CompletionBackend;
use crate::error::{ChatError, ChatResult};
use crate::session::Message;

/// OpenRouter API base URL.
pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1";

/// Default completion model identifier.
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-chat:free";

/// Attribution header value sent to OpenRouter.
const APP_TITLE: &str = "dsc";

// Use Cow to avoid cloning history content that is only borrowed for
// serialization
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Non-streaming client for an OpenAI-compatible `/chat/completions`
/// endpoint.
///
/// A missing API key is not validated locally; the remote service answers
/// with an authentication error instead.
pub struct CompletionClient {
    http: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl CompletionClient {
    pub fn new(endpoint: String, model: String, api_key: Option<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint,
            model,
            api_key,
        }
    }
}

#[async_trait]
impl CompletionBackend for CompletionClient {
    async fn complete(&self, history: &[Message]) -> ChatResult<String> {
        let url = format!("{}/chat/completions", self.endpoint.trim_end_matches('/'));

        let request = ChatCompletionRequest {
            model: &self.model,
            messages: history
                .iter()
                .map(|message| WireMessage {
                    role: message.role.as_str(),
                    content: Cow::Borrowed(message.content.as_str()),
                })
                .collect(),
        };

        let mut http_request = self
            .http
            .post(&url)
            .header("X-Title", APP_TITLE)
            .json(&request);

        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = http_request
            .send()
            .await
            .map_err(|e| ChatError::Completion {
                message: format!("failed to reach {url}"),
                source: Some(e),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::completion(format!(
                "request failed with status {status}: {body}"
            )));
        }

        let payload: ChatCompletionResponse =
            response.json().await.map_err(|e| ChatError::Completion {
                message: "response was not valid JSON".to_string(),
                source: Some(e),
            })?;

        first_choice(payload)
    }
}

/// Consumes the first choice's content; anything less is an empty response.
fn first_choice(payload: ChatCompletionResponse) -> ChatResult<String> {
    payload
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.is_empty())
        .ok_or(ChatError::EmptyResponse)
}
