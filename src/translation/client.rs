use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::{Language, Translator};
use crate::error::{ChatError, ChatResult};

const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Client for the public Google translate endpoint (`client=gtx`).
///
/// The service auto-detects the source language, so translating text that
/// is already in the target language passes it through unchanged.
pub struct GoogleTranslateClient {
    http: Client,
    endpoint: String,
}

impl GoogleTranslateClient {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT.to_string())
    }

    pub fn with_endpoint(endpoint: String) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }
}

impl Default for GoogleTranslateClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Translator for GoogleTranslateClient {
    async fn translate(&self, text: &str, target: Language) -> ChatResult<String> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target.code()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| ChatError::Translation {
                message: format!("failed to reach {}", self.endpoint),
                source: Some(e),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(ChatError::translation(format!(
                "request failed with status {status}"
            )));
        }

        let payload: Value = response.json().await.map_err(|e| ChatError::Translation {
            message: "response was not valid JSON".to_string(),
            source: Some(e),
        })?;

        parse_translation(&payload)
    }
}

/// Extracts the translated text from a `translate_a/single` payload.
///
/// The payload is a nested array; element 0 holds one entry per translated
/// segment with the segment text at index 0.
fn parse_translation(payload: &Value) -> ChatResult<String> {
    let segments = payload
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| ChatError::translation("unexpected response shape"))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        return Err(ChatError::translation("response contained no segments"));
    }

    Ok(translated)
}
