//! Translation adapter and the display language table.

mod client;
mod language;

pub use client::GoogleTranslateClient;
pub use language::{Language, print_languages};

use async_trait::async_trait;

use crate::error::ChatResult;

/// A third-party translation capability.
///
/// One attempt per call, no retry; the caller decides whether a failure is
/// fatal to the current turn.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translates `text` into `target`, auto-detecting the source language.
    ///
    /// When the detected source already matches `target` the result is
    /// semantically the input text.
    async fn translate(&self, text: &str, target: Language) -> ChatResult<String>;
}
