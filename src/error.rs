//! Error types for the chat session and its remote adapters.

/// Failure modes for session mutation and the two remote services.
///
/// `InvalidRole` and `UnsupportedLanguage` are local validation failures and
/// indicate a caller defect. The remaining variants are remote-dependency
/// failures: they abandon the current turn at the point of failure and are
/// surfaced inline without tearing down the session.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// A role string outside {system, user, assistant}.
    #[error("invalid message role: '{0}'")]
    InvalidRole(String),

    /// A language code outside the display language table.
    #[error("unsupported language code: '{0}'")]
    UnsupportedLanguage(String),

    /// The translation service could not be reached or answered garbage.
    #[error("translation service error: {message}")]
    Translation {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The completion service could not be reached or rejected the request.
    #[error("completion service error: {message}")]
    Completion {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The completion call succeeded but carried no usable choice.
    #[error("completion service returned no content")]
    EmptyResponse,
}

/// Result type for chat operations.
pub type ChatResult<T> = Result<T, ChatError>;

impl ChatError {
    /// A translation failure without an underlying transport error.
    pub fn translation(message: impl Into<String>) -> Self {
        Self::Translation {
            message: message.into(),
            source: None,
        }
    }

    /// A completion failure without an underlying transport error.
    pub fn completion(message: impl Into<String>) -> Self {
        Self::Completion {
            message: message.into(),
            source: None,
        }
    }
}
