//! In-memory chat session state.
//!
//! A [`Session`] owns the ordered message history and the current display
//! language. The first history entry is always the system prompt; it is
//! established at construction and survives every reset.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChatError;
use crate::translation::Language;

/// The system prompt seeding every session.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl FromStr for Role {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(Self::System),
            "user" => Ok(Self::User),
            "assistant" => Ok(Self::Assistant),
            other => Err(ChatError::InvalidRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single transcript entry. Immutable once appended; conversation order
/// is insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// One chat session: the message history plus the display language.
///
/// Mutation goes through [`Session::append`], [`Session::set_language`] and
/// [`Session::reset`] only; existing messages are never rewritten.
#[derive(Debug, Clone)]
pub struct Session {
    history: Vec<Message>,
    language: Language,
}

impl Session {
    /// Creates a session holding only the system prompt, displaying English.
    pub fn new() -> Self {
        Self {
            history: vec![Message::new(Role::System, SYSTEM_PROMPT)],
            language: Language::En,
        }
    }

    /// The full history including the system prompt, in conversation order.
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// The conversation without the leading system prompt.
    pub fn turns(&self) -> &[Message] {
        &self.history[1..]
    }

    pub const fn language(&self) -> Language {
        self.language
    }

    /// Switches the display language. Stored content is untouched; only
    /// subsequent renders translate differently.
    pub const fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn append(&mut self, role: Role, content: impl Into<String>) {
        self.history.push(Message::new(role, content));
    }

    /// Discards everything except the original system prompt and returns
    /// the display language to English. Touches no remote service.
    pub fn reset(&mut self) {
        self.history.truncate(1);
        self.language = Language::En;
    }

    /// `true` when the session holds nothing beyond the system prompt.
    pub fn is_empty(&self) -> bool {
        self.history.len() == 1
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_holds_only_system_prompt() {
        let session = Session::new();
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].role, Role::System);
        assert_eq!(session.history()[0].content, SYSTEM_PROMPT);
        assert_eq!(session.language(), Language::En);
        assert!(session.is_empty());
    }

    #[test]
    fn test_append_preserves_order() {
        let mut session = Session::new();
        session.append(Role::User, "first");
        session.append(Role::Assistant, "second");
        session.append(Role::User, "third");

        let contents: Vec<&str> = session
            .turns()
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_system_prompt_stays_first() {
        let mut session = Session::new();
        session.append(Role::User, "hello");
        session.append(Role::Assistant, "hi");
        assert_eq!(session.history()[0].role, Role::System);

        session.reset();
        assert_eq!(session.history()[0].role, Role::System);

        session.append(Role::User, "again");
        assert_eq!(session.history()[0].role, Role::System);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut session = Session::new();
        session.set_language(Language::De);
        session.append(Role::User, "hallo");
        session.append(Role::Assistant, "hallo!");

        session.reset();

        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].content, SYSTEM_PROMPT);
        assert_eq!(session.language(), Language::En);
    }

    #[test]
    fn test_set_language_keeps_stored_content() {
        let mut session = Session::new();
        session.append(Role::Assistant, "Hello");
        session.set_language(Language::Pl);
        assert_eq!(session.turns()[0].content, "Hello");
    }

    #[test]
    fn test_role_round_trip() {
        for role in [Role::System, Role::User, Role::Assistant] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_role_rejects_unknown_strings() {
        assert!(matches!(
            "moderator".parse::<Role>(),
            Err(ChatError::InvalidRole(_))
        ));
        assert!("".parse::<Role>().is_err());
        assert!("User".parse::<Role>().is_err()); // Case sensitive
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let message = Message::new(Role::Assistant, "hi");
        let json = serde_json::to_string(&message).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"hi"}"#);
    }
}
