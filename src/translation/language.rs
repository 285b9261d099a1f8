//! The display language table.

use std::fmt;

use crate::error::{ChatError, ChatResult};
use crate::ui::Style;

/// A display language (ISO 639-1 code).
///
/// English is the completion model's working language and the default
/// display language. Adding a language means adding a variant here and a
/// row in `code`/`name`; nothing else changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Pl,
    De,
    Hi,
}

impl Language {
    /// Every selectable display language.
    pub const ALL: &'static [Self] = &[Self::En, Self::Pl, Self::De, Self::Hi];

    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pl => "pl",
            Self::De => "de",
            Self::Hi => "hi",
        }
    }

    /// Human-readable name used in prompts, transcript labels and exports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Pl => "Polish",
            Self::De => "German",
            Self::Hi => "Hindi",
        }
    }

    /// Looks a language up by its code.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::UnsupportedLanguage`] if the code is not in the
    /// table.
    pub fn from_code(code: &str) -> ChatResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|language| language.code() == code)
            .ok_or_else(|| ChatError::UnsupportedLanguage(code.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Prints all display languages to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Display languages"));
    for language in Language::ALL {
        println!(
            "  {:5} {}",
            Style::code(language.code()),
            Style::secondary(language.name())
        );
    }
}
