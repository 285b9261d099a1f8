//! Plain-text transcript export.

use std::path::Path;

use anyhow::{Context, Result};

use crate::fs;
use crate::session::{Role, Session};

/// Default export file name.
pub const EXPORT_FILE_NAME: &str = "deepseek_chat.txt";

/// Formats the non-system history, one line per message:
///
/// ```text
/// You (English): Hi
/// DeepSeek (English): Hello
/// ```
///
/// Stored content is written verbatim; the label carries the current
/// display language.
pub fn format_transcript(session: &Session) -> String {
    let language = session.language().name();
    session
        .turns()
        .iter()
        .map(|message| format!("{} ({language}): {}", speaker(message.role), message.content))
        .collect::<Vec<_>>()
        .join("\n")
}

const fn speaker(role: Role) -> &'static str {
    match role {
        Role::User => "You",
        Role::Assistant => "DeepSeek",
        Role::System => "System",
    }
}

/// Writes the formatted transcript to `path` as `text/plain`.
pub fn write_transcript(session: &Session, path: &Path) -> Result<()> {
    fs::atomic_write(path, &format_transcript(session))
        .with_context(|| format!("Failed to write transcript: {}", path.display()))
}
