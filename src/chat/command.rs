use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/config", "Show current configuration"),
    ("/export", "Save the chat to a text file"),
    ("/help", "Show available commands"),
    ("/lang", "Switch the display language"),
    ("/quit", "Exit the chat"),
    ("/reset", "Start the conversation over"),
    ("/transcript", "Show the conversation so far"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone)]
pub enum SlashCommand {
    Config,
    Export(Option<String>),
    Help,
    Lang(Option<String>),
    Quit,
    Reset,
    Transcript,
    Unknown(String),
}

/// Input types
#[derive(Debug)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let parts: Vec<&str> = cmd.split_whitespace().collect();
    let argument = parts.get(1).map(|s| (*s).to_string());

    match parts.first().copied() {
        Some("config") => Input::Command(SlashCommand::Config),
        Some("export" | "save") => Input::Command(SlashCommand::Export(argument)),
        Some("help") => Input::Command(SlashCommand::Help),
        Some("lang" | "language") => Input::Command(SlashCommand::Lang(argument)),
        Some("quit" | "exit" | "q") => Input::Command(SlashCommand::Quit),
        Some("reset") => Input::Command(SlashCommand::Reset),
        Some("transcript" | "history") => Input::Command(SlashCommand::Transcript),
        _ => Input::Command(SlashCommand::Unknown(parts.join(" "))),
    }
}
