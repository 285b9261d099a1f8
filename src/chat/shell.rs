use std::path::PathBuf;

use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::export;
use crate::pipeline::ChatPipeline;
use crate::session::Session;
use crate::translation::Language;
use crate::ui::{Spinner, Style};

/// Connection details shown by `/config`.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// The API endpoint URL.
    pub endpoint: String,
    /// The completion model.
    pub model: String,
    /// The environment variable the API key is read from.
    pub api_key_env: String,
    /// Whether that variable held a key at startup.
    pub key_present: bool,
}

/// The interactive chat surface.
///
/// Owns the session and drives the pipeline one turn at a time; remote
/// failures are printed inline and the loop keeps going.
pub struct ChatShell {
    session: Session,
    pipeline: ChatPipeline,
    config: ShellConfig,
}

impl ChatShell {
    /// Creates a shell around a fresh session in the given display language.
    pub fn new(pipeline: ChatPipeline, language: Language, config: ShellConfig) -> Self {
        let mut session = Session::new();
        session.set_language(language);
        Self {
            session,
            pipeline,
            config,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let prompt_label = format!("You ({})", self.session.language().name());
            let input = Text::new(&prompt_label)
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Ask anything, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd).await {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.run_turn(&text).await;
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Runs one turn. A failed turn is reported inline; whatever was
    /// appended before the failure stays in the session.
    async fn run_turn(&mut self, text: &str) {
        let spinner = Spinner::thinking();
        let result = self.pipeline.submit(&mut self.session, text).await;
        spinner.stop();

        match result {
            Ok(Some(reply)) => ui::print_reply(self.session.language(), &reply),
            Ok(None) => {}
            Err(e) => ui::print_error(&e.to_string()),
        }
    }

    async fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => {
                ui::print_config(&self.config, self.session.language());
            }
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Quit => return false,
            SlashCommand::Lang(code) => self.set_language(code.as_deref()),
            SlashCommand::Transcript => self.show_transcript().await,
            SlashCommand::Reset => {
                self.session.reset();
                println!("{} Chat reset\n", Style::success("✓"));
            }
            SlashCommand::Export(path) => self.export_transcript(path.as_deref()),
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
            }
        }
        true
    }

    fn set_language(&mut self, code: Option<&str>) {
        let Some(code) = code else {
            println!("Usage: /lang <code>");
            let codes: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
            println!("Codes: {}", codes.join(", "));
            return;
        };

        match Language::from_code(code) {
            Ok(language) => {
                self.session.set_language(language);
                println!(
                    "{} Language set to {}\n",
                    Style::success("✓"),
                    Style::value(language.name())
                );
            }
            Err(e) => ui::print_error(&e.to_string()),
        }
    }

    async fn show_transcript(&self) {
        if self.session.is_empty() {
            println!("{}\n", Style::secondary("No messages yet."));
            return;
        }

        let spinner = Spinner::new("Translating...");
        let rendered = self.pipeline.render(&self.session).await;
        spinner.stop();

        match rendered {
            Ok(lines) => ui::print_transcript(self.session.language(), &lines),
            Err(e) => ui::print_error(&e.to_string()),
        }
    }

    fn export_transcript(&self, path: Option<&str>) {
        if self.session.is_empty() {
            println!("{}\n", Style::secondary("Nothing to export yet."));
            return;
        }

        let path = path.map_or_else(|| PathBuf::from(export::EXPORT_FILE_NAME), PathBuf::from);

        match export::write_transcript(&self.session, &path) {
            Ok(()) => println!(
                "{} Chat saved to {}\n",
                Style::success("✓"),
                Style::secondary(path.display().to_string())
            ),
            Err(e) => ui::print_error(&e.to_string()),
        }
    }
}
