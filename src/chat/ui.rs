//! Chat mode UI components.

use crate::pipeline::RenderedMessage;
use crate::session::Role;
use crate::translation::Language;
use crate::ui::Style;

use super::shell::ShellConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - DeepSeek Chat",
        Style::header("dsc"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(config: &ShellConfig, language: Language) {
    let key_status = if config.key_present {
        Style::success("set")
    } else {
        Style::warning(format!("not set ({} is empty)", config.api_key_env))
    };

    println!("{}", Style::header("Configuration"));
    println!(
        "  {}      {}",
        Style::label("model"),
        Style::value(&config.model)
    );
    println!(
        "  {}   {} ({})",
        Style::label("language"),
        Style::value(language.name()),
        language.code()
    );
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!("  {}    {}", Style::label("api key"), key_status);
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}        {}",
        Style::command("/lang <code>"),
        Style::secondary("Switch the display language (en, pl, de, hi)")
    );
    println!(
        "  {}          {}",
        Style::command("/transcript"),
        Style::secondary("Show the conversation so far")
    );
    println!(
        "  {}               {}",
        Style::command("/reset"),
        Style::secondary("Start the conversation over")
    );
    println!(
        "  {}       {}",
        Style::command("/export [file]"),
        Style::secondary("Save the chat to a text file")
    );
    println!(
        "  {}              {}",
        Style::command("/config"),
        Style::secondary("Show current configuration")
    );
    println!(
        "  {}                {}",
        Style::command("/help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}                {}",
        Style::command("/quit"),
        Style::secondary("Exit the chat")
    );
    println!();
}

pub fn print_reply(language: Language, reply: &str) {
    println!(
        "{} {reply}",
        Style::speaker(format!("DeepSeek ({}):", language.name()))
    );
    println!();
}

pub fn print_transcript(language: Language, lines: &[RenderedMessage]) {
    println!("{}", Style::header("Conversation"));
    for line in lines {
        let speaker = match line.role {
            Role::Assistant => "DeepSeek",
            Role::System | Role::User => "You",
        };
        println!(
            "{} {}",
            Style::speaker(format!("{speaker} ({}):", language.name())),
            line.content
        );
    }
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
