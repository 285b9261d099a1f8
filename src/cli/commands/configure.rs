//! Configure command handler for editing default settings.

use anyhow::Result;
use inquire::{Select, Text};

use crate::completion;
use crate::config::{ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV, DscConfig};
use crate::translation::Language;
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the current settings; otherwise interactively edits
/// the endpoint, model, default display language and API key variable.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        let manager = ConfigManager::new();
        print_current_settings(&manager);
        return Ok(());
    }

    handle_prompt_cancellation(run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new();
    let config = manager.load_or_default();

    print_current_settings(&manager);

    let endpoint = prompt_endpoint(config.dsc.endpoint.as_deref())?;
    let model = prompt_model(config.dsc.model.as_deref())?;
    let language = select_language(config.dsc.language.as_deref())?;
    let api_key_env = prompt_api_key_env(config.dsc.api_key_env.as_deref())?;

    let config = ConfigFile {
        dsc: DscConfig {
            endpoint: Some(endpoint),
            model: Some(model),
            language: Some(language),
            api_key_env: Some(api_key_env),
        },
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_current_settings(manager: &ConfigManager) {
    let config = manager.load_or_default();

    println!("{}", Style::header("Current settings"));
    println!(
        "  {}     {}",
        Style::label("endpoint"),
        config
            .dsc
            .endpoint
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}        {}",
        Style::label("model"),
        config
            .dsc
            .model
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}     {}",
        Style::label("language"),
        config
            .dsc
            .language
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("api key env"),
        config
            .dsc
            .api_key_env
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!();
}

fn prompt_endpoint(default: Option<&str>) -> Result<String> {
    let endpoint = Text::new("API endpoint:")
        .with_default(default.unwrap_or(completion::DEFAULT_ENDPOINT))
        .with_help_message("OpenAI-compatible base URL")
        .prompt()?;

    Ok(endpoint.trim().to_string())
}

fn prompt_model(default: Option<&str>) -> Result<String> {
    let model = Text::new("Model:")
        .with_default(default.unwrap_or(completion::DEFAULT_MODEL))
        .prompt()?;

    Ok(model.trim().to_string())
}

fn select_language(default: Option<&str>) -> Result<String> {
    // Build options with format "code - Name"
    let options: Vec<String> = Language::ALL
        .iter()
        .map(|language| format!("{} - {}", language.code(), language.name()))
        .collect();

    let default_index = default
        .and_then(|d| Language::ALL.iter().position(|l| l.code() == d))
        .unwrap_or(0);

    let selection = Select::new("Default display language:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    // Extract code from "code - Name" format
    let code = selection.split(" - ").next().unwrap_or(&selection);

    Ok(code.to_string())
}

fn prompt_api_key_env(default: Option<&str>) -> Result<String> {
    let env_var = Text::new("API key environment variable:")
        .with_default(default.unwrap_or(DEFAULT_API_KEY_ENV))
        .with_help_message("The key itself never goes in the config file")
        .prompt()?;

    Ok(env_var.trim().to_string())
}
