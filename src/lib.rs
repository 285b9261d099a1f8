//! # dsc - Multilingual DeepSeek Chat CLI
//!
//! `dsc` is a terminal chat client for DeepSeek models served through
//! OpenAI-compatible endpoints (OpenRouter by default). Prompts and replies
//! are translated on the fly between a small set of display languages, so
//! you can chat in Polish, German or Hindi against an English-speaking
//! model.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start a chat session (English display)
//! dsc
//!
//! # Chat in Polish
//! dsc --to pl
//!
//! # List display languages
//! dsc languages
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/dsc/config.toml`:
//!
//! ```toml
//! [dsc]
//! endpoint = "https://openrouter.ai/api/v1"
//! model = "deepseek/deepseek-chat:free"
//! language = "en"
//! api_key_env = "OPENAI_API_KEY"
//! ```
//!
//! The API key itself is read from the environment at startup; it never
//! lives in the config file.

/// Interactive chat mode (REPL shell and slash commands).
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Chat-completion adapter for OpenAI-compatible endpoints.
pub mod completion;

/// Configuration file management.
pub mod config;

/// Error types for the chat session and its adapters.
pub mod error;

/// Plain-text transcript export.
pub mod export;

/// File system utilities.
pub mod fs;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Turn orchestration across the translation and completion adapters.
pub mod pipeline;

/// In-memory chat session state.
pub mod session;

/// Translation adapter and the display language table.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
