use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "dsc")]
#[command(about = "Multilingual DeepSeek chat CLI")]
#[command(version)]
pub struct Args {
    /// Display language code (en, pl, de, hi)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// OpenAI-compatible API base URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Model identifier
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure dsc settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// List display language codes
    Languages,
}
