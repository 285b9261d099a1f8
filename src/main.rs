use anyhow::{Context, Result};
use clap::Parser;

use dsc_cli::cli::commands::{chat, configure};
use dsc_cli::cli::{Args, Command};
use dsc_cli::translation::{Language, print_languages};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        None => {
            if let Some(ref code) = args.to {
                Language::from_code(code)
                    .with_context(|| "Run 'dsc languages' to see supported codes")?;
            }

            let options = chat::ChatOptions {
                to: args.to,
                endpoint: args.endpoint,
                model: args.model,
            };
            chat::run_chat(options).await?;
        }
    }

    Ok(())
}
