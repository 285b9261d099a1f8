use anyhow::Result;

use crate::chat::{ChatShell, ShellConfig};
use crate::completion::CompletionClient;
use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::pipeline::ChatPipeline;
use crate::translation::GoogleTranslateClient;

pub struct ChatOptions {
    pub to: Option<String>,
    pub endpoint: Option<String>,
    pub model: Option<String>,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let manager = ConfigManager::new();
    let file_config = manager.load_or_default();

    let resolved = resolve_config(
        &ResolveOptions {
            to: options.to,
            endpoint: options.endpoint,
            model: options.model,
        },
        &file_config,
    )?;

    let translator = GoogleTranslateClient::new();
    let completion = CompletionClient::new(
        resolved.endpoint.clone(),
        resolved.model.clone(),
        resolved.api_key.clone(),
    );
    let pipeline = ChatPipeline::new(Box::new(translator), Box::new(completion));

    let shell_config = ShellConfig {
        endpoint: resolved.endpoint,
        model: resolved.model,
        api_key_env: resolved.api_key_env,
        key_present: resolved.api_key.is_some(),
    };

    let mut shell = ChatShell::new(pipeline, resolved.language, shell_config);
    shell.run().await
}
