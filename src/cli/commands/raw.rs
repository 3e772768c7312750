//! Raw command handler: one signed request, unparsed response.

use anyhow::{Context, Result, bail};

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::input::InputReader;
use crate::translation::TranslationClient;

pub struct RawOptions {
    pub text: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

pub async fn run_raw(options: RawOptions) -> Result<()> {
    let file_config = ConfigManager::new()?.load_or_default()?;
    let config = resolve_config(
        &ResolveOptions {
            from: options.from,
            to: options.to,
            ..ResolveOptions::default()
        },
        &file_config,
    )?;

    let text = InputReader::read_text_or_stdin(options.text)?;
    if text.is_empty() {
        bail!("Input is empty");
    }

    let client = TranslationClient::new(&config.endpoint, &config.user_agent, config.timeout)?;
    let body = client
        .translate_raw(&text, &config.source_language, &config.target_language)
        .await
        .context("Raw translation request failed")?;

    println!("{body}");
    Ok(())
}
