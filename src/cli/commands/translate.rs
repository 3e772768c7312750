use anyhow::{Context, Result, bail};
use std::io::{self, Write};
use std::path::Path;

use crate::cache::{CacheManager, CachedTransport};
use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::fs::atomic_write;
use crate::input::{InputReader, split_lines};
use crate::translation::{BatchOptions, BatchTranslator, TranslationClient, Transport};
use crate::ui::Spinner;

pub struct TranslateOptions {
    pub file: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub max_chars: Option<usize>,
    pub delay_ms: Option<u64>,
    pub no_cache: bool,
    pub output: Option<String>,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let config = load_resolved_config(&options)?;

    let source_text = InputReader::read(options.file.as_deref())?;
    if source_text.trim().is_empty() {
        bail!("Input is empty");
    }
    let lines = split_lines(&source_text);

    let client = TranslationClient::new(&config.endpoint, &config.user_agent, config.timeout)?;
    let batch_options = BatchOptions {
        max_chunk_chars: config.max_chunk_chars,
        chunk_delay: config.chunk_delay,
    };

    let translated = if options.no_cache {
        translate_lines(client, batch_options, &lines, &config).await?
    } else {
        let cache = CacheManager::new()?;
        let endpoint = client.endpoint().to_string();
        let transport = CachedTransport::new(client, cache, endpoint);
        translate_lines(transport, batch_options, &lines, &config).await?
    };

    if let Some(path) = options.output.as_deref() {
        atomic_write(Path::new(path), &translated)?;
        crate::status!("Wrote translation to {path}");
    } else {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{translated}")?;
        stdout.flush()?;
    }

    Ok(())
}

async fn translate_lines<T: Transport>(
    transport: T,
    batch_options: BatchOptions,
    lines: &[&str],
    config: &ResolvedConfig,
) -> Result<String> {
    let translator = BatchTranslator::with_options(transport, batch_options);

    let spinner = Spinner::new("Translating...");
    let result = translator
        .translate_batch_with_progress(
            lines,
            &config.source_language,
            &config.target_language,
            |done, total| {
                if done < total {
                    spinner.set_message(format!("Translating... chunk {}/{total}", done + 1));
                }
            },
        )
        .await;
    spinner.stop();

    result.with_context(|| {
        format!(
            "Translation {} -> {} failed",
            config.source_language, config.target_language
        )
    })
}

fn load_resolved_config(options: &TranslateOptions) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;

    resolve_config(
        &ResolveOptions {
            from: options.from.clone(),
            to: options.to.clone(),
            max_chunk_chars: options.max_chars,
            chunk_delay_ms: options.delay_ms,
        },
        &file_config,
    )
}
