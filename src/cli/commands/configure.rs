//! Configure command handler for editing default settings.

use anyhow::Result;
use inquire::{CustomType, Select};

use crate::config::{ConfigFile, ConfigManager, GtransConfig};
use crate::translation::{
    AUTO_DETECT, DEFAULT_CHUNK_DELAY, DEFAULT_ENDPOINT, DEFAULT_MAX_CHUNK_CHARS,
    SUPPORTED_LANGUAGES,
};
use crate::ui::{Style, run_prompts};

/// Runs the configure command.
///
/// With `show`, prints the stored defaults. Otherwise lets the user pick the
/// default languages, chunk budget and delay interactively.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default()?;

    if show {
        print_current_defaults(&config);
        println!(
            "  {}  {}",
            Style::label("file"),
            Style::secondary(manager.config_path().display())
        );
        return Ok(());
    }

    print_current_defaults(&config);

    let Some(defaults) = run_prompts(|| prompt_defaults(&config.gtrans))? else {
        println!("{}", Style::secondary("Configuration unchanged."));
        return Ok(());
    };

    config.gtrans = defaults;
    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn prompt_defaults(current: &GtransConfig) -> Result<GtransConfig> {
    let from = select_language("Default source language:", current.from.as_deref(), true)?;
    let to = select_language("Default target language:", current.to.as_deref(), false)?;

    let max_chunk_chars = CustomType::<usize>::new("Maximum characters per request:")
        .with_default(current.max_chunk_chars.unwrap_or(DEFAULT_MAX_CHUNK_CHARS))
        .with_error_message("Please enter a positive whole number")
        .with_validator(|value: &usize| {
            Ok(if *value == 0 {
                inquire::validator::Validation::Invalid("Must be greater than 0".into())
            } else {
                inquire::validator::Validation::Valid
            })
        })
        .prompt()?;

    let default_delay = DEFAULT_CHUNK_DELAY.as_millis() as u64;
    let chunk_delay_ms = CustomType::<u64>::new("Pause between requests (ms):")
        .with_default(current.chunk_delay_ms.unwrap_or(default_delay))
        .with_error_message("Please enter a whole number of milliseconds")
        .prompt()?;

    Ok(GtransConfig {
        from: Some(from),
        to: Some(to),
        max_chunk_chars: Some(max_chunk_chars),
        chunk_delay_ms: Some(chunk_delay_ms),
    })
}

fn print_current_defaults(config: &ConfigFile) {
    let defaults = &config.gtrans;
    let not_set = || Style::secondary("(not set)");

    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}             {}",
        Style::label("from"),
        defaults.from.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}               {}",
        Style::label("to"),
        defaults.to.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("max_chunk_chars"),
        defaults.max_chunk_chars.map_or_else(not_set, Style::value)
    );
    println!(
        "  {}   {}",
        Style::label("chunk_delay_ms"),
        defaults.chunk_delay_ms.map_or_else(not_set, Style::value)
    );
    println!(
        "  {}         {}",
        Style::label("endpoint"),
        Style::value(config.backend.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))
    );
    println!();
}

fn select_language(prompt: &str, default: Option<&str>, allow_auto: bool) -> Result<String> {
    // Build options with format "code - Name"
    let mut options: Vec<String> = Vec::with_capacity(SUPPORTED_LANGUAGES.len() + 1);
    if allow_auto {
        options.push(format!("{AUTO_DETECT} - Detect automatically"));
    }
    options.extend(
        SUPPORTED_LANGUAGES
            .iter()
            .map(|(code, name)| format!("{code} - {name}")),
    );

    let default_index = default
        .and_then(|d| {
            options
                .iter()
                .position(|option| option_code(option).eq_ignore_ascii_case(d))
        })
        .unwrap_or(0);

    let selection = Select::new(prompt, options)
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(option_code(&selection).to_string())
}

fn option_code(option: &str) -> &str {
    option.split(" - ").next().unwrap_or(option)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_code() {
        assert_eq!(option_code("zh-CN - Chinese (Simplified)"), "zh-CN");
        assert_eq!(option_code("auto - Detect automatically"), "auto");
        assert_eq!(option_code("plain"), "plain");
    }
}
