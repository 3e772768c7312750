use anyhow::Result;
use clap::Parser;

use gtrans_cli::cli::commands::{configure, raw, token, translate};
use gtrans_cli::cli::{Args, Command, exit_code_for};
use gtrans_cli::output::{self, OutputConfig};
use gtrans_cli::translation::print_languages;
use gtrans_cli::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    output::init(OutputConfig::from_flags(args.quiet, args.no_color));

    if let Err(err) = run(args).await {
        eprintln!("{} {err:#}", Style::error("Error:"));
        std::process::exit(exit_code_for(&err));
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        Some(Command::Token { text }) => {
            token::print_token(text)?;
        }
        Some(Command::Raw { text, from, to }) => {
            raw::run_raw(raw::RawOptions { text, from, to }).await?;
        }
        None => {
            let options = translate::TranslateOptions {
                file: args.file,
                from: args.from,
                to: args.to,
                max_chars: args.max_chars,
                delay_ms: args.delay_ms,
                no_cache: args.no_cache,
                output: args.output,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
