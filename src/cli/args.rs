use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gtrans")]
#[command(about = "Batching translation CLI with signed backend requests")]
#[command(version)]
pub struct Args {
    /// File to translate (reads from stdin if not provided)
    pub file: Option<String>,

    /// Source language code, or "auto" to detect it
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    /// Target language code (e.g., ja, en, zh-CN)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Maximum characters per backend request
    #[arg(short = 'c', long = "max-chars")]
    pub max_chars: Option<usize>,

    /// Pause between backend requests, in milliseconds
    #[arg(short = 'd', long = "delay-ms")]
    pub delay_ms: Option<u64>,

    /// Disable cache
    #[arg(short = 'n', long)]
    pub no_cache: bool,

    /// Write the translation to a file instead of stdout
    #[arg(short = 'o', long)]
    pub output: Option<String>,

    /// Suppress progress and status messages
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure gtrans defaults
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// List supported language codes
    Languages,
    /// Print the request token for a text
    Token {
        /// Text to sign (reads from stdin if not provided)
        text: Option<String>,
    },
    /// Translate a text and print the unparsed backend response
    Raw {
        /// Text to translate (reads from stdin if not provided)
        text: Option<String>,

        /// Source language code, or "auto" to detect it
        #[arg(short = 'f', long = "from")]
        from: Option<String>,

        /// Target language code (e.g., ja, en, zh-CN)
        #[arg(short = 't', long = "to")]
        to: Option<String>,
    },
}
