//! # gtrans - Batching Translation CLI
//!
//! `gtrans` translates text through a web translation backend that requires
//! every request to be signed with a token derived from the request text.
//! Long inputs are split on line boundaries into chunks under a character
//! budget, sent one at a time with a pause in between, and reassembled in
//! their original order.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate a file
//! gtrans --to ja ./notes.md
//!
//! # Translate from stdin with an explicit source language
//! cat report.md | gtrans --from en --to zh-CN
//!
//! # Show the request token for a text
//! gtrans token "Hello, World!"
//!
//! # Print the unparsed backend response
//! gtrans raw --from en --to fr "Hello"
//! ```
//!
//! ## Library use
//!
//! ```no_run
//! use gtrans_cli::translation::{BatchTranslator, TranslationClient, DEFAULT_ENDPOINT,
//!     DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
//!
//! # async fn demo() -> Result<(), gtrans_cli::translation::TransportError> {
//! let client = TranslationClient::new(DEFAULT_ENDPOINT, DEFAULT_USER_AGENT, DEFAULT_TIMEOUT)?;
//! let translator = BatchTranslator::new(client);
//! let text = translator.translate_batch(&["Hello", "World"], "en", "ja").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/gtrans/config.toml`:
//!
//! ```toml
//! [gtrans]
//! from = "en"
//! to = "ja"
//! max_chunk_chars = 3500
//! chunk_delay_ms = 1000
//!
//! [backend]
//! endpoint = "https://translate.google.com.tw"
//! timeout_secs = 30
//! ```

/// Per-chunk translation cache using `SQLite`.
pub mod cache;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// File system utilities.
pub mod fs;

/// Input reading from files and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration and cache.
pub mod paths;

/// Request signing, batching, and the HTTP transport.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
