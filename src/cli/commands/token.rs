//! Token command handler.

use anyhow::Result;

use crate::input::InputReader;
use crate::translation::compute_token;

/// Prints the request token for `text` (or stdin) to stdout.
pub fn print_token(text: Option<String>) -> Result<()> {
    let text = InputReader::read_text_or_stdin(text)?;
    println!("{}", compute_token(&text));
    Ok(())
}
