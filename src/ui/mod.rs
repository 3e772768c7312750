//! Terminal UI components (spinner, colors, prompt handling).

use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Runs an interactive flow, mapping user cancellation to `Ok(None)`.
///
/// Ctrl+C or Escape inside any `inquire` prompt aborts the whole flow without
/// reporting an error; every other error is propagated.
pub fn run_prompts<T, F>(f: F) -> Result<Option<T>>
where
    F: FnOnce() -> Result<T>,
{
    match f() {
        Ok(value) => Ok(Some(value)),
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            // Leave the terminal on a fresh line
            println!();
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
