//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Subcommand implementations.
pub mod commands;

pub use args::{Args, Command};

use crate::translation::TransportError;

/// Maps a command failure to a process exit code.
///
/// Throttling is reported as temporary so wrapper scripts can retry later.
pub fn exit_code_for(err: &anyhow::Error) -> exitcode::ExitCode {
    match err.downcast_ref::<TransportError>() {
        Some(e) if e.is_rate_limited() => exitcode::TEMPFAIL,
        Some(TransportError::InvalidEndpoint { .. }) => exitcode::CONFIG,
        Some(_) => exitcode::UNAVAILABLE,
        None => exitcode::SOFTWARE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_rate_limited() {
        let err = anyhow::Error::new(TransportError::from_status(429, String::new()));
        assert_eq!(exit_code_for(&err), exitcode::TEMPFAIL);
    }

    #[test]
    fn test_exit_code_transport_failure() {
        let err = anyhow::Error::new(TransportError::MalformedResponse("x".to_string()));
        assert_eq!(exit_code_for(&err), exitcode::UNAVAILABLE);
    }

    #[test]
    fn test_exit_code_survives_context() {
        let err = anyhow::Error::new(TransportError::from_status(503, String::new()))
            .context("Translation failed");
        assert_eq!(exit_code_for(&err), exitcode::UNAVAILABLE);
    }

    #[test]
    fn test_exit_code_other_error() {
        let err = anyhow::anyhow!("Input is empty");
        assert_eq!(exit_code_for(&err), exitcode::SOFTWARE);
    }
}
