//! Subcommand implementations.

/// Configure command handler.
pub mod configure;

/// Raw backend response command handler.
pub mod raw;

/// Token command handler.
pub mod token;

/// Translation command handler.
pub mod translate;
