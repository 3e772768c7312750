//! XDG-style path utilities for configuration and cache directories.
//!
//! This module provides consistent path resolution across platforms,
//! preferring XDG Base Directory Specification conventions over
//! OS-specific locations.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "gtrans";

/// Returns the configuration directory for gtrans.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/gtrans` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/gtrans` otherwise
pub fn config_dir() -> Result<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", ".config")
}

/// Returns the cache directory for gtrans.
///
/// Resolution order:
/// 1. `$XDG_CACHE_HOME/gtrans` if `XDG_CACHE_HOME` is set
/// 2. `~/.cache/gtrans` otherwise
pub fn cache_dir() -> Result<PathBuf> {
    xdg_dir("XDG_CACHE_HOME", ".cache")
}

fn xdg_dir(env_var: &str, home_fallback: &str) -> Result<PathBuf> {
    match std::env::var(env_var) {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join(APP_DIR)),
        _ => {
            let home = dirs::home_dir().context("Failed to determine home directory")?;
            Ok(home.join(home_fallback).join(APP_DIR))
        }
    }
}
