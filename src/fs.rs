//! File system utilities.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Writes translated output to `path` via a sibling temp file and a rename.
///
/// An interrupted run leaves either the old file or the complete new one,
/// never a truncated translation.
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .with_context(|| format!("Not a file path: {}", path.display()))?
        .to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;

    // Same directory, so the rename stays on one filesystem
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.txt");

        atomic_write(&file_path, "Bonjour\nMonde").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "Bonjour\nMonde");
    }

    #[test]
    fn test_atomic_write_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.txt");

        fs::write(&file_path, "Original content").unwrap();
        atomic_write(&file_path, "New content").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "New content");
        assert!(!temp_dir.path().join(".out.txt.tmp").exists());
    }

    #[test]
    fn test_atomic_write_rejects_directory_path() {
        let temp_dir = TempDir::new().unwrap();
        assert!(atomic_write(&temp_dir.path().join(".."), "x").is_err());
    }
}
