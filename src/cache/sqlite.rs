use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};
use sha2::{Digest, Sha256};
use std::path::PathBuf;

use crate::paths;

/// Identity of one chunk submission, as far as caching is concerned.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub source_text: String,
    pub source_language: String,
    pub target_language: String,
    pub endpoint: String,
}

impl TranslationRequest {
    /// Compute cache key for this request
    pub fn cache_key(&self) -> String {
        let cache_input = serde_json::json!({
            "source_text": self.source_text,
            "source_language": self.source_language,
            "target_language": self.target_language,
            "endpoint": self.endpoint,
        });

        let mut hasher = Sha256::new();
        hasher.update(cache_input.to_string().as_bytes());
        hex::encode(hasher.finalize())
    }
}

pub struct CacheManager {
    db_path: PathBuf,
}

impl CacheManager {
    pub fn new() -> Result<Self> {
        let cache_dir = paths::cache_dir()?;

        std::fs::create_dir_all(&cache_dir).with_context(|| {
            format!("Failed to create cache directory: {}", cache_dir.display())
        })?;

        Self::open(cache_dir.join("translations.db"))
    }

    /// Opens (creating if needed) a cache database at an explicit path.
    pub fn open(db_path: PathBuf) -> Result<Self> {
        let manager = Self { db_path };
        manager.init_db()?;
        Ok(manager)
    }

    fn init_db(&self) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS translations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                cache_key TEXT UNIQUE NOT NULL,
                source_text TEXT NOT NULL,
                translated_text TEXT NOT NULL,
                source_language TEXT NOT NULL,
                target_language TEXT NOT NULL,
                endpoint TEXT NOT NULL,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                accessed_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )
        .context("Failed to create translations table")?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_cache_key ON translations(cache_key)",
            [],
        )
        .context("Failed to create index")?;

        Ok(())
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.db_path)
            .with_context(|| format!("Failed to open cache database: {}", self.db_path.display()))
    }

    pub fn get(&self, request: &TranslationRequest) -> Result<Option<String>> {
        let cache_key = request.cache_key();
        let conn = self.connect()?;

        let result: Option<String> = conn
            .query_row(
                "SELECT translated_text FROM translations WHERE cache_key = ?1",
                [&cache_key],
                |row| row.get(0),
            )
            .optional()
            .context("Failed to query translation cache")?;

        if result.is_some() {
            conn.execute(
                "UPDATE translations SET accessed_at = CURRENT_TIMESTAMP WHERE cache_key = ?1",
                [&cache_key],
            )?;
        }

        Ok(result)
    }

    pub fn put(&self, request: &TranslationRequest, translated_text: &str) -> Result<()> {
        let cache_key = request.cache_key();
        let conn = self.connect()?;

        conn.execute(
            "INSERT OR REPLACE INTO translations
             (cache_key, source_text, translated_text, source_language, target_language, endpoint)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                cache_key,
                request.source_text,
                translated_text,
                request.source_language,
                request.target_language,
                request.endpoint,
            ],
        )
        .context("Failed to insert translation into cache")?;

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> CacheManager {
        CacheManager::open(temp_dir.path().join("translations.db")).unwrap()
    }

    fn create_test_request() -> TranslationRequest {
        TranslationRequest {
            source_text: "Hello, World!".to_string(),
            source_language: "en".to_string(),
            target_language: "ja".to_string(),
            endpoint: "https://translate.google.com.tw".to_string(),
        }
    }

    #[test]
    fn test_cache_miss() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        let request = create_test_request();

        let result = manager.get(&request).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_cache_hit() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        let request = create_test_request();

        manager.put(&request, "こんにちは、世界！").unwrap();

        let result = manager.get(&request).unwrap();
        assert_eq!(result, Some("こんにちは、世界！".to_string()));
    }

    #[test]
    fn test_put_replaces_existing_entry() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        let request = create_test_request();

        manager.put(&request, "first").unwrap();
        manager.put(&request, "second").unwrap();

        assert_eq!(manager.get(&request).unwrap(), Some("second".to_string()));
    }

    #[test]
    fn test_source_language_is_part_of_key() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let request1 = create_test_request();
        let request2 = TranslationRequest {
            source_language: "auto".to_string(),
            ..create_test_request()
        };

        manager.put(&request1, "Translation 1").unwrap();

        assert_ne!(request1.cache_key(), request2.cache_key());
        assert!(manager.get(&request2).unwrap().is_none());
    }

    #[test]
    fn test_cache_key_includes_endpoint() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let request1 = create_test_request();
        let request2 = TranslationRequest {
            endpoint: "http://localhost:8080".to_string(),
            ..create_test_request()
        };

        manager.put(&request1, "Remote Translation").unwrap();
        manager.put(&request2, "Local Translation").unwrap();

        assert_eq!(
            manager.get(&request1).unwrap(),
            Some("Remote Translation".to_string())
        );
        assert_eq!(
            manager.get(&request2).unwrap(),
            Some("Local Translation".to_string())
        );
    }

    #[test]
    fn test_cache_key_is_hex_sha256() {
        let key = create_test_request().cache_key();
        assert_eq!(key.len(), 64);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
