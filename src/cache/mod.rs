//! Translation cache backed by `SQLite`.
//!
//! Chunks are cached individually, so re-running a batch after a failure
//! only sends the chunks that never came back.

mod sqlite;

pub use sqlite::{CacheManager, TranslationRequest};

use async_trait::async_trait;

use crate::translation::{Transport, TransportError};

/// A [`Transport`] that answers from the cache before going to the network.
///
/// Cache errors are reported as warnings and never fail a translation.
pub struct CachedTransport<T> {
    inner: T,
    cache: CacheManager,
    endpoint: String,
}

impl<T: Transport> CachedTransport<T> {
    /// `endpoint` scopes cache entries to the backend that produced them.
    pub fn new(inner: T, cache: CacheManager, endpoint: impl Into<String>) -> Self {
        Self {
            inner,
            cache,
            endpoint: endpoint.into(),
        }
    }

    fn request(&self, text: &str, source_language: &str, target_language: &str) -> TranslationRequest {
        TranslationRequest {
            source_text: text.to_string(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            endpoint: self.endpoint.clone(),
        }
    }
}

#[async_trait]
impl<T: Transport> Transport for CachedTransport<T> {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TransportError> {
        let request = self.request(text, source_language, target_language);

        match self.cache.get(&request) {
            Ok(Some(cached)) => return Ok(cached),
            Ok(None) => {}
            Err(e) => crate::warn!("Warning: translation cache unavailable: {e:#}"),
        }

        let translated = self
            .inner
            .translate(text, source_language, target_language)
            .await?;

        if let Err(e) = self.cache.put(&request, &translated) {
            crate::warn!("Warning: failed to store translation in cache: {e:#}");
        }

        Ok(translated)
    }
}
