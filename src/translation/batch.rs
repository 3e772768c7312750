//! Splitting lines into budgeted chunks and reassembling their translations.

use std::ops::Range;
use std::time::Duration;

use super::transport::{Transport, TransportError};

/// Default character budget per chunk.
pub const DEFAULT_MAX_CHUNK_CHARS: usize = 3500;

/// Default pause between consecutive chunk submissions.
pub const DEFAULT_CHUNK_DELAY: Duration = Duration::from_secs(1);

/// Tuning knobs for [`BatchTranslator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    /// Running character count above which a chunk boundary is drawn.
    pub max_chunk_chars: usize,
    /// Pause after every chunk except the last.
    pub chunk_delay: Duration,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            max_chunk_chars: DEFAULT_MAX_CHUNK_CHARS,
            chunk_delay: DEFAULT_CHUNK_DELAY,
        }
    }
}

/// Plans chunk boundaries over `lines`.
///
/// Walks the lines keeping a running character count. When the count goes
/// over `max_chunk_chars` at line `i`, the pending lines before `i` become a
/// chunk and the count restarts from zero; line `i` opens the next chunk
/// without being counted. The trailing chunk is always emitted, so an empty
/// input yields a single empty range.
///
/// Boundaries only fall between lines. A line longer than the budget ends up
/// alone in its chunk rather than being split.
pub fn plan_chunks<S: AsRef<str>>(lines: &[S], max_chunk_chars: usize) -> Vec<Range<usize>> {
    let mut chunks = Vec::new();
    let mut last_idx = 0;
    let mut total_length = 0usize;

    for (i, line) in lines.iter().enumerate() {
        total_length += line.as_ref().chars().count();

        if total_length > max_chunk_chars {
            // An over-budget first line restarts the count without an empty chunk
            if i > last_idx {
                chunks.push(last_idx..i);
            }
            last_idx = i;
            total_length = 0;
        }
    }

    chunks.push(last_idx..lines.len());
    chunks
}

/// Joins a chunk's lines into the text submitted to the backend.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut text = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            text.push('\n');
        }
        text.push_str(line.as_ref());
    }
    text
}

/// Translates line sequences chunk by chunk through a [`Transport`].
///
/// Chunks are submitted one at a time, in order, and the translator holds no
/// state between calls.
pub struct BatchTranslator<T> {
    transport: T,
    options: BatchOptions,
}

impl<T: Transport> BatchTranslator<T> {
    pub fn new(transport: T) -> Self {
        Self::with_options(transport, BatchOptions::default())
    }

    pub const fn with_options(transport: T, options: BatchOptions) -> Self {
        Self { transport, options }
    }

    pub const fn options(&self) -> &BatchOptions {
        &self.options
    }

    /// Translates a single block of text as a one-line batch.
    pub async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TransportError> {
        self.translate_batch(&[text], source_language, target_language)
            .await
    }

    /// Translates `lines` and returns the chunk translations joined by `\n`.
    ///
    /// The first transport failure aborts the whole batch.
    pub async fn translate_batch<S: AsRef<str> + Sync>(
        &self,
        lines: &[S],
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TransportError> {
        self.translate_batch_with_progress(lines, source_language, target_language, |_, _| {})
            .await
    }

    /// Like [`translate_batch`](Self::translate_batch), calling
    /// `on_chunk(done, total)` after each chunk is translated.
    pub async fn translate_batch_with_progress<S, F>(
        &self,
        lines: &[S],
        source_language: &str,
        target_language: &str,
        mut on_chunk: F,
    ) -> Result<String, TransportError>
    where
        S: AsRef<str> + Sync,
        F: FnMut(usize, usize) + Send,
    {
        let chunks = plan_chunks(lines, self.options.max_chunk_chars);
        let total = chunks.len();
        let mut translated = Vec::with_capacity(total);

        for (index, range) in chunks.into_iter().enumerate() {
            let text = join_lines(&lines[range]);
            let result = self
                .transport
                .translate(&text, source_language, target_language)
                .await?;
            translated.push(result);
            on_chunk(index + 1, total);

            if index + 1 < total && !self.options.chunk_delay.is_zero() {
                tokio::time::sleep(self.options.chunk_delay).await;
            }
        }

        Ok(translated.join("\n"))
    }
}
