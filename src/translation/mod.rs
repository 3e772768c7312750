mod batch;
mod client;
mod language;
mod response;
mod token;
mod transport;

pub use batch::{
    BatchOptions, BatchTranslator, DEFAULT_CHUNK_DELAY, DEFAULT_MAX_CHUNK_CHARS, join_lines,
    plan_chunks,
};
pub use client::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, TranslationClient};
pub use language::{
    AUTO_DETECT, SUPPORTED_LANGUAGES, normalize_language, normalize_source_language,
    print_languages, validate_language,
};
pub use response::parse_translation;
pub use token::{compute_token, compute_token_utf16};
pub use transport::{Transport, TransportError};
