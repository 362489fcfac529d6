pub mod adapter;
pub mod openai;

pub use adapter::{extract_words, ExtractionChunk};
pub use openai::OpenAiExtractor;

use async_trait::async_trait;

/// System instruction sent with every extraction call. The model must answer
/// with a bare JSON array of word strings so the adapter can parse it.
pub const WORD_EXTRACTION_INSTRUCTION: &str = "You segment Chinese text into words. \
Respond with a JSON array of strings containing every word and punctuation mark \
of the given text, in reading order. Respond with the JSON array only, no \
commentary and no markdown.";

/// External word-extraction collaborator: one call per chunk, returning the
/// raw response text (expected to be a serialized list of word tokens).
#[async_trait]
pub trait WordExtractor: Send + Sync {
    async fn extract(&self, instruction: &str, chunk: &str) -> Result<String, ExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("extraction API error: {0}")]
    Api(String),
    #[error("malformed extraction response: {0}")]
    MalformedResponse(#[source] serde_json::Error),
}
