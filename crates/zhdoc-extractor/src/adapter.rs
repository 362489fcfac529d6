use futures::future;

use crate::{ExtractorError, WordExtractor};

/// One span of text queued for an extraction call.
///
/// `overlaps_previous` marks chunks whose leading context repeats the tail of
/// the preceding chunk — non-initial overlap windows. Only those boundaries
/// are de-duplicated; a genuine repetition across a plain planner boundary is
/// kept as-is.
#[derive(Debug, Clone)]
pub struct ExtractionChunk {
    pub text: String,
    pub overlaps_previous: bool,
}

impl ExtractionChunk {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            overlaps_previous: false,
        }
    }

    pub fn overlapping(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            overlaps_previous: true,
        }
    }
}

/// Run one extraction call per chunk concurrently and concatenate the parsed
/// token lists in chunk order.
///
/// The calls are independent, so they are issued as a fan-out and joined
/// before anything is assembled; results are collected by chunk index, not
/// arrival order. A single failed or unparseable chunk fails the whole
/// request.
///
/// Where a chunk overlaps its predecessor, the longest prefix of its token
/// list that matches a suffix of the accumulated list is dropped before
/// appending, removing the tokens double-extracted from shared window
/// context.
pub async fn extract_words(
    extractor: &dyn WordExtractor,
    instruction: &str,
    chunks: &[ExtractionChunk],
) -> Result<Vec<String>, ExtractorError> {
    let calls = chunks.iter().map(|chunk| extractor.extract(instruction, &chunk.text));
    let responses = future::try_join_all(calls).await?;

    let mut words: Vec<String> = Vec::new();
    for (chunk, response) in chunks.iter().zip(responses) {
        let mut tokens = parse_token_list(&response)?;
        if chunk.overlaps_previous {
            let duplicated = shared_boundary_len(&words, &tokens);
            if duplicated > 0 {
                tracing::debug!(duplicated, "Dropping tokens repeated across window overlap");
                tokens.drain(..duplicated);
            }
        }
        words.extend(tokens);
    }

    Ok(words)
}

/// Parse a collaborator response as a JSON array of word strings.
fn parse_token_list(response: &str) -> Result<Vec<String>, ExtractorError> {
    serde_json::from_str(response.trim()).map_err(ExtractorError::MalformedResponse)
}

/// Length of the longest prefix of `incoming` equal to a suffix of
/// `accumulated`, trying the longest plausible overlap first.
fn shared_boundary_len(accumulated: &[String], incoming: &[String]) -> usize {
    let longest = accumulated.len().min(incoming.len());
    for overlap in (1..=longest).rev() {
        if accumulated[accumulated.len() - overlap..] == incoming[..overlap] {
            return overlap;
        }
    }
    0
}
