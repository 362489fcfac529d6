use std::sync::Arc;

use zhdoc_common::config::AppConfig;
use zhdoc_common::types::{Document, Paragraph, Sentence, Word};
use zhdoc_extractor::{
    extract_words, ExtractionChunk, ExtractorError, OpenAiExtractor, WordExtractor,
    WORD_EXTRACTION_INSTRUCTION,
};
use zhdoc_segmenter::{
    plan_chunks, plan_overlap_windows, split_paragraphs, split_sentences, EstimateError,
    TiktokenEstimator, TokenEstimator,
};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("token estimation failed: {0}")]
    Estimate(#[from] EstimateError),
    #[error("word extraction failed: {0}")]
    Extraction(#[from] ExtractorError),
}

/// Turns raw Chinese text into a segmented [`Document`] tree.
///
/// The whole tree is built in one call and returned by value; nothing is
/// mutated after it is returned, and a failed extraction yields no partial
/// document.
pub struct DocumentAssembler {
    estimator: Arc<dyn TokenEstimator>,
    extractor: Arc<dyn WordExtractor>,
    token_budget: usize,
}

impl DocumentAssembler {
    pub fn new(
        estimator: Arc<dyn TokenEstimator>,
        extractor: Arc<dyn WordExtractor>,
        token_budget: usize,
    ) -> Self {
        Self {
            estimator,
            extractor,
            token_budget,
        }
    }

    /// Build an assembler from configuration, with the tiktoken estimator and
    /// the OpenAI-compatible extractor. Fails up front if the configured
    /// model has no known tokenizer.
    pub fn from_config(config: &AppConfig) -> Result<Self, PipelineError> {
        let estimator = TiktokenEstimator::for_model(&config.model)?;
        let extractor = OpenAiExtractor::new(
            &config.openai_base_url,
            &config.openai_api_key,
            &config.model,
            config.max_tokens,
        );
        Ok(Self::new(
            Arc::new(estimator),
            Arc::new(extractor),
            config.max_tokens,
        ))
    }

    /// Segment `text` into the full paragraph/sentence/word tree.
    ///
    /// Extraction chunks follow the token budget, not sentence boundaries, so
    /// the paragraph/sentence walk here re-splits the text independently and
    /// consumes the flat word stream positionally: each sentence takes words
    /// from the cursor until their summed character length reaches the
    /// sentence's own length. The final sentence absorbs any words left over.
    pub async fn assemble(&self, text: &str) -> Result<Document, PipelineError> {
        let paragraphs = split_paragraphs(text);
        if paragraphs.is_empty() {
            return Ok(Document {
                full_text: text.to_string(),
                full_translation: None,
                paragraphs: Vec::new(),
            });
        }

        let planned = plan_chunks(text, self.estimator.as_ref(), self.token_budget, Some(&paragraphs));

        // A planned chunk still at or over budget is a lone sentence too long
        // to submit whole; replace it with overlapping windows. Only the
        // non-initial windows repeat their predecessor's tail, so only those
        // boundaries are marked for de-duplication.
        let mut chunks: Vec<ExtractionChunk> = Vec::with_capacity(planned.len());
        for chunk in planned {
            if self.estimator.estimate(&chunk) >= self.token_budget {
                let windows = plan_overlap_windows(
                    &chunk,
                    self.estimator.as_ref(),
                    self.token_budget,
                );
                for (i, window) in windows.into_iter().enumerate() {
                    chunks.push(if i == 0 {
                        ExtractionChunk::new(window)
                    } else {
                        ExtractionChunk::overlapping(window)
                    });
                }
            } else {
                chunks.push(ExtractionChunk::new(chunk));
            }
        }
        tracing::debug!(
            paragraph_count = paragraphs.len(),
            chunk_count = chunks.len(),
            overlap_windows = chunks.iter().filter(|c| c.overlaps_previous).count(),
            "Planned extraction chunks"
        );

        let words = extract_words(self.extractor.as_ref(), WORD_EXTRACTION_INSTRUCTION, &chunks)
            .await?;
        tracing::debug!(word_count = words.len(), "Word extraction complete");

        Ok(self.attach_words(text, &paragraphs, &words))
    }

    fn attach_words(&self, text: &str, paragraphs: &[&str], words: &[String]) -> Document {
        let mut cursor = 0;
        let paragraph_count = paragraphs.len();
        let mut out_paragraphs = Vec::with_capacity(paragraph_count);

        for (paragraph_id, &paragraph_text) in paragraphs.iter().enumerate() {
            let sentences = split_sentences(paragraph_text);
            let sentence_count = sentences.len();
            let mut out_sentences = Vec::with_capacity(sentence_count);

            for (sentence_id, sentence_text) in sentences.into_iter().enumerate() {
                let target = sentence_text.chars().count();
                let start = cursor;
                let mut accumulated = 0;

                while cursor < words.len() && accumulated < target {
                    accumulated += words[cursor].chars().count();
                    cursor += 1;
                }

                // Boundary drift must not strand words after the final
                // sentence.
                let last_sentence =
                    paragraph_id + 1 == paragraph_count && sentence_id + 1 == sentence_count;
                if last_sentence {
                    cursor = words.len();
                }

                let out_words = words[start..cursor]
                    .iter()
                    .enumerate()
                    .map(|(index, word)| Word::new(word.clone(), index))
                    .collect();

                out_sentences.push(Sentence {
                    id: sentence_id,
                    text: sentence_text,
                    translation: None,
                    words: out_words,
                });
            }

            out_paragraphs.push(Paragraph {
                id: paragraph_id,
                text: paragraph_text.to_string(),
                translation: None,
                pinyin: None,
                sentences: out_sentences,
            });
        }

        Document {
            full_text: text.to_string(),
            full_translation: None,
            paragraphs: out_paragraphs,
        }
    }
}
