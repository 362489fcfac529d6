use std::sync::Arc;

use tiktoken_rs::CoreBPE;

/// Token cost estimation for a text span, in the unit of the external
/// extraction budget.
///
/// Implementations must be deterministic and monotonic enough under append
/// that the planner's greedy packing stays within budget.
pub trait TokenEstimator: Send + Sync {
    fn estimate(&self, text: &str) -> usize;
}

#[derive(Debug, thiserror::Error)]
pub enum EstimateError {
    #[error("no tokenizer available for model {0:?}")]
    UnknownModel(String),
}

/// BPE-backed estimator matching the tokenization of the extraction model.
#[derive(Clone)]
pub struct TiktokenEstimator {
    bpe: Arc<CoreBPE>,
}

impl TiktokenEstimator {
    /// Look up the BPE encoding for `model`. Fails for model ids tiktoken
    /// does not know, before any chunking has happened.
    pub fn for_model(model: &str) -> Result<Self, EstimateError> {
        let bpe = tiktoken_rs::get_bpe_from_model(model)
            .map_err(|_| EstimateError::UnknownModel(model.to_string()))?;
        Ok(Self { bpe: Arc::new(bpe) })
    }
}

impl TokenEstimator for TiktokenEstimator {
    fn estimate(&self, text: &str) -> usize {
        self.bpe.encode_with_special_tokens(text).len()
    }
}
