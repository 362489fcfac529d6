use std::sync::Arc;

use zhdoc_common::config::AppConfig;
use zhdoc_pipeline::DocumentAssembler;

#[derive(Clone)]
pub struct AppState {
    pub assembler: Arc<DocumentAssembler>,
    pub model: String,
}

impl AppState {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let assembler = DocumentAssembler::from_config(config)?;
        tracing::info!(
            model = %config.model,
            token_budget = config.max_tokens,
            "Segmentation pipeline configured"
        );

        Ok(Self {
            assembler: Arc::new(assembler),
            model: config.model.clone(),
        })
    }
}
