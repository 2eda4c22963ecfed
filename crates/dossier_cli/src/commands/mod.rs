mod ask;
mod chat;

use std::sync::Arc;

use anyhow::Result;

use dossier_extract::{FileExtractor, OcrEngine};
use dossier_llm::OllamaClient;
use dossier_runtime::{ChatOrchestrator, OrchestratorConfig};

use crate::cli::{Cli, Commands};

pub async fn handle(cli: Cli) -> Result<()> {
    let orchestrator = build_orchestrator(&cli)?;
    match cli.command {
        Some(Commands::Ask { message, file }) => ask::handle(&orchestrator, message, file).await,
        Some(Commands::Chat { file }) => chat::handle(&orchestrator, file).await,
        None => chat::handle(&orchestrator, None).await,
    }
}

/// Service handles are constructed here, at the process entry point, and
/// injected; nothing in the pipeline reaches for globals.
fn build_orchestrator(cli: &Cli) -> Result<ChatOrchestrator> {
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| std::env::var("OLLAMA_BASE_URL").ok());
    let model = cli
        .model
        .clone()
        .or_else(|| std::env::var("OLLAMA_MODEL").ok());

    let client = Arc::new(OllamaClient::new(base_url, model));
    let extractor = FileExtractor::new(ocr_engine());
    let config = OrchestratorConfig::from_env()?;

    Ok(ChatOrchestrator::new(client, extractor).with_config(config))
}

#[cfg(feature = "ocr-tesseract")]
fn ocr_engine() -> Arc<dyn OcrEngine> {
    Arc::new(dossier_extract::TesseractEngine::default())
}

#[cfg(not(feature = "ocr-tesseract"))]
fn ocr_engine() -> Arc<dyn OcrEngine> {
    Arc::new(dossier_extract::DisabledOcr)
}
