//! Per-turn orchestration: extract → bound → prompt → model → stream →
//! history.

use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::{Stream, StreamExt};
use uuid::Uuid;

use dossier_core::{ConversationHistory, Turn, TurnUpdate};
use dossier_extract::FileExtractor;
use dossier_llm::{build_prompt, CompletionRequest, ModelClient};

use crate::chunk::TextSplitter;
use crate::config::OrchestratorConfig;
use crate::stream::{format_response, ResponseStreamer};

/// The emissions of one turn: every intermediate [`TurnUpdate`] carries the
/// pre-turn history; the single final one carries the updated history.
pub struct TurnStream {
    inner: Pin<Box<dyn Stream<Item = TurnUpdate> + Send>>,
}

impl TurnStream {
    pub fn new(inner: Pin<Box<dyn Stream<Item = TurnUpdate> + Send>>) -> Self {
        Self { inner }
    }
}

impl Stream for TurnStream {
    type Item = TurnUpdate;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}

/// Top-level entry point, one call per turn. Collaborators are injected;
/// the orchestrator holds no session state, history flows through the
/// call as a value.
pub struct ChatOrchestrator {
    model: Arc<dyn ModelClient>,
    extractor: FileExtractor,
    config: OrchestratorConfig,
}

impl ChatOrchestrator {
    pub fn new(model: Arc<dyn ModelClient>, extractor: FileExtractor) -> Self {
        Self {
            model,
            extractor,
            config: OrchestratorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: OrchestratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Run one turn. The returned stream yields a growing response prefix
    /// per emission and commits the turn to history only at the final
    /// emission; dropping the stream early leaves the history untouched.
    pub fn handle_turn(
        &self,
        message: String,
        file: Option<PathBuf>,
        history: ConversationHistory,
    ) -> TurnStream {
        let model = Arc::clone(&self.model);
        let extractor = self.extractor.clone();
        let config = self.config.clone();

        TurnStream::new(Box::pin(async_stream::stream! {
            let turn_id = Uuid::new_v4();
            tracing::info!(%turn_id, has_file = file.is_some(), "turn started");

            let file_text = file.as_deref().map(|path| {
                let text = extractor.extract(path);
                TextSplitter::new(config.max_file_chars).bound(&text)
            });

            let prompt = build_prompt(&message, file_text.as_deref());
            let request = CompletionRequest::new(prompt)
                .with_temperature(config.temperature)
                .with_max_tokens(config.max_tokens)
                .with_timeout_secs(config.model_timeout_secs);

            let completion = match model.complete(request).await {
                Ok(text) => text,
                Err(err) => {
                    tracing::warn!(%turn_id, %err, "model call failed");
                    format!("Error generating the response: {err}")
                }
            };

            let formatted = format_response(&completion);
            let mut emissions =
                ResponseStreamer::new(config.stream_delay()).stream(formatted.clone());
            while let Some(partial) = emissions.next().await {
                yield TurnUpdate::partial(partial, history.clone());
            }

            let mut turn = Turn::new(message.as_str()).with_response(formatted.as_str());
            if let Some(name) = file
                .as_deref()
                .and_then(|p| p.file_name())
                .and_then(|n| n.to_str())
            {
                turn = turn.with_file(name);
            }
            let updated = history.append(&turn);
            tracing::info!(%turn_id, response_chars = formatted.chars().count(), "turn complete");
            yield TurnUpdate::complete(formatted, updated);
        }))
    }
}
