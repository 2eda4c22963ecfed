//! The message pipeline: chunk bounding, response streaming, and the
//! per-turn orchestrator that ties extraction, prompt assembly, the model
//! call, and history together.

pub mod chunk;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod stream;

pub use chunk::TextSplitter;
pub use config::OrchestratorConfig;
pub use error::RuntimeError;
pub use orchestrator::{ChatOrchestrator, TurnStream};
pub use stream::{format_response, ResponseStream, ResponseStreamer};
