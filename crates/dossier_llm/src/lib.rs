//! Model service client and prompt assembly.
//!
//! The model backend is an opaque text-completion service behind the
//! [`ModelClient`] trait; [`OllamaClient`] is the self-hosted default.
//! Prompt assembly lives here too: one fixed template, fields filled per
//! turn.

pub mod client;
pub mod error;
pub mod prompt;
pub mod types;

pub use client::{ModelClient, OllamaClient};
pub use error::ModelError;
pub use prompt::build_prompt;
pub use types::CompletionRequest;
