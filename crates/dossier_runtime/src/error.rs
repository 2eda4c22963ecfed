use thiserror::Error;

/// Setup-time faults. Per-turn model failures are deliberately not errors:
/// they degrade into response content so a turn never crashes the session.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("configuration error: {0}")]
    Config(String),
}
