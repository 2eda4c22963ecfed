//! Orchestrator configuration.

use std::time::Duration;

use crate::error::RuntimeError;

/// Per-turn pipeline settings. Model name and endpoint are the model
/// client's concern, not configured here.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Character budget for extracted file text.
    pub max_file_chars: usize,
    /// Sampling temperature for the model call.
    pub temperature: f32,
    /// Maximum output length for the model call.
    pub max_tokens: u32,
    /// Upper bound on the model call.
    pub model_timeout_secs: u64,
    /// Pacing between streamed emissions; 0 disables pacing.
    pub stream_delay_ms: u64,
}

impl OrchestratorConfig {
    pub fn new() -> Self {
        Self {
            max_file_chars: 16_000,
            temperature: 0.2,
            max_tokens: 512,
            model_timeout_secs: 120,
            stream_delay_ms: 5,
        }
    }

    pub fn with_max_file_chars(mut self, max: usize) -> Self {
        self.max_file_chars = max;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_model_timeout_secs(mut self, secs: u64) -> Self {
        self.model_timeout_secs = secs;
        self
    }

    pub fn with_stream_delay_ms(mut self, millis: u64) -> Self {
        self.stream_delay_ms = millis;
        self
    }

    pub fn stream_delay(&self) -> Duration {
        Duration::from_millis(self.stream_delay_ms)
    }

    /// Load overrides from `DOSSIER_*` environment variables. Unset
    /// variables keep their defaults; a set-but-unparseable value is a
    /// configuration error.
    pub fn from_env() -> Result<Self, RuntimeError> {
        let mut config = Self::new();

        if let Some(value) = env_parse::<usize>("DOSSIER_MAX_FILE_CHARS")? {
            config.max_file_chars = value;
        }
        if let Some(value) = env_parse::<f32>("DOSSIER_TEMPERATURE")? {
            config.temperature = value;
        }
        if let Some(value) = env_parse::<u32>("DOSSIER_MAX_TOKENS")? {
            config.max_tokens = value;
        }
        if let Some(value) = env_parse::<u64>("DOSSIER_MODEL_TIMEOUT_SECS")? {
            config.model_timeout_secs = value;
        }
        if let Some(value) = env_parse::<u64>("DOSSIER_STREAM_DELAY_MS")? {
            config.stream_delay_ms = value;
        }

        Ok(config)
    }
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Result<Option<T>, RuntimeError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| RuntimeError::Config(format!("invalid value for {name}: {raw:?}"))),
        Err(_) => Ok(None),
    }
}
