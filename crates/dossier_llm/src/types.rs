/// A single-turn completion request: one instruction prompt plus sampling
/// parameters. Defaults match the chat pipeline's fixed settings.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Upper bound on the whole request; a hung backend fails the turn
    /// instead of wedging it.
    pub timeout_secs: u64,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: 0.2,
            max_tokens: 512,
            timeout_secs: 120,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = CompletionRequest::new("hello");
        assert_eq!(request.prompt, "hello");
        assert_eq!(request.temperature, 0.2);
        assert_eq!(request.max_tokens, 512);
        assert_eq!(request.timeout_secs, 120);
    }

    #[test]
    fn test_builders() {
        let request = CompletionRequest::new("p")
            .with_temperature(0.7)
            .with_max_tokens(1024)
            .with_timeout_secs(30);
        assert_eq!(request.temperature, 0.7);
        assert_eq!(request.max_tokens, 1024);
        assert_eq!(request.timeout_secs, 30);
    }
}
