use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed exchange: the user's message, the file it referenced (if
/// any), and the formatted response. Built up with the `with_*` methods and
/// appended to a [`crate::ConversationHistory`] once the response is final.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            file: None,
            response: String::new(),
            timestamp: Utc::now(),
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response = response.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_new() {
        let turn = Turn::new("hello");
        assert_eq!(turn.message, "hello");
        assert!(turn.file.is_none());
        assert!(turn.response.is_empty());
    }

    #[test]
    fn test_turn_builders() {
        let turn = Turn::new("summarize this")
            .with_file("report.pdf")
            .with_response("### Chatbot's Response\n**...**\n---\n");
        assert_eq!(turn.file.as_deref(), Some("report.pdf"));
        assert!(turn.response.starts_with("### Chatbot's Response"));
    }

    #[test]
    fn test_turn_serialization_skips_missing_file() {
        let turn = Turn::new("hi").with_response("ok");
        let json = serde_json::to_string(&turn).unwrap();
        assert!(!json.contains("\"file\""));

        let with_file = Turn::new("hi").with_file("notes.txt");
        let json = serde_json::to_string(&with_file).unwrap();
        assert!(json.contains("notes.txt"));
    }

    #[test]
    fn test_turn_roundtrip() {
        let turn = Turn::new("question").with_file("data.csv").with_response("answer");
        let json = serde_json::to_string(&turn).unwrap();
        let decoded: Turn = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.message, "question");
        assert_eq!(decoded.file.as_deref(), Some("data.csv"));
        assert_eq!(decoded.response, "answer");
    }
}
