use serde::{Deserialize, Serialize};

use crate::turn::Turn;

/// Append-only conversation transcript, rendered as accumulated text.
///
/// The history holds no hidden state: it is handed back to the caller after
/// every turn and must be supplied back in on the next one. [`append`]
/// returns an updated copy, so the prior value stays intact for any
/// emissions still referring to it.
///
/// [`append`]: ConversationHistory::append
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationHistory(String);

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed turn, yielding the updated transcript. The prior
    /// rendering is always a prefix of the result.
    pub fn append(&self, turn: &Turn) -> Self {
        let mut text = self.0.clone();
        text.push_str(&format!(
            "**User:** {}\n\n**Chatbot:** {}\n",
            turn.message, turn.response
        ));
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<String> for ConversationHistory {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl std::fmt::Display for ConversationHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
