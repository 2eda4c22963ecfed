use serde::{Deserialize, Serialize};

use crate::history::ConversationHistory;

/// One emission of a streamed turn.
///
/// Intermediate emissions carry a growing prefix of the formatted response
/// together with the history as it was *before* the turn; the final emission
/// carries the full response and the updated history. `cleared_input` is
/// always the empty string, which signals the caller to clear its input
/// field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnUpdate {
    pub response: String,
    pub history: ConversationHistory,
    pub cleared_input: String,
}

impl TurnUpdate {
    /// An intermediate emission: partial response, pre-turn history.
    pub fn partial(response: impl Into<String>, history: ConversationHistory) -> Self {
        Self {
            response: response.into(),
            history,
            cleared_input: String::new(),
        }
    }

    /// The final emission: full response, post-turn history.
    pub fn complete(response: impl Into<String>, history: ConversationHistory) -> Self {
        Self {
            response: response.into(),
            history,
            cleared_input: String::new(),
        }
    }
}
