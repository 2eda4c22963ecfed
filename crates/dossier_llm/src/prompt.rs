//! Prompt assembly: one fixed instruction template, fields filled per turn.

/// Build the per-turn instruction prompt.
///
/// The document field is the user message alone, or the message with the
/// bounded file text appended after a newline. The question is the last line
/// of the raw message regardless of file presence; it is suffixed with `?`,
/// so a message already ending in one reads `..??`. Accepted template
/// behavior.
pub fn build_prompt(message: &str, file_text: Option<&str>) -> String {
    let document = match file_text {
        Some(text) => format!("{message}\n{text}"),
        None => message.to_string(),
    };
    let question = last_line(message);

    format!(
        "### Document Processing and Question\n\
         \n\
         **Provided Document/Text:**\n\
         {document}\n\
         \n\
         **User's Question:**\n\
         {question}?\n\
         \n\
         **Expected Response:**\n\
         Please provide a detailed and accurate response considering the document content and the user's question.\n"
    )
}

fn last_line(message: &str) -> &str {
    message.rsplit('\n').next().unwrap_or(message)
}
