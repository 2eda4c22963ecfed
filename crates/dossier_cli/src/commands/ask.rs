//! `dossier ask`: one turn, streamed to stdout.

use std::path::PathBuf;

use anyhow::Result;
use futures::StreamExt;

use dossier_core::ConversationHistory;
use dossier_runtime::ChatOrchestrator;

use crate::output;

pub async fn handle(
    orchestrator: &ChatOrchestrator,
    message: String,
    file: Option<PathBuf>,
) -> Result<()> {
    let mut stream = orchestrator.handle_turn(message, file, ConversationHistory::new());

    let mut spinner = Some(output::spinner("thinking..."));
    let mut printed = 0usize;
    while let Some(update) = stream.next().await {
        if let Some(bar) = spinner.take() {
            bar.finish_and_clear();
        }
        output::stream_delta(&update.response, &mut printed);
    }
    println!();
    Ok(())
}
