//! `dossier chat`: interactive session.
//!
//! The history value is threaded through the loop: each turn gets the
//! previous value and hands back the updated one. An attached file applies
//! to the next message only, matching the send-then-clear behavior of the
//! original input surface.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use futures::StreamExt;

use dossier_core::ConversationHistory;
use dossier_runtime::ChatOrchestrator;

use crate::output;

pub async fn handle(orchestrator: &ChatOrchestrator, mut file: Option<PathBuf>) -> Result<()> {
    output::header("dossier — chat with your documents");
    output::dim("Commands: :file <path>  :history  :quit");
    if let Some(path) = &file {
        output::dim(&format!("attached: {}", path.display()));
    }

    let mut history = ConversationHistory::new();
    let stdin = std::io::stdin();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(command) = line.strip_prefix(':') {
            match command.split_once(' ') {
                Some(("file", path)) => {
                    let path = PathBuf::from(path.trim());
                    output::dim(&format!("attached: {}", path.display()));
                    file = Some(path);
                }
                None if command == "history" => print!("{history}"),
                None if command == "quit" || command == "q" => break,
                _ => output::warning(&format!("unknown command :{command}")),
            }
            continue;
        }

        // The file rides along on this message only.
        let attached = file.take();
        let mut stream = orchestrator.handle_turn(line.to_string(), attached, history.clone());

        let mut spinner = Some(output::spinner("thinking..."));
        let mut printed = 0usize;
        let mut updated = history.clone();
        while let Some(update) = stream.next().await {
            if let Some(bar) = spinner.take() {
                bar.finish_and_clear();
            }
            output::stream_delta(&update.response, &mut printed);
            updated = update.history;
        }
        history = updated;
        println!();
    }

    Ok(())
}
