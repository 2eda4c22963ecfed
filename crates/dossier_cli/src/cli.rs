use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "dossier")]
#[command(about = "Local document-grounded chat assistant", long_about = None)]
pub struct Cli {
    /// Ollama model name (default: llama3.2:1b; env: OLLAMA_MODEL)
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Ollama base URL (default: http://localhost:11434; env: OLLAMA_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask one question, optionally grounded in a file
    Ask {
        /// The message; its last line is treated as the question
        message: String,

        /// File whose extracted text is folded into the prompt
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },

    /// Interactive chat session (the default)
    Chat {
        /// File attached to the first message
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },
}
