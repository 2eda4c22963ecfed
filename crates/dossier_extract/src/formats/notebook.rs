use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Deserialize)]
struct Notebook {
    #[serde(default)]
    cells: Vec<Cell>,
}

#[derive(Debug, Deserialize)]
struct Cell {
    cell_type: String,
    #[serde(default)]
    source: Source,
}

/// Notebook cell sources appear either as a list of lines or as one string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Source {
    Lines(Vec<String>),
    Text(String),
}

impl Default for Source {
    fn default() -> Self {
        Source::Text(String::new())
    }
}

impl Source {
    fn joined(&self) -> String {
        match self {
            Source::Lines(lines) => lines.concat(),
            Source::Text(text) => text.clone(),
        }
    }
}

/// Extract only the code cells of a Jupyter notebook, in cell order, each
/// cell's source followed by a newline. Markdown and output cells are
/// ignored.
pub(crate) fn extract(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let notebook: Notebook = serde_json::from_reader(BufReader::new(file))?;

    let mut text = String::new();
    for cell in &notebook.cells {
        if cell.cell_type == "code" {
            text.push_str(&cell.source.joined());
            text.push('\n');
        }
    }
    Ok(text)
}
