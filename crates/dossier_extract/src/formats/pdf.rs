use std::path::Path;

use crate::error::{ExtractError, Result};

/// Extract a PDF as a markdown-like text rendering. Reading order of the
/// extractable text is preserved; layout and images are not.
pub(crate) fn extract(path: &Path) -> Result<String> {
    let text =
        pdf_extract::extract_text(path).map_err(|e| ExtractError::Pdf(e.to_string()))?;
    Ok(to_markdown(&text))
}

/// Normalize raw extraction output: trailing whitespace trimmed, runs of
/// blank lines collapsed to a single paragraph break.
fn to_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_pending = false;
    let mut started = false;

    for line in text.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            blank_pending = started;
            continue;
        }
        if started {
            out.push('\n');
            if blank_pending {
                out.push('\n');
            }
        }
        out.push_str(line);
        started = true;
        blank_pending = false;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_markdown_collapses_blank_runs() {
        let raw = "Title\n\n\n\nFirst paragraph line.\nSecond line.\n\nNext paragraph.\n";
        assert_eq!(
            to_markdown(raw),
            "Title\n\nFirst paragraph line.\nSecond line.\n\nNext paragraph."
        );
    }

    #[test]
    fn test_to_markdown_strips_leading_blanks() {
        assert_eq!(to_markdown("\n\nbody"), "body");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = extract(Path::new("/nonexistent/input.pdf")).unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }
}
