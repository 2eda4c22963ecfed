use std::path::Path;
use std::sync::Arc;

use crate::error::{ExtractError, Result};
use crate::format::FileFormat;
use crate::formats;
use crate::ocr::{DisabledOcr, OcrEngine};

/// Extension-dispatched text extraction with an infallible public boundary.
///
/// The OCR engine is injected at construction; everything else is stateless.
#[derive(Clone)]
pub struct FileExtractor {
    ocr: Arc<dyn OcrEngine>,
}

impl FileExtractor {
    pub fn new(ocr: Arc<dyn OcrEngine>) -> Self {
        Self { ocr }
    }

    /// Extract a file to plain text. Never fails: any fault is rendered into
    /// the returned string as `"Error processing the file: <cause>"`, so
    /// downstream stages need no file-specific error handling.
    pub fn extract(&self, path: &Path) -> String {
        match self.try_extract(path) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "extraction failed");
                format!("Error processing the file: {err}")
            }
        }
    }

    /// Typed extraction for callers that want to branch on the error kind.
    pub fn try_extract(&self, path: &Path) -> Result<String> {
        let format = FileFormat::from_path(path).ok_or_else(|| unsupported(path))?;
        tracing::debug!(path = %path.display(), %format, "extracting");

        let text = match format {
            FileFormat::Csv => formats::csv::extract(path)?,
            FileFormat::Pdf => formats::pdf::extract(path)?,
            FileFormat::Json => formats::json::extract(path)?,
            FileFormat::Jpg | FileFormat::Png => {
                formats::image::extract(path, self.ocr.as_ref())?
            }
            FileFormat::Docx => formats::docx::extract(path)?,
            FileFormat::Txt | FileFormat::Py => formats::plain::extract(path)?,
            FileFormat::Ipynb => formats::notebook::extract(path)?,
        };

        if text.is_empty() {
            return Err(ExtractError::EmptyContent);
        }
        Ok(text)
    }
}

impl Default for FileExtractor {
    fn default() -> Self {
        Self::new(Arc::new(DisabledOcr))
    }
}

fn unsupported(path: &Path) -> ExtractError {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if ext.is_empty() {
        ExtractError::UnsupportedFormat("(no extension)".to_string())
    } else {
        ExtractError::UnsupportedFormat(format!(".{ext}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(suffix: &str, content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_txt_extracts_verbatim() {
        let file = write_file(".txt", b"hello world");
        assert_eq!(FileExtractor::default().extract(file.path()), "hello world");
    }

    #[test]
    fn test_py_extracts_verbatim() {
        let file = write_file(".py", b"print('hi')\n");
        assert_eq!(FileExtractor::default().extract(file.path()), "print('hi')\n");
    }

    #[test]
    fn test_unsupported_extension_renders_error_text() {
        let file = write_file(".xyz", b"whatever");
        let text = FileExtractor::default().extract(file.path());
        assert!(text.starts_with("Error processing the file:"));
        assert!(text.contains("Unsupported file type"));
    }

    #[test]
    fn test_uppercase_extension_is_unsupported() {
        let file = write_file(".TXT", b"hello");
        let text = FileExtractor::default().extract(file.path());
        assert!(text.contains("Unsupported file type"));
    }

    #[test]
    fn test_empty_file_renders_empty_marker() {
        let file = write_file(".txt", b"");
        let text = FileExtractor::default().extract(file.path());
        assert!(text.starts_with("Error processing the file:"));
        assert!(text.contains("file is empty"));
    }

    #[test]
    fn test_empty_notebook_renders_empty_marker() {
        let file = write_file(".ipynb", br##"{"cells":[{"cell_type":"markdown","source":["# t"]}]}"##);
        let text = FileExtractor::default().extract(file.path());
        assert!(text.contains("file is empty"));
    }

    #[test]
    fn test_corrupt_docx_renders_error_text() {
        let file = write_file(".docx", b"definitely not a zip archive");
        let text = FileExtractor::default().extract(file.path());
        assert!(text.starts_with("Error processing the file:"));
    }

    #[test]
    fn test_missing_file_renders_error_text() {
        let text = FileExtractor::default().extract(Path::new("/nonexistent/x.txt"));
        assert!(text.starts_with("Error processing the file:"));
    }

    #[test]
    fn test_image_without_ocr_backend_renders_error_text() {
        let file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        image::DynamicImage::new_rgb8(2, 2).save(file.path()).unwrap();
        let text = FileExtractor::default().extract(file.path());
        assert!(text.starts_with("Error processing the file:"));
        assert!(text.contains("no OCR engine configured"));
    }

    #[test]
    fn test_try_extract_exposes_typed_errors() {
        let file = write_file(".xyz", b"x");
        let err = FileExtractor::default().try_extract(file.path()).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat(_)));

        let empty = write_file(".txt", b"");
        let err = FileExtractor::default().try_extract(empty.path()).unwrap_err();
        assert!(matches!(err, ExtractError::EmptyContent));
    }

    #[test]
    fn test_csv_dispatch() {
        let file = write_file(".csv", b"a,b\n1,2\n");
        assert_eq!(FileExtractor::default().extract(file.path()), "a\tb\n1\t2\n");
    }

    #[test]
    fn test_json_dispatch() {
        let file = write_file(".json", br#"{"k":1}"#);
        let text = FileExtractor::default().extract(file.path());
        assert!(text.contains("\"k\": 1"));
    }
}
