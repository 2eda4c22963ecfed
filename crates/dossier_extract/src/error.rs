use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("The file is empty.")]
    EmptyContent,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error("pdf extraction failed: {0}")]
    Pdf(String),

    #[error("docx extraction failed: {0}")]
    Docx(String),

    #[error("ocr failed: {0}")]
    Ocr(String),
}

pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_display() {
        let err = ExtractError::UnsupportedFormat(".xyz".to_string());
        assert_eq!(err.to_string(), "Unsupported file type: .xyz");
    }

    #[test]
    fn test_empty_content_display() {
        assert_eq!(ExtractError::EmptyContent.to_string(), "The file is empty.");
    }

    #[test]
    fn test_io_error_passes_through() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = ExtractError::from(io_err);
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn test_docx_error_display() {
        let err = ExtractError::Docx("invalid Zip archive".to_string());
        assert!(err.to_string().starts_with("docx extraction failed:"));
    }
}
