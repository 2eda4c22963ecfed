use std::path::Path;

/// The recognized input formats. Dispatch is on the file extension,
/// case-sensitive: only the lowercase forms are in the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Pdf,
    Json,
    Jpg,
    Png,
    Docx,
    Txt,
    Py,
    Ipynb,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "csv" => Some(FileFormat::Csv),
            "pdf" => Some(FileFormat::Pdf),
            "json" => Some(FileFormat::Json),
            "jpg" => Some(FileFormat::Jpg),
            "png" => Some(FileFormat::Png),
            "docx" => Some(FileFormat::Docx),
            "txt" => Some(FileFormat::Txt),
            "py" => Some(FileFormat::Py),
            "ipynb" => Some(FileFormat::Ipynb),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileFormat::Csv => "csv",
            FileFormat::Pdf => "pdf",
            FileFormat::Json => "json",
            FileFormat::Jpg => "jpg",
            FileFormat::Png => "png",
            FileFormat::Docx => "docx",
            FileFormat::Txt => "txt",
            FileFormat::Py => "py",
            FileFormat::Ipynb => "ipynb",
        }
    }
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
