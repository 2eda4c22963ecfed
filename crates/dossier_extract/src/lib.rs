//! Multi-format text extraction.
//!
//! [`FileExtractor`] turns an input file into plain text, dispatching on the
//! file extension. The public boundary never fails: any fault (unsupported
//! format, empty content, decode or I/O error) is rendered into the
//! returned string as `"Error processing the file: <cause>"`, so downstream
//! stages only ever see text. Internally the same faults are typed
//! ([`ExtractError`]) for callers that want to branch.

pub mod error;
pub mod extractor;
pub mod format;
mod formats;
pub mod ocr;

pub use error::ExtractError;
pub use extractor::FileExtractor;
pub use format::FileFormat;
pub use ocr::{Bounds, DisabledOcr, OcrEngine, OcrSpan};

#[cfg(feature = "ocr-tesseract")]
pub use ocr::TesseractEngine;
