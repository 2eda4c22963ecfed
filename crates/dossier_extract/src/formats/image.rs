use std::path::Path;

use crate::error::Result;
use crate::ocr::OcrEngine;

/// Decode an image and run it through the OCR engine. Only the recognized
/// text fields are kept, space-joined, in the order the engine returned
/// them; no re-sorting.
pub(crate) fn extract(path: &Path, ocr: &dyn OcrEngine) -> Result<String> {
    let image = image::open(path)?;
    let spans = ocr.recognize(&image)?;
    tracing::debug!(spans = spans.len(), "ocr spans recognized");
    Ok(spans
        .iter()
        .map(|span| span.text.as_str())
        .collect::<Vec<_>>()
        .join(" "))
}
