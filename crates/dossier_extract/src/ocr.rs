//! OCR engine seam.
//!
//! The extractor only needs an ordered sequence of recognized text spans;
//! which engine produces them is the embedder's choice. The engine handle is
//! constructed at the process entry point and injected into
//! [`crate::FileExtractor`].

use image::DynamicImage;

use crate::error::{ExtractError, Result};

/// Pixel-space bounding box of a recognized span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// One recognized text region, in the order the engine reports it.
/// Confidence is normalized to `[0, 1]`.
#[derive(Debug, Clone)]
pub struct OcrSpan {
    pub bounds: Option<Bounds>,
    pub text: String,
    pub confidence: f32,
}

impl OcrSpan {
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            bounds: None,
            text: text.into(),
            confidence,
        }
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }
}

pub trait OcrEngine: Send + Sync {
    /// Recognize text in a decoded image. Span order is the engine's reading
    /// order and is preserved verbatim by the extractor.
    fn recognize(&self, image: &DynamicImage) -> Result<Vec<OcrSpan>>;
}

/// Engine used when no OCR backend is compiled in. Image extraction then
/// fails with a descriptive cause, which the extractor boundary renders as
/// ordinary error content.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledOcr;

impl OcrEngine for DisabledOcr {
    fn recognize(&self, _image: &DynamicImage) -> Result<Vec<OcrSpan>> {
        Err(ExtractError::Ocr(
            "no OCR engine configured (build with the ocr-tesseract feature)".to_string(),
        ))
    }
}

/// Tesseract-backed engine via leptess.
#[cfg(feature = "ocr-tesseract")]
pub struct TesseractEngine {
    lang: String,
}

#[cfg(feature = "ocr-tesseract")]
impl TesseractEngine {
    pub fn new(lang: impl Into<String>) -> Self {
        Self { lang: lang.into() }
    }
}

#[cfg(feature = "ocr-tesseract")]
impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new("eng")
    }
}

#[cfg(feature = "ocr-tesseract")]
impl OcrEngine for TesseractEngine {
    fn recognize(&self, image: &DynamicImage) -> Result<Vec<OcrSpan>> {
        let mut png = Vec::new();
        image
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageOutputFormat::Png)
            .map_err(|e| ExtractError::Ocr(format!("failed to encode image: {e}")))?;

        let mut tess = leptess::LepTess::new(None, &self.lang)
            .map_err(|e| ExtractError::Ocr(format!("failed to initialize tesseract: {e}")))?;
        tess.set_image_from_mem(&png)
            .map_err(|e| ExtractError::Ocr(format!("failed to load image: {e}")))?;

        let text = tess
            .get_utf8_text()
            .map_err(|e| ExtractError::Ocr(format!("recognition failed: {e}")))?;
        // leptess reports a page-level mean confidence in percent.
        let confidence = tess.mean_text_conf() as f32 / 100.0;

        Ok(text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| OcrSpan::new(line, confidence))
            .collect())
    }
}
