use std::fs::File;
use std::io::Read;
use std::path::Path;

use zip::ZipArchive;

use crate::error::{ExtractError, Result};

/// Extract paragraph text from a Word document, one paragraph per line, in
/// document order. A `.docx` file is a zip package; the body lives in
/// `word/document.xml`.
pub(crate) fn extract(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let mut archive =
        ZipArchive::new(file).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let mut entry = archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::Docx(format!("word/document.xml: {e}")))?;
    let mut xml = String::new();
    entry
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Docx(e.to_string()))?;

    Ok(paragraphs_to_text(&xml))
}

/// Strip WordprocessingML down to its text runs. Paragraph ends become
/// newlines, explicit breaks and tabs are kept, all other markup drops.
fn paragraphs_to_text(xml: &str) -> String {
    let with_breaks = xml
        .replace("</w:p>", "\n")
        .replace("<w:tab/>", "\t")
        .replace("<w:br/>", "\n");

    let mut stripped = String::with_capacity(with_breaks.len());
    let mut in_tag = false;
    for ch in with_breaks.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => stripped.push(ch),
            _ => {}
        }
    }

    decode_xml_entities(&stripped)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn decode_xml_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
}
