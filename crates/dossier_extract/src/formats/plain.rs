use std::path::Path;

use crate::error::Result;

/// Read a text file verbatim. Used for `.txt` and `.py`.
pub(crate) fn extract(path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}
