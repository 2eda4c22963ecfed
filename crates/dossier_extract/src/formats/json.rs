use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::Result;

/// Parse a JSON document and re-serialize it human-readable. The round trip
/// is semantic, not byte-identical.
pub(crate) fn extract(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let value: serde_json::Value = serde_json::from_reader(BufReader::new(file))?;
    Ok(serde_json::to_string_pretty(&value)?)
}
