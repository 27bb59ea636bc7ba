//! Reading Floating Point Values From Text Files

use crate::common::*;
use crate::fileutil::file_to_string;
use std::path::Path;

/// Parses whitespace or comma separated floats. Tokens that are not numbers
/// are stored as `0.0` so voxel positions are preserved.
///
/// * `text` - The text.
pub fn parse_floats_lenient(text: &str) -> Vec<Float> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(|t| t.parse::<Float>().unwrap_or(0.0))
        .collect()
}

/// Reads a text file of floating point values.
///
/// * `path` - Path to the file.
pub fn read_float_file(path: &Path) -> Result<Vec<Float>, String> {
    let text = file_to_string(path)?;
    Ok(parse_floats_lenient(&text))
}
