//! Example input files: a `#<name>` line followed by a JSON document.

use std::path::Path;

use serde_json::Value;

use crate::error::{InputError, Result, SourceContext};

/// Marks the record name on the first line of an input file.
pub const NAME_MARKER: char = '#';

/// A parsed input file.
#[derive(Debug, Clone)]
pub struct ExampleInput {
    /// Name of the root record, taken from the first line.
    pub name: String,
    /// The example document.
    pub document: Value,
}

impl ExampleInput {
    /// Read and parse an input file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(InputError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::parse_str(&content, &path.display().to_string())
    }

    /// Parse input content, using `filename` for error reporting.
    pub fn parse_str(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);

        let (first_line, body_offset) = match content.find('\n') {
            Some(end) => (&content[..end], end + 1),
            None => (content, content.len()),
        };
        let name = first_line
            .trim_end_matches('\r')
            .strip_prefix(NAME_MARKER)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ctx.missing_name_error())?;

        let document = serde_json::from_str(&content[body_offset..])
            .map_err(|e| ctx.json_error(e, body_offset))?;

        tracing::debug!(name, filename, "parsed example input");
        Ok(Self {
            name: name.to_string(),
            document,
        })
    }
}
