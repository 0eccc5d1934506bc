use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for input and config loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<InputError>>;

/// Source context for error reporting.
///
/// Keeps the file content and name together so every error built from it
/// can point into the original text.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// The first line has no usable `#<name>` marker.
    pub fn missing_name_error(&self) -> Box<InputError> {
        let first_line = self.src.lines().next().unwrap_or_default();
        Box::new(InputError::MissingName {
            src: self.named_source(),
            span: (0, first_line.len()).into(),
        })
    }

    /// Create a parse error for the JSON body, which starts `body_offset`
    /// bytes into the file.
    pub fn json_error(&self, source: serde_json::Error, body_offset: usize) -> Box<InputError> {
        let body = self.src.get(body_offset..).unwrap_or_default();
        let offset = body_offset + line_column_offset(body, source.line(), source.column());
        let len = usize::from(offset < self.src.len());
        Box::new(InputError::Json {
            src: self.named_source(),
            span: (offset, len).into(),
            source,
        })
    }

    /// Create a parse error from a toml error.
    pub fn config_error(&self, source: toml::de::Error) -> Box<InputError> {
        let span = source.span().map(SourceSpan::from);
        Box::new(InputError::Config {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a config validation error without a span.
    pub fn invalid_config(&self, message: impl Into<String>) -> Box<InputError> {
        Box::new(InputError::InvalidConfig {
            src: self.named_source(),
            message: message.into(),
        })
    }
}

/// Byte offset of a 1-based line/column position, clamped to `text`.
fn line_column_offset(text: &str, line: usize, column: usize) -> usize {
    let line_start: usize = text
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(text.len())
}

#[derive(Debug, Error, Diagnostic)]
pub enum InputError {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(jsonclass::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing record name")]
    #[diagnostic(
        code(jsonclass::missing_name),
        help("start the file with a '#<name>' line, e.g. '#person'")
    )]
    MissingName {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected '#<name>' here")]
        span: SourceSpan,
    },

    #[error("invalid JSON example")]
    #[diagnostic(code(jsonclass::json))]
    Json {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: SourceSpan,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse config")]
    #[diagnostic(code(jsonclass::config))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(jsonclass::invalid_config))]
    InvalidConfig {
        #[source_code]
        src: NamedSource<String>,
        message: String,
    },
}
