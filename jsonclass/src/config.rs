//! Optional `jsonclass.toml` defaults for the generate command.

use std::path::{Path, PathBuf};

use jsonclass_codegen::{GenerationMode, Indent};
use serde::Deserialize;

use crate::error::{InputError, Result, SourceContext};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG: &str = "jsonclass.toml";

const INDENT_WIDTHS: [u8; 4] = [0, 2, 4, 8];

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default generation mode.
    pub mode: Option<GenerationMode>,
    /// Spaces per indent level, `0` for tabs.
    pub indent: Option<u8>,
    /// Output file extension, without the dot.
    pub extension: Option<String>,
    /// Default output directory.
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Load the config at `path`, or the default file when `path` is `None`.
    ///
    /// A missing default file yields the empty config; a missing explicit
    /// file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_CONFIG), false),
        };
        if !explicit && !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(InputError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let config = Self::parse_str(&content, &path.display().to_string())?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse config content, using `filename` for error reporting.
    pub fn parse_str(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: Self = toml::from_str(content).map_err(|e| ctx.config_error(e))?;

        if let Some(width) = config.indent
            && !INDENT_WIDTHS.contains(&width)
        {
            return Err(ctx.invalid_config(format!(
                "indent must be 2, 4 or 8 (or 0 for tabs), got {}",
                width
            )));
        }
        if let Some(extension) = &config.extension
            && (extension.is_empty() || extension.starts_with('.'))
        {
            return Err(ctx.invalid_config(format!(
                "extension must be non-empty and given without a leading '.', got '{}'",
                extension
            )));
        }

        Ok(config)
    }

    pub fn mode(&self) -> GenerationMode {
        self.mode.unwrap_or_default()
    }

    pub fn indent(&self) -> Indent {
        self.indent.map(Indent::from_width).unwrap_or_default()
    }

    pub fn extension(&self) -> &str {
        self.extension.as_deref().unwrap_or("h")
    }
}
