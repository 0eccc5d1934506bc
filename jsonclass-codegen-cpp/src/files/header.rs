use std::path::{Path, PathBuf};

use jsonclass_core::{FileRules, GeneratedFile, Overwrite};

/// A generated header, written as `<record>.<extension>`.
#[derive(Debug, Clone)]
pub struct HeaderFile {
    record: String,
    extension: String,
    content: String,
    overwrite: Overwrite,
}

impl HeaderFile {
    pub fn new(
        record: impl Into<String>,
        extension: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            record: record.into(),
            extension: extension.into(),
            content: content.into(),
            overwrite: Overwrite::Always,
        }
    }

    /// Leave an existing file untouched instead of replacing it.
    pub fn keep_existing(mut self) -> Self {
        self.overwrite = Overwrite::IfMissing;
        self
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.record, self.extension)
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl GeneratedFile for HeaderFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file_name())
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: self.overwrite,
        }
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}
