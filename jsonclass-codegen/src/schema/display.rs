//! Blueprint tree display formatting.
//!
//! # Example
//!
//! ```
//! use jsonclass_codegen::schema::{BlueprintTreeDisplay, FieldBlueprint, RecordBlueprint, TypeDescriptor};
//!
//! let mut record = RecordBlueprint::new("person");
//! record.fields.push(FieldBlueprint {
//!     original_key: "age".to_string(),
//!     safe_identifier: "age".to_string(),
//!     ty: TypeDescriptor::Int32,
//!     default_literal: "26".to_string(),
//!     is_nested: false,
//! });
//!
//! let text = BlueprintTreeDisplay::new(&record).to_string();
//! assert_eq!(text, "person\n└─ age: int32 = 26\n");
//! ```

use std::fmt;

use super::RecordBlueprint;

/// Tree view of a blueprint with box-drawing characters.
///
/// ```text
/// person
/// ├─ age: int32 = 26
/// └─ scores: scores_type
///    └─ Math: int32 = 95
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlueprintTreeDisplay<'a> {
    root: &'a RecordBlueprint,
}

impl<'a> BlueprintTreeDisplay<'a> {
    pub fn new(root: &'a RecordBlueprint) -> Self {
        Self { root }
    }

    fn fmt_record(
        &self,
        f: &mut fmt::Formatter<'_>,
        record: &RecordBlueprint,
        prefix: &str,
    ) -> fmt::Result {
        let count = record.fields.len();
        for (i, field) in record.fields.iter().enumerate() {
            let is_last = i + 1 == count;
            let branch = if is_last { "└─ " } else { "├─ " };

            write!(f, "{}{}{}", prefix, branch, field.original_key)?;
            if field.safe_identifier != field.original_key {
                write!(f, " ({})", field.safe_identifier)?;
            }
            write!(f, ": {}", field.ty)?;
            if field.default_literal.is_empty() {
                if !field.is_nested {
                    f.write_str(" = {}")?;
                }
            } else {
                write!(f, " = {}", field.default_literal)?;
            }
            writeln!(f)?;

            if field.is_nested {
                let child_prefix = format!("{}{}", prefix, if is_last { "   " } else { "│  " });
                let nested_name = field.ty.to_string();
                if let Some(nested) = record.nested(&nested_name) {
                    self.fmt_record(f, nested, &child_prefix)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for BlueprintTreeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.root.name)?;
        self.fmt_record(f, self.root, "")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{NamingConvention, RecordBuilder};

    fn escape(name: &str) -> String {
        format!("{}_rn", name)
    }

    fn accept(_: &str) -> Result<(), &'static str> {
        Ok(())
    }

    const NAMING: NamingConvention = NamingConvention {
        reserved_words: &["class"],
        escape_reserved: escape,
        check_identifier: accept,
        nested_type_suffix: "_type",
        storage_suffix: "_",
        generated_members: &[],
    };

    #[test]
    fn test_tree_display() {
        let record = RecordBuilder::new(&NAMING)
            .build_root(
                "person",
                &json!({"age": 26, "scores": {"Math": 95, "class": "A"}, "tags": []}),
            )
            .unwrap();

        let expected = "\
person
├─ age: int32 = 26
├─ scores: scores_type
│  ├─ Math: int32 = 95
│  └─ class (class_rn): string = \"A\"
└─ tags: [string] = {}
";
        assert_eq!(BlueprintTreeDisplay::new(&record).to_string(), expected);
    }
}
