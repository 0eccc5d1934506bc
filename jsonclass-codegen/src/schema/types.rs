//! Blueprint model produced by the record builder.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic type of a field, independent of any target language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum TypeDescriptor {
    Bool,
    Int32,
    UInt32,
    Float64,
    String,
    /// String-to-string mapping. Only inferred for an object reached through
    /// the first element of an array; object-valued fields always become
    /// [`TypeDescriptor::NestedRecordRef`].
    StringMap,
    /// Sequence whose element type comes from the first example element.
    ArrayOf(Box<TypeDescriptor>),
    /// Reference to a nested record generated for an object-valued field.
    NestedRecordRef(String),
}

impl TypeDescriptor {
    /// Create an array type.
    pub fn array(inner: TypeDescriptor) -> Self {
        Self::ArrayOf(Box::new(inner))
    }

    /// Create a nested record reference.
    pub fn nested(name: impl Into<String>) -> Self {
        Self::NestedRecordRef(name.into())
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::ArrayOf(_))
    }

    pub fn is_nested(&self) -> bool {
        matches!(self, Self::NestedRecordRef(_))
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Int32 => f.write_str("int32"),
            Self::UInt32 => f.write_str("uint32"),
            Self::Float64 => f.write_str("float64"),
            Self::String => f.write_str("string"),
            Self::StringMap => f.write_str("map<string, string>"),
            Self::ArrayOf(inner) => write!(f, "[{}]", inner),
            Self::NestedRecordRef(name) => write!(f, "{}", name),
        }
    }
}

/// How generated records materialize their fields.
///
/// Chosen once per generation request and applied to every record in the
/// tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Every field is converted when the document is loaded.
    #[default]
    Eager,
    /// Loading only stores the raw document; each field is converted on
    /// first access and cached until the next load.
    Lazy,
}

impl GenerationMode {
    pub fn is_lazy(self) -> bool {
        matches!(self, Self::Lazy)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Eager => "eager",
            Self::Lazy => "lazy",
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One member of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldBlueprint {
    /// Member name exactly as it appears in the JSON document.
    pub original_key: String,
    /// Identifier used for accessors and storage in generated code.
    pub safe_identifier: String,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    /// Default value literal captured from the example document. Empty for
    /// nested records, which are default-constructed.
    pub default_literal: String,
    pub is_nested: bool,
}

/// Description of one generated record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordBlueprint {
    pub name: String,
    /// Fields in the iteration order of the example object.
    pub fields: Vec<FieldBlueprint>,
    /// Records for object-valued fields, in field order.
    pub nested_records: Vec<RecordBlueprint>,
}

impl RecordBlueprint {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            nested_records: Vec::new(),
        }
    }

    /// Find a direct nested record by type name.
    pub fn nested(&self, name: &str) -> Option<&RecordBlueprint> {
        self.nested_records.iter().find(|r| r.name == name)
    }

    /// Find a field by its original JSON key.
    pub fn field(&self, key: &str) -> Option<&FieldBlueprint> {
        self.fields.iter().find(|f| f.original_key == key)
    }

    /// Number of records in this tree, including this one.
    pub fn record_count(&self) -> usize {
        1 + self
            .nested_records
            .iter()
            .map(RecordBlueprint::record_count)
            .sum::<usize>()
    }

    /// Nesting depth of this tree; a record without nested records has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .nested_records
            .iter()
            .map(RecordBlueprint::depth)
            .max()
            .unwrap_or(0)
    }
}
