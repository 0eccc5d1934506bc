//! Section renderers for generated C++ records.
//!
//! Each renderer emits one section of a class body for a single
//! [`RecordBlueprint`] node; [`ClassEmitter`](crate::ClassEmitter) calls them
//! for every node of the tree, nested records first.

mod accessors;
mod fields;
mod from_json;
mod to_json;

pub use accessors::Accessors;
pub use fields::FieldDeclarations;
pub use from_json::FromJsonMethod;
pub use to_json::ToJsonMethod;
use jsonclass_codegen::{CodeBuilder, FieldBlueprint, GenerationMode, RecordBlueprint, TypeMapper};
use jsonclass_core::quote_c_string;

use crate::{CPP_NAMING, CppTypeMapper};

/// Name of the slot holding the raw document in lazy records.
pub(crate) const RAW_DOCUMENT: &str = "json_";

/// Renders one section of a record body.
pub trait SectionRenderer {
    /// Emit the section for `record` at the builder's current indent level.
    fn render(&self, out: &mut CodeBuilder, record: &RecordBlueprint, mode: GenerationMode);
}

/// C++ spellings derived from one field blueprint.
pub(crate) struct FieldSyntax<'f> {
    field: &'f FieldBlueprint,
    /// Member variable backing the field (`age_`).
    pub storage: String,
    /// Quoted, escaped JSON key (`"age"`).
    pub key: String,
    /// Value type of the field (`int`, `scores_type`, ...).
    pub ty: String,
}

impl<'f> FieldSyntax<'f> {
    pub fn new(field: &'f FieldBlueprint) -> Self {
        Self {
            field,
            storage: CPP_NAMING.storage_name(&field.safe_identifier),
            key: quote_c_string(&field.original_key),
            ty: CppTypeMapper.render_type(&field.ty),
        }
    }

    /// Accessor name.
    pub fn name(&self) -> &str {
        &self.field.safe_identifier
    }

    pub fn is_nested(&self) -> bool {
        self.field.is_nested
    }

    pub fn is_array(&self) -> bool {
        self.field.ty.is_array()
    }

    /// Brace initializer holding the example default (`{26}`).
    pub fn default_init(&self) -> String {
        format!("{{{}}}", self.field.default_literal)
    }

    /// Default value wrapped for an optional slot
    /// (`decltype(age_)::value_type{26}`).
    pub fn optional_default(&self) -> String {
        format!("decltype({})::value_type{}", self.storage, self.default_init())
    }

    /// `json_.at("age")`-style lookup on `source`.
    pub fn at(&self, source: &str) -> String {
        format!("{}.at({})", source, self.key)
    }
}
