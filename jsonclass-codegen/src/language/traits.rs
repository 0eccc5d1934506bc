//! Language-agnostic code generation traits.

use crate::schema::TypeDescriptor;

/// Trait for mapping [`TypeDescriptor`]s to language-specific type strings.
///
/// Implement the leaf mappings for each target language; [`Self::render_type`]
/// composes them for arrays and nested records.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    fn map_bool(&self) -> &'static str;

    fn map_int32(&self) -> &'static str;

    fn map_uint32(&self) -> &'static str;

    fn map_float64(&self) -> &'static str;

    fn map_string(&self) -> &'static str;

    /// Map the string-to-string mapping used when an object is inferred
    /// outside of the record builder (first element of an array of objects).
    fn map_string_map(&self) -> &'static str;

    /// Map a sequence type given its rendered element type.
    fn map_array(&self, inner: &str) -> String;

    /// Map a reference to a generated nested record type.
    fn map_nested(&self, name: &str) -> String {
        name.to_string()
    }

    /// Render a full type descriptor.
    fn render_type(&self, ty: &TypeDescriptor) -> String {
        match ty {
            TypeDescriptor::Bool => self.map_bool().to_string(),
            TypeDescriptor::Int32 => self.map_int32().to_string(),
            TypeDescriptor::UInt32 => self.map_uint32().to_string(),
            TypeDescriptor::Float64 => self.map_float64().to_string(),
            TypeDescriptor::String => self.map_string().to_string(),
            TypeDescriptor::StringMap => self.map_string_map().to_string(),
            TypeDescriptor::ArrayOf(inner) => self.map_array(&self.render_type(inner)),
            TypeDescriptor::NestedRecordRef(name) => self.map_nested(name),
        }
    }
}
