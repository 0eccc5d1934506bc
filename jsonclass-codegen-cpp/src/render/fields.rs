use jsonclass_codegen::{CodeBuilder, GenerationMode, RecordBlueprint};

use super::{FieldSyntax, RAW_DOCUMENT, SectionRenderer};

/// Storage slots, one per field.
///
/// Eager slots hold the value directly, initialized with the example
/// default. Lazy slots are `mutable std::optional`s so const accessors can
/// fill them; nested records start unset, and the record keeps the raw
/// document it was loaded from.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldDeclarations;

impl SectionRenderer for FieldDeclarations {
    fn render(&self, out: &mut CodeBuilder, record: &RecordBlueprint, mode: GenerationMode) {
        if mode.is_lazy() {
            out.push_line(&format!("mutable json {};", RAW_DOCUMENT));
        }

        for field in &record.fields {
            let f = FieldSyntax::new(field);
            let line = match (mode, f.is_nested()) {
                (GenerationMode::Eager, true) => format!("{} {};", f.ty, f.storage),
                (GenerationMode::Eager, false) => {
                    format!("{} {}{};", f.ty, f.storage, f.default_init())
                }
                (GenerationMode::Lazy, true) => {
                    format!("mutable std::optional<{}> {};", f.ty, f.storage)
                }
                (GenerationMode::Lazy, false) => format!(
                    "mutable std::optional<{}> {}{{{}}};",
                    f.ty,
                    f.storage,
                    f.optional_default()
                ),
            };
            out.push_line(&line);
        }
    }
}
