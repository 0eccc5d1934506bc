use jsonclass_codegen::{CodeBuilder, GenerationMode, RecordBlueprint};

use super::{FieldSyntax, RAW_DOCUMENT, SectionRenderer};

/// The `FromJson` load method.
///
/// Eager: converts every present key; absent keys keep their current value,
/// arrays must be array-shaped and nested records object-shaped. Lazy: only
/// invalidates every slot and keeps the document for later materialization,
/// so loading does not depend on the number of fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct FromJsonMethod;

impl SectionRenderer for FromJsonMethod {
    fn render(&self, out: &mut CodeBuilder, record: &RecordBlueprint, mode: GenerationMode) {
        out.push_block("void FromJson(const json& j) {", "}", |out| match mode {
            GenerationMode::Eager => render_eager(out, record),
            GenerationMode::Lazy => render_lazy(out, record),
        });
    }
}

fn render_eager(out: &mut CodeBuilder, record: &RecordBlueprint) {
    if record.fields.is_empty() {
        out.push_line("(void)j;");
        return;
    }

    for field in &record.fields {
        let f = FieldSyntax::new(field);
        let source = f.at("j");
        if f.is_nested() {
            let condition = format!("if (j.contains({}) && {}.is_object()) {{", f.key, source);
            out.push_block(&condition, "}", |out| {
                out.push_line(&format!("{}.FromJson({});", f.storage, source));
            });
        } else {
            let condition = if f.is_array() {
                format!("if (j.contains({}) && {}.is_array()) {{", f.key, source)
            } else {
                format!("if (j.contains({})) {{", f.key)
            };
            out.push_block(&condition, "}", |out| {
                out.push_line(&format!("{} = {}.get<{}>();", f.storage, source, f.ty));
            });
        }
    }
}

fn render_lazy(out: &mut CodeBuilder, record: &RecordBlueprint) {
    for field in &record.fields {
        let f = FieldSyntax::new(field);
        out.push_line(&format!("{}.reset();", f.storage));
    }
    out.push_line(&format!("{} = j;", RAW_DOCUMENT));
}
