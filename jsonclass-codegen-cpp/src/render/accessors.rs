use jsonclass_codegen::{CodeBuilder, GenerationMode, RecordBlueprint};

use super::{FieldSyntax, RAW_DOCUMENT, SectionRenderer};

/// Const getter, mutable getter and setter for every field.
///
/// In lazy mode the const getter is the single place a slot gets filled:
/// it writes the `mutable` optional on first access, so reading stays
/// logically const. The mutable getter delegates to it and the setter marks
/// the slot as set, after which the stored document is never consulted for
/// that field again.
#[derive(Debug, Clone, Copy, Default)]
pub struct Accessors;

impl SectionRenderer for Accessors {
    fn render(&self, out: &mut CodeBuilder, record: &RecordBlueprint, mode: GenerationMode) {
        for (i, field) in record.fields.iter().enumerate() {
            if i > 0 {
                out.push_blank();
            }
            let f = FieldSyntax::new(field);
            match mode {
                GenerationMode::Eager => render_eager_getters(out, &f),
                GenerationMode::Lazy => render_lazy_getters(out, &f, &record.name),
            }
            out.push_blank();
            render_setter(out, &f);
        }
    }
}

fn render_eager_getters(out: &mut CodeBuilder, f: &FieldSyntax<'_>) {
    let ret = format!("return {};", f.storage);
    out.push_block(&format!("const {}& {}() const {{", f.ty, f.name()), "}", |out| {
        out.push_line(&ret);
    });
    out.push_blank();
    out.push_block(&format!("{}& {}() {{", f.ty, f.name()), "}", |out| {
        out.push_line(&ret);
    });
}

fn render_lazy_getters(out: &mut CodeBuilder, f: &FieldSyntax<'_>, record: &str) {
    out.push_block(&format!("const {}& {}() const {{", f.ty, f.name()), "}", |out| {
        out.push_block(&format!("if (!{}) {{", f.storage), "}", |out| {
            render_materialize(out, f);
        });
        out.push_line(&format!("return *{};", f.storage));
    });
    out.push_blank();
    out.push_block(&format!("{}& {}() {{", f.ty, f.name()), "}", |out| {
        out.push_line(&format!(
            "return const_cast<{}&>(static_cast<const {}&>(*this).{}());",
            f.ty,
            record,
            f.name()
        ));
    });
}

/// Fill an unset slot from the stored document, falling back to the example
/// default when the key is missing and to an empty value when its shape is
/// wrong.
fn render_materialize(out: &mut CodeBuilder, f: &FieldSyntax<'_>) {
    let source = f.at(RAW_DOCUMENT);

    if f.is_nested() {
        out.push_line(&format!("{}.emplace();", f.storage));
        let condition = format!(
            "if ({}.contains({}) && {}.is_object()) {{",
            RAW_DOCUMENT, f.key, source
        );
        out.push_block(&condition, "}", |out| {
            out.push_line(&format!("{}->FromJson({});", f.storage, source));
        });
        return;
    }

    let convert = format!("{} = {}.get<{}>();", f.storage, source, f.ty);
    out.push_block(
        &format!("if ({}.contains({})) {{", RAW_DOCUMENT, f.key),
        "} else {",
        |out| {
            if f.is_array() {
                out.push_block(&format!("if ({}.is_array()) {{", source), "} else {", |out| {
                    out.push_line(&convert);
                });
                out.push_indent()
                    .push_line(&format!("{} = {}{{}};", f.storage, f.ty))
                    .push_dedent()
                    .push_line("}");
            } else {
                out.push_line(&convert);
            }
        },
    );
    out.push_indent()
        .push_line(&format!("{} = {};", f.storage, f.optional_default()))
        .push_dedent()
        .push_line("}");
}

fn render_setter(out: &mut CodeBuilder, f: &FieldSyntax<'_>) {
    out.push_block(
        &format!("void set_{}(const {}& value) {{", f.name(), f.ty),
        "}",
        |out| {
            out.push_line(&format!("{} = value;", f.storage));
        },
    );
}
