use jsonclass_codegen::{CodeBuilder, GenerationMode, RecordBlueprint};

use super::{FieldSyntax, SectionRenderer};

/// The `ToJson` dump method.
///
/// Lazy records read through their const accessors, so fields that were
/// never touched are materialized from the stored document before being
/// written back.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToJsonMethod;

impl SectionRenderer for ToJsonMethod {
    fn render(&self, out: &mut CodeBuilder, record: &RecordBlueprint, mode: GenerationMode) {
        out.push_block("json ToJson() const {", "}", |out| {
            out.push_line("json j = json::object();");
            for field in &record.fields {
                let f = FieldSyntax::new(field);
                let value = match mode {
                    GenerationMode::Eager => f.storage.clone(),
                    GenerationMode::Lazy => format!("{}()", f.name()),
                };
                if f.is_nested() {
                    out.push_line(&format!("j[{}] = {}.ToJson();", f.key, value));
                } else {
                    out.push_line(&format!("j[{}] = {};", f.key, value));
                }
            }
            out.push_line("return j;");
        });
    }
}

#[cfg(test)]
mod tests {
    use jsonclass_codegen::RecordBuilder;
    use serde_json::json;

    use super::*;
    use crate::CPP_NAMING;

    fn render(document: serde_json::Value, mode: GenerationMode) -> String {
        let record = RecordBuilder::new(&CPP_NAMING)
            .build_root("person", &document)
            .unwrap();
        let mut out = CodeBuilder::cpp();
        ToJsonMethod.render(&mut out, &record, mode);
        out.build()
    }

    #[test]
    fn test_eager_dump() {
        let code = render(json!({"age": 26, "scores": {"Math": 95}}), GenerationMode::Eager);
        assert_eq!(
            code,
            r#"json ToJson() const {
  json j = json::object();
  j["age"] = age_;
  j["scores"] = scores_.ToJson();
  return j;
}
"#
        );
    }

    #[test]
    fn test_lazy_dump_goes_through_accessors() {
        let code = render(json!({"class": true, "scores": {"Math": 95}}), GenerationMode::Lazy);
        assert_eq!(
            code,
            r#"json ToJson() const {
  json j = json::object();
  j["class"] = class_rn();
  j["scores"] = scores().ToJson();
  return j;
}
"#
        );
    }

    #[test]
    fn test_dump_writes_storage_slot() {
        let code = render(json!({"a_b": 1}), GenerationMode::Eager);
        assert!(code.contains(r#"j["a_b"] = a_b_;"#));
    }
}
