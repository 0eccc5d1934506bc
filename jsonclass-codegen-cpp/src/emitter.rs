use jsonclass_codegen::{
    CodeBuilder, GenerationMode, Indent, RecordBlueprint, RecordBuilder, TypeMapper,
    schema::Result,
};
use jsonclass_core::GENERATED_HEADER;
use serde_json::Value;

use crate::{
    Accessors, CPP_NAMING, CppTypeMapper, FieldDeclarations, FromJsonMethod, HeaderFile,
    SectionRenderer, ToJsonMethod,
};

const LAZY_NOTE: &str = "Fields materialize on first access; instances are not thread-safe.";

/// Options applied uniformly to every record of one generation request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitOptions {
    pub mode: GenerationMode,
    pub indent: Indent,
}

impl EmitOptions {
    pub fn new(mode: GenerationMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }
}

/// Generates a self-contained C++ header for an example document.
///
/// The blueprint tree is built once; every record is then rendered
/// depth-first so nested classes are defined before the enclosing class
/// uses them. Output is a pure function of the inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassEmitter {
    options: EmitOptions,
}

impl ClassEmitter {
    pub fn new(options: EmitOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> EmitOptions {
        self.options
    }

    /// Infer the schema of `document` and render the header for record `name`.
    pub fn emit(&self, name: &str, document: &Value) -> Result<String> {
        let blueprint = RecordBuilder::new(&CPP_NAMING).build_root(name, document)?;
        Ok(self.emit_blueprint(&blueprint))
    }

    /// Like [`Self::emit`], wrapped as a writable `<name>.<extension>` file.
    pub fn header_file(&self, name: &str, document: &Value, extension: &str) -> Result<HeaderFile> {
        let content = self.emit(name, document)?;
        Ok(HeaderFile::new(name, extension, content))
    }

    /// Render an already built blueprint tree.
    pub fn emit_blueprint(&self, record: &RecordBlueprint) -> String {
        let mode = self.options.mode;
        let guard = format!("{}_H_", record.name);
        let mut out = CodeBuilder::new(self.options.indent);

        out.push_line(GENERATED_HEADER)
            .push_comment(&format!("Mode: {}", mode))
            .push_line(&format!("#ifndef {}", guard))
            .push_line(&format!("#define {}", guard))
            .push_blank();

        out.push_line("#include <map>")
            .push_line("#include <nlohmann/json.hpp>");
        if mode.is_lazy() {
            out.push_line("#include <optional>");
        }
        out.push_line("#include <string>")
            .push_line("#include <vector>")
            .push_blank()
            .push_line("using json = nlohmann::json;")
            .push_blank();

        self.render_record(&mut out, record);

        out.push_blank()
            .push_line(&format!("#endif  // {}", guard));

        tracing::debug!(
            record = %record.name,
            mode = %mode,
            language = CppTypeMapper.language(),
            records = record.record_count(),
            "emitted header"
        );
        out.build()
    }

    fn render_record(&self, out: &mut CodeBuilder, record: &RecordBlueprint) {
        let mode = self.options.mode;
        let name = &record.name;

        if mode.is_lazy() {
            out.push_comment(LAZY_NOTE);
        }
        out.push_line(&format!("class {} {{", name))
            .push_line(" public:")
            .push_indent();

        for nested in &record.nested_records {
            self.render_record(out, nested);
            out.push_blank();
        }

        out.push_line(&format!("{}() = default;", name))
            .push_line(&format!("{}(const json& j) {{ FromJson(j); }}", name))
            .push_blank();
        FromJsonMethod.render(out, record, mode);
        out.push_blank();
        ToJsonMethod.render(out, record, mode);
        out.push_dedent();

        if mode.is_lazy() || !record.fields.is_empty() {
            out.push_blank().push_line(" private:").push_indent();
            FieldDeclarations.render(out, record, mode);
            out.push_dedent();
        }

        if !record.fields.is_empty() {
            out.push_blank().push_line(" public:").push_indent();
            Accessors.render(out, record, mode);
            out.push_dedent();
        }

        out.push_line("};");
    }
}
