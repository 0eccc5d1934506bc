//! C++ backend for jsonclass.
//!
//! Renders [`RecordBlueprint`](jsonclass_codegen::RecordBlueprint) trees as a
//! self-contained header of `nlohmann::json`-backed classes, in either eager
//! or lazy [`GenerationMode`](jsonclass_codegen::GenerationMode).

mod emitter;
mod naming;
mod render;
mod type_mapper;

pub mod files;

pub use emitter::{ClassEmitter, EmitOptions};
pub use files::HeaderFile;
pub use naming::CPP_NAMING;
pub use render::{Accessors, FieldDeclarations, FromJsonMethod, SectionRenderer, ToJsonMethod};
pub use type_mapper::CppTypeMapper;
