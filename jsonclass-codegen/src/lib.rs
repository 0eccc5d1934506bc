//! Schema inference and shared code generation utilities for jsonclass.
//!
//! This crate provides the language-agnostic half of the generator: it walks
//! an example JSON document, infers a type and a default for every member,
//! and produces a tree of [`RecordBlueprint`]s that language backends
//! (e.g. `jsonclass-codegen-cpp`) render into source code.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, Indent)
//! - [`language`] - Language-specific abstractions (NamingConvention, TypeMapper)
//! - [`schema`] - Blueprint model, type inference and the record builder

pub mod builder;
pub mod language;
pub mod schema;

pub use builder::{CodeBuilder, Indent};
pub use language::{NamingConvention, TypeMapper};
pub use schema::{
    FieldBlueprint, GenerationMode, RecordBlueprint, RecordBuilder, SchemaError, TypeDescriptor,
};
