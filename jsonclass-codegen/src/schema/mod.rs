//! Schema inference: from an example document to a blueprint tree.
//!
//! - [`infer_type`] / [`default_literal`] - per-value inference
//! - [`RecordBuilder`] - recursive walk producing [`RecordBlueprint`]s
//! - [`BlueprintTreeDisplay`] - human-readable view of a blueprint tree

mod display;
mod error;
mod infer;
mod record;
mod types;

pub use display::BlueprintTreeDisplay;
pub use error::{Result, SchemaError};
pub use infer::{default_literal, infer_type};
pub use record::RecordBuilder;
pub use types::{FieldBlueprint, GenerationMode, RecordBlueprint, TypeDescriptor};
