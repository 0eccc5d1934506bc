//! Recursive construction of record blueprints from an example object.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::{
    FieldBlueprint, RecordBlueprint, SchemaError, TypeDescriptor,
    error::Result,
    infer::{default_literal, infer_type},
};
use crate::language::NamingConvention;

/// Builds a [`RecordBlueprint`] tree from an example JSON object.
///
/// Every member becomes a field in iteration order. Object-valued members
/// recurse into a nested record named after the field; all other values go
/// through type inference. Recursion depth follows the document's nesting.
#[derive(Debug, Clone, Copy)]
pub struct RecordBuilder<'a> {
    naming: &'a NamingConvention,
}

impl<'a> RecordBuilder<'a> {
    pub fn new(naming: &'a NamingConvention) -> Self {
        Self { naming }
    }

    /// Build the blueprint tree for a whole example document.
    ///
    /// Validates the record name and requires the document to be an object.
    pub fn build_root(&self, name: &str, document: &Value) -> Result<RecordBlueprint> {
        self.naming
            .check(name)
            .map_err(|reason| SchemaError::InvalidRecordName {
                name: name.to_string(),
                reason,
            })?;

        let object = document
            .as_object()
            .ok_or_else(|| SchemaError::RootNotObject {
                name: name.to_string(),
                found: value_kind(document),
            })?;

        let blueprint = self.build(name, object)?;
        tracing::debug!(
            record = %name,
            records = blueprint.record_count(),
            depth = blueprint.depth(),
            "built blueprint tree"
        );
        Ok(blueprint)
    }

    /// Build the blueprint for one object level and, recursively, its
    /// nested objects.
    pub fn build(&self, name: &str, object: &Map<String, Value>) -> Result<RecordBlueprint> {
        self.build_at(name, object, name)
    }

    fn build_at(&self, name: &str, object: &Map<String, Value>, path: &str) -> Result<RecordBlueprint> {
        let mut record = RecordBlueprint::new(name);
        let mut scope = Scope::new(name);
        scope.claim(name, "the record name".to_string())?;
        for member in self.naming.generated_members {
            scope.claim(member, format!("generated member '{}'", member))?;
        }

        for (key, value) in object {
            let field_path = format!("{}.{}", path, key);
            let identifier = self.naming.safe_name(key);
            let storage = self.naming.storage_name(&identifier);
            self.check_key(&identifier, key, &field_path)?;
            self.check_key(&storage, key, &field_path)?;

            let owner = format!("key '{}'", key);
            scope.claim(&identifier, owner.clone())?;
            scope.claim(&storage, owner.clone())?;

            if let Value::Object(child) = value {
                let nested_name = self.naming.nested_type_name(&identifier);
                self.check_key(&nested_name, key, &field_path)?;
                scope.claim(&nested_name, owner)?;

                let nested = self.build_at(&nested_name, child, &field_path)?;
                record.fields.push(FieldBlueprint {
                    original_key: key.clone(),
                    safe_identifier: identifier,
                    ty: TypeDescriptor::nested(nested_name),
                    default_literal: String::new(),
                    is_nested: true,
                });
                record.nested_records.push(nested);
            } else {
                record.fields.push(FieldBlueprint {
                    original_key: key.clone(),
                    safe_identifier: identifier,
                    ty: infer_type(value),
                    default_literal: default_literal(value),
                    is_nested: false,
                });
            }
        }

        tracing::debug!(
            record = %record.name,
            fields = record.fields.len(),
            nested = record.nested_records.len(),
            "built record blueprint"
        );
        Ok(record)
    }

    fn check_key(&self, identifier: &str, key: &str, path: &str) -> Result<()> {
        self.naming
            .check(identifier)
            .map_err(|reason| SchemaError::InvalidIdentifier {
                path: path.to_string(),
                key: key.to_string(),
                reason,
            })
    }
}

/// Names already declared inside one generated record.
struct Scope<'r> {
    record: &'r str,
    taken: IndexMap<String, String>,
}

impl<'r> Scope<'r> {
    fn new(record: &'r str) -> Self {
        Self {
            record,
            taken: IndexMap::new(),
        }
    }

    fn claim(&mut self, name: &str, owner: String) -> Result<()> {
        if let Some(first) = self.taken.get(name) {
            return Err(SchemaError::DuplicateIdentifier {
                record: self.record.to_string(),
                identifier: name.to_string(),
                first: first.clone(),
                second: owner,
            });
        }
        self.taken.insert(name.to_string(), owner);
        Ok(())
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
