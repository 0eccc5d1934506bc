use miette::Diagnostic;
use thiserror::Error;

/// Result type for blueprint construction.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors raised while turning an example document into blueprints.
///
/// `path` values are dotted member paths rooted at the record name, e.g.
/// `person.scores.Math`.
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum SchemaError {
    #[error("the example document for '{name}' must be a JSON object, found {found}")]
    #[diagnostic(
        code(jsonclass::schema::root_not_object),
        help("wrap the example in an object: {{\"field\": ...}}")
    )]
    RootNotObject { name: String, found: &'static str },

    #[error("record name '{name}' is not a valid identifier: {reason}")]
    #[diagnostic(
        code(jsonclass::schema::invalid_record_name),
        help("use letters, digits and '_' after the '#' marker, starting with a letter")
    )]
    InvalidRecordName { name: String, reason: &'static str },

    #[error("key '{key}' at '{path}' cannot be used as an identifier: {reason}")]
    #[diagnostic(
        code(jsonclass::schema::invalid_identifier),
        help("rename the key in the example document")
    )]
    InvalidIdentifier {
        path: String,
        key: String,
        reason: &'static str,
    },

    #[error("'{identifier}' generated for {second} in '{record}' collides with {first}")]
    #[diagnostic(
        code(jsonclass::schema::duplicate_identifier),
        help("rename one of the keys so every generated name in a record is unique")
    )]
    DuplicateIdentifier {
        record: String,
        identifier: String,
        first: String,
        second: String,
    },
}
