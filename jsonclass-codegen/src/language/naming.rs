//! Naming conventions for target languages.

/// Language-specific naming conventions.
///
/// Defines how raw JSON member names become identifiers, how reserved words
/// are escaped, and how derived names (nested record types, storage slots)
/// are formed.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Words that may not be used verbatim as identifiers
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "class" -> "class_rn" in C++)
    pub escape_reserved: fn(&str) -> String,
    /// Validate a (sanitized) identifier, returning the reason it is rejected
    pub check_identifier: fn(&str) -> Result<(), &'static str>,
    /// Suffix appended to a field identifier to name its nested record type
    pub nested_type_suffix: &'static str,
    /// Suffix appended to a field identifier to name its storage slot
    pub storage_suffix: &'static str,
    /// Members every generated record declares on its own, which no field
    /// may shadow
    pub generated_members: &'static [&'static str],
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    ///
    /// Only exact reserved-word matches are rewritten; everything else is
    /// returned unchanged and must be validated with [`Self::check`].
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Validate an identifier.
    pub fn check(&self, name: &str) -> Result<(), &'static str> {
        (self.check_identifier)(name)
    }

    /// Name of the nested record type generated for a field.
    pub fn nested_type_name(&self, identifier: &str) -> String {
        format!("{}{}", identifier, self.nested_type_suffix)
    }

    /// Name of the storage slot backing a field.
    pub fn storage_name(&self, identifier: &str) -> String {
        format!("{}{}", identifier, self.storage_suffix)
    }
}
