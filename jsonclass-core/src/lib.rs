//! Core utilities and types for the jsonclass generator.
//!
//! This crate provides fundamental types and utilities used across
//! the jsonclass crates.

mod file;
mod utils;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::{check_c_identifier, escape_c_string, quote_c_string};

/// Banner placed at the top of every generated unit.
pub const GENERATED_HEADER: &str = "// Generated by jsonclass. DO NOT EDIT.";
