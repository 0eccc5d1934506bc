//! Type and default-value inference for a single example value.

use jsonclass_core::quote_c_string;
use serde_json::{Number, Value};

use super::TypeDescriptor;

/// Infer the semantic type of an example value.
///
/// Total over every JSON value. Arrays take their element type from the
/// first element only; empty arrays and `null` fall back to strings.
/// Object-valued fields never reach this function through the record
/// builder, which turns them into nested records; the only way to infer an
/// object is as the first element of an array, which yields
/// [`TypeDescriptor::StringMap`] and logs a warning.
pub fn infer_type(value: &Value) -> TypeDescriptor {
    match value {
        Value::String(_) => TypeDescriptor::String,
        Value::Bool(_) => TypeDescriptor::Bool,
        Value::Number(n) => infer_number(n),
        Value::Array(items) => match items.first() {
            Some(first) => TypeDescriptor::array(infer_type(first)),
            None => TypeDescriptor::array(TypeDescriptor::String),
        },
        Value::Null => TypeDescriptor::String,
        Value::Object(_) => {
            tracing::warn!("object inferred outside a record; falling back to a string map");
            TypeDescriptor::StringMap
        }
    }
}

fn infer_number(n: &Number) -> TypeDescriptor {
    if n.is_i64() {
        TypeDescriptor::Int32
    } else if n.is_u64() {
        TypeDescriptor::UInt32
    } else {
        TypeDescriptor::Float64
    }
}

/// Render an example value as a C-family literal of its inferred type.
///
/// Arrays render as the comma-joined element literals, ready to be placed
/// inside a brace initializer; array, object and `null` elements are wrapped
/// in their own braces. `null`, objects and empty arrays render as an empty
/// literal, i.e. value-initialization.
///
/// Integers are narrowed to the 32-bit type they are inferred as, so the
/// literal always fits its brace initializer.
pub fn default_literal(value: &Value) -> String {
    match value {
        Value::String(s) => quote_c_string(s),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_literal(n),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Array(_) | Value::Object(_) | Value::Null => {
                    format!("{{{}}}", default_literal(item))
                }
                _ => default_literal(item),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Value::Null | Value::Object(_) => String::new(),
    }
}

fn number_literal(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        let narrowed = i as i32;
        if i64::from(narrowed) != i {
            tracing::warn!(value = i, narrowed, "integer default does not fit int");
        }
        narrowed.to_string()
    } else if let Some(u) = n.as_u64() {
        let narrowed = u as u32;
        if u64::from(narrowed) != u {
            tracing::warn!(value = u, narrowed, "integer default does not fit unsigned int");
        }
        narrowed.to_string()
    } else {
        float_literal(n.as_f64().unwrap_or_default())
    }
}

/// Six fixed decimals, or scientific notation for non-zero values that
/// would otherwise print as zero.
fn float_literal(f: f64) -> String {
    let fixed = format!("{:.6}", f);
    let rounds_to_zero = fixed.bytes().all(|b| matches!(b, b'-' | b'0' | b'.'));
    if f != 0.0 && rounds_to_zero {
        format!("{:e}", f)
    } else {
        fixed
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_infer_scalars() {
        assert_eq!(infer_type(&json!("hello")), TypeDescriptor::String);
        assert_eq!(infer_type(&json!(true)), TypeDescriptor::Bool);
        assert_eq!(infer_type(&json!(26)), TypeDescriptor::Int32);
        assert_eq!(infer_type(&json!(-3)), TypeDescriptor::Int32);
        assert_eq!(infer_type(&json!(1500.5)), TypeDescriptor::Float64);
        assert_eq!(infer_type(&Value::Null), TypeDescriptor::String);
    }

    #[test]
    fn test_infer_unsigned_beyond_signed_range() {
        assert_eq!(infer_type(&json!(u64::MAX)), TypeDescriptor::UInt32);
        assert_eq!(infer_type(&json!(i64::MAX as u64)), TypeDescriptor::Int32);
    }

    #[test]
    fn test_infer_arrays_use_first_element() {
        assert_eq!(
            infer_type(&json!(["c++", "debug"])),
            TypeDescriptor::array(TypeDescriptor::String)
        );
        assert_eq!(
            infer_type(&json!([1, "mixed", true])),
            TypeDescriptor::array(TypeDescriptor::Int32)
        );
        assert_eq!(
            infer_type(&json!([[1.5], []])),
            TypeDescriptor::array(TypeDescriptor::array(TypeDescriptor::Float64))
        );
        assert_eq!(
            infer_type(&json!([])),
            TypeDescriptor::array(TypeDescriptor::String)
        );
    }

    #[test]
    fn test_infer_object_in_array_is_string_map() {
        assert_eq!(
            infer_type(&json!([{"a": "b"}])),
            TypeDescriptor::array(TypeDescriptor::StringMap)
        );
    }

    #[test]
    fn test_default_literal_scalars() {
        assert_eq!(default_literal(&json!("hello")), "\"hello\"");
        assert_eq!(default_literal(&json!(false)), "false");
        assert_eq!(default_literal(&json!(26)), "26");
        assert_eq!(default_literal(&json!(-7)), "-7");
        assert_eq!(default_literal(&json!(u64::MAX)), "4294967295");
        assert_eq!(default_literal(&json!(1500.5)), "1500.500000");
        assert_eq!(default_literal(&json!(0.1)), "0.100000");
        assert_eq!(default_literal(&Value::Null), "");
    }

    #[test]
    fn test_default_literal_escapes_strings() {
        assert_eq!(default_literal(&json!("a \"quote\"")), "\"a \\\"quote\\\"\"");
    }

    #[test]
    fn test_default_literal_arrays() {
        assert_eq!(default_literal(&json!(["c++", "debug"])), "\"c++\", \"debug\"");
        assert_eq!(default_literal(&json!([1, 2, 3])), "1, 2, 3");
        assert_eq!(default_literal(&json!([])), "");
        assert_eq!(default_literal(&json!([[1, 2], [3]])), "{1, 2}, {3}");
        assert_eq!(default_literal(&json!([[]])), "{}");
    }

    #[test]
    fn test_default_literal_null_elements_value_initialize() {
        assert_eq!(default_literal(&json!([null, null])), "{}, {}");
        assert_eq!(default_literal(&json!([null])), "{}");
        assert_eq!(default_literal(&json!(["a", null])), "\"a\", {}");
    }

    #[test]
    fn test_default_literal_narrows_to_32_bits() {
        assert_eq!(default_literal(&json!(3000000000i64)), "-1294967296");
        assert_eq!(default_literal(&json!(i32::MAX)), "2147483647");
        assert_eq!(default_literal(&json!(i32::MIN)), "-2147483648");
        assert_eq!(default_literal(&json!([3000000000i64])), "-1294967296");
    }

    #[test]
    fn test_default_literal_small_floats_keep_their_value() {
        assert_eq!(default_literal(&json!(1e-7)), "1e-7");
        assert_eq!(default_literal(&json!(-2.5e-9)), "-2.5e-9");
        assert_eq!(default_literal(&json!(0.0)), "0.000000");
        assert_eq!(default_literal(&json!(0.000002)), "0.000002");
    }
}
