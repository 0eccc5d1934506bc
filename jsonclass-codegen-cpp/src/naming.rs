//! C++-specific naming conventions.

use jsonclass_codegen::NamingConvention;
use jsonclass_core::check_c_identifier;

fn escape_cpp_reserved(name: &str) -> String {
    format!("{}_rn", name)
}

/// Rejects what `check_c_identifier` rejects plus the names the C++ standard
/// reserves for the implementation.
fn check_cpp_identifier(name: &str) -> Result<(), &'static str> {
    check_c_identifier(name)?;

    let mut chars = name.chars();
    if chars.next() == Some('_') && chars.next().is_some_and(|c| c.is_ascii_uppercase()) {
        return Err("identifiers starting with '_' and an uppercase letter are reserved in C++");
    }
    if name.contains("__") {
        return Err("identifiers containing '__' are reserved in C++");
    }
    Ok(())
}

/// C++ naming conventions.
///
/// Reserved words are the C++20 keywords plus the names every generated
/// class defines itself (`json` alias, `FromJson`, `ToJson`).
pub const CPP_NAMING: NamingConvention = NamingConvention {
    reserved_words: &[
        "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
        "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class", "compl", "concept",
        "const", "consteval", "constexpr", "constinit", "const_cast", "continue", "co_await",
        "co_return", "co_yield", "decltype", "default", "delete", "do", "double", "dynamic_cast",
        "else", "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto",
        "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq",
        "nullptr", "operator", "or", "or_eq", "private", "protected", "public", "register",
        "reinterpret_cast", "requires", "return", "short", "signed", "sizeof", "static",
        "static_assert", "static_cast", "struct", "switch", "template", "this", "thread_local",
        "throw", "true", "try", "typedef", "typeid", "typename", "union", "unsigned", "using",
        "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq", "json", "FromJson",
        "ToJson",
    ],
    escape_reserved: escape_cpp_reserved,
    check_identifier: check_cpp_identifier,
    nested_type_suffix: "_type",
    storage_suffix: "_",
    generated_members: &["json_"],
};
