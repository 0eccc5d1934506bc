//! Shared utility functions for code generation.

/// Check that `s` is a valid identifier in C-family languages
/// (`[A-Za-z_][A-Za-z0-9_]*`), returning the reason when it is not.
pub fn check_c_identifier(s: &str) -> Result<(), &'static str> {
    let mut chars = s.chars();
    match chars.next() {
        None => return Err("identifier is empty"),
        Some(c) if c.is_ascii_digit() => return Err("identifier starts with a digit"),
        Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
            return Err("identifier starts with a character other than a letter or '_'");
        }
        Some(_) => {}
    }

    if chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err("identifier contains characters other than letters, digits and '_'")
    }
}

/// Escape `s` for use inside a double-quoted C/C++ string literal.
///
/// Control characters use three-digit octal escapes, which cannot swallow a
/// following character the way `\x` escapes do.
pub fn escape_c_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '?' => out.push_str("\\?"),
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                out.push_str(&format!("\\{:03o}", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

/// Escape and wrap `s` in double quotes.
pub fn quote_c_string(s: &str) -> String {
    format!("\"{}\"", escape_c_string(s))
}
