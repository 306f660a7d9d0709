//! Quoting utilities for libpq connection descriptors.

/// Returns true when a conninfo value must be single-quoted.
fn needs_quoting(s: &str) -> bool {
    s.is_empty() || s.chars().any(|c| c.is_whitespace() || c == '\'' || c == '\\')
}

/// Quote a value for use in a libpq `key=value` connection descriptor.
///
/// Plain values are returned unchanged. Empty values and values containing
/// whitespace, `'` or `\` are wrapped in single quotes with `'` and `\`
/// backslash-escaped.
pub fn quote_conninfo_value(s: &str) -> String {
    if !needs_quoting(s) {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len() + 2);
    result.push('\'');
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '\'' => result.push_str("\\'"),
            c => result.push(c),
        }
    }
    result.push('\'');
    result
}
