//! String helpers shared by the parser and analyzer.

/// Uppercase the first character of a string, leaving the rest untouched.
pub fn cap_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Remove every whitespace character from a string.
pub fn remove_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Check whether a string, ignoring whitespace, starts with `(` and ends
/// with `)`. Tuple and function types legitimately contain commas, and
/// this is what protects them from the comma-truncation heuristic.
pub fn is_enclosed_in_parentheses(s: &str) -> bool {
    let trimmed = remove_whitespace(s);
    trimmed.starts_with('(') && trimmed.ends_with(')')
}
