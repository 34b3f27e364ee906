//! Signature parsing.
//!
//! Isolates three substrings from one raw signature line: the bare
//! function name, the parameter-list body, and the return-type text. The
//! parameter list is delimited with a balanced-parenthesis scan so that
//! tuple types, function types and generic arguments containing
//! parentheses survive intact. Each step is a pure function over the raw
//! line; nothing is mutated in place.

use log::debug;

use crate::errors::{MockerError, MockerResult};
use crate::models::Signature;
use crate::utils::remove_whitespace;

/// Marker separating the parameter list from the return-type clause.
const RETURN_MARKER: &str = "->";

/// Parse one raw signature line.
///
/// A line with no `(` at all is tolerated: it yields a signature with no
/// parameters and no return type, and whatever remains after name cleanup
/// as the function name. An unmatched `(` is the one genuine parse error.
pub fn parse(raw: &str) -> MockerResult<Signature> {
    let (head, parameters_body, return_type_text) = match raw.find('(') {
        Some(open) => {
            let close = find_balanced_close(raw, open)?;
            let tail = &raw[close + 1..];
            (
                &raw[..open],
                raw[open + 1..close].to_string(),
                extract_return_text(tail),
            )
        }
        // Tolerated edge case: no parameter list at all.
        None => (raw, String::new(), String::new()),
    };

    let function_name = extract_function_name(head);
    debug!(
        "parsed signature: name={:?} params={:?} return={:?}",
        function_name, parameters_body, return_type_text
    );

    Ok(Signature {
        function_name,
        original_text: raw.to_string(),
        parameters_body,
        return_type_text,
    })
}

/// Find the `)` matching the `(` at byte offset `open`, tracking nesting
/// depth. Errors when the balance never returns to zero.
fn find_balanced_close(raw: &str, open: usize) -> MockerResult<usize> {
    let mut depth: i32 = 0;
    for (offset, character) in raw[open..].char_indices() {
        match character {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(open + offset);
                }
            }
            _ => {}
        }
    }
    Err(MockerError::UnmatchedParenthesis(raw.to_string()))
}

/// Take the text after the first `->` in the tail following the parameter
/// list. Only the first marker counts: a return type that is itself a
/// function type, e.g. `(Bool)->()`, is taken whole from just after the
/// marker to the end of the line.
fn extract_return_text(tail: &str) -> String {
    match tail.find(RETURN_MARKER) {
        Some(marker) => tail[marker + RETURN_MARKER.len()..].trim().to_string(),
        None => String::new(),
    }
}

/// Reduce everything before the `(` to the bare function name. The `func`
/// keyword and every token before it (access modifiers, attributes such
/// as `@objc`) are noise; remaining whitespace is removed.
fn extract_function_name(head: &str) -> String {
    let bare = match head.find("func") {
        Some(keyword) => &head[keyword + "func".len()..],
        None => head,
    };
    remove_whitespace(bare)
}
