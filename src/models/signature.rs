//! Parsed signature data.

use serde::{Deserialize, Serialize};

/// The three substrings isolated from one raw signature line.
///
/// `original_text` is the untouched input line; it reappears verbatim as
/// the head of the rendered mock implementation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signature {
    /// Bare function name, with the `func` keyword, access modifiers,
    /// attributes and whitespace stripped away
    pub function_name: String,
    /// The raw input line, kept verbatim
    pub original_text: String,
    /// Text strictly between the matched parameter-list parentheses
    /// (empty when there are no parameters)
    pub parameters_body: String,
    /// Text after the `->` marker following the parameter list
    /// (empty when the function returns nothing)
    pub return_type_text: String,
}

impl Signature {
    /// True when the parameter-list body carries at least one parameter.
    pub fn has_parameters(&self) -> bool {
        !self.parameters_body.trim().is_empty()
    }

    /// True when the signature carries a return-type clause.
    pub fn has_return_type(&self) -> bool {
        !self.return_type_text.is_empty()
    }
}

/// One parameter of a signature, in declaration order.
///
/// Only `internal_name` matters downstream; the external label is carried
/// for completeness but never influences property naming.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// Explicit external label (`with`, or `_` for a hidden label), if any
    pub external_label: Option<String>,
    /// The name the parameter is bound to inside the function body
    pub internal_name: String,
    /// Cleaned type text, noise keywords removed
    pub raw_type: String,
}
