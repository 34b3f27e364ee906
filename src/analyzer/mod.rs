//! Property derivation.
//!
//! Splits a parsed parameter-list body into descriptors and derives the
//! tracking properties: the invocation counter, one property per
//! parameter, and the stand-in return value when a return type exists.
//!
//! Parameter splitting is deliberately naive: the body is split on `:`,
//! assuming one colon per `name: type` pair, and consecutive segments are
//! paired as (name-candidate, type-candidate). A parameter type that
//! itself contains a colon mis-pairs the segments; this is a known
//! restriction of the supported grammar subset, not something the
//! heuristics below try to repair.

use log::debug;

use crate::models::{
    InvokedCountProperty, ParameterDescriptor, ParameterProperty, PropertySet, ReturnProperty,
    Signature,
};
use crate::utils::{cap_first, is_enclosed_in_parentheses, remove_whitespace};

/// Derive every tracking property for one parsed signature.
///
/// Pure: deriving twice from the same signature yields identical names
/// and types.
pub fn derive(signature: &Signature) -> PropertySet {
    let invoked_count = InvokedCountProperty::new(format!(
        "invoked{}Count",
        cap_first(&signature.function_name)
    ));

    let parameters = if signature.has_parameters() {
        split_parameters(&signature.parameters_body)
            .into_iter()
            .map(|descriptor| parameter_property(&descriptor, &signature.function_name))
            .collect()
    } else {
        Vec::new()
    };

    let return_property = if signature.has_return_type() {
        Some(ReturnProperty {
            name: format!("{}DummyValue", signature.function_name),
            ty: signature.return_type_text.trim().to_string(),
        })
    } else {
        None
    };

    PropertySet {
        invoked_count,
        parameters,
        return_property,
    }
}

/// Split the parameter-list body into descriptors, in declaration order.
///
/// For N colons the split yields N usable name-candidates (all segments
/// but the last), each paired with the segment immediately following it.
/// The leftover text a naive split leaks across parameter boundaries is
/// cleaned up per segment by the extraction helpers.
pub fn split_parameters(body: &str) -> Vec<ParameterDescriptor> {
    let segments: Vec<&str> = body.split(':').collect();
    if segments.len() < 2 {
        return Vec::new();
    }

    let descriptors: Vec<ParameterDescriptor> = segments
        .windows(2)
        .map(|pair| {
            let (external_label, internal_name) = extract_parameter_name(pair[0]);
            let raw_type = extract_parameter_type(pair[1]);
            ParameterDescriptor {
                external_label,
                internal_name,
                raw_type,
            }
        })
        .collect();

    debug!("split {} parameter(s) from {:?}", descriptors.len(), body);
    descriptors
}

/// Reduce a name-candidate segment to (external label, internal name).
///
/// Text before the last comma is the previous parameter's type leaking
/// in; text before the last space is an external label (`with`, or `_`
/// for a hidden label). Only the internal name matters for naming.
fn extract_parameter_name(raw_name: &str) -> (Option<String>, String) {
    let own_text = match raw_name.rfind(',') {
        Some(comma) => &raw_name[comma + 1..],
        None => raw_name,
    };
    let trimmed = own_text.trim();
    match trimmed.rfind(' ') {
        Some(space) => (
            Some(trimmed[..space].trim().to_string()),
            remove_whitespace(&trimmed[space + 1..]),
        ),
        None => (None, remove_whitespace(trimmed)),
    }
}

/// Reduce a type-candidate segment to the cleaned type text.
///
/// Text after the last comma is the next parameter's name leaking in,
/// unless the whole segment is parenthesized (tuple and function types
/// carry commas of their own). The `@escaping` attribute and the `inout`
/// qualifier are noise wherever they appear, even glued to other tokens.
fn extract_parameter_type(raw_type: &str) -> String {
    let own_text = match raw_type.rfind(',') {
        Some(comma) if !is_enclosed_in_parentheses(raw_type) => &raw_type[..comma],
        _ => raw_type,
    };
    own_text
        .replace("@escaping", "")
        .replace("inout ", "")
        .trim()
        .to_string()
}

/// Build the tracking property for one parameter.
///
/// When the capitalized function name already ends with the capitalized
/// parameter name, the shared suffix is not doubled: `handleConfigFile` +
/// `file` derives `invokedHandleConfigFile`, not
/// `invokedHandleConfigFileFile`.
fn parameter_property(descriptor: &ParameterDescriptor, function_name: &str) -> ParameterProperty {
    let capitalized_parameter = cap_first(&descriptor.internal_name);
    let capitalized_function = cap_first(function_name);
    let base = if capitalized_function.ends_with(&capitalized_parameter) {
        capitalized_function
    } else {
        format!("{capitalized_function}{capitalized_parameter}")
    };
    ParameterProperty {
        name: format!("invoked{base}"),
        ty: descriptor.raw_type.clone(),
        binding_name: descriptor.internal_name.clone(),
    }
}
