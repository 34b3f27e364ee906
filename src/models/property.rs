//! Tracking-property types.
//!
//! Three flavors share one capability set: a name, a type, a declaration
//! line and an implementation line. Declared storage is always capable of
//! holding "not yet set": a property whose source type is already optional
//! is declared as-is, anything else gets an explicit `?` wrapper. The
//! implementation side mirrors that rule when reading the value back.

use serde::{Deserialize, Serialize};

/// Capability set shared by the three tracking-property flavors.
pub trait Property {
    /// Generated identifier for the property.
    fn name(&self) -> &str;

    /// Type text as it appears in the declaration.
    fn ty(&self) -> &str;

    /// The `var ...` line for the mock's declaration block.
    fn declaration(&self) -> String;

    /// The statement for the mock's implementation body.
    fn implementation(&self) -> String;

    /// A type denotes optional iff it ends with the `?` marker.
    fn is_optional_type(&self) -> bool {
        self.ty().ends_with('?')
    }
}

/// Counts how many times the mocked function was invoked. Exactly one per
/// signature, always present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvokedCountProperty {
    /// Property name (`invoked<FunctionName>Count`)
    pub name: String,
    /// Property type, always `Int`
    pub ty: String,
}

impl InvokedCountProperty {
    /// Create the counter property for a function.
    pub fn new(name: String) -> Self {
        Self {
            name,
            ty: "Int".to_string(),
        }
    }
}

impl Property for InvokedCountProperty {
    fn name(&self) -> &str {
        &self.name
    }

    fn ty(&self) -> &str {
        &self.ty
    }

    fn declaration(&self) -> String {
        format!("var {} = 0", self.name)
    }

    fn implementation(&self) -> String {
        format!("{} += 1", self.name)
    }
}

/// Captures the last value passed for one parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterProperty {
    /// Derived, collision-aware property name
    pub name: String,
    /// Cleaned parameter type text
    pub ty: String,
    /// The parameter's internal name, assigned from in the mock body
    pub binding_name: String,
}

impl Property for ParameterProperty {
    fn name(&self) -> &str {
        &self.name
    }

    fn ty(&self) -> &str {
        &self.ty
    }

    fn declaration(&self) -> String {
        if self.is_optional_type() {
            format!("var {}: {}", self.name, self.ty)
        } else {
            format!("var {}: {}?", self.name, self.ty)
        }
    }

    fn implementation(&self) -> String {
        format!("{} = {}", self.name, self.binding_name)
    }
}

/// Holds the stand-in value the mock returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnProperty {
    /// Property name (`<functionName>DummyValue`)
    pub name: String,
    /// Cleaned return type text
    pub ty: String,
}

impl Property for ReturnProperty {
    fn name(&self) -> &str {
        &self.name
    }

    fn ty(&self) -> &str {
        &self.ty
    }

    fn declaration(&self) -> String {
        if self.is_optional_type() {
            format!("var {}: {}", self.name, self.ty)
        } else {
            format!("var {}: {}?", self.name, self.ty)
        }
    }

    /// The declared storage is optional either way, so a non-optional
    /// source type needs a force-unwrap to surface the true return type.
    fn implementation(&self) -> String {
        if self.is_optional_type() {
            format!("return {}", self.name)
        } else {
            format!("return {}!", self.name)
        }
    }
}

/// Everything the analyzer derives from one signature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySet {
    /// The always-present invocation counter
    pub invoked_count: InvokedCountProperty,
    /// One tracking property per parameter, in declaration order
    pub parameters: Vec<ParameterProperty>,
    /// The stand-in return value, when the signature has a return type
    pub return_property: Option<ReturnProperty>,
}
