//! Mock model

use serde::{Deserialize, Serialize};

use crate::models::property::PropertySet;
use crate::models::signature::Signature;

/// The fully analyzed form of one signature line: the parsed signature
/// plus every tracking property derived from it. This is what the `--json`
/// output mode serializes, and what the renderer turns into mock text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockModel {
    /// Parsed signature
    pub signature: Signature,
    /// Derived tracking properties
    pub properties: PropertySet,
}
