//! Data model for function documentation — dialect-agnostic.

use serde::Serialize;

/// Placeholder token rendered for a missing type.
pub const TYPE_PLACEHOLDER: &str = "[[Type]]";

/// Placeholder token rendered for a missing description.
pub const DESCRIPTION_PLACEHOLDER: &str = "[[Description]]";

/// A function signature assembled for one documentation request.
///
/// Built fresh per request (extraction + inference, then merge with any
/// prior block) and discarded after rendering.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Signature {
    /// Leading whitespace of the declaration line, reproduced verbatim on
    /// every emitted line.
    pub indentation: String,
    /// User-authored summary. `None` renders the description placeholder.
    pub description: Option<String>,
    /// Parameters in declaration order.
    pub parameters: Vec<Parameter>,
    pub returns: Returns,
}

/// One documented parameter. Multi-line types/descriptions are stored as
/// newline-joined strings and split back into lines at render time.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Parameter {
    pub title: String,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub description: Option<String>,
}

impl Parameter {
    pub fn new(title: impl Into<String>) -> Self {
        Parameter {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// Return-value documentation. `present = false` suppresses the return line
/// entirely, regardless of prior content.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Returns {
    pub present: bool,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub description: Option<String>,
}

/// Tags recovered from an existing documentation block, produced purely from
/// comment text. Structurally the documented subset of [`Signature`].
#[derive(Debug, Default, Clone)]
pub struct DocTags {
    pub description: String,
    pub parameters: Vec<Parameter>,
    pub returns: Option<Returns>,
}
