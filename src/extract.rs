//! Signature extraction — one declaration line into ordered parameter stubs.

use crate::error::Error;
use crate::model::{Parameter, Signature};
use regex::Regex;
use std::sync::LazyLock;

// Function declaration: keyword, optional identifier, parenthesized
// parameter list.
static RE_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"function(?:\s+[A-Za-z$_][A-Za-z$_0-9]*)?\s*\(([^)]*)\)").unwrap()
});

static RE_INDENTATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\t ]*").unwrap());

/// Extract a signature stub from a declaration line.
///
/// Parameters carry titles only; types and descriptions come later from
/// inference and merge. Trailing commas and empty entries are discarded.
pub fn extract(line: &str) -> Result<Signature, Error> {
    let caps = RE_FUNCTION.captures(line).ok_or(Error::NoSignature)?;

    let indentation = RE_INDENTATION
        .find(line)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let parameters = caps[1]
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(Parameter::new)
        .collect();

    Ok(Signature {
        indentation,
        parameters,
        ..Default::default()
    })
}
