//! Best-effort type inference from the function body text.
//!
//! Two heuristics run over the code-position characters of the body (see
//! [`crate::scan`]): return statements classify the returned expression by
//! its first significant token, and `name.member` usages classify parameters
//! against fixed member-name tables. A miss is never an error — the field
//! simply stays unset and renders as a placeholder.

use crate::dialect::Dialect;
use crate::model::Returns;
use crate::scan;

// Member-name tables for parameter-usage classification.
const PROPERTIES: &[&str] = &["arity", "caller", "constructor", "length", "prototype"];

const STRING_METHODS: &[&str] = &[
    "charAt",
    "charCodeAt",
    "codePointAt",
    "contains",
    "endsWith",
    "localeCompare",
    "match",
    "normalize",
    "repeat",
    "replace",
    "search",
    "split",
    "startsWith",
    "substr",
    "substring",
    "toLocaleLowerCase",
    "toLocaleUpperCase",
    "toLowerCase",
    "toUpperCase",
    "trim",
    "valueOf",
];

const ARRAY_METHODS: &[&str] = &[
    "fill", "pop", "push", "reverse", "shift", "sort", "splice", "unshift", "join",
];

const OBJECT_METHODS: &[&str] = &[
    "create",
    "defineProperty",
    "defineProperties",
    "freeze",
    "getOwnPropertyDescriptor",
    "getOwnPropertyNames",
    "getOwnPropertySymbols",
    "getPrototypeOf",
    "isExtensible",
    "isFrozen",
    "isSealed",
    "keys",
    "preventExtensions",
    "seal",
    "setPrototypeOf",
];

const REGEXP_METHODS: &[&str] = &["exec", "test"];

/// Inference result: return presence/type plus one optional type guess per
/// parameter, in parameter order.
#[derive(Debug, Default)]
pub struct Inference {
    pub returns: Returns,
    pub param_types: Vec<Option<String>>,
}

/// Infer return presence/type and parameter types from `text`, which starts
/// at the declaration line. When the function extent cannot be bounded the
/// result is empty: no return line, no type guesses.
pub fn infer(text: &str, titles: &[String], dialect: Dialect) -> Inference {
    let mut out = Inference {
        returns: Returns::default(),
        param_types: vec![None; titles.len()],
    };

    let Some(body) = scan::function_extent(text) else {
        return out;
    };

    let mut union: Vec<&'static str> = Vec::new();

    for (i, c) in scan::code_chars(body) {
        if dialect.infers_param_types() {
            classify_param_usage(body, i, c, titles, &mut out.param_types);
        }

        if c == 'r' && is_return_keyword(body, i) {
            out.returns.present = true;
            if let Some(kind) = classify_return_expr(&body[i + "return".len()..]) {
                if !union.contains(&kind) {
                    union.push(kind);
                }
            }
        }
    }

    if !union.is_empty() {
        out.returns.type_ = Some(union.join("|"));
    }
    out
}

/// `return` counts only when preceded by whitespace and directly followed by
/// `[`, `{` or a space.
fn is_return_keyword(body: &str, i: usize) -> bool {
    if i == 0 || !body.as_bytes()[i - 1].is_ascii_whitespace() {
        return false;
    }
    let rest = &body[i..];
    if !rest.starts_with("return") {
        return false;
    }
    matches!(rest["return".len()..].chars().next(), Some('[' | '{' | ' '))
}

/// Classify the expression text following a `return` keyword by its first
/// significant token. Unrecognized expressions contribute nothing.
fn classify_return_expr(zone: &str) -> Option<&'static str> {
    let expr = zone.split(';').next().unwrap_or("").trim();
    if expr == "true" || expr == "false" {
        return Some("Boolean");
    }
    match expr.chars().next() {
        Some('{') => Some("Object"),
        Some('[') => Some("Array"),
        Some('"') | Some('\'') => Some("String"),
        _ => None,
    }
}

/// At position `i` (character `c`), look for `title.member` and classify the
/// member. The first successful classification per parameter is kept; later
/// usages never override it.
fn classify_param_usage(
    body: &str,
    i: usize,
    c: char,
    titles: &[String],
    types: &mut [Option<String>],
) {
    for (idx, title) in titles.iter().enumerate() {
        if types[idx].is_some() || title.chars().next() != Some(c) {
            continue;
        }
        let rest = &body[i..];
        if !rest.starts_with(title.as_str()) || !rest[title.len()..].starts_with('.') {
            continue;
        }

        let after = &rest[title.len() + 1..];
        let member: String = after
            .chars()
            .take_while(|ch| ch.is_ascii_alphabetic())
            .collect();
        let is_call = after[member.len()..].starts_with('(');

        let guess = if !is_call {
            // Bare member access on anything but a function property reads
            // like an object field.
            (!PROPERTIES.contains(&member.as_str())).then_some("Object")
        } else if STRING_METHODS.contains(&member.as_str()) {
            Some("String")
        } else if ARRAY_METHODS.contains(&member.as_str()) {
            Some("Array")
        } else if OBJECT_METHODS.contains(&member.as_str()) {
            Some("Object")
        } else if REGEXP_METHODS.contains(&member.as_str()) {
            Some("RegExp")
        } else {
            None
        };

        if let Some(kind) = guess {
            types[idx] = Some(kind.to_string());
        }
    }
}
