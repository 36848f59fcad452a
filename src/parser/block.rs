//! Parse an existing documentation block back into structured tags.
//!
//! Input is the literal block interior (lines between the open marker and
//! the close marker, already delimited by the caller). Decoration is
//! stripped per line, the remainder is joined and split on `@`, and each
//! tag segment is tokenized on whitespace runs — keeping the exact
//! delimiters so multi-line descriptions survive a round trip.

use crate::dialect::Dialect;
use crate::model::{DocTags, Parameter, Returns};

/// Parse block interior lines into tags.
pub fn parse(lines: &[String], dialect: Dialect) -> DocTags {
    let mut cleaned: Vec<&str> = Vec::new();
    for line in lines {
        let trimmed = line.trim();
        // A terminator mid-scan truncates the block there.
        if trimmed.starts_with("*/") {
            break;
        }
        let content = trimmed.strip_prefix('*').map(str::trim).unwrap_or(trimmed);
        cleaned.push(content);
    }

    let joined = cleaned.join("\n");
    let mut segments = joined.split('@');

    let mut tags = DocTags {
        description: segments
            .next()
            .unwrap_or("")
            .trim_end_matches('\n')
            .to_string(),
        ..Default::default()
    };

    for segment in segments {
        if let Some(rest) = tag_rest(segment, "param") {
            if let Some(param) = parse_param(rest, dialect) {
                tags.parameters.push(param);
            }
        } else if let Some(rest) = tag_rest(segment, "returns").or_else(|| tag_rest(segment, "return"))
        {
            tags.returns = Some(parse_return(rest, dialect));
            // Everything after the first return tag is ignored.
            break;
        }
    }

    tags
}

/// Match a tag keyword at the start of a segment; the keyword must stand
/// alone or be followed by whitespace.
fn tag_rest<'a>(segment: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = segment.strip_prefix(keyword)?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest)
    } else {
        None
    }
}

fn parse_param(rest: &str, dialect: Dialect) -> Option<Parameter> {
    let body = rest.trim_start();
    let (open, close) = dialect.wrapper();

    let (type_, after) = if dialect.wraps_types() && body.starts_with(open) {
        match matching_close(body, open_char(open), open_char(close)) {
            Some(end) => (Some(body[open.len()..end].to_string()), &body[end + close.len()..]),
            // Unclosed wrapper: the whole remainder is the type.
            None => (Some(body[open.len()..].to_string()), ""),
        }
    } else {
        (None, body)
    };

    let words = split_words(after);
    let first = words.first()?;

    if type_.is_none() {
        if let Some(sigil) = dialect.param_sigil() {
            if first.0.starts_with(sigil) {
                // Sigil-led first token: no type, token is the title.
                return Some(Parameter {
                    title: first.0.to_string(),
                    type_: None,
                    description: join_rest(&words, 1),
                });
            }
        }
        if !dialect.wraps_types() {
            // Bareword type, optionally wrapper-enclosed.
            let title = words.get(1)?;
            return Some(Parameter {
                title: title.0.to_string(),
                type_: Some(strip_optional_wrapper(first.0).to_string()),
                description: join_rest(&words, 2),
            });
        }
    }

    Some(Parameter {
        title: first.0.to_string(),
        type_,
        description: join_rest(&words, 1),
    })
}

fn parse_return(rest: &str, dialect: Dialect) -> Returns {
    let body = rest.trim();
    let (open, close) = dialect.wrapper();

    if dialect.wraps_types() && body.starts_with(open) {
        let (type_, description) = match matching_close(body, open_char(open), open_char(close)) {
            Some(end) => (
                body[open.len()..end].trim_end_matches([' ', '\n']).to_string(),
                body[end + close.len()..].trim(),
            ),
            None => (body[open.len()..].trim_end_matches([' ', '\n']).to_string(), ""),
        };
        return Returns {
            present: true,
            type_: Some(type_),
            description: non_empty(description),
        };
    }

    // First whitespace-delimited token is the type, remainder the description.
    match body.split_once(char::is_whitespace) {
        Some((type_, desc)) => Returns {
            present: true,
            type_: Some(strip_optional_wrapper(type_).to_string()),
            description: non_empty(desc.trim()),
        },
        None => Returns {
            present: true,
            type_: non_empty(strip_optional_wrapper(body)),
            description: None,
        },
    }
}

/// Byte index of the close that matches the opening wrapper at index 0,
/// tracking nested depth.
fn matching_close(text: &str, open: char, close: char) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return Some(i);
            }
        }
    }
    None
}

fn open_char(s: &str) -> char {
    s.chars().next().unwrap_or('\0')
}

fn strip_optional_wrapper(token: &str) -> &str {
    token
        .strip_prefix('{')
        .and_then(|t| t.strip_suffix('}'))
        .unwrap_or(token)
}

/// Split into (word, following-gap) pairs, keeping the exact whitespace runs
/// between words so descriptions reconstruct faithfully.
fn split_words(text: &str) -> Vec<(&str, &str)> {
    let mut words = Vec::new();
    let mut rest = text.trim_start();
    while !rest.is_empty() {
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let (word, tail) = rest.split_at(end);
        let gap_end = tail
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(tail.len());
        let (gap, next) = tail.split_at(gap_end);
        words.push((word, gap));
        rest = next;
    }
    words
}

/// Rejoin words from `start` with their original delimiters; trailing blank
/// lines trimmed. `None` when nothing remains.
fn join_rest(words: &[(&str, &str)], start: usize) -> Option<String> {
    if start >= words.len() {
        return None;
    }
    let mut out = String::new();
    for (i, (word, gap)) in words[start..].iter().enumerate() {
        out.push_str(word);
        if start + i + 1 < words.len() {
            out.push_str(gap);
        }
    }
    non_empty(out.trim_end_matches('\n'))
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(block: &str) -> Vec<String> {
        block.lines().map(|l| l.to_string()).collect()
    }

    #[test]
    fn description_and_params() {
        let tags = parse(
            &lines(" * Adds two numbers\n * @param {Number} a first\n * @param {Number} b second"),
            Dialect::JavaScript,
        );
        assert_eq!(tags.description, "Adds two numbers");
        assert_eq!(tags.parameters.len(), 2);
        assert_eq!(tags.parameters[0].title, "a");
        assert_eq!(tags.parameters[0].type_.as_deref(), Some("Number"));
        assert_eq!(tags.parameters[0].description.as_deref(), Some("first"));
        assert_eq!(tags.parameters[1].title, "b");
    }

    #[test]
    fn param_without_type() {
        let tags = parse(&lines(" * @param a the value"), Dialect::JavaScript);
        assert_eq!(tags.parameters[0].title, "a");
        assert!(tags.parameters[0].type_.is_none());
        assert_eq!(
            tags.parameters[0].description.as_deref(),
            Some("the value")
        );
    }

    #[test]
    fn nested_wrapper_type() {
        let tags = parse(
            &lines(" * @param {{x: Number}} point the point"),
            Dialect::JavaScript,
        );
        assert_eq!(tags.parameters[0].type_.as_deref(), Some("{x: Number}"));
        assert_eq!(tags.parameters[0].title, "point");
    }

    #[test]
    fn multiline_type_spans_lines() {
        let block = " * @param {\n *   Number|String\n * } id the identifier";
        let tags = parse(&lines(block), Dialect::JavaScript);
        assert_eq!(tags.parameters[0].type_.as_deref(), Some("\nNumber|String\n"));
        assert_eq!(tags.parameters[0].title, "id");
    }

    #[test]
    fn multiline_description_keeps_newline() {
        let block = " * @param {Number} a line one\n *                  line two";
        let tags = parse(&lines(block), Dialect::JavaScript);
        assert_eq!(
            tags.parameters[0].description.as_deref(),
            Some("line one\nline two")
        );
    }

    #[test]
    fn php_sigil_title_without_type() {
        let tags = parse(&lines(" * @param $name the name"), Dialect::Php);
        assert_eq!(tags.parameters[0].title, "$name");
        assert!(tags.parameters[0].type_.is_none());
    }

    #[test]
    fn php_bareword_type() {
        let tags = parse(&lines(" * @param string $name the name"), Dialect::Php);
        assert_eq!(tags.parameters[0].type_.as_deref(), Some("string"));
        assert_eq!(tags.parameters[0].title, "$name");
        assert_eq!(tags.parameters[0].description.as_deref(), Some("the name"));
    }

    #[test]
    fn php_braced_type_unwrapped() {
        let tags = parse(&lines(" * @param {int} $n count"), Dialect::Php);
        assert_eq!(tags.parameters[0].type_.as_deref(), Some("int"));
        assert_eq!(tags.parameters[0].title, "$n");
    }

    #[test]
    fn returns_with_braced_type() {
        let tags = parse(
            &lines(" * @returns {Object} the result"),
            Dialect::JavaScript,
        );
        let ret = tags.returns.unwrap();
        assert_eq!(ret.type_.as_deref(), Some("Object"));
        assert_eq!(ret.description.as_deref(), Some("the result"));
    }

    #[test]
    fn returns_nested_braces() {
        let tags = parse(
            &lines(" * @returns {{a: 1}} a literal"),
            Dialect::JavaScript,
        );
        let ret = tags.returns.unwrap();
        assert_eq!(ret.type_.as_deref(), Some("{a: 1}"));
        assert_eq!(ret.description.as_deref(), Some("a literal"));
    }

    #[test]
    fn return_singular_tag() {
        let tags = parse(&lines(" * @return Number the sum"), Dialect::Php);
        let ret = tags.returns.unwrap();
        assert_eq!(ret.type_.as_deref(), Some("Number"));
        assert_eq!(ret.description.as_deref(), Some("the sum"));
    }

    #[test]
    fn tags_after_return_ignored() {
        let block = " * @returns {Number} n\n * @param {String} late too late";
        let tags = parse(&lines(block), Dialect::JavaScript);
        assert!(tags.parameters.is_empty());
        assert!(tags.returns.is_some());
    }

    #[test]
    fn terminator_truncates() {
        let block = " * real description\n */\n * @param {Number} ghost gone";
        let tags = parse(&lines(block), Dialect::JavaScript);
        assert_eq!(tags.description, "real description");
        assert!(tags.parameters.is_empty());
    }

    #[test]
    fn placeholder_type_round_trips() {
        let tags = parse(
            &lines(" * @returns {[[Type]]} the sum"),
            Dialect::JavaScript,
        );
        let ret = tags.returns.unwrap();
        assert_eq!(ret.type_.as_deref(), Some("[[Type]]"));
        assert_eq!(ret.description.as_deref(), Some("the sum"));
    }
}
