//! Host collaborator contract and documentation block location.
//!
//! The core never owns a text buffer. Hosts expose line access through
//! [`Buffer`]; every read is treated as a snapshot and nothing is retained
//! across calls. Block location is a bounded scan: lines must keep looking
//! like block interior or the search gives up.

use crate::dialect::Dialect;
use regex::Regex;
use std::sync::LazyLock;

/// Minimal line access the core needs from a host editor.
pub trait Buffer {
    fn line(&self, index: usize) -> Option<&str>;
    fn line_count(&self) -> usize;
}

impl Buffer for [String] {
    fn line(&self, index: usize) -> Option<&str> {
        self.get(index).map(String::as_str)
    }

    fn line_count(&self) -> usize {
        self.len()
    }
}

/// A cursor position. Lines and columns are zero-based; columns count
/// characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// Line range of a documentation block: `start` holds the open marker,
/// `end` the close marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRange {
    pub start: usize,
    pub end: usize,
}

static RE_BLOCK_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*/\*\*").unwrap());

static RE_BLOCK_MIDDLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\*").unwrap());

static RE_BLOCK_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\*/").unwrap());

/// Locate a documentation block ending on the line directly above
/// `signature_line`. The upward scan is bounded: every line between the
/// close and open markers must still be block interior, and hitting the top
/// of the document without an open marker means there is no usable block.
pub fn block_above<B: Buffer + ?Sized>(buf: &B, signature_line: usize) -> Option<BlockRange> {
    if signature_line == 0 {
        return None;
    }
    let end = signature_line - 1;
    if !RE_BLOCK_END.is_match(buf.line(end)?) {
        return None;
    }

    let mut i = end;
    loop {
        let text = buf.line(i)?;
        if RE_BLOCK_START.is_match(text) {
            return Some(BlockRange { start: i, end });
        }
        if !RE_BLOCK_MIDDLE.is_match(text) {
            return None;
        }
        if i == 0 {
            return None;
        }
        i -= 1;
    }
}

/// Determine whether `line` sits inside a documentation block by scanning
/// up for the open marker and down for the close marker.
pub fn block_around<B: Buffer + ?Sized>(buf: &B, line: usize) -> Option<BlockRange> {
    if line >= buf.line_count() {
        return None;
    }

    let mut start = None;
    let mut i = line;
    loop {
        let text = buf.line(i)?;
        if RE_BLOCK_START.is_match(text) {
            start = Some(i);
            break;
        }
        if !RE_BLOCK_MIDDLE.is_match(text) {
            break;
        }
        if i == 0 {
            break;
        }
        i -= 1;
    }
    let start = start?;

    for i in line..buf.line_count() {
        let text = buf.line(i)?;
        if RE_BLOCK_END.is_match(text) {
            return Some(BlockRange { start, end: i });
        }
        if !RE_BLOCK_START.is_match(text) && !RE_BLOCK_MIDDLE.is_match(text) {
            return None;
        }
    }
    None
}

/// The interior lines of a block (between the markers, close line included —
/// the parser truncates at the terminator).
pub fn block_interior<B: Buffer + ?Sized>(buf: &B, range: BlockRange) -> Vec<String> {
    (range.start + 1..=range.end)
        .filter_map(|i| buf.line(i).map(str::to_string))
        .collect()
}

/// Snap a cursor column left over word/bracket characters so a cursor
/// resting mid-token searches from before it.
pub fn snap_left(line: &str, column: usize) -> usize {
    let chars: Vec<char> = line.chars().collect();
    let mut col = column;
    while let Some(&c) = chars.get(col) {
        if !(c.is_ascii_alphabetic() || c == '[' || c == ']') {
            break;
        }
        if col == 0 {
            break;
        }
        col -= 1;
    }
    col
}

/// Prefix for a line opened with Enter beneath a `@param`/`@returns` line
/// (or one of their continuations): a `*` plus padding up to the
/// description column. `None` when the previous line is not a tag line.
pub fn continuation_padding(prev_line: &str, dialect: Dialect) -> Option<String> {
    static RE_TAG_OR_DEEP: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^\s*\* (\s{6,}|@(param|returns?))").unwrap());

    if !RE_TAG_OR_DEEP.is_match(prev_line) {
        return None;
    }

    let (open, close) = dialect.wrapper();
    // Pattern depends on the dialect wrapper, so it is built per call.
    let tag_re = Regex::new(&format!(
        r"^(\s+)\* @(param|returns?)\s+{}.+{}\s+\S+\s+",
        regex::escape(open),
        regex::escape(close)
    ))
    .ok()?;

    static RE_CONTINUATION: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^(\s+)\*\s+").unwrap());

    let caps = tag_re
        .captures(prev_line)
        .or_else(|| RE_CONTINUATION.captures(prev_line))?;

    let full = caps[0].chars().count();
    let indent = &caps[1];
    let gap = full - indent.chars().count() - 1;
    Some(format!("{indent}*{}", " ".repeat(gap)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buf(text: &str) -> Vec<String> {
        text.lines().map(|l| l.to_string()).collect()
    }

    #[test]
    fn block_above_found() {
        let lines = buf("/**\n * docs\n */\nfunction f() {}");
        let range = block_above(&lines[..], 3).unwrap();
        assert_eq!(range, BlockRange { start: 0, end: 2 });
    }

    #[test]
    fn block_above_requires_terminator() {
        let lines = buf("/**\n * docs\nfunction f() {}");
        assert!(block_above(&lines[..], 2).is_none());
    }

    #[test]
    fn block_above_bounded_by_foreign_line() {
        // The scan stops at a line that is not block interior instead of
        // walking the whole document.
        let lines = buf("var x = 1;\n * stray\n */\nfunction f() {}");
        assert!(block_above(&lines[..], 3).is_none());
    }

    #[test]
    fn block_above_top_of_document() {
        let lines = buf(" */\nfunction f() {}");
        assert!(block_above(&lines[..], 1).is_none());
    }

    #[test]
    fn block_around_inside() {
        let lines = buf("/**\n * [[Description]]\n */\nfunction f() {}");
        assert_eq!(
            block_around(&lines[..], 1),
            Some(BlockRange { start: 0, end: 2 })
        );
    }

    #[test]
    fn block_around_outside() {
        let lines = buf("/**\n * docs\n */\nfunction f() {}");
        assert!(block_around(&lines[..], 3).is_none());
    }

    #[test]
    fn interior_excludes_open_marker() {
        let lines = buf("/**\n * docs\n */\nfunction f() {}");
        let range = block_above(&lines[..], 3).unwrap();
        assert_eq!(block_interior(&lines[..], range), vec![" * docs", " */"]);
    }

    #[test]
    fn snap_left_moves_off_token() {
        //        0123456789
        let line = " * [[Type]]";
        assert_eq!(snap_left(line, 6), 2);
        assert_eq!(snap_left(line, 2), 2);
        assert_eq!(snap_left(line, 0), 0);
    }

    #[test]
    fn continuation_after_param_line() {
        let prev = "     * @param {Number} a count";
        let padding = continuation_padding(prev, Dialect::JavaScript).unwrap();
        // '*' stays in column, padding reaches the description column.
        assert!(padding.starts_with("     *"));
        assert_eq!(padding.chars().count(), prev.find("count").unwrap());
    }

    #[test]
    fn continuation_not_offered_outside_tags() {
        assert!(continuation_padding("     * plain text", Dialect::JavaScript).is_none());
        assert!(continuation_padding("var x = 1;", Dialect::JavaScript).is_none());
    }
}
