//! Placeholder field navigation inside a rendered block.
//!
//! Two bounded linear scans: one from the cursor toward the relevant block
//! boundary, then — when that finds nothing — exactly one retry from the
//! opposite boundary. A second miss leaves the cursor alone.

use crate::buffer::{BlockRange, Buffer, Position};
use regex::Regex;
use std::sync::LazyLock;

static RE_FIELD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\[[^\]]+\]\]").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// The span of a placeholder token, for the host to select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpan {
    pub start: Position,
    pub end: Position,
}

/// Find the next placeholder field from `pos` in `direction` within the
/// block. Wraps around at most once.
pub fn next_field<B: Buffer + ?Sized>(
    buf: &B,
    pos: Position,
    direction: Direction,
    block: BlockRange,
) -> Option<FieldSpan> {
    scan(buf, pos, direction, block).or_else(|| {
        let restart = Position {
            line: match direction {
                Direction::Forward => block.start,
                Direction::Backward => block.end,
            },
            column: 0,
        };
        scan(buf, restart, direction, block)
    })
}

/// One bounded scan from `pos` toward the block boundary. On the cursor's
/// own line only the region strictly beyond the cursor is searched; forward
/// takes the first match per line, backward the last.
fn scan<B: Buffer + ?Sized>(
    buf: &B,
    pos: Position,
    direction: Direction,
    block: BlockRange,
) -> Option<FieldSpan> {
    match direction {
        Direction::Forward => {
            for line_no in pos.line..block.end {
                let line = buf.line(line_no)?;
                let from = if line_no == pos.line { pos.column } else { 0 };
                if let Some(span) = find_in(line, from, line_len(line), direction, line_no) {
                    return Some(span);
                }
            }
        }
        Direction::Backward => {
            let lowest = block.start + 1;
            if pos.line < lowest {
                return None;
            }
            for line_no in (lowest..=pos.line).rev() {
                let line = buf.line(line_no)?;
                let to = if line_no == pos.line {
                    pos.column
                } else {
                    line_len(line)
                };
                if let Some(span) = find_in(line, 0, to, direction, line_no) {
                    return Some(span);
                }
            }
        }
    }
    None
}

/// Search the character region `[from, to)` of one line for a field token.
fn find_in(
    line: &str,
    from: usize,
    to: usize,
    direction: Direction,
    line_no: usize,
) -> Option<FieldSpan> {
    let start_byte = col_to_byte(line, from);
    let end_byte = col_to_byte(line, to);
    if start_byte > end_byte {
        return None;
    }
    let region = &line[start_byte..end_byte];

    let m = match direction {
        Direction::Forward => RE_FIELD.find(region),
        Direction::Backward => RE_FIELD.find_iter(region).last(),
    }?;

    let start = from + region[..m.start()].chars().count();
    let length = m.as_str().chars().count();
    Some(FieldSpan {
        start: Position {
            line: line_no,
            column: start,
        },
        end: Position {
            line: line_no,
            column: start + length,
        },
    })
}

fn line_len(line: &str) -> usize {
    line.chars().count()
}

fn col_to_byte(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}
