//! Render a merged signature into aligned documentation block text.
//!
//! Column layout: the `@param` tag takes a wider gutter when a return line
//! is present so both tags end at the same column; every single-line type is
//! right-padded to the longest type line across parameters *and* the return;
//! titles are right-padded to the longest title. Descriptions therefore
//! start at one shared column on every tag line. Multi-line types open the
//! wrapper alone and indent continuation lines beneath it; multi-line
//! descriptions indent under their first character. Anything unknown renders
//! as a placeholder token.

use crate::dialect::Dialect;
use crate::model::{Signature, DESCRIPTION_PLACEHOLDER, TYPE_PLACEHOLDER};

/// Render the block, every line prefixed with the signature's indentation,
/// with a trailing newline. Output is deterministic.
pub fn render(sig: &Signature, dialect: Dialect) -> String {
    let (open, close) = dialect.wrapper();
    let mut lines: Vec<String> = vec!["/**".to_string()];

    let description = sig
        .description
        .clone()
        .unwrap_or_else(|| DESCRIPTION_PLACEHOLDER.to_string());
    for line in description.split('\n') {
        lines.push(format!(" * {line}"));
    }

    let param_types: Vec<Vec<String>> = sig
        .parameters
        .iter()
        .map(|p| type_lines(p.type_.as_deref()))
        .collect();
    let return_types = sig
        .returns
        .present
        .then(|| type_lines(sig.returns.type_.as_deref()));

    let max_title = sig
        .parameters
        .iter()
        .map(|p| width(&p.title))
        .max()
        .unwrap_or(0);
    let max_type = param_types
        .iter()
        .chain(return_types.iter())
        .flatten()
        .map(|t| width(t))
        .max()
        .unwrap_or(0);

    // With a return line present, `@param   ` and `@returns ` end at the
    // same column.
    let gutter = if sig.returns.present { "   " } else { " " };

    for (param, tlines) in sig.parameters.iter().zip(&param_types) {
        let dlines = desc_lines(param.description.as_deref());
        let first_desc = &dlines[0];
        let title_pad = pad(max_title + 1 - width(&param.title));

        if let [only] = tlines.as_slice() {
            lines.push(format!(
                " * @param{gutter}{open}{only}{close}{}{}{title_pad}{first_desc}",
                pad(max_type + 1 - width(only)),
                param.title,
            ));
        } else {
            let head = format!(" * @param{gutter}{open}");
            let type_indent = pad(width(&head) - 4);
            lines.push(head);
            for t in tlines {
                lines.push(format!(" *   {type_indent}{t}"));
            }
            lines.push(format!(
                " * {type_indent}{close}{}{}{title_pad}{first_desc}",
                pad(max_type + 1),
                param.title,
            ));
        }

        push_desc_rest(&mut lines, &dlines);
    }

    if let Some(tlines) = &return_types {
        let dlines = desc_lines(sig.returns.description.as_deref());
        let first_desc = &dlines[0];

        if let [only] = tlines.as_slice() {
            lines.push(format!(
                " * @returns {open}{only}{close}{}{}{first_desc}",
                pad(max_type + 1 - width(only)),
                pad(max_title + 1),
            ));
            push_desc_rest(&mut lines, &dlines);
        } else {
            let head = format!(" * @returns {open}");
            let type_indent = pad(width(&head) - 4);
            lines.push(head);
            for t in tlines {
                lines.push(format!(" *   {type_indent}{t}"));
            }
            lines.push(format!(" * {type_indent}{close}"));
            for d in dlines.iter() {
                lines.push(format!(" * {d}"));
            }
        }
    }

    lines.push(" */".to_string());

    let mut out = String::new();
    for line in &lines {
        out.push_str(&sig.indentation);
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Continuation description lines, indented under the first description
/// character of the line just emitted.
fn push_desc_rest(lines: &mut Vec<String>, dlines: &[String]) {
    if dlines.len() < 2 {
        return;
    }
    let carrier = lines.last().expect("tag line just pushed");
    let indent = pad(width(carrier) - 3 - width(&dlines[0]));
    for d in &dlines[1..] {
        lines.push(format!(" * {indent}{d}"));
    }
}

fn type_lines(type_: Option<&str>) -> Vec<String> {
    match type_ {
        Some(t) => t.trim().split('\n').map(str::to_string).collect(),
        None => vec![TYPE_PLACEHOLDER.to_string()],
    }
}

fn desc_lines(desc: Option<&str>) -> Vec<String> {
    match desc {
        Some(d) => d.split('\n').map(str::to_string).collect(),
        None => vec![DESCRIPTION_PLACEHOLDER.to_string()],
    }
}

fn width(s: &str) -> usize {
    s.chars().count()
}

fn pad(n: usize) -> String {
    " ".repeat(n)
}
