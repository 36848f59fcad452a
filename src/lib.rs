//! funcdoc — generate and update aligned documentation blocks for function
//! declarations.
//!
//! The pipeline: extract a signature from the declaration line, infer return
//! presence and parameter types from the function body, parse any existing
//! block above the declaration, merge (authored content wins), render the
//! aligned block. Placeholder tokens mark everything still unknown and are
//! the navigation targets for [`navigate::next_field`].
//!
//! The host editor owns the text buffer; this crate only reads line
//! snapshots through [`buffer::Buffer`] and returns replacement text.

pub mod buffer;
pub mod dialect;
pub mod error;
pub mod extract;
pub mod infer;
pub mod model;
pub mod navigate;
pub mod parser;
pub mod render;
pub mod scan;

pub use buffer::{BlockRange, Buffer, Position};
pub use dialect::Dialect;
pub use error::Error;
pub use model::{DocTags, Parameter, Returns, Signature};
pub use navigate::{Direction, FieldSpan};

/// Build the merged signature for a documentation request.
///
/// `text` starts at the declaration line and runs at least to the end of
/// the function body; `prior_block` holds the interior lines of an existing
/// block above the declaration, if one was found.
pub fn build_signature(
    text: &str,
    prior_block: Option<&[String]>,
    dialect: Dialect,
) -> Result<Signature, Error> {
    let declaration = text.lines().next().unwrap_or("");
    let mut signature = extract::extract(declaration)?;

    let titles: Vec<String> = signature
        .parameters
        .iter()
        .map(|p| p.title.clone())
        .collect();
    let inference = infer::infer(text, &titles, dialect);

    signature.returns = inference.returns;
    for (param, guess) in signature.parameters.iter_mut().zip(inference.param_types) {
        param.type_ = guess;
    }

    Ok(match prior_block {
        Some(lines) => parser::merge::merge(signature, parser::block::parse(lines, dialect)),
        None => signature,
    })
}

/// Generate the rendered documentation block for the function starting at
/// the first line of `text`. `None`-equivalent failures surface as
/// [`Error`]; the caller's buffer is never touched.
pub fn generate_block(
    text: &str,
    prior_block: Option<&[String]>,
    dialect: Dialect,
) -> Result<String, Error> {
    let signature = build_signature(text, prior_block, dialect)?;
    Ok(render::render(&signature, dialect))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(block: &str) -> Vec<String> {
        block.lines().map(|l| l.to_string()).collect()
    }

    #[test]
    fn scenario_bare_function() {
        // Two parameters, no body return: placeholders everywhere, no
        // @returns line.
        let text = "function foo(a, b) {}";
        let block = generate_block(text, None, Dialect::JavaScript).unwrap();
        assert_eq!(
            block,
            "/**\n\
             \x20* [[Description]]\n\
             \x20* @param {[[Type]]} a [[Description]]\n\
             \x20* @param {[[Type]]} b [[Description]]\n\
             \x20*/\n"
        );
    }

    #[test]
    fn scenario_object_return() {
        let text = "function make() {\n  return {x: 1};\n}";
        let block = generate_block(text, None, Dialect::JavaScript).unwrap();
        assert!(block.contains("@returns {Object}"));
        assert!(block.contains("[[Description]]"));
    }

    #[test]
    fn scenario_update_preserves_authored_content() {
        // Prior block documents `a`; the code gained `c` before `b`.
        let text = "function foo(a, c, b) {}";
        let prior = lines(
            " * Counts things\n\
             \x20* @param {Number} a count\n\
             \x20* @param {String} b label",
        );
        let block = generate_block(text, Some(&prior), Dialect::JavaScript).unwrap();
        let rendered: Vec<&str> = block.lines().collect();
        assert_eq!(rendered[1], " * Counts things");
        let a_line = rendered.iter().find(|l| l.contains(" a ")).unwrap();
        assert!(a_line.contains("{Number}") && a_line.ends_with("count"));
        let c_line = rendered.iter().find(|l| l.contains(" c ")).unwrap();
        assert!(c_line.contains("[[Type]]"));
        let b_line = rendered.iter().find(|l| l.contains(" b ")).unwrap();
        assert!(b_line.contains("{String}") && b_line.ends_with("label"));
        // Declaration order, not prior-block order.
        let a_idx = rendered.iter().position(|l| l.contains(" a ")).unwrap();
        let c_idx = rendered.iter().position(|l| l.contains(" c ")).unwrap();
        let b_idx = rendered.iter().position(|l| l.contains(" b ")).unwrap();
        assert!(a_idx < c_idx && c_idx < b_idx);
    }

    #[test]
    fn scenario_placeholder_return_type_refreshed() {
        // Prior return tag has a placeholder type and a real description;
        // the body now returns a recognizable literal.
        let text = "function f() {\n  return [1];\n}";
        let prior = lines(" * Sums\n * @returns {[[Type]]} the sum");
        let block = generate_block(text, Some(&prior), Dialect::JavaScript).unwrap();
        assert!(block.contains("@returns {Array}"));
        assert!(block.contains("the sum"));
    }

    #[test]
    fn stale_return_tag_suppressed() {
        let text = "function f(a) {\n  a.push(1);\n}";
        let prior = lines(" * Pushes\n * @returns {Number} old value");
        let block = generate_block(text, Some(&prior), Dialect::JavaScript).unwrap();
        assert!(!block.contains("@returns"));
        assert!(!block.contains("old value"));
    }

    #[test]
    fn stale_parameter_never_rendered() {
        let text = "function f(x) {}";
        let prior = lines(" * Docs\n * @param {Number} gone old param");
        let block = generate_block(text, Some(&prior), Dialect::JavaScript).unwrap();
        assert!(!block.contains("gone"));
        assert!(block.contains(" x "));
    }

    #[test]
    fn merge_fidelity_when_all_titles_match() {
        let text = "function f(a, b) {\n  return true;\n}";
        let prior = lines(
            " * Checks\n\
             \x20* @param   {Number} a first\n\
             \x20* @param   {String} b second\n\
             \x20* @returns {Boolean} whether it holds",
        );
        let block = generate_block(text, Some(&prior), Dialect::JavaScript).unwrap();
        assert!(block.contains("{Number}"));
        assert!(block.contains("first"));
        assert!(block.contains("{String}"));
        assert!(block.contains("second"));
        assert!(block.contains("{Boolean}"));
        assert!(block.contains("whether it holds"));
        // No inference leaks through.
        assert!(!block.contains("[[Type]]"));
    }

    #[test]
    fn indentation_carried_from_declaration() {
        let text = "    function nested(a) {}";
        let block = generate_block(text, None, Dialect::JavaScript).unwrap();
        for line in block.lines() {
            assert!(line.starts_with("    "));
        }
    }

    #[test]
    fn no_signature_is_an_error() {
        assert_eq!(
            generate_block("const x = 1;", None, Dialect::JavaScript).unwrap_err(),
            Error::NoSignature
        );
    }
}
