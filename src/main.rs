//! funcdoc — maintain documentation blocks for function declarations.
//!
//! Two modes:
//!
//! - **generate**: `funcdoc generate --lang javascript --line 12 file.js`
//!   prints the document with a fresh (or merged) documentation block above
//!   the declaration. `--block-only` prints just the block, `--json` the
//!   merged signature.
//! - **next-field**: `funcdoc next-field --lang javascript --line 13
//!   --column 4 file.js` prints the span of the next placeholder field as
//!   two 1-based `line:column` pairs, or nothing when the block has none.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use funcdoc::{buffer, navigate, Dialect, Direction, Position};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "funcdoc",
    about = "Generate and update documentation blocks for function declarations"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate or refresh the documentation block above a declaration
    Generate {
        /// Language id: javascript, coffeescript, livescript, php
        #[arg(short, long)]
        lang: String,

        /// 1-based line of the function declaration
        #[arg(short = 'n', long)]
        line: usize,

        /// Print only the documentation block instead of the whole document
        #[arg(long)]
        block_only: bool,

        /// Print the merged signature as JSON instead of rendered text
        #[arg(long)]
        json: bool,

        /// Input file. Reads from stdin if omitted or `-`.
        file: Option<PathBuf>,
    },

    /// Find the next placeholder field inside a documentation block
    NextField {
        /// Language id: javascript, coffeescript, livescript, php
        #[arg(short, long)]
        lang: String,

        /// 1-based cursor line
        #[arg(short = 'n', long)]
        line: usize,

        /// 1-based cursor column
        #[arg(short, long)]
        column: usize,

        /// Search toward the start of the block instead of the end
        #[arg(long)]
        backward: bool,

        /// Input file. Reads from stdin if omitted or `-`.
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            lang,
            line,
            block_only,
            json,
            file,
        } => generate(&lang, line, block_only, json, file.as_deref()),
        Command::NextField {
            lang,
            line,
            column,
            backward,
            file,
        } => next_field(&lang, line, column, backward, file.as_deref()),
    }
}

fn generate(
    lang: &str,
    line: usize,
    block_only: bool,
    json: bool,
    file: Option<&std::path::Path>,
) -> Result<()> {
    let dialect = Dialect::from_language_id(lang)?;
    let lines = read_lines(file)?;
    let idx = to_index(line, lines.len())?;

    let text = lines[idx..].join("\n");
    let prior = buffer::block_above(&lines[..], idx);
    let interior = prior.map(|range| buffer::block_interior(&lines[..], range));

    let signature = funcdoc::build_signature(&text, interior.as_deref(), dialect)
        .with_context(|| format!("line {line}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&signature)?);
        return Ok(());
    }

    let block = funcdoc::render::render(&signature, dialect);
    if block_only {
        print!("{block}");
        return Ok(());
    }

    // Splice: replace an existing block, or insert above the declaration.
    let keep_until = prior.map(|range| range.start).unwrap_or(idx);
    for kept in &lines[..keep_until] {
        println!("{kept}");
    }
    print!("{block}");
    for kept in &lines[idx..] {
        println!("{kept}");
    }
    Ok(())
}

fn next_field(
    lang: &str,
    line: usize,
    column: usize,
    backward: bool,
    file: Option<&std::path::Path>,
) -> Result<()> {
    Dialect::from_language_id(lang)?;
    let lines = read_lines(file)?;
    let line_idx = to_index(line, lines.len())?;
    if column == 0 {
        bail!("columns are 1-based");
    }

    let Some(block) = buffer::block_around(&lines[..], line_idx) else {
        bail!("line {line} is not inside a documentation block");
    };

    let snapped = buffer::snap_left(&lines[line_idx], column - 1);
    let pos = Position {
        line: line_idx,
        column: snapped,
    };
    let direction = if backward {
        Direction::Backward
    } else {
        Direction::Forward
    };

    // No field found is not an error: the host leaves the cursor alone.
    if let Some(span) = navigate::next_field(&lines[..], pos, direction, block) {
        println!(
            "{}:{} {}:{}",
            span.start.line + 1,
            span.start.column + 1,
            span.end.line + 1,
            span.end.column + 1
        );
    }
    Ok(())
}

fn read_lines(file: Option<&std::path::Path>) -> Result<Vec<String>> {
    let input = match file {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    Ok(input.lines().map(str::to_string).collect())
}

fn to_index(line: usize, count: usize) -> Result<usize> {
    if line == 0 {
        bail!("lines are 1-based");
    }
    if line > count {
        bail!("line {line} is past the end of the input ({count} lines)");
    }
    Ok(line - 1)
}
