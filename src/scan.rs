//! Function body scanner.
//!
//! A character state machine that walks source text and yields only the
//! characters in code position — string literals, line comments, block
//! comments, and regex literals are consumed silently so they can never
//! affect brace counting or keyword detection downstream.

/// Scanner states. One state per skippable span kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    Str(char),
    LineComment,
    BlockComment,
    Regex,
}

/// Characters that, as the previous significant code character, put a
/// following `/` in regex position rather than division position.
const REGEX_PRECEDERS: &str = "|&-+*%!=(;?,<>~[{:";

/// Iterator over `(byte_offset, char)` pairs in code position.
pub struct CodeChars<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    state: State,
    /// Last significant code character, for the regex-literal heuristic.
    last_code: Option<char>,
}

/// Iterate the code-position characters of `text`.
pub fn code_chars(text: &str) -> CodeChars<'_> {
    CodeChars {
        chars: text.char_indices().peekable(),
        state: State::Normal,
        last_code: None,
    }
}

impl<'a> Iterator for CodeChars<'a> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<(usize, char)> {
        while let Some((i, c)) = self.chars.next() {
            match self.state {
                State::Normal => match c {
                    '"' | '\'' => self.state = State::Str(c),
                    '/' => match self.chars.peek().map(|&(_, n)| n) {
                        Some('/') => {
                            self.chars.next();
                            self.state = State::LineComment;
                        }
                        Some('*') => {
                            self.chars.next();
                            self.state = State::BlockComment;
                        }
                        _ => {
                            if self.last_code.map_or(true, |p| REGEX_PRECEDERS.contains(p)) {
                                self.state = State::Regex;
                            } else {
                                self.last_code = Some('/');
                                return Some((i, '/'));
                            }
                        }
                    },
                    _ => {
                        if !c.is_whitespace() {
                            self.last_code = Some(c);
                        }
                        return Some((i, c));
                    }
                },
                State::Str(quote) => match c {
                    '\\' => {
                        self.chars.next();
                    }
                    _ if c == quote => self.state = State::Normal,
                    _ => {}
                },
                State::LineComment => {
                    if c == '\n' {
                        self.state = State::Normal;
                    }
                }
                State::BlockComment => {
                    if c == '*' && self.chars.peek().map(|&(_, n)| n) == Some('/') {
                        self.chars.next();
                        self.state = State::Normal;
                    }
                }
                // A regex literal ends at the next unescaped `/`; an
                // unterminated one ends with the line.
                State::Regex => match c {
                    '\\' => {
                        self.chars.next();
                    }
                    '/' | '\n' => self.state = State::Normal,
                    _ => {}
                },
            }
        }
        None
    }
}

/// Slice `text` from its start through the brace that closes the first
/// code-position `{`. `None` when no opening brace exists or the body never
/// closes, in which case inference is skipped entirely.
pub fn function_extent(text: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut opened = false;

    for (i, c) in code_chars(text) {
        match c {
            '{' => {
                depth += 1;
                opened = true;
            }
            '}' => {
                if opened {
                    depth -= 1;
                    if depth == 0 {
                        return Some(&text[..i + c.len_utf8()]);
                    }
                }
            }
            _ => {}
        }
    }
    None
}
