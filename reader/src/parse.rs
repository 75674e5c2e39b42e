//! Dialect-driven record parsing.
//!
//! [`RecordParser`] turns physical lines into logical records, one at a
//! time. Because a quoted field may contain the line terminator, a single
//! record can span multiple physical lines; the parser pulls continuation
//! lines from the caller as needed, so the caller retains control of I/O
//! and line accounting.

use csv2sql_core::{Dialect, Row};

use crate::error::{ReadError, Result};

/// Parser state between characters of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// At the start of a field; quoting and initial-space skipping apply.
    FieldStart,
    /// Inside an unquoted field.
    InField,
    /// Inside a quoted field; delimiter and terminator are literal.
    InQuoted,
    /// Saw a quote character inside a quoted field; the next character
    /// decides between a doubled quote and the end of the quoted region.
    QuoteInQuoted,
    /// The previous character was the escape character; the next one is
    /// taken literally.
    Escaped,
}

/// Splits physical lines into records according to a [`Dialect`].
#[derive(Debug)]
pub(crate) struct RecordParser {
    dialect: Dialect,
}

impl RecordParser {
    pub(crate) fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Parses one logical record starting at `line` (terminator already
    /// stripped).
    ///
    /// When a quoted field or a trailing escape continues past the end of a
    /// physical line, `more` supplies the next one; `line_no` is advanced
    /// for each continuation line and names the offending line in strict
    /// mode errors. A blank line is an empty record with no fields.
    pub(crate) fn parse_record<F>(&self, line: String, line_no: &mut u64, mut more: F) -> Result<Row>
    where
        F: FnMut() -> Option<std::io::Result<String>>,
    {
        if line.is_empty() {
            return Ok(Vec::new());
        }

        let d = &self.dialect;
        let mut fields: Vec<String> = Vec::new();
        let mut field = String::new();
        let mut state = State::FieldStart;
        // Where to resume after an escaped character.
        let mut resume = State::InField;
        let mut current = line;

        loop {
            for c in current.chars() {
                match state {
                    State::Escaped => {
                        field.push(c);
                        state = resume;
                    }
                    State::FieldStart => {
                        if d.skip_initial_space && c == ' ' {
                            // discarded: space following a delimiter
                        } else if d.quote == Some(c) {
                            state = State::InQuoted;
                        } else if d.escape == Some(c) {
                            resume = State::InField;
                            state = State::Escaped;
                        } else if c == d.delimiter {
                            fields.push(std::mem::take(&mut field));
                        } else {
                            field.push(c);
                            state = State::InField;
                        }
                    }
                    State::InField => {
                        if d.escape == Some(c) {
                            resume = State::InField;
                            state = State::Escaped;
                        } else if c == d.delimiter {
                            fields.push(std::mem::take(&mut field));
                            state = State::FieldStart;
                        } else {
                            field.push(c);
                        }
                    }
                    State::InQuoted => {
                        if d.escape == Some(c) {
                            resume = State::InQuoted;
                            state = State::Escaped;
                        } else if d.quote == Some(c) {
                            state = State::QuoteInQuoted;
                        } else {
                            field.push(c);
                        }
                    }
                    State::QuoteInQuoted => {
                        if d.double_quote && d.quote == Some(c) {
                            field.push(c);
                            state = State::InQuoted;
                        } else if c == d.delimiter {
                            fields.push(std::mem::take(&mut field));
                            state = State::FieldStart;
                        } else if d.strict {
                            return Err(ReadError::Parse {
                                line: *line_no,
                                message: format!(
                                    "expected '{}' or end of record after closing quote, found {c:?}",
                                    d.delimiter
                                ),
                            });
                        } else {
                            // Best-effort recovery: the quote did close, but
                            // the remainder is literal text.
                            field.push(c);
                            state = State::InField;
                        }
                    }
                }
            }

            match state {
                State::InQuoted | State::Escaped => {
                    // The terminator belongs to the field; the record
                    // continues on the next physical line.
                    match more() {
                        Some(Ok(next)) => {
                            field.push('\n');
                            if state == State::Escaped {
                                state = resume;
                            }
                            *line_no += 1;
                            current = next;
                        }
                        Some(Err(e)) => return Err(e.into()),
                        None => {
                            if d.strict && state == State::InQuoted {
                                return Err(ReadError::Parse {
                                    line: *line_no,
                                    message: "unterminated quoted field at end of input"
                                        .to_string(),
                                });
                            }
                            fields.push(field);
                            return Ok(fields);
                        }
                    }
                }
                _ => {
                    fields.push(field);
                    return Ok(fields);
                }
            }
        }
    }
}
