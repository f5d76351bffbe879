//! The character-scanning state machine shared by [`split_line`](crate::split_line)
//! and [`RecordReader`](crate::RecordReader).
//!
//! A [`Scanner`] is fed one character at a time and tracks an explicit
//! [`State`], the field being accumulated and the fields completed so far.
//! It knows nothing about where characters come from; the single-line and
//! streaming front ends differ only in their [`LineBreaks`] policy and in what
//! they do when their input runs out.

use crate::options::{LineBreaks, QUOTE};
use crate::{Error, Result};

/// Scanner states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum State {
    /// Nothing consumed for the current field yet.
    FieldStart,
    Unquoted,
    Quoted,
    /// A quote was seen inside a quoted field: either a doubled quote or the closing one.
    QuoteSeenInsideQuoted,
}

/// Outcome of feeding one character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Continue,
    /// A line terminator outside quotes ended the record.
    Terminated,
}

pub(crate) struct Scanner {
    delimiter: char,
    policy: LineBreaks,
    state: State,
    field: String,
    fields: Vec<String>,
    /// Backslash seen inside quoted content, waiting for the next character.
    backslash: bool,
    consumed: bool,
    line: usize,
    col: usize,
}

#[inline]
fn is_line_break(ch: char) -> bool {
    ch == '\n' || ch == '\r'
}

impl Scanner {
    pub(crate) fn new(delimiter: char, policy: LineBreaks, line: usize) -> Self {
        Scanner {
            delimiter,
            policy,
            state: State::FieldStart,
            field: String::new(),
            fields: Vec::new(),
            backslash: false,
            consumed: false,
            line,
            col: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> State {
        self.state
    }

    /// The physical line the scanner is currently on (1-based).
    pub(crate) fn line(&self) -> usize {
        self.line
    }

    pub(crate) fn is_quote_open(&self) -> bool {
        self.state == State::Quoted
    }

    /// Text accumulated for the field in progress.
    pub(crate) fn partial_field(&self) -> &str {
        &self.field
    }

    /// Feeds one character through the state machine.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnterminatedOrMisplacedQuote`] when a quote appears
    /// inside an unquoted field or anything other than a delimiter, quote or
    /// terminator follows a closing quote.
    pub(crate) fn feed(&mut self, ch: char) -> Result<Step> {
        self.consumed = true;
        self.col += 1;

        let step = match self.state {
            State::FieldStart => {
                if ch == QUOTE {
                    self.state = State::Quoted;
                    Step::Continue
                } else if ch == self.delimiter {
                    self.close_field();
                    Step::Continue
                } else if is_line_break(ch) {
                    self.close_field();
                    Step::Terminated
                } else {
                    self.field.push(ch);
                    self.state = State::Unquoted;
                    Step::Continue
                }
            }
            State::Unquoted => {
                if ch == QUOTE {
                    self.field.push(ch);
                    return Err(Error::misplaced_quote(self.line, self.col, &self.field));
                } else if ch == self.delimiter {
                    self.close_field();
                    Step::Continue
                } else if is_line_break(ch) {
                    self.close_field();
                    Step::Terminated
                } else {
                    self.field.push(ch);
                    Step::Continue
                }
            }
            State::Quoted => {
                self.feed_quoted(ch);
                Step::Continue
            }
            State::QuoteSeenInsideQuoted => {
                if ch == QUOTE {
                    self.field.push(QUOTE);
                    self.state = State::Quoted;
                    Step::Continue
                } else if ch == self.delimiter {
                    self.close_field();
                    Step::Continue
                } else if is_line_break(ch) {
                    self.close_field();
                    Step::Terminated
                } else {
                    return Err(Error::misplaced_quote(self.line, self.col, &self.field));
                }
            }
        };

        if ch == '\n' {
            self.line += 1;
            self.col = 0;
        }
        Ok(step)
    }

    fn feed_quoted(&mut self, ch: char) {
        if self.backslash {
            self.backslash = false;
            match ch {
                'n' => return self.field.push('\n'),
                'r' => return self.field.push('\r'),
                _ => self.field.push('\\'),
            }
        }
        if ch == QUOTE {
            self.state = State::QuoteSeenInsideQuoted;
        } else if ch == '\\' && self.policy == LineBreaks::Escaped {
            self.backslash = true;
        } else {
            // raw line breaks are field content while the quote is open
            self.field.push(ch);
        }
    }

    fn close_field(&mut self) {
        self.fields.push(std::mem::take(&mut self.field));
        self.state = State::FieldStart;
    }

    /// Takes the fields of a record ended by [`Step::Terminated`].
    pub(crate) fn take_record(&mut self) -> Vec<String> {
        self.consumed = false;
        std::mem::take(&mut self.fields)
    }

    /// Completes the record at end of input.
    ///
    /// Returns `None` when no character at all was consumed, which callers
    /// report as end of input rather than as a record. Callers must check
    /// [`Scanner::is_quote_open`] first.
    pub(crate) fn end_of_input(&mut self) -> Option<Vec<String>> {
        if !self.consumed {
            return None;
        }
        if self.backslash {
            self.backslash = false;
            self.field.push('\\');
        }
        self.close_field();
        Some(self.take_record())
    }
}
