//! State machine consuming a raw tag string one segment at a time.
//!
//! Each segment runs through `Start -> ParseName -> ParseValue ->
//! ParseOptions -> End`, and `End` either loops back to `Start` or finishes.
//! Per-segment scratch data travels inside the state values, so nothing
//! leaks from one segment into the next. The first error aborts the whole
//! run and drops every tag collected so far.

use crate::errors::ParseError;
use crate::option_set::OptionSet;
use crate::tag::{Tag, Tags};

/// Unconsumed remainder of the input together with its byte offset.
#[derive(Debug, Clone, Copy)]
struct Cursor<'a> {
    rest: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(raw: &'a str) -> Self {
        Self {
            rest: raw,
            offset: 0,
        }
    }

    /// Move to `suffix`, which must be a suffix of the current remainder.
    fn advance_to(&mut self, suffix: &'a str) {
        self.offset += self.rest.len() - suffix.len();
        self.rest = suffix;
    }

    fn trim(&mut self) {
        self.advance_to(self.rest.trim_start());
        self.rest = self.rest.trim_end();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State<'a> {
    Start,
    ParseName,
    ParseValue { name: &'a str },
    ParseOptions { name: &'a str, content: &'a str },
    End { name: &'a str, tag: Tag },
}

/// Drives the parse of one raw string to completion or failure.
#[derive(Debug)]
pub(crate) struct Machine<'a> {
    cursor: Cursor<'a>,
    tags: Tags,
}

impl<'a> Machine<'a> {
    pub(crate) fn new(raw: &'a str) -> Self {
        Self {
            cursor: Cursor::new(raw),
            tags: Tags::new(),
        }
    }

    pub(crate) fn run(mut self) -> Result<Tags, ParseError> {
        let mut state = Some(State::Start);
        while let Some(current) = state {
            state = self.step(current)?;
        }
        Ok(self.tags)
    }

    fn step(&mut self, state: State<'a>) -> Result<Option<State<'a>>, ParseError> {
        log::trace!("{state:?} at byte {}", self.cursor.offset);
        match state {
            State::Start => Ok(Some(State::ParseName)),
            State::ParseName => self.parse_name().map(Some),
            State::ParseValue { name } => self.parse_value(name).map(Some),
            State::ParseOptions { name, content } => Ok(Some(parse_options(name, content))),
            State::End { name, tag } => Ok(self.end(name, tag)),
        }
    }

    fn parse_name(&mut self) -> Result<State<'a>, ParseError> {
        self.cursor.trim();
        if self.cursor.rest.is_empty() {
            return Err(ParseError::EmptyInput {
                position: self.cursor.offset,
            });
        }

        let Some((name, rest)) = self.cursor.rest.split_once(':') else {
            return Err(ParseError::MissingTagName {
                position: self.cursor.offset,
            });
        };
        self.cursor.advance_to(rest);

        Ok(State::ParseValue { name })
    }

    fn parse_value(&mut self, name: &'a str) -> Result<State<'a>, ParseError> {
        if self.cursor.rest.is_empty() {
            return Err(ParseError::MissingValue {
                name: name.to_owned(),
                position: self.cursor.offset,
            });
        }

        let Some((_, quoted)) = self.cursor.rest.split_once('"') else {
            return Err(ParseError::MissingOpenQuote {
                name: name.to_owned(),
                position: self.cursor.offset,
            });
        };
        self.cursor.advance_to(quoted);

        let Some((content, rest)) = quoted.split_once('"') else {
            return Err(ParseError::MissingCloseQuote {
                name: name.to_owned(),
                position: self.cursor.offset,
            });
        };
        self.cursor.advance_to(rest);

        Ok(State::ParseOptions { name, content })
    }

    fn end(&mut self, name: &'a str, tag: Tag) -> Option<State<'a>> {
        if self.tags.insert(name.to_owned(), tag).is_some() {
            log::debug!("tag `{name}` defined more than once; keeping the last definition");
        }
        (!self.cursor.rest.trim().is_empty()).then_some(State::Start)
    }
}

/// Split quoted content on every comma: the first piece is the value, the
/// rest are options.
fn parse_options<'a>(name: &'a str, content: &'a str) -> State<'a> {
    let mut pieces = content.split(',');
    let value = pieces.next().unwrap_or_default();
    let options: OptionSet = pieces.collect();
    State::End {
        name,
        tag: Tag::new(value, options),
    }
}
