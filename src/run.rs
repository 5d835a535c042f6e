use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::node::{Node, Value};
use crate::parser::Parser;
use crate::whitespace::Whitespace;

#[cfg(feature = "trace")]
use crate::trace::Profile;

/// Settings for a top-level parse
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Config {
    /// Whitespace skipped automatically before every scanner
    pub whitespace: Whitespace,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn whitespace(mut self, whitespace: Whitespace) -> Self {
        self.whitespace = whitespace;
        self
    }
}

/// Outcome of a top-level parse
///
/// `node` is whatever the grammar produced, if it matched at all, and stays
/// available when the grammar matched but left input behind.
#[derive(Debug)]
pub struct Parsed<'code> {
    pub node: Option<Node<'code>>,
    /// Input after the last successful match (and trailing whitespace)
    pub remaining: &'code str,
    pub error: Option<ParseError>,
}

impl<'code> Parsed<'code> {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// The semantic value of the top node, if it carries one
    pub fn value(&self) -> Option<&Value> {
        self.node.as_ref().and_then(Node::value)
    }

    pub fn into_result(self) -> Result<Node<'code>, ParseError> {
        match (self.error, self.node) {
            (Some(error), _) => Err(error),
            (None, Some(node)) => Ok(node),
            (None, None) => Ok(Node::Empty),
        }
    }
}

/// Apply `parser` to the whole of `input` with the default configuration
pub fn parse<'code, P: Parser + ?Sized>(parser: &P, input: &'code str) -> Parsed<'code> {
    parse_with(parser, input, &Config::default())
}

pub fn parse_with<'code, P: Parser + ?Sized>(parser: &P, input: &'code str, config: &Config) -> Parsed<'code> {
    let mut cursor = Cursor::with_whitespace(input, config.whitespace);
    drive(parser, &mut cursor)
}

/// Like [`parse`], but any error, including unparsed input, discards the result
pub fn run<'code, P: Parser + ?Sized>(parser: &P, input: &'code str) -> Result<Node<'code>, ParseError> {
    parse(parser, input).into_result()
}

/// Like [`parse_with`], also returning per-parser call statistics
#[cfg(feature = "trace")]
pub fn parse_profiled<'code, P: Parser + ?Sized>(
    parser: &P,
    input: &'code str,
    config: &Config,
) -> (Parsed<'code>, Profile) {
    let mut cursor = Cursor::with_whitespace(input, config.whitespace);
    let parsed = drive(parser, &mut cursor);
    (parsed, cursor.profile)
}

fn drive<'code, P: Parser + ?Sized>(parser: &P, cursor: &mut Cursor<'code>) -> Parsed<'code> {
    cursor.skip_whitespace();

    let parsed = match parser.parse(cursor) {
        Ok(node) => {
            cursor.skip_whitespace();
            let remaining = cursor.remaining();
            let error = (!remaining.is_empty()).then(|| ParseError::Unparsed {
                pos: cursor.position(),
                remaining: remaining.to_string(),
            });
            Parsed {
                node: Some(node),
                remaining,
                error,
            }
        }
        Err(failure) => Parsed {
            node: None,
            remaining: cursor.remaining(),
            error: Some(failure.into()),
        },
    };

    match &parsed.error {
        None => log::debug!("parsed {} bytes", cursor.input().len()),
        Some(error) => log::debug!("parse of {} bytes failed: {}", cursor.input().len(), error),
    }
    parsed
}
