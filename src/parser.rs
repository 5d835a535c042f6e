use crate::cursor::Cursor;
use crate::error::Failure;
use crate::exact::Exact;
use crate::node::Node;
use crate::rule::Rule;
use std::sync::Arc;

/// Core parser trait for parser combinators
///
/// A parser reads from the cursor and either produces a [`Node`] or a
/// [`Failure`]. On failure the parser must leave the cursor where it found
/// it, unless a cut was crossed since it started, in which case the failure
/// is a commitment and the position is left where the failure happened.
///
/// Parsers carry no mutable state, so one grammar can serve many parses,
/// including concurrent ones.
pub trait Parser: Send + Sync {
    fn parse<'code>(&self, cursor: &mut Cursor<'code>) -> Result<Node<'code>, Failure>;
}

/// A type-erased parser, used where parsers of different types are mixed
pub type BoxedParser = Box<dyn Parser>;

impl<P: Parser + ?Sized> Parser for Box<P> {
    fn parse<'code>(&self, cursor: &mut Cursor<'code>) -> Result<Node<'code>, Failure> {
        (**self).parse(cursor)
    }
}

impl<P: Parser + ?Sized> Parser for Arc<P> {
    fn parse<'code>(&self, cursor: &mut Cursor<'code>) -> Result<Node<'code>, Failure> {
        (**self).parse(cursor)
    }
}

/// Anything that can stand where a parser is expected
///
/// String literals become [`Exact`] matchers and rules become handles on
/// their (possibly not yet defined) definition. The conversion happens once,
/// while the grammar is built.
pub trait IntoParser {
    type Parser: Parser + 'static;

    fn into_parser(self) -> Self::Parser;
}

impl<P: Parser + 'static> IntoParser for P {
    type Parser = P;

    fn into_parser(self) -> P {
        self
    }
}

impl IntoParser for &'static str {
    type Parser = Exact;

    fn into_parser(self) -> Exact {
        Exact::new(self)
    }
}

impl IntoParser for String {
    type Parser = Exact;

    fn into_parser(self) -> Exact {
        Exact::new(self)
    }
}

impl IntoParser for &Rule {
    type Parser = Rule;

    fn into_parser(self) -> Rule {
        self.clone()
    }
}

/// Convert anything parser-ish into a boxed parser
pub fn boxed(parser: impl IntoParser) -> BoxedParser {
    Box::new(parser.into_parser())
}
