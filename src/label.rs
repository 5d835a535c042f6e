use crate::cursor::Cursor;
use crate::error::Failure;
use crate::node::Node;
use crate::parser::{IntoParser, Parser};
use std::borrow::Cow;

/// Parser combinator that reports failures under a single name
///
/// Instead of the innermost expectation (`expected "`, `expected [0-9]`...),
/// a failure says `expected <name>` at the position where the labelled parser
/// started. Committed failures (past a cut) are left alone, since they are
/// more precise than any label.
pub struct Label<P> {
    parser: P,
    name: Cow<'static, str>,
}

impl<P> Label<P> {
    pub fn new(parser: P, name: impl Into<Cow<'static, str>>) -> Self {
        Label {
            parser,
            name: name.into(),
        }
    }
}

impl<P: Parser> Parser for Label<P> {
    fn parse<'code>(&self, cursor: &mut Cursor<'code>) -> Result<Node<'code>, Failure> {
        let start = cursor.position();
        match self.parser.parse(cursor) {
            Ok(node) => Ok(node),
            Err(failure) if cursor.committed_since(start) => Err(failure),
            Err(_) => {
                cursor.rewind(start);
                cursor.skip_whitespace();
                Err(cursor.backtrack(start, self.name.clone()))
            }
        }
    }
}

/// Convenience function to create a Label parser
pub fn label<P: IntoParser>(parser: P, name: impl Into<Cow<'static, str>>) -> Label<P::Parser> {
    Label::new(parser.into_parser(), name)
}

/// Extension trait to add .label() method support for parsers
pub trait LabelExt: Parser + Sized {
    fn label(self, name: impl Into<Cow<'static, str>>) -> Label<Self> {
        Label::new(self, name)
    }
}

impl<P: Parser> LabelExt for P {}
