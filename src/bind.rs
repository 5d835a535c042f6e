use crate::cursor::Cursor;
use crate::error::Failure;
use crate::node::{Node, Value};
use crate::parser::{IntoParser, Parser};

/// Parser combinator that replaces a successful match with a fixed value
///
/// Handy for keywords and constants, e.g. binding `true` to `Value::Bool(true)`.
pub struct Bind<P> {
    parser: P,
    value: Value,
}

impl<P> Bind<P> {
    pub fn new(parser: P, value: Value) -> Self {
        Bind { parser, value }
    }
}

impl<P: Parser> Parser for Bind<P> {
    fn parse<'code>(&self, cursor: &mut Cursor<'code>) -> Result<Node<'code>, Failure> {
        self.parser.parse(cursor)?;
        Ok(Node::Value(self.value.clone()))
    }
}

/// Convenience function to create a Bind parser
pub fn bind<P: IntoParser>(parser: P, value: impl Into<Value>) -> Bind<P::Parser> {
    Bind::new(parser.into_parser(), value.into())
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt: Parser + Sized {
    fn bind(self, value: impl Into<Value>) -> Bind<Self> {
        Bind::new(self, value.into())
    }
}

impl<P: Parser> BindExt for P {}
