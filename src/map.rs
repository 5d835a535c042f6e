use crate::cursor::Cursor;
use crate::error::Failure;
use crate::node::Node;
use crate::parser::{IntoParser, Parser};

/// Parser combinator that transforms the node of a successful match
///
/// Typically used to turn tokens and children into a semantic value:
///
/// ```
/// use cutparse::{Cursor, MapExt, Parser, Value, chars};
///
/// let word_length = chars("a-z").map(|node| Value::Int(node.flatten().len() as i64).into());
///
/// let mut cursor = Cursor::new("hello");
/// let node = word_length.parse(&mut cursor).unwrap();
/// assert_eq!(node.value(), Some(&Value::Int(5)));
/// ```
///
/// Failures pass through untouched.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<P, F> Parser for Map<P, F>
where
    P: Parser,
    F: for<'code> Fn(Node<'code>) -> Node<'code> + Send + Sync,
{
    fn parse<'code>(&self, cursor: &mut Cursor<'code>) -> Result<Node<'code>, Failure> {
        let node = self.parser.parse(cursor)?;
        Ok((self.mapper)(node))
    }
}

/// Convenience function to create a Map parser
pub fn map<P, F>(parser: P, mapper: F) -> Map<P::Parser, F>
where
    P: IntoParser,
    F: for<'code> Fn(Node<'code>) -> Node<'code> + Send + Sync,
{
    Map::new(parser.into_parser(), mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt: Parser + Sized {
    fn map<F>(self, mapper: F) -> Map<Self, F>
    where
        F: for<'code> Fn(Node<'code>) -> Node<'code> + Send + Sync,
    {
        Map::new(self, mapper)
    }
}

impl<P: Parser> MapExt for P {}
