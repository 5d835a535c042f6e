use crate::cursor::Cursor;
use crate::error::Failure;
use crate::node::Node;
use crate::parser::{BoxedParser, Parser};

/// Parser combinator that runs parsers one after the other
///
/// Succeeds with one child per sub-parser, in order. On the first failure the
/// cursor goes back to where the sequence started, unless a cut was crossed
/// after that point, and the sub-parser's failure is returned unchanged.
///
/// Usually built with the [`seq!`](crate::seq!) macro, which accepts string
/// literals and rules as well as parsers:
///
/// ```
/// use cutparse::{Cursor, Parser, chars, seq};
///
/// let assignment = seq!["let", chars("a-z"), "=", chars("0-9")];
///
/// let mut cursor = Cursor::new("let x = 42");
/// let node = assignment.parse(&mut cursor).unwrap();
/// assert_eq!(node.child(1).token(), Some("x"));
/// assert_eq!(node.child(3).token(), Some("42"));
/// ```
pub struct Seq {
    parsers: Vec<BoxedParser>,
}

impl Seq {
    pub fn new(parsers: Vec<BoxedParser>) -> Self {
        Seq { parsers }
    }
}

impl Parser for Seq {
    fn parse<'code>(&self, cursor: &mut Cursor<'code>) -> Result<Node<'code>, Failure> {
        let start = cursor.position();
        let mut children = Vec::with_capacity(self.parsers.len());

        for parser in &self.parsers {
            match parser.parse(cursor) {
                Ok(node) => children.push(node),
                Err(failure) => {
                    if !cursor.committed_since(start) {
                        cursor.rewind(start);
                    }
                    return Err(failure);
                }
            }
        }

        Ok(Node::Children(children))
    }
}

/// Convenience function to create a Seq parser from boxed parsers
pub fn seq(parsers: Vec<BoxedParser>) -> Seq {
    Seq::new(parsers)
}
