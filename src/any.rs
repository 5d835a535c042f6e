use crate::cursor::Cursor;
use crate::error::Failure;
use crate::node::Node;
use crate::parser::{BoxedParser, Parser};

/// Parser combinator that tries alternatives in order and keeps the first success
///
/// When every alternative fails, the failure from the alternative that got
/// furthest into the input is reported (the earliest one on ties) and the
/// cursor is restored. An alternative that fails after crossing a cut ends the
/// search immediately: its failure is returned and nothing is rewound.
pub struct Any {
    parsers: Vec<BoxedParser>,
}

impl Any {
    pub fn new(parsers: Vec<BoxedParser>) -> Self {
        Any { parsers }
    }
}

impl Parser for Any {
    fn parse<'code>(&self, cursor: &mut Cursor<'code>) -> Result<Node<'code>, Failure> {
        let start = cursor.position();
        let mut furthest: Option<Failure> = None;

        for parser in &self.parsers {
            match parser.parse(cursor) {
                Ok(node) => return Ok(node),
                Err(failure) if cursor.committed_since(start) => return Err(failure),
                Err(failure) => {
                    if furthest.as_ref().is_none_or(|best| failure.is_further_than(best)) {
                        furthest = Some(failure);
                    }
                    cursor.rewind(start);
                }
            }
        }

        Err(furthest.unwrap_or_else(|| cursor.fail("any alternative")))
    }
}

/// Convenience function to create an Any parser from boxed parsers
pub fn any(parsers: Vec<BoxedParser>) -> Any {
    Any::new(parsers)
}
