use crate::cursor::Cursor;
use crate::error::Failure;
use crate::node::Node;
use crate::parser::Parser;

/// Zero-width parser that forbids backtracking past the current position
///
/// Placed inside a [`Seq`](crate::Seq), it tells the enclosing alternatives,
/// repetitions and optionals that once this point is reached the branch is the
/// right one: a later failure is a real syntax error, reported as is, instead
/// of a reason to try something else.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cut;

impl Parser for Cut {
    fn parse<'code>(&self, cursor: &mut Cursor<'code>) -> Result<Node<'code>, Failure> {
        cursor.cut();
        Ok(Node::Empty)
    }
}

pub fn cut() -> Cut {
    Cut
}
