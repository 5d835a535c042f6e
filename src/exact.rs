use crate::cursor::Cursor;
use crate::error::Failure;
use crate::node::Node;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that matches a literal string
///
/// Leading whitespace is skipped first, except when the literal itself starts
/// with a character the cursor would skip: such a literal is matched right
/// where the cursor stands.
pub struct Exact {
    literal: Cow<'static, str>,
}

impl Exact {
    pub fn new(literal: impl Into<Cow<'static, str>>) -> Self {
        Self {
            literal: literal.into(),
        }
    }
}

impl Parser for Exact {
    fn parse<'code>(&self, cursor: &mut Cursor<'code>) -> Result<Node<'code>, Failure> {
        let start = cursor.position();
        if !self.literal.chars().next().is_some_and(|c| cursor.skips(c)) {
            cursor.skip_whitespace();
        }

        let remaining = cursor.remaining();
        if !remaining.starts_with(self.literal.as_ref()) {
            return Err(cursor.backtrack(start, self.literal.clone()));
        }

        let token = &remaining[..self.literal.len()];
        cursor.advance(self.literal.len());
        Ok(Node::Token(Cow::Borrowed(token)))
    }
}

/// Convenience function to create an Exact parser
pub fn exact(literal: impl Into<Cow<'static, str>>) -> Exact {
    Exact::new(literal)
}
