use crate::cursor::Cursor;
use crate::error::Failure;
use crate::node::Node;
use crate::parser::Parser;
use std::borrow::Cow;

/// Scanner consuming everything up to the first of several terminators
///
/// The terminator itself is not consumed. Without any terminator in the rest
/// of the input, everything up to the end matches. Fails when nothing at all
/// would be consumed.
pub struct Until {
    terminators: Vec<Cow<'static, str>>,
}

impl Until {
    pub fn new<I, S>(terminators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        Until {
            terminators: terminators
                .into_iter()
                .map(Into::into)
                .filter(|t: &Cow<'static, str>| !t.is_empty())
                .collect(),
        }
    }

    fn expected(&self) -> String {
        let terminators: Vec<&str> = self.terminators.iter().map(AsRef::as_ref).collect();
        format!("anything until {}", terminators.join(" or "))
    }
}

impl Parser for Until {
    fn parse<'code>(&self, cursor: &mut Cursor<'code>) -> Result<Node<'code>, Failure> {
        let start = cursor.position();
        cursor.skip_whitespace();

        let remaining = cursor.remaining();
        let end = self
            .terminators
            .iter()
            .filter_map(|terminator| remaining.find(terminator.as_ref()))
            .min()
            .unwrap_or(remaining.len());

        if end == 0 {
            return Err(cursor.backtrack(start, self.expected()));
        }

        cursor.advance(end);
        Ok(Node::Token(Cow::Borrowed(&remaining[..end])))
    }
}

/// Convenience function to create an Until parser
pub fn until(terminators: &[&'static str]) -> Until {
    Until::new(terminators.iter().copied())
}
