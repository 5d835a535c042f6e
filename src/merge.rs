use crate::cursor::Cursor;
use crate::error::Failure;
use crate::node::Node;
use crate::parser::{IntoParser, Parser};

/// Parser combinator that collapses a match into the text of all its tokens
///
/// The child structure is discarded; what remains is one token made of every
/// token in the subtree, in order. Whitespace skipped between tokens is not
/// part of the result.
pub struct Merge<P> {
    parser: P,
}

impl<P> Merge<P> {
    pub fn new(parser: P) -> Self {
        Merge { parser }
    }
}

impl<P: Parser> Parser for Merge<P> {
    fn parse<'code>(&self, cursor: &mut Cursor<'code>) -> Result<Node<'code>, Failure> {
        let node = self.parser.parse(cursor)?;
        Ok(Node::Token(node.flatten()))
    }
}

/// Convenience function to create a Merge parser
pub fn merge<P: IntoParser>(parser: P) -> Merge<P::Parser> {
    Merge::new(parser.into_parser())
}

/// Extension trait to add .merge() method support for parsers
pub trait MergeExt: Parser + Sized {
    fn merge(self) -> Merge<Self> {
        Merge::new(self)
    }
}

impl<P: Parser> MergeExt for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::chars;
    use crate::many::many;
    use crate::maybe::maybe;
    use crate::rule::Rule;
    use crate::seq;

    #[test]
    fn test_merge_identifier() {
        let identifier = seq![chars("a-zA-Z_").max(1), many(chars("a-zA-Z0-9_"))].merge();

        let mut cursor = Cursor::new("snake_case42(x)");
        let node = identifier.parse(&mut cursor).unwrap();
        assert_eq!(node.token(), Some("snake_case42"));
        assert_eq!(cursor.remaining(), "(x)");
    }

    #[test]
    fn test_merge_balanced_parens() {
        let bracer = Rule::new("bracer");
        bracer.define(seq!["(", maybe(&bracer), ")"]).unwrap();
        let parser = merge(&bracer);

        let mut cursor = Cursor::new("((()))");
        let node = parser.parse(&mut cursor).unwrap();
        assert_eq!(node.token(), Some("((()))"));
        assert!(cursor.eos());
    }

    #[test]
    fn test_merge_unbalanced_parens() {
        let bracer = Rule::new("bracer");
        bracer.define(seq!["(", maybe(&bracer), ")"]).unwrap();
        let parser = merge(&bracer);

        let mut cursor = Cursor::new("((())");
        let failure = parser.parse(&mut cursor).unwrap_err();
        assert_eq!(failure.to_string(), "offset 5: expected )");
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_merge_drops_whitespace_between_tokens() {
        let parser = seq!["a", "b", "c"].merge();
        let mut cursor = Cursor::new("a b  c");
        assert_eq!(parser.parse(&mut cursor).unwrap().token(), Some("abc"));
    }
}
