use crate::cursor::Cursor;
use crate::error::Failure;
use crate::node::Node;
use crate::parser::{IntoParser, Parser};

/// Parser combinator that makes a parser optional
///
/// A failure becomes an [`Node::Empty`] success at the original position,
/// unless a cut was crossed inside the parser, in which case it propagates.
pub struct Maybe<P> {
    parser: P,
}

impl<P> Maybe<P> {
    pub fn new(parser: P) -> Self {
        Maybe { parser }
    }
}

impl<P: Parser> Parser for Maybe<P> {
    fn parse<'code>(&self, cursor: &mut Cursor<'code>) -> Result<Node<'code>, Failure> {
        let start = cursor.position();
        match self.parser.parse(cursor) {
            Ok(node) => Ok(node),
            Err(failure) if cursor.committed_since(start) => Err(failure),
            Err(_) => {
                cursor.rewind(start);
                Ok(Node::Empty)
            }
        }
    }
}

/// Convenience function to create a Maybe parser
pub fn maybe<P: IntoParser>(parser: P) -> Maybe<P::Parser> {
    Maybe::new(parser.into_parser())
}

/// Extension trait to add .maybe() method support for parsers
pub trait MaybeExt: Parser + Sized {
    fn maybe(self) -> Maybe<Self> {
        Maybe::new(self)
    }
}

impl<P: Parser> MaybeExt for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::chars;
    use crate::cut::cut;
    use crate::seq;

    #[test]
    fn test_present() {
        let mut cursor = Cursor::new("hello world");
        let node = maybe("hello").parse(&mut cursor).unwrap();
        assert_eq!(node.token(), Some("hello"));
        assert_eq!(cursor.remaining(), " world");
    }

    #[test]
    fn test_absent() {
        let mut cursor = Cursor::new("hello world");
        let node = chars("0-9").maybe().parse(&mut cursor).unwrap();
        assert!(node.is_empty());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_partial_match_rewinds() {
        let mut cursor = Cursor::new("hello world");
        let node = maybe(seq!["hello", "there"]).parse(&mut cursor).unwrap();
        assert!(node.is_empty());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_committed_failure_propagates() {
        let mut cursor = Cursor::new("hello world");
        let failure = maybe(seq!["hello", cut(), "there"]).parse(&mut cursor).unwrap_err();
        assert_eq!(failure.to_string(), "offset 6: expected there");
    }

    #[test]
    fn test_optional_in_sequence() {
        let parser = seq![maybe("-"), chars("0-9")];

        let mut cursor = Cursor::new("-12");
        let node = parser.parse(&mut cursor).unwrap();
        assert_eq!(node.child(0).token(), Some("-"));
        assert_eq!(node.child(1).token(), Some("12"));

        let mut cursor = Cursor::new("12");
        let node = parser.parse(&mut cursor).unwrap();
        assert!(node.child(0).is_empty());
        assert_eq!(node.child(1).token(), Some("12"));
    }
}
