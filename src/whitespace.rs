use crate::cursor::Cursor;
use crate::error::Failure;
use crate::node::Node;
use crate::parser::{IntoParser, Parser};
use std::borrow::Cow;
use std::fmt;

/// Policy deciding which characters are insignificant between tokens
#[derive(Clone, Copy, Default)]
pub enum Whitespace {
    /// Nothing is skipped
    None,
    /// Space, tab, line feed, vertical tab, form feed and carriage return
    #[default]
    Ascii,
    /// Everything `char::is_whitespace` accepts
    Unicode,
    Custom(fn(char) -> bool),
}

impl Whitespace {
    pub fn matches(self, c: char) -> bool {
        match self {
            Whitespace::None => false,
            Whitespace::Ascii => matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r'),
            Whitespace::Unicode => c.is_whitespace(),
            Whitespace::Custom(predicate) => predicate(c),
        }
    }
}

impl PartialEq for Whitespace {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Whitespace::None, Whitespace::None)
            | (Whitespace::Ascii, Whitespace::Ascii)
            | (Whitespace::Unicode, Whitespace::Unicode) => true,
            (Whitespace::Custom(a), Whitespace::Custom(b)) => std::ptr::fn_addr_eq(*a, *b),
            _ => false,
        }
    }
}

impl fmt::Debug for Whitespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Whitespace::None => write!(f, "None"),
            Whitespace::Ascii => write!(f, "Ascii"),
            Whitespace::Unicode => write!(f, "Unicode"),
            Whitespace::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Parser that explicitly consumes whitespace of a given kind
///
/// It ignores the automatic skipping policy, so it keeps working inside
/// [`no_auto_ws`]. Never fails; yields the skipped text.
pub struct SkipWhitespace {
    policy: Option<Whitespace>,
}

impl Parser for SkipWhitespace {
    fn parse<'code>(&self, cursor: &mut Cursor<'code>) -> Result<Node<'code>, Failure> {
        let policy = self.policy.unwrap_or_else(|| cursor.whitespace());
        let skipped = cursor.skip_with(policy);
        Ok(Node::Token(Cow::Borrowed(skipped)))
    }
}

/// Consume ASCII whitespace
pub fn ascii_whitespace() -> SkipWhitespace {
    SkipWhitespace {
        policy: Some(Whitespace::Ascii),
    }
}

/// Consume Unicode whitespace
pub fn unicode_whitespace() -> SkipWhitespace {
    SkipWhitespace {
        policy: Some(Whitespace::Unicode),
    }
}

/// Consume whitespace according to the cursor's configured policy, even inside [`no_auto_ws`]
pub fn whitespace() -> SkipWhitespace {
    SkipWhitespace { policy: None }
}

/// Parser combinator that disables automatic whitespace skipping for everything below it
pub struct NoAutoWs<P> {
    parser: P,
}

impl<P: Parser> Parser for NoAutoWs<P> {
    fn parse<'code>(&self, cursor: &mut Cursor<'code>) -> Result<Node<'code>, Failure> {
        cursor.without_auto_ws(|cursor| self.parser.parse(cursor))
    }
}

/// Convenience function to create a NoAutoWs parser
pub fn no_auto_ws<P: IntoParser>(parser: P) -> NoAutoWs<P::Parser> {
    NoAutoWs {
        parser: parser.into_parser(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exact::exact;

    #[test]
    fn test_ascii_policy() {
        for c in [' ', '\t', '\n', '\r', '\x0B', '\x0C'] {
            assert!(Whitespace::Ascii.matches(c), "Failed for U+{:04X}", c as u32);
        }
        assert!(!Whitespace::Ascii.matches('\u{2005}'));
        assert!(!Whitespace::Ascii.matches('a'));
    }

    #[test]
    fn test_unicode_policy() {
        for c in ['\u{00A0}', '\u{2005}', '\u{202F}', '\u{3000}', '\u{0085}', ' '] {
            assert!(Whitespace::Unicode.matches(c), "Failed for U+{:04X}", c as u32);
        }
        assert!(!Whitespace::Unicode.matches('\u{200B}'));
    }

    #[test]
    fn test_none_and_custom_policy() {
        assert!(!Whitespace::None.matches(' '));

        let underscores = Whitespace::Custom(|c| c == '_');
        assert!(underscores.matches('_'));
        assert!(!underscores.matches(' '));
    }

    #[test]
    fn test_no_auto_ws_rejects_leading_space() {
        let mut cursor = Cursor::new(" hello");
        let failure = no_auto_ws("hello").parse(&mut cursor).unwrap_err();
        assert_eq!(failure.to_string(), "offset 0: expected hello");
        assert!(cursor.auto_whitespace());
    }

    #[test]
    fn test_configured_whitespace_inside_no_auto_ws() {
        let mut cursor = Cursor::new(" x");
        let node = no_auto_ws(crate::seq![whitespace(), "x"]).parse(&mut cursor).unwrap();
        assert_eq!(node.child(0).token(), Some(" "));
        assert!(cursor.eos());

        let mut cursor = Cursor::with_whitespace("\u{2005}x", Whitespace::Unicode);
        let node = no_auto_ws(crate::seq![whitespace(), "x"]).parse(&mut cursor).unwrap();
        assert_eq!(node.child(0).token(), Some("\u{2005}"));
    }

    #[test]
    fn test_explicit_whitespace_inside_no_auto_ws() {
        let mut cursor = Cursor::new(" hello");
        let parser = no_auto_ws(crate::seq![ascii_whitespace(), "hello"]);

        let node = parser.parse(&mut cursor).unwrap();
        assert_eq!(node.child(0).token(), Some(" "));
        assert_eq!(node.child(1).token(), Some("hello"));
        assert_eq!(cursor.remaining(), "");
    }

    #[test]
    fn test_unicode_whitespace_parser() {
        let mut cursor = Cursor::new(" \u{202f} hello");
        let parser = no_auto_ws(crate::seq![unicode_whitespace(), "hello"]);

        let node = parser.parse(&mut cursor).unwrap();
        assert_eq!(node.child(1).token(), Some("hello"));
        assert_eq!(cursor.remaining(), "");
    }

    #[test]
    fn test_whitespace_parser_never_fails() {
        let mut cursor = Cursor::new("abc");
        let node = whitespace().parse(&mut cursor).unwrap();
        assert_eq!(node.token(), Some(""));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_policy_restored_after_failure() {
        let mut cursor = Cursor::with_whitespace("x", Whitespace::Unicode);
        assert!(no_auto_ws(exact("y")).parse(&mut cursor).is_err());
        assert_eq!(cursor.whitespace(), Whitespace::Unicode);
        assert!(cursor.auto_whitespace());
    }
}
