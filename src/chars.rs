use crate::cursor::Cursor;
use crate::error::Failure;
use crate::node::Node;
use crate::parser::Parser;
use std::borrow::Cow;

/// A set of characters written as a compact alphabet, e.g. `a-zA-Z0-9_`
///
/// `x-y` is an inclusive range (reversed bounds are swapped), `\x` is the
/// literal `x`, anything else is a literal member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSet {
    members: Vec<char>,
    ranges: Vec<(char, char)>,
}

impl CharSet {
    pub fn parse(matcher: &str) -> Self {
        let chars: Vec<char> = matcher.chars().collect();
        let mut members = Vec::new();
        let mut ranges = Vec::new();

        let mut i = 0;
        while i < chars.len() {
            if chars[i] == '\\' && i + 1 < chars.len() {
                members.push(chars[i + 1]);
                i += 2;
            } else if i + 2 < chars.len() && chars[i + 1] == '-' {
                let (start, end) = (chars[i], chars[i + 2]);
                ranges.push((start.min(end), start.max(end)));
                i += 3;
            } else {
                members.push(chars[i]);
                i += 1;
            }
        }

        CharSet { members, ranges }
    }

    pub fn contains(&self, c: char) -> bool {
        self.members.contains(&c) || self.ranges.iter().any(|&(lo, hi)| lo <= c && c <= hi)
    }
}

/// Scanner consuming a run of characters that are (or are not) in a [`CharSet`]
pub struct Chars {
    matcher: Cow<'static, str>,
    set: CharSet,
    negated: bool,
    min: usize,
    max: Option<usize>,
}

impl Chars {
    fn new(matcher: impl Into<Cow<'static, str>>, negated: bool) -> Self {
        let matcher = matcher.into();
        let set = CharSet::parse(&matcher);
        Chars {
            matcher,
            set,
            negated,
            min: 1,
            max: None,
        }
    }

    /// Require at least `min` characters (default 1)
    pub fn min(mut self, min: usize) -> Self {
        self.min = min;
        self
    }

    /// Consume at most `max` characters (default unbounded)
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }
}

impl Parser for Chars {
    fn parse<'code>(&self, cursor: &mut Cursor<'code>) -> Result<Node<'code>, Failure> {
        let start = cursor.position();
        cursor.skip_whitespace();

        let remaining = cursor.remaining();
        let mut count = 0;
        let mut end = remaining.len();
        for (i, c) in remaining.char_indices() {
            if self.max.is_some_and(|max| count >= max) || self.set.contains(c) == self.negated {
                end = i;
                break;
            }
            count += 1;
        }

        if count < self.min {
            return Err(cursor.backtrack(start, self.matcher.clone()));
        }

        cursor.advance(end);
        Ok(Node::Token(Cow::Borrowed(&remaining[..end])))
    }
}

/// Match one or more characters from `matcher`
pub fn chars(matcher: impl Into<Cow<'static, str>>) -> Chars {
    Chars::new(matcher, false)
}

/// Match one or more characters not in `matcher`
pub fn not_chars(matcher: impl Into<Cow<'static, str>>) -> Chars {
    Chars::new(matcher, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan<'code>(parser: &Chars, input: &'code str) -> (Result<Node<'code>, Failure>, Cursor<'code>) {
        let mut cursor = Cursor::new(input);
        let result = parser.parse(&mut cursor);
        (result, cursor)
    }

    #[test]
    fn test_charset_ranges_and_members() {
        let set = CharSet::parse("a-f01234A-F");
        assert!(set.contains('c'));
        assert!(set.contains('E'));
        assert!(set.contains('3'));
        assert!(!set.contains('5'));
        assert!(!set.contains('-'));
    }

    #[test]
    fn test_charset_reversed_range() {
        let set = CharSet::parse("d-a");
        assert!(set.contains('a'));
        assert!(set.contains('d'));
        assert!(!set.contains('e'));
    }

    #[test]
    fn test_charset_escapes() {
        let set = CharSet::parse(r"a\-b");
        assert!(set.contains('-'));
        assert!(set.contains('a'));
        assert!(set.contains('b'));
        assert!(!set.contains('c'));

        let set = CharSet::parse(r"\\");
        assert!(set.contains('\\'));
    }

    #[test]
    fn test_full_match() {
        let (node, cursor) = scan(&chars("a-z"), "foobar");
        assert_eq!(node.unwrap().token(), Some("foobar"));
        assert_eq!(cursor.remaining(), "");
    }

    #[test]
    fn test_partial_match() {
        let (node, cursor) = scan(&chars("1-4d-a"), "a1b2c3d4efg");
        assert_eq!(node.unwrap().token(), Some("a1b2c3d4"));
        assert_eq!(cursor.remaining(), "efg");
    }

    #[test]
    fn test_limited_match() {
        let (node, cursor) = scan(&chars("1-4d-a").max(2), "a1b2c3d4efg");
        assert_eq!(node.unwrap().token(), Some("a1"));
        assert_eq!(cursor.remaining(), "b2c3d4efg");
    }

    #[test]
    fn test_escaped_hyphen() {
        let (node, cursor) = scan(&chars(r"a\-b"), r"ab-ab\cde");
        assert_eq!(node.unwrap().token(), Some("ab-ab"));
        assert_eq!(cursor.remaining(), r"\cde");
    }

    #[test]
    fn test_unescaped_hyphen_is_not_member() {
        let (node, cursor) = scan(&chars("0-9"), "19-");
        assert_eq!(node.unwrap().token(), Some("19"));
        assert_eq!(cursor.remaining(), "-");
    }

    #[test]
    fn test_no_match() {
        let (node, cursor) = scan(&chars("0-9"), "ffffff");
        assert_eq!(node.unwrap_err().to_string(), "offset 0: expected 0-9");
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_no_match_with_min() {
        let (node, cursor) = scan(&chars("0-9").min(4), "123fff");
        assert_eq!(node.unwrap_err().expected(), "0-9");
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_min_zero_matches_empty() {
        let (node, cursor) = scan(&chars("0-9").min(0), "fff");
        assert_eq!(node.unwrap().token(), Some(""));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_literal_members() {
        let (node, cursor) = scan(&chars("abcd"), "aaff");
        assert_eq!(node.unwrap().token(), Some("aa"));
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_not_chars() {
        let (node, cursor) = scan(&not_chars("ff"), "aaff");
        assert_eq!(node.unwrap().token(), Some("aa"));
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_not_chars_until_tag() {
        let (node, cursor) = scan(&not_chars("<>"), "hello <p>");
        assert_eq!(node.unwrap().token(), Some("hello "));
        assert_eq!(cursor.remaining(), "<p>");
    }

    #[test]
    fn test_rune_wise_matching() {
        let (node, cursor) = scan(&chars("α-ω"), "αβγabc");
        assert_eq!(node.unwrap().token(), Some("αβγ"));
        assert_eq!(cursor.remaining(), "abc");

        let (node, cursor) = scan(&chars("α-ω").max(2), "αβγ");
        assert_eq!(node.unwrap().token(), Some("αβ"));
        assert_eq!(cursor.remaining(), "γ");
    }

    #[test]
    fn test_splits_on_whitespace() {
        let parser = chars("a-z");
        let mut cursor = Cursor::new("hello world");
        assert_eq!(parser.parse(&mut cursor).unwrap().token(), Some("hello"));
        assert_eq!(parser.parse(&mut cursor).unwrap().token(), Some("world"));
        assert!(cursor.eos());
    }
}
