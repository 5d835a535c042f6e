use crate::cursor::Cursor;
use crate::error::Failure;
use crate::node::{Node, Value};
use crate::parser::Parser;
use std::borrow::Cow;

/// Scanner for quoted string literals
///
/// The literal opens with any of the allowed quote characters and closes with
/// the same one. Inside, `\uXXXX` (exactly four hex digits) decodes to that
/// code point and a backslash before any other character keeps that character
/// as is, so `\"` is a quote and `\\` a backslash. The unescaped text is
/// yielded as a [`Value::Str`].
///
/// Failures point at the offending spot: the missing opening quote, the first
/// digit of a malformed `\u` escape, or the opening quote of a literal that
/// is never closed.
pub struct StringLit {
    quotes: Cow<'static, str>,
}

impl StringLit {
    pub fn new(quotes: impl Into<Cow<'static, str>>) -> Self {
        StringLit {
            quotes: quotes.into(),
        }
    }
}

impl Parser for StringLit {
    fn parse<'code>(&self, cursor: &mut Cursor<'code>) -> Result<Node<'code>, Failure> {
        let start = cursor.position();
        cursor.skip_whitespace();

        let quote = match cursor.peek() {
            Some(c) if self.quotes.contains(c) => c,
            _ => return Err(cursor.backtrack(start, self.quotes.clone())),
        };

        let open = cursor.position();
        let body_start = open + quote.len_utf8();
        let body = cursor.slice(body_start, cursor.input().len());

        let mut unescaped: Option<String> = None;
        let mut chars = body.char_indices();
        while let Some((i, c)) = chars.next() {
            if c == quote {
                let text = unescaped.unwrap_or_else(|| body[..i].to_string());
                cursor.advance(quote.len_utf8() + i + c.len_utf8());
                return Ok(Node::Value(Value::Str(text)));
            }

            if c != '\\' {
                if let Some(buf) = unescaped.as_mut() {
                    buf.push(c);
                }
                continue;
            }

            let buf = unescaped.get_or_insert_with(|| body[..i].to_string());
            match chars.next() {
                None => break,
                Some((_, 'u')) => {
                    let digits_at = body_start + i + 2;
                    let digits: String = chars.by_ref().take(4).map(|(_, c)| c).collect();
                    if digits.chars().count() < 4 {
                        cursor.rewind(start);
                        return Err(Failure::new(digits_at, "[a-f0-9]{4}"));
                    }
                    let Some(code) = decode_hex(&digits) else {
                        cursor.rewind(start);
                        return Err(Failure::new(digits_at, "[a-f0-9]"));
                    };
                    buf.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
                }
                Some((_, escaped)) => buf.push(escaped),
            }
        }

        cursor.rewind(start);
        Err(Failure::new(open, quote.to_string()))
    }
}

fn decode_hex(digits: &str) -> Option<u32> {
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Match a string literal delimited by any of the characters in `quotes`
pub fn string_lit(quotes: impl Into<Cow<'static, str>>) -> StringLit {
    StringLit::new(quotes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan<'code>(input: &'code str) -> (Result<Node<'code>, Failure>, Cursor<'code>) {
        let mut cursor = Cursor::new(input);
        let result = string_lit(r#""'"#).parse(&mut cursor);
        (result, cursor)
    }

    fn text(node: Node<'_>) -> String {
        node.into_value().and_then(|v| v.as_str().map(str::to_string)).unwrap()
    }

    #[test]
    fn test_simple_string() {
        let (node, cursor) = scan(r#""hello""#);
        assert_eq!(text(node.unwrap()), "hello");
        assert!(cursor.eos());
    }

    #[test]
    fn test_single_quotes() {
        let (node, cursor) = scan("'hello' rest");
        assert_eq!(text(node.unwrap()), "hello");
        assert_eq!(cursor.remaining(), " rest");
    }

    #[test]
    fn test_other_quote_inside() {
        let (node, _) = scan(r#"'say "hi"'"#);
        assert_eq!(text(node.unwrap()), r#"say "hi""#);
    }

    #[test]
    fn test_unicode_content() {
        let (node, cursor) = scan(r#""ä🦀ö" x"#);
        assert_eq!(text(node.unwrap()), "ä🦀ö");
        assert_eq!(cursor.remaining(), " x");
    }

    #[test]
    fn test_escaped_quotes() {
        let (node, cursor) = scan(r#""hello \"world\"""#);
        assert_eq!(text(node.unwrap()), r#"hello "world""#);
        assert!(cursor.eos());
    }

    #[test]
    fn test_escape_passes_next_char_through() {
        let (node, _) = scan(r#""a\\b\nc""#);
        assert_eq!(text(node.unwrap()), r"a\bnc");
    }

    #[test]
    fn test_unicode_escape() {
        let (node, cursor) = scan(r#""hello \ubeef cake""#);
        assert_eq!(text(node.unwrap()), "hello \u{beef} cake");
        assert!(cursor.eos());
    }

    #[test]
    fn test_surrogate_escape_is_replaced() {
        let (node, _) = scan(r#""\ud800""#);
        assert_eq!(text(node.unwrap()), "\u{FFFD}");
    }

    #[test]
    fn test_invalid_hex_escape() {
        let (node, cursor) = scan(r#""hello \ucake""#);
        assert_eq!(node.unwrap_err().to_string(), "offset 9: expected [a-f0-9]");
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_short_unicode_escape() {
        let (node, cursor) = scan(r#""\uab"#);
        assert_eq!(node.unwrap_err().to_string(), "offset 3: expected [a-f0-9]{4}");
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_unterminated() {
        let (node, cursor) = scan(r#""hello"#);
        assert_eq!(node.unwrap_err().to_string(), "offset 0: expected \"");
        assert_eq!(cursor.position(), 0);

        let (node, _) = scan(r#"  'hello\"#);
        assert_eq!(node.unwrap_err().pos(), 2);
    }

    #[test]
    fn test_missing_open_quote() {
        let (node, cursor) = scan("  hello");
        assert_eq!(node.unwrap_err().to_string(), "offset 2: expected \"'");
        assert_eq!(cursor.position(), 0);

        let (node, _) = scan("");
        assert_eq!(node.unwrap_err().pos(), 0);
    }
}
