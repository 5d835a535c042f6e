use crate::cursor::Cursor;
use crate::error::Failure;
use crate::node::{Node, Value};
use crate::parser::Parser;

/// Scanner for integer and floating point literals
///
/// Matches an optional sign, digits, an optional fraction and an optional
/// exponent, as far as they go. Without a fraction or an exponent the match is
/// a [`Value::Int`], otherwise a [`Value::Float`]. Fails with `expected number`
/// when nothing matches or the matched text is not a number (`-`, `.`, `1e`).
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberLit;

impl Parser for NumberLit {
    fn parse<'code>(&self, cursor: &mut Cursor<'code>) -> Result<Node<'code>, Failure> {
        let start = cursor.position();
        cursor.skip_whitespace();

        let text = cursor.remaining();
        let bytes = text.as_bytes();
        let digits_from = |mut i: usize| {
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            i
        };

        let mut end = 0;
        let mut float = false;
        if matches!(bytes.first(), Some(b'-' | b'+')) {
            end += 1;
        }
        end = digits_from(end);
        if bytes.get(end) == Some(&b'.') {
            float = true;
            end = digits_from(end + 1);
        }
        if matches!(bytes.get(end), Some(b'e' | b'E')) {
            float = true;
            end += 1;
            if matches!(bytes.get(end), Some(b'-' | b'+')) {
                end += 1;
            }
            end = digits_from(end);
        }

        let literal = &text[..end];
        let value = if float {
            literal.parse::<f64>().ok().map(Value::Float)
        } else {
            literal.parse::<i64>().ok().map(Value::Int)
        };

        match value {
            Some(value) if end > 0 => {
                cursor.advance(end);
                Ok(Node::Value(value))
            }
            _ => Err(cursor.backtrack(start, "number")),
        }
    }
}

pub fn number_lit() -> NumberLit {
    NumberLit
}
