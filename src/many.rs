use crate::cursor::Cursor;
use crate::error::Failure;
use crate::node::Node;
use crate::parser::{BoxedParser, IntoParser, Parser, boxed};

/// Parser combinator that applies a parser repeatedly, optionally with a separator
///
/// Every repetition becomes a child; separators are matched and dropped. The
/// loop ends at the first repetition that fails. That failure is expected and
/// swallowed, unless fewer than `min` repetitions matched (the cursor goes back
/// to the start and the failure is returned) or a cut was crossed inside the
/// failing repetition (the failure is returned and nothing is rewound).
///
/// A separator followed by a failing repetition stays consumed.
pub struct Many<P> {
    parser: P,
    separator: Option<BoxedParser>,
    min: usize,
}

impl<P> Many<P> {
    pub fn new(parser: P, min: usize) -> Self {
        Many {
            parser,
            separator: None,
            min,
        }
    }

    /// Require `separator` between repetitions
    pub fn sep(mut self, separator: impl IntoParser) -> Self {
        self.separator = Some(boxed(separator));
        self
    }
}

impl<P: Parser> Parser for Many<P> {
    fn parse<'code>(&self, cursor: &mut Cursor<'code>) -> Result<Node<'code>, Failure> {
        let start = cursor.position();
        let mut children = Vec::new();

        loop {
            let before = cursor.position();
            match self.parser.parse(cursor) {
                Ok(node) => children.push(node),
                Err(failure) => {
                    if cursor.committed_since(before) {
                        return Err(failure);
                    }
                    if children.len() < self.min {
                        cursor.rewind(start);
                        return Err(failure);
                    }
                    break;
                }
            }

            if let Some(separator) = &self.separator {
                let before_separator = cursor.position();
                if let Err(failure) = separator.parse(cursor) {
                    if cursor.committed_since(before_separator) {
                        return Err(failure);
                    }
                    break;
                }
            }

            // a repetition that consumed nothing would match forever
            if cursor.position() == before {
                break;
            }
        }

        Ok(Node::Children(children))
    }
}

/// Match `parser` zero or more times
pub fn many<P: IntoParser>(parser: P) -> Many<P::Parser> {
    Many::new(parser.into_parser(), 0)
}

/// Match `parser` one or more times
pub fn some<P: IntoParser>(parser: P) -> Many<P::Parser> {
    Many::new(parser.into_parser(), 1)
}

/// Match `parser` zero or more times, separated by `separator`
pub fn many_sep<P: IntoParser>(parser: P, separator: impl IntoParser) -> Many<P::Parser> {
    many(parser).sep(separator)
}

/// Match `parser` one or more times, separated by `separator`
pub fn some_sep<P: IntoParser>(parser: P, separator: impl IntoParser) -> Many<P::Parser> {
    some(parser).sep(separator)
}
