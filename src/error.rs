use std::borrow::Cow;
use thiserror::Error;

/// A parser did not find what it expected at some offset
///
/// Failures are ordered by position: the failure with the larger offset
/// came from the branch that got furthest into the input, which is the one
/// worth reporting when several alternatives fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("offset {pos}: expected {expected}")]
pub struct Failure {
    pos: usize,
    expected: Cow<'static, str>,
}

impl Failure {
    pub fn new(pos: usize, expected: impl Into<Cow<'static, str>>) -> Self {
        Failure {
            pos,
            expected: expected.into(),
        }
    }

    /// Byte offset into the input where the failure occurred
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Human readable description of what was expected
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// True when this failure got strictly further than `other`
    pub fn is_further_than(&self, other: &Failure) -> bool {
        self.pos > other.pos
    }
}

/// Error returned by the top-level driver
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The grammar itself failed to match
    #[error(transparent)]
    Syntax(#[from] Failure),
    /// The grammar matched but left input behind
    #[error("left unparsed: {remaining}")]
    Unparsed { pos: usize, remaining: String },
}

impl ParseError {
    /// Byte offset the error refers to
    pub fn pos(&self) -> usize {
        match self {
            ParseError::Syntax(failure) => failure.pos(),
            ParseError::Unparsed { pos, .. } => *pos,
        }
    }

    /// Render the error with line information and surrounding source lines
    pub fn report(&self, input: &str) -> String {
        let loc = CodeLoc::new(input, self.pos());
        let pos = loc.readable_position();

        let mut out = format!(
            "error at line {}, byte offset {}: {}\n\n",
            pos.line, pos.byte_offset, self
        );
        for line in loc.context_lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

/// Errors raised while assembling a grammar, before any input is parsed
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("invalid regex `{pattern}`: {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("rule `{0}` is already defined")]
    RuleRedefined(Cow<'static, str>),
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    pub byte_offset: usize,
}

#[derive(Debug, Copy, Clone)]
pub struct CodeLoc<'code> {
    code: &'code str,
    loc: usize,
}

impl<'code> CodeLoc<'code> {
    pub fn new(code: &'code str, loc: usize) -> Self {
        Self {
            code,
            loc: loc.min(code.len()),
        }
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    /// Line number (1-based) and byte offset within that line
    ///
    /// Byte offsets are reported instead of columns: a column depends on
    /// the encoding, tab width and rendering, a byte offset does not.
    pub fn readable_position(&self) -> ReadablePosition {
        let before = &self.code.as_bytes()[..self.loc];
        let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
        let line_start = before
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);

        ReadablePosition {
            line,
            byte_offset: self.loc - line_start,
        }
    }

    /// Up to 2 lines before and after the error line, with a pointer under the error
    pub fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let first = pos.line.saturating_sub(2).max(1);
        let last = pos.line + 2;
        let mut lines = Vec::new();

        for (index, content) in self.code.split('\n').enumerate() {
            let current_line = index + 1;
            if current_line < first {
                continue;
            }
            if current_line > last {
                break;
            }

            let prefix = if current_line == pos.line {
                format!("  > {} | ", current_line)
            } else {
                format!("    {} | ", current_line)
            };
            lines.push(format!("{}{}", prefix, content));

            if current_line == pos.line {
                let pointer_offset = prefix.len() + pos.byte_offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}
