use crate::error::Failure;
use crate::whitespace::Whitespace;
use std::borrow::Cow;

#[cfg(feature = "trace")]
use crate::trace::Profile;

/// Mutable parse state threaded through every parser
///
/// A cursor owns the position into an immutable input, the cut mark past
/// which backtracking is forbidden, and the whitespace policy applied
/// before each scanner while automatic skipping is on. One cursor is created per top-level parse.
///
/// The position is always on a `char` boundary of the input.
#[derive(Debug)]
pub struct Cursor<'code> {
    input: &'code str,
    pos: usize,
    cut: usize,
    whitespace: Whitespace,
    auto_ws: bool,
    #[cfg(feature = "trace")]
    pub(crate) profile: Profile,
}

impl<'code> Cursor<'code> {
    pub fn new(input: &'code str) -> Self {
        Self::with_whitespace(input, Whitespace::default())
    }

    pub fn with_whitespace(input: &'code str, whitespace: Whitespace) -> Self {
        Cursor {
            input,
            pos: 0,
            cut: 0,
            whitespace,
            auto_ws: true,
            #[cfg(feature = "trace")]
            profile: Profile::default(),
        }
    }

    /// The full input, independent of the current position
    pub fn input(&self) -> &'code str {
        self.input
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move the cursor back (or forward) to a position previously observed on it
    pub fn rewind(&mut self, pos: usize) {
        debug_assert!(self.input.is_char_boundary(pos));
        self.pos = pos;
    }

    /// Advance by `n` bytes; `n` must land on a `char` boundary
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.input.len());
        debug_assert!(self.input.is_char_boundary(self.pos));
    }

    /// The input that has not been consumed yet
    pub fn remaining(&self) -> &'code str {
        let input = self.input;
        input.get(self.pos..).unwrap_or("")
    }

    pub fn eos(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The next character, without consuming it
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// The first `n` characters of the remaining input
    pub fn preview(&self, n: usize) -> &'code str {
        let remaining = self.remaining();
        match remaining.char_indices().nth(n) {
            Some((end, _)) => &remaining[..end],
            None => remaining,
        }
    }

    /// Slice of the input between two positions
    pub fn slice(&self, start: usize, end: usize) -> &'code str {
        let input = self.input;
        &input[start..end]
    }

    /// Position of the most recent cut
    pub fn cut_mark(&self) -> usize {
        self.cut
    }

    /// True when a cut was crossed after `start`, forbidding backtracking to it
    pub fn committed_since(&self, start: usize) -> bool {
        self.cut > start
    }

    /// Forbid backtracking to any position before the current one
    pub fn cut(&mut self) {
        self.cut = self.cut.max(self.pos);
    }

    /// The configured whitespace policy, also while automatic skipping is off
    pub fn whitespace(&self) -> Whitespace {
        self.whitespace
    }

    /// False inside [`no_auto_ws`](crate::no_auto_ws)
    pub fn auto_whitespace(&self) -> bool {
        self.auto_ws
    }

    /// True when `c` would be skipped automatically before a scanner
    pub fn skips(&self, c: char) -> bool {
        self.auto_ws && self.whitespace.matches(c)
    }

    /// Skip insignificant whitespace, unless automatic skipping is off
    pub fn skip_whitespace(&mut self) {
        if self.auto_ws {
            let policy = self.whitespace;
            self.skip_with(policy);
        }
    }

    /// Skip whitespace according to `policy`, ignoring the active one
    ///
    /// Returns the skipped text.
    pub fn skip_with(&mut self, policy: Whitespace) -> &'code str {
        let input = self.input;
        let start = self.pos;
        let skipped = self
            .remaining()
            .char_indices()
            .find(|&(_, c)| !policy.matches(c))
            .map_or(input.len() - start, |(i, _)| i);
        self.pos += skipped;
        &input[start..self.pos]
    }

    /// Run `f` with automatic whitespace skipping turned off
    ///
    /// The previous setting comes back when `f` returns or unwinds.
    pub fn without_auto_ws<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = std::mem::replace(&mut self.auto_ws, false);
        let mut guard = AutoWsGuard { cursor: self, saved };
        f(&mut *guard.cursor)
    }

    /// A failure at the current position
    pub fn fail(&self, expected: impl Into<Cow<'static, str>>) -> Failure {
        Failure::new(self.pos, expected)
    }

    /// A failure at the current position, with the cursor moved back to `start`
    pub fn backtrack(&mut self, start: usize, expected: impl Into<Cow<'static, str>>) -> Failure {
        let failure = self.fail(expected);
        self.rewind(start);
        failure
    }
}

struct AutoWsGuard<'a, 'code> {
    cursor: &'a mut Cursor<'code>,
    saved: bool,
}

impl Drop for AutoWsGuard<'_, '_> {
    fn drop(&mut self) {
        self.cursor.auto_ws = self.saved;
    }
}
