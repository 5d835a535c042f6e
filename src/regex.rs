use crate::cursor::Cursor;
use crate::error::{Failure, GrammarError};
use crate::node::Node;
use crate::parser::Parser;
use regex_automata::dfa::{Automaton, StartKind, dense};
use regex_automata::nfa::thompson::pikevm::PikeVM;
use regex_automata::{Anchored, Input, MatchKind};
use std::borrow::Cow;

/// Scanner matching a regular expression anchored at the cursor
///
/// The pattern is compiled into a DFA once, when the grammar is built. The
/// longest match wins; an empty match counts as no match.
///
/// A DFA handles Unicode word boundaries (`\b`) only on ASCII text. When it
/// gives up on a non-ASCII haystack the search reruns on a PikeVM, which
/// supports every pattern the DFA does.
pub struct Regex {
    pattern: Cow<'static, str>,
    dfa: dense::DFA<Vec<u32>>,
    vm: PikeVM,
}

impl Regex {
    pub fn new(pattern: impl Into<Cow<'static, str>>) -> Result<Self, GrammarError> {
        let pattern = pattern.into();
        let invalid = |source: Box<dyn std::error::Error + Send + Sync>| GrammarError::InvalidRegex {
            pattern: pattern.to_string(),
            source,
        };

        let dfa = dense::Builder::new()
            .configure(
                dense::DFA::config()
                    .match_kind(MatchKind::All)
                    .start_kind(StartKind::Anchored)
                    .unicode_word_boundary(true),
            )
            .build(&pattern)
            .map_err(|source| invalid(Box::new(source)))?;
        let vm = PikeVM::builder()
            .configure(PikeVM::config().match_kind(MatchKind::All))
            .build(&pattern)
            .map_err(|source| invalid(Box::new(source)))?;

        Ok(Regex { pattern, dfa, vm })
    }

    /// Length in bytes of the longest match at the start of `haystack`
    fn longest_match(&self, haystack: &str) -> Option<usize> {
        let input = Input::new(haystack).anchored(Anchored::Yes);
        match self.dfa.try_search_fwd(&input) {
            Ok(Some(half)) => Some(half.offset()),
            Ok(None) => None,
            Err(_) => {
                let mut cache = self.vm.create_cache();
                self.vm.find(&mut cache, input.clone()).map(|m| m.end())
            }
        }
    }
}

impl Parser for Regex {
    fn parse<'code>(&self, cursor: &mut Cursor<'code>) -> Result<Node<'code>, Failure> {
        let start = cursor.position();
        cursor.skip_whitespace();

        let remaining = cursor.remaining();
        match self.longest_match(remaining) {
            Some(len) if len > 0 => {
                cursor.advance(len);
                Ok(Node::Token(Cow::Borrowed(&remaining[..len])))
            }
            _ => Err(cursor.backtrack(start, self.pattern.clone())),
        }
    }
}

/// Convenience function to create a Regex parser
pub fn regex(pattern: impl Into<Cow<'static, str>>) -> Result<Regex, GrammarError> {
    Regex::new(pattern)
}
