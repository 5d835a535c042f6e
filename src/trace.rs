//! Named parsers and opt-in tracing
//!
//! With the `trace` feature enabled, every [`Named`] parser and every
//! [`Rule`](crate::Rule) logs entry and exit at `trace` level and records
//! call counts and time spent into the cursor's [`Profile`]. Without the
//! feature a name is only a name and parsing goes straight through.

use crate::cursor::Cursor;
use crate::error::Failure;
use crate::node::Node;
use crate::parser::{IntoParser, Parser};
use std::borrow::Cow;

#[cfg(feature = "trace")]
use std::collections::HashMap;
#[cfg(feature = "trace")]
use std::fmt::Write;
#[cfg(feature = "trace")]
use std::time::{Duration, Instant};

/// Call statistics for one parser name
#[cfg(feature = "trace")]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Stat {
    pub calls: u64,
    pub failures: u64,
    pub elapsed: Duration,
}

/// Per-parse side-table of [`Stat`]s keyed by parser name
#[cfg(feature = "trace")]
#[derive(Debug, Default)]
pub struct Profile {
    depth: usize,
    stats: HashMap<String, Stat>,
}

#[cfg(feature = "trace")]
impl Profile {
    pub fn get(&self, name: &str) -> Option<&Stat> {
        self.stats.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Stats sorted by time spent, slowest first
    pub fn sorted(&self) -> Vec<(&str, &Stat)> {
        let mut entries: Vec<_> = self.stats.iter().map(|(name, stat)| (name.as_str(), stat)).collect();
        entries.sort_by(|a, b| b.1.elapsed.cmp(&a.1.elapsed).then_with(|| a.0.cmp(b.0)));
        entries
    }

    pub fn report(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{:<30} {:>10} {:>10} {:>12}", "parser", "calls", "failures", "time");
        for (name, stat) in self.sorted() {
            let _ = writeln!(
                out,
                "{:<30} {:>10} {:>10} {:>12?}",
                name, stat.calls, stat.failures, stat.elapsed
            );
        }
        out
    }

    fn record(&mut self, name: &str, elapsed: Duration, failed: bool) {
        let stat = self.stats.entry(name.to_string()).or_default();
        stat.calls += 1;
        stat.elapsed += elapsed;
        if failed {
            stat.failures += 1;
        }
    }
}

/// Run `f` as the parser called `name`
#[cfg(feature = "trace")]
pub(crate) fn traced<'code>(
    name: &str,
    cursor: &mut Cursor<'code>,
    f: impl FnOnce(&mut Cursor<'code>) -> Result<Node<'code>, Failure>,
) -> Result<Node<'code>, Failure> {
    let depth = cursor.profile.depth;
    log::trace!("{:indent$}{} > {:?}", "", name, cursor.preview(15), indent = depth * 2);

    cursor.profile.depth += 1;
    let started = Instant::now();
    let result = f(cursor);
    let elapsed = started.elapsed();
    cursor.profile.depth = depth;
    cursor.profile.record(name, elapsed, result.is_err());

    match &result {
        Ok(_) => log::trace!("{:indent$}{} ok, next {:?}", "", name, cursor.preview(15), indent = depth * 2),
        Err(failure) => log::trace!("{:indent$}{} failed: {}", "", name, failure, indent = depth * 2),
    }
    result
}

#[cfg(not(feature = "trace"))]
#[inline(always)]
pub(crate) fn traced<'code>(
    _name: &str,
    cursor: &mut Cursor<'code>,
    f: impl FnOnce(&mut Cursor<'code>) -> Result<Node<'code>, Failure>,
) -> Result<Node<'code>, Failure> {
    f(cursor)
}

/// A parser with a name attached, for tracing and profiling
pub struct Named<P> {
    name: Cow<'static, str>,
    parser: P,
}

impl<P> Named<P> {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<P: Parser> Parser for Named<P> {
    fn parse<'code>(&self, cursor: &mut Cursor<'code>) -> Result<Node<'code>, Failure> {
        traced(&self.name, cursor, |cursor| self.parser.parse(cursor))
    }
}

pub fn named<P: IntoParser>(name: impl Into<Cow<'static, str>>, parser: P) -> Named<P::Parser> {
    Named {
        name: name.into(),
        parser: parser.into_parser(),
    }
}

pub trait NamedExt: Parser + Sized {
    fn named(self, name: impl Into<Cow<'static, str>>) -> Named<Self> {
        Named {
            name: name.into(),
            parser: self,
        }
    }
}

impl<P: Parser> NamedExt for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::chars;

    #[test]
    fn test_named_is_transparent() {
        let parser = chars("a-z").named("word");
        assert_eq!(parser.name(), "word");

        let mut cursor = Cursor::new("abc1");
        assert_eq!(parser.parse(&mut cursor).unwrap().token(), Some("abc"));

        let mut cursor = Cursor::new("1");
        let failure = parser.parse(&mut cursor).unwrap_err();
        assert_eq!(failure.to_string(), "offset 0: expected a-z");
    }

    #[cfg(feature = "trace")]
    #[test]
    fn test_profile_counts_calls() {
        let parser = named("digits", chars("0-9"));
        let mut cursor = Cursor::new("12 34 x");
        parser.parse(&mut cursor).unwrap();
        parser.parse(&mut cursor).unwrap();
        assert!(parser.parse(&mut cursor).is_err());

        let stat = cursor.profile.get("digits").unwrap();
        assert_eq!(stat.calls, 3);
        assert_eq!(stat.failures, 1);
        assert_eq!(cursor.profile.depth, 0);
        assert!(cursor.profile.report().contains("digits"));
    }
}
