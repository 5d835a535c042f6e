//! # cutparse - Parser Combinator Engine
//!
//! Build recursive-descent parsers for arbitrary grammars by combining
//! primitive scanners (literals, character classes, regular expressions,
//! string and number literals) with combinators (sequence, alternation,
//! repetition, optional, mapping, merging).
//!
//! - **Backtracking with commitment**: alternatives are tried in order and
//!   the cursor is restored on failure, until a [`cut`] says otherwise
//! - **Useful errors**: when all alternatives fail, the one that got furthest
//!   is reported, as `offset <pos>: expected <what>`
//! - **Implicit whitespace**: every scanner skips insignificant whitespace
//!   first, according to a configurable policy
//! - **Shareable grammars**: parsers are immutable values, so one grammar can
//!   serve any number of parses, on any number of threads
//!
//! ```
//! use cutparse::{Rule, any, chars, cut, parse, seq, some_sep};
//!
//! let list = Rule::new("list");
//! let item = any![chars("a-z"), &list];
//! list.define(seq!["[", cut(), some_sep(item, ","), "]"]).unwrap();
//!
//! let parsed = parse(&list, "[a, [b, c], d]");
//! assert!(parsed.is_ok());
//!
//! let parsed = parse(&list, "[a, [b c]]");
//! assert_eq!(parsed.error.unwrap().to_string(), "offset 7: expected ]");
//! ```

pub mod any;
pub mod bind;
pub mod chars;
pub mod cursor;
pub mod cut;
pub mod error;
pub mod exact;
pub mod grammars;
pub mod label;
pub mod many;
pub mod map;
pub mod maybe;
pub mod merge;
pub mod node;
pub mod number;
pub mod parser;
pub mod regex;
pub mod rule;
pub mod run;
pub mod seq;
pub mod string;
pub mod trace;
pub mod until;
pub mod whitespace;

pub use any::{Any, any};
pub use bind::{Bind, BindExt, bind};
pub use chars::{CharSet, Chars, chars, not_chars};
pub use cursor::Cursor;
pub use cut::{Cut, cut};
pub use error::{CodeLoc, Failure, GrammarError, ParseError, ReadablePosition};
pub use exact::{Exact, exact};
pub use label::{Label, LabelExt, label};
pub use many::{Many, many, many_sep, some, some_sep};
pub use map::{Map, MapExt, map};
pub use maybe::{Maybe, MaybeExt, maybe};
pub use merge::{Merge, MergeExt, merge};
pub use node::{Node, Value};
pub use number::{NumberLit, number_lit};
pub use parser::{BoxedParser, IntoParser, Parser, boxed};
pub use regex::{Regex, regex};
pub use rule::Rule;
pub use run::{Config, Parsed, parse, parse_with, run};
pub use seq::{Seq, seq};
pub use string::{StringLit, string_lit};
#[cfg(feature = "trace")]
pub use run::parse_profiled;
#[cfg(feature = "trace")]
pub use trace::{Profile, Stat};
pub use trace::{Named, NamedExt, named};
pub use until::{Until, until};
pub use whitespace::{
    NoAutoWs, SkipWhitespace, Whitespace, ascii_whitespace, no_auto_ws, unicode_whitespace, whitespace,
};

/// Build a [`Seq`] from any mix of parsers, string literals and rule references
///
/// ```
/// use cutparse::{chars, run, seq};
///
/// let pair = seq![chars("a-z"), ":", chars("0-9")];
/// let node = run(&pair, "x: 1").unwrap();
/// assert_eq!(node.child(2).token(), Some("1"));
/// ```
#[macro_export]
macro_rules! seq {
    ($($parser:expr),* $(,)?) => {
        $crate::Seq::new(vec![$($crate::boxed($parser)),*])
    };
}

/// Build an [`Any`] from any mix of parsers, string literals and rule references
#[macro_export]
macro_rules! any {
    ($($parser:expr),* $(,)?) => {
        $crate::Any::new(vec![$($crate::boxed($parser)),*])
    };
}
