use crate::cursor::Cursor;
use crate::error::{Failure, GrammarError};
use crate::node::Node;
use crate::parser::{BoxedParser, IntoParser, Parser, boxed};
use once_cell::sync::OnceCell;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

struct RuleInner {
    name: Cow<'static, str>,
    definition: OnceCell<BoxedParser>,
}

/// A named forward reference, used to build recursive grammars
///
/// A rule is declared first, used (by reference or by clone) inside other
/// parsers, and defined exactly once afterwards. All clones share the same
/// definition, which is published once and read without locking from then on.
///
/// ```
/// use cutparse::{Rule, maybe, parse, seq};
///
/// let group = Rule::new("group");
/// group.define(seq!["(", maybe(&group), ")"]).unwrap();
///
/// let parsed = parse(&group, "(())");
/// assert!(parsed.error.is_none());
/// ```
#[derive(Clone)]
pub struct Rule {
    inner: Arc<RuleInner>,
}

impl Rule {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Rule {
            inner: Arc::new(RuleInner {
                name: name.into(),
                definition: OnceCell::new(),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Bind the rule to its definition
    ///
    /// Fails if the rule already has one.
    pub fn define(&self, parser: impl IntoParser) -> Result<(), GrammarError> {
        self.inner
            .definition
            .set(boxed(parser))
            .map_err(|_| GrammarError::RuleRedefined(self.inner.name.clone()))
    }

    pub fn is_defined(&self) -> bool {
        self.inner.definition.get().is_some()
    }
}

impl Parser for Rule {
    fn parse<'code>(&self, cursor: &mut Cursor<'code>) -> Result<Node<'code>, Failure> {
        let Some(definition) = self.inner.definition.get() else {
            let start = cursor.position();
            cursor.skip_whitespace();
            return Err(cursor.backtrack(start, self.inner.name.clone()));
        };

        crate::trace::traced(&self.inner.name, cursor, |cursor| definition.parse(cursor))
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.inner.name)
            .field("defined", &self.is_defined())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::chars;
    use crate::maybe::maybe;
    use crate::merge::MergeExt;
    use crate::seq;

    #[test]
    fn test_undefined_rule_fails() {
        let rule = Rule::new("value");
        let mut cursor = Cursor::new("  abc");

        let failure = rule.parse(&mut cursor).unwrap_err();
        assert_eq!(failure.to_string(), "offset 2: expected value");
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_define_twice_is_an_error() {
        let rule = Rule::new("value");
        rule.define("a").unwrap();

        let error = rule.define("b").unwrap_err();
        assert!(matches!(error, GrammarError::RuleRedefined(ref name) if name == "value"));
        assert_eq!(error.to_string(), "rule `value` is already defined");
    }

    #[test]
    fn test_clones_share_definition() {
        let rule = Rule::new("word");
        let clone = rule.clone();
        assert!(!clone.is_defined());

        rule.define(chars("a-z")).unwrap();
        assert!(clone.is_defined());

        let mut cursor = Cursor::new("hello");
        assert_eq!(clone.parse(&mut cursor).unwrap().token(), Some("hello"));
    }

    #[test]
    fn test_recursive_grammar() {
        let bracer = Rule::new("bracer");
        bracer.define(seq!["(", maybe(&bracer), ")"].merge()).unwrap();

        let mut cursor = Cursor::new("((()))");
        let node = bracer.parse(&mut cursor).unwrap();
        assert_eq!(node.token(), Some("((()))"));
        assert!(cursor.eos());

        let mut cursor = Cursor::new("((())");
        let failure = bracer.parse(&mut cursor).unwrap_err();
        assert_eq!(failure.to_string(), "offset 5: expected )");
    }

    #[test]
    fn test_debug_shows_name() {
        let rule = Rule::new("expr");
        assert_eq!(format!("{:?}", rule), r#"Rule { name: "expr", defined: false }"#);
    }
}
