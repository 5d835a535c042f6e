use crate::any;
use crate::chars::chars;
use crate::error::{GrammarError, ParseError};
use crate::many::many;
use crate::map::MapExt;
use crate::node::{Node, Value};
use crate::number::number_lit;
use crate::rule::Rule;
use crate::run::run;
use crate::seq;

/// Arithmetic on floats: `+ - * /` with the usual precedence, and parentheses
pub struct Calc {
    sum: Rule,
}

impl Calc {
    pub fn new() -> Result<Self, GrammarError> {
        let sum = Rule::new("sum");
        let prod = Rule::new("prod");
        let value = Rule::new("value");

        let number = number_lit().map(to_float);
        let group = seq!["(", &sum, ")"].map(inner);
        value.define(any![number, group])?;

        prod.define(seq![&value, many(seq![chars("*/").max(1), &value])].map(fold))?;
        sum.define(seq![&prod, many(seq![chars("+-").max(1), &prod])].map(fold))?;

        Ok(Calc { sum })
    }

    pub fn eval(&self, input: &str) -> Result<f64, ParseError> {
        let node = run(&self.sum, input)?;
        Ok(node.value().and_then(Value::as_float).unwrap_or_default())
    }
}

fn inner(node: Node<'_>) -> Node<'_> {
    node.into_children().into_iter().nth(1).unwrap_or_default()
}

fn to_float(node: Node<'_>) -> Node<'_> {
    match node.value().and_then(Value::as_float) {
        Some(x) => Value::Float(x).into(),
        None => node,
    }
}

/// Apply `[first, [[op, operand]...]]` left to right
fn fold(node: Node<'_>) -> Node<'_> {
    let operand = |node: &Node<'_>| node.value().and_then(Value::as_float).unwrap_or_default();

    let mut acc = operand(node.child(0));
    for step in node.child(1).children() {
        let rhs = operand(step.child(1));
        match step.child(0).token() {
            Some("+") => acc += rhs,
            Some("-") => acc -= rhs,
            Some("*") => acc *= rhs,
            Some("/") => acc /= rhs,
            _ => {}
        }
    }
    Value::Float(acc).into()
}
