use crate::any;
use crate::bind::bind;
use crate::cut::cut;
use crate::error::{GrammarError, ParseError};
use crate::many::many_sep;
use crate::map::MapExt;
use crate::node::{Node, Value};
use crate::number::number_lit;
use crate::rule::Rule;
use crate::run::run;
use crate::seq;
use crate::string::string_lit;
use std::collections::BTreeMap;

/// JSON documents decoded into [`Value`]s
///
/// Integers without fraction or exponent become [`Value::Int`], other numbers
/// [`Value::Float`], objects [`Value::Map`] and arrays [`Value::List`].
/// A trailing comma in an array or object is accepted.
pub struct Json {
    value: Rule,
}

impl Json {
    pub fn new() -> Result<Self, GrammarError> {
        let value = Rule::new("value");

        let array = seq!["[", cut(), many_sep(&value, ","), "]"].map(to_list);
        let property = seq![string_lit("\""), cut(), ":", &value];
        let object = seq!["{", cut(), many_sep(property, ","), "}"].map(to_map);

        value.define(any![
            bind("null", Value::Null),
            bind("true", true),
            bind("false", false),
            string_lit("\""),
            number_lit(),
            array,
            object,
        ])?;

        Ok(Json { value })
    }

    pub fn unmarshal(&self, input: &str) -> Result<Value, ParseError> {
        let node = run(&self.value, input)?;
        Ok(node.into_value().unwrap_or_default())
    }
}

/// `["[", cut, items, "]"]`
fn to_list(node: Node<'_>) -> Node<'_> {
    let items = node
        .child(2)
        .children()
        .iter()
        .map(|item| item.value().cloned().unwrap_or_default())
        .collect::<Vec<_>>();
    Value::List(items).into()
}

fn to_map(node: Node<'_>) -> Node<'_> {
    let mut map = BTreeMap::new();
    for property in node.child(2).children() {
        if let Some(key) = property.child(0).value().and_then(Value::as_str) {
            map.insert(key.to_string(), property.child(3).value().cloned().unwrap_or_default());
        }
    }
    Value::Map(map).into()
}
