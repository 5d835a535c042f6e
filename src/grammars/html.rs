use crate::any;
use crate::chars::not_chars;
use crate::cut::cut;
use crate::error::{Failure, GrammarError, ParseError};
use crate::many::many;
use crate::map::MapExt;
use crate::node::{Node, Value};
use crate::regex::regex;
use crate::rule::Rule;
use crate::run::run;
use crate::seq;
use crate::string::string_lit;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct HtmlTag {
    pub name: String,
    pub attributes: BTreeMap<String, String>,
    pub body: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text(String),
    Tag(HtmlTag),
}

/// A toy HTML parser: nested tags with quoted attributes and text
///
/// Cuts after `<name` and `</` turn a malformed tag into an error at the
/// point of damage instead of a silent fallback to text.
pub struct Html {
    tag: Rule,
}

impl Html {
    pub fn new() -> Result<Self, GrammarError> {
        let tag = Rule::new("tag");

        let text = not_chars("<>").map(to_text);
        let element = any![text, &tag];
        let elements = many(element).map(to_list);

        let attribute = seq![regex("[a-zA-Z][a-zA-Z0-9-]*")?, "=", string_lit("\"'")];
        let attributes = many(attribute).map(to_attributes);

        let open = seq!["<", regex("[a-zA-Z][a-zA-Z0-9]*")?, cut(), attributes, ">"];
        let close = seq!["</", cut(), regex("[a-zA-Z][a-zA-Z0-9]*")?, ">"];
        tag.define(seq![open, cut(), elements, close].map(to_tag))?;

        Ok(Html { tag })
    }

    pub fn parse(&self, input: &str) -> Result<HtmlTag, ParseError> {
        let node = run(&self.tag, input)?;
        node.value()
            .and_then(Value::downcast_ref::<HtmlTag>)
            .cloned()
            .ok_or_else(|| Failure::new(0, "tag").into())
    }
}

fn to_text(node: Node<'_>) -> Node<'_> {
    Value::Str(node.flatten().into_owned()).into()
}

fn to_list(node: Node<'_>) -> Node<'_> {
    let items = node.children().iter().filter_map(Node::value).cloned().collect::<Vec<_>>();
    Value::List(items).into()
}

fn to_attributes(node: Node<'_>) -> Node<'_> {
    let attributes = node
        .children()
        .iter()
        .filter_map(|attribute| {
            let name = attribute.child(0).token()?;
            let value = attribute.child(2).value()?.as_str()?;
            Some((name.to_string(), Value::from(value)))
        })
        .collect::<BTreeMap<_, _>>();
    Value::Map(attributes).into()
}

fn to_tag(node: Node<'_>) -> Node<'_> {
    let open = node.child(0);

    let attributes: BTreeMap<String, String> = open
        .child(3)
        .value()
        .and_then(Value::as_map)
        .map(|map| {
            map.iter()
                .filter_map(|(name, value)| Some((name.clone(), value.as_str()?.to_string())))
                .collect()
        })
        .unwrap_or_default();

    let body: Vec<Element> = node
        .child(2)
        .value()
        .and_then(Value::as_list)
        .unwrap_or_default()
        .iter()
        .filter_map(|item| match item {
            Value::Str(text) => Some(Element::Text(text.clone())),
            other => other.downcast_ref::<HtmlTag>().cloned().map(Element::Tag),
        })
        .collect();

    Value::custom(HtmlTag {
        name: open.child(1).token().unwrap_or_default().to_string(),
        attributes,
        body,
    })
    .into()
}
