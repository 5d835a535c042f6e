use std::any::Any;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// The successful outcome of applying a parser
///
/// Scanners produce tokens, sequencing and repetition produce children, and
/// mapping steps replace either with a semantic value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node<'code> {
    /// Zero-width success, e.g. a `Maybe` that did not match or a `Cut`
    #[default]
    Empty,
    /// Text matched by a scanner
    Token(Cow<'code, str>),
    /// Results of the sub-parsers of a composite parser, in order
    Children(Vec<Node<'code>>),
    /// A semantic value attached by a mapping step
    Value(Value),
}

impl<'code> Node<'code> {
    pub fn token(&self) -> Option<&str> {
        match self {
            Node::Token(token) => Some(token),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Node<'code>] {
        match self {
            Node::Children(children) => children,
            _ => &[],
        }
    }

    pub fn into_children(self) -> Vec<Node<'code>> {
        match self {
            Node::Children(children) => children,
            _ => Vec::new(),
        }
    }

    /// The `index`-th child, or `Node::Empty` if there is none
    pub fn child(&self, index: usize) -> &Node<'code> {
        const EMPTY: &Node<'static> = &Node::Empty;
        self.children().get(index).unwrap_or(EMPTY)
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Node::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Node::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }

    /// Concatenate the text of every token in this subtree, depth first
    pub fn flatten(&self) -> Cow<'code, str> {
        match self {
            Node::Token(token) => token.clone(),
            Node::Children(children) => {
                let mut tokens = children.iter().map(Node::flatten).filter(|t| !t.is_empty());
                let Some(first) = tokens.next() else {
                    return Cow::Borrowed("");
                };
                match tokens.next() {
                    None => first,
                    Some(second) => {
                        let mut merged = first.into_owned();
                        merged.push_str(&second);
                        tokens.for_each(|t| merged.push_str(&t));
                        Cow::Owned(merged)
                    }
                }
            }
            Node::Empty | Node::Value(_) => Cow::Borrowed(""),
        }
    }

    /// Detach the node from the input it was parsed from
    pub fn into_owned(self) -> Node<'static> {
        match self {
            Node::Empty => Node::Empty,
            Node::Token(token) => Node::Token(Cow::Owned(token.into_owned())),
            Node::Children(children) => {
                Node::Children(children.into_iter().map(Node::into_owned).collect())
            }
            Node::Value(value) => Node::Value(value),
        }
    }
}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Empty => Ok(()),
            Node::Token(token) => write!(f, "{}", token),
            Node::Children(children) => {
                write!(f, "[")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, "]")
            }
            Node::Value(value) => write!(f, "{}", value),
        }
    }
}

/// A semantic value derived from a match
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    /// Any other payload, e.g. a grammar's own AST type
    Custom(Arc<dyn Any + Send + Sync>),
}

impl Value {
    pub fn custom<T: Any + Send + Sync>(value: T) -> Self {
        Value::Custom(Arc::new(value))
    }

    /// Borrow a `Custom` payload as `T`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Value::Custom(any) => any.downcast_ref::<T>(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Floats as-is, integers widened
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Custom(a), Value::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Value::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::List(items) => f.debug_tuple("List").field(items).finish(),
            Value::Map(map) => f.debug_tuple("Map").field(map).finish(),
            Value::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => write!(f, "{}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}:{}", key, value)?;
                }
                write!(f, "}}")
            }
            Value::Custom(_) => write!(f, "<custom>"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Map(map)
    }
}

impl From<Value> for Node<'_> {
    fn from(value: Value) -> Self {
        Node::Value(value)
    }
}
