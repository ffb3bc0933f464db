//! Input expression tree.
//!
//! Only the shapes the rewrite inspects are modelled structurally. Everything
//! else is an [`Opaque`] expression carried through by source text.

use crate::markup::MarkupElement;

/// Byte range of a node in its original source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Whether `other` lies entirely within this span.
    pub fn contains(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// A node of the generic expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// `callee(arguments...)`
    Call(Call),
    /// `object.property` or `object[property]`
    Member(Member),
    /// `name`
    Ident(String),
    /// `"value"`
    Str(Str),
    /// `null`
    Null,
    /// `{ key: value, ...spread }`
    Object(Vec<Property>),
    /// `...argument` in argument position. Not an expression.
    Spread(Box<Node>),
    /// An element produced by an earlier rewrite.
    Markup(Box<MarkupElement>),
    /// Any other expression, kept as source text.
    Expression(Opaque),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub callee: Box<Node>,
    pub arguments: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub object: Box<Node>,
    pub property: Box<Node>,
    pub computed: bool,
}

/// A string literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Str {
    /// Cooked value
    pub value: String,

    /// Quoted source form, when the literal came from source text
    pub raw: Option<String>,
}

/// Source text of an expression the core does not decompose.
#[derive(Debug, Clone, PartialEq)]
pub struct Opaque {
    pub span: Span,
    pub source: String,
}

/// A property of an object literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Property {
    KeyValue {
        key: Node,
        value: Node,
        computed: bool,
    },
    Spread(Node),
    /// Methods, getters and setters.
    Other(Opaque),
}

impl Node {
    pub fn ident(name: impl Into<String>) -> Self {
        Node::Ident(name.into())
    }

    pub fn str(value: impl Into<String>) -> Self {
        Node::Str(Str {
            value: value.into(),
            raw: None,
        })
    }

    pub fn call(callee: Node, arguments: Vec<Node>) -> Self {
        Node::Call(Call {
            callee: Box::new(callee),
            arguments,
        })
    }

    pub fn member(object: Node, property: Node) -> Self {
        Node::Member(Member {
            object: Box::new(object),
            property: Box::new(property),
            computed: false,
        })
    }

    pub fn computed_member(object: Node, property: Node) -> Self {
        Node::Member(Member {
            object: Box::new(object),
            property: Box::new(property),
            computed: true,
        })
    }

    pub fn spread(argument: Node) -> Self {
        Node::Spread(Box::new(argument))
    }

    /// An opaque expression with no source position.
    pub fn expression(source: impl Into<String>) -> Self {
        Node::Expression(Opaque {
            span: Span::default(),
            source: source.into(),
        })
    }

    /// `React.createElement(arguments...)`
    pub fn create_element(arguments: Vec<Node>) -> Self {
        Node::call(
            Node::member(Node::ident("React"), Node::ident("createElement")),
            arguments,
        )
    }

    /// Everything except a spread element counts as an expression.
    pub fn is_expression(&self) -> bool {
        !matches!(self, Node::Spread(_))
    }
}

impl Property {
    pub fn key_value(key: Node, value: Node) -> Self {
        Property::KeyValue {
            key,
            value,
            computed: false,
        }
    }
}
