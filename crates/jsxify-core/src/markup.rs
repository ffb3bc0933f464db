//! Output markup tree.

use crate::ast::{Node, Str};

/// A JSX element built from a factory call.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupElement {
    /// Tag name, shared by the opening and closing side
    pub tag_name: TagName,

    /// Attributes in source order
    pub attributes: Vec<Attribute>,

    /// Children in source order
    pub children: Vec<Child>,

    /// True exactly when there are no children
    pub self_closing: bool,
}

impl MarkupElement {
    /// Build an element, deriving `self_closing` from `children`.
    pub fn new(tag_name: TagName, attributes: Vec<Attribute>, children: Vec<Child>) -> Self {
        let self_closing = children.is_empty();
        Self {
            tag_name,
            attributes,
            children,
            self_closing,
        }
    }
}

/// `div` or `Foo.Bar`.
#[derive(Debug, Clone, PartialEq)]
pub enum TagName {
    Simple(String),
    Path {
        object: Box<TagName>,
        property: Box<TagName>,
    },
}

impl TagName {
    pub fn simple(name: impl Into<String>) -> Self {
        TagName::Simple(name.into())
    }

    pub fn path(object: TagName, property: TagName) -> Self {
        TagName::Path {
            object: Box::new(object),
            property: Box::new(property),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    /// `name="value"` or `name={expression}`
    Named { name: String, value: AttributeValue },
    /// `{...expression}`
    Spread(Node),
}

impl Attribute {
    pub fn named(name: impl Into<String>, value: AttributeValue) -> Self {
        Attribute::Named {
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Str(Str),
    Markup(Box<MarkupElement>),
    Expression(Node),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Text(String),
    Expression(Node),
    Element(MarkupElement),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_closing_follows_children() {
        let empty = MarkupElement::new(TagName::simple("br"), vec![], vec![]);
        assert!(empty.self_closing);

        let filled = MarkupElement::new(
            TagName::simple("p"),
            vec![],
            vec![Child::Text("hi".to_string())],
        );
        assert!(!filled.self_closing);
    }
}
