//! Tree-walk driver for trees held entirely in [`Node`] form.

use crate::ast::{Call, Member, Node, Property, Span};
use crate::element::rewrite;
use crate::markup::{Attribute, AttributeValue, Child, MarkupElement};

/// Counters collected while walking a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// Markup elements produced, nested ones included
    pub elements: usize,
}

/// Rewrite every factory call in `node`.
///
/// Matched calls are replaced by [`Node::Markup`] and the walk continues into
/// the expressions the new element carries. Unmatched calls are kept and
/// their callee and arguments are walked.
pub fn rewrite_tree(node: Node) -> Node {
    rewrite_tree_with_stats(node).0
}

/// [`rewrite_tree`], also reporting how many elements were produced.
pub fn rewrite_tree_with_stats(node: Node) -> (Node, RewriteStats) {
    let mut walker = Walker::default();
    let node = walker.node(node);
    (node, walker.stats)
}

#[derive(Default)]
struct Walker {
    stats: RewriteStats,
}

impl Walker {
    fn node(&mut self, node: Node) -> Node {
        if let Some(element) = rewrite(&node) {
            self.stats.elements += element_count(&element);
            return Node::Markup(Box::new(self.element(element)));
        }

        match node {
            Node::Call(Call { callee, arguments }) => Node::Call(Call {
                callee: Box::new(self.node(*callee)),
                arguments: arguments.into_iter().map(|arg| self.node(arg)).collect(),
            }),
            Node::Member(Member {
                object,
                property,
                computed,
            }) => Node::Member(Member {
                object: Box::new(self.node(*object)),
                property: Box::new(self.node(*property)),
                computed,
            }),
            Node::Object(properties) => Node::Object(
                properties
                    .into_iter()
                    .map(|property| self.property(property))
                    .collect(),
            ),
            Node::Spread(argument) => Node::Spread(Box::new(self.node(*argument))),
            Node::Markup(element) => Node::Markup(Box::new(self.element(*element))),
            leaf @ (Node::Ident(_) | Node::Str(_) | Node::Null | Node::Expression(_)) => leaf,
        }
    }

    fn property(&mut self, property: Property) -> Property {
        match property {
            Property::KeyValue {
                key,
                value,
                computed,
            } => Property::KeyValue {
                key: self.node(key),
                value: self.node(value),
                computed,
            },
            Property::Spread(argument) => Property::Spread(self.node(argument)),
            other @ Property::Other(_) => other,
        }
    }

    fn element(&mut self, element: MarkupElement) -> MarkupElement {
        let MarkupElement {
            tag_name,
            attributes,
            children,
            self_closing,
        } = element;

        let attributes = attributes
            .into_iter()
            .map(|attribute| match attribute {
                Attribute::Spread(node) => Attribute::Spread(self.node(node)),
                Attribute::Named { name, value } => Attribute::Named {
                    name,
                    value: match value {
                        AttributeValue::Expression(node) => {
                            AttributeValue::Expression(self.node(node))
                        }
                        AttributeValue::Markup(inner) => {
                            AttributeValue::Markup(Box::new(self.element(*inner)))
                        }
                        s @ AttributeValue::Str(_) => s,
                    },
                },
            })
            .collect();

        let children = children
            .into_iter()
            .map(|child| match child {
                Child::Expression(node) => Child::Expression(self.node(node)),
                Child::Element(inner) => Child::Element(self.element(inner)),
                text @ Child::Text(_) => text,
            })
            .collect();

        MarkupElement {
            tag_name,
            attributes,
            children,
            self_closing,
        }
    }
}

/// Source spans of the opaque expressions an element prints.
///
/// Text inside these spans is copied from the source when the element is
/// spliced back; anything else in the original call is re-printed.
pub fn opaque_spans(element: &MarkupElement) -> Vec<Span> {
    let mut spans = Vec::new();
    collect_element_spans(element, &mut spans);
    spans
}

fn collect_element_spans(element: &MarkupElement, spans: &mut Vec<Span>) {
    for attribute in &element.attributes {
        match attribute {
            Attribute::Spread(node) => collect_node_spans(node, spans),
            Attribute::Named { value, .. } => match value {
                AttributeValue::Expression(node) => collect_node_spans(node, spans),
                AttributeValue::Markup(inner) => collect_element_spans(inner, spans),
                AttributeValue::Str(_) => {}
            },
        }
    }
    for child in &element.children {
        match child {
            Child::Expression(node) => collect_node_spans(node, spans),
            Child::Element(inner) => collect_element_spans(inner, spans),
            Child::Text(_) => {}
        }
    }
}

fn collect_node_spans(node: &Node, spans: &mut Vec<Span>) {
    match node {
        Node::Expression(opaque) => spans.push(opaque.span),
        Node::Call(Call { callee, arguments }) => {
            collect_node_spans(callee, spans);
            for argument in arguments {
                collect_node_spans(argument, spans);
            }
        }
        Node::Member(Member {
            object, property, ..
        }) => {
            collect_node_spans(object, spans);
            collect_node_spans(property, spans);
        }
        Node::Object(properties) => {
            for property in properties {
                match property {
                    Property::KeyValue { key, value, .. } => {
                        collect_node_spans(key, spans);
                        collect_node_spans(value, spans);
                    }
                    Property::Spread(argument) => collect_node_spans(argument, spans),
                    Property::Other(opaque) => spans.push(opaque.span),
                }
            }
        }
        Node::Spread(argument) => collect_node_spans(argument, spans),
        Node::Markup(element) => collect_element_spans(element, spans),
        Node::Ident(_) | Node::Str(_) | Node::Null => {}
    }
}

fn element_count(element: &MarkupElement) -> usize {
    1 + element
        .children
        .iter()
        .map(|child| match child {
            Child::Element(inner) => element_count(inner),
            _ => 0,
        })
        .sum::<usize>()
}
