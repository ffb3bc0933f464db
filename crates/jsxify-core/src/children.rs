//! Children resolution: trailing factory arguments become markup children.

use crate::ast::Node;
use crate::classify::{is_factory_call, is_null_like};
use crate::element::rewrite;
use crate::markup::Child;

/// Resolve the remaining factory arguments into children, preserving order.
///
/// Null-like arguments contribute nothing. If any other argument cannot be
/// turned into a child the whole list fails.
pub fn resolve_children(nodes: &[Node]) -> Option<Vec<Child>> {
    nodes
        .iter()
        .filter(|node| !is_null_like(node))
        .map(resolve_child)
        .collect()
}

fn resolve_child(node: &Node) -> Option<Child> {
    match node {
        Node::Str(s) => Some(Child::Text(s.value.clone())),
        call if is_factory_call(call) => rewrite(call).map(Child::Element),
        other if other.is_expression() => Some(Child::Expression(other.clone())),
        _ => None,
    }
}
