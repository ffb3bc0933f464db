//! Props resolution: the second factory argument becomes an attribute list.

use crate::ast::{Node, Property};
use crate::classify::{is_merge_call, is_null_like};
use crate::markup::{Attribute, AttributeValue};
use crate::name::resolve_identifier_name;

/// Resolve a props node into attributes.
///
/// Absent and null-like props give an empty list. An object literal resolves
/// only if every property does; otherwise the result is `None` rather than a
/// partial list. `_extends(a, b, ...)` is flattened when every argument
/// resolves, and any other expression is spread whole.
pub fn resolve_attributes(node: Option<&Node>) -> Option<Vec<Attribute>> {
    let Some(node) = node else {
        return Some(Vec::new());
    };

    if is_null_like(node) {
        return Some(Vec::new());
    }

    if let Some(merged) = resolve_merge_call(node) {
        return Some(merged);
    }

    match node {
        Node::Object(properties) => properties.iter().map(resolve_property).collect(),
        other if other.is_expression() => Some(vec![Attribute::Spread(other.clone())]),
        _ => None,
    }
}

/// Flatten the arguments of a merge helper call, in argument order.
fn resolve_merge_call(node: &Node) -> Option<Vec<Attribute>> {
    if !is_merge_call(node) {
        return None;
    }
    let Node::Call(call) = node else {
        return None;
    };

    let sources = call
        .arguments
        .iter()
        .map(|argument| resolve_attributes(Some(argument)))
        .collect::<Option<Vec<_>>>()?;

    Some(sources.into_iter().flatten().collect())
}

fn resolve_property(property: &Property) -> Option<Attribute> {
    match property {
        Property::Spread(argument) => Some(Attribute::Spread(argument.clone())),
        Property::KeyValue {
            key,
            value,
            computed: false,
        } => {
            let name = resolve_identifier_name(key)?;
            let value = resolve_attribute_value(value)?;
            Some(Attribute::Named { name, value })
        }
        Property::KeyValue { computed: true, .. } | Property::Other(_) => None,
    }
}

/// String literals and markup pass through; other expressions are wrapped.
pub fn resolve_attribute_value(node: &Node) -> Option<AttributeValue> {
    match node {
        Node::Str(s) => Some(AttributeValue::Str(s.clone())),
        Node::Markup(element) => Some(AttributeValue::Markup(element.clone())),
        other if other.is_expression() => Some(AttributeValue::Expression(other.clone())),
        _ => None,
    }
}
