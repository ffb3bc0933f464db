//! Element assembly, the entry point of the rewrite.

use crate::ast::Node;
use crate::children::resolve_children;
use crate::classify::factory_call;
use crate::markup::MarkupElement;
use crate::name::resolve_tag_name;
use crate::props::resolve_attributes;

/// Rewrite a factory call into a markup element.
///
/// Returns `None` when `node` is not `React.createElement(type, props?,
/// ...children)` or when any part of it cannot be expressed as markup. The
/// caller then keeps the original node. Never panics.
pub fn rewrite(node: &Node) -> Option<MarkupElement> {
    let call = factory_call(node)?;

    let mut arguments = call.arguments.iter();
    let name_node = arguments.next();
    let props_node = arguments.next();
    let child_nodes = arguments.as_slice();

    let Some(tag_name) = resolve_tag_name(name_node) else {
        tracing::trace!("createElement call kept: unresolvable element type");
        return None;
    };

    let Some(attributes) = resolve_attributes(props_node) else {
        tracing::trace!(?tag_name, "createElement call kept: unresolvable props");
        return None;
    };

    let Some(children) = resolve_children(child_nodes) else {
        tracing::trace!(?tag_name, "createElement call kept: unresolvable children");
        return None;
    };

    tracing::debug!(
        ?tag_name,
        attributes = attributes.len(),
        children = children.len(),
        "rewrote createElement call"
    );

    Some(MarkupElement::new(tag_name, attributes, children))
}
