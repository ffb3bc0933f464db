//! Tag and attribute name resolution.

use crate::ast::{Member, Node};
use crate::markup::TagName;

/// Resolve the first factory argument into a tag name.
///
/// `None` input, computed member access and any other node kind yield `None`.
pub fn resolve_tag_name(node: Option<&Node>) -> Option<TagName> {
    let node = node?;

    if let Some(name) = resolve_identifier_name(node) {
        return Some(TagName::Simple(name));
    }

    match node {
        Node::Member(Member {
            object,
            property,
            computed: false,
        }) => {
            let object = resolve_tag_name(Some(object.as_ref()))?;
            let property = resolve_tag_name(Some(property.as_ref()))?;
            Some(TagName::path(object, property))
        }
        _ => None,
    }
}

/// An identifier or a string literal taken as a bare name.
///
/// String values are not checked for identifier validity.
pub fn resolve_identifier_name(node: &Node) -> Option<String> {
    match node {
        Node::Ident(name) => Some(name.clone()),
        Node::Str(s) => Some(s.value.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn identifier_and_string_names() {
        assert_eq!(
            resolve_tag_name(Some(&Node::ident("Button"))),
            Some(TagName::simple("Button"))
        );
        assert_eq!(
            resolve_tag_name(Some(&Node::str("div"))),
            Some(TagName::simple("div"))
        );
    }

    #[test]
    fn missing_name_fails() {
        assert_eq!(resolve_tag_name(None), None);
    }

    #[test]
    fn member_chain_becomes_path() {
        let node = Node::member(
            Node::member(Node::ident("UI"), Node::ident("Menu")),
            Node::ident("Item"),
        );

        assert_eq!(
            resolve_tag_name(Some(&node)),
            Some(TagName::path(
                TagName::path(TagName::simple("UI"), TagName::simple("Menu")),
                TagName::simple("Item"),
            ))
        );
    }

    #[test]
    fn computed_member_fails() {
        let node = Node::computed_member(Node::ident("icons"), Node::str("star"));
        assert_eq!(resolve_tag_name(Some(&node)), None);
    }

    #[test]
    fn unresolvable_link_fails_whole_chain() {
        let node = Node::member(Node::expression("getLib()"), Node::ident("Item"));
        assert_eq!(resolve_tag_name(Some(&node)), None);
    }

    #[test]
    fn other_nodes_fail() {
        assert_eq!(resolve_tag_name(Some(&Node::Null)), None);
        assert_eq!(resolve_tag_name(Some(&Node::expression("42"))), None);
        assert_eq!(
            resolve_tag_name(Some(&Node::call(Node::ident("tag"), vec![]))),
            None
        );
    }
}
