//! Syntactic predicates over input nodes.

use crate::ast::{Call, Member, Node};

const FACTORY_OBJECT: &str = "React";
const FACTORY_METHOD: &str = "createElement";

/// Name of the helper Babel emits for object spread (`_extends({}, a, b)`).
pub const MERGE_HELPER: &str = "_extends";

/// Whether `node` is `React.createElement(...)` with a non-computed callee.
///
/// Renamed imports, local aliases and `React["createElement"]` do not match.
pub fn is_factory_call(node: &Node) -> bool {
    factory_call(node).is_some()
}

/// The call behind `node` if it is a factory call.
pub(crate) fn factory_call(node: &Node) -> Option<&Call> {
    let Node::Call(call) = node else {
        return None;
    };
    match call.callee.as_ref() {
        Node::Member(Member {
            object,
            property,
            computed: false,
        }) if is_ident(object, FACTORY_OBJECT) && is_ident(property, FACTORY_METHOD) => Some(call),
        _ => None,
    }
}

/// `null` or the identifier `undefined`.
pub fn is_null_like(node: &Node) -> bool {
    matches!(node, Node::Null) || is_ident(node, "undefined")
}

/// Whether `node` is a call to the object-spread merge helper.
pub fn is_merge_call(node: &Node) -> bool {
    matches!(node, Node::Call(call) if is_ident(&call.callee, MERGE_HELPER))
}

fn is_ident(node: &Node, name: &str) -> bool {
    matches!(node, Node::Ident(ident) if ident == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_react_create_element() {
        let node = Node::create_element(vec![Node::str("div")]);
        assert!(is_factory_call(&node));
    }

    #[test]
    fn matches_without_arguments() {
        assert!(is_factory_call(&Node::create_element(vec![])));
    }

    #[test]
    fn rejects_computed_callee() {
        let node = Node::call(
            Node::computed_member(Node::ident("React"), Node::str("createElement")),
            vec![Node::str("div")],
        );
        assert!(!is_factory_call(&node));
    }

    #[test]
    fn rejects_other_callees() {
        let aliased = Node::call(Node::ident("h"), vec![Node::str("div")]);
        let renamed = Node::call(
            Node::member(Node::ident("Preact"), Node::ident("createElement")),
            vec![],
        );
        let deeper = Node::call(
            Node::member(
                Node::member(Node::ident("window"), Node::ident("React")),
                Node::ident("createElement"),
            ),
            vec![],
        );

        assert!(!is_factory_call(&aliased));
        assert!(!is_factory_call(&renamed));
        assert!(!is_factory_call(&deeper));
        assert!(!is_factory_call(&Node::ident("React")));
    }

    #[test]
    fn null_like_is_syntactic() {
        assert!(is_null_like(&Node::Null));
        assert!(is_null_like(&Node::ident("undefined")));
        assert!(!is_null_like(&Node::str("undefined")));
        assert!(!is_null_like(&Node::expression("void 0")));
    }

    #[test]
    fn detects_merge_helper() {
        assert!(is_merge_call(&Node::call(Node::ident("_extends"), vec![])));
        assert!(!is_merge_call(&Node::call(
            Node::member(Node::ident("Object"), Node::ident("assign")),
            vec![]
        )));
    }
}
