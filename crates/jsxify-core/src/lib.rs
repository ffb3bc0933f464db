//! Structural rewrite of `React.createElement` calls into JSX markup.
//!
//! The core works over an owned expression tree ([`Node`]) supplied by a
//! parser collaborator and produces [`MarkupElement`] values. Any call that
//! does not unambiguously match the factory shape is left alone: every
//! resolution step returns `None` for "not a match" and the caller keeps the
//! original node.
//!
//! Matching is purely syntactic. `React.createElement` and the `_extends`
//! merge helper are recognized by name only, so a shadowed or aliased binding
//! with the same name is rewritten as if it were the real one.

pub mod ast;
pub mod children;
pub mod classify;
pub mod element;
pub mod markup;
pub mod name;
pub mod print;
pub mod props;
pub mod walk;

pub use ast::{Call, Member, Node, Opaque, Property, Span, Str};
pub use classify::{is_factory_call, is_null_like};
pub use element::rewrite;
pub use markup::{Attribute, AttributeValue, Child, MarkupElement, TagName};
pub use print::{print_element, print_node, OpaqueRenderer, SourceText};
pub use walk::{opaque_spans, rewrite_tree, RewriteStats};
