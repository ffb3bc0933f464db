//! JSX printer.
//!
//! Markup is printed as JSX; structural expression nodes are printed in a
//! canonical form. Opaque expressions are handed to an [`OpaqueRenderer`] so a
//! caller holding the original source can splice in its own text.

use crate::ast::{Call, Member, Node, Opaque, Property, Str};
use crate::markup::{Attribute, AttributeValue, Child, MarkupElement, TagName};

/// Renders expressions the core only knows as source text.
pub trait OpaqueRenderer {
    fn render(&self, opaque: &Opaque, out: &mut String);
}

/// Prints opaque expressions exactly as they were captured.
#[derive(Debug, Default, Clone, Copy)]
pub struct SourceText;

impl OpaqueRenderer for SourceText {
    fn render(&self, opaque: &Opaque, out: &mut String) {
        out.push_str(&opaque.source);
    }
}

/// Print a markup element as JSX.
pub fn print_element<R: OpaqueRenderer + ?Sized>(element: &MarkupElement, renderer: &R) -> String {
    let mut printer = Printer::new(renderer);
    printer.element(element);
    printer.out
}

/// Print any node in expression position.
pub fn print_node<R: OpaqueRenderer + ?Sized>(node: &Node, renderer: &R) -> String {
    let mut printer = Printer::new(renderer);
    printer.node(node);
    printer.out
}

struct Printer<'r, R: ?Sized> {
    out: String,
    renderer: &'r R,
}

impl<'r, R: OpaqueRenderer + ?Sized> Printer<'r, R> {
    fn new(renderer: &'r R) -> Self {
        Self {
            out: String::new(),
            renderer,
        }
    }

    fn element(&mut self, element: &MarkupElement) {
        self.out.push('<');
        self.tag_name(&element.tag_name);

        for attribute in &element.attributes {
            self.out.push(' ');
            self.attribute(attribute);
        }

        if element.self_closing {
            self.out.push_str(" />");
            return;
        }

        self.out.push('>');
        for child in &element.children {
            self.child(child);
        }
        self.out.push_str("</");
        self.tag_name(&element.tag_name);
        self.out.push('>');
    }

    fn tag_name(&mut self, name: &TagName) {
        match name {
            TagName::Simple(name) => self.out.push_str(name),
            TagName::Path { object, property } => {
                self.tag_name(object);
                self.out.push('.');
                self.tag_name(property);
            }
        }
    }

    fn attribute(&mut self, attribute: &Attribute) {
        match attribute {
            Attribute::Spread(node) => {
                self.out.push_str("{...");
                self.node(node);
                self.out.push('}');
            }
            Attribute::Named { name, value } => {
                self.out.push_str(name);
                self.out.push('=');
                match value {
                    AttributeValue::Str(s) => self.attribute_string(&s.value),
                    AttributeValue::Markup(element) => self.element(element),
                    AttributeValue::Expression(node) => self.container(node),
                }
            }
        }
    }

    // JSX attribute strings decode entities and have no escapes.
    fn attribute_string(&mut self, value: &str) {
        if value.contains(['&', '\n', '\r']) {
            self.quoted_container(value);
        } else if !value.contains('"') {
            self.out.push('"');
            self.out.push_str(value);
            self.out.push('"');
        } else if !value.contains('\'') {
            self.out.push('\'');
            self.out.push_str(value);
            self.out.push('\'');
        } else {
            self.quoted_container(value);
        }
    }

    fn child(&mut self, child: &Child) {
        match child {
            Child::Text(text) if is_plain_text(text) => self.out.push_str(text),
            Child::Text(text) => self.quoted_container(text),
            Child::Expression(node) => self.container(node),
            Child::Element(element) => self.element(element),
        }
    }

    fn container(&mut self, node: &Node) {
        self.out.push('{');
        self.node(node);
        self.out.push('}');
    }

    fn quoted_container(&mut self, value: &str) {
        self.out.push('{');
        self.out.push_str(&quote(value));
        self.out.push('}');
    }

    fn node(&mut self, node: &Node) {
        match node {
            Node::Call(Call { callee, arguments }) => {
                self.node(callee);
                self.out.push('(');
                self.list(arguments, |printer, argument| printer.node(argument));
                self.out.push(')');
            }
            Node::Member(Member {
                object,
                property,
                computed,
            }) => {
                self.node(object);
                if *computed {
                    self.out.push('[');
                    self.node(property);
                    self.out.push(']');
                } else {
                    self.out.push('.');
                    self.node(property);
                }
            }
            Node::Ident(name) => self.out.push_str(name),
            Node::Str(s) => self.string_literal(s),
            Node::Null => self.out.push_str("null"),
            Node::Object(properties) if properties.is_empty() => self.out.push_str("{}"),
            Node::Object(properties) => {
                self.out.push_str("{ ");
                self.list(properties, |printer, property| printer.property(property));
                self.out.push_str(" }");
            }
            Node::Spread(argument) => {
                self.out.push_str("...");
                self.node(argument);
            }
            Node::Markup(element) => self.element(element),
            Node::Expression(opaque) => self.renderer.render(opaque, &mut self.out),
        }
    }

    fn property(&mut self, property: &Property) {
        match property {
            Property::KeyValue {
                key,
                value,
                computed,
            } => {
                if *computed {
                    self.out.push('[');
                    self.node(key);
                    self.out.push(']');
                } else {
                    self.node(key);
                }
                self.out.push_str(": ");
                self.node(value);
            }
            Property::Spread(argument) => {
                self.out.push_str("...");
                self.node(argument);
            }
            Property::Other(opaque) => self.renderer.render(opaque, &mut self.out),
        }
    }

    fn string_literal(&mut self, s: &Str) {
        match &s.raw {
            Some(raw) => self.out.push_str(raw),
            None => self.out.push_str(&quote(&s.value)),
        }
    }

    fn list<T>(&mut self, items: &[T], mut each: impl FnMut(&mut Self, &T)) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            each(self, item);
        }
    }
}

/// Text that reads back as the same JSX text.
fn is_plain_text(text: &str) -> bool {
    !text.is_empty() && !text.contains(['{', '}', '<', '>', '&', '\n', '\r'])
}

/// A double-quoted JavaScript string literal.
fn quote(value: &str) -> String {
    serde_json::Value::String(value.to_owned()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Span;
    use crate::element::rewrite;
    use pretty_assertions::assert_eq;

    fn jsx(node: &Node) -> String {
        print_element(&rewrite(node).unwrap(), &SourceText)
    }

    fn str_attr(name: &str, value: &str) -> Attribute {
        Attribute::named(
            name,
            AttributeValue::Str(Str {
                value: value.to_string(),
                raw: None,
            }),
        )
    }

    #[test]
    fn self_closing_element() {
        assert_eq!(jsx(&Node::create_element(vec![Node::ident("div")])), "<div />");
    }

    #[test]
    fn paired_element_with_attributes() {
        let node = Node::create_element(vec![
            Node::str("span"),
            Node::Object(vec![
                Property::key_value(Node::ident("id"), Node::str("x")),
                Property::key_value(Node::ident("onClick"), Node::expression("() => go()")),
                Property::Spread(Node::ident("rest")),
            ]),
            Node::str("hi"),
            Node::ident("name"),
        ]);

        assert_eq!(
            jsx(&node),
            r#"<span id="x" onClick={() => go()} {...rest}>hi{name}</span>"#
        );
    }

    #[test]
    fn member_tag_names_close_with_the_same_path() {
        let node = Node::create_element(vec![
            Node::member(Node::ident("Menu"), Node::ident("Item")),
            Node::Null,
            Node::str("Open"),
        ]);

        assert_eq!(jsx(&node), "<Menu.Item>Open</Menu.Item>");
    }

    #[test]
    fn nested_elements() {
        let node = Node::create_element(vec![
            Node::str("ul"),
            Node::Null,
            Node::create_element(vec![Node::str("li"), Node::Null, Node::str("x")]),
            Node::create_element(vec![Node::str("li")]),
        ]);

        assert_eq!(jsx(&node), "<ul><li>x</li><li /></ul>");
    }

    #[test]
    fn attribute_strings_pick_safe_quotes() {
        let element = MarkupElement::new(
            TagName::simple("a"),
            vec![
                str_attr("title", r#"say "hi""#),
                str_attr("alt", r#"it's "here""#),
                str_attr("href", "?a=1&b=2"),
                str_attr("path", r"C:\dir"),
            ],
            vec![],
        );

        assert_eq!(
            print_element(&element, &SourceText),
            r#"<a title='say "hi"' alt={"it's \"here\""} href={"?a=1&b=2"} path="C:\dir" />"#
        );
    }

    #[test]
    fn unsafe_text_becomes_string_container() {
        let element = MarkupElement::new(
            TagName::simple("p"),
            vec![],
            vec![
                Child::Text("a < b".to_string()),
                Child::Text("line\nbreak".to_string()),
                Child::Text(String::new()),
                Child::Text(" plain ".to_string()),
            ],
        );

        assert_eq!(
            print_element(&element, &SourceText),
            r#"<p>{"a < b"}{"line\nbreak"}{""} plain </p>"#
        );
    }

    #[test]
    fn markup_attribute_value() {
        let icon = MarkupElement::new(TagName::simple("Icon"), vec![], vec![]);
        let element = MarkupElement::new(
            TagName::simple("Button"),
            vec![Attribute::named("icon", AttributeValue::Markup(Box::new(icon)))],
            vec![],
        );

        assert_eq!(
            print_element(&element, &SourceText),
            "<Button icon=<Icon /> />"
        );
    }

    #[test]
    fn structural_expressions() {
        let node = Node::call(
            Node::member(Node::ident("list"), Node::ident("map")),
            vec![
                Node::computed_member(Node::ident("fns"), Node::str("render")),
                Node::Object(vec![
                    Property::key_value(Node::ident("a"), Node::Null),
                    Property::KeyValue {
                        key: Node::ident("k"),
                        value: Node::Object(vec![]),
                        computed: true,
                    },
                    Property::Spread(Node::ident("rest")),
                ]),
                Node::Str(Str {
                    value: "x".to_string(),
                    raw: Some("'x'".to_string()),
                }),
            ],
        );

        assert_eq!(
            print_node(&node, &SourceText),
            r#"list.map(fns["render"], { a: null, [k]: {}, ...rest }, 'x')"#
        );
    }

    #[test]
    fn opaque_nodes_go_through_the_renderer() {
        struct Upper;
        impl OpaqueRenderer for Upper {
            fn render(&self, opaque: &Opaque, out: &mut String) {
                out.push_str(&opaque.source.to_uppercase());
            }
        }

        let node = Node::create_element(vec![
            Node::str("div"),
            Node::Null,
            Node::Expression(Opaque {
                span: Span::new(0, 3),
                source: "abc".to_string(),
            }),
        ]);

        assert_eq!(print_element(&rewrite(&node).unwrap(), &Upper), "<div>{ABC}</div>");
    }
}
