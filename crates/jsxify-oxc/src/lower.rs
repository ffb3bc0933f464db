//! Lowering from the oxc AST into the core expression tree.

use oxc_ast::ast::{
    Argument, CallExpression, Expression, ObjectPropertyKind, PropertyKey, PropertyKind,
};
use oxc_span::GetSpan;

use jsxify_core::classify::MERGE_HELPER;
use jsxify_core::{Call, Member, Node, Opaque, Property, Span, Str};

/// Converts oxc expressions into [`Node`]s, keeping source text for
/// everything the rewrite does not look inside.
#[derive(Debug, Clone, Copy)]
pub struct Lowering<'s> {
    source: &'s str,
}

impl<'s> Lowering<'s> {
    /// Create a lowering over the text the AST was parsed from.
    pub fn new(source: &'s str) -> Self {
        Self { source }
    }

    pub fn expression(&self, expr: &Expression<'_>) -> Node {
        match expr {
            Expression::Identifier(ident) => Node::Ident(ident.name.to_string()),
            Expression::StringLiteral(lit) => Node::Str(Str {
                value: lit.value.to_string(),
                raw: Some(self.text(lit.span).to_string()),
            }),
            Expression::NullLiteral(_) => Node::Null,
            Expression::StaticMemberExpression(member) => Node::Member(Member {
                object: Box::new(self.expression(&member.object)),
                property: Box::new(Node::Ident(member.property.name.to_string())),
                computed: false,
            }),
            Expression::ComputedMemberExpression(member) => Node::Member(Member {
                object: Box::new(self.expression(&member.object)),
                property: Box::new(self.expression(&member.expression)),
                computed: true,
            }),
            Expression::CallExpression(call) => self.call(call),
            Expression::ObjectExpression(object) => Node::Object(
                object
                    .properties
                    .iter()
                    .map(|property| self.property(property))
                    .collect(),
            ),
            // Parens vanish around anything structural; otherwise keep them
            // as part of the opaque text.
            Expression::ParenthesizedExpression(paren) => match self.expression(&paren.expression) {
                Node::Expression(_) => self.opaque(expr.span()),
                inner => inner,
            },
            _ => self.opaque(expr.span()),
        }
    }

    /// Only factory and merge helper calls are decomposed. Any other call,
    /// and any call with type arguments, stays source text.
    pub fn call(&self, call: &CallExpression<'_>) -> Node {
        let inspected = is_factory_callee(&call.callee) || is_merge_callee(&call.callee);
        if call.type_arguments.is_some() || !inspected {
            return self.opaque(call.span);
        }

        Node::Call(Call {
            callee: Box::new(self.expression(&call.callee)),
            arguments: call
                .arguments
                .iter()
                .map(|argument| self.argument(argument))
                .collect(),
        })
    }

    fn argument(&self, argument: &Argument<'_>) -> Node {
        if let Argument::SpreadElement(spread) = argument {
            return Node::spread(self.expression(&spread.argument));
        }
        match argument.as_expression() {
            Some(expr) => self.expression(expr),
            None => self.opaque(argument.span()),
        }
    }

    fn property(&self, property: &ObjectPropertyKind<'_>) -> Property {
        match property {
            ObjectPropertyKind::SpreadProperty(spread) => {
                Property::Spread(self.expression(&spread.argument))
            }
            ObjectPropertyKind::ObjectProperty(prop) => {
                if prop.method || !matches!(prop.kind, PropertyKind::Init) {
                    return Property::Other(self.opaque_text(prop.span));
                }
                Property::KeyValue {
                    key: self.property_key(&prop.key),
                    value: self.expression(&prop.value),
                    computed: prop.computed,
                }
            }
        }
    }

    fn property_key(&self, key: &PropertyKey<'_>) -> Node {
        if let PropertyKey::StaticIdentifier(ident) = key {
            return Node::Ident(ident.name.to_string());
        }
        match key.as_expression() {
            Some(expr) => self.expression(expr),
            None => self.opaque(key.span()),
        }
    }

    fn opaque(&self, span: oxc_span::Span) -> Node {
        Node::Expression(self.opaque_text(span))
    }

    fn opaque_text(&self, span: oxc_span::Span) -> Opaque {
        Opaque {
            span: Span::new(span.start, span.end),
            source: self.text(span).to_string(),
        }
    }

    fn text(&self, span: oxc_span::Span) -> &'s str {
        self.source
            .get(span.start as usize..span.end as usize)
            .unwrap_or_default()
    }
}

/// `React.createElement`, possibly parenthesized.
pub fn is_factory_callee(callee: &Expression<'_>) -> bool {
    match without_parens(callee) {
        Expression::StaticMemberExpression(member) => {
            member.property.name.as_str() == "createElement"
                && matches!(without_parens(&member.object), Expression::Identifier(object) if object.name.as_str() == "React")
        }
        _ => false,
    }
}

fn is_merge_callee(callee: &Expression<'_>) -> bool {
    matches!(without_parens(callee), Expression::Identifier(ident) if ident.name.as_str() == MERGE_HELPER)
}

fn without_parens<'e, 'a>(mut expr: &'e Expression<'a>) -> &'e Expression<'a> {
    while let Expression::ParenthesizedExpression(paren) = expr {
        expr = &paren.expression;
    }
    expr
}
