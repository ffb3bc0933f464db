//! Whole-source transform: parse, collect rewrites, splice printed JSX.

use std::cell::Cell;
use std::fs;
use std::path::Path;

use oxc_allocator::Allocator;
use oxc_ast::ast::CallExpression;
use oxc_ast_visit::{walk, Visit};
use oxc_parser::Parser;
use oxc_span::SourceType;

use jsxify_core::walk::{opaque_spans, rewrite_tree_with_stats};
use jsxify_core::{print_element, MarkupElement, Node, Opaque, OpaqueRenderer, Span};

use crate::error::TransformError;
use crate::lower::{is_factory_callee, Lowering};

/// Options for a source transform.
#[derive(Debug, Clone, Copy)]
pub struct TransformOptions {
    /// How the source is parsed
    pub source_type: SourceType,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self::jsx()
    }
}

impl TransformOptions {
    /// JavaScript module with JSX enabled.
    pub fn jsx() -> Self {
        Self {
            source_type: SourceType::jsx(),
        }
    }

    /// TypeScript module with JSX enabled.
    pub fn tsx() -> Self {
        Self {
            source_type: SourceType::tsx(),
        }
    }

    /// Derive the source type from a file extension.
    ///
    /// Extensions whose files cannot hold JSX, such as `.ts`, are rejected.
    pub fn for_path(path: &Path) -> Result<Self, TransformError> {
        let source_type = SourceType::from_path(path)
            .ok()
            .filter(|source_type| source_type.is_jsx())
            .ok_or_else(|| TransformError::UnsupportedExtension(path.to_path_buf()))?;
        Ok(Self { source_type })
    }
}

/// Result of transforming a source text.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformOutput {
    /// Transformed source
    pub code: String,

    /// Number of JSX elements produced, nested ones included
    pub rewritten: usize,
}

/// Rewrite every `React.createElement` call in `source` into JSX.
///
/// Calls that do not match are kept byte-for-byte, as is all text outside
/// rewritten calls. Inside a rewritten call, expressions the rewrite does not
/// decompose are copied from the source. A call whose comments would not
/// survive the rewrite is left as it is.
pub fn transform_code(
    source: &str,
    options: &TransformOptions,
) -> Result<TransformOutput, TransformError> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, options.source_type).parse();

    if ret.panicked || !ret.errors.is_empty() {
        let message = ret
            .errors
            .iter()
            .map(|error| error.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(TransformError::Parse { message });
    }

    let mut collector = EditCollector {
        lowering: Lowering::new(source),
        comments: ret
            .program
            .comments
            .iter()
            .map(|comment| Span::new(comment.span.start, comment.span.end))
            .collect(),
        edits: Vec::new(),
    };
    collector.visit_program(&ret.program);

    let mut edits = collector.edits;
    edits.sort_by(|a, b| a.span.start.cmp(&b.span.start).then(b.span.end.cmp(&a.span.end)));

    let splicer = Splicer {
        source,
        edits: &edits,
        rewritten: Cell::new(0),
    };
    let mut code = String::with_capacity(source.len());
    splicer.splice(Span::new(0, source.len() as u32), &mut code);

    let rewritten = splicer.rewritten.get();
    tracing::debug!(candidates = edits.len(), rewritten, "transformed source");

    Ok(TransformOutput { code, rewritten })
}

/// Read and transform a file, choosing the parser from its extension.
pub fn transform_path(path: &Path) -> Result<TransformOutput, TransformError> {
    let options = TransformOptions::for_path(path)?;
    let source = fs::read_to_string(path).map_err(|source| TransformError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let output = transform_code(&source, &options)?;
    tracing::debug!(path = %path.display(), rewritten = output.rewritten, "transformed file");
    Ok(output)
}

/// A matched call and the element that replaces it.
#[derive(Debug)]
struct Edit {
    span: Span,
    element: MarkupElement,
    elements: usize,
}

struct EditCollector<'s> {
    lowering: Lowering<'s>,
    comments: Vec<Span>,
    edits: Vec<Edit>,
}

impl EditCollector<'_> {
    /// Whether printing `element` over `span` would lose a comment. Only
    /// opaque expressions are copied from the source.
    fn drops_comments(&self, span: Span, element: &MarkupElement) -> bool {
        let kept = opaque_spans(element);
        self.comments
            .iter()
            .filter(|comment| span.contains(**comment))
            .any(|comment| !kept.iter().any(|opaque| opaque.contains(*comment)))
    }
}

impl<'a> Visit<'a> for EditCollector<'_> {
    // Every matching call is recorded, nested ones included. The splicer
    // decides which of them are printed from source spans.
    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        if is_factory_callee(&call.callee) {
            let span = Span::new(call.span.start, call.span.end);
            let (node, stats) = rewrite_tree_with_stats(self.lowering.call(call));
            match node {
                Node::Markup(element) if self.drops_comments(span, &element) => {
                    tracing::trace!(start = span.start, "call holds comments; left as is");
                }
                Node::Markup(element) => self.edits.push(Edit {
                    span,
                    element: *element,
                    elements: stats.elements,
                }),
                _ => {}
            }
        }
        walk::walk_call_expression(self, call);
    }
}

/// Rebuilds source text with edits applied.
struct Splicer<'s> {
    source: &'s str,
    edits: &'s [Edit],
    rewritten: Cell<usize>,
}

impl Splicer<'_> {
    /// Copy `range` of the source into `out`, replacing the outermost edits
    /// inside it with their printed JSX.
    fn splice(&self, range: Span, out: &mut String) {
        let mut cursor = range.start;

        for edit in self.edits.iter().filter(|edit| range.contains(edit.span)) {
            if edit.span.start < cursor {
                // Inside an edit that was already printed.
                continue;
            }
            out.push_str(self.text(cursor, edit.span.start));
            out.push_str(&print_element(&edit.element, self));
            self.rewritten.set(self.rewritten.get() + edit.elements);
            cursor = edit.span.end;
        }

        out.push_str(self.text(cursor, range.end));
    }

    fn text(&self, start: u32, end: u32) -> &str {
        self.source
            .get(start as usize..end as usize)
            .unwrap_or_default()
    }
}

impl OpaqueRenderer for Splicer<'_> {
    fn render(&self, opaque: &Opaque, out: &mut String) {
        self.splice(opaque.span, out);
    }
}
