//! Document and edit model.
//!
//! The engine never rewrites text incrementally: it assembles the full
//! replacement for the initializer block first, then applies it as a single
//! span replacement. The host sees either the complete edit or no edit.

use mapfill_model::TypeId;
use serde::Serialize;

/// Byte span within a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }
}

/// A single text edit: replace `span` with `new_text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextEdit {
    pub span: Span,
    pub new_text: String,
}

impl TextEdit {
    pub const fn new(span: Span, new_text: String) -> Self {
        TextEdit { span, new_text }
    }
}

/// An immutable document. Applying an edit yields a new document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Document { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Apply one edit, all-or-nothing. An edit whose span falls outside the
    /// document is rejected and the document is returned unchanged.
    pub fn apply_edit(&self, edit: &TextEdit) -> Document {
        if edit.span.start > edit.span.end || edit.span.end > self.text.len() {
            return self.clone();
        }
        let mut text = String::with_capacity(
            self.text.len() - (edit.span.end - edit.span.start) + edit.new_text.len(),
        );
        text.push_str(&self.text[..edit.span.start]);
        text.push_str(&edit.new_text);
        text.push_str(&self.text[edit.span.end..]);
        Document { text }
    }
}

/// A located object-creation expression with an empty initializer block.
///
/// Only `initializer_span` (the span of the empty `{ }` block) is ever
/// replaced; the constructor arguments preceding it are untouched by
/// construction. `target_type` is `None` when the host could not resolve the
/// created type, which aborts the fix for this invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectCreationSite {
    pub target_type: Option<TypeId>,
    pub initializer_span: Span,
}

impl ObjectCreationSite {
    pub const fn new(target_type: Option<TypeId>, initializer_span: Span) -> Self {
        ObjectCreationSite {
            target_type,
            initializer_span,
        }
    }
}
