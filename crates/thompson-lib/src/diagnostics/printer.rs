//! Builder-pattern printer for rendering a compile error.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use crate::Error;
use crate::parser::Span;

/// Builder for rendering an [`Error`] against the pattern it came from.
pub struct ErrorPrinter<'e, 's> {
    error: &'e Error,
    source: &'s str,
    path: Option<&'s str>,
    colored: bool,
}

impl<'e, 's> ErrorPrinter<'e, 's> {
    pub fn new(error: &'e Error, source: &'s str) -> Self {
        Self {
            error,
            source,
            path: None,
            colored: false,
        }
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        match self.format(&mut out) {
            Ok(()) => out,
            Err(_) => format!("error: {}", self.error),
        }
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        // Nothing to point at.
        if self.source.is_empty() {
            return self.format_plain(w);
        }

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let message = self.error.to_string();
        let label = self.error.label();
        let range = adjust_range(self.error.span(), self.source.len());

        let mut snippet = Snippet::source(self.source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(range).label(&label));

        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let report: Vec<Group> = vec![Level::ERROR.primary_title(&message).element(snippet)];
        write!(w, "{}", renderer.render(&report))
    }

    fn format_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        match self.path {
            Some(p) => write!(w, "error: {}\n --> {}", self.error, p),
            None => write!(w, "error: {}", self.error),
        }
    }
}

/// Widen empty spans to one character so the caret has something to sit under.
fn adjust_range(range: Span, limit: usize) -> Span {
    if range.start == range.end {
        return range.start..(range.start + 1).min(limit);
    }

    range.start.min(limit)..range.end.min(limit)
}

impl Error {
    pub fn printer<'e, 's>(&'e self, source: &'s str) -> ErrorPrinter<'e, 's> {
        ErrorPrinter::new(self, source)
    }
}
