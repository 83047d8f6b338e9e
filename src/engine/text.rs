//! Styled text runs.

use crate::types::{Attr, Rgba};

/// A run of text sharing one foreground color and attribute set.
///
/// A text component holds a list of spans; wrapping treats the list as one
/// continuous string, so a span boundary is never a line break on its own.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Span {
    pub content: String,
    /// `None` keeps the terminal's default foreground.
    pub fg: Option<Rgba>,
    pub attrs: Attr,
}

impl Span {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            fg: None,
            attrs: Attr::NONE,
        }
    }

    pub fn fg(mut self, color: Rgba) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.attrs |= Attr::BOLD;
        self
    }

    pub fn dim(mut self) -> Self {
        self.attrs |= Attr::DIM;
        self
    }

    pub fn italic(mut self) -> Self {
        self.attrs |= Attr::ITALIC;
        self
    }

    pub fn underline(mut self) -> Self {
        self.attrs |= Attr::UNDERLINE;
        self
    }

    pub fn inverse(mut self) -> Self {
        self.attrs |= Attr::INVERSE;
        self
    }

    /// Apply `dim` only when `on` is set.
    pub fn dim_if(self, on: bool) -> Self {
        if on { self.dim() } else { self }
    }
}

/// Shorthand for [`Span::new`].
pub fn span(content: impl Into<String>) -> Span {
    Span::new(content)
}

impl From<&str> for Span {
    fn from(content: &str) -> Self {
        Span::new(content)
    }
}

impl From<String> for Span {
    fn from(content: String) -> Self {
        Span::new(content)
    }
}

/// Concatenate the plain content of a span list.
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(|s| s.content.as_str()).collect()
}
