//! Text Primitive - styled, wrapping text leaves.

use crate::engine::{FlexNode, Span, Visual};
use crate::types::ComponentType;

use super::types::TextProps;
use super::Ui;

impl Ui {
    /// Create a text component.
    ///
    /// Text is measured by layout (word-wrapped to the available width), so
    /// it has no explicit size unless `width` is set.
    pub fn text(&mut self, props: TextProps) -> usize {
        let TextProps { id, spans, margin, grow, shrink, width } = props;

        let flex = FlexNode {
            flex_grow: grow,
            flex_shrink: shrink,
            width,
            margin,
            ..Default::default()
        };

        let parent = self.current_parent();
        let index = self.tree.allocate(parent, ComponentType::Text, flex, Visual::default(), spans);
        if let Some(id) = id {
            self.tree.set_id(index, id);
        }
        index
    }

    /// One text component from a list of spans.
    pub fn line(&mut self, spans: impl IntoIterator<Item = Span>) -> usize {
        self.text(TextProps {
            spans: spans.into_iter().collect(),
            ..Default::default()
        })
    }

    /// Unstyled text.
    pub fn plain(&mut self, content: impl Into<String>) -> usize {
        self.line([Span::new(content)])
    }

    /// A one-row empty line.
    pub fn blank(&mut self) -> usize {
        self.plain(" ")
    }
}
