//! Primitives - component building blocks.
//!
//! This module provides the core UI primitives:
//! - [`Ui::box_primitive`] - Container with flexbox layout, borders, and background
//! - [`Ui::text`] - Text display with styled spans and wrapping
//!
//! # Architecture
//!
//! A [`Ui`] owns a [`ComponentTree`] and a parent context stack. Opening a
//! box pushes its index, the children closure runs, and the index is popped
//! again, so nesting in code is nesting in the tree:
//!
//! ```
//! use flexbox_tutor::primitives::{BoxProps, Ui};
//! use flexbox_tutor::engine::span;
//! use flexbox_tutor::types::{BorderStyle, FlexDirection};
//!
//! let mut ui = Ui::new();
//! ui.box_primitive(BoxProps {
//!     flex_direction: FlexDirection::Row,
//!     border: BorderStyle::Single,
//!     ..Default::default()
//! }, |ui| {
//!     ui.line([span("Hello").bold()]);
//! });
//! let tree = ui.finish();
//! assert_eq!(tree.len(), 2);
//! ```

mod box_primitive;
mod text;
mod types;

pub use types::*;

use crate::engine::ComponentTree;

/// Builder for a component tree.
#[derive(Debug, Default)]
pub struct Ui {
    tree: ComponentTree,
    parent_stack: Vec<usize>,
}

impl Ui {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current parent index (None at the root).
    pub fn current_parent(&self) -> Option<usize> {
        self.parent_stack.last().copied()
    }

    fn push_parent_context(&mut self, index: usize) {
        self.parent_stack.push(index);
    }

    fn pop_parent_context(&mut self) {
        self.parent_stack.pop();
    }

    /// Finish building and hand over the tree.
    pub fn finish(self) -> ComponentTree {
        self.tree
    }
}
