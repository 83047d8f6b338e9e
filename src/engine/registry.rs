//! Component tree - index allocation for the parallel arrays.
//!
//! Manages:
//! - Index allocation (indices are dense and never reused within a tree)
//! - ID → Index mapping for components that other code needs to find
//! - Parent/children links

use std::collections::HashMap;

use crate::types::{BorderStyle, ComponentType, Rgba};

use super::flex_node::FlexNode;
use super::text::Span;

/// Visual (non-layout) properties of a component.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Visual {
    pub border: BorderStyle,
    /// `None` draws the border in the terminal's default foreground.
    pub border_color: Option<Rgba>,
    /// `None` leaves whatever is underneath.
    pub bg: Option<Rgba>,
}

/// A component tree stored column-wise.
///
/// The first allocated component is the root. Children keep insertion order,
/// which is also flex order.
#[derive(Debug, Clone, Default)]
pub struct ComponentTree {
    component_type: Vec<ComponentType>,
    parent: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
    flex: Vec<FlexNode>,
    visual: Vec<Visual>,
    text: Vec<Vec<Span>>,
    id_to_index: HashMap<String, usize>,
}

impl ComponentTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an index for a new component.
    ///
    /// # Arguments
    ///
    /// * `parent` - Parent index, `None` for the root
    /// * `component_type` - Box or Text
    /// * `flex` - Layout properties
    /// * `visual` - Border and background
    /// * `text` - Spans (empty for boxes)
    pub fn allocate(
        &mut self,
        parent: Option<usize>,
        component_type: ComponentType,
        flex: FlexNode,
        visual: Visual,
        text: Vec<Span>,
    ) -> usize {
        let index = self.component_type.len();
        self.component_type.push(component_type);
        self.parent.push(parent);
        self.children.push(Vec::new());
        self.flex.push(flex);
        self.visual.push(visual);
        self.text.push(text);

        if let Some(p) = parent {
            if let Some(siblings) = self.children.get_mut(p) {
                siblings.push(index);
            }
        }

        index
    }

    /// Register a string id for an index. Later registrations win.
    pub fn set_id(&mut self, index: usize, id: impl Into<String>) {
        self.id_to_index.insert(id.into(), index);
    }

    /// Look up a component index by id.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.id_to_index.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.component_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.component_type.is_empty()
    }

    /// The root component, if anything was built.
    pub fn root(&self) -> Option<usize> {
        if self.is_empty() { None } else { Some(0) }
    }

    pub fn component_type(&self, index: usize) -> ComponentType {
        self.component_type.get(index).copied().unwrap_or_default()
    }

    pub fn parent(&self, index: usize) -> Option<usize> {
        self.parent.get(index).copied().flatten()
    }

    pub fn children(&self, index: usize) -> &[usize] {
        self.children.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn flex_node(&self, index: usize) -> Option<&FlexNode> {
        self.flex.get(index)
    }

    pub fn visual(&self, index: usize) -> Option<&Visual> {
        self.visual.get(index)
    }

    pub fn text(&self, index: usize) -> &[Span] {
        self.text.get(index).map(Vec::as_slice).unwrap_or(&[])
    }
}
