//! FlexNode - the layout properties of one component.
//!
//! Everything here maps one-to-one onto a taffy `Style` field in
//! [`crate::layout::compute_layout`]. Borders are not listed: they come from
//! the component's visual border style, one cell per side.

use crate::types::{AlignItems, Dimension, Edges, FlexDirection, JustifyContent};

/// Flexbox properties for a single component.
///
/// # Property Categories
///
/// - **Container**: flex_direction, justify_content, align_items, gap
/// - **Item**: flex_grow, flex_shrink, flex_basis
/// - **Dimensions**: width, height, min/max of each
/// - **Spacing**: margin, padding
#[derive(Debug, Clone, PartialEq)]
pub struct FlexNode {
    pub flex_direction: FlexDirection,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub gap: u16,

    pub flex_grow: f32,
    /// Defaults to 1, as in CSS.
    pub flex_shrink: f32,
    pub flex_basis: Dimension,

    pub width: Dimension,
    pub height: Dimension,
    pub min_width: Dimension,
    pub min_height: Dimension,
    pub max_width: Dimension,
    pub max_height: Dimension,

    pub margin: Edges,
    pub padding: Edges,
}

impl Default for FlexNode {
    fn default() -> Self {
        Self {
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::FlexStart,
            align_items: AlignItems::Stretch,
            gap: 0,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            flex_basis: Dimension::Auto,
            width: Dimension::Auto,
            height: Dimension::Auto,
            min_width: Dimension::Auto,
            min_height: Dimension::Auto,
            max_width: Dimension::Auto,
            max_height: Dimension::Auto,
            margin: Edges::ZERO,
            padding: Edges::ZERO,
        }
    }
}
