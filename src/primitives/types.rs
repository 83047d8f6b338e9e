//! Primitive props.

use crate::engine::Span;
use crate::types::{AlignItems, BorderStyle, Dimension, Edges, FlexDirection, JustifyContent, Rgba};

// =============================================================================
// Box Props
// =============================================================================

/// Properties for the Box component.
///
/// Box is the fundamental container - it can have children, borders and
/// backgrounds. Anything left at its default matches the CSS initial value,
/// except `flex_direction`, which defaults to column.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxProps {
    /// Optional component ID for lookup (scroll anchors).
    pub id: Option<String>,

    // Container
    pub flex_direction: FlexDirection,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub gap: u16,

    // Item
    pub grow: f32,
    pub shrink: f32,
    pub basis: Dimension,

    // Dimensions
    pub width: Dimension,
    pub height: Dimension,
    pub min_width: Dimension,
    pub min_height: Dimension,
    pub max_width: Dimension,
    pub max_height: Dimension,

    // Spacing
    pub margin: Edges,
    pub padding: Edges,

    // Visual
    pub border: BorderStyle,
    pub border_color: Option<Rgba>,
    pub bg: Option<Rgba>,
}

impl Default for BoxProps {
    fn default() -> Self {
        Self {
            id: None,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::FlexStart,
            align_items: AlignItems::Stretch,
            gap: 0,
            grow: 0.0,
            shrink: 1.0,
            basis: Dimension::Auto,
            width: Dimension::Auto,
            height: Dimension::Auto,
            min_width: Dimension::Auto,
            min_height: Dimension::Auto,
            max_width: Dimension::Auto,
            max_height: Dimension::Auto,
            margin: Edges::ZERO,
            padding: Edges::ZERO,
            border: BorderStyle::None,
            border_color: None,
            bg: None,
        }
    }
}

// =============================================================================
// Text Props
// =============================================================================

/// Properties for the Text component.
///
/// Text wraps at word boundaries to whatever width layout gives it.
#[derive(Debug, Clone, PartialEq)]
pub struct TextProps {
    pub id: Option<String>,
    pub spans: Vec<Span>,
    pub margin: Edges,
    pub grow: f32,
    pub shrink: f32,
    pub width: Dimension,
}

impl Default for TextProps {
    fn default() -> Self {
        Self {
            id: None,
            spans: Vec::new(),
            margin: Edges::ZERO,
            grow: 0.0,
            shrink: 1.0,
            width: Dimension::Auto,
        }
    }
}
