//! Taffy Bridge - Integration with Taffy layout engine
//!
//! Converts FlexNode properties to Taffy styles, runs layout computation,
//! and extracts results back to ComputedLayout.

use taffy::{
    AlignItems as TaffyAlignItems, AvailableSpace, Dimension as TaffyDimension, Display,
    FlexDirection as TaffyFlexDirection, JustifyContent as TaffyJustifyContent, LengthPercentage,
    LengthPercentageAuto, NodeId, Rect, Size, Style, TaffyTree,
};
use tracing::debug;

use crate::engine::{plain_text, ComponentTree, FlexNode};
use crate::error::Result;
use crate::types::{AlignItems, ComponentType, Dimension, Edges, FlexDirection, JustifyContent};

use super::text_measure::{max_content_width, min_content_width, string_width, wrap_text};
use super::types::ComputedLayout;

// =============================================================================
// DIMENSION CONVERSION
// =============================================================================

/// Convert our Dimension to Taffy's Dimension.
fn to_taffy_dimension(dim: Dimension) -> TaffyDimension {
    match dim {
        Dimension::Auto => TaffyDimension::Auto,
        Dimension::Cells(n) => TaffyDimension::Length(n as f32),
        Dimension::Percent(p) => TaffyDimension::Percent(p / 100.0),
    }
}

fn to_taffy_margin(edges: Edges) -> Rect<LengthPercentageAuto> {
    Rect {
        top: LengthPercentageAuto::Length(edges.top as f32),
        right: LengthPercentageAuto::Length(edges.right as f32),
        bottom: LengthPercentageAuto::Length(edges.bottom as f32),
        left: LengthPercentageAuto::Length(edges.left as f32),
    }
}

fn to_taffy_padding(edges: Edges) -> Rect<LengthPercentage> {
    Rect {
        top: LengthPercentage::Length(edges.top as f32),
        right: LengthPercentage::Length(edges.right as f32),
        bottom: LengthPercentage::Length(edges.bottom as f32),
        left: LengthPercentage::Length(edges.left as f32),
    }
}

// =============================================================================
// ENUM CONVERSIONS
// =============================================================================

fn to_taffy_flex_direction(dir: FlexDirection) -> TaffyFlexDirection {
    match dir {
        FlexDirection::Column => TaffyFlexDirection::Column,
        FlexDirection::Row => TaffyFlexDirection::Row,
    }
}

fn to_taffy_justify_content(justify: JustifyContent) -> Option<TaffyJustifyContent> {
    Some(match justify {
        JustifyContent::FlexStart => TaffyJustifyContent::FlexStart,
        JustifyContent::Center => TaffyJustifyContent::Center,
        JustifyContent::FlexEnd => TaffyJustifyContent::FlexEnd,
        JustifyContent::SpaceBetween => TaffyJustifyContent::SpaceBetween,
        JustifyContent::SpaceAround => TaffyJustifyContent::SpaceAround,
    })
}

fn to_taffy_align_items(align: AlignItems) -> Option<TaffyAlignItems> {
    Some(match align {
        AlignItems::Stretch => TaffyAlignItems::Stretch,
        AlignItems::FlexStart => TaffyAlignItems::FlexStart,
        AlignItems::Center => TaffyAlignItems::Center,
        AlignItems::FlexEnd => TaffyAlignItems::FlexEnd,
    })
}

// =============================================================================
// STYLE BUILDING
// =============================================================================

/// Build a Taffy Style from a FlexNode and the component's border.
///
/// Text leaves have no border and size themselves through the measure
/// function unless given an explicit width.
fn build_style(node: &FlexNode, border: u16) -> Style {
    let border = border as f32;

    Style {
        display: Display::Flex,

        // Flex container properties
        flex_direction: to_taffy_flex_direction(node.flex_direction),
        justify_content: to_taffy_justify_content(node.justify_content),
        align_items: to_taffy_align_items(node.align_items),

        // Flex item properties
        flex_grow: node.flex_grow,
        flex_shrink: node.flex_shrink,
        flex_basis: to_taffy_dimension(node.flex_basis),

        // Dimensions
        size: Size {
            width: to_taffy_dimension(node.width),
            height: to_taffy_dimension(node.height),
        },
        min_size: Size {
            width: to_taffy_dimension(node.min_width),
            height: to_taffy_dimension(node.min_height),
        },
        max_size: Size {
            width: to_taffy_dimension(node.max_width),
            height: to_taffy_dimension(node.max_height),
        },

        margin: to_taffy_margin(node.margin),
        padding: to_taffy_padding(node.padding),

        // Border (uses LengthPercentage, just the width not style/color)
        border: Rect {
            top: LengthPercentage::Length(border),
            right: LengthPercentage::Length(border),
            bottom: LengthPercentage::Length(border),
            left: LengthPercentage::Length(border),
        },

        gap: Size {
            width: LengthPercentage::Length(node.gap as f32),
            height: LengthPercentage::Length(node.gap as f32),
        },

        ..Default::default()
    }
}

// =============================================================================
// TEXT MEASUREMENT
// =============================================================================

/// Measure function for text content.
///
/// Wraps with the same line breaker the painter uses, so the measured
/// height is the number of rows that will be drawn.
fn measure_text(
    content: &str,
    known_dimensions: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
) -> Size<f32> {
    if content.is_empty() {
        return Size::ZERO;
    }

    let max_width = max_content_width(content);
    let wrap_width = match known_dimensions.width {
        Some(w) => w.max(0.0).floor() as u16,
        None => match available_space.width {
            AvailableSpace::Definite(w) => (w.max(0.0).floor() as u16).min(max_width),
            AvailableSpace::MinContent => min_content_width(content),
            AvailableSpace::MaxContent => max_width,
        },
    };

    let lines = wrap_text(content, wrap_width);
    let text_width = lines.iter().map(|line| string_width(line)).max().unwrap_or(0);

    Size {
        width: known_dimensions.width.unwrap_or(text_width as f32),
        height: known_dimensions.height.unwrap_or(lines.len() as f32),
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Compute layout for a component tree using Taffy.
///
/// # Arguments
///
/// * `tree` - The component tree built by a screen
/// * `terminal_width` - Available width in terminal columns
/// * `min_height` - Minimum height of the root (0 for none). The document
///   grows past it when content is taller.
///
/// # Returns
///
/// Computed layout with positions and sizes for all components.
pub fn compute_layout(tree: &ComponentTree, terminal_width: u16, min_height: u16) -> Result<ComputedLayout> {
    let Some(root_idx) = tree.root() else {
        return Ok(ComputedLayout::new());
    };

    let count = tree.len();
    let mut result = ComputedLayout::with_len(count);

    let mut taffy: TaffyTree<usize> = TaffyTree::new();
    let mut nodes: Vec<NodeId> = Vec::with_capacity(count);

    // Plain text per component, indexed by the node context.
    let texts: Vec<String> = (0..count).map(|idx| plain_text(tree.text(idx))).collect();

    // First pass: Create all nodes (without children)
    for idx in 0..count {
        let comp_type = tree.component_type(idx);
        let border = tree.visual(idx).map(|v| v.border.width()).unwrap_or(0);
        let default_node = FlexNode::default();
        let node = tree.flex_node(idx).unwrap_or(&default_node);

        let mut style = build_style(node, border);
        if idx == root_idx {
            if style.size.width == TaffyDimension::Auto {
                let margin = node.margin.horizontal();
                style.size.width = TaffyDimension::Length(terminal_width.saturating_sub(margin) as f32);
            }
            if min_height > 0 && style.min_size.height == TaffyDimension::Auto {
                let margin = node.margin.vertical();
                style.min_size.height = TaffyDimension::Length(min_height.saturating_sub(margin) as f32);
            }
        }

        let node_id = match comp_type {
            ComponentType::Text => taffy.new_leaf_with_context(style, idx)?,
            ComponentType::Box => taffy.new_leaf(style)?,
        };
        nodes.push(node_id);
    }

    // Second pass: Build parent-child relationships
    for idx in 0..count {
        for &child in tree.children(idx) {
            taffy.add_child(nodes[idx], nodes[child])?;
        }
    }

    let available = Size {
        width: AvailableSpace::Definite(terminal_width as f32),
        height: AvailableSpace::MaxContent,
    };

    taffy.compute_layout_with_measure(
        nodes[root_idx],
        available,
        |known_dimensions, available_space, _node_id, context: Option<&mut usize>, _style: &Style| {
            match context {
                Some(&mut idx) => texts
                    .get(idx)
                    .map(|content| measure_text(content, known_dimensions, available_space))
                    .unwrap_or(Size::ZERO),
                None => Size::ZERO,
            }
        },
    )?;

    // Extract results
    for (idx, &node_id) in nodes.iter().enumerate() {
        let layout = taffy.layout(node_id)?;
        result.x[idx] = layout.location.x.max(0.0).round() as u16;
        result.y[idx] = layout.location.y.max(0.0).round() as u16;
        result.width[idx] = layout.size.width.max(0.0).round() as u16;
        result.height[idx] = layout.size.height.max(0.0).round() as u16;
    }

    let root_margin = tree.flex_node(root_idx).map(|n| n.margin).unwrap_or_default();
    result.content_width = result.width[root_idx].saturating_add(root_margin.horizontal());
    result.content_height = result.height[root_idx]
        .saturating_add(result.y[root_idx])
        .saturating_add(root_margin.bottom);

    debug!(
        components = count,
        width = result.content_width,
        height = result.content_height,
        "layout computed"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::span;
    use crate::primitives::{BoxProps, TextProps, Ui};
    use crate::types::BorderStyle;

    fn boxes(direction: FlexDirection, width: u16, grows: &[f32]) -> (ComponentTree, Vec<usize>) {
        let mut ui = Ui::new();
        let mut children = Vec::new();
        ui.box_primitive(
            BoxProps {
                flex_direction: direction,
                width: Dimension::Cells(width),
                height: Dimension::Cells(10),
                ..Default::default()
            },
            |ui| {
                for &grow in grows {
                    children.push(ui.spacer(BoxProps {
                        grow,
                        width: if grow == 0.0 { Dimension::Cells(10) } else { Dimension::Auto },
                        ..Default::default()
                    }));
                }
            },
        );
        (ui.finish(), children)
    }

    #[test]
    fn test_compute_layout_empty() {
        let layout = compute_layout(&ComponentTree::new(), 80, 24).unwrap();
        assert_eq!(layout.content_width, 0);
        assert_eq!(layout.content_height, 0);
    }

    #[test]
    fn test_root_takes_terminal_width_and_min_height() {
        let mut ui = Ui::new();
        ui.box_primitive(BoxProps::default(), |ui| {
            ui.plain("hi");
        });
        let layout = compute_layout(&ui.finish(), 80, 24).unwrap();
        assert_eq!(layout.get(0), (0, 0, 80, 24));
        assert_eq!(layout.content_height, 24);
    }

    #[test]
    fn test_document_grows_past_min_height() {
        let mut ui = Ui::new();
        ui.box_primitive(BoxProps::default(), |ui| {
            for _ in 0..30 {
                ui.plain("line");
            }
        });
        let layout = compute_layout(&ui.finish(), 40, 10).unwrap();
        assert_eq!(layout.content_height, 30);
    }

    #[test]
    fn test_flex_row_grow_distribution() {
        let (tree, c) = boxes(FlexDirection::Row, 60, &[1.0, 2.0, 3.0]);
        let layout = compute_layout(&tree, 80, 0).unwrap();
        assert_eq!(layout.width[c[0]], 10);
        assert_eq!(layout.width[c[1]], 20);
        assert_eq!(layout.width[c[2]], 30);
        assert_eq!(layout.x[c[1]], 10);
        assert_eq!(layout.x[c[2]], 30);
    }

    #[test]
    fn test_zero_grow_keeps_natural_size() {
        let (tree, c) = boxes(FlexDirection::Row, 60, &[0.0, 1.0]);
        let layout = compute_layout(&tree, 80, 0).unwrap();
        assert_eq!(layout.width[c[0]], 10);
        assert_eq!(layout.width[c[1]], 50);
    }

    #[test]
    fn test_padding_and_border_offset_children() {
        let mut ui = Ui::new();
        let mut child = 0;
        ui.box_primitive(
            BoxProps {
                border: BorderStyle::Single,
                padding: Edges::all(2),
                ..Default::default()
            },
            |ui| {
                child = ui.plain("content");
            },
        );
        let layout = compute_layout(&ui.finish(), 40, 0).unwrap();
        assert_eq!(layout.x[child], 3);
        assert_eq!(layout.y[child], 3);
        assert_eq!(layout.width[child], 40 - 6);
        assert_eq!(layout.height[0], 1 + 6);
    }

    #[test]
    fn test_justify_center_in_row() {
        let mut ui = Ui::new();
        let mut child = 0;
        ui.box_primitive(
            BoxProps {
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::Center,
                width: Dimension::Cells(40),
                ..Default::default()
            },
            |ui| {
                child = ui.spacer(BoxProps {
                    width: Dimension::Cells(10),
                    height: Dimension::Cells(1),
                    ..Default::default()
                });
            },
        );
        let layout = compute_layout(&ui.finish(), 80, 0).unwrap();
        assert_eq!(layout.x[child], 15);
    }

    #[test]
    fn test_text_wraps_to_container_width() {
        let mut ui = Ui::new();
        let mut text = 0;
        ui.box_primitive(
            BoxProps {
                width: Dimension::Cells(10),
                ..Default::default()
            },
            |ui| {
                text = ui.text(TextProps {
                    spans: vec![span("hello big "), span("world").bold()],
                    ..Default::default()
                });
            },
        );
        let layout = compute_layout(&ui.finish(), 80, 0).unwrap();
        assert_eq!(layout.height[text], 2);
        assert_eq!(layout.height[0], 2);
    }

    #[test]
    fn test_text_in_row_uses_its_own_width() {
        let mut ui = Ui::new();
        let mut texts = Vec::new();
        ui.box_primitive(
            BoxProps {
                flex_direction: FlexDirection::Row,
                ..Default::default()
            },
            |ui| {
                texts.push(ui.plain("abc"));
                texts.push(ui.plain("de"));
            },
        );
        let layout = compute_layout(&ui.finish(), 80, 0).unwrap();
        assert_eq!(layout.width[texts[0]], 3);
        assert_eq!(layout.x[texts[1]], 3);
        assert_eq!(layout.width[texts[1]], 2);
    }

    #[test]
    fn test_margin_moves_child() {
        let mut ui = Ui::new();
        let mut child = 0;
        ui.box_primitive(BoxProps::default(), |ui| {
            child = ui.text(TextProps {
                spans: vec![span("x")],
                margin: Edges::left(4),
                ..Default::default()
            });
        });
        let layout = compute_layout(&ui.finish(), 20, 0).unwrap();
        assert_eq!(layout.x[child], 4);
        assert_eq!(layout.width[child], 16);
    }
}
