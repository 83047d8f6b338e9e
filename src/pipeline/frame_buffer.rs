//! Painting a laid-out component tree into a FrameBuffer.
//!
//! Walks the tree depth first. Each box fills its background, draws its
//! border, then paints its children clipped to the area inside the border.
//! Text nodes wrap their spans at the node's width and draw at most as many
//! rows as the layout gave them.

use crate::engine::ComponentTree;
use crate::layout::{wrap_spans, ComputedLayout};
use crate::renderer::FrameBuffer;
use crate::types::{ClipRect, ComponentType, Rgba};

/// Paint every component of `tree` into `buffer`.
pub fn paint_tree(buffer: &mut FrameBuffer, tree: &ComponentTree, layout: &ComputedLayout) {
    let Some(root) = tree.root() else {
        return;
    };
    let clip = buffer.bounds();
    paint_component(buffer, tree, layout, root, (0, 0), &clip);
}

/// Absolute rectangle of a component in document coordinates.
pub fn absolute_rect(tree: &ComponentTree, layout: &ComputedLayout, index: usize) -> ClipRect {
    let (_, _, width, height) = layout.get(index);
    let mut x = 0u16;
    let mut y = 0u16;
    let mut current = Some(index);
    while let Some(idx) = current {
        let (rel_x, rel_y, _, _) = layout.get(idx);
        x = x.saturating_add(rel_x);
        y = y.saturating_add(rel_y);
        current = tree.parent(idx);
    }
    ClipRect::new(x, y, width, height)
}

fn paint_component(
    buffer: &mut FrameBuffer,
    tree: &ComponentTree,
    layout: &ComputedLayout,
    index: usize,
    parent_origin: (u16, u16),
    parent_clip: &ClipRect,
) {
    let (rel_x, rel_y, w, h) = layout.get(index);
    if w == 0 || h == 0 {
        return;
    }

    let x = parent_origin.0.saturating_add(rel_x);
    let y = parent_origin.1.saturating_add(rel_y);

    let Some(clip) = ClipRect::new(x, y, w, h).intersect(parent_clip) else {
        return;
    };

    match tree.component_type(index) {
        ComponentType::Text => paint_text(buffer, tree, index, x, y, w, h, &clip),
        ComponentType::Box => {
            let mut border_width = 0;
            if let Some(visual) = tree.visual(index) {
                if let Some(bg) = visual.bg {
                    buffer.fill_rect(x, y, w, h, bg, Some(&clip));
                }
                let color = visual.border_color.unwrap_or(Rgba::TERMINAL_DEFAULT);
                buffer.draw_border(x, y, w, h, visual.border, color, Some(&clip));
                border_width = visual.border.width();
            }

            // Children never draw over the border.
            let inner = ClipRect::new(
                x.saturating_add(border_width),
                y.saturating_add(border_width),
                w.saturating_sub(border_width * 2),
                h.saturating_sub(border_width * 2),
            );
            let Some(inner_clip) = inner.intersect(&clip) else {
                return;
            };

            for &child in tree.children(index) {
                paint_component(buffer, tree, layout, child, (x, y), &inner_clip);
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn paint_text(
    buffer: &mut FrameBuffer,
    tree: &ComponentTree,
    index: usize,
    x: u16,
    y: u16,
    w: u16,
    h: u16,
    clip: &ClipRect,
) {
    let lines = wrap_spans(tree.text(index), w);
    for (row, line) in lines.iter().take(h as usize).enumerate() {
        let line_y = y.saturating_add(row as u16);
        let mut col = x;
        for styled in line {
            let fg = styled.fg.unwrap_or(Rgba::TERMINAL_DEFAULT);
            col = col.saturating_add(buffer.draw_char(col, line_y, styled.ch, fg, None, styled.attrs, Some(clip)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::span;
    use crate::layout::compute_layout;
    use crate::primitives::{BoxProps, TextProps, Ui};
    use crate::types::{Attr, BorderStyle, Dimension, Edges};

    fn paint(ui: Ui, width: u16) -> FrameBuffer {
        let tree = ui.finish();
        let layout = compute_layout(&tree, width, 0).unwrap();
        let mut buffer = FrameBuffer::new(width, layout.content_height);
        paint_tree(&mut buffer, &tree, &layout);
        buffer
    }

    #[test]
    fn test_bordered_box_with_text() {
        let mut ui = Ui::new();
        ui.box_primitive(
            BoxProps {
                border: BorderStyle::Single,
                border_color: Some(Rgba::GRAY),
                padding: Edges::x(1),
                ..Default::default()
            },
            |ui| {
                ui.line([span("hi").fg(Rgba::YELLOW).bold()]);
            },
        );
        let buffer = paint(ui, 8);
        assert_eq!(buffer.to_lines(), vec!["┌──────┐", "│ hi   │", "└──────┘"]);

        let cell = buffer.get(2, 1).unwrap();
        assert_eq!(cell.fg, Rgba::YELLOW);
        assert_eq!(cell.attrs, Attr::BOLD);
        assert_eq!(buffer.get(0, 0).map(|c| c.fg), Some(Rgba::GRAY));
    }

    #[test]
    fn test_text_wraps_to_node_width() {
        let mut ui = Ui::new();
        ui.box_primitive(BoxProps { width: Dimension::Cells(5), ..Default::default() }, |ui| {
            ui.plain("aaa bbb");
        });
        let buffer = paint(ui, 10);
        assert_eq!(buffer.to_lines(), vec!["aaa", "bbb"]);
    }

    #[test]
    fn test_children_clipped_inside_border() {
        let mut ui = Ui::new();
        ui.box_primitive(
            BoxProps {
                border: BorderStyle::Single,
                width: Dimension::Cells(6),
                height: Dimension::Cells(3),
                ..Default::default()
            },
            |ui| {
                ui.text(TextProps {
                    spans: vec![span("abcdefghij")],
                    width: Dimension::Cells(10),
                    shrink: 0.0,
                    ..Default::default()
                });
            },
        );
        let buffer = paint(ui, 12);
        assert_eq!(buffer.to_lines()[1], "│abcd│");
    }

    #[test]
    fn test_background_fill_under_text() {
        let mut ui = Ui::new();
        ui.box_primitive(BoxProps { bg: Some(Rgba::BLUE), width: Dimension::Cells(4), ..Default::default() }, |ui| {
            ui.plain("x");
        });
        let buffer = paint(ui, 4);
        assert_eq!(buffer.get(0, 0).map(|c| c.bg), Some(Rgba::BLUE));
        assert_eq!(buffer.get(3, 0).map(|c| c.bg), Some(Rgba::BLUE));
    }

    #[test]
    fn test_absolute_rect_sums_parents() {
        let mut ui = Ui::new();
        let mut target = 0;
        ui.box_primitive(BoxProps { padding: Edges::all(2), ..Default::default() }, |ui| {
            ui.blank();
            target = ui.plain("here");
        });
        let tree = ui.finish();
        let layout = compute_layout(&tree, 20, 0).unwrap();
        let rect = absolute_rect(&tree, &layout, target);
        assert_eq!((rect.x, rect.y, rect.height), (2, 3, 1));
    }
}
