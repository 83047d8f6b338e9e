//! Box Primitive - Container component with flexbox layout.

use crate::engine::{FlexNode, Visual};
use crate::types::ComponentType;

use super::types::BoxProps;
use super::Ui;

impl Ui {
    /// Create a box container component.
    ///
    /// Boxes are the building blocks of layouts. They can:
    /// - Have borders and backgrounds
    /// - Use flexbox for child layout
    /// - Contain other components as children
    ///
    /// `children` runs with this box as the current parent. Returns the
    /// component index.
    pub fn box_primitive(&mut self, props: BoxProps, children: impl FnOnce(&mut Ui)) -> usize {
        let BoxProps {
            id,
            flex_direction,
            justify_content,
            align_items,
            gap,
            grow,
            shrink,
            basis,
            width,
            height,
            min_width,
            min_height,
            max_width,
            max_height,
            margin,
            padding,
            border,
            border_color,
            bg,
        } = props;

        let flex = FlexNode {
            flex_direction,
            justify_content,
            align_items,
            gap,
            flex_grow: grow,
            flex_shrink: shrink,
            flex_basis: basis,
            width,
            height,
            min_width,
            min_height,
            max_width,
            max_height,
            margin,
            padding,
        };
        let visual = Visual { border, border_color, bg };

        let parent = self.current_parent();
        let index = self.tree.allocate(parent, ComponentType::Box, flex, visual, Vec::new());
        if let Some(id) = id {
            self.tree.set_id(index, id);
        }

        self.push_parent_context(index);
        children(self);
        self.pop_parent_context();

        index
    }

    /// A childless box that only takes up space, e.g. a `grow: 1.0` spacer.
    pub fn spacer(&mut self, props: BoxProps) -> usize {
        self.box_primitive(props, |_| {})
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::span;
    use crate::primitives::{BoxProps, Ui};
    use crate::types::{BorderStyle, ComponentType, FlexDirection};

    #[test]
    fn test_nesting_follows_closures() {
        let mut ui = Ui::new();
        let mut inner = 0;
        let root = ui.box_primitive(BoxProps::default(), |ui| {
            inner = ui.box_primitive(
                BoxProps {
                    id: Some("inner".into()),
                    flex_direction: FlexDirection::Row,
                    border: BorderStyle::Rounded,
                    ..Default::default()
                },
                |ui| {
                    ui.line([span("x")]);
                },
            );
            ui.line([span("after")]);
        });
        let tree = ui.finish();

        assert_eq!(tree.children(root).len(), 2);
        assert_eq!(tree.parent(inner), Some(root));
        assert_eq!(tree.index_of("inner"), Some(inner));
        assert_eq!(tree.visual(inner).map(|v| v.border), Some(BorderStyle::Rounded));
        assert_eq!(tree.component_type(tree.children(inner)[0]), ComponentType::Text);
        assert_eq!(tree.flex_node(inner).map(|f| f.flex_direction), Some(FlexDirection::Row));
    }

    #[test]
    fn test_box_defaults_shrink_one() {
        let mut ui = Ui::new();
        let root = ui.spacer(BoxProps::default());
        let tree = ui.finish();
        assert_eq!(tree.flex_node(root).map(|f| f.flex_shrink), Some(1.0));
    }
}
