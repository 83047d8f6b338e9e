//! Lesson 2: the main axis, row versus column.

use spark_signals::{signal, Signal};

use crate::app::{KeyResult, Screen};
use crate::engine::span;
use crate::primitives::{BoxProps, TextProps, Ui};
use crate::screens::chrome::{
    bullets, caption, colored_key_hints, indented, label_box, lesson_header, nav_bar, row, section,
    takeaway,
};
use crate::state::KeyboardEvent;
use crate::types::{BorderStyle, Edges, FlexDirection, Rgba};

pub struct FlexDirectionLesson {
    direction: Signal<FlexDirection>,
}

impl FlexDirectionLesson {
    pub fn new() -> Self {
        Self { direction: signal(FlexDirection::Column) }
    }

    pub fn direction(&self) -> FlexDirection {
        self.direction.get()
    }

    fn set_direction(&self, direction: FlexDirection) {
        if self.direction.get() != direction {
            self.direction.set(direction);
        }
    }
}

impl Default for FlexDirectionLesson {
    fn default() -> Self {
        Self::new()
    }
}

fn direction_color(direction: FlexDirection) -> Rgba {
    if direction.is_row() { Rgba::BLUE } else { Rgba::GREEN }
}

impl Screen for FlexDirectionLesson {
    fn reset(&self) {
        self.set_direction(FlexDirection::Column);
    }

    fn handle_key(&self, event: &KeyboardEvent) -> KeyResult {
        if event.is("c") {
            self.set_direction(FlexDirection::Column);
            KeyResult::Consumed
        } else if event.is("r") {
            self.set_direction(FlexDirection::Row);
            KeyResult::Consumed
        } else {
            KeyResult::Ignored
        }
    }

    fn view(&self, ui: &mut Ui) {
        let direction = self.direction();
        let color = direction_color(direction);

        ui.box_primitive(BoxProps { padding: Edges::x(1), ..Default::default() }, |ui| {
            lesson_header(ui, Rgba::BLUE, "↔ LESSON 2: Flex Direction - Row vs Column");

            section(ui, BorderStyle::Rounded, Rgba::CYAN, "📚 Theory: The Main Axis", |ui| {
                ui.text(TextProps {
                    spans: vec![
                        span("flex_direction").fg(Rgba::YELLOW),
                        span(" defines the main axis - the direction children flow."),
                    ],
                    margin: Edges::y(1),
                    ..Default::default()
                });
                ui.line([span("Two values:").bold()]);
                ui.line([
                    span("• "),
                    span("Column").fg(Rgba::GREEN),
                    span(" (default) - Vertical stack (top to bottom)"),
                ]);
                ui.line([span("• "), span("Row").fg(Rgba::BLUE), span(" - Horizontal line (left to right)")]);
            });

            ui.text(TextProps {
                spans: vec![
                    span("Current mode: "),
                    span(direction.as_str()).fg(color).bold(),
                    span(" (Press ").dim(),
                    span("C").fg(Rgba::GREEN),
                    span(" for column, ").dim(),
                    span("R").fg(Rgba::BLUE),
                    span(" for row)").dim(),
                ],
                margin: Edges::bottom(1),
                ..Default::default()
            });

            section(
                ui,
                BorderStyle::Single,
                Rgba::TERMINAL_DEFAULT,
                "Live Demo - Same components, different flex_direction:",
                |ui| {
                    caption(ui, &format!("flex_direction: {}", direction.code()));
                    ui.box_primitive(
                        BoxProps {
                            id: Some("direction-demo".into()),
                            flex_direction: direction,
                            border: BorderStyle::Rounded,
                            border_color: Some(color),
                            padding: Edges::all(1),
                            margin: Edges::top(1),
                            ..Default::default()
                        },
                        |ui| {
                            for (label, box_color) in [("Box 1", Rgba::RED), ("Box 2", Rgba::YELLOW), ("Box 3", Rgba::GREEN)] {
                                label_box(ui, label, box_color, BorderStyle::Single, Edges::x(1));
                            }
                        },
                    );
                    let note = if direction.is_row() {
                        "→ Boxes line up horizontally because flex_direction is Row"
                    } else {
                        "↓ Boxes stack vertically because flex_direction is Column"
                    };
                    ui.text(TextProps {
                        spans: vec![span(note).dim().italic()],
                        margin: Edges::top(1),
                        ..Default::default()
                    });
                },
            );

            section(ui, BorderStyle::Single, Rgba::MAGENTA, "💻 The Code:", |ui| {
                for (title, title_color, variant) in
                    [("Column Layout (Vertical):", Rgba::GREEN, "Column"), ("Row Layout (Horizontal):", Rgba::BLUE, "Row")]
                {
                    ui.text(TextProps {
                        spans: vec![span(title).fg(title_color)],
                        margin: Edges::top(1),
                        ..Default::default()
                    });
                    indented(ui, 2, |ui| {
                        ui.line([span(format!(
                            "ui.box_primitive(BoxProps {{ flex_direction: FlexDirection::{variant}, ..Default::default() }}, |ui| {{"
                        ))
                        .dim()]);
                        for item in 1..=3 {
                            ui.line([span(format!("    ui.plain(\"Item {item}\");")).dim()]);
                        }
                        ui.line([span("});").dim()]);
                    });
                }
            });

            section(ui, BorderStyle::Single, Rgba::YELLOW, "🌍 When to Use Each:", |ui| {
                ui.text(TextProps {
                    spans: vec![span("Column").fg(Rgba::GREEN).bold(), span(" (Vertical) is great for:")],
                    margin: Edges::top(1),
                    ..Default::default()
                });
                bullets(ui, &["Lists and menus", "Forms (fields stacked)", "Chat messages", "Article content"]);
                ui.text(TextProps {
                    spans: vec![span("Row").fg(Rgba::BLUE).bold(), span(" (Horizontal) is great for:")],
                    margin: Edges::top(1),
                    ..Default::default()
                });
                bullets(ui, &["Navigation bars", "Button groups", "Status indicators", "Side-by-side content"]);
            });

            section(ui, BorderStyle::Double, Rgba::CYAN, "🎨 Practical Examples:", |ui| {
                caption(ui, "Example 1: Navigation Bar (Row)");
                example_frame(ui, |ui| {
                    row(ui, |ui| {
                        ui.line([span("[Home]").fg(Rgba::CYAN).bold()]);
                        ui.plain(" [About] [Contact]");
                        ui.spacer(BoxProps { grow: 1.0, ..Default::default() });
                        ui.plain("[Logout]");
                    });
                });

                caption(ui, "Example 2: Menu List (Column)");
                example_frame(ui, |ui| {
                    ui.line([span("▶ Option 1").fg(Rgba::CYAN).bold()]);
                    ui.plain("  Option 2");
                    ui.plain("  Option 3");
                });

                caption(ui, "Example 3: Mixed (Column contains Rows)");
                example_frame(ui, |ui| {
                    ui.line([span("User Profile:").bold()]);
                    ui.box_primitive(
                        BoxProps {
                            flex_direction: FlexDirection::Row,
                            margin: Edges::top(1),
                            ..Default::default()
                        },
                        |ui| {
                            ui.plain("Name: ");
                            ui.line([span("John Doe").fg(Rgba::CYAN)]);
                        },
                    );
                    row(ui, |ui| {
                        ui.plain("Status: ");
                        ui.line([span("Online").fg(Rgba::GREEN)]);
                    });
                });
            });

            nav_bar(
                ui,
                colored_key_hints(&[
                    ("C", "Column mode", Rgba::GREEN),
                    ("R", "Row mode", Rgba::BLUE),
                    ("M", "Menu", Rgba::YELLOW),
                ]),
            );

            takeaway(ui, Rgba::GREEN, "✅ Key Takeaway: flex_direction is your first decision when building layouts!");
        });
    }
}

fn example_frame(ui: &mut Ui, body: impl FnOnce(&mut Ui)) {
    ui.box_primitive(
        BoxProps {
            border: BorderStyle::Single,
            padding: Edges::x(1),
            ..Default::default()
        },
        body,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_and_r_switch_direction() {
        let lesson = FlexDirectionLesson::new();
        assert_eq!(lesson.direction(), FlexDirection::Column);

        assert_eq!(lesson.handle_key(&KeyboardEvent::new("r")), KeyResult::Consumed);
        assert_eq!(lesson.direction(), FlexDirection::Row);

        // Pressing again keeps the mode.
        lesson.handle_key(&KeyboardEvent::new("r"));
        assert_eq!(lesson.direction(), FlexDirection::Row);

        lesson.handle_key(&KeyboardEvent::new("c"));
        assert_eq!(lesson.direction(), FlexDirection::Column);
    }

    #[test]
    fn test_reset_and_pass_through() {
        let lesson = FlexDirectionLesson::new();
        lesson.handle_key(&KeyboardEvent::new("r"));
        lesson.reset();
        assert_eq!(lesson.direction(), FlexDirection::Column);
        assert_eq!(lesson.handle_key(&KeyboardEvent::new("x")), KeyResult::Ignored);
    }

    #[test]
    fn test_demo_follows_direction() {
        let lesson = FlexDirectionLesson::new();
        lesson.handle_key(&KeyboardEvent::new("r"));
        let mut ui = Ui::new();
        lesson.view(&mut ui);
        let tree = ui.finish();
        let demo = tree.index_of("direction-demo").unwrap();
        assert_eq!(tree.flex_node(demo).map(|n| n.flex_direction), Some(FlexDirection::Row));
        assert_eq!(tree.children(demo).len(), 3);
    }
}
