//! Lesson 3: justify_content on the main axis, align_items on the cross axis.

use spark_signals::{signal, Signal};

use crate::app::{KeyResult, Screen};
use crate::engine::{span, Span};
use crate::primitives::{BoxProps, TextProps, Ui};
use crate::screens::chrome::{colored_key_hints, heading, indented, lesson_header, nav_bar, section, takeaway};
use crate::state::KeyboardEvent;
use crate::types::{AlignItems, BorderStyle, Dimension, Edges, FlexDirection, JustifyContent, Rgba};

pub const DEMO_WIDTH: u16 = 60;
pub const DEMO_HEIGHT: u16 = 10;

pub struct AlignmentLesson {
    direction: Signal<FlexDirection>,
    justify: Signal<JustifyContent>,
    align: Signal<AlignItems>,
}

impl AlignmentLesson {
    pub fn new() -> Self {
        Self {
            direction: signal(FlexDirection::Row),
            justify: signal(JustifyContent::FlexStart),
            align: signal(AlignItems::FlexStart),
        }
    }

    pub fn direction(&self) -> FlexDirection {
        self.direction.get()
    }

    pub fn justify(&self) -> JustifyContent {
        self.justify.get()
    }

    pub fn align(&self) -> AlignItems {
        self.align.get()
    }
}

impl Default for AlignmentLesson {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for AlignmentLesson {
    fn reset(&self) {
        self.direction.set(FlexDirection::Row);
        self.justify.set(JustifyContent::FlexStart);
        self.align.set(AlignItems::FlexStart);
    }

    fn handle_key(&self, event: &KeyboardEvent) -> KeyResult {
        if event.is("j") {
            self.justify.set(self.justify().next());
        } else if event.is("a") {
            self.align.set(self.align().next());
        } else if event.is("d") {
            self.direction.set(self.direction().toggle());
        } else {
            return KeyResult::Ignored;
        }
        KeyResult::Consumed
    }

    fn view(&self, ui: &mut Ui) {
        let direction = self.direction();
        let justify = self.justify();
        let align = self.align();

        ui.box_primitive(BoxProps { padding: Edges::x(1), ..Default::default() }, |ui| {
            lesson_header(ui, Rgba::MAGENTA, "⚖ LESSON 3: Alignment & Justification");

            section(ui, BorderStyle::Rounded, Rgba::CYAN, "📚 Understanding Axes", |ui| {
                ui.text(TextProps {
                    spans: vec![span("Flexbox has two axes:")],
                    margin: Edges::top(1),
                    ..Default::default()
                });
                ui.line([
                    span("• "),
                    span("Main Axis").fg(Rgba::YELLOW).bold(),
                    span(": Direction of flex_direction (row = horizontal, column = vertical)"),
                ]);
                ui.line([span("• "), span("Cross Axis").fg(Rgba::GREEN).bold(), span(": Perpendicular to main axis")]);
                ui.text(TextProps {
                    spans: vec![
                        span("justify_content").fg(Rgba::YELLOW),
                        span(": Positions items along the "),
                        span("MAIN").bold(),
                        span(" axis"),
                    ],
                    margin: Edges::top(1),
                    ..Default::default()
                });
                ui.line([
                    span("align_items").fg(Rgba::GREEN),
                    span(": Positions items along the "),
                    span("CROSS").bold(),
                    span(" axis"),
                ]);
            });

            ui.box_primitive(
                BoxProps {
                    border: BorderStyle::Single,
                    padding: Edges::x(1),
                    margin: Edges::bottom(1),
                    ..Default::default()
                },
                |ui| {
                    ui.line([
                        span("Direction: "),
                        span(direction.as_str()).fg(Rgba::BLUE).bold(),
                        span(" | justify_content: "),
                        span(justify.as_str()).fg(Rgba::YELLOW).bold(),
                        span(" | align_items: "),
                        span(align.as_str()).fg(Rgba::GREEN).bold(),
                    ]);
                    ui.line([
                        span("Press ").dim(),
                        span("D").fg(Rgba::BLUE),
                        span(" to toggle direction, ").dim(),
                        span("J").fg(Rgba::YELLOW),
                        span(" to cycle justify, ").dim(),
                        span("A").fg(Rgba::GREEN),
                        span(" to cycle align").dim(),
                    ]);
                },
            );

            section(
                ui,
                BorderStyle::Single,
                Rgba::GRAY,
                &format!("Current Axes (for flex_direction: {}):", direction.as_str()),
                |ui| {
                    let (main, cross) = if direction.is_row() {
                        ("Main Axis →→→ (horizontal)", "Cross Axis ↓ (vertical)")
                    } else {
                        ("Main Axis ↓↓↓ (vertical)", "Cross Axis → (horizontal)")
                    };
                    ui.text(TextProps {
                        spans: vec![span(main).fg(Rgba::YELLOW)],
                        margin: Edges::top(1),
                        ..Default::default()
                    });
                    ui.line([span(cross).fg(Rgba::GREEN)]);
                },
            );

            section(ui, BorderStyle::Double, Rgba::CYAN, "🎮 Interactive Playground:", |ui| {
                ui.box_primitive(
                    BoxProps {
                        id: Some("alignment-demo".into()),
                        flex_direction: direction,
                        justify_content: justify,
                        align_items: align,
                        width: Dimension::Cells(DEMO_WIDTH),
                        height: Dimension::Cells(DEMO_HEIGHT),
                        border: BorderStyle::Rounded,
                        border_color: Some(Rgba::MAGENTA),
                        margin: Edges::top(1),
                        ..Default::default()
                    },
                    |ui| {
                        for (label, color) in [("A", Rgba::RED), ("B", Rgba::YELLOW), ("C", Rgba::GREEN)] {
                            ui.box_primitive(
                                BoxProps {
                                    bg: Some(color),
                                    padding: Edges::x(2),
                                    ..Default::default()
                                },
                                |ui| {
                                    ui.line([span(label).fg(Rgba::BLACK).bold()]);
                                },
                            );
                        }
                    },
                );

                let note = if direction.is_row() {
                    "Items arranged horizontally. justify_content controls left/right, align_items controls top/bottom."
                } else {
                    "Items arranged vertically. justify_content controls top/bottom, align_items controls left/right."
                };
                ui.text(TextProps {
                    spans: vec![span(note).dim().italic()],
                    margin: Edges::top(1),
                    ..Default::default()
                });
            });

            section(ui, BorderStyle::Single, Rgba::YELLOW, "📏 justify_content Values (Main Axis):", |ui| {
                ui.box_primitive(BoxProps { margin: Edges::top(1), ..Default::default() }, |ui| {
                    for value in JustifyContent::ALL {
                        ui.line(value_line(value.code(), value == justify, justify_description(value)));
                    }
                });
            });

            section(ui, BorderStyle::Single, Rgba::GREEN, "📐 align_items Values (Cross Axis):", |ui| {
                ui.box_primitive(BoxProps { margin: Edges::top(1), ..Default::default() }, |ui| {
                    for value in AlignItems::ALL {
                        ui.line(value_line(value.code(), value == align, align_description(value)));
                    }
                });
            });

            section(ui, BorderStyle::Double, Rgba::BLUE, "🎯 Common Patterns:", |ui| {
                ui.text(TextProps {
                    spans: vec![span("Centering (most common use case!):").bold()],
                    margin: Edges::top(1),
                    ..Default::default()
                });
                pattern_frame(ui, |ui| {
                    ui.box_primitive(
                        BoxProps {
                            id: Some("centering-pattern".into()),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            width: Dimension::Cells(40),
                            height: Dimension::Cells(5),
                            border: BorderStyle::Rounded,
                            border_color: Some(Rgba::CYAN),
                            ..Default::default()
                        },
                        |ui| {
                            heading(ui, Rgba::CYAN, "Perfectly Centered!");
                        },
                    );
                });
                pattern_code(ui, "justify_content: JustifyContent::Center + align_items: AlignItems::Center");

                ui.text(TextProps {
                    spans: vec![span("Space Between (great for headers):").bold()],
                    margin: Edges::top(1),
                    ..Default::default()
                });
                pattern_frame(ui, |ui| {
                    ui.box_primitive(
                        BoxProps {
                            flex_direction: FlexDirection::Row,
                            justify_content: JustifyContent::SpaceBetween,
                            width: Dimension::Cells(40),
                            ..Default::default()
                        },
                        |ui| {
                            ui.line([span("Logo").fg(Rgba::CYAN)]);
                            ui.plain("Menu");
                        },
                    );
                });
                pattern_code(ui, "flex_direction: FlexDirection::Row + justify_content: JustifyContent::SpaceBetween");
            });

            nav_bar(
                ui,
                colored_key_hints(&[
                    ("D", "Direction", Rgba::BLUE),
                    ("J", "Justify", Rgba::YELLOW),
                    ("A", "Align", Rgba::GREEN),
                    ("M", "Menu", Rgba::WHITE),
                ]),
            );

            takeaway(
                ui,
                Rgba::GREEN,
                "✅ Remember: justify_content = main axis, align_items = cross axis. Master these for perfect layouts!",
            );
        });
    }
}

fn justify_description(value: JustifyContent) -> &'static str {
    match value {
        JustifyContent::FlexStart => " (default) - Pack items at the start",
        JustifyContent::Center => " - Pack items in the center",
        JustifyContent::FlexEnd => " - Pack items at the end",
        JustifyContent::SpaceBetween => " - Distribute with space between items",
        JustifyContent::SpaceAround => " - Distribute with space around items",
    }
}

fn align_description(value: AlignItems) -> &'static str {
    match value {
        AlignItems::FlexStart => " - Align at the start of the cross axis",
        AlignItems::Center => " - Center items along the cross axis",
        AlignItems::FlexEnd => " - Align at the end of the cross axis",
        AlignItems::Stretch => " (default) - Stretch to fill the container",
    }
}

/// Value name highlighted in cyan when it is the active one.
fn value_line(name: &str, active: bool, description: &str) -> Vec<Span> {
    let color = if active { Rgba::CYAN } else { Rgba::WHITE };
    let marker = if active { "▶ " } else { "  " };
    vec![span(format!("{marker}{name}")).fg(color).bold(), span(description)]
}

fn pattern_frame(ui: &mut Ui, body: impl FnOnce(&mut Ui)) {
    ui.box_primitive(
        BoxProps {
            border: BorderStyle::Single,
            padding: Edges::x(1),
            margin: Edges::top(1),
            align_items: AlignItems::FlexStart,
            ..Default::default()
        },
        body,
    );
}

fn pattern_code(ui: &mut Ui, code: &str) {
    indented(ui, 2, |ui| {
        ui.line([span(code).dim()]);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::compute_layout;

    fn press(lesson: &AlignmentLesson, key: &str) {
        assert_eq!(lesson.handle_key(&KeyboardEvent::new(key)), KeyResult::Consumed);
    }

    #[test]
    fn test_initial_state() {
        let lesson = AlignmentLesson::new();
        assert_eq!(lesson.direction(), FlexDirection::Row);
        assert_eq!(lesson.justify(), JustifyContent::FlexStart);
        assert_eq!(lesson.align(), AlignItems::FlexStart);
    }

    #[test]
    fn test_justify_cycles_and_wraps() {
        let lesson = AlignmentLesson::new();
        let mut seen = Vec::new();
        for _ in 0..5 {
            press(&lesson, "j");
            seen.push(lesson.justify());
        }
        assert_eq!(
            seen,
            vec![
                JustifyContent::Center,
                JustifyContent::FlexEnd,
                JustifyContent::SpaceBetween,
                JustifyContent::SpaceAround,
                JustifyContent::FlexStart,
            ]
        );
    }

    #[test]
    fn test_align_cycles_and_direction_toggles() {
        let lesson = AlignmentLesson::new();
        press(&lesson, "a");
        press(&lesson, "a");
        press(&lesson, "a");
        assert_eq!(lesson.align(), AlignItems::Stretch);
        press(&lesson, "a");
        assert_eq!(lesson.align(), AlignItems::FlexStart);

        press(&lesson, "d");
        assert_eq!(lesson.direction(), FlexDirection::Column);
        press(&lesson, "d");
        assert_eq!(lesson.direction(), FlexDirection::Row);
    }

    #[test]
    fn test_reset() {
        let lesson = AlignmentLesson::new();
        press(&lesson, "j");
        press(&lesson, "d");
        lesson.reset();
        assert_eq!(lesson.justify(), JustifyContent::FlexStart);
        assert_eq!(lesson.direction(), FlexDirection::Row);
        assert_eq!(lesson.handle_key(&KeyboardEvent::new("z")), KeyResult::Ignored);
    }

    #[test]
    fn test_demo_container_packs_items_at_end() {
        let lesson = AlignmentLesson::new();
        press(&lesson, "j");
        press(&lesson, "j");
        assert_eq!(lesson.justify(), JustifyContent::FlexEnd);
        let mut ui = Ui::new();
        lesson.view(&mut ui);
        let tree = ui.finish();
        let layout = compute_layout(&tree, 100, 0).unwrap();

        let demo = tree.index_of("alignment-demo").unwrap();
        let (_, _, width, height) = layout.get(demo);
        assert_eq!((width, height), (DEMO_WIDTH, DEMO_HEIGHT));

        // Three 5-wide items pushed to the end of the 58 columns inside the border.
        let first = tree.children(demo)[0];
        let (x, y, _, item_height) = layout.get(first);
        assert_eq!(x, 1 + 58 - 15);
        assert_eq!(y, 1);
        assert_eq!(item_height, 1);
    }
}
