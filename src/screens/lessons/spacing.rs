//! Lesson 4: padding, margin and fixed dimensions.

use spark_signals::{signal, Signal};

use crate::app::{KeyResult, Screen};
use crate::engine::span;
use crate::primitives::{BoxProps, TextProps, Ui};
use crate::screens::chrome::{caption, colored_key_hints, heading, lesson_header, nav_bar, section, takeaway};
use crate::state::KeyboardEvent;
use crate::types::{AlignItems, BorderStyle, Dimension, Edges, Rgba};

pub const MAX_SPACING: u16 = 5;

const BOX_MODEL: [&str; 9] = [
    "┌─────────────── margin ───────────────┐",
    "│  ┌──────────── border ────────────┐  │",
    "│  │  ┌──────── padding ─────────┐  │  │",
    "│  │  │                          │  │  │",
    "│  │  │    Content (text/box)    │  │  │",
    "│  │  │                          │  │  │",
    "│  │  └──────────────────────────┘  │  │",
    "│  └────────────────────────────────┘  │",
    "└──────────────────────────────────────┘",
];

pub struct SpacingLesson {
    padding: Signal<u16>,
    margin: Signal<u16>,
}

impl SpacingLesson {
    pub fn new() -> Self {
        Self {
            padding: signal(1),
            margin: signal(1),
        }
    }

    pub fn padding(&self) -> u16 {
        self.padding.get()
    }

    pub fn margin(&self) -> u16 {
        self.margin.get()
    }
}

impl Default for SpacingLesson {
    fn default() -> Self {
        Self::new()
    }
}

/// Set `value` to `next` if it changed. Used for the clamped counters.
fn step(value: &Signal<u16>, next: u16) {
    if value.get() != next {
        value.set(next);
    }
}

pub fn padding_description(padding: u16) -> String {
    match padding {
        0 => "(No space - content touches border)".to_string(),
        1 => "(1 space around content)".to_string(),
        n => format!("({n} spaces around content)"),
    }
}

pub fn margin_description(margin: u16) -> String {
    match margin {
        0 => "(No space - touches container)".to_string(),
        1 => "(1 space from container)".to_string(),
        n => format!("({n} spaces from container)"),
    }
}

impl Screen for SpacingLesson {
    fn reset(&self) {
        step(&self.padding, 1);
        step(&self.margin, 1);
    }

    fn handle_key(&self, event: &KeyboardEvent) -> KeyResult {
        let padding = self.padding();
        let margin = self.margin();
        if event.is("+") {
            step(&self.padding, (padding + 1).min(MAX_SPACING));
        } else if event.is("-") {
            step(&self.padding, padding.saturating_sub(1));
        } else if event.is("]") {
            step(&self.margin, (margin + 1).min(MAX_SPACING));
        } else if event.is("[") {
            step(&self.margin, margin.saturating_sub(1));
        } else {
            return KeyResult::Ignored;
        }
        KeyResult::Consumed
    }

    fn view(&self, ui: &mut Ui) {
        let padding = self.padding();
        let margin = self.margin();

        ui.box_primitive(BoxProps { padding: Edges::x(1), ..Default::default() }, |ui| {
            lesson_header(ui, Rgba::YELLOW, "📏 LESSON 4: Spacing & Sizing");

            section(ui, BorderStyle::Rounded, Rgba::CYAN, "📚 The Box Model in the Terminal", |ui| {
                ui.text(TextProps {
                    spans: vec![span("Just like CSS, taffy uses a box model:")],
                    margin: Edges::y(1),
                    ..Default::default()
                });
                for line in BOX_MODEL {
                    ui.line([span(line).dim()]);
                }
                ui.text(TextProps {
                    spans: vec![
                        span("margin").fg(Rgba::YELLOW),
                        span(": Space OUTSIDE (pushes other components away)"),
                    ],
                    margin: Edges::top(1),
                    ..Default::default()
                });
                ui.line([
                    span("padding").fg(Rgba::GREEN),
                    span(": Space INSIDE (pushes content away from the border)"),
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
                        span("Padding: "),
                        span(padding.to_string()).fg(Rgba::GREEN).bold(),
                        span(" (Press "),
                        span("+").fg(Rgba::GREEN),
                        span(" or "),
                        span("-").fg(Rgba::GREEN),
                        span(" to adjust)  Margin: "),
                        span(margin.to_string()).fg(Rgba::YELLOW).bold(),
                        span(" (Press "),
                        span("[").fg(Rgba::YELLOW),
                        span(" or "),
                        span("]").fg(Rgba::YELLOW),
                        span(" to adjust)"),
                    ]);
                },
            );

            // Padding demo
            ui.box_primitive(BoxProps { margin: Edges::bottom(1), ..Default::default() }, |ui| {
                heading(ui, Rgba::GREEN, "🟢 Padding Demo (space INSIDE):");
                ui.text(TextProps {
                    spans: vec![span("Padding adds space between the border and content").dim()],
                    margin: Edges::bottom(1),
                    ..Default::default()
                });
                ui.box_primitive(
                    BoxProps {
                        border: BorderStyle::Single,
                        border_color: Some(Rgba::RED),
                        ..Default::default()
                    },
                    |ui| {
                        ui.box_primitive(
                            BoxProps {
                                id: Some("padding-demo".into()),
                                border: BorderStyle::Rounded,
                                border_color: Some(Rgba::GREEN),
                                padding: Edges::all(padding),
                                ..Default::default()
                            },
                            |ui| {
                                ui.plain("Content stays inside, border moves out");
                            },
                        );
                    },
                );
                ui.text(TextProps {
                    spans: vec![
                        span("Current: ").dim(),
                        span(format!("padding: Edges::all({padding})")).fg(Rgba::GREEN),
                        span(format!(" {}", padding_description(padding))).dim(),
                    ],
                    margin: Edges::top(1),
                    ..Default::default()
                });
            });

            // Margin demo
            ui.box_primitive(BoxProps { margin: Edges::bottom(1), ..Default::default() }, |ui| {
                heading(ui, Rgba::YELLOW, "🟡 Margin Demo (space OUTSIDE):");
                ui.text(TextProps {
                    spans: vec![span("Margin adds space between components").dim()],
                    margin: Edges::bottom(1),
                    ..Default::default()
                });
                ui.box_primitive(
                    BoxProps {
                        border: BorderStyle::Single,
                        border_color: Some(Rgba::RED),
                        padding: Edges::x(1),
                        ..Default::default()
                    },
                    |ui| {
                        ui.line([span("Red container (outer boundary)").dim()]);
                        ui.box_primitive(
                            BoxProps {
                                id: Some("margin-demo".into()),
                                border: BorderStyle::Rounded,
                                border_color: Some(Rgba::YELLOW),
                                padding: Edges::x(1),
                                margin: Edges::all(margin),
                                ..Default::default()
                            },
                            |ui| {
                                ui.plain("Component pushed away from edges");
                            },
                        );
                    },
                );
                ui.text(TextProps {
                    spans: vec![
                        span("Current: ").dim(),
                        span(format!("margin: Edges::all({margin})")).fg(Rgba::YELLOW),
                        span(format!(" {}", margin_description(margin))).dim(),
                    ],
                    margin: Edges::top(1),
                    ..Default::default()
                });
            });

            section(ui, BorderStyle::Single, Rgba::MAGENTA, "📍 Directional Spacing:", |ui| {
                ui.text(TextProps {
                    spans: vec![span("Edges has a constructor for every direction:")],
                    margin: Edges::top(1),
                    ..Default::default()
                });
                ui.box_primitive(BoxProps { margin: Edges { top: 1, left: 2, ..Edges::ZERO }, ..Default::default() }, |ui| {
                    for line in [
                        "• Edges::top(n)",
                        "• Edges::bottom(n)",
                        "• Edges::left(n)",
                        "• Edges::right(n)",
                        "• Edges::x(n) (left and right only)",
                        "• Edges::y(n) (top and bottom only)",
                        "• Edges::all(n) and Edges::xy(x, y)",
                    ] {
                        ui.line([span(line).fg(Rgba::CYAN)]);
                    }
                });

                ui.text(TextProps {
                    spans: vec![span("Examples:").bold()],
                    margin: Edges::top(1),
                    ..Default::default()
                });
                ui.box_primitive(
                    BoxProps {
                        margin: Edges { top: 1, left: 2, ..Edges::ZERO },
                        align_items: AlignItems::FlexStart,
                        ..Default::default()
                    },
                    |ui| {
                        example(ui, Rgba::BLUE, Edges::left(3), Edges::ZERO, "padding: Edges::left(3)");
                        example(ui, Rgba::GREEN, Edges::ZERO, Edges::top(2), "margin: Edges::top(2)");
                        example(ui, Rgba::YELLOW, Edges::x(4), Edges::top(1), "padding: Edges::x(4)");
                    },
                );
            });

            section(ui, BorderStyle::Double, Rgba::BLUE, "📐 Fixed Dimensions:", |ui| {
                ui.box_primitive(
                    BoxProps {
                        margin: Edges::top(1),
                        align_items: AlignItems::FlexStart,
                        ..Default::default()
                    },
                    |ui| {
                        ui.plain("Control exact sizes with width and height:");

                        caption(ui, "width: Dimension::Cells(20), height: Dimension::Cells(5):");
                        sized_box(
                            ui,
                            "fixed-size-demo",
                            Rgba::CYAN,
                            BoxProps {
                                width: Dimension::Cells(20),
                                height: Dimension::Cells(5),
                                ..Default::default()
                            },
                            "Fixed size box",
                        );

                        caption(ui, "min_width: Dimension::Cells(30) (box grows if content is larger):");
                        sized_box(
                            ui,
                            "min-width-demo",
                            Rgba::GREEN,
                            BoxProps { min_width: Dimension::Cells(30), ..Default::default() },
                            "This has a minimum width",
                        );

                        caption(ui, "max_width: Dimension::Cells(25) (content wraps if too wide):");
                        sized_box(
                            ui,
                            "max-width-demo",
                            Rgba::YELLOW,
                            BoxProps { max_width: Dimension::Cells(25), ..Default::default() },
                            "This has maximum width and might wrap",
                        );
                    },
                );
            });

            section(ui, BorderStyle::Single, Rgba::GREEN, "🎯 Common Patterns:", |ui| {
                ui.text(TextProps {
                    spans: vec![span("1. Card with spacing:").bold()],
                    margin: Edges::top(1),
                    ..Default::default()
                });
                ui.box_primitive(
                    BoxProps {
                        border: BorderStyle::Rounded,
                        border_color: Some(Rgba::CYAN),
                        padding: Edges::xy(2, 1),
                        margin: Edges { top: 1, left: 2, right: 2, bottom: 0 },
                        ..Default::default()
                    },
                    |ui| {
                        ui.line([span("Card Title").bold()]);
                        ui.plain("Content with nice spacing");
                    },
                );
                pattern_note(ui, "margin: Edges::x(2), padding: Edges::xy(2, 1)");

                ui.text(TextProps {
                    spans: vec![span("2. Separated sections:").bold()],
                    margin: Edges::top(1),
                    ..Default::default()
                });
                for n in 1..=3 {
                    ui.box_primitive(
                        BoxProps {
                            border: BorderStyle::Single,
                            padding: Edges::x(1),
                            margin: Edges::top(if n == 1 { 0 } else { 1 }),
                            ..Default::default()
                        },
                        |ui| {
                            ui.plain(format!("Section {n}"));
                        },
                    );
                }
                pattern_note(ui, "margin: Edges::top(1) between sections");

                ui.text(TextProps {
                    spans: vec![span("3. Indented content:").bold()],
                    margin: Edges::top(1),
                    ..Default::default()
                });
                ui.plain("Parent Item");
                for child in ["Child item (indented)", "Another child"] {
                    ui.text(TextProps {
                        spans: vec![span(child)],
                        margin: Edges::left(3),
                        ..Default::default()
                    });
                }
                pattern_note(ui, "margin: Edges::left(3) for indentation");
            });

            nav_bar(
                ui,
                colored_key_hints(&[
                    ("+ -", "Adjust padding", Rgba::GREEN),
                    ("[ ]", "Adjust margin", Rgba::YELLOW),
                    ("M", "Menu", Rgba::WHITE),
                ]),
            );

            takeaway(
                ui,
                Rgba::GREEN,
                "✅ Remember: padding = inside spacing, margin = outside spacing. Use them to create breathing room!",
            );
        });
    }
}

fn example(ui: &mut Ui, color: Rgba, padding: Edges, margin: Edges, label: &str) {
    ui.box_primitive(
        BoxProps {
            border: BorderStyle::Single,
            border_color: Some(color),
            padding,
            margin,
            ..Default::default()
        },
        |ui| {
            ui.plain(label);
        },
    );
}

fn sized_box(ui: &mut Ui, id: &str, color: Rgba, props: BoxProps, label: &str) {
    ui.box_primitive(
        BoxProps {
            id: Some(id.into()),
            border: BorderStyle::Rounded,
            border_color: Some(color),
            padding: Edges::x(1),
            margin: Edges::top(1),
            ..props
        },
        |ui| {
            ui.plain(label);
        },
    );
}

fn pattern_note(ui: &mut Ui, text: &str) {
    ui.text(TextProps {
        spans: vec![span(text).dim()],
        margin: Edges::left(2),
        ..Default::default()
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::compute_layout;

    fn press(lesson: &SpacingLesson, key: &str) {
        assert_eq!(lesson.handle_key(&KeyboardEvent::new(key)), KeyResult::Consumed);
    }

    #[test]
    fn test_padding_clamps() {
        let lesson = SpacingLesson::new();
        for _ in 0..10 {
            press(&lesson, "+");
        }
        assert_eq!(lesson.padding(), MAX_SPACING);
        for _ in 0..10 {
            press(&lesson, "-");
        }
        assert_eq!(lesson.padding(), 0);
        assert_eq!(lesson.margin(), 1);
    }

    #[test]
    fn test_margin_clamps_and_reset() {
        let lesson = SpacingLesson::new();
        press(&lesson, "[");
        press(&lesson, "[");
        assert_eq!(lesson.margin(), 0);
        for _ in 0..7 {
            press(&lesson, "]");
        }
        assert_eq!(lesson.margin(), MAX_SPACING);

        lesson.reset();
        assert_eq!((lesson.padding(), lesson.margin()), (1, 1));
        assert_eq!(lesson.handle_key(&KeyboardEvent::new("p")), KeyResult::Ignored);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(padding_description(0), "(No space - content touches border)");
        assert_eq!(padding_description(1), "(1 space around content)");
        assert_eq!(padding_description(4), "(4 spaces around content)");
        assert_eq!(margin_description(0), "(No space - touches container)");
        assert_eq!(margin_description(3), "(3 spaces from container)");
    }

    #[test]
    fn test_sized_boxes_respect_constraints() {
        let lesson = SpacingLesson::new();
        let mut ui = Ui::new();
        lesson.view(&mut ui);
        let tree = ui.finish();
        let layout = compute_layout(&tree, 100, 0).unwrap();

        let size = |id: &str| {
            let (_, _, w, h) = layout.get(tree.index_of(id).unwrap());
            (w, h)
        };
        assert_eq!(size("fixed-size-demo"), (20, 5));
        assert_eq!(size("min-width-demo").0, 30);
        assert!(size("max-width-demo").0 <= 25);
        // "This has maximum width and might wrap" needs two rows at 21 columns.
        assert_eq!(size("max-width-demo").1, 4);
    }

    #[test]
    fn test_padding_demo_grows_with_padding() {
        let lesson = SpacingLesson::new();
        let height_of_demo = |lesson: &SpacingLesson| {
            let mut ui = Ui::new();
            lesson.view(&mut ui);
            let tree = ui.finish();
            let layout = compute_layout(&tree, 100, 0).unwrap();
            layout.get(tree.index_of("padding-demo").unwrap()).3
        };
        assert_eq!(height_of_demo(&lesson), 5);
        press(&lesson, "+");
        assert_eq!(height_of_demo(&lesson), 7);
    }
}
