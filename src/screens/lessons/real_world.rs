//! Lesson 6: complete layouts built from the earlier pieces.
//!
//! One example is shown at a time; `n` and `p` step through them and wrap
//! at both ends. Every example is a live layout followed by the builder
//! calls that produce it.

use spark_signals::{signal, Signal};

use crate::app::{KeyResult, Screen};
use crate::engine::span;
use crate::primitives::{BoxProps, TextProps, Ui};
use crate::screens::chrome::{code_box, colored_key_hints, heading, lesson_header, nav_bar, takeaway};
use crate::state::KeyboardEvent;
use crate::types::{AlignItems, BorderStyle, Dimension, Edges, FlexDirection, JustifyContent, Rgba};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Example {
    #[default]
    Header,
    Sidebar,
    Grid,
    Form,
    Modal,
    Dashboard,
}

impl Example {
    pub const ALL: [Example; 6] = [
        Example::Header,
        Example::Sidebar,
        Example::Grid,
        Example::Form,
        Example::Modal,
        Example::Dashboard,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|&e| e == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Example::Header => "header",
            Example::Sidebar => "sidebar",
            Example::Grid => "grid",
            Example::Form => "form",
            Example::Modal => "modal",
            Example::Dashboard => "dashboard",
        }
    }
}

pub struct RealWorldExamples {
    example: Signal<Example>,
}

impl RealWorldExamples {
    pub fn new() -> Self {
        Self { example: signal(Example::Header) }
    }

    pub fn example(&self) -> Example {
        self.example.get()
    }
}

impl Default for RealWorldExamples {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for RealWorldExamples {
    fn reset(&self) {
        if self.example.get() != Example::Header {
            self.example.set(Example::Header);
        }
    }

    fn handle_key(&self, event: &KeyboardEvent) -> KeyResult {
        let current = self.example.get();
        if event.is("n") {
            self.example.set(current.next());
        } else if event.is("p") {
            self.example.set(current.prev());
        } else {
            return KeyResult::Ignored;
        }
        KeyResult::Consumed
    }

    fn view(&self, ui: &mut Ui) {
        let example = self.example();

        ui.box_primitive(BoxProps { padding: Edges::x(1), ..Default::default() }, |ui| {
            lesson_header(ui, Rgba::CYAN, "🌍 LESSON 6: Real World Layout Patterns");

            ui.box_primitive(
                BoxProps {
                    border: BorderStyle::Single,
                    padding: Edges::x(1),
                    margin: Edges::bottom(1),
                    ..Default::default()
                },
                |ui| {
                    ui.line([
                        span("Viewing: "),
                        span(example.as_str().to_uppercase()).fg(Rgba::YELLOW).bold(),
                        span(format!("  ({}/{}) ", example.index() + 1, Example::ALL.len())).dim(),
                        span("(Press ").dim(),
                        span("N").fg(Rgba::CYAN),
                        span("ext or ").dim(),
                        span("P").fg(Rgba::CYAN),
                        span("rev)").dim(),
                    ]);
                },
            );

            ui.box_primitive(BoxProps { id: Some("example".into()), ..Default::default() }, |ui| match example {
                Example::Header => header_footer(ui),
                Example::Sidebar => sidebar(ui),
                Example::Grid => card_grid(ui),
                Example::Form => form(ui),
                Example::Modal => modal(ui),
                Example::Dashboard => dashboard(ui),
            });

            nav_bar(
                ui,
                colored_key_hints(&[
                    ("N", "Next example", Rgba::CYAN),
                    ("P", "Previous", Rgba::CYAN),
                    ("M", "Menu", Rgba::YELLOW),
                ]),
            );

            takeaway(
                ui,
                Rgba::GREEN,
                "✅ These patterns combine flex_direction, grow and alignment to build real applications!",
            );
        });
    }
}

// =============================================================================
// Examples
// =============================================================================

fn intro(ui: &mut Ui, title: &str, subtitle: &str) {
    heading(ui, Rgba::YELLOW, title);
    ui.line([span(subtitle).dim()]);
}

fn listing(ui: &mut Ui, lines: &[&str]) {
    let lines: Vec<String> = lines.iter().map(|line| line.to_string()).collect();
    code_box(ui, &lines);
}

/// Single-bordered box with padding 1.
fn panel(ui: &mut Ui, color: Option<Rgba>, grow: f32, children: impl FnOnce(&mut Ui)) -> usize {
    ui.box_primitive(
        BoxProps {
            grow,
            border: BorderStyle::Single,
            border_color: color,
            padding: Edges::x(1),
            ..Default::default()
        },
        children,
    )
}

/// Row with its two ends pushed apart.
fn split_row(ui: &mut Ui, children: impl FnOnce(&mut Ui)) -> usize {
    ui.box_primitive(
        BoxProps {
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::SpaceBetween,
            ..Default::default()
        },
        children,
    )
}

fn header_footer(ui: &mut Ui) {
    intro(ui, "Pattern 1: Header + Content + Footer", "The most common app layout structure");

    ui.box_primitive(
        BoxProps {
            id: Some("header-demo".into()),
            height: Dimension::Cells(14),
            border: BorderStyle::Double,
            border_color: Some(Rgba::GREEN),
            margin: Edges::top(1),
            ..Default::default()
        },
        |ui| {
            panel(ui, Some(Rgba::CYAN), 0.0, |ui| {
                split_row(ui, |ui| {
                    ui.line([span("🏠 My App").fg(Rgba::CYAN).bold()]);
                    ui.plain("[Home] [About] [Settings]");
                });
            });
            panel(ui, Some(Rgba::GREEN), 1.0, |ui| {
                ui.plain("Main content area - grows to fill available space");
            });
            panel(ui, Some(Rgba::YELLOW), 0.0, |ui| {
                ui.line([span("© 2025 | Status: Online | Version 1.0").dim()]);
            });
        },
    );

    listing(
        ui,
        &[
            "// column with a fixed height: header, content, footer",
            "ui.box_primitive(BoxProps { height: Dimension::Percent(100.0), ..Default::default() }, |ui| {",
            "    ui.box_primitive(BoxProps { grow: 0.0, ..Default::default() }, header);",
            "    ui.box_primitive(BoxProps { grow: 1.0, ..Default::default() }, content);",
            "    ui.box_primitive(BoxProps { grow: 0.0, ..Default::default() }, footer);",
            "});",
        ],
    );
}

fn sidebar(ui: &mut Ui) {
    intro(ui, "Pattern 2: Sidebar Navigation", "Vertical navigation with main content area");

    ui.box_primitive(
        BoxProps {
            id: Some("sidebar-demo".into()),
            flex_direction: FlexDirection::Row,
            height: Dimension::Cells(12),
            border: BorderStyle::Double,
            border_color: Some(Rgba::BLUE),
            margin: Edges::top(1),
            ..Default::default()
        },
        |ui| {
            ui.box_primitive(
                BoxProps {
                    width: Dimension::Cells(20),
                    shrink: 0.0,
                    border: BorderStyle::Single,
                    border_color: Some(Rgba::MAGENTA),
                    padding: Edges::x(1),
                    ..Default::default()
                },
                |ui| {
                    ui.text(TextProps {
                        spans: vec![span("Navigation").fg(Rgba::MAGENTA).bold()],
                        margin: Edges::bottom(1),
                        ..Default::default()
                    });
                    ui.line([span("▶ Dashboard").fg(Rgba::CYAN)]);
                    for item in ["Users", "Settings", "Reports", "Logout"] {
                        ui.plain(format!("  {item}"));
                    }
                },
            );
            panel(ui, Some(Rgba::GREEN), 1.0, |ui| {
                ui.text(TextProps {
                    spans: vec![span("Dashboard Content").fg(Rgba::GREEN).bold()],
                    margin: Edges::bottom(1),
                    ..Default::default()
                });
                ui.plain("This area grows to fill remaining space.");
                ui.plain("Perfect for displaying main application content.");
            });
        },
    );

    listing(
        ui,
        &[
            "ui.box_primitive(BoxProps { flex_direction: FlexDirection::Row, ..Default::default() }, |ui| {",
            "    // sidebar: fixed width, never shrinks",
            "    ui.box_primitive(BoxProps { width: Dimension::Cells(20), shrink: 0.0, ..Default::default() }, nav);",
            "    // main content takes the rest",
            "    ui.box_primitive(BoxProps { grow: 1.0, ..Default::default() }, content);",
            "});",
        ],
    );
}

const GRID_ROWS: [[(&str, &str, Rgba); 3]; 2] = [
    [
        ("📊 Analytics", "View stats", Rgba::RED),
        ("👥 Users", "1,234 active", Rgba::YELLOW),
        ("💰 Revenue", "$45,678", Rgba::GREEN),
    ],
    [
        ("📈 Growth", "+12.5%", Rgba::BLUE),
        ("🎯 Goals", "8/10 met", Rgba::MAGENTA),
        ("⭐ Rating", "4.8/5.0", Rgba::CYAN),
    ],
];

fn card_grid(ui: &mut Ui) {
    intro(ui, "Pattern 3: Card Grid", "Responsive grid of equal-sized cards");

    ui.box_primitive(
        BoxProps {
            id: Some("grid-demo".into()),
            border: BorderStyle::Double,
            border_color: Some(Rgba::CYAN),
            margin: Edges::top(1),
            ..Default::default()
        },
        |ui| {
            for cards in GRID_ROWS {
                ui.box_primitive(
                    BoxProps {
                        flex_direction: FlexDirection::Row,
                        padding: Edges::y(1),
                        ..Default::default()
                    },
                    |ui| {
                        for (title, detail, color) in cards {
                            ui.box_primitive(
                                BoxProps {
                                    grow: 1.0,
                                    // Same basis for every card, so the columns line up.
                                    basis: Dimension::Cells(0),
                                    border: BorderStyle::Rounded,
                                    border_color: Some(color),
                                    padding: Edges::x(1),
                                    margin: Edges::x(1),
                                    ..Default::default()
                                },
                                |ui| {
                                    ui.line([span(title).fg(color).bold()]);
                                    ui.line([span(detail).dim()]);
                                },
                            );
                        }
                    },
                );
            }
        },
    );

    listing(
        ui,
        &[
            "let card = BoxProps { grow: 1.0, basis: Dimension::Cells(0), margin: Edges::x(1), ..Default::default() };",
            "ui.box_primitive(BoxProps::default(), |ui| {",
            "    ui.box_primitive(BoxProps { flex_direction: FlexDirection::Row, ..Default::default() }, |ui| {",
            "        ui.box_primitive(card.clone(), analytics);",
            "        ui.box_primitive(card.clone(), users);",
            "        ui.box_primitive(card.clone(), revenue);",
            "    });",
            "    // repeat for more rows",
            "});",
        ],
    );
}

fn form(ui: &mut Ui) {
    intro(ui, "Pattern 4: Form Layout", "Structured input form with labels");

    ui.box_primitive(
        BoxProps {
            id: Some("form-demo".into()),
            border: BorderStyle::Double,
            border_color: Some(Rgba::GREEN),
            padding: Edges::xy(2, 1),
            margin: Edges::top(1),
            ..Default::default()
        },
        |ui| {
            heading(ui, Rgba::GREEN, "User Registration Form");
            for (label, value) in [("Name:", "John Doe"), ("Email:", "john@example.com"), ("Password:", "••••••••")] {
                ui.box_primitive(
                    BoxProps {
                        flex_direction: FlexDirection::Row,
                        align_items: AlignItems::Center,
                        margin: Edges::top(1),
                        ..Default::default()
                    },
                    |ui| {
                        ui.text(TextProps {
                            spans: vec![span(label)],
                            width: Dimension::Cells(15),
                            shrink: 0.0,
                            ..Default::default()
                        });
                        panel(ui, None, 1.0, |ui| {
                            ui.line([span(value).dim()]);
                        });
                    },
                );
            }
            ui.box_primitive(
                BoxProps {
                    flex_direction: FlexDirection::Row,
                    justify_content: JustifyContent::FlexEnd,
                    margin: Edges::top(1),
                    ..Default::default()
                },
                |ui| {
                    button(ui, "Cancel", Rgba::GRAY, false, Edges::ZERO);
                    button(ui, "Submit", Rgba::GREEN, true, Edges::left(2));
                },
            );
        },
    );

    listing(
        ui,
        &[
            "ui.box_primitive(BoxProps { flex_direction: FlexDirection::Row, ..Default::default() }, |ui| {",
            "    ui.text(TextProps { width: Dimension::Cells(15), ..label });",
            "    ui.box_primitive(BoxProps { grow: 1.0, ..Default::default() }, input_field);",
            "});",
        ],
    );
}

fn button(ui: &mut Ui, label: &str, color: Rgba, primary: bool, margin: Edges) -> usize {
    ui.box_primitive(
        BoxProps {
            border: BorderStyle::Rounded,
            border_color: Some(color),
            padding: Edges::x(2),
            margin,
            ..Default::default()
        },
        |ui| {
            let text = span(label);
            ui.line([if primary { text.fg(color).bold() } else { text }]);
        },
    )
}

fn modal(ui: &mut Ui) {
    intro(ui, "Pattern 5: Centered Modal", "Overlay dialog centered on screen");

    ui.box_primitive(
        BoxProps {
            id: Some("modal-backdrop".into()),
            height: Dimension::Cells(18),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            border: BorderStyle::Double,
            border_color: Some(Rgba::GRAY),
            padding: Edges::x(2),
            margin: Edges::top(1),
            ..Default::default()
        },
        |ui| {
            ui.line([span("[ Background / Backdrop ]").dim()]);
            ui.box_primitive(
                BoxProps {
                    id: Some("modal-dialog".into()),
                    min_width: Dimension::Cells(40),
                    border: BorderStyle::Double,
                    border_color: Some(Rgba::RED),
                    padding: Edges::xy(2, 1),
                    ..Default::default()
                },
                |ui| {
                    heading(ui, Rgba::RED, "⚠ Confirm Action");
                    ui.box_primitive(BoxProps { margin: Edges::y(1), ..Default::default() }, |ui| {
                        ui.plain("Are you sure you want to delete this item?");
                        ui.plain("This action cannot be undone.");
                    });
                    ui.box_primitive(
                        BoxProps {
                            flex_direction: FlexDirection::Row,
                            justify_content: JustifyContent::FlexEnd,
                            ..Default::default()
                        },
                        |ui| {
                            button(ui, "Cancel", Rgba::TERMINAL_DEFAULT, false, Edges::right(2));
                            button(ui, "Delete", Rgba::RED, true, Edges::ZERO);
                        },
                    );
                },
            );
            ui.text(TextProps {
                spans: vec![span("[ Background continues ]").dim()],
                margin: Edges::top(1),
                ..Default::default()
            });
        },
    );

    listing(
        ui,
        &[
            "ui.box_primitive(BoxProps {",
            "    justify_content: JustifyContent::Center,",
            "    align_items: AlignItems::Center,",
            "    height: Dimension::Percent(100.0),",
            "    ..Default::default()",
            "}, |ui| {",
            "    ui.box_primitive(BoxProps::default(), modal_content);",
            "});",
        ],
    );
}

fn dashboard(ui: &mut Ui) {
    intro(ui, "Pattern 6: Complete Dashboard", "Combining multiple patterns");

    ui.box_primitive(
        BoxProps {
            id: Some("dashboard-demo".into()),
            height: Dimension::Cells(20),
            border: BorderStyle::Double,
            border_color: Some(Rgba::CYAN),
            margin: Edges::top(1),
            ..Default::default()
        },
        |ui| {
            panel(ui, None, 0.0, |ui| {
                split_row(ui, |ui| {
                    ui.line([span("📊 Dashboard").fg(Rgba::CYAN).bold()]);
                    ui.plain("[👤 Profile] [⚙ Settings]");
                });
            });

            ui.box_primitive(BoxProps { flex_direction: FlexDirection::Row, grow: 1.0, ..Default::default() }, |ui| {
                ui.box_primitive(
                    BoxProps {
                        width: Dimension::Cells(18),
                        shrink: 0.0,
                        border: BorderStyle::Single,
                        padding: Edges::x(1),
                        ..Default::default()
                    },
                    |ui| {
                        ui.line([span("Menu").bold()]);
                        ui.line([span("▶ Home").fg(Rgba::CYAN)]);
                        for item in ["Analytics", "Reports", "Settings"] {
                            ui.plain(format!("  {item}"));
                        }
                    },
                );

                ui.box_primitive(BoxProps { grow: 1.0, padding: Edges::x(1), ..Default::default() }, |ui| {
                    ui.box_primitive(BoxProps { flex_direction: FlexDirection::Row, ..Default::default() }, |ui| {
                        for (label, color) in [("✓ 150", Rgba::GREEN), ("⏳ 23", Rgba::YELLOW), ("✗ 7", Rgba::RED)] {
                            ui.box_primitive(
                                BoxProps {
                                    grow: 1.0,
                                    border: BorderStyle::Rounded,
                                    border_color: Some(color),
                                    padding: Edges::x(1),
                                    margin: Edges::x(1),
                                    ..Default::default()
                                },
                                |ui| {
                                    ui.line([span(label).fg(color)]);
                                },
                            );
                        }
                    });
                    ui.box_primitive(
                        BoxProps {
                            grow: 1.0,
                            border: BorderStyle::Single,
                            padding: Edges::x(1),
                            margin: Edges::top(1),
                            ..Default::default()
                        },
                        |ui| {
                            ui.line([span("Recent Activity").bold()]);
                            ui.line([span("Activity feed goes here...").dim()]);
                        },
                    );
                });
            });

            panel(ui, None, 0.0, |ui| {
                ui.line([span("Last updated: Just now | Status: All systems operational").dim()]);
            });
        },
    );

    ui.box_primitive(
        BoxProps {
            border: BorderStyle::Single,
            padding: Edges::x(1),
            margin: Edges::top(1),
            ..Default::default()
        },
        |ui| {
            ui.line([span("This combines:").fg(Rgba::CYAN)]);
            ui.plain("• Header/Footer pattern (vertical flexbox)");
            ui.plain("• Sidebar pattern (horizontal flexbox)");
            ui.plain("• Grid pattern (stats row)");
            ui.plain("• All using grow to create a responsive layout");
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::plain_text;
    use crate::layout::compute_layout;

    fn press(lesson: &RealWorldExamples, key: &str) -> KeyResult {
        lesson.handle_key(&KeyboardEvent::new(key))
    }

    #[test]
    fn test_examples_cycle_both_ways() {
        let lesson = RealWorldExamples::new();
        assert_eq!(lesson.example(), Example::Header);

        press(&lesson, "p");
        assert_eq!(lesson.example(), Example::Dashboard);
        press(&lesson, "n");
        assert_eq!(lesson.example(), Example::Header);

        for expected in [Example::Sidebar, Example::Grid, Example::Form, Example::Modal] {
            assert_eq!(press(&lesson, "n"), KeyResult::Consumed);
            assert_eq!(lesson.example(), expected);
        }
        assert_eq!(press(&lesson, "x"), KeyResult::Ignored);

        lesson.reset();
        assert_eq!(lesson.example(), Example::Header);
    }

    #[test]
    fn test_every_example_lays_out() {
        let lesson = RealWorldExamples::new();
        for example in Example::ALL {
            assert_eq!(lesson.example(), example);
            let mut ui = Ui::new();
            lesson.view(&mut ui);
            let tree = ui.finish();
            let layout = compute_layout(&tree, 100, 0).unwrap();
            let holder = tree.index_of("example").unwrap();
            assert!(layout.get(holder).3 > 0, "{} rendered empty", example.as_str());
            press(&lesson, "n");
        }
    }

    #[test]
    fn test_header_content_fills_the_middle() {
        let lesson = RealWorldExamples::new();
        let mut ui = Ui::new();
        lesson.view(&mut ui);
        let tree = ui.finish();
        let layout = compute_layout(&tree, 100, 0).unwrap();

        let demo = tree.index_of("header-demo").unwrap();
        let heights: Vec<u16> = tree.children(demo).iter().map(|&child| layout.get(child).3).collect();
        // 14 rows less the double border; header and footer keep 3 rows each.
        assert_eq!(heights, vec![3, 6, 3]);
    }

    #[test]
    fn test_modal_is_centered() {
        let lesson = RealWorldExamples::new();
        for _ in 0..4 {
            press(&lesson, "n");
        }
        assert_eq!(lesson.example(), Example::Modal);

        let mut ui = Ui::new();
        lesson.view(&mut ui);
        let tree = ui.finish();
        let layout = compute_layout(&tree, 100, 0).unwrap();

        let backdrop = tree.index_of("modal-backdrop").unwrap();
        let dialog = tree.index_of("modal-dialog").unwrap();
        let (_, _, outer_w, _) = layout.get(backdrop);
        let (x, _, w, _) = layout.get(dialog);
        assert!(w >= 40);
        let left = x;
        let right = outer_w - x - w;
        assert!(left.abs_diff(right) <= 1, "left {left} right {right}");
    }

    #[test]
    fn test_viewing_line_names_example() {
        let lesson = RealWorldExamples::new();
        press(&lesson, "n");
        let mut ui = Ui::new();
        lesson.view(&mut ui);
        let tree = ui.finish();
        let found = (0..tree.len()).any(|i| plain_text(tree.text(i)).starts_with("Viewing: SIDEBAR"));
        assert!(found);
    }
}
