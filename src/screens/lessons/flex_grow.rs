//! Lesson 5: sharing leftover space with grow, plus shrink and basis.

use spark_signals::{signal, Signal};

use crate::app::{KeyResult, Screen};
use crate::engine::span;
use crate::primitives::{BoxProps, TextProps, Ui};
use crate::screens::chrome::{heading, indented, lesson_header, nav_bar, section, takeaway};
use crate::state::KeyboardEvent;
use crate::types::{BorderStyle, Dimension, Edges, FlexDirection, Rgba};

/// Grow factors cycle through `0..GROW_STEPS`.
pub const GROW_STEPS: u8 = 5;
pub const DEMO_WIDTH: u16 = 60;

const BOX_COLORS: [Rgba; 3] = [Rgba::RED, Rgba::YELLOW, Rgba::GREEN];

pub struct FlexGrowLesson {
    grows: [Signal<u8>; 3],
}

impl FlexGrowLesson {
    pub fn new() -> Self {
        Self {
            grows: [signal(1), signal(1), signal(1)],
        }
    }

    pub fn grows(&self) -> [u8; 3] {
        [self.grows[0].get(), self.grows[1].get(), self.grows[2].get()]
    }
}

impl Default for FlexGrowLesson {
    fn default() -> Self {
        Self::new()
    }
}

/// Share of the leftover space as a whole percentage, or `None` when
/// nothing grows.
pub fn share_percent(grow: u8, total: u32) -> Option<u32> {
    if total == 0 {
        return None;
    }
    Some((grow as f64 / total as f64 * 100.0).round() as u32)
}

impl Screen for FlexGrowLesson {
    fn reset(&self) {
        for grow in &self.grows {
            if grow.get() != 1 {
                grow.set(1);
            }
        }
    }

    fn handle_key(&self, event: &KeyboardEvent) -> KeyResult {
        let slot = match event.char() {
            Some('1') => 0,
            Some('2') => 1,
            Some('3') => 2,
            _ => return KeyResult::Ignored,
        };
        let grow = &self.grows[slot];
        grow.set((grow.get() + 1) % GROW_STEPS);
        KeyResult::Consumed
    }

    fn view(&self, ui: &mut Ui) {
        let grows = self.grows();
        let total: u32 = grows.iter().map(|&g| g as u32).sum();

        ui.box_primitive(BoxProps { padding: Edges::x(1), ..Default::default() }, |ui| {
            lesson_header(ui, Rgba::GREEN, "🔄 LESSON 5: Flexible Sizing with grow");

            section(ui, BorderStyle::Rounded, Rgba::CYAN, "📚 What is grow?", |ui| {
                ui.text(TextProps {
                    spans: vec![
                        span("grow").fg(Rgba::YELLOW),
                        span(" determines how much a component should grow to fill available space, "),
                        span("relative to its siblings").bold(),
                        span("."),
                    ],
                    margin: Edges::y(1),
                    ..Default::default()
                });
                ui.line([span("How it works:").bold()]);
                ui.plain("1. taffy calculates the leftover space in the container");
                ui.plain("2. It divides that space based on the grow values");
                ui.plain("3. Components with higher grow get more space");
                ui.text(TextProps {
                    spans: vec![
                        span("Think of it like slicing a pie!").fg(Rgba::MAGENTA),
                        span(" The grow values are the ratios."),
                    ],
                    margin: Edges::top(1),
                    ..Default::default()
                });
            });

            ui.box_primitive(
                BoxProps {
                    border: BorderStyle::Single,
                    padding: Edges::x(1),
                    margin: Edges::bottom(1),
                    ..Default::default()
                },
                |ui| {
                    let mut spans = Vec::new();
                    for (i, (&grow, &color)) in grows.iter().zip(BOX_COLORS.iter()).enumerate() {
                        if i > 0 {
                            spans.push(span(" | "));
                        }
                        spans.push(span(format!("Box {} grow: ", i + 1)));
                        spans.push(span(grow.to_string()).fg(color).bold());
                    }
                    ui.line(spans);
                    ui.line([
                        span("Press ").dim(),
                        span("1").fg(Rgba::RED),
                        span(", ").dim(),
                        span("2").fg(Rgba::YELLOW),
                        span(", or ").dim(),
                        span("3").fg(Rgba::GREEN),
                        span(" to cycle their grow values").dim(),
                    ]);
                },
            );

            ui.box_primitive(
                BoxProps {
                    border: BorderStyle::Single,
                    border_color: Some(Rgba::BLUE),
                    padding: Edges::x(1),
                    margin: Edges::bottom(1),
                    ..Default::default()
                },
                |ui| {
                    heading(ui, Rgba::BLUE, "📊 Current Distribution:");
                    if total == 0 {
                        ui.line([span("All values are 0 - boxes use their natural size").dim()]);
                        return;
                    }
                    ui.box_primitive(BoxProps { margin: Edges::top(1), ..Default::default() }, |ui| {
                        for (i, (&grow, &color)) in grows.iter().zip(BOX_COLORS.iter()).enumerate() {
                            let percent = share_percent(grow, total).unwrap_or(0);
                            ui.line([
                                span(format!("Box {}: {grow}/{total} = ", i + 1)),
                                span(format!("{percent}%")).fg(color).bold(),
                            ]);
                        }
                    });
                },
            );

            ui.box_primitive(BoxProps { margin: Edges::bottom(1), ..Default::default() }, |ui| {
                ui.line([span("🎮 Watch grow in Action:").bold()]);
                ui.box_primitive(
                    BoxProps {
                        id: Some("grow-demo".into()),
                        flex_direction: FlexDirection::Row,
                        width: Dimension::Cells(DEMO_WIDTH),
                        border: BorderStyle::Double,
                        border_color: Some(Rgba::MAGENTA),
                        padding: Edges::x(1),
                        margin: Edges::top(1),
                        ..Default::default()
                    },
                    |ui| {
                        for (i, (&grow, &color)) in grows.iter().zip(BOX_COLORS.iter()).enumerate() {
                            ui.box_primitive(
                                BoxProps {
                                    grow: grow as f32,
                                    border: BorderStyle::Single,
                                    border_color: Some(color),
                                    padding: Edges::x(1),
                                    ..Default::default()
                                },
                                |ui| {
                                    ui.line([span(format!("Box {}\ngrow:{grow}", i + 1)).fg(color)]);
                                },
                            );
                        }
                    },
                );
                ui.text(TextProps {
                    spans: vec![span("The boxes grow proportionally to fill the 60-column width").dim().italic()],
                    margin: Edges::top(1),
                    ..Default::default()
                });
            });

            section(ui, BorderStyle::Single, Rgba::YELLOW, "🎯 Common grow Patterns:", |ui| {
                pattern_title(ui, "1. Sidebar + Main Content (grow 0 + 1):");
                pattern_row(ui, |ui| {
                    ui.box_primitive(
                        BoxProps {
                            width: Dimension::Cells(15),
                            border: BorderStyle::Single,
                            border_color: Some(Rgba::CYAN),
                            padding: Edges::x(1),
                            ..Default::default()
                        },
                        |ui| {
                            ui.plain("Sidebar\nfixed");
                        },
                    );
                    column(ui, 1.0, Rgba::GREEN, "Main content grows to fill space");
                });
                pattern_note(ui, "Sidebar stays fixed, content takes the remaining space");

                pattern_title(ui, "2. Three Equal Columns (all grow 1):");
                pattern_row(ui, |ui| {
                    column(ui, 1.0, Rgba::RED, "Col 1");
                    column(ui, 1.0, Rgba::YELLOW, "Col 2");
                    column(ui, 1.0, Rgba::GREEN, "Col 3");
                });
                pattern_note(ui, "All columns get equal space");

                pattern_title(ui, "3. Emphasized Content (grow 2 + 1 + 1):");
                pattern_row(ui, |ui| {
                    column(ui, 2.0, Rgba::CYAN, "Main (2x)");
                    column(ui, 1.0, Rgba::GRAY, "Side");
                    column(ui, 1.0, Rgba::GRAY, "Side");
                });
                pattern_note(ui, "Main content gets twice the space of the sidebars");
            });

            section(ui, BorderStyle::Single, Rgba::MAGENTA, "🔍 Related Properties:", |ui| {
                ui.text(TextProps {
                    spans: vec![
                        span("shrink").fg(Rgba::YELLOW).bold(),
                        span(": How much to shrink when space is tight (default: 1.0)"),
                    ],
                    margin: Edges::top(1),
                    ..Default::default()
                });
                pattern_note(ui, "Higher values shrink more. Set to 0.0 to prevent shrinking.");
                ui.text(TextProps {
                    spans: vec![span("basis").fg(Rgba::GREEN).bold(), span(": Initial size before growing/shrinking")],
                    margin: Edges::top(1),
                    ..Default::default()
                });
                pattern_note(ui, "Like a \"preferred size\" that grow and shrink work from");

                ui.text(TextProps {
                    spans: vec![span("Example:").bold()],
                    margin: Edges::top(1),
                    ..Default::default()
                });
                indented(ui, 2, |ui| {
                    ui.line([span("ui.box_primitive(BoxProps { basis: Dimension::Cells(20), grow: 1.0, ..Default::default() }, |ui| {").dim()]);
                    ui.line([span("    // Starts at 20 columns, then grows to fill space").dim()]);
                    ui.line([span("});").dim()]);
                });
            });

            section(ui, BorderStyle::Double, Rgba::BLUE, "🌍 Real World Use Cases:", |ui| {
                pattern_title(ui, "Navigation Bar with Logo and Menu:");
                ui.box_primitive(
                    BoxProps {
                        flex_direction: FlexDirection::Row,
                        border: BorderStyle::Single,
                        padding: Edges::x(1),
                        margin: Edges::top(1),
                        ..Default::default()
                    },
                    |ui| {
                        ui.box_primitive(
                            BoxProps {
                                border: BorderStyle::Rounded,
                                border_color: Some(Rgba::CYAN),
                                padding: Edges::x(1),
                                ..Default::default()
                            },
                            |ui| {
                                ui.plain("🏠 Logo");
                            },
                        );
                        ui.spacer(BoxProps { grow: 1.0, ..Default::default() });
                        ui.plain("[Home] [About] [Contact]");
                    },
                );
                pattern_note(ui, "Logo fixed, spacer with grow: 1.0, menu at the end");

                pattern_title(ui, "Progress Bar:");
                ui.box_primitive(
                    BoxProps {
                        id: Some("progress-bar".into()),
                        flex_direction: FlexDirection::Row,
                        width: Dimension::Cells(40),
                        margin: Edges::top(1),
                        ..Default::default()
                    },
                    |ui| {
                        ui.box_primitive(BoxProps { grow: 3.0, bg: Some(Rgba::GREEN), ..Default::default() }, |ui| {
                            ui.line([span(" 75% ").fg(Rgba::BLACK)]);
                        });
                        ui.box_primitive(BoxProps { grow: 1.0, bg: Some(Rgba::GRAY), ..Default::default() }, |ui| {
                            ui.plain(" ");
                        });
                    },
                );
                pattern_note(ui, "Filled portion: grow 3.0, empty: grow 1.0");

                pattern_title(ui, "Dashboard Layout:");
                ui.box_primitive(
                    BoxProps {
                        flex_direction: FlexDirection::Row,
                        height: Dimension::Cells(8),
                        margin: Edges::top(1),
                        ..Default::default()
                    },
                    |ui| {
                        column(ui, 1.0, Rgba::CYAN, "Sidebar\nNavigation");
                        ui.box_primitive(
                            BoxProps {
                                grow: 3.0,
                                border: BorderStyle::Single,
                                border_color: Some(Rgba::GREEN),
                                padding: Edges::x(1),
                                ..Default::default()
                            },
                            |ui| {
                                ui.line([span("Main Dashboard").bold()]);
                                ui.plain("Content area gets most space");
                            },
                        );
                        column(ui, 1.0, Rgba::YELLOW, "Details\nPanel");
                    },
                );
                pattern_note(ui, "Sidebar: 1x, Main: 3x, Details: 1x");
            });

            nav_bar(
                ui,
                vec![
                    span("1").fg(Rgba::RED),
                    span(" 2").fg(Rgba::YELLOW),
                    span(" 3").fg(Rgba::GREEN),
                    span(" Cycle grow").dim(),
                    span("  M").fg(Rgba::WHITE),
                    span(" Menu").dim(),
                ],
            );

            takeaway(ui, Rgba::GREEN, "✅ Master grow to create fluid, responsive layouts that adapt to available space!");
        });
    }
}

fn pattern_title(ui: &mut Ui, title: &str) {
    ui.text(TextProps {
        spans: vec![span(title).bold()],
        margin: Edges::top(1),
        ..Default::default()
    });
}

fn pattern_note(ui: &mut Ui, note: &str) {
    ui.text(TextProps {
        spans: vec![span(note).dim()],
        margin: Edges::left(2),
        ..Default::default()
    });
}

/// Row 50 columns wide for the grow patterns.
fn pattern_row(ui: &mut Ui, children: impl FnOnce(&mut Ui)) {
    ui.box_primitive(
        BoxProps {
            flex_direction: FlexDirection::Row,
            width: Dimension::Cells(50),
            margin: Edges::top(1),
            ..Default::default()
        },
        children,
    );
}

/// Bordered box that grows by `grow`.
fn column(ui: &mut Ui, grow: f32, color: Rgba, label: &str) {
    ui.box_primitive(
        BoxProps {
            grow,
            border: BorderStyle::Single,
            border_color: Some(color),
            padding: Edges::x(1),
            ..Default::default()
        },
        |ui| {
            ui.plain(label);
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::compute_layout;

    fn press(lesson: &FlexGrowLesson, key: &str) {
        assert_eq!(lesson.handle_key(&KeyboardEvent::new(key)), KeyResult::Consumed);
    }

    #[test]
    fn test_grow_cycles_through_zero_to_four() {
        let lesson = FlexGrowLesson::new();
        assert_eq!(lesson.grows(), [1, 1, 1]);
        for expected in [2, 3, 4, 0, 1] {
            press(&lesson, "2");
            assert_eq!(lesson.grows()[1], expected);
        }
        assert_eq!(lesson.handle_key(&KeyboardEvent::new("4")), KeyResult::Ignored);
    }

    #[test]
    fn test_share_percent() {
        assert_eq!(share_percent(1, 3), Some(33));
        assert_eq!(share_percent(2, 3), Some(67));
        assert_eq!(share_percent(1, 2), Some(50));
        assert_eq!(share_percent(0, 0), None);
    }

    #[test]
    fn test_single_grower_takes_leftover() {
        let lesson = FlexGrowLesson::new();
        for _ in 0..4 {
            press(&lesson, "2");
            press(&lesson, "3");
        }
        assert_eq!(lesson.grows(), [1, 0, 0]);

        let mut ui = Ui::new();
        lesson.view(&mut ui);
        let tree = ui.finish();
        let layout = compute_layout(&tree, 100, 0).unwrap();
        let demo = tree.index_of("grow-demo").unwrap();
        let widths: Vec<u16> = tree.children(demo).iter().map(|&child| layout.get(child).2).collect();
        // 56 inner columns, natural width 10 each, all 26 leftover to box 1.
        assert_eq!(widths, vec![36, 10, 10]);
    }

    #[test]
    fn test_reset_restores_ones() {
        let lesson = FlexGrowLesson::new();
        press(&lesson, "1");
        press(&lesson, "3");
        lesson.reset();
        assert_eq!(lesson.grows(), [1, 1, 1]);
    }
}
