//! Lesson 7: every container and child property on one live preview.

use spark_signals::{signal, Signal};

use crate::app::{KeyResult, Screen};
use crate::engine::span;
use crate::primitives::{BoxProps, TextProps, Ui};
use crate::screens::chrome::{heading, indented, lesson_header, section, takeaway};
use crate::state::KeyboardEvent;
use crate::types::{AlignItems, BorderStyle, Dimension, Edges, FlexDirection, JustifyContent, Rgba};

/// Padding and margin values stay within `0..=MAX_SPACING`.
pub const MAX_SPACING: u16 = 3;
/// Child grow cycles through `0..GROW_STEPS`.
pub const GROW_STEPS: u8 = 4;
pub const PREVIEW_WIDTH: u16 = 65;
pub const PREVIEW_HEIGHT: u16 = 15;

const CHILD_COLORS: [Rgba; 3] = [Rgba::RED, Rgba::YELLOW, Rgba::GREEN];

/// Everything the playground lets you change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub direction: FlexDirection,
    pub justify: JustifyContent,
    pub align: AlignItems,
    pub padding: u16,
    pub child_grow: u8,
    pub child_padding: u16,
    pub child_margin: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            direction: FlexDirection::Row,
            justify: JustifyContent::FlexStart,
            align: AlignItems::FlexStart,
            padding: 1,
            child_grow: 0,
            child_padding: 1,
            child_margin: 0,
        }
    }
}

impl Settings {
    /// Apply one key. Returns `None` for keys the playground doesn't use.
    fn with_key(self, c: char) -> Option<Self> {
        let mut next = self;
        match c {
            'd' => next.direction = self.direction.toggle(),
            'j' => next.justify = self.justify.next(),
            'a' => next.align = self.align.next(),
            'p' => next.padding = (self.padding + 1).min(MAX_SPACING),
            'P' => next.padding = self.padding.saturating_sub(1),
            'g' => next.child_grow = (self.child_grow + 1) % GROW_STEPS,
            'c' => next.child_padding = (self.child_padding + 1).min(MAX_SPACING),
            'C' => next.child_padding = self.child_padding.saturating_sub(1),
            'm' => next.child_margin = (self.child_margin + 1).min(MAX_SPACING),
            'M' => next.child_margin = self.child_margin.saturating_sub(1),
            'r' => next = Settings::default(),
            _ => return None,
        }
        Some(next)
    }
}

/// Builder code matching `settings`. Child lines appear only for non-zero
/// values.
pub fn generated_code(settings: &Settings) -> Vec<String> {
    let mut lines = vec![
        "ui.box_primitive(BoxProps {".to_string(),
        format!("    flex_direction: {},", settings.direction.code()),
        format!("    justify_content: {},", settings.justify.code()),
        format!("    align_items: {},", settings.align.code()),
        format!("    padding: Edges::all({}),", settings.padding),
        "    ..Default::default()".to_string(),
        "}, |ui| {".to_string(),
        "    ui.box_primitive(BoxProps {".to_string(),
    ];
    if settings.child_grow > 0 {
        lines.push(format!("        grow: {}.0,", settings.child_grow));
    }
    if settings.child_padding > 0 {
        lines.push(format!("        padding: Edges::all({}),", settings.child_padding));
    }
    if settings.child_margin > 0 {
        lines.push(format!("        margin: Edges::all({}),", settings.child_margin));
    }
    lines.extend(
        [
            "        ..Default::default()",
            "    }, content);",
            "    // repeat for the other children",
            "});",
        ]
        .map(String::from),
    );
    lines
}

pub struct InteractivePlayground {
    settings: Signal<Settings>,
}

impl InteractivePlayground {
    pub fn new() -> Self {
        Self { settings: signal(Settings::default()) }
    }

    pub fn settings(&self) -> Settings {
        self.settings.get()
    }
}

impl Default for InteractivePlayground {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for InteractivePlayground {
    fn reset(&self) {
        if self.settings.get() != Settings::default() {
            self.settings.set(Settings::default());
        }
    }

    fn handle_key(&self, event: &KeyboardEvent) -> KeyResult {
        let Some(c) = event.char() else {
            return KeyResult::Ignored;
        };
        let current = self.settings.get();
        match current.with_key(c) {
            Some(next) => {
                if next != current {
                    self.settings.set(next);
                }
                KeyResult::Consumed
            }
            None => KeyResult::Ignored,
        }
    }

    fn view(&self, ui: &mut Ui) {
        let settings = self.settings();

        ui.box_primitive(BoxProps { padding: Edges::x(1), ..Default::default() }, |ui| {
            lesson_header(ui, Rgba::MAGENTA, "🎮 INTERACTIVE PLAYGROUND - Experiment with taffy properties!");

            section(ui, BorderStyle::Single, Rgba::CYAN, "🎯 How to Use:", |ui| {
                ui.box_primitive(BoxProps { margin: Edges::top(1), ..Default::default() }, |ui| {
                    ui.plain("Adjust properties in real-time and see how they affect the layout.");
                    ui.plain("The colored boxes below update as you change values.");
                });
            });

            section(ui, BorderStyle::Rounded, Rgba::YELLOW, "⚙ Current Settings:", |ui| {
                settings_group(
                    ui,
                    "Container Properties:",
                    Rgba::CYAN,
                    &[
                        ("flex_direction", settings.direction.as_str().to_string()),
                        ("justify_content", settings.justify.as_str().to_string()),
                        ("align_items", settings.align.as_str().to_string()),
                        ("padding", settings.padding.to_string()),
                    ],
                );
                settings_group(
                    ui,
                    "Child Properties:",
                    Rgba::GREEN,
                    &[
                        ("grow", settings.child_grow.to_string()),
                        ("padding", settings.child_padding.to_string()),
                        ("margin", settings.child_margin.to_string()),
                    ],
                );
            });

            ui.box_primitive(BoxProps { margin: Edges::bottom(1), ..Default::default() }, |ui| {
                heading(ui, Rgba::MAGENTA, "🎨 Live Preview:");
                preview(ui, &settings);
                explanation(ui, &settings);
            });

            section(ui, BorderStyle::Single, Rgba::BLUE, "💻 Generated Code:", |ui| {
                ui.box_primitive(BoxProps { margin: Edges { top: 1, left: 1, ..Edges::ZERO }, ..Default::default() }, |ui| {
                    for line in generated_code(&settings) {
                        ui.line([span(line).fg(Rgba::GRAY)]);
                    }
                });
            });

            section(ui, BorderStyle::Double, Rgba::GREEN, "🎮 Controls:", |ui| {
                controls_group(
                    ui,
                    "Container Properties:",
                    Rgba::CYAN,
                    &[
                        ("D", "Toggle flex_direction (row/column)"),
                        ("J", "Cycle justify_content"),
                        ("A", "Cycle align_items"),
                        ("p/P", "Adjust padding (p = increase, P = decrease)"),
                    ],
                );
                controls_group(
                    ui,
                    "Child Properties:",
                    Rgba::GREEN,
                    &[
                        ("G", "Cycle grow (0-3)"),
                        ("c/C", "Adjust child padding"),
                        ("m/M", "Adjust child margin"),
                    ],
                );
                controls_group(
                    ui,
                    "Other:",
                    Rgba::YELLOW,
                    &[("R", "Reset all to defaults"), ("ESC", "Back to menu")],
                );
            });

            section(ui, BorderStyle::Single, Rgba::YELLOW, "🧪 Try These Experiments:", |ui| {
                for (i, (setup, result)) in [
                    ("Set flex_direction to row and justify_content to space-between", "See boxes spread across the width"),
                    ("Set flex_direction to column and align_items to center", "See boxes centered horizontally"),
                    ("Set grow to 1 for all boxes", "See boxes share space equally"),
                    ("Increase padding and margin values", "See how spacing affects the layout"),
                    ("Try justify_content space-around with flex_direction row", "See even distribution with end spacing"),
                ]
                .into_iter()
                .enumerate()
                {
                    ui.text(TextProps {
                        spans: vec![span(format!("{}. {setup}", i + 1))],
                        margin: Edges::top(1),
                        ..Default::default()
                    });
                    ui.line([span(format!("   → {result}")).dim()]);
                }
            });

            takeaway(
                ui,
                Rgba::CYAN,
                "✅ Master Tip: The best way to learn flexbox is by experimenting! Try different combinations!",
            );
        });
    }
}

fn settings_group(ui: &mut Ui, title: &str, color: Rgba, values: &[(&str, String)]) {
    ui.text(TextProps {
        spans: vec![span(title).bold()],
        margin: Edges::top(1),
        ..Default::default()
    });
    indented(ui, 2, |ui| {
        for (name, value) in values {
            ui.line([span(format!("{name}: ")), span(value.as_str()).fg(color)]);
        }
    });
}

fn controls_group(ui: &mut Ui, title: &str, color: Rgba, keys: &[(&str, &str)]) {
    ui.text(TextProps {
        spans: vec![span(title).bold()],
        margin: Edges::top(1),
        ..Default::default()
    });
    indented(ui, 2, |ui| {
        for (key, label) in keys {
            ui.line([span(*key).fg(color), span(format!(" {label}"))]);
        }
    });
}

fn preview(ui: &mut Ui, settings: &Settings) {
    ui.box_primitive(
        BoxProps {
            id: Some("playground-preview".into()),
            flex_direction: settings.direction,
            justify_content: settings.justify,
            align_items: settings.align,
            width: Dimension::Cells(PREVIEW_WIDTH),
            height: Dimension::Cells(PREVIEW_HEIGHT),
            border: BorderStyle::Double,
            border_color: Some(Rgba::MAGENTA),
            padding: Edges::all(settings.padding),
            margin: Edges::top(1),
            ..Default::default()
        },
        |ui| {
            for (i, color) in CHILD_COLORS.into_iter().enumerate() {
                let mut label = format!("Box {}", i + 1);
                if settings.child_grow > 0 {
                    label.push_str(&format!("\ngrow: {}", settings.child_grow));
                }
                ui.box_primitive(
                    BoxProps {
                        grow: settings.child_grow as f32,
                        border: BorderStyle::Rounded,
                        border_color: Some(color),
                        padding: Edges::all(settings.child_padding),
                        margin: Edges::all(settings.child_margin),
                        ..Default::default()
                    },
                    |ui| {
                        ui.line([span(label).fg(color)]);
                    },
                );
            }
        },
    );
}

fn explanation(ui: &mut Ui, settings: &Settings) {
    let row = settings.direction.is_row();
    let (main, cross) = if row {
        ("left-to-right", "top-to-bottom")
    } else {
        ("top-to-bottom", "left-to-right")
    };

    ui.box_primitive(
        BoxProps {
            border: BorderStyle::Single,
            padding: Edges::x(1),
            margin: Edges::top(1),
            ..Default::default()
        },
        |ui| {
            let lead = if row { "→ Boxes arranged horizontally" } else { "↓ Boxes stacked vertically" };
            ui.line([span(lead).dim().italic()]);
            ui.line([span(format!("justify_content affects {main} spacing")).dim().italic()]);
            ui.line([span(format!("align_items affects {cross} alignment")).dim().italic()]);
            if settings.child_grow > 0 {
                ui.line([span(format!("Boxes growing to fill space with grow: {}", settings.child_grow))
                    .dim()
                    .italic()]);
            }
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::compute_layout;

    fn press(playground: &InteractivePlayground, key: &str) -> KeyResult {
        playground.handle_key(&KeyboardEvent::new(key))
    }

    fn preview_children(playground: &InteractivePlayground) -> Vec<(u16, u16, u16, u16)> {
        let mut ui = Ui::new();
        playground.view(&mut ui);
        let tree = ui.finish();
        let layout = compute_layout(&tree, 100, 0).unwrap();
        let preview = tree.index_of("playground-preview").unwrap();
        assert_eq!(layout.get(preview).2, PREVIEW_WIDTH);
        assert_eq!(layout.get(preview).3, PREVIEW_HEIGHT);
        tree.children(preview).iter().map(|&child| layout.get(child)).collect()
    }

    #[test]
    fn test_spacing_keys_clamp() {
        let playground = InteractivePlayground::new();
        for _ in 0..5 {
            press(&playground, "p");
            press(&playground, "m");
        }
        assert_eq!(playground.settings().padding, MAX_SPACING);
        assert_eq!(playground.settings().child_margin, MAX_SPACING);

        for _ in 0..5 {
            press(&playground, "P");
            press(&playground, "C");
        }
        assert_eq!(playground.settings().padding, 0);
        assert_eq!(playground.settings().child_padding, 0);
    }

    #[test]
    fn test_cycles_and_reset() {
        let playground = InteractivePlayground::new();
        press(&playground, "d");
        press(&playground, "j");
        press(&playground, "a");
        for expected in [1, 2, 3, 0] {
            press(&playground, "g");
            assert_eq!(playground.settings().child_grow, expected);
        }

        let settings = playground.settings();
        assert_eq!(settings.direction, FlexDirection::Column);
        assert_eq!(settings.justify, JustifyContent::Center);
        assert_eq!(settings.align, AlignItems::Center);

        assert_eq!(press(&playground, "r"), KeyResult::Consumed);
        assert_eq!(playground.settings(), Settings::default());
        assert_eq!(press(&playground, "Escape"), KeyResult::Ignored);
        assert_eq!(press(&playground, "x"), KeyResult::Ignored);
    }

    #[test]
    fn test_generated_code_skips_zero_child_values() {
        let code = generated_code(&Settings::default());
        assert!(code.contains(&"    flex_direction: FlexDirection::Row,".to_string()));
        assert!(code.contains(&"        padding: Edges::all(1),".to_string()));
        assert!(!code.iter().any(|line| line.contains("grow:")));
        assert!(!code.iter().any(|line| line.contains("margin:")));

        let code = generated_code(&Settings { child_grow: 2, child_margin: 3, child_padding: 0, ..Default::default() });
        assert!(code.contains(&"        grow: 2.0,".to_string()));
        assert!(code.contains(&"        margin: Edges::all(3),".to_string()));
        assert!(!code.iter().any(|line| line.starts_with("        padding")));
    }

    #[test]
    fn test_preview_packs_children_at_start() {
        let playground = InteractivePlayground::new();
        let children = preview_children(&playground);
        // border 1 + padding 1; each child is "Box N" + padding 2 + border 2 wide.
        let xs: Vec<u16> = children.iter().map(|c| c.0).collect();
        assert_eq!(xs, vec![2, 11, 20]);
        assert!(children.iter().all(|c| c.2 == 9));
    }

    #[test]
    fn test_preview_flex_end_reaches_inner_edge() {
        let playground = InteractivePlayground::new();
        press(&playground, "j");
        press(&playground, "j");
        assert_eq!(playground.settings().justify, JustifyContent::FlexEnd);

        let children = preview_children(&playground);
        let (x, _, w, _) = children[2];
        assert_eq!(x + w, PREVIEW_WIDTH - 2);
    }
}
