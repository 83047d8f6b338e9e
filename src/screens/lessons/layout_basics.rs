//! Lesson 1: boxes, text and the layout pipeline, in five steps.

use spark_signals::{signal, Signal};

use crate::app::{KeyResult, Screen};
use crate::engine::span;
use crate::primitives::{BoxProps, TextProps, Ui};
use crate::screens::chrome::{caption, check, colored_key_hints, heading, indented, lesson_header, nav_bar};
use crate::state::KeyboardEvent;
use crate::types::{BorderStyle, Edges, FlexDirection, Rgba};

pub const STEP_COUNT: usize = 5;

pub struct LayoutBasicsLesson {
    step: Signal<usize>,
}

impl LayoutBasicsLesson {
    pub fn new() -> Self {
        Self { step: signal(0) }
    }

    pub fn step(&self) -> usize {
        self.step.get()
    }

    fn set_step(&self, step: usize) {
        if self.step.get() != step {
            self.step.set(step);
        }
    }
}

impl Default for LayoutBasicsLesson {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for LayoutBasicsLesson {
    fn reset(&self) {
        self.set_step(0);
    }

    fn handle_key(&self, event: &KeyboardEvent) -> KeyResult {
        let step = self.step();
        if event.is("ArrowRight") {
            self.set_step((step + 1).min(STEP_COUNT - 1));
            KeyResult::Consumed
        } else if event.is("ArrowLeft") {
            self.set_step(step.saturating_sub(1));
            KeyResult::Consumed
        } else {
            KeyResult::Ignored
        }
    }

    fn view(&self, ui: &mut Ui) {
        let step = self.step();
        ui.box_primitive(BoxProps { padding: Edges::x(1), ..Default::default() }, |ui| {
            lesson_header(ui, Rgba::GREEN, "📦 LESSON 1: Layout Basics - Understanding Boxes and Taffy");

            ui.text(TextProps {
                spans: vec![
                    span(format!("Step {} of {STEP_COUNT}", step + 1)),
                    span("  (Use ← → arrows to navigate)").dim(),
                ],
                margin: Edges::bottom(1),
                ..Default::default()
            });

            ui.box_primitive(
                BoxProps {
                    border: BorderStyle::Rounded,
                    padding: Edges::xy(2, 1),
                    ..Default::default()
                },
                |ui| match step {
                    0 => introduction(ui),
                    1 => layout_engine(ui),
                    2 => box_primitive(ui),
                    3 => defaults(ui),
                    _ => summary(ui),
                },
            );

            nav_bar(
                ui,
                colored_key_hints(&[
                    ("← →", "Navigate steps", Rgba::CYAN),
                    ("M", "Menu", Rgba::YELLOW),
                    ("ESC", "Back", Rgba::YELLOW),
                ]),
            );
        });
    }
}

fn key_concept(ui: &mut Ui, text: &str) {
    ui.text(TextProps {
        spans: vec![span("Key Concept: ").fg(Rgba::YELLOW), span(text)],
        margin: Edges::y(1),
        ..Default::default()
    });
}

fn introduction(ui: &mut Ui) {
    heading(ui, Rgba::CYAN, "🎯 What is this tutor?");
    ui.text(TextProps {
        spans: vec![span(
            "A terminal UI is a grid of character cells. Every screen in this tutor is a tree of \
             boxes and text that gets laid out, painted into a cell buffer and written to the terminal.",
        )],
        margin: Edges::top(1),
        ..Default::default()
    });
    key_concept(
        ui,
        "You describe the tree with builder calls; the pipeline turns it into escape sequences, \
         writing only the cells that changed since the last frame.",
    );

    ui.box_primitive(
        BoxProps {
            border: BorderStyle::Single,
            border_color: Some(Rgba::BLUE),
            padding: Edges::x(1),
            ..Default::default()
        },
        |ui| {
            ui.line([span("Builder code:").fg(Rgba::GRAY)]);
            ui.line([span("  ui.box_primitive(BoxProps::default(), |ui| { ui.plain(\"Hello\"); });").fg(Rgba::GREEN)]);
            ui.blank();
            ui.line([span("Terminal output:").fg(Rgba::GRAY)]);
            ui.line([span("  Hello").fg(Rgba::CYAN)]);
        },
    );
}

fn layout_engine(ui: &mut Ui) {
    heading(ui, Rgba::CYAN, "🧘 What is taffy?");
    ui.text(TextProps {
        spans: vec![span(
            "taffy is a layout engine written in Rust that implements flexbox (and CSS grid). \
             Game engines and GUI toolkits use the same crate!",
        )],
        margin: Edges::top(1),
        ..Default::default()
    });
    key_concept(
        ui,
        "taffy takes your boxes and calculates where everything goes using the flexbox rules, \
         measuring text by wrapping it to the width it is offered.",
    );
    ui.line([span("The layout pipeline:").bold()]);

    ui.box_primitive(BoxProps { margin: Edges { top: 1, left: 2, ..Edges::ZERO }, ..Default::default() }, |ui| {
        ui.plain("1. 🧱 You build a tree with box_primitive and text");
        ui.plain("2. 🧘 taffy calculates positions using flexbox");
        ui.plain("3. 🎨 The painter fills a buffer of cells");
        ui.plain("4. 👀 Only the changed cells reach your terminal!");
    });
}

fn box_primitive(ui: &mut Ui) {
    heading(ui, Rgba::CYAN, "📦 The Box Primitive - Your Building Block");
    ui.text(TextProps {
        spans: vec![span(
            "A box is to a terminal UI what a <div> is to HTML: a container that holds other components.",
        )],
        margin: Edges::top(1),
        ..Default::default()
    });
    ui.text(TextProps {
        spans: vec![span("Every box carries flexbox layout properties:").fg(Rgba::YELLOW)],
        margin: Edges::top(1),
        ..Default::default()
    });

    caption(ui, "Example 1: Basic box (padding 1)");
    ui.box_primitive(
        BoxProps {
            border: BorderStyle::Single,
            border_color: Some(Rgba::MAGENTA),
            padding: Edges::all(1),
            ..Default::default()
        },
        |ui| {
            ui.plain("I'm inside a box!");
        },
    );

    caption(ui, "Example 2: Box with padding 2");
    ui.box_primitive(
        BoxProps {
            border: BorderStyle::Single,
            border_color: Some(Rgba::MAGENTA),
            padding: Edges::all(2),
            ..Default::default()
        },
        |ui| {
            ui.plain("More space around me!");
        },
    );

    caption(ui, "Example 3: Nested boxes");
    ui.box_primitive(
        BoxProps {
            border: BorderStyle::Single,
            border_color: Some(Rgba::CYAN),
            padding: Edges::all(1),
            ..Default::default()
        },
        |ui| {
            ui.box_primitive(
                BoxProps {
                    border: BorderStyle::Single,
                    border_color: Some(Rgba::YELLOW),
                    padding: Edges::all(1),
                    ..Default::default()
                },
                |ui| {
                    ui.plain("Boxes inside boxes!");
                },
            );
        },
    );
}

fn defaults(ui: &mut Ui) {
    heading(ui, Rgba::CYAN, "⚙ Default Flexbox Behavior");
    ui.text(TextProps {
        spans: vec![span("Without any settings, a box uses these flexbox properties:")],
        margin: Edges::y(1),
        ..Default::default()
    });

    indented(ui, 2, |ui| {
        for (property, meaning) in [
            ("flex_direction: Column", "Stack children vertically"),
            ("align_items: Stretch", "Children fill the width"),
            ("justify_content: FlexStart", "Start at the top"),
        ] {
            ui.line([span("• "), span(property).fg(Rgba::YELLOW), span(format!(" - {meaning}"))]);
        }
    });

    caption(ui, "See it in action (default flex_direction: Column):");
    ui.box_primitive(
        BoxProps {
            border: BorderStyle::Single,
            border_color: Some(Rgba::GREEN),
            padding: Edges::x(1),
            ..Default::default()
        },
        |ui| {
            ui.line([span("First child (stacked vertically)").fg(Rgba::RED)]);
            ui.line([span("Second child").fg(Rgba::YELLOW)]);
            ui.line([span("Third child").fg(Rgba::GREEN)]);
        },
    );

    caption(ui, "Compare with flex_direction: Row:");
    ui.box_primitive(
        BoxProps {
            flex_direction: FlexDirection::Row,
            border: BorderStyle::Single,
            border_color: Some(Rgba::BLUE),
            padding: Edges::x(1),
            ..Default::default()
        },
        |ui| {
            ui.line([span("First ").fg(Rgba::RED)]);
            ui.line([span("Second ").fg(Rgba::YELLOW)]);
            ui.line([span("Third").fg(Rgba::GREEN)]);
        },
    );
}

fn summary(ui: &mut Ui) {
    heading(ui, Rgba::CYAN, "🎓 Summary & Key Takeaways");

    ui.box_primitive(BoxProps { margin: Edges::top(1), ..Default::default() }, |ui| {
        check(ui, "The tutor = a tree of boxes and text, repainted each frame");
        check(ui, "taffy = flexbox layout engine (like CSS)");
        check(ui, "Box = your primary layout component");
        check(ui, "Default layout is vertical (column)");
    });

    ui.box_primitive(
        BoxProps {
            border: BorderStyle::Double,
            border_color: Some(Rgba::YELLOW),
            padding: Edges::x(1),
            margin: Edges::top(1),
            ..Default::default()
        },
        |ui| {
            heading(ui, Rgba::YELLOW, "💡 Pro Tip:");
            ui.plain("Think of every box as a flexbox container. All the CSS flexbox knowledge you have applies here!");
        },
    );

    ui.text(TextProps {
        spans: vec![span("Ready to learn more? Go back to the menu and try the next lesson!")
            .fg(Rgba::MAGENTA)
            .italic()],
        margin: Edges::top(1),
        ..Default::default()
    });
}
