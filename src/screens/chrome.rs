//! Page chrome and the building blocks every lesson shares.
//!
//! Lessons are long, mostly static documents. These helpers keep the look
//! consistent (bordered sections, code listings, key hints) so each lesson
//! only spells out its own content.

use crate::engine::{span, Span};
use crate::primitives::{BoxProps, TextProps, Ui};
use crate::types::{BorderStyle, Edges, FlexDirection, Rgba};

/// Header title shown on every screen.
pub const APP_TITLE: &str = "🎓 FLEXBOX TUTOR: TERMINAL LAYOUT WITH TAFFY 🎓";
pub const APP_SUBTITLE: &str = "Interactive lessons to master terminal UI development";

/// Root column: header, growing content area, footer.
///
/// The root is laid out with a minimum height of the terminal, so the
/// footer sits at the bottom of short pages.
pub fn app_frame(ui: &mut Ui, content: impl FnOnce(&mut Ui)) {
    ui.box_primitive(BoxProps { padding: Edges::all(1), ..Default::default() }, |ui| {
        ui.box_primitive(
            BoxProps {
                border: BorderStyle::Double,
                border_color: Some(Rgba::CYAN),
                padding: Edges::x(1),
                margin: Edges::bottom(1),
                ..Default::default()
            },
            |ui| {
                ui.line([span(APP_TITLE).fg(Rgba::CYAN).bold()]);
                ui.line([span(APP_SUBTITLE).dim()]);
            },
        );

        ui.box_primitive(BoxProps { grow: 1.0, ..Default::default() }, content);

        ui.box_primitive(
            BoxProps {
                border: BorderStyle::Single,
                border_color: Some(Rgba::GRAY),
                padding: Edges::x(1),
                margin: Edges::top(1),
                ..Default::default()
            },
            |ui| {
                ui.line(key_hints(&[("M", "Menu"), ("Q", "Quit"), ("ESC", "Back"), ("PgUp/PgDn", "Scroll")]));
            },
        );
    });
}

// =============================================================================
// Text helpers
// =============================================================================

/// Dimmed `KEY label` pairs separated by two spaces, keys in yellow.
pub fn key_hints(pairs: &[(&str, &str)]) -> Vec<Span> {
    colored_key_hints(&pairs.iter().map(|&(key, label)| (key, label, Rgba::YELLOW)).collect::<Vec<_>>())
}

/// Like [`key_hints`] with a color per key.
pub fn colored_key_hints(pairs: &[(&str, &str, Rgba)]) -> Vec<Span> {
    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (i, &(key, label, color)) in pairs.iter().enumerate() {
        let lead = if i == 0 { "" } else { "  " };
        spans.push(span(format!("{lead}{key}")).fg(color));
        spans.push(span(format!(" {label}")).dim());
    }
    spans
}

/// Bold colored line.
pub fn heading(ui: &mut Ui, color: Rgba, text: &str) -> usize {
    ui.line([span(text).fg(color).bold()])
}

/// Dim caption with a blank row above it.
pub fn caption(ui: &mut Ui, text: &str) -> usize {
    ui.text(TextProps {
        spans: vec![span(text).dim()],
        margin: Edges::top(1),
        ..Default::default()
    })
}

/// `• text` lines, indented by two.
pub fn bullets(ui: &mut Ui, items: &[&str]) {
    indented(ui, 2, |ui| {
        for item in items {
            ui.plain(format!("• {item}"));
        }
    });
}

/// Green check mark followed by `text`.
pub fn check(ui: &mut Ui, text: &str) -> usize {
    ui.line([span("✓ ").fg(Rgba::GREEN), span(text)])
}

/// Column indented from the left.
pub fn indented(ui: &mut Ui, by: u16, children: impl FnOnce(&mut Ui)) -> usize {
    ui.box_primitive(BoxProps { margin: Edges::left(by), ..Default::default() }, children)
}

/// Row container.
pub fn row(ui: &mut Ui, children: impl FnOnce(&mut Ui)) -> usize {
    ui.box_primitive(BoxProps { flex_direction: FlexDirection::Row, ..Default::default() }, children)
}

// =============================================================================
// Boxes
// =============================================================================

/// Lesson title bar: double border in the lesson's color.
pub fn lesson_header(ui: &mut Ui, color: Rgba, title: &str) -> usize {
    ui.box_primitive(
        BoxProps {
            border: BorderStyle::Double,
            border_color: Some(color),
            padding: Edges::x(1),
            margin: Edges::bottom(1),
            ..Default::default()
        },
        |ui| {
            heading(ui, color, title);
        },
    )
}

/// Bordered column with a bold title, followed by one blank row.
pub fn section(
    ui: &mut Ui,
    border: BorderStyle,
    color: Rgba,
    title: &str,
    body: impl FnOnce(&mut Ui),
) -> usize {
    ui.box_primitive(
        BoxProps {
            border,
            border_color: Some(color),
            padding: Edges::xy(2, 1),
            margin: Edges::bottom(1),
            ..Default::default()
        },
        |ui| {
            heading(ui, color, title);
            body(ui);
        },
    )
}

/// Bordered box around a single line of text, as used in live demos.
pub fn label_box(ui: &mut Ui, label: &str, color: Rgba, border: BorderStyle, padding: Edges) -> usize {
    ui.box_primitive(
        BoxProps {
            border,
            border_color: Some(color),
            padding,
            ..Default::default()
        },
        |ui| {
            ui.line([span(label).fg(color)]);
        },
    )
}

/// Source listing: gray single border, lines in green.
pub fn code_box(ui: &mut Ui, lines: &[String]) -> usize {
    ui.box_primitive(
        BoxProps {
            border: BorderStyle::Single,
            border_color: Some(Rgba::GRAY),
            padding: Edges::x(1),
            margin: Edges::top(1),
            ..Default::default()
        },
        |ui| {
            for line in lines {
                ui.line([span(line.as_str()).fg(Rgba::GREEN)]);
            }
        },
    )
}

/// Single-bordered key hint bar at the bottom of a lesson.
pub fn nav_bar(ui: &mut Ui, hints: Vec<Span>) -> usize {
    ui.box_primitive(
        BoxProps {
            border: BorderStyle::Single,
            padding: Edges::x(1),
            margin: Edges::top(1),
            ..Default::default()
        },
        |ui| {
            ui.line(hints);
        },
    )
}

/// Double-bordered closing message.
pub fn takeaway(ui: &mut Ui, color: Rgba, text: &str) -> usize {
    ui.box_primitive(
        BoxProps {
            border: BorderStyle::Double,
            border_color: Some(color),
            padding: Edges::x(1),
            margin: Edges::top(1),
            ..Default::default()
        },
        |ui| {
            heading(ui, color, text);
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::plain_text;

    #[test]
    fn test_key_hints_layout() {
        let spans = key_hints(&[("M", "Menu"), ("Q", "Quit")]);
        assert_eq!(plain_text(&spans), "M Menu  Q Quit");
        assert_eq!(spans[0].fg, Some(Rgba::YELLOW));
    }

    #[test]
    fn test_app_frame_wraps_content() {
        let mut ui = Ui::new();
        let mut inner = 0;
        app_frame(&mut ui, |ui| {
            inner = ui.plain("body");
        });
        let tree = ui.finish();
        // root, header (+2 lines), content, body, footer (+1 line)
        assert_eq!(tree.len(), 8);
        assert_eq!(plain_text(tree.text(inner)), "body");
    }
}
