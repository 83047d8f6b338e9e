//! Lesson menu.

use spark_signals::{signal, Signal};

use crate::app::{KeyResult, Screen, ScreenId};
use crate::engine::span;
use crate::primitives::{BoxProps, TextProps, Ui};
use crate::state::KeyboardEvent;
use crate::types::{BorderStyle, Edges, FlexDirection, Rgba};

use super::chrome::{colored_key_hints, heading};

/// Lesson difficulty shown as a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    AllLevels,
}

impl Difficulty {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::AllLevels => "All Levels",
        }
    }

    pub const fn color(&self) -> Rgba {
        match self {
            Difficulty::Beginner => Rgba::GREEN,
            Difficulty::Intermediate => Rgba::YELLOW,
            Difficulty::Advanced | Difficulty::AllLevels => Rgba::RED,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MenuItem {
    pub screen: ScreenId,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
}

pub const MENU_ITEMS: [MenuItem; 7] = [
    MenuItem {
        screen: ScreenId::LayoutBasics,
        icon: "📦",
        title: "Layout Basics",
        description: "Learn about the box primitive and taffy layout fundamentals",
        difficulty: Difficulty::Beginner,
    },
    MenuItem {
        screen: ScreenId::FlexDirection,
        icon: "↔",
        title: "Flex Direction",
        description: "Master row vs column layouts and how to arrange components",
        difficulty: Difficulty::Beginner,
    },
    MenuItem {
        screen: ScreenId::Alignment,
        icon: "⚖",
        title: "Alignment & Justification",
        description: "Control positioning with justify_content and align_items",
        difficulty: Difficulty::Intermediate,
    },
    MenuItem {
        screen: ScreenId::Spacing,
        icon: "📏",
        title: "Spacing & Sizing",
        description: "Work with padding, margin, width, and height",
        difficulty: Difficulty::Beginner,
    },
    MenuItem {
        screen: ScreenId::FlexGrow,
        icon: "🔄",
        title: "Flexible Sizing",
        description: "Use grow, shrink, and basis for dynamic layouts",
        difficulty: Difficulty::Intermediate,
    },
    MenuItem {
        screen: ScreenId::RealWorld,
        icon: "🌍",
        title: "Real World Examples",
        description: "See complete patterns: headers, sidebars, grids, and more",
        difficulty: Difficulty::Advanced,
    },
    MenuItem {
        screen: ScreenId::Playground,
        icon: "🎮",
        title: "Interactive Playground",
        description: "Experiment with layout properties in real-time",
        difficulty: Difficulty::AllLevels,
    },
];

/// Component id of a menu item, used as the scroll anchor.
pub fn item_id(index: usize) -> String {
    format!("menu-item-{index}")
}

pub struct MenuScreen {
    selected: Signal<usize>,
}

impl MenuScreen {
    pub fn new() -> Self {
        Self { selected: signal(0) }
    }

    pub fn selected(&self) -> usize {
        self.selected.get()
    }

    /// Highlight an item. Out-of-range indices clamp to the last item.
    pub fn select(&self, index: usize) {
        let index = index.min(MENU_ITEMS.len() - 1);
        if self.selected.get() != index {
            self.selected.set(index);
        }
    }

    fn item(&self, ui: &mut Ui, index: usize, item: &MenuItem) {
        let is_selected = index == self.selected();
        let (border, border_color) = if is_selected {
            (BorderStyle::Rounded, Some(Rgba::CYAN))
        } else {
            (BorderStyle::None, None)
        };

        ui.box_primitive(
            BoxProps {
                id: Some(item_id(index)),
                border,
                border_color,
                // Keeps the text in place whether or not the border is drawn.
                padding: if is_selected { Edges::x(1) } else { Edges::xy(2, 1) },
                ..Default::default()
            },
            |ui| {
                ui.box_primitive(BoxProps { flex_direction: FlexDirection::Row, ..Default::default() }, |ui| {
                    let marker = if is_selected { "▶ " } else { "  " };
                    let color = if is_selected { Rgba::CYAN } else { Rgba::WHITE };
                    ui.line([span(format!("{marker}{}. {} {}", index + 1, item.icon, item.title)).fg(color).bold()]);
                    ui.spacer(BoxProps { grow: 1.0, ..Default::default() });
                    ui.line([span(format!("[{}]", item.difficulty.as_str()))
                        .fg(item.difficulty.color())
                        .dim_if(!is_selected)]);
                });
                ui.text(TextProps {
                    spans: vec![span(item.description).dim_if(!is_selected)],
                    margin: Edges::left(4),
                    ..Default::default()
                });
            },
        );
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for MenuScreen {
    fn reset(&self) {
        self.select(0);
    }

    fn handle_key(&self, event: &KeyboardEvent) -> KeyResult {
        let selected = self.selected();
        if event.is("ArrowUp") {
            self.select(selected.saturating_sub(1));
            return KeyResult::Consumed;
        }
        if event.is("ArrowDown") {
            self.select(selected + 1);
            return KeyResult::Consumed;
        }
        if event.is("Enter") || event.is("ArrowRight") {
            return KeyResult::Navigate(MENU_ITEMS[selected].screen);
        }
        if let Some(digit) = event.char().and_then(|c| c.to_digit(10)) {
            if (1..=MENU_ITEMS.len() as u32).contains(&digit) {
                return KeyResult::Navigate(MENU_ITEMS[digit as usize - 1].screen);
            }
        }
        KeyResult::Ignored
    }

    fn view(&self, ui: &mut Ui) {
        ui.box_primitive(BoxProps { padding: Edges::xy(1, 0), ..Default::default() }, |ui| {
            ui.box_primitive(BoxProps { margin: Edges::bottom(1), ..Default::default() }, |ui| {
                heading(ui, Rgba::GREEN, "📚 Choose a lesson to begin your journey");
            });

            for (index, item) in MENU_ITEMS.iter().enumerate() {
                self.item(ui, index, item);
            }

            ui.box_primitive(
                BoxProps {
                    border: BorderStyle::Single,
                    border_color: Some(Rgba::YELLOW),
                    padding: Edges::x(1),
                    margin: Edges::top(1),
                    ..Default::default()
                },
                |ui| {
                    ui.line(colored_key_hints(&[
                        ("↑↓", "Navigate", Rgba::CYAN),
                        ("ENTER", "Select", Rgba::CYAN),
                        ("1-7", "Quick select", Rgba::CYAN),
                    ]));
                },
            );

            ui.text(TextProps {
                spans: vec![span(
                    "💡 Tip: This entire menu is built from box primitives laid out by taffy's flexbox!",
                )
                .fg(Rgba::MAGENTA)
                .italic()],
                margin: Edges::top(1),
                ..Default::default()
            });
        });
    }

    fn scroll_anchor(&self) -> Option<String> {
        Some(item_id(self.selected()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(menu: &MenuScreen, key: &str) -> KeyResult {
        menu.handle_key(&KeyboardEvent::new(key))
    }

    #[test]
    fn test_selection_clamps() {
        let menu = MenuScreen::new();
        assert_eq!(press(&menu, "ArrowUp"), KeyResult::Consumed);
        assert_eq!(menu.selected(), 0);

        for _ in 0..10 {
            press(&menu, "ArrowDown");
        }
        assert_eq!(menu.selected(), 6);
    }

    #[test]
    fn test_enter_and_right_open_selected() {
        let menu = MenuScreen::new();
        press(&menu, "ArrowDown");
        assert_eq!(press(&menu, "Enter"), KeyResult::Navigate(ScreenId::FlexDirection));
        assert_eq!(press(&menu, "ArrowRight"), KeyResult::Navigate(ScreenId::FlexDirection));
    }

    #[test]
    fn test_digits_open_lessons() {
        let menu = MenuScreen::new();
        assert_eq!(press(&menu, "1"), KeyResult::Navigate(ScreenId::LayoutBasics));
        assert_eq!(press(&menu, "7"), KeyResult::Navigate(ScreenId::Playground));
        assert_eq!(press(&menu, "8"), KeyResult::Ignored);
        assert_eq!(press(&menu, "0"), KeyResult::Ignored);
        assert_eq!(press(&menu, "q"), KeyResult::Ignored);
    }

    #[test]
    fn test_anchor_follows_selection() {
        let menu = MenuScreen::new();
        menu.select(3);
        assert_eq!(menu.scroll_anchor(), Some("menu-item-3".to_string()));
        menu.reset();
        assert_eq!(menu.selected(), 0);
    }

    #[test]
    fn test_menu_items_follow_lesson_order() {
        let screens: Vec<ScreenId> = MENU_ITEMS.iter().map(|item| item.screen).collect();
        assert_eq!(screens, ScreenId::LESSONS.to_vec());
    }
}
