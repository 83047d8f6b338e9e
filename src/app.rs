//! App - screen routing and key dispatch.
//!
//! The app owns one instance of every screen plus the signals that pick the
//! active one and position the viewport. Everything the frame derived reads
//! lives behind those signals, so changing any of them schedules a redraw.

use spark_signals::{signal, Signal};
use tracing::{debug, info};

use crate::pipeline::TerminalSize;
use crate::primitives::Ui;
use crate::screens::lessons::{
    AlignmentLesson, FlexDirectionLesson, FlexGrowLesson, InteractivePlayground,
    LayoutBasicsLesson, RealWorldExamples, SpacingLesson,
};
use crate::screens::{chrome, MenuScreen};
use crate::state::{global_action, is_interrupt, GlobalAction, KeyboardEvent, ScrollState};

// =============================================================================
// Screen identity
// =============================================================================

/// Every screen the app can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum ScreenId {
    #[default]
    Menu,
    LayoutBasics,
    FlexDirection,
    Alignment,
    Spacing,
    FlexGrow,
    RealWorld,
    Playground,
}

impl ScreenId {
    /// Lessons in menu order.
    pub const LESSONS: [ScreenId; 7] = [
        ScreenId::LayoutBasics,
        ScreenId::FlexDirection,
        ScreenId::Alignment,
        ScreenId::Spacing,
        ScreenId::FlexGrow,
        ScreenId::RealWorld,
        ScreenId::Playground,
    ];

    /// Kebab-case name, as accepted on the command line.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ScreenId::Menu => "menu",
            ScreenId::LayoutBasics => "layout-basics",
            ScreenId::FlexDirection => "flex-direction",
            ScreenId::Alignment => "alignment",
            ScreenId::Spacing => "spacing",
            ScreenId::FlexGrow => "flex-grow",
            ScreenId::RealWorld => "real-world",
            ScreenId::Playground => "playground",
        }
    }
}

// =============================================================================
// Screen trait
// =============================================================================

/// Result of offering a key to a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    /// Not handled: global shortcuts get a look at it.
    Ignored,
    /// Handled: stop here.
    Consumed,
    /// Switch to another screen.
    Navigate(ScreenId),
    /// Leave the app.
    Quit,
}

/// A full-page screen.
///
/// State lives in signals inside the implementor, so all methods take
/// `&self`.
pub trait Screen {
    /// Put the screen back into its initial state. Called on every entry.
    fn reset(&self);

    /// Offer a key press.
    fn handle_key(&self, event: &KeyboardEvent) -> KeyResult;

    /// Build the screen's component tree into the content area.
    fn view(&self, ui: &mut Ui);

    /// Component id the viewport should keep visible.
    fn scroll_anchor(&self) -> Option<String> {
        None
    }
}

// =============================================================================
// App
// =============================================================================

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppControl {
    Continue,
    Exit,
}

pub struct App {
    current: Signal<ScreenId>,
    menu: MenuScreen,
    layout_basics: LayoutBasicsLesson,
    flex_direction: FlexDirectionLesson,
    alignment: AlignmentLesson,
    spacing: SpacingLesson,
    flex_grow: FlexGrowLesson,
    real_world: RealWorldExamples,
    playground: InteractivePlayground,
    pub scroll: ScrollState,
    pub terminal: TerminalSize,
}

impl App {
    /// Create the app showing `start`, for a terminal of the given size.
    pub fn new(start: ScreenId, terminal: TerminalSize) -> Self {
        let app = Self {
            current: signal(start),
            menu: MenuScreen::new(),
            layout_basics: LayoutBasicsLesson::new(),
            flex_direction: FlexDirectionLesson::new(),
            alignment: AlignmentLesson::new(),
            spacing: SpacingLesson::new(),
            flex_grow: FlexGrowLesson::new(),
            real_world: RealWorldExamples::new(),
            playground: InteractivePlayground::new(),
            scroll: ScrollState::new(),
            terminal,
        };
        if let Some(index) = ScreenId::LESSONS.iter().position(|&id| id == start) {
            app.menu.select(index);
        }
        app
    }

    /// The active screen id (reactive read).
    pub fn current(&self) -> ScreenId {
        self.current.get()
    }

    pub fn screen(&self, id: ScreenId) -> &dyn Screen {
        match id {
            ScreenId::Menu => &self.menu,
            ScreenId::LayoutBasics => &self.layout_basics,
            ScreenId::FlexDirection => &self.flex_direction,
            ScreenId::Alignment => &self.alignment,
            ScreenId::Spacing => &self.spacing,
            ScreenId::FlexGrow => &self.flex_grow,
            ScreenId::RealWorld => &self.real_world,
            ScreenId::Playground => &self.playground,
        }
    }

    fn active(&self) -> &dyn Screen {
        self.screen(self.current())
    }

    /// Switch screens. The destination starts from its initial state and
    /// the document scrolls back to the top.
    pub fn navigate(&self, id: ScreenId) {
        let from = self.current();
        if id != ScreenId::Menu {
            self.screen(id).reset();
        } else if let Some(index) = ScreenId::LESSONS.iter().position(|&lesson| lesson == from) {
            // Back on the menu with the lesson we came from highlighted.
            self.menu.select(index);
        }
        self.scroll.scroll_to_top();
        self.current.set(id);
        info!(from = from.as_str(), to = id.as_str(), "navigate");
    }

    /// Dispatch a key press.
    ///
    /// Order: Ctrl+C, the active screen, global shortcuts. Unknown keys are
    /// ignored.
    pub fn handle_key(&self, event: &KeyboardEvent) -> AppControl {
        if is_interrupt(event) {
            return AppControl::Exit;
        }

        match self.active().handle_key(event) {
            KeyResult::Consumed => return AppControl::Continue,
            KeyResult::Navigate(id) => {
                self.navigate(id);
                return AppControl::Continue;
            }
            KeyResult::Quit => return AppControl::Exit,
            KeyResult::Ignored => {}
        }

        match global_action(event, self.current() == ScreenId::Menu) {
            Some(GlobalAction::Quit) => AppControl::Exit,
            Some(GlobalAction::BackToMenu) => {
                self.navigate(ScreenId::Menu);
                AppControl::Continue
            }
            Some(GlobalAction::Scroll(action)) => {
                self.scroll.apply(action, self.terminal.height());
                AppControl::Continue
            }
            None => {
                debug!(key = %event.key, "unhandled key");
                AppControl::Continue
            }
        }
    }

    /// Build the whole page: chrome around the active screen.
    pub fn view(&self, ui: &mut Ui) {
        let screen = self.active();
        chrome::app_frame(ui, |ui| screen.view(ui));
    }

    /// Component id the viewport should keep visible.
    pub fn scroll_anchor(&self) -> Option<String> {
        self.active().scroll_anchor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(start: ScreenId) -> App {
        App::new(start, TerminalSize::new(100, 30))
    }

    fn press(app: &App, key: &str) -> AppControl {
        app.handle_key(&KeyboardEvent::new(key))
    }

    #[test]
    fn test_menu_digit_opens_lesson() {
        let app = app(ScreenId::Menu);
        press(&app, "3");
        assert_eq!(app.current(), ScreenId::Alignment);
    }

    #[test]
    fn test_escape_and_m_return_to_menu() {
        let app = app(ScreenId::Spacing);
        press(&app, "Escape");
        assert_eq!(app.current(), ScreenId::Menu);

        let app = self::app(ScreenId::FlexGrow);
        press(&app, "m");
        assert_eq!(app.current(), ScreenId::Menu);
    }

    #[test]
    fn test_playground_keeps_m_for_margin() {
        let app = app(ScreenId::Playground);
        press(&app, "m");
        assert_eq!(app.current(), ScreenId::Playground);
        press(&app, "Escape");
        assert_eq!(app.current(), ScreenId::Menu);
    }

    #[test]
    fn test_quit_keys() {
        let app = app(ScreenId::Alignment);
        assert_eq!(press(&app, "q"), AppControl::Exit);
        let ctrl_c = KeyboardEvent::with_modifiers("c", crate::state::Modifiers::ctrl());
        assert_eq!(app.handle_key(&ctrl_c), AppControl::Exit);
        assert_eq!(press(&app, "x"), AppControl::Continue);
    }

    #[test]
    fn test_returning_to_menu_selects_previous_lesson() {
        let app = app(ScreenId::Menu);
        press(&app, "5");
        assert_eq!(app.current(), ScreenId::FlexGrow);
        press(&app, "Escape");
        press(&app, "Enter");
        assert_eq!(app.current(), ScreenId::FlexGrow);
    }

    #[test]
    fn test_navigation_scrolls_to_top() {
        let app = app(ScreenId::Spacing);
        press(&app, "PageDown");
        assert!(app.scroll.offset() > 0);
        press(&app, "Escape");
        assert_eq!(app.scroll.offset(), 0);
    }
}
