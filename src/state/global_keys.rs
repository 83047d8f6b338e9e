//! Global Keys Module - shortcuts that work on every screen.
//!
//! - Ctrl+C: quit (checked before the active screen sees the key)
//! - q: quit
//! - m / Escape: back to the menu (ignored on the menu itself)
//! - PageUp / PageDown / Home / End: scroll the document
//! - ArrowUp / ArrowDown: scroll one line, when the screen didn't use them
//!
//! This module only maps keys to actions; the app applies them.

use super::keyboard::KeyboardEvent;
use super::scroll::ScrollAction;

/// What a global shortcut asks the app to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlobalAction {
    Quit,
    BackToMenu,
    Scroll(ScrollAction),
}

/// Ctrl+C is handled before anything else.
pub fn is_interrupt(event: &KeyboardEvent) -> bool {
    event.is_ctrl("c")
}

/// Map a key the active screen did not consume to a global action.
///
/// # Arguments
/// * `event` - The unconsumed key
/// * `on_menu` - Whether the menu is the active screen
pub fn global_action(event: &KeyboardEvent, on_menu: bool) -> Option<GlobalAction> {
    if is_interrupt(event) {
        return Some(GlobalAction::Quit);
    }
    if event.modifiers.ctrl || event.modifiers.alt {
        return None;
    }

    match event.key.as_str() {
        "q" => Some(GlobalAction::Quit),
        "m" | "Escape" if !on_menu => Some(GlobalAction::BackToMenu),
        "ArrowUp" => Some(GlobalAction::Scroll(ScrollAction::LineUp)),
        "ArrowDown" => Some(GlobalAction::Scroll(ScrollAction::LineDown)),
        "PageUp" => Some(GlobalAction::Scroll(ScrollAction::PageUp)),
        "PageDown" => Some(GlobalAction::Scroll(ScrollAction::PageDown)),
        "Home" => Some(GlobalAction::Scroll(ScrollAction::Top)),
        "End" => Some(GlobalAction::Scroll(ScrollAction::Bottom)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::keyboard::Modifiers;

    #[test]
    fn test_quit_keys() {
        assert_eq!(global_action(&KeyboardEvent::new("q"), true), Some(GlobalAction::Quit));
        let ctrl_c = KeyboardEvent::with_modifiers("c", Modifiers::ctrl());
        assert_eq!(global_action(&ctrl_c, false), Some(GlobalAction::Quit));
        assert!(is_interrupt(&ctrl_c));
    }

    #[test]
    fn test_menu_keys_only_off_menu() {
        assert_eq!(global_action(&KeyboardEvent::new("m"), false), Some(GlobalAction::BackToMenu));
        assert_eq!(global_action(&KeyboardEvent::new("Escape"), false), Some(GlobalAction::BackToMenu));
        assert_eq!(global_action(&KeyboardEvent::new("m"), true), None);
        assert_eq!(global_action(&KeyboardEvent::new("Escape"), true), None);
    }

    #[test]
    fn test_scroll_keys() {
        assert_eq!(
            global_action(&KeyboardEvent::new("PageDown"), false),
            Some(GlobalAction::Scroll(ScrollAction::PageDown))
        );
        assert_eq!(
            global_action(&KeyboardEvent::new("Home"), true),
            Some(GlobalAction::Scroll(ScrollAction::Top))
        );
        assert_eq!(global_action(&KeyboardEvent::new("x"), false), None);
    }
}
