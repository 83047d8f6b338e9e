//! Input Module - crossterm event conversion.
//!
//! Converts crossterm terminal events into our own event types so the rest
//! of the crate never matches on crossterm directly.

use crossterm::event::{
    read, Event as CrosstermEvent, KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind,
    KeyModifiers,
};

use super::keyboard::{KeyState, KeyboardEvent, Modifiers};

// =============================================================================
// INPUT EVENT
// =============================================================================

/// Unified input event
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Keyboard event (press or repeat)
    Key(KeyboardEvent),
    /// Terminal resize: (width, height)
    Resize(u16, u16),
    /// Anything we don't handle (mouse, focus, paste, key release)
    None,
}

// =============================================================================
// KEY CONVERSION
// =============================================================================

/// Convert crossterm KeyEvent to our KeyboardEvent
pub fn convert_key_event(event: CrosstermKeyEvent) -> KeyboardEvent {
    let key = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => String::new(),
    };

    let state = match event.kind {
        KeyEventKind::Press => KeyState::Press,
        KeyEventKind::Repeat => KeyState::Repeat,
        KeyEventKind::Release => KeyState::Release,
    };

    let mut modifiers = convert_modifiers(event.modifiers);
    if event.code == KeyCode::BackTab {
        modifiers.shift = true;
    }

    KeyboardEvent { key, modifiers, state }
}

/// Convert crossterm KeyModifiers to our Modifiers
fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
        shift: mods.contains(KeyModifiers::SHIFT),
        meta: mods.contains(KeyModifiers::META) || mods.contains(KeyModifiers::SUPER),
    }
}

/// Convert any crossterm event.
///
/// Key releases (reported by terminals with the kitty protocol) become
/// `InputEvent::None` so a key never fires twice.
pub fn convert_event(event: CrosstermEvent) -> InputEvent {
    match event {
        CrosstermEvent::Key(key) => {
            let key = convert_key_event(key);
            if key.state == KeyState::Release || key.key.is_empty() {
                InputEvent::None
            } else {
                InputEvent::Key(key)
            }
        }
        CrosstermEvent::Resize(w, h) => InputEvent::Resize(w, h),
        _ => InputEvent::None,
    }
}

/// Read the next event (blocking).
pub fn read_event() -> std::io::Result<InputEvent> {
    Ok(convert_event(read()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> CrosstermKeyEvent {
        CrosstermKeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_convert_named_keys() {
        let ev = convert_key_event(key(KeyCode::Up, KeyModifiers::NONE, KeyEventKind::Press));
        assert_eq!(ev.key, "ArrowUp");
        let ev = convert_key_event(key(KeyCode::Esc, KeyModifiers::NONE, KeyEventKind::Press));
        assert_eq!(ev.key, "Escape");
    }

    #[test]
    fn test_convert_ctrl_char() {
        let ev = convert_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press));
        assert_eq!(ev.key, "c");
        assert!(ev.modifiers.ctrl);
    }

    #[test]
    fn test_release_is_dropped() {
        let ev = CrosstermEvent::Key(key(KeyCode::Char('j'), KeyModifiers::NONE, KeyEventKind::Release));
        assert_eq!(convert_event(ev), InputEvent::None);

        let ev = CrosstermEvent::Key(key(KeyCode::Char('j'), KeyModifiers::NONE, KeyEventKind::Press));
        assert_eq!(convert_event(ev), InputEvent::Key(KeyboardEvent::new("j")));
    }

    #[test]
    fn test_resize() {
        assert_eq!(convert_event(CrosstermEvent::Resize(100, 40)), InputEvent::Resize(100, 40));
    }
}
