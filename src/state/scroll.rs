//! Scroll State Module - the document scroll offset.
//!
//! Screens are often taller than the terminal. The whole document is laid
//! out and painted, then a terminal-sized window is cropped out of it at
//! the current offset.
//!
//! The offset stored here is user state and may run past the end. The
//! frame clamps it against the document height when cropping, and the
//! render effect records the offset it actually showed.

use std::cell::Cell;
use std::rc::Rc;

use spark_signals::{signal, Signal};

// =============================================================================
// SCROLL CONSTANTS
// =============================================================================

/// Default scroll amount for arrow keys (lines).
pub const LINE_SCROLL: u16 = 1;

/// Default scroll amount for Page Up/Down (90% of viewport).
pub const PAGE_SCROLL_FACTOR: f32 = 0.9;

/// A scroll request from the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollAction {
    LineUp,
    LineDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
}

/// Rows to move for one page of a viewport `height` rows tall.
pub fn page_size(height: u16) -> u16 {
    ((height as f32 * PAGE_SCROLL_FACTOR) as u16).max(1)
}

/// Clamp an offset so the viewport stays inside the document.
pub fn clamp_offset(offset: u16, document_height: u16, viewport_height: u16) -> u16 {
    offset.min(document_height.saturating_sub(viewport_height))
}

/// Smallest change to `offset` that brings rows `top..top + height` into view.
pub fn reveal(offset: u16, top: u16, height: u16, viewport_height: u16) -> u16 {
    let bottom = top.saturating_add(height);
    if top < offset {
        top
    } else if bottom > offset.saturating_add(viewport_height) {
        // Taller than the viewport: show its top.
        bottom.saturating_sub(viewport_height).min(top)
    } else {
        offset
    }
}

/// Vertical scroll position of the document.
///
/// Besides the requested offset (a signal the frame reads), it remembers
/// what the last painted frame actually showed. Relative scrolling starts
/// from there, so a clamped or anchor-adjusted frame doesn't make the next
/// key press jump.
#[derive(Clone)]
pub struct ScrollState {
    offset: Signal<u16>,
    /// (shown offset, max offset) of the last painted frame.
    rendered: Rc<Cell<Option<(u16, u16)>>>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: signal(0),
            rendered: Rc::new(Cell::new(None)),
        }
    }

    /// Requested offset (reactive read).
    pub fn offset(&self) -> u16 {
        self.offset.get()
    }

    /// Set the offset. Writing the same value does not notify.
    pub fn set_offset(&self, offset: u16) {
        if self.offset.get() != offset {
            self.offset.set(offset);
        }
    }

    /// Remember what a painted frame showed. Not reactive.
    pub fn record_frame(&self, shown: u16, max: u16) {
        self.rendered.set(Some((shown, max)));
    }

    /// Starting point and upper bound for relative scrolling.
    fn base_and_max(&self) -> (u16, u16) {
        self.rendered.get().unwrap_or((self.offset.get(), u16::MAX))
    }

    /// Scroll by a delta amount, clamped to the last known bounds.
    pub fn scroll_by(&self, delta: i32) {
        let (base, max) = self.base_and_max();
        let next = (base as i32 + delta).clamp(0, max as i32) as u16;
        self.set_offset(next);
    }

    pub fn scroll_to_top(&self) {
        self.set_offset(0);
    }

    /// Jump to the last page (or past the end if nothing was painted yet;
    /// the frame clamps it).
    pub fn scroll_to_bottom(&self) {
        let (_, max) = self.base_and_max();
        self.set_offset(max);
    }

    /// Scroll up one page of a viewport `viewport_height` rows tall.
    pub fn page_up(&self, viewport_height: u16) {
        self.scroll_by(-(page_size(viewport_height) as i32));
    }

    pub fn page_down(&self, viewport_height: u16) {
        self.scroll_by(page_size(viewport_height) as i32);
    }

    /// Apply a keyboard scroll request for a viewport `viewport_height` rows tall.
    pub fn apply(&self, action: ScrollAction, viewport_height: u16) {
        match action {
            ScrollAction::LineUp => self.scroll_by(-(LINE_SCROLL as i32)),
            ScrollAction::LineDown => self.scroll_by(LINE_SCROLL as i32),
            ScrollAction::PageUp => self.page_up(viewport_height),
            ScrollAction::PageDown => self.page_down(viewport_height),
            ScrollAction::Top => self.scroll_to_top(),
            ScrollAction::Bottom => self.scroll_to_bottom(),
        }
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_offset() {
        assert_eq!(clamp_offset(50, 40, 24), 16);
        assert_eq!(clamp_offset(5, 40, 24), 5);
        assert_eq!(clamp_offset(5, 10, 24), 0);
    }

    #[test]
    fn test_reveal() {
        // Already visible
        assert_eq!(reveal(10, 12, 3, 20), 10);
        // Above the viewport
        assert_eq!(reveal(10, 4, 3, 20), 4);
        // Below the viewport
        assert_eq!(reveal(0, 30, 3, 20), 13);
        // Taller than the viewport
        assert_eq!(reveal(0, 30, 40, 20), 30);
    }

    #[test]
    fn test_scroll_actions() {
        let scroll = ScrollState::new();
        scroll.apply(ScrollAction::LineUp, 20);
        assert_eq!(scroll.offset(), 0);

        scroll.apply(ScrollAction::PageDown, 20);
        assert_eq!(scroll.offset(), 18);

        scroll.apply(ScrollAction::LineUp, 20);
        assert_eq!(scroll.offset(), 17);

        scroll.apply(ScrollAction::Bottom, 20);
        assert_eq!(scroll.offset(), u16::MAX);

        scroll.apply(ScrollAction::Top, 20);
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn test_scrolling_starts_from_painted_frame() {
        let scroll = ScrollState::new();
        scroll.set_offset(500);
        scroll.record_frame(30, 30);

        scroll.apply(ScrollAction::LineUp, 20);
        assert_eq!(scroll.offset(), 29);

        scroll.record_frame(29, 30);
        scroll.apply(ScrollAction::PageDown, 20);
        assert_eq!(scroll.offset(), 30);

        scroll.apply(ScrollAction::Bottom, 20);
        assert_eq!(scroll.offset(), 30);
    }

    #[test]
    fn test_page_up_and_down() {
        let scroll = ScrollState::new();
        scroll.record_frame(0, 40);

        scroll.page_down(10);
        assert_eq!(scroll.offset(), 9);

        scroll.record_frame(9, 40);
        scroll.page_down(1);
        assert_eq!(scroll.offset(), 10);

        scroll.record_frame(38, 40);
        scroll.page_down(10);
        assert_eq!(scroll.offset(), 40);

        scroll.record_frame(5, 40);
        scroll.page_up(10);
        assert_eq!(scroll.offset(), 0);
    }
}
