//! Terminal size signals and raw-mode setup.
//!
//! The size lives in two signals so the frame derived re-runs on resize.
//! [`TerminalGuard`] owns the raw-mode/alternate-screen session and puts the
//! terminal back on drop, including when the event loop bails out with an
//! error.

use std::io;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use spark_signals::{signal, Signal};
use tracing::{debug, warn};

use crate::renderer::DiffRenderer;

/// Fallback when the terminal can't report its size.
pub const DEFAULT_SIZE: (u16, u16) = (80, 24);

// =============================================================================
// Terminal size
// =============================================================================

/// Reactive terminal dimensions.
#[derive(Clone)]
pub struct TerminalSize {
    width: Signal<u16>,
    height: Signal<u16>,
}

impl TerminalSize {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: signal(width),
            height: signal(height),
        }
    }

    /// Ask the terminal for its size, falling back to 80x24.
    pub fn detect() -> Self {
        let (width, height) = match crossterm::terminal::size() {
            Ok(size) => size,
            Err(err) => {
                warn!(error = %err, "could not query terminal size");
                DEFAULT_SIZE
            }
        };
        debug!(width, height, "terminal size");
        Self::new(width, height)
    }

    pub fn width(&self) -> u16 {
        self.width.get()
    }

    pub fn height(&self) -> u16 {
        self.height.get()
    }

    /// Update both dimensions. Unchanged values don't notify.
    pub fn resize(&self, width: u16, height: u16) {
        if self.width.get() != width {
            self.width.set(width);
        }
        if self.height.get() != height {
            self.height.set(height);
        }
    }
}

// =============================================================================
// Terminal guard
// =============================================================================

/// Raw mode plus the alternate screen for as long as the guard lives.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on Drop restores raw mode even if the screen switch fails.
        let guard = Self { _private: () };
        DiffRenderer::new().enter_fullscreen()?;
        debug!("entered fullscreen");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = DiffRenderer::new().exit_fullscreen() {
            warn!(error = %err, "failed to leave alternate screen");
        }
        if let Err(err) = disable_raw_mode() {
            warn!(error = %err, "failed to disable raw mode");
        }
        debug!("terminal restored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::effect;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_resize_notifies_only_on_change() {
        let size = TerminalSize::new(80, 24);
        let runs = Rc::new(Cell::new(0));

        let tracked = size.clone();
        let counter = runs.clone();
        let _stop = effect(move || {
            let _ = (tracked.width(), tracked.height());
            counter.set(counter.get() + 1);
        });
        assert_eq!(runs.get(), 1);

        size.resize(80, 24);
        assert_eq!(runs.get(), 1);

        size.resize(100, 24);
        assert_eq!(runs.get(), 2);
        assert_eq!(size.width(), 100);
        assert_eq!(size.height(), 24);
    }
}
