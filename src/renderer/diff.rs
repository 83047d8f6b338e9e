//! Differential renderer for fullscreen mode.
//!
//! The DiffRenderer compares the current frame to the previous frame and only
//! outputs cells that have changed. This keeps terminal I/O small and the
//! updates flicker-free.
//!
//! # Algorithm
//!
//! 1. Wrap output in a synchronized update block
//! 2. For each cell in the new frame:
//!    - If previous frame exists and cell is unchanged: skip
//!    - Otherwise: render cell with StatefulCellRenderer
//! 3. Flush output buffer (single write)
//! 4. Store current frame as previous for next comparison

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::{ResetColor, SetAttribute, Attribute};
use crossterm::terminal::{
    BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate, EnterAlternateScreen,
    LeaveAlternateScreen,
};

use super::buffer::FrameBuffer;
use super::output::{OutputBuffer, StatefulCellRenderer};
use crate::types::Cell;

/// Differential renderer for fullscreen mode.
///
/// Keeps track of the previous frame to enable diff-based rendering.
/// Only cells that have changed since the last frame are output.
pub struct DiffRenderer {
    output: OutputBuffer,
    cell_renderer: StatefulCellRenderer,
    previous: Option<FrameBuffer>,
}

impl DiffRenderer {
    pub fn new() -> Self {
        Self {
            output: OutputBuffer::new(),
            cell_renderer: StatefulCellRenderer::new(),
            previous: None,
        }
    }

    /// Render a frame to stdout, outputting only changed cells.
    ///
    /// Returns true if any cells were changed.
    pub fn render(&mut self, buffer: &FrameBuffer) -> io::Result<bool> {
        let mut stdout = io::stdout().lock();
        let changed = self.render_to(buffer, &mut stdout)?;
        stdout.flush()?;
        Ok(changed)
    }

    /// Render a frame to any writer, outputting only changed cells.
    pub fn render_to<W: Write>(&mut self, buffer: &FrameBuffer, writer: &mut W) -> io::Result<bool> {
        let mut has_changes = false;

        queue!(self.output, BeginSynchronizedUpdate)?;
        self.cell_renderer.reset();

        let width = buffer.width();
        let height = buffer.height();

        let previous = self
            .previous
            .as_ref()
            .filter(|prev| prev.width() == width && prev.height() == height);

        for y in 0..height {
            for x in 0..width {
                let Some(cell) = buffer.get(x, y) else {
                    continue;
                };

                let changed = match previous.and_then(|prev| prev.get(x, y)) {
                    Some(prev_cell) => !cells_equal(cell, prev_cell),
                    None => true,
                };

                if changed {
                    has_changes = true;
                    self.cell_renderer.render_cell(&mut self.output, x, y, cell)?;
                }
            }
        }

        queue!(self.output, SetAttribute(Attribute::Reset), EndSynchronizedUpdate)?;
        self.output.flush_to(writer)?;

        self.previous = Some(buffer.clone());
        Ok(has_changes)
    }

    /// Force a full redraw (no diffing).
    ///
    /// Use this after terminal resize or when the screen is corrupted.
    pub fn render_full(&mut self, buffer: &FrameBuffer) -> io::Result<()> {
        self.invalidate();
        queue!(self.output, Clear(ClearType::All))?;
        self.render(buffer).map(|_| ())
    }

    /// Invalidate the previous frame.
    ///
    /// Next render will be a full redraw.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Check if we have a previous frame to diff against.
    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Enter fullscreen mode (alternate screen buffer).
    pub fn enter_fullscreen(&mut self) -> io::Result<()> {
        queue!(self.output, EnterAlternateScreen, Hide, Clear(ClearType::All), MoveTo(0, 0))?;
        self.output.flush_stdout()?;
        self.invalidate();
        Ok(())
    }

    /// Exit fullscreen mode.
    pub fn exit_fullscreen(&mut self) -> io::Result<()> {
        queue!(self.output, SetAttribute(Attribute::Reset), ResetColor, Show, LeaveAlternateScreen)?;
        self.output.flush_stdout()
    }
}

impl Default for DiffRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Fast cell equality check.
#[inline]
fn cells_equal(a: &Cell, b: &Cell) -> bool {
    a.char == b.char && a.attrs == b.attrs && a.fg == b.fg && a.bg == b.bg
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Attr, Rgba};

    #[test]
    fn test_cells_equal() {
        let a = Cell {
            char: 'X' as u32,
            fg: Rgba::WHITE,
            bg: Rgba::BLACK,
            attrs: Attr::BOLD,
        };
        let b = a;
        assert!(cells_equal(&a, &b));

        let c = Cell {
            char: 'Y' as u32,
            ..a
        };
        assert!(!cells_equal(&a, &c));
    }

    #[test]
    fn test_second_identical_frame_has_no_changes() {
        let mut renderer = DiffRenderer::new();
        let mut buffer = FrameBuffer::new(8, 2);
        buffer.draw_text(0, 0, "hi", Rgba::GREEN, None, Attr::NONE, None);

        let mut sink = Vec::new();
        assert!(renderer.render_to(&buffer, &mut sink).unwrap());
        assert!(renderer.has_previous());
        assert!(String::from_utf8_lossy(&sink).contains("hi"));

        let mut sink = Vec::new();
        assert!(!renderer.render_to(&buffer, &mut sink).unwrap());
        assert!(!String::from_utf8_lossy(&sink).contains("hi"));
    }

    #[test]
    fn test_only_changed_cells_are_written() {
        let mut renderer = DiffRenderer::new();
        let mut buffer = FrameBuffer::new(8, 1);
        buffer.draw_text(0, 0, "abc", Rgba::WHITE, None, Attr::NONE, None);
        renderer.render_to(&buffer, &mut Vec::new()).unwrap();

        buffer.draw_text(1, 0, "Z", Rgba::WHITE, None, Attr::NONE, None);
        let mut sink = Vec::new();
        renderer.render_to(&buffer, &mut sink).unwrap();
        let out = String::from_utf8_lossy(&sink);
        assert!(out.contains('Z'));
        assert!(!out.contains('a'));
        assert!(!out.contains('c'));
    }

    #[test]
    fn test_invalidate() {
        let mut renderer = DiffRenderer::new();
        renderer.render_to(&FrameBuffer::new(2, 2), &mut Vec::new()).unwrap();
        assert!(renderer.has_previous());

        renderer.invalidate();
        assert!(!renderer.has_previous());
    }
}
