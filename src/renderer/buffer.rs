//! FrameBuffer - 2D grid of terminal cells.
//!
//! The painter draws the whole document into one of these; the viewport is
//! then cropped out of it and handed to the diff renderer.

use crate::layout::char_width;
use crate::types::{Attr, BorderStyle, Cell, ClipRect, Rgba};

/// A 2D grid of cells, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a new buffer filled with default (blank) cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// The whole buffer as a clip rect.
    pub fn bounds(&self) -> ClipRect {
        ClipRect::new(0, 0, self.width, self.height)
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            self.cells.get(self.index(x, y))
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.cells.get_mut(idx)
        } else {
            None
        }
    }

    // =========================================================================
    // Drawing Primitives
    // =========================================================================

    /// Set a single cell with optional clipping.
    ///
    /// A `bg` of `None` keeps the background already in the cell.
    /// Returns true if the cell was set.
    #[allow(clippy::too_many_arguments)]
    pub fn set_cell(
        &mut self,
        x: u16,
        y: u16,
        char: u32,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
        clip: Option<&ClipRect>,
    ) -> bool {
        if let Some(clip) = clip {
            if !clip.contains(x, y) {
                return false;
            }
        }

        let Some(cell) = self.get_mut(x, y) else {
            return false;
        };

        cell.char = char;
        cell.fg = fg;
        if let Some(bg) = bg {
            cell.bg = bg;
        }
        cell.attrs = attrs;
        true
    }

    /// Fill a rectangle with a background color, blanking its characters.
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, bg: Rgba, clip: Option<&ClipRect>) {
        let area = ClipRect::new(x, y, width, height);
        let Some(area) = area.intersect(&self.bounds()) else {
            return;
        };
        let area = match clip {
            Some(clip) => match area.intersect(clip) {
                Some(a) => a,
                None => return,
            },
            None => area,
        };

        for row in area.y..area.y + area.height {
            let start = self.index(area.x, row);
            let end = start + area.width as usize;
            for cell in &mut self.cells[start..end] {
                cell.char = b' ' as u32;
                cell.bg = bg;
                cell.attrs = Attr::NONE;
            }
        }
    }

    /// Draw a single character. Wide characters also claim the next cell.
    ///
    /// Returns the number of columns advanced.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_char(
        &mut self,
        x: u16,
        y: u16,
        ch: char,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
        clip: Option<&ClipRect>,
    ) -> u16 {
        let width = char_width(ch);
        if width == 0 {
            return 0;
        }

        if self.set_cell(x, y, ch as u32, fg, bg, attrs, clip) && width == 2 {
            let next_x = x.saturating_add(1);
            // Continuation marker
            self.set_cell(next_x, y, 0, fg, bg, attrs, clip);
        }
        width
    }

    /// Draw text at a position.
    ///
    /// Returns the number of cells used (handles wide characters).
    #[allow(clippy::too_many_arguments)]
    pub fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
        clip: Option<&ClipRect>,
    ) -> u16 {
        let mut col = x;
        for ch in text.chars() {
            if col >= self.width {
                break;
            }
            col = col.saturating_add(self.draw_char(col, y, ch, fg, bg, attrs, clip));
        }
        col.saturating_sub(x)
    }

    /// Draw a border around a rectangle.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_border(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        style: BorderStyle,
        color: Rgba,
        clip: Option<&ClipRect>,
    ) {
        if width < 2 || height < 2 || style == BorderStyle::None {
            return;
        }

        let (horiz, vert, tl, tr, br, bl) = style.chars();
        let x2 = x.saturating_add(width - 1);
        let y2 = y.saturating_add(height - 1);

        // Corners
        self.draw_char(x, y, tl, color, None, Attr::NONE, clip);
        self.draw_char(x2, y, tr, color, None, Attr::NONE, clip);
        self.draw_char(x2, y2, br, color, None, Attr::NONE, clip);
        self.draw_char(x, y2, bl, color, None, Attr::NONE, clip);

        for col in (x + 1)..x2 {
            self.draw_char(col, y, horiz, color, None, Attr::NONE, clip);
            self.draw_char(col, y2, horiz, color, None, Attr::NONE, clip);
        }

        for row in (y + 1)..y2 {
            self.draw_char(x, row, vert, color, None, Attr::NONE, clip);
            self.draw_char(x2, row, vert, color, None, Attr::NONE, clip);
        }
    }

    // =========================================================================
    // Export
    // =========================================================================

    /// Copy `height` rows starting at `offset` into a new buffer.
    ///
    /// Rows past the end of this buffer come out blank.
    pub fn crop_rows(&self, offset: u16, height: u16) -> FrameBuffer {
        let mut out = FrameBuffer::new(self.width, height);
        let row_len = self.width as usize;
        for row in 0..height {
            let src_row = offset as usize + row as usize;
            if src_row >= self.height as usize {
                break;
            }
            let src = src_row * row_len;
            let dst = row as usize * row_len;
            out.cells[dst..dst + row_len].copy_from_slice(&self.cells[src..src + row_len]);
        }
        out
    }

    /// Plain text of each row with trailing whitespace removed.
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                let start = self.index(0, y);
                let row = &self.cells[start..start + self.width as usize];
                let line: String = row
                    .iter()
                    .filter(|cell| cell.char != 0)
                    .filter_map(|cell| char::from_u32(cell.char))
                    .collect();
                line.trim_end().to_string()
            })
            .collect()
    }

    /// All rows joined with newlines.
    pub fn to_text(&self) -> String {
        self.to_lines().join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_blank() {
        let buf = FrameBuffer::new(4, 2);
        assert_eq!(buf.width(), 4);
        assert_eq!(buf.height(), 2);
        assert_eq!(buf.get(3, 1), Some(&Cell::default()));
        assert_eq!(buf.get(4, 0), None);
    }

    #[test]
    fn test_draw_text_and_clip() {
        let mut buf = FrameBuffer::new(10, 1);
        let clip = ClipRect::new(0, 0, 3, 1);
        let used = buf.draw_text(0, 0, "hello", Rgba::RED, None, Attr::BOLD, Some(&clip));
        assert_eq!(used, 5);
        assert_eq!(buf.to_lines(), vec!["hel"]);
        assert_eq!(buf.get(0, 0).map(|c| c.attrs), Some(Attr::BOLD));
        assert_eq!(buf.get(0, 0).map(|c| c.fg), Some(Rgba::RED));
    }

    #[test]
    fn test_wide_char_continuation() {
        let mut buf = FrameBuffer::new(6, 1);
        buf.draw_text(0, 0, "日x", Rgba::TERMINAL_DEFAULT, None, Attr::NONE, None);
        assert_eq!(buf.get(1, 0).map(|c| c.char), Some(0));
        assert_eq!(buf.get(2, 0).map(|c| c.char), Some('x' as u32));
        assert_eq!(buf.to_lines(), vec!["日x"]);
    }

    #[test]
    fn test_text_keeps_background() {
        let mut buf = FrameBuffer::new(5, 1);
        buf.fill_rect(0, 0, 5, 1, Rgba::BLUE, None);
        buf.draw_text(1, 0, "a", Rgba::WHITE, None, Attr::NONE, None);
        assert_eq!(buf.get(1, 0).map(|c| c.bg), Some(Rgba::BLUE));
    }

    #[test]
    fn test_draw_border() {
        let mut buf = FrameBuffer::new(4, 3);
        buf.draw_border(0, 0, 4, 3, BorderStyle::Rounded, Rgba::CYAN, None);
        assert_eq!(buf.to_lines(), vec!["╭──╮", "│  │", "╰──╯"]);
    }

    #[test]
    fn test_crop_rows() {
        let mut buf = FrameBuffer::new(3, 3);
        buf.draw_text(0, 0, "a", Rgba::WHITE, None, Attr::NONE, None);
        buf.draw_text(0, 1, "b", Rgba::WHITE, None, Attr::NONE, None);
        buf.draw_text(0, 2, "c", Rgba::WHITE, None, Attr::NONE, None);
        let view = buf.crop_rows(1, 3);
        assert_eq!(view.to_lines(), vec!["b", "c", ""]);
    }
}
