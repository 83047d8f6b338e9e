//! Core types for flexbox-tutor.
//!
//! These types define the foundation that everything builds on.
//! They flow through the reactive pipeline and define what the renderer understands.

use std::fmt;

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Special values: r=-1 means "terminal default" (let terminal pick),
/// r=-2 means "ANSI palette entry" with the index stored in g.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Terminal default color (let terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    // Named palette colors. These follow the user's terminal theme.
    pub const BLACK: Self = Self::ansi(0);
    pub const RED: Self = Self::ansi(1);
    pub const GREEN: Self = Self::ansi(2);
    pub const YELLOW: Self = Self::ansi(3);
    pub const BLUE: Self = Self::ansi(4);
    pub const MAGENTA: Self = Self::ansi(5);
    pub const CYAN: Self = Self::ansi(6);
    pub const WHITE: Self = Self::ansi(7);
    pub const GRAY: Self = Self::ansi(8);

    /// Create an ANSI palette color (0-255).
    ///
    /// Uses special marker: r=-2, g=palette_index.
    /// - 0-7: Standard colors
    /// - 8-15: Bright colors
    /// - 16-231: 6x6x6 RGB cube
    /// - 232-255: Grayscale
    pub const fn ansi(index: u8) -> Self {
        Self {
            r: -2,
            g: index as i16,
            b: 0,
            a: 255,
        }
    }

    /// Check if this is the terminal default color.
    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }

    /// Check if this is an ANSI palette color.
    #[inline]
    pub const fn is_ansi(&self) -> bool {
        self.r == -2
    }

    /// Get ANSI palette index (only valid if is_ansi() returns true).
    #[inline]
    pub const fn ansi_index(&self) -> u8 {
        self.g as u8
    }
}

// =============================================================================
// Dimension
// =============================================================================

/// A size value for width/height/basis properties.
///
/// ```
/// use flexbox_tutor::types::Dimension;
///
/// let width = Dimension::Cells(50);       // 50 characters
/// let height = Dimension::Percent(100.0); // Full parent height
/// let auto = Dimension::Auto;             // Content-determined
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    /// Auto-size based on content.
    #[default]
    Auto,
    /// Absolute size in terminal cells.
    Cells(u16),
    /// Percentage of parent size (0-100).
    Percent(f32),
}

impl From<u16> for Dimension {
    fn from(value: u16) -> Self {
        Self::Cells(value)
    }
}

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for efficient storage and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const INVERSE = 1 << 5;
        const STRIKETHROUGH = 1 << 7;
    }
}

// =============================================================================
// Cell - The atomic unit of terminal rendering
// =============================================================================

/// A single terminal cell.
///
/// A `char` of 0 marks the second half of a wide character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Unicode codepoint (32 for space).
    pub char: u32,
    /// Foreground color.
    pub fg: Rgba,
    /// Background color.
    pub bg: Rgba,
    /// Attribute flags (bold, italic, etc.).
    pub attrs: Attr,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: b' ' as u32,
            fg: Rgba::TERMINAL_DEFAULT,
            bg: Rgba::TERMINAL_DEFAULT,
            attrs: Attr::NONE,
        }
    }
}

// =============================================================================
// ClipRect
// =============================================================================

/// A clipping rectangle in absolute document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClipRect {
    /// Create a new clip rect.
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Check if a point is inside this rect.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && (x as u32) < self.x as u32 + self.width as u32
            && y >= self.y
            && (y as u32) < self.y as u32 + self.height as u32
    }

    /// Compute intersection of two rects.
    pub fn intersect(&self, other: &ClipRect) -> Option<ClipRect> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.x.saturating_add(self.width).min(other.x.saturating_add(other.width));
        let y2 = self.y.saturating_add(self.height).min(other.y.saturating_add(other.height));

        if x2 > x1 && y2 > y1 {
            Some(ClipRect {
                x: x1,
                y: y1,
                width: x2 - x1,
                height: y2 - y1,
            })
        } else {
            None
        }
    }
}

// =============================================================================
// Component Types
// =============================================================================

/// Component types stored in the tree's type column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ComponentType {
    #[default]
    Box = 1,
    Text = 2,
}

// =============================================================================
// Border Styles
// =============================================================================

/// Border line styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum BorderStyle {
    #[default]
    None = 0,
    /// ─ │ ┌ ┐ └ ┘
    Single = 1,
    /// ═ ║ ╔ ╗ ╚ ╝
    Double = 2,
    /// ─ │ ╭ ╮ ╰ ╯
    Rounded = 3,
    /// ━ ┃ ┏ ┓ ┗ ┛
    Bold = 4,
}

impl BorderStyle {
    /// Get the border characters for this style.
    ///
    /// Returns: (horizontal, vertical, top_left, top_right, bottom_right, bottom_left)
    pub const fn chars(&self) -> (char, char, char, char, char, char) {
        match self {
            Self::None => (' ', ' ', ' ', ' ', ' ', ' '),
            Self::Single => ('─', '│', '┌', '┐', '┘', '└'),
            Self::Double => ('═', '║', '╔', '╗', '╝', '╚'),
            Self::Rounded => ('─', '│', '╭', '╮', '╯', '╰'),
            Self::Bold => ('━', '┃', '┏', '┓', '┛', '┗'),
        }
    }

    /// Cells taken by the border on each side.
    #[inline]
    pub const fn width(&self) -> u16 {
        match self {
            Self::None => 0,
            _ => 1,
        }
    }
}

// =============================================================================
// Edges - margin/padding per side
// =============================================================================

/// Per-side spacing in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Edges {
    pub const ZERO: Self = Self::all(0);

    /// Same value on all four sides.
    pub const fn all(n: u16) -> Self {
        Self { top: n, right: n, bottom: n, left: n }
    }

    /// Left and right only.
    pub const fn x(n: u16) -> Self {
        Self { top: 0, right: n, bottom: 0, left: n }
    }

    /// Top and bottom only.
    pub const fn y(n: u16) -> Self {
        Self { top: n, right: 0, bottom: n, left: 0 }
    }

    /// Horizontal (`x`) and vertical (`y`) values.
    pub const fn xy(x: u16, y: u16) -> Self {
        Self { top: y, right: x, bottom: y, left: x }
    }

    pub const fn top(n: u16) -> Self {
        Self { top: n, ..Self::ZERO }
    }

    pub const fn right(n: u16) -> Self {
        Self { right: n, ..Self::ZERO }
    }

    pub const fn bottom(n: u16) -> Self {
        Self { bottom: n, ..Self::ZERO }
    }

    pub const fn left(n: u16) -> Self {
        Self { left: n, ..Self::ZERO }
    }

    /// Sum of left and right.
    #[inline]
    pub const fn horizontal(&self) -> u16 {
        self.left + self.right
    }

    /// Sum of top and bottom.
    #[inline]
    pub const fn vertical(&self) -> u16 {
        self.top + self.bottom
    }
}

// =============================================================================
// Flex Enums - For layout
// =============================================================================

/// Flex direction for container layout.
///
/// Column is the default: terminal content reads top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum FlexDirection {
    #[default]
    Column = 0,
    Row = 1,
}

impl FlexDirection {
    /// Check if this is a row direction.
    pub const fn is_row(&self) -> bool {
        matches!(self, Self::Row)
    }

    /// Swap row and column.
    pub const fn toggle(self) -> Self {
        match self {
            Self::Column => Self::Row,
            Self::Row => Self::Column,
        }
    }

    /// CSS name of the value.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Column => "column",
            Self::Row => "row",
        }
    }

    /// Rust path of the value, as written in builder code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Column => "FlexDirection::Column",
            Self::Row => "FlexDirection::Row",
        }
    }
}

/// Justify content (main axis distribution).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum JustifyContent {
    #[default]
    FlexStart = 0,
    Center = 1,
    FlexEnd = 2,
    SpaceBetween = 3,
    SpaceAround = 4,
}

impl JustifyContent {
    /// Every value in the order the lessons cycle through them.
    pub const ALL: [Self; 5] = [
        Self::FlexStart,
        Self::Center,
        Self::FlexEnd,
        Self::SpaceBetween,
        Self::SpaceAround,
    ];

    /// The following value, wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&v| v == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// CSS name of the value.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FlexStart => "flex-start",
            Self::Center => "center",
            Self::FlexEnd => "flex-end",
            Self::SpaceBetween => "space-between",
            Self::SpaceAround => "space-around",
        }
    }

    /// Rust path of the value, as written in builder code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::FlexStart => "JustifyContent::FlexStart",
            Self::Center => "JustifyContent::Center",
            Self::FlexEnd => "JustifyContent::FlexEnd",
            Self::SpaceBetween => "JustifyContent::SpaceBetween",
            Self::SpaceAround => "JustifyContent::SpaceAround",
        }
    }
}

/// Align items (cross axis alignment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum AlignItems {
    #[default]
    Stretch = 0,
    FlexStart = 1,
    Center = 2,
    FlexEnd = 3,
}

impl AlignItems {
    /// Every value in the order the lessons cycle through them.
    pub const ALL: [Self; 4] = [Self::FlexStart, Self::Center, Self::FlexEnd, Self::Stretch];

    /// The following value, wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&v| v == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// CSS name of the value.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::FlexStart => "flex-start",
            Self::Center => "center",
            Self::FlexEnd => "flex-end",
        }
    }

    /// Rust path of the value, as written in builder code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Stretch => "AlignItems::Stretch",
            Self::FlexStart => "AlignItems::FlexStart",
            Self::Center => "AlignItems::Center",
            Self::FlexEnd => "AlignItems::FlexEnd",
        }
    }
}

impl fmt::Display for FlexDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for JustifyContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AlignItems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_justify_cycles_through_all_values() {
        let mut j = JustifyContent::FlexStart;
        let mut seen = vec![j];
        for _ in 0..4 {
            j = j.next();
            seen.push(j);
        }
        assert_eq!(seen, JustifyContent::ALL.to_vec());
        assert_eq!(j.next(), JustifyContent::FlexStart);
    }

    #[test]
    fn test_align_cycle_wraps_from_stretch() {
        assert_eq!(AlignItems::FlexStart.next(), AlignItems::Center);
        assert_eq!(AlignItems::Stretch.next(), AlignItems::FlexStart);
    }

    #[test]
    fn test_css_names() {
        assert_eq!(JustifyContent::SpaceBetween.to_string(), "space-between");
        assert_eq!(AlignItems::FlexEnd.to_string(), "flex-end");
        assert_eq!(FlexDirection::Row.toggle().to_string(), "column");
    }

    #[test]
    fn test_edges_helpers() {
        assert_eq!(Edges::x(4).horizontal(), 8);
        assert_eq!(Edges::x(4).vertical(), 0);
        assert_eq!(Edges::xy(2, 1), Edges { top: 1, right: 2, bottom: 1, left: 2 });
        assert_eq!(Edges::top(2).top, 2);
    }

    #[test]
    fn test_clip_rect_intersect() {
        let a = ClipRect::new(0, 0, 10, 10);
        let b = ClipRect::new(5, 5, 10, 10);
        assert_eq!(a.intersect(&b), Some(ClipRect::new(5, 5, 5, 5)));
        assert!(a.intersect(&ClipRect::new(20, 20, 1, 1)).is_none());
        assert!(a.contains(9, 9));
        assert!(!a.contains(10, 0));
    }
}
