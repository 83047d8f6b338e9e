//! Layout Types
//!
//! Output types for the layout computation.

/// Computed layout result.
///
/// Contains parallel arrays indexed by component index. Positions are
/// relative to the parent's border box, the way taffy reports them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComputedLayout {
    /// X position (column) of each component, relative to its parent.
    pub x: Vec<u16>,

    /// Y position (row) of each component, relative to its parent.
    pub y: Vec<u16>,

    /// Width of each component.
    pub width: Vec<u16>,

    /// Height of each component.
    pub height: Vec<u16>,

    /// Width of the root, including its margin.
    pub content_width: u16,

    /// Height of the root, including its margin. This is the document height.
    pub content_height: u16,
}

impl ComputedLayout {
    /// Create a new empty computed layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout arrays sized for `count` components.
    pub fn with_len(count: usize) -> Self {
        Self {
            x: vec![0; count],
            y: vec![0; count],
            width: vec![0; count],
            height: vec![0; count],
            content_width: 0,
            content_height: 0,
        }
    }

    /// Get the position and size of a component.
    ///
    /// Returns (x, y, width, height) or zeros if index is out of bounds.
    pub fn get(&self, index: usize) -> (u16, u16, u16, u16) {
        (
            self.x.get(index).copied().unwrap_or(0),
            self.y.get(index).copied().unwrap_or(0),
            self.width.get(index).copied().unwrap_or(0),
            self.height.get(index).copied().unwrap_or(0),
        )
    }
}
