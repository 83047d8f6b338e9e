//! Terminal renderer.
//!
//! - [`FrameBuffer`] - 2D cell grid the painter draws into
//! - [`OutputBuffer`] / [`StatefulCellRenderer`] - batched crossterm output
//! - [`DiffRenderer`] - writes only the cells that changed since the last frame

mod buffer;
mod diff;
mod output;

pub use buffer::FrameBuffer;
pub use diff::DiffRenderer;
pub use output::{to_crossterm_color, OutputBuffer, StatefulCellRenderer};
