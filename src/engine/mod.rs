//! Engine - the component tree a screen builds every frame.
//!
//! Components are NOT objects. They are indices into parallel arrays:
//!
//! ```text
//! Index 0: Box  (parent=None, direction=column, border=double, ...)
//! Index 1: Text (parent=0,    spans=["Hello"],  ...)
//! Index 2: Box  (parent=0,    width=40,         ...)
//! ```
//!
//! The tree is rebuilt from the current signal values whenever the frame
//! derived recomputes, then handed to layout and the painter.

mod flex_node;
mod registry;
mod text;

pub use flex_node::*;
pub use registry::*;
pub use text::*;
