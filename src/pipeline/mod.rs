//! Reactive Pipeline
//!
//! Connects app state to terminal output.
//!
//! ```text
//! App signals → frame derived (build, layout, paint, crop) → render effect → DiffRenderer
//! ```
//!
//! - [`terminal`] - Size signals and the raw-mode guard
//! - [`frame_buffer`] - Paints a laid-out tree
//! - [`frame`] - The derived that produces each frame
//! - [`mount`] - Render effect and event loop

pub mod frame;
pub mod frame_buffer;
pub mod mount;
pub mod terminal;

pub use frame::{create_frame_derived, render_document, render_frame, Document, FrameResult};
pub use frame_buffer::{absolute_rect, paint_tree};
pub use mount::run;
pub use terminal::{TerminalGuard, TerminalSize};
