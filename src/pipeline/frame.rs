//! Frame computation: app state in, terminal-sized FrameBuffer out.
//!
//! ```text
//! App::view → ComponentTree → compute_layout → paint_tree → crop at scroll offset
//! ```
//!
//! The whole document is laid out and painted every time; the viewport is a
//! crop of it. [`create_frame_derived`] wraps this in a derived so any signal
//! read along the way (current screen, lesson state, scroll offset, terminal
//! size) schedules a new frame.

use std::rc::Rc;

use spark_signals::{derived, Derived};
use tracing::{trace, warn};

use crate::app::App;
use crate::error::Result;
use crate::layout::compute_layout;
use crate::primitives::Ui;
use crate::renderer::FrameBuffer;
use crate::state::scroll::{clamp_offset, reveal};
use crate::types::ClipRect;

use super::frame_buffer::{absolute_rect, paint_tree};

/// The fully painted page, before any scrolling.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub buffer: FrameBuffer,
    /// Where the active screen's scroll anchor ended up, if it has one.
    pub anchor: Option<ClipRect>,
}

/// Build, lay out and paint the active screen at `width` columns.
///
/// The page is at least `min_height` rows tall (0 lets it take its natural
/// height).
pub fn render_document(app: &App, width: u16, min_height: u16) -> Result<Document> {
    let mut ui = Ui::new();
    app.view(&mut ui);
    let tree = ui.finish();

    let layout = compute_layout(&tree, width, min_height)?;
    let height = layout.content_height.max(min_height);

    let mut buffer = FrameBuffer::new(width, height);
    paint_tree(&mut buffer, &tree, &layout);

    let anchor = app
        .scroll_anchor()
        .and_then(|id| tree.index_of(&id))
        .map(|index| absolute_rect(&tree, &layout, index));

    Ok(Document { buffer, anchor })
}

/// One terminal-sized frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameResult {
    /// Viewport contents, exactly terminal-sized.
    pub buffer: FrameBuffer,
    /// Offset the viewport was cropped at.
    pub scroll: u16,
    /// Largest useful offset for this document.
    pub max_scroll: u16,
    pub document_height: u16,
    pub terminal_size: (u16, u16),
}

/// Compute the frame for the current app state.
///
/// A layout failure is logged and produces a blank frame rather than
/// tearing the session down.
pub fn render_frame(app: &App) -> FrameResult {
    let width = app.terminal.width();
    let height = app.terminal.height();
    let requested = app.scroll.offset();

    match render_document(app, width, height) {
        Ok(document) => {
            let document_height = document.buffer.height();
            let max_scroll = document_height.saturating_sub(height);
            let mut scroll = clamp_offset(requested, document_height, height);
            if let Some(anchor) = document.anchor {
                scroll = reveal(scroll, anchor.y, anchor.height, height).min(max_scroll);
            }
            trace!(scroll, max_scroll, document_height, "frame");

            FrameResult {
                buffer: document.buffer.crop_rows(scroll, height),
                scroll,
                max_scroll,
                document_height,
                terminal_size: (width, height),
            }
        }
        Err(err) => {
            warn!(error = %err, "frame failed");
            FrameResult {
                buffer: FrameBuffer::new(width, height),
                scroll: 0,
                max_scroll: 0,
                document_height: 0,
                terminal_size: (width, height),
            }
        }
    }
}

/// Create the frame derived for an app.
pub fn create_frame_derived(app: Rc<App>) -> Derived<FrameResult> {
    derived(move || render_frame(&app))
}
