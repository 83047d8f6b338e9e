//! Mount - the interactive session.
//!
//! Sets up the one render effect that watches the frame derived and pushes
//! frames to the terminal, then blocks on input until the app asks to exit.
//!
//! The effect never writes signals. What it showed (scroll offset and
//! bounds) goes into the app's [`ScrollState`](crate::state::ScrollState)
//! through a plain cell so the next scroll key starts from there.

use std::rc::Rc;

use spark_signals::effect;
use tracing::{debug, info, warn};

use crate::app::{App, AppControl};
use crate::error::Result;
use crate::renderer::DiffRenderer;
use crate::state::{read_event, InputEvent};

use super::frame::create_frame_derived;
use super::terminal::TerminalGuard;

/// Run the app fullscreen until it exits.
///
/// The terminal is restored before this returns, on success and on error.
pub fn run(app: Rc<App>) -> Result<()> {
    let _guard = TerminalGuard::enter()?;

    let frames = create_frame_derived(app.clone());
    let scroll = app.scroll.clone();
    let mut renderer = DiffRenderer::new();
    let mut last_size: Option<(u16, u16)> = None;

    // Keep the stop fn alive for the whole loop.
    let stop = effect(move || {
        let frame = frames.get();
        scroll.record_frame(frame.scroll, frame.max_scroll);

        let result = if last_size != Some(frame.terminal_size) {
            last_size = Some(frame.terminal_size);
            renderer.render_full(&frame.buffer)
        } else {
            renderer.render(&frame.buffer).map(|_| ())
        };
        if let Err(err) = result {
            warn!(error = %err, "render failed");
        }
    });

    info!(screen = app.current().as_str(), "session started");
    let outcome = event_loop(&app);

    stop();
    info!("session ended");
    outcome
}

fn event_loop(app: &App) -> Result<()> {
    loop {
        match read_event()? {
            InputEvent::Key(event) => {
                if app.handle_key(&event) == AppControl::Exit {
                    return Ok(());
                }
            }
            InputEvent::Resize(width, height) => {
                debug!(width, height, "resize");
                app.terminal.resize(width, height);
            }
            InputEvent::None => {}
        }
    }
}
