//! # flexbox-tutor
//!
//! Interactive flexbox lessons for the terminal, laid out with
//! [taffy](https://docs.rs/taffy) and driven by
//! [spark-signals](https://docs.rs/spark-signals).
//!
//! ## Architecture
//!
//! Every piece of screen state is a signal. One derived turns the active
//! screen into a frame, and one effect puts that frame on the terminal:
//! ```text
//! signals → view (Ui → ComponentTree) → compute_layout → paint_tree → crop → DiffRenderer
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Colors, cells, edges and the flex enums
//! - [`engine`] - Component tree and styled text spans
//! - [`primitives`] - `Ui` builder with the box and text primitives
//! - [`layout`] - taffy bridge and text measurement
//! - [`renderer`] - Frame buffer and diff rendering through crossterm
//! - [`pipeline`] - Frame derived, render effect, terminal session
//! - [`state`] - Keyboard input, global shortcuts, scrolling
//! - [`screens`] - Menu, lessons and shared chrome
//! - [`app`] - Screen routing and key dispatch
//! - [`config`] - Command line and logging

pub mod app;
pub mod config;
pub mod engine;
pub mod error;
pub mod layout;
pub mod pipeline;
pub mod primitives;
pub mod renderer;
pub mod screens;
pub mod state;
pub mod types;

pub use types::*;

pub use app::{App, AppControl, KeyResult, Screen, ScreenId};
pub use config::{init_logging, Cli};
pub use engine::{plain_text, span, ComponentTree, Span};
pub use error::{Error, Result};
pub use layout::{compute_layout, string_width, wrap_text, ComputedLayout};
pub use pipeline::{render_document, render_frame, run, Document, FrameResult, TerminalSize};
pub use primitives::{BoxProps, TextProps, Ui};
pub use renderer::{DiffRenderer, FrameBuffer};
pub use state::{KeyboardEvent, Modifiers, ScrollState};
