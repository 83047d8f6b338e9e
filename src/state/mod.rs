//! State - input and scroll state.
//!
//! - [`keyboard`] - Key event types
//! - [`input`] - crossterm event conversion
//! - [`global_keys`] - Shortcuts that work on every screen
//! - [`scroll`] - Document scroll offset

pub mod global_keys;
pub mod input;
pub mod keyboard;
pub mod scroll;

pub use global_keys::{global_action, is_interrupt, GlobalAction};
pub use input::{convert_event, convert_key_event, read_event, InputEvent};
pub use keyboard::{KeyState, KeyboardEvent, Modifiers};
pub use scroll::{ScrollAction, ScrollState};
