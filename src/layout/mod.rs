//! Layout Module
//!
//! Flexbox layout computation for the component tree using Taffy.
//!
//! # Architecture
//!
//! The layout module uses [Taffy](https://github.com/DioxusLabs/taffy) for
//! W3C-compliant flexbox computation. The bridge:
//!
//! 1. Converts FlexNode properties → Taffy styles
//! 2. Builds the Taffy tree from parent relationships
//! 3. Provides a measure function for text intrinsic sizing
//! 4. Extracts computed layout back into parallel arrays
//!
//! # Example
//!
//! ```
//! use flexbox_tutor::layout::compute_layout;
//! use flexbox_tutor::primitives::{BoxProps, Ui};
//!
//! let mut ui = Ui::new();
//! ui.box_primitive(BoxProps::default(), |ui| {
//!     ui.plain("hello");
//! });
//! let layout = compute_layout(&ui.finish(), 80, 0).unwrap();
//! assert_eq!(layout.content_height, 1);
//! ```

mod taffy_bridge;
mod text_measure;
mod types;

pub use taffy_bridge::compute_layout;
pub use text_measure::*;
pub use types::*;
