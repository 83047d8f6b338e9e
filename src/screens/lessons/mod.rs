//! The seven lessons, in menu order.

mod alignment;
mod flex_direction;
mod flex_grow;
mod layout_basics;
mod playground;
mod real_world;
mod spacing;

pub use alignment::AlignmentLesson;
pub use flex_direction::FlexDirectionLesson;
pub use flex_grow::{share_percent, FlexGrowLesson};
pub use layout_basics::LayoutBasicsLesson;
pub use playground::{generated_code, InteractivePlayground, Settings as PlaygroundSettings};
pub use real_world::{Example, RealWorldExamples};
pub use spacing::{margin_description, padding_description, SpacingLesson};
