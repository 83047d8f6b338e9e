//! Screens: the lesson menu, the lessons, and the chrome around them.

pub mod chrome;
pub mod lessons;
pub mod menu;

pub use menu::MenuScreen;
