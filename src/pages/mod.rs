//! Page components for Bloomcard.

mod editor;
mod shared;

pub use editor::Editor;
pub use shared::SharedView;
