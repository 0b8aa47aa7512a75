//! Reusable widgets shared across Bloomcard views
//!
//! - Buttons with style variants (primary, generate, ghost)
//! - Form fields (text input, bounded message textarea)
//! - Typewriter text reveal

mod button;
mod input;
mod typewriter;

pub use button::*;
pub use input::*;
pub use typewriter::*;
