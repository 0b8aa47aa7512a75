//! Bloomcard UI Widgets
//!
//! Reusable Dioxus components for the Bloomcard app: buttons, form
//! fields, and the typewriter message display. Styling hooks into the
//! class names defined by the app's global stylesheet.

pub mod components;

pub use components::*;
