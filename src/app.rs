use bloomcard_core::card::CardState;
use dioxus::prelude::*;

use crate::pages::{Editor, SharedView};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Editor with config panel and live preview
/// - `/share?f=<token>` - Read-only recipient view for a shared card
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Editor {},
    #[route("/share?:f")]
    SharedView { f: String },
}

/// Root application component.
///
/// Provides global styles and the card state context, and redirects to the
/// recipient view when the process was launched with a share link.
#[component]
pub fn App() -> Element {
    // The editor's card state, shared by config panel and preview
    let card: Signal<CardState> = use_signal(CardState::new);
    use_context_provider(|| card);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
