//! Editor page - where a card is composed.
//!
//! Config panel on the left, live preview on the right. When the process
//! was launched with a share link, this page immediately hands off to the
//! recipient view.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{ConfigPanel, PreviewPanel};

#[component]
pub fn Editor() -> Element {
    let navigator = use_navigator();

    // A launch-time share link skips the editor entirely
    use_effect(move || {
        if let Some(token) = crate::take_launch_token() {
            navigator.push(Route::SharedView { f: token });
        }
    });

    rsx! {
        main { class: "editing-mode",
            ConfigPanel {}
            PreviewPanel {}
        }
    }
}
