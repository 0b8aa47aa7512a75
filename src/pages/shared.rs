//! Recipient view - fullscreen display of a shared card.
//!
//! The route carries the token in the `f` query parameter. Decoding
//! happens once; a malformed token is treated exactly like an absent one
//! and the default card is shown instead.

use bloomcard_core::card::{CardAction, CardState};
use bloomcard_core::share::ShareConfig;
use bloomcard_ui::TypewriterText;
use dioxus::prelude::*;

use crate::components::Meadow;
use crate::context::dispatch;

#[component]
pub fn SharedView(f: String) -> Element {
    // This view owns its card: the recipient can still plant seeds, but
    // nothing they do leaks back into the sender's editor state.
    let mut card = use_signal(move || match ShareConfig::decode(&f) {
        Ok(config) => {
            tracing::info!("Opened shared card");
            CardState::from_share(&config)
        }
        Err(e) => {
            tracing::warn!("Failed to decode share token, showing defaults: {}", e);
            CardState::new()
        }
    });
    let state = card();

    rsx! {
        div { class: "shared-view",
            if !state.message.is_empty() {
                TypewriterText { text: state.message.clone() }
            }
            Meadow {
                state: state.clone(),
                flower_scale: 1.0,
                on_plant: move |slot| dispatch(&mut card, CardAction::PlantSeed { slot }),
            }
        }
    }
}
