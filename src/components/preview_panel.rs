//! Preview panel
//!
//! Live preview of the card plus the Generate button. Generating builds
//! the share link from the current state and opens the link modal.

use bloomcard_core::card::CardAction;
use bloomcard_core::share::{self, DEFAULT_BASE_URL};
use bloomcard_ui::{Button, ButtonVariant, TypewriterText};
use dioxus::prelude::*;

use crate::components::{LinkModal, Meadow};
use crate::context::{dispatch, use_card};

#[component]
pub fn PreviewPanel() -> Element {
    let mut card = use_card();
    let state = card();
    let mut link: Signal<Option<String>> = use_signal(|| None);

    let generate = move |_| {
        let snapshot = card.peek().to_share();
        match share::share_link(DEFAULT_BASE_URL, &snapshot) {
            Ok(url) => {
                tracing::info!("Generated share link");
                link.set(Some(url));
            }
            Err(e) => {
                tracing::error!("Failed to build share link: {}", e);
            }
        }
    };

    rsx! {
        div { class: "preview-panel",
            div { class: "preview-screen",
                if !state.message.is_empty() {
                    TypewriterText { text: state.message.clone() }
                }
                Meadow {
                    state: state.clone(),
                    on_plant: move |slot| dispatch(&mut card, CardAction::PlantSeed { slot }),
                }
            }

            div { class: "generate-section",
                Button {
                    variant: ButtonVariant::Generate,
                    onclick: generate,
                    "Generate"
                }
            }

            if let Some(url) = link() {
                LinkModal {
                    link: url,
                    on_close: move |_| link.set(None),
                }
            }
        }
    }
}
