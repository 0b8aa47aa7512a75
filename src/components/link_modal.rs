//! Link modal
//!
//! Shows the generated share link with a copy button. Copying uses the
//! system clipboard via arboard and flashes "Copied!" for a moment.

use std::time::Duration;

use bloomcard_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

#[component]
pub fn LinkModal(link: String, on_close: EventHandler<()>) -> Element {
    let mut copied = use_signal(|| false);
    let link_for_copy = link.clone();

    let copy = move |_| {
        let text = link_for_copy.clone();
        spawn(async move {
            match arboard::Clipboard::new() {
                Ok(mut clipboard) => {
                    if clipboard.set_text(text).is_ok() {
                        copied.set(true);
                        tokio::time::sleep(Duration::from_secs(2)).await;
                        copied.set(false);
                    }
                }
                Err(e) => {
                    tracing::warn!("Clipboard not available: {}", e);
                }
            }
        });
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "link-modal",
                onclick: move |e| e.stop_propagation(),

                h2 { class: "modal-title", "Share this link" }

                div { class: "link-wrapper",
                    input {
                        class: "input-field link-input",
                        r#type: "text",
                        readonly: true,
                        value: "{link}",
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        class: if copied() { Some("copied".to_string()) } else { None },
                        onclick: copy,
                        if copied() {
                            "\u{2713} Copied!"
                        } else {
                            "Copy"
                        }
                    }
                }

                div { class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}
