//! Config panel
//!
//! The left-hand editor column: flower variety, petal color, and the
//! message. Every change dispatches an action through the reducer so the
//! preview updates live.

use bloomcard_core::card::{CardAction, FlowerKind, DEFAULT_MESSAGE};
use bloomcard_ui::{Input, MessageArea};
use dioxus::prelude::*;

use crate::context::{dispatch, use_card};

fn glyph(kind: FlowerKind) -> &'static str {
    match kind {
        FlowerKind::Rose => "\u{1F339}",
        FlowerKind::Tulip => "\u{1F337}",
        FlowerKind::Lily => "\u{1F33A}",
    }
}

#[component]
pub fn ConfigPanel() -> Element {
    let mut card = use_card();
    let state = card();

    rsx! {
        div { class: "config-panel",
            h1 { class: "panel-title", "Bloomcard" }

            div { class: "flower-type-selector",
                label { class: "section-label", "Choose Your Flower" }
                div { class: "type-options",
                    for kind in FlowerKind::ALL {
                        label {
                            class: if state.flower == kind { "type-option selected" } else { "type-option" },
                            input {
                                r#type: "radio",
                                name: "flower-kind",
                                value: "{kind}",
                                checked: state.flower == kind,
                                onchange: move |_| dispatch(&mut card, CardAction::SetFlower(kind)),
                            }
                            span { class: "type-glyph", {glyph(kind)} }
                            span { class: "type-name", "{kind.label()}" }
                        }
                    }
                }
            }

            div { class: "color-row",
                Input {
                    value: state.color.clone(),
                    oninput: move |c| dispatch(&mut card, CardAction::SetColor(c)),
                    label: "Flower Color".to_string(),
                    input_type: "color".to_string(),
                    class: "color-input".to_string(),
                }
                span { class: "color-hex", "{state.color}" }
            }

            MessageArea {
                value: state.message.clone(),
                oninput: move |m| dispatch(&mut card, CardAction::SetMessage(m)),
                label: "Message".to_string(),
                placeholder: DEFAULT_MESSAGE.to_string(),
            }
        }
    }
}
