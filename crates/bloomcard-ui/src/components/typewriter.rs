//! Typewriter Text Component
//!
//! Reveals the card message one character at a time with a blinking
//! cursor that disappears once the full text is shown.

use std::time::Duration;

use bloomcard_core::color::text_shadow;
use dioxus::prelude::*;

/// Properties for the TypewriterText component
#[derive(Clone, PartialEq, Props)]
pub struct TypewriterTextProps {
    /// The full text to reveal
    pub text: String,
    /// Text color (also drives the shadow/glow choice)
    #[props(default = "#ffffff".to_string())]
    pub color: String,
    /// Delay between characters, in milliseconds
    #[props(default = 80)]
    pub speed_ms: u64,
}

/// Character-by-character message reveal
///
/// Restarting is handled with a generation counter: changing the text
/// bumps the generation, and the stale reveal task stops advancing as
/// soon as it notices.
#[component]
pub fn TypewriterText(props: TypewriterTextProps) -> Element {
    let mut shown: Signal<usize> = use_signal(|| 0);
    let mut generation: Signal<u32> = use_signal(|| 0);

    let total = props.text.chars().count();
    let speed_ms = props.speed_ms;
    let text = props.text.clone();

    use_effect(use_reactive!(|(text,)| {
        shown.set(0);
        let my_generation = *generation.peek() + 1;
        generation.set(my_generation);
        let total = text.chars().count();

        spawn(async move {
            for revealed in 1..=total {
                tokio::time::sleep(Duration::from_millis(speed_ms)).await;
                if *generation.peek() != my_generation {
                    return;
                }
                shown.set(revealed);
            }
        });
    }));

    let visible: String = props.text.chars().take(shown()).collect();
    let typing = shown() < total;
    let shadow = text_shadow(&props.color);

    rsx! {
        div {
            class: "typewriter-text",
            style: "color: {props.color}; text-shadow: {shadow};",
            "{visible}"
            if typing {
                span { class: "cursor", "|" }
            }
        }
    }
}
