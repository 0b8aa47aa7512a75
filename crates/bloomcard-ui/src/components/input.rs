//! Form Field Components
//!
//! Text input and the bounded message textarea with a live character
//! count.

use bloomcard_core::card::MESSAGE_MAX_CHARS;
use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Input type (text, color, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Labeled input field
///
/// # Example
///
/// ```rust,ignore
/// let mut color = use_signal(|| "#f672b0".to_string());
///
/// rsx! {
///     Input {
///         value: color(),
///         oninput: move |s| color.set(s),
///         label: "Flower Color".to_string(),
///         input_type: "color".to_string()
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = props.id.clone().unwrap_or_else(|| format!("input-{}", field_id()));
    let extra_class = props.class.as_deref().unwrap_or("");
    let input_class = if extra_class.is_empty() {
        "input-field".to_string()
    } else {
        format!("input-field {}", extra_class)
    };

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "section-label",
                    r#for: "{id}",
                    "{label}"
                }
            }
            input {
                id: "{id}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the MessageArea component
#[derive(Clone, PartialEq, Props)]
pub struct MessageAreaProps {
    /// Current message text
    pub value: String,
    /// Handler called when the message changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Label text
    #[props(default)]
    pub label: Option<String>,
    /// Maximum characters accepted
    #[props(default = MESSAGE_MAX_CHARS)]
    pub max_chars: usize,
    /// Number of visible rows
    #[props(default = 3)]
    pub rows: u32,
}

/// Bounded textarea with a live `n/max` character count
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     MessageArea {
///         value: message(),
///         oninput: move |s| message.set(s),
///         label: "Message".to_string(),
///         placeholder: "hi crush!".to_string()
///     }
/// }
/// ```
#[component]
pub fn MessageArea(props: MessageAreaProps) -> Element {
    let id = format!("message-{}", field_id());
    let count = props.value.chars().count();
    let max_chars = props.max_chars;

    rsx! {
        div { class: "form-field message-field",
            if let Some(label) = &props.label {
                label {
                    class: "section-label",
                    r#for: "{id}",
                    "{label}"
                }
            }
            div { class: "message-input-wrapper",
                textarea {
                    id: "{id}",
                    class: "input-field textarea",
                    rows: "{props.rows}",
                    maxlength: "{max_chars}",
                    placeholder: props.placeholder.as_deref().unwrap_or(""),
                    value: "{props.value}",
                    oninput: move |e| props.oninput.call(e.value()),
                }
                span { class: "char-count", "{count}/{max_chars}" }
            }
        }
    }
}

/// Generate a simple unique ID for form elements
fn field_id() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (duration.as_nanos() % 1_000_000) as u32
}
