//! Card state context for Bloomcard.
//!
//! The editor's [`CardState`] lives in one signal provided by the App
//! component; every update flows through the reducer so no component
//! mutates fields in place.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut card = use_card();
//! dispatch(&mut card, CardAction::SetFlower(FlowerKind::Tulip));
//! ```

use bloomcard_core::card::{CardAction, CardState};
use dioxus::prelude::*;

/// Hook to access the shared card state from context.
pub fn use_card() -> Signal<CardState> {
    use_context::<Signal<CardState>>()
}

/// Apply an action to a card signal through the reducer.
///
/// Randomness comes from the process RNG here; core tests inject seeded
/// generators instead.
pub fn dispatch(card: &mut Signal<CardState>, action: CardAction) {
    let next = card.peek().apply(action, &mut rand::rng());
    card.set(next);
}
