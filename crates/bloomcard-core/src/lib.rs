//! Bloomcard Core Library
//!
//! The logic behind Bloomcard, a decorative card app: configure a flower,
//! a color, and a short message, then share the card as a link that opens
//! a read-only animated view.
//!
//! ## Overview
//!
//! - [`share`] — the link codec: a card configuration round-trips through
//!   a URL-safe token carried in the `f` query parameter
//! - [`placement`] — gap-respecting random placement for planted flowers
//! - [`color`] — shade derivation and luma helpers for petal rendering
//! - [`card`] — the card state record and its pure reducer
//!
//! ## Quick Start
//!
//! ```
//! use bloomcard_core::card::{CardAction, CardState, FlowerKind};
//! use bloomcard_core::share::{self, ShareConfig};
//!
//! let mut rng = rand::rng();
//! let state = CardState::new()
//!     .apply(CardAction::SetFlower(FlowerKind::Tulip), &mut rng)
//!     .apply(CardAction::SetMessage("hi!".to_string()), &mut rng);
//!
//! let link = share::share_link(share::DEFAULT_BASE_URL, &state.to_share()).unwrap();
//! let token = share::token_from_link(&link);
//! let decoded = ShareConfig::decode(token).unwrap();
//! assert_eq!(CardState::from_share(&decoded).flower, FlowerKind::Tulip);
//! ```

pub mod card;
pub mod color;
pub mod error;
pub mod placement;
pub mod share;

// Re-exports
pub use card::{CardAction, CardState, FlowerKind, Garden, PlantedFlower};
pub use error::{CardError, CardResult};
pub use share::ShareConfig;
