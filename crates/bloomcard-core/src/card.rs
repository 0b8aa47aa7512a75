//! Card state and reducer
//!
//! All mutable UI state lives in one [`CardState`] record. Updates go
//! through [`CardState::apply`], which consumes a [`CardAction`] and
//! returns a fresh record, leaving the previous one untouched. The random
//! source is threaded in from the caller so every update is reproducible
//! under a seeded generator.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::CardError;
use crate::placement::{self, ANCHOR_POSITIONS};
use crate::share::ShareConfig;

/// Default petal color
pub const DEFAULT_COLOR: &str = "#f672b0";

/// Default message
pub const DEFAULT_MESSAGE: &str = "hi crush!";

/// Upper bound on message length, in characters
pub const MESSAGE_MAX_CHARS: usize = 100;

/// Seeds available per session; also the cap on planted flowers
pub const SEED_COUNT: usize = 5;

/// Tilt range for a planted flower, in degrees
pub const ROTATION_MAX_DEG: i32 = 20;

/// Stem height range for a planted flower, in vmin
pub const HEIGHT_RANGE_VMIN: (i32, i32) = (40, 60);

/// The flower varieties the bouquet can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowerKind {
    #[default]
    Rose,
    Tulip,
    Lily,
}

impl FlowerKind {
    /// Every kind, in display order
    pub const ALL: [FlowerKind; 3] = [FlowerKind::Rose, FlowerKind::Tulip, FlowerKind::Lily];

    /// Wire tag for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowerKind::Rose => "rose",
            FlowerKind::Tulip => "tulip",
            FlowerKind::Lily => "lily",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            FlowerKind::Rose => "Rose",
            FlowerKind::Tulip => "Tulip",
            FlowerKind::Lily => "Lily",
        }
    }
}

impl fmt::Display for FlowerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlowerKind {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rose" => Ok(FlowerKind::Rose),
            "tulip" => Ok(FlowerKind::Tulip),
            "lily" => Ok(FlowerKind::Lily),
            other => Err(CardError::UnknownFlower(other.to_string())),
        }
    }
}

/// A decorative flower added by consuming a seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlantedFlower {
    /// Rendering identity only; carries no meaning beyond uniqueness
    pub id: u64,
    /// Horizontal position in percent
    pub left_pct: i32,
    /// Tilt in degrees, within `[-20, 20]`
    pub rotation_deg: i32,
    /// Stem height in vmin, within `[40, 60]`
    pub height_vmin: i32,
}

/// Planted flowers plus the remaining seed pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Garden {
    planted: Vec<PlantedFlower>,
    seeds: Vec<u8>,
    next_id: u64,
}

impl Garden {
    /// A fresh garden with the full seed pool and nothing planted.
    pub fn new() -> Self {
        Self {
            planted: Vec::new(),
            seeds: (1..=SEED_COUNT as u8).collect(),
            next_id: 1,
        }
    }

    /// Remaining seed slot labels.
    pub fn seeds(&self) -> &[u8] {
        &self.seeds
    }

    /// Flowers planted so far, in planting order.
    pub fn planted(&self) -> &[PlantedFlower] {
        &self.planted
    }

    /// Horizontal positions already in use: the three bouquet anchors plus
    /// every planted flower.
    pub fn occupied(&self) -> Vec<i32> {
        ANCHOR_POSITIONS
            .iter()
            .copied()
            .chain(self.planted.iter().map(|f| f.left_pct))
            .collect()
    }

    /// Consume the seed at `slot` and grow a flower in a clear spot.
    ///
    /// Returns the updated garden. An out-of-range slot, an empty pool, or
    /// a full garden leaves the state unchanged.
    pub fn plant<R: Rng + ?Sized>(&self, slot: usize, rng: &mut R) -> Garden {
        if slot >= self.seeds.len() || self.planted.len() >= SEED_COUNT {
            return self.clone();
        }

        let left_pct = placement::pick_plant_position(rng, &self.occupied());
        let flower = PlantedFlower {
            id: self.next_id,
            left_pct,
            rotation_deg: rng.random_range(-ROTATION_MAX_DEG..=ROTATION_MAX_DEG),
            height_vmin: rng.random_range(HEIGHT_RANGE_VMIN.0..=HEIGHT_RANGE_VMIN.1),
        };

        let mut seeds = self.seeds.clone();
        seeds.remove(slot);
        let mut planted = self.planted.clone();
        planted.push(flower);

        Garden {
            planted,
            seeds,
            next_id: self.next_id + 1,
        }
    }
}

impl Default for Garden {
    fn default() -> Self {
        Self::new()
    }
}

/// An update to the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    SetFlower(FlowerKind),
    SetColor(String),
    SetMessage(String),
    PlantSeed { slot: usize },
}

/// The whole card: configuration plus garden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardState {
    pub flower: FlowerKind,
    pub color: String,
    pub message: String,
    pub garden: Garden,
}

impl CardState {
    /// The default card shown before any editing or decoding.
    pub fn new() -> Self {
        Self {
            flower: FlowerKind::default(),
            color: DEFAULT_COLOR.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
            garden: Garden::new(),
        }
    }

    /// Resolve a decoded configuration into a renderable card.
    ///
    /// The codec passes unknown tags and malformed colors through; this is
    /// where they degrade, per field, to the defaults. Absent fields take
    /// the defaults too.
    pub fn from_share(config: &ShareConfig) -> Self {
        let flower = match config.flower.as_deref() {
            Some(tag) => tag.parse().unwrap_or_else(|_| {
                tracing::warn!("Unknown flower tag {:?}, falling back to default", tag);
                FlowerKind::default()
            }),
            None => FlowerKind::default(),
        };

        let color = match config.color.as_deref() {
            Some(c) if Rgb::parse(c).is_ok() => c.to_string(),
            Some(c) => {
                tracing::warn!("Malformed color {:?}, falling back to default", c);
                DEFAULT_COLOR.to_string()
            }
            None => DEFAULT_COLOR.to_string(),
        };

        let message = match config.message.as_deref() {
            Some(m) => truncate_message(m),
            None => DEFAULT_MESSAGE.to_string(),
        };

        Self {
            flower,
            color,
            message,
            garden: Garden::new(),
        }
    }

    /// Snapshot the shareable part of the card (the garden stays local).
    pub fn to_share(&self) -> ShareConfig {
        ShareConfig::new(self.flower.as_str(), self.color.clone(), self.message.clone())
    }

    /// Apply an action, producing the next state.
    pub fn apply<R: Rng + ?Sized>(&self, action: CardAction, rng: &mut R) -> CardState {
        let mut next = self.clone();
        match action {
            CardAction::SetFlower(kind) => next.flower = kind,
            CardAction::SetColor(color) => next.color = color,
            CardAction::SetMessage(message) => next.message = truncate_message(&message),
            CardAction::PlantSeed { slot } => next.garden = self.garden.plant(slot, rng),
        }
        next
    }
}

impl Default for CardState {
    fn default() -> Self {
        Self::new()
    }
}

fn truncate_message(message: &str) -> String {
    if message.chars().count() <= MESSAGE_MAX_CHARS {
        message.to_string()
    } else {
        message.chars().take(MESSAGE_MAX_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::placement::{PLANT_MAX_LEFT, PLANT_MIN_LEFT};

    #[test]
    fn test_flower_kind_roundtrip() {
        for kind in FlowerKind::ALL {
            assert_eq!(kind.as_str().parse::<FlowerKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_flower_kind_rejects_unknown() {
        assert!(matches!(
            "daisy".parse::<FlowerKind>(),
            Err(CardError::UnknownFlower(_))
        ));
        // Tags are case-sensitive on the wire
        assert!("Rose".parse::<FlowerKind>().is_err());
    }

    #[test]
    fn test_fresh_garden() {
        let garden = Garden::new();
        assert_eq!(garden.seeds(), &[1, 2, 3, 4, 5]);
        assert!(garden.planted().is_empty());
        assert_eq!(garden.occupied(), vec![35, 50, 65]);
    }

    #[test]
    fn test_plant_consumes_one_seed() {
        let mut rng = StdRng::seed_from_u64(42);
        let garden = Garden::new().plant(2, &mut rng);
        assert_eq!(garden.seeds(), &[1, 2, 4, 5]);
        assert_eq!(garden.planted().len(), 1);

        let flower = garden.planted()[0];
        assert!((PLANT_MIN_LEFT..=PLANT_MAX_LEFT).contains(&flower.left_pct));
        assert!((-ROTATION_MAX_DEG..=ROTATION_MAX_DEG).contains(&flower.rotation_deg));
        assert!((HEIGHT_RANGE_VMIN.0..=HEIGHT_RANGE_VMIN.1).contains(&flower.height_vmin));
    }

    #[test]
    fn test_planting_all_seeds_empties_the_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut garden = Garden::new();
        for _ in 0..SEED_COUNT {
            garden = garden.plant(0, &mut rng);
        }
        assert!(garden.seeds().is_empty());
        assert_eq!(garden.planted().len(), SEED_COUNT);

        // Ids are unique
        let mut ids: Vec<u64> = garden.planted().iter().map(|f| f.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), SEED_COUNT);

        // The pool is exhausted; further planting is a no-op
        let after = garden.plant(0, &mut rng);
        assert_eq!(after, garden);
    }

    #[test]
    fn test_plant_out_of_range_slot_is_noop() {
        let mut rng = StdRng::seed_from_u64(42);
        let garden = Garden::new();
        assert_eq!(garden.plant(SEED_COUNT, &mut rng), garden);
    }

    #[test]
    fn test_reducer_does_not_mutate_previous_state() {
        let mut rng = StdRng::seed_from_u64(1);
        let state = CardState::new();
        let next = state.apply(CardAction::SetFlower(FlowerKind::Lily), &mut rng);
        assert_eq!(state.flower, FlowerKind::Rose);
        assert_eq!(next.flower, FlowerKind::Lily);
    }

    #[test]
    fn test_reducer_truncates_long_messages() {
        let mut rng = StdRng::seed_from_u64(1);
        let long = "x".repeat(250);
        let state = CardState::new().apply(CardAction::SetMessage(long), &mut rng);
        assert_eq!(state.message.chars().count(), MESSAGE_MAX_CHARS);
    }

    #[test]
    fn test_share_roundtrip_through_state() {
        let mut rng = StdRng::seed_from_u64(1);
        let state = CardState::new()
            .apply(CardAction::SetFlower(FlowerKind::Tulip), &mut rng)
            .apply(CardAction::SetColor("#2a9d8f".to_string()), &mut rng)
            .apply(CardAction::SetMessage("be my valentine".to_string()), &mut rng);

        let resolved = CardState::from_share(&state.to_share());
        assert_eq!(resolved.flower, state.flower);
        assert_eq!(resolved.color, state.color);
        assert_eq!(resolved.message, state.message);
    }

    #[test]
    fn test_from_share_falls_back_per_field() {
        let config = ShareConfig::new("daisy", "magenta", "still here");
        let state = CardState::from_share(&config);
        assert_eq!(state.flower, FlowerKind::Rose);
        assert_eq!(state.color, DEFAULT_COLOR);
        assert_eq!(state.message, "still here");
    }

    #[test]
    fn test_from_share_defaults_absent_fields() {
        let state = CardState::from_share(&ShareConfig::default());
        assert_eq!(state.flower, FlowerKind::Rose);
        assert_eq!(state.color, DEFAULT_COLOR);
        assert_eq!(state.message, DEFAULT_MESSAGE);
    }
}
