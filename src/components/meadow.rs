//! Meadow component
//!
//! The ground scene shared by the editor preview and the recipient view:
//! the three anchor flowers, any planted extras, a band of swaying grass,
//! and the clickable seeds.

use bloomcard_core::card::CardState;
use dioxus::prelude::*;

use super::Flower;

/// The three always-present flowers: (left %, bloom delay s, height vmin,
/// rotation deg). Positions match the occupied anchors the placement
/// picker avoids.
const ANCHOR_FLOWERS: [(i32, f64, i32, i32); 3] =
    [(35, 0.8, 45, -8), (50, 1.1, 50, 0), (65, 0.9, 42, 10)];

/// Grass blade layout: (left %, height vmin, sway delay s)
const GRASS_BLADES: [(i32, i32, f64); 25] = [
    (8, 28, 0.0),
    (12, 32, 0.1),
    (18, 35, 0.2),
    (22, 30, 0.15),
    (28, 38, 0.3),
    (32, 26, 0.25),
    (38, 34, 0.4),
    (42, 29, 0.35),
    (48, 36, 0.5),
    (52, 31, 0.45),
    (58, 33, 0.6),
    (62, 27, 0.55),
    (68, 37, 0.7),
    (72, 30, 0.65),
    (78, 32, 0.8),
    (82, 35, 0.75),
    (88, 28, 0.9),
    (92, 34, 0.85),
    (15, 31, 1.0),
    (25, 29, 0.95),
    (35, 36, 1.1),
    (45, 33, 1.05),
    (55, 30, 1.2),
    (65, 32, 1.15),
    (75, 35, 1.25),
];

/// Where the remaining seeds lie scattered: (left %, bottom %)
const SEED_SPOTS: [(i32, i32); 5] = [(25, 12), (42, 8), (58, 15), (73, 10), (35, 18)];

/// Properties for the Meadow component
#[derive(Clone, PartialEq, Props)]
pub struct MeadowProps {
    /// The card being rendered
    pub state: CardState,
    /// Called with the seed slot index when a seed is clicked
    pub on_plant: EventHandler<usize>,
    /// Scale applied to every flower (the editor preview shrinks them)
    #[props(default = 0.5)]
    pub flower_scale: f64,
}

#[component]
pub fn Meadow(props: MeadowProps) -> Element {
    let state = props.state;
    let on_plant = props.on_plant;
    let scale = props.flower_scale;

    // Remaining seeds keep their scatter spot by list position
    let seeds: Vec<(usize, u8, i32, i32)> = state
        .garden
        .seeds()
        .iter()
        .copied()
        .enumerate()
        .map(|(index, seed)| {
            let (left, bottom) = SEED_SPOTS.get(index).copied().unwrap_or((50, 10));
            (index, seed, left, bottom)
        })
        .collect();

    rsx! {
        div { class: "meadow",
            for (left , delay , height , rotation) in ANCHOR_FLOWERS {
                Flower {
                    kind: state.flower,
                    color: state.color.clone(),
                    left_pct: left,
                    delay_s: delay,
                    height_vmin: height,
                    rotation_deg: rotation,
                    scale,
                }
            }

            for flower in state.garden.planted().iter().copied() {
                Flower {
                    key: "{flower.id}",
                    kind: state.flower,
                    color: state.color.clone(),
                    left_pct: flower.left_pct,
                    delay_s: 0.5,
                    height_vmin: flower.height_vmin,
                    rotation_deg: flower.rotation_deg,
                    scale,
                }
            }

            for (left , height , delay) in GRASS_BLADES {
                div {
                    class: "grass",
                    style: "left: {left}%; height: {height}vmin; animation-delay: {delay}s;",
                }
            }
        }

        div { class: "seeds-container",
            for (index , seed , left , bottom) in seeds {
                div {
                    key: "{seed}",
                    class: "seed",
                    title: "Click to grow more flowers!",
                    style: "left: {left}%; bottom: {bottom}%;",
                    onclick: move |_| on_plant.call(index),
                }
            }
        }
    }
}
