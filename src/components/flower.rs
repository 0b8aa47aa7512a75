//! Flower component
//!
//! Draws a single flower as layered divs: a head of petals (shape and
//! count depend on the kind), sparkles drifting up from the bloom, and a
//! stem with leaves. Gradients are derived from the configured color, so
//! every flower picks up the user's palette.

use bloomcard_core::card::FlowerKind;
use bloomcard_core::color::{darken, lighten};
use dioxus::prelude::*;

/// Properties for the Flower component
#[derive(Clone, PartialEq, Props)]
pub struct FlowerProps {
    /// Which variety to draw
    pub kind: FlowerKind,
    /// Base petal color as `#rrggbb`
    pub color: String,
    /// Horizontal position in percent
    pub left_pct: i32,
    /// Bloom animation delay in seconds (the stem starts 0.8s earlier)
    #[props(default = 0.5)]
    pub delay_s: f64,
    /// Stem height in vmin
    pub height_vmin: i32,
    /// Tilt in degrees
    pub rotation_deg: i32,
    /// Overall scale factor
    #[props(default = 0.5)]
    pub scale: f64,
}

#[component]
pub fn Flower(props: FlowerProps) -> Element {
    let petal_styles = petal_styles(props.kind, &props.color);
    let sparkle_styles = sparkle_styles(props.kind, &props.color);
    let leaf_styles = stem_leaf_styles();
    let stem_delay = props.delay_s - 0.8;
    let lily = props.kind == FlowerKind::Lily;

    rsx! {
        div {
            class: "flower",
            style: "left: {props.left_pct}%; transform: translateX(-50%) rotate({props.rotation_deg}deg) scale({props.scale});",
            div {
                class: "flower-head",
                style: "animation-delay: {props.delay_s}s;",
                for style in petal_styles {
                    div { class: "petal", style: "{style}" }
                }
                if lily {
                    for style in stamen_styles() {
                        div { class: "stamen", style: "{style}" }
                    }
                    div { class: "pistil" }
                }
                for style in sparkle_styles {
                    div { class: "sparkle", style: "{style}" }
                }
            }
            div {
                class: "stem",
                style: "height: {props.height_vmin}vmin; animation-delay: {stem_delay}s;",
                for (side, style) in leaf_styles {
                    div { class: "stem-leaf {side}", style: "{style}" }
                }
            }
        }
    }
}

/// Inline styles for the petal layer of a flower head.
fn petal_styles(kind: FlowerKind, color: &str) -> Vec<String> {
    match kind {
        FlowerKind::Rose => rose_petal_styles(color),
        FlowerKind::Tulip => tulip_petal_styles(color),
        FlowerKind::Lily => lily_petal_styles(color),
    }
}

/// Roses pack 18 petals into three rings of six.
fn rose_petal_styles(color: &str) -> Vec<String> {
    let shaded = darken(color, 15).unwrap_or_else(|_| color.to_string());
    (0..18)
        .map(|i| {
            let ring = i / 6;
            let angle = (i % 6) * 60 + ring * 20;
            let scale = 1.0 - 0.22 * ring as f64;
            format!(
                "background: linear-gradient(to top, {}, {}); \
                 transform: translateX(-50%) rotate({}deg) scale({:.2});",
                shaded, color, angle, scale
            )
        })
        .collect()
}

/// Tulips have three outer and three inner petals.
fn tulip_petal_styles(color: &str) -> Vec<String> {
    let dark = darken(color, 20).unwrap_or_else(|_| color.to_string());
    let light = lighten(color, 20).unwrap_or_else(|_| color.to_string());

    let outer = [-35, 0, 35].into_iter().map(|angle| {
        format!(
            "background: linear-gradient(to top, {}, {}); \
             transform: translateX(-50%) rotate({}deg);",
            dark, color, angle
        )
    });
    let inner = [-16, 16, 0].into_iter().map(|angle| {
        format!(
            "background: linear-gradient(to top, {} 20%, {} 60%, {}); \
             transform: translateX(-50%) rotate({}deg) scale(0.85);",
            dark, color, light, angle
        )
    });
    outer.chain(inner).collect()
}

/// Lilies spread six pale tepals in a full circle.
fn lily_petal_styles(color: &str) -> Vec<String> {
    let base = lighten(color, 20).unwrap_or_else(|_| color.to_string());
    let tip = lighten(color, 40).unwrap_or_else(|_| color.to_string());
    (0..6)
        .map(|i| {
            format!(
                "background: linear-gradient(to top, {}, {}); \
                 transform: translateX(-50%) rotate({}deg);",
                base,
                tip,
                i * 60
            )
        })
        .collect()
}

/// Six stamens fanned around the lily's pistil.
fn stamen_styles() -> Vec<String> {
    (0..6)
        .map(|i| {
            let angle = -50 + i * 20;
            format!("transform: translateX(-50%) rotate({}deg);", angle)
        })
        .collect()
}

/// Sparkles floating up from the bloom. Tulips get a denser cloud.
fn sparkle_styles(kind: FlowerKind, color: &str) -> Vec<String> {
    let light = lighten(color, 30).unwrap_or_else(|_| color.to_string());

    if kind == FlowerKind::Tulip {
        let lefts = [45, 55, 40, 60, 50, 48, 52, 46, 43, 57, 38, 62];
        let delays = [1.0, 1.2, 1.4, 1.6, 1.8, 2.0, 2.2, 2.4, 0.8, 0.9, 1.5, 2.1];
        return lefts
            .iter()
            .zip(delays)
            .enumerate()
            .map(|(i, (left, delay))| {
                let tint = if i % 2 == 0 { color } else { light.as_str() };
                let size = if i % 3 == 0 { 1.4 } else { 1.0 };
                format!(
                    "left: {}%; animation-delay: {}s; background: {}; \
                     width: {}vmin; height: {}vmin; box-shadow: 0 0 0.6vmin {};",
                    left, delay, tint, size, size, tint
                )
            })
            .collect();
    }

    let lefts = [30, 70, 40, 60, 50, 35, 65, 45];
    lefts
        .iter()
        .enumerate()
        .map(|(i, left)| {
            let tint = if i % 2 == 0 { color } else { light.as_str() };
            format!(
                "left: {}%; animation-delay: {:.1}s; background: {};",
                left,
                0.8 + 0.4 * i as f64,
                tint
            )
        })
        .collect()
}

/// Six leaves alternating up the stem.
fn stem_leaf_styles() -> Vec<(&'static str, String)> {
    (0..6)
        .map(|i| {
            let side = if i % 2 == 0 { "left" } else { "right" };
            (side, format!("bottom: {}%;", 15 + i * 12))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rose_has_eighteen_petals() {
        assert_eq!(rose_petal_styles("#f672b0").len(), 18);
    }

    #[test]
    fn tulip_has_six_petals_and_dense_sparkles() {
        assert_eq!(tulip_petal_styles("#f672b0").len(), 6);
        assert_eq!(sparkle_styles(FlowerKind::Tulip, "#f672b0").len(), 12);
    }

    #[test]
    fn lily_has_six_tepals_and_six_stamens() {
        assert_eq!(lily_petal_styles("#f672b0").len(), 6);
        assert_eq!(stamen_styles().len(), 6);
    }

    #[test]
    fn malformed_color_still_renders() {
        // Shade derivation degrades to the raw string; no panic, no empty set
        assert_eq!(rose_petal_styles("not-a-color").len(), 18);
    }

    #[test]
    fn stem_leaves_alternate_sides() {
        let leaves = stem_leaf_styles();
        assert_eq!(leaves.len(), 6);
        assert_eq!(leaves[0].0, "left");
        assert_eq!(leaves[1].0, "right");
    }
}
