//! Color constants for the night-garden look.

#![allow(dead_code)]

// === NIGHT (Backgrounds) ===
pub const NIGHT_BLACK: &str = "#000000";
pub const NIGHT_SOFT: &str = "#0b0712";
pub const NIGHT_BORDER: &str = "#241a30";

// === GARDEN (Stems, Leaves, Grass) ===
pub const STEM_GREEN: &str = "#39c16c";
pub const LEAF_GREEN: &str = "#2e9e58";
pub const GRASS_GREEN: &str = "#1f7a43";

// === PETAL (Default flower color and accents) ===
pub const PETAL_PINK: &str = "#f672b0";
pub const PETAL_GLOW: &str = "rgba(246, 114, 176, 0.35)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#ffffff";
pub const TEXT_SECONDARY: &str = "rgba(255, 255, 255, 0.7)";
pub const TEXT_MUTED: &str = "rgba(255, 255, 255, 0.45)";

// === SEMANTIC ===
pub const SEED_BROWN: &str = "#8a5a2b";
pub const COPIED_GREEN: &str = "#46d37e";
