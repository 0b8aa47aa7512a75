//! Horizontal placement for planted flowers
//!
//! When a seed is planted, the new flower needs a horizontal position (a
//! percentage of the viewport) that keeps a minimum visual gap to every
//! flower already standing. The picker prefers a clear spot, relaxes the
//! gap if the strict search exhausts its attempts, and as a last resort
//! accepts any in-range position — it always terminates with a value, in
//! at most `2 * max_attempts + 1` draws.
//!
//! The random source is an argument, not a hidden global, so callers can
//! seed a [`rand::rngs::StdRng`] and assert exact sequences in tests.

use rand::Rng;

use crate::error::{CardError, CardResult};

/// Positions of the three always-present bouquet flowers, in percent
pub const ANCHOR_POSITIONS: [i32; 3] = [35, 50, 65];

/// Leftmost position a planted flower may take, in percent
pub const PLANT_MIN_LEFT: i32 = 12;

/// Rightmost position a planted flower may take, in percent
pub const PLANT_MAX_LEFT: i32 = 88;

/// Minimum distance between flowers before relaxing, in percent
pub const PLANT_MIN_GAP: i32 = 10;

/// Draws per search phase
pub const PLANT_ATTEMPTS: u32 = 25;

fn clear_of(candidate: i32, occupied: &[i32], gap: i32) -> bool {
    occupied.iter().all(|&o| (candidate - o).abs() >= gap)
}

/// Pick a position in `[min, max]` keeping distance to `occupied` points.
///
/// Three phases:
/// 1. Up to `max_attempts` uniform draws accepted at distance `>= min_gap`
///    from every occupied position.
/// 2. Up to `max_attempts` more draws with the gap relaxed to
///    `max(4, min_gap / 2)`.
/// 3. One unconditional uniform draw.
///
/// # Errors
///
/// Returns `CardError::InvalidRange` if `min > max`.
pub fn pick_position<R: Rng + ?Sized>(
    rng: &mut R,
    occupied: &[i32],
    min: i32,
    max: i32,
    min_gap: i32,
    max_attempts: u32,
) -> CardResult<i32> {
    if min > max {
        return Err(CardError::InvalidRange { min, max });
    }

    for _ in 0..max_attempts {
        let candidate = rng.random_range(min..=max);
        if clear_of(candidate, occupied, min_gap) {
            return Ok(candidate);
        }
    }

    let relaxed_gap = (min_gap / 2).max(4);
    for _ in 0..max_attempts {
        let candidate = rng.random_range(min..=max);
        if clear_of(candidate, occupied, relaxed_gap) {
            return Ok(candidate);
        }
    }

    Ok(rng.random_range(min..=max))
}

/// Pick a position for a newly planted flower using the standard bounds.
///
/// Infallible: the standard bounds are well-formed, and phase 3 always
/// produces a value.
pub fn pick_plant_position<R: Rng + ?Sized>(rng: &mut R, occupied: &[i32]) -> i32 {
    pick_position(
        rng,
        occupied,
        PLANT_MIN_LEFT,
        PLANT_MAX_LEFT,
        PLANT_MIN_GAP,
        PLANT_ATTEMPTS,
    )
    .unwrap_or((PLANT_MIN_LEFT + PLANT_MAX_LEFT) / 2)
}
