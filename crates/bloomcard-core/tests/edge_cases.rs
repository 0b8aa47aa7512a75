//! Edge case and boundary condition tests
//!
//! These tests verify the codec, picker, and reducer handle unusual
//! inputs and boundary values correctly.

use rand::rngs::StdRng;
use rand::SeedableRng;

use bloomcard_core::card::{CardAction, CardState, Garden, MESSAGE_MAX_CHARS, SEED_COUNT};
use bloomcard_core::placement::pick_position;
use bloomcard_core::share::ShareConfig;
use bloomcard_core::CardError;

// ============================================================================
// Message Content Tests
// ============================================================================

/// Empty message round-trips (the codec does no defaulting)
#[test]
fn test_empty_message_roundtrip() {
    let config = ShareConfig::new("rose", "#f672b0", "");
    let decoded = ShareConfig::decode(&config.encode().unwrap()).unwrap();
    assert_eq!(decoded.message.as_deref(), Some(""));
}

/// Whitespace-only messages survive untouched
#[test]
fn test_whitespace_message_roundtrip() {
    for message in ["   ", "\t", "\n", "\r\n", "  \t\n "] {
        let config = ShareConfig::new("rose", "#f672b0", message);
        let decoded = ShareConfig::decode(&config.encode().unwrap()).unwrap();
        assert_eq!(decoded.message.as_deref(), Some(message));
    }
}

/// Unicode messages round-trip by character, not byte
#[test]
fn test_unicode_message_roundtrip() {
    let message = "\u{1F339}".repeat(25); // rose emoji, 4 bytes each
    let config = ShareConfig::new("rose", "#f672b0", &message);
    let decoded = ShareConfig::decode(&config.encode().unwrap()).unwrap();
    assert_eq!(decoded.message.as_deref(), Some(message.as_str()));
}

/// The codec does not enforce the editor's 100-char bound
#[test]
fn test_oversized_message_roundtrips_through_codec() {
    let message = "a".repeat(10 * MESSAGE_MAX_CHARS);
    let config = ShareConfig::new("rose", "#f672b0", &message);
    let decoded = ShareConfig::decode(&config.encode().unwrap()).unwrap();
    assert_eq!(decoded.message.as_deref(), Some(message.as_str()));

    // The resolution layer is where the bound applies
    let state = CardState::from_share(&decoded);
    assert_eq!(state.message.chars().count(), MESSAGE_MAX_CHARS);
}

// ============================================================================
// Token Shape Tests
// ============================================================================

/// Underlying lengths of 0, 2, and 3 mod 4 all decode; consecutive message
/// lengths cover every reachable residue
#[test]
fn test_padding_length_residues() {
    let mut residues = Vec::new();
    for message in ["", "a", "ab"] {
        let config = ShareConfig::new("rose", "#f672b0", message);
        let token = config.encode().unwrap();
        residues.push(token.len() % 4);
        assert_eq!(ShareConfig::decode(&token).unwrap(), config);
    }
    residues.sort_unstable();
    assert_eq!(residues, vec![0, 2, 3]);
}

/// A token length of 1 mod 4 has no base64 preimage and must be rejected
#[test]
fn test_impossible_length_rejected() {
    let result = ShareConfig::decode("AAAAA");
    assert!(matches!(result, Err(CardError::InvalidToken(_))));
}

/// Tokens never carry padding, and padded input is not accepted
#[test]
fn test_padded_token_rejected() {
    let result = ShareConfig::decode("e30=");
    assert!(matches!(result, Err(CardError::InvalidToken(_))));
}

/// The empty token is malformed, not an empty configuration
#[test]
fn test_empty_token_rejected() {
    assert!(ShareConfig::decode("").is_err());
}

/// JSON scalars are rejected; only objects decode
#[test]
fn test_non_object_json_rejected() {
    // "5" and "null" in URL-safe base64
    for token in ["NQ", "bnVsbA"] {
        let result = ShareConfig::decode(token);
        assert!(
            matches!(result, Err(CardError::InvalidToken(_))),
            "expected {:?} to be rejected",
            token
        );
    }
}

// ============================================================================
// Placement Saturation Tests
// ============================================================================

/// When every position is blocked at both gap levels, the fallback still
/// returns an in-range value
#[test]
fn test_saturated_range_falls_back() {
    let occupied: Vec<i32> = (12..=88).collect();
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..100 {
        let pos = pick_position(&mut rng, &occupied, 12, 88, 10, 3).unwrap();
        assert!((12..=88).contains(&pos));
    }
}

/// A zero-gap request accepts any position, including occupied ones
#[test]
fn test_zero_gap_always_strict() {
    let mut rng = StdRng::seed_from_u64(5);
    let pos = pick_position(&mut rng, &[42], 42, 42, 0, 1).unwrap();
    assert_eq!(pos, 42);
}

// ============================================================================
// Seed Pool Exhaustion Tests
// ============================================================================

/// Planting past the pool is a no-op at every step
#[test]
fn test_seed_pool_exhaustion() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut garden = Garden::new();
    for expected_remaining in (0..SEED_COUNT).rev() {
        garden = garden.plant(0, &mut rng);
        assert_eq!(garden.seeds().len(), expected_remaining);
    }
    for _ in 0..3 {
        let after = garden.plant(0, &mut rng);
        assert_eq!(after.planted().len(), SEED_COUNT);
        garden = after;
    }
}

/// Planting through the reducer keeps every flower inside the bounds even
/// when the garden fills up
#[test]
fn test_full_garden_positions_in_bounds() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut state = CardState::new();
    for _ in 0..SEED_COUNT {
        state = state.apply(CardAction::PlantSeed { slot: 0 }, &mut rng);
    }
    assert_eq!(state.garden.planted().len(), SEED_COUNT);
    for flower in state.garden.planted() {
        assert!((12..=88).contains(&flower.left_pct));
    }
}
