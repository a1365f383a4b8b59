//! Rarity selection over a cumulative-probability table

use mesmer_core::Rarity;
use rand::Rng;

/// Draw one rarity tier from the configured distribution
pub fn select_rarity<R: Rng>(rng: &mut R) -> Rarity {
    rarity_for_draw(rng.gen::<f64>())
}

/// Map a uniform draw in [0,1) to a rarity tier
///
/// Walks the tiers in declaration order accumulating weights and returns
/// the first tier whose cumulative total reaches the draw. Falls back to
/// Common if floating-point drift leaves no match, so the mapping is
/// total for any input.
pub fn rarity_for_draw(draw: f64) -> Rarity {
    let mut cumulative = 0.0;
    for rarity in Rarity::ALL {
        cumulative += rarity.config().weight;
        if cumulative >= draw {
            return rarity;
        }
    }
    Rarity::Common
}
