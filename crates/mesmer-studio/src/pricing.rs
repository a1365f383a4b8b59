//! Sale price derivation from rarity and complexity

use mesmer_core::Rarity;

/// Price one artwork: `base * multiplier * (1 + complexity / 20)`
///
/// Complexity is clamped to the documented 1-10 range before entering
/// the formula, so an out-of-range score from the service cannot distort
/// the price. Pure function; identical inputs give identical output.
pub fn price_for(rarity: Rarity, complexity: u8) -> f64 {
    let config = rarity.config();
    let complexity = complexity.clamp(1, 10);
    let complexity_bonus = 1.0 + f64::from(complexity) / 20.0;

    round2(config.base_price * config.multiplier * complexity_bonus)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
