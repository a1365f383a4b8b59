//! Generation cost estimation
//!
//! The current hour is supplied by the caller, never read from the
//! system clock here, so the discount branch stays testable.

/// Base rate in USD per 1000 tokens
const COST_PER_1K_TOKENS: f64 = 0.014;

/// Rate factor applied during the off-peak window
const OFF_PEAK_FACTOR: f64 = 0.25;

/// Whether `hour` (0-23) falls in the off-peak discount window
pub fn is_off_peak(hour: u32) -> bool {
    hour >= 16 || hour == 0
}

/// Estimate the USD cost of a generation from its reported token usage
pub fn estimate_cost(total_tokens: u64, hour: u32) -> f64 {
    let mut rate = COST_PER_1K_TOKENS;
    if is_off_peak(hour) {
        rate *= OFF_PEAK_FACTOR;
    }

    (total_tokens as f64 / 1000.0) * rate
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_peak_rate() {
        assert!((estimate_cost(1000, 12) - 0.014).abs() < EPS);
        assert!((estimate_cost(2500, 8) - 0.035).abs() < EPS);
    }

    #[test]
    fn test_off_peak_rate() {
        assert!((estimate_cost(1000, 20) - 0.0035).abs() < EPS);
    }

    #[test]
    fn test_window_boundaries() {
        // Window opens at 16 and includes midnight
        assert!(!is_off_peak(15));
        assert!(is_off_peak(16));
        assert!(is_off_peak(23));
        assert!(is_off_peak(0));
        assert!(!is_off_peak(1));

        assert!((estimate_cost(1000, 15) - 0.014).abs() < EPS);
        assert!((estimate_cost(1000, 16) - 0.0035).abs() < EPS);
        assert!((estimate_cost(1000, 23) - 0.0035).abs() < EPS);
        assert!((estimate_cost(1000, 0) - 0.0035).abs() < EPS);
        assert!((estimate_cost(1000, 1) - 0.014).abs() < EPS);
    }

    #[test]
    fn test_zero_tokens_cost_nothing() {
        assert_eq!(estimate_cost(0, 12), 0.0);
        assert_eq!(estimate_cost(0, 20), 0.0);
    }
}
