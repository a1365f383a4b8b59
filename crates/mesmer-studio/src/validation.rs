//! Structural acceptance rules for generated markup
//!
//! Three independent rules, each with its own rejection reason: a length
//! floor, a fixed set of required markers, and a tier-dependent animation
//! minimum. Field-level checks on the reply (name, description,
//! attributes) live in the orchestrator, which fails them the same way.

use mesmer_core::{MesmerError, Result};

/// Markup below this length is rejected outright
pub const MIN_MARKUP_LEN: usize = 500;

/// Exact viewport declaration every piece must carry
pub const VIEWPORT_DECLARATION: &str = "viewBox=\"0 0 1000 1000\"";

/// Prefix shared by every SMIL animation directive
pub const ANIMATION_DIRECTIVE: &str = "<animate";

const OPENING_TAG: &str = "<svg";

/// Validate generated markup, returning its animation directive count
pub fn validate_markup(svg: &str, min_animations: usize) -> Result<usize> {
    if svg.trim().is_empty() || svg.len() < MIN_MARKUP_LEN {
        return Err(MesmerError::Validation(format!(
            "markup too short: {} bytes (minimum {})",
            svg.len(),
            MIN_MARKUP_LEN
        )));
    }

    for marker in [OPENING_TAG, ANIMATION_DIRECTIVE, VIEWPORT_DECLARATION] {
        if !svg.contains(marker) {
            return Err(MesmerError::Validation(format!(
                "markup missing required marker: {}",
                marker
            )));
        }
    }

    let animation_count = svg.matches(ANIMATION_DIRECTIVE).count();
    if animation_count < min_animations {
        return Err(MesmerError::Validation(format!(
            "too few animation directives: {} < {}",
            animation_count, min_animations
        )));
    }

    Ok(animation_count)
}
