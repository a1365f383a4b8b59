//! Core type definitions for Mesmer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rarity tiers, from most to least likely
///
/// The declaration order is load-bearing: the rarity selector walks
/// [`Rarity::ALL`] accumulating probability weights, so the tiers must
/// stay ordered Common, Rare, Epic, Legendary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// Probability weight and pricing parameters for one rarity tier
///
/// Weights across all tiers sum to 1.0. That is a precondition on this
/// table, checked by tests, not re-validated at every draw.
#[derive(Debug, Clone, Copy)]
pub struct RarityConfig {
    pub weight: f64,
    pub base_price: f64,
    pub multiplier: f64,
}

/// Structural requirements a generated piece must meet for its tier
#[derive(Debug, Clone, Copy)]
pub struct TierRequirement {
    /// Minimum number of animation directives in the markup
    pub min_animations: usize,
    /// Target complexity score (1-10), also the pricing fallback
    pub complexity: u8,
    /// How many palette colors the prompt suggests
    pub colors: usize,
}

impl Rarity {
    /// All tiers in selection order
    pub const ALL: [Rarity; 4] = [Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary];

    pub fn config(self) -> RarityConfig {
        match self {
            Rarity::Common => RarityConfig {
                weight: 0.40,
                base_price: 40.0,
                multiplier: 1.0,
            },
            Rarity::Rare => RarityConfig {
                weight: 0.30,
                base_price: 100.0,
                multiplier: 1.5,
            },
            Rarity::Epic => RarityConfig {
                weight: 0.20,
                base_price: 250.0,
                multiplier: 2.0,
            },
            Rarity::Legendary => RarityConfig {
                weight: 0.10,
                base_price: 500.0,
                multiplier: 3.0,
            },
        }
    }

    pub fn requirement(self) -> TierRequirement {
        match self {
            Rarity::Common => TierRequirement {
                min_animations: 6,
                complexity: 6,
                colors: 4,
            },
            Rarity::Rare => TierRequirement {
                min_animations: 10,
                complexity: 7,
                colors: 6,
            },
            Rarity::Epic => TierRequirement {
                min_animations: 15,
                complexity: 8,
                colors: 8,
            },
            Rarity::Legendary => TierRequirement {
                min_animations: 20,
                complexity: 10,
                colors: 10,
            },
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rarity::Common => write!(f, "Common"),
            Rarity::Rare => write!(f, "Rare"),
            Rarity::Epic => write!(f, "Epic"),
            Rarity::Legendary => write!(f, "Legendary"),
        }
    }
}

impl std::str::FromStr for Rarity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "common" => Ok(Rarity::Common),
            "rare" => Ok(Rarity::Rare),
            "epic" => Ok(Rarity::Epic),
            "legendary" => Ok(Rarity::Legendary),
            _ => Err(format!(
                "Invalid rarity: {}. Use common, rare, epic, or legendary.",
                s
            )),
        }
    }
}

/// One accepted artwork, immutable once assembled
///
/// `price` is always derived from rarity and complexity, never taken from
/// the remote service. `svg` has already passed structural validation by
/// the time an `Artwork` exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artwork {
    pub name: String,
    pub description: String,
    pub style: String,
    pub rarity: Rarity,
    pub price: f64,
    pub attributes: serde_json::Map<String, serde_json::Value>,
    pub svg: String,
}

/// Mutable accounting state for one generation session
///
/// Owned exclusively by the session loop; never persisted and never
/// shared with the marketplace process.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Artworks accepted so far, monotonically increasing
    pub generated: u64,
    /// Accumulated generation cost in USD, monotonically increasing
    pub total_cost: f64,
    /// When the session started
    pub started_at: DateTime<Utc>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            generated: 0,
            total_cost: 0.0,
            started_at: Utc::now(),
        }
    }

    /// Record one accepted artwork and its estimated cost
    pub fn record(&mut self, cost: f64) {
        self.generated += 1;
        self.total_cost += cost;
    }

    /// Average cost per artwork, 0.0 when nothing was generated
    pub fn average_cost(&self) -> f64 {
        if self.generated == 0 {
            return 0.0;
        }
        self.total_cost / self.generated as f64
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
