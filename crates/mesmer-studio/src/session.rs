//! Session loop and accounting
//!
//! One session: generate, persist, pause, repeat. A single failure ends
//! the session; there is no automatic retry of a failed generation. That
//! is a deliberate policy, not an oversight: every unit of work either
//! fully succeeds or the whole run stops with the reason on the log.

use crate::generator::Generator;
use chrono::{Timelike, Utc};
use mesmer_agent::GenerationService;
use mesmer_core::{Result, SessionState};
use mesmer_gallery::ArtworkStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Fixed pause between generations to throttle request rate
pub const ITERATION_DELAY: Duration = Duration::from_secs(3);

/// Final accounting for one session
#[derive(Debug, Clone, Copy)]
pub struct SessionSummary {
    pub generated: u64,
    pub total_cost: f64,
    pub average_cost: f64,
}

/// Drives repeated generations with accounting and cooperative cancellation
///
/// The loop is the only writer of its [`SessionState`]; the marketplace
/// process never sees it, so no locking is involved.
pub struct SessionLoop<S, T> {
    generator: Generator<S>,
    store: T,
    state: SessionState,
    cancelled: Arc<AtomicBool>,
    rng: StdRng,
    hour_source: fn() -> u32,
}

impl<S: GenerationService, T: ArtworkStore> SessionLoop<S, T> {
    pub fn new(generator: Generator<S>, store: T) -> Self {
        Self {
            generator,
            store,
            state: SessionState::new(),
            cancelled: Arc::new(AtomicBool::new(false)),
            rng: StdRng::from_entropy(),
            hour_source: current_hour,
        }
    }

    /// Seed the loop's randomness deterministically
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Override where the loop reads the current hour
    pub fn with_hour_source(mut self, hour_source: fn() -> u32) -> Self {
        self.hour_source = hour_source;
        self
    }

    /// Cancellation flag observed between iterations
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        self.cancelled.clone()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            generated: self.state.generated,
            total_cost: self.state.total_cost,
            average_cost: self.state.average_cost(),
        }
    }

    /// Generate until `count` is reached, forever when `None`
    ///
    /// Returns the number of artworks generated by this call. An error
    /// from the orchestrator or the store ends the session immediately;
    /// cancellation between iterations ends it cleanly.
    pub async fn run(&mut self, count: Option<u64>) -> Result<u64> {
        match count {
            Some(limit) => info!("Starting generation session for {} artwork(s)", limit),
            None => info!("Starting open-ended generation session"),
        }

        let mut produced: u64 = 0;
        loop {
            if let Some(limit) = count {
                if produced >= limit {
                    break;
                }
            }
            if self.cancelled.load(Ordering::SeqCst) {
                info!("Cancellation requested, ending session");
                break;
            }

            let hour = (self.hour_source)();
            let generated = match self.generator.generate(&mut self.rng, hour).await {
                Ok(generated) => generated,
                Err(e) => {
                    error!("Generation failed, ending session: {}", e);
                    return Err(e);
                }
            };

            let folder = match self.store.persist(&generated.artwork).await {
                Ok(folder) => folder,
                Err(e) => {
                    error!("Failed to persist artwork, ending session: {}", e);
                    return Err(e);
                }
            };

            self.state.record(generated.cost);
            produced += 1;

            info!(
                "Stored {} ({}) in {}",
                generated.artwork.name, generated.artwork.rarity, folder
            );
            info!(
                "Session total: {} artwork(s), ${:.2} spent",
                self.state.generated, self.state.total_cost
            );

            let keep_going = count.map_or(true, |limit| produced < limit);
            if keep_going {
                tokio::time::sleep(ITERATION_DELAY).await;
            }
        }

        Ok(produced)
    }
}

fn current_hour() -> u32 {
    Utc::now().hour()
}
