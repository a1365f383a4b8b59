//! Generation orchestrator
//!
//! One call to [`Generator::generate`] yields exactly one accepted
//! artwork or one propagated error. There is no retry and no repair in
//! here: a service failure or a structurally unacceptable reply goes
//! straight back to the session loop, which decides what the session
//! does with it.

use crate::{cost, naming, palette, pricing, prompt, rarity, validation};
use mesmer_agent::{GenerationRequest, GenerationService};
use mesmer_core::{Artwork, MesmerError, Rarity, Result};
use rand::Rng;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

/// One accepted artwork plus what it cost to produce
#[derive(Debug, Clone)]
pub struct GeneratedArtwork {
    pub artwork: Artwork,
    /// Token usage reported by the service, 0 when omitted
    pub total_tokens: u64,
    /// Estimated generation cost in USD
    pub cost: f64,
}

/// Reply body the service is asked to produce
///
/// Every field is optional at the parse layer; absence is a validation
/// failure, not a parse failure.
#[derive(Debug, Deserialize)]
struct ArtworkReply {
    artwork_name: Option<String>,
    description: Option<String>,
    svg_code: Option<String>,
    attributes: Option<Map<String, Value>>,
}

/// Drives one generation from parameters to accepted artwork
pub struct Generator<S> {
    service: S,
}

impl<S: GenerationService> Generator<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Generate one artwork with freshly drawn style, rarity and name
    pub async fn generate<R: Rng>(&self, rng: &mut R, hour: u32) -> Result<GeneratedArtwork> {
        let style = naming::pick_style(rng);
        let rarity = rarity::select_rarity(rng);
        let name = naming::creative_name(rng);
        self.generate_with(rng, style, rarity, &name, hour).await
    }

    /// Generate one artwork with the tier and identity fixed by the caller
    pub async fn generate_with<R: Rng>(
        &self,
        rng: &mut R,
        style: &str,
        rarity: Rarity,
        name: &str,
        hour: u32,
    ) -> Result<GeneratedArtwork> {
        let requirement = rarity.requirement();
        let palette = palette::select_palette(style, rng);

        info!("Generating {} artwork: {} ({})", rarity, name, style);

        let request = GenerationRequest {
            system: prompt::SYSTEM_ROLE.to_string(),
            prompt: prompt::build_art_prompt(name, style, rarity, &palette),
        };

        let reply = self.service.generate(&request).await?;

        let parsed: ArtworkReply = serde_json::from_str(&reply.content).map_err(|e| {
            MesmerError::Service(format!("Reply is not a valid JSON object: {}", e))
        })?;

        let svg = parsed.svg_code.unwrap_or_default();
        let animation_count = validation::validate_markup(&svg, requirement.min_animations)?;

        let artwork_name = required_field(parsed.artwork_name, "artwork_name")?;
        let description = required_field(parsed.description, "description")?;
        let mut attributes = parsed
            .attributes
            .ok_or_else(|| MesmerError::Validation("reply has no attribute map".to_string()))?;

        // The stored attribute map always carries the two entries the
        // rest of the system keys on, even when the service dropped them.
        attributes
            .entry("animation_count".to_string())
            .or_insert_with(|| Value::from(animation_count as u64));
        attributes
            .entry("complexity".to_string())
            .or_insert_with(|| Value::from(u64::from(requirement.complexity)));

        let complexity = attributes
            .get("complexity")
            .and_then(Value::as_u64)
            .map(|v| v.min(10) as u8)
            .unwrap_or(requirement.complexity);

        let generation_cost = cost::estimate_cost(reply.total_tokens, hour);
        let price = pricing::price_for(rarity, complexity);

        debug!(
            "Accepted {} ({} animations, complexity {}, ${} at ${:.4} cost)",
            artwork_name, animation_count, complexity, price, generation_cost
        );

        Ok(GeneratedArtwork {
            artwork: Artwork {
                name: artwork_name,
                description,
                style: style.to_string(),
                rarity,
                price,
                attributes,
                svg,
            },
            total_tokens: reply.total_tokens,
            cost: generation_cost,
        })
    }
}

fn required_field(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(MesmerError::Validation(format!(
            "reply is missing required field: {}",
            field
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{sample_svg, scripted_reply, ScriptedService};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[tokio::test]
    async fn test_forced_common_generation() {
        let svg = sample_svg(6);
        let service = ScriptedService::with_replies(vec![scripted_reply(&svg, 6, 4200)]);
        let generator = Generator::new(service);
        let mut rng = StdRng::seed_from_u64(1);

        let generated = generator
            .generate_with(&mut rng, "Hypnotic Spirals", Rarity::Common, "Ethereal Vortex", 12)
            .await
            .unwrap();

        // price = base 40 * multiplier 1 * (1 + 6/20)
        assert_eq!(generated.artwork.price, 52.0);
        assert_eq!(generated.artwork.rarity, Rarity::Common);
        assert_eq!(generated.artwork.style, "Hypnotic Spirals");
        assert_eq!(generated.total_tokens, 4200);
        assert!((generated.cost - crate::cost::estimate_cost(4200, 12)).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_complexity_fallback_uses_tier_target() {
        let svg = sample_svg(10);
        let mut reply = scripted_reply(&svg, 10, 1000);
        // Strip complexity from the reply's attribute map
        let mut value: serde_json::Value = serde_json::from_str(&reply.content).unwrap();
        value["attributes"]
            .as_object_mut()
            .unwrap()
            .remove("complexity");
        reply.content = value.to_string();

        let service = ScriptedService::with_replies(vec![reply]);
        let generator = Generator::new(service);
        let mut rng = StdRng::seed_from_u64(1);

        let generated = generator
            .generate_with(&mut rng, "Tesseract", Rarity::Rare, "Temporal Echo", 3)
            .await
            .unwrap();

        // Rare target complexity is 7: 100 * 1.5 * 1.35
        assert_eq!(generated.artwork.price, 202.5);
        assert_eq!(
            generated.artwork.attributes.get("complexity"),
            Some(&Value::from(7u64))
        );
    }

    #[tokio::test]
    async fn test_insufficient_animations_rejected() {
        let svg = sample_svg(9);
        let service = ScriptedService::with_replies(vec![scripted_reply(&svg, 9, 1000)]);
        let generator = Generator::new(service);
        let mut rng = StdRng::seed_from_u64(1);

        let result = generator
            .generate_with(&mut rng, "Tesseract", Rarity::Rare, "Temporal Echo", 3)
            .await;
        assert!(matches!(result, Err(MesmerError::Validation(_))));
    }

    #[tokio::test]
    async fn test_unparsable_reply_is_service_error() {
        let service = ScriptedService::with_raw_replies(vec!["not json at all".to_string()]);
        let generator = Generator::new(service);
        let mut rng = StdRng::seed_from_u64(1);

        let result = generator
            .generate_with(&mut rng, "Tesseract", Rarity::Common, "Temporal Echo", 3)
            .await;
        assert!(matches!(result, Err(MesmerError::Service(_))));
    }

    #[tokio::test]
    async fn test_missing_attribute_map_rejected() {
        let svg = sample_svg(6);
        let content = serde_json::json!({
            "artwork_name": "Ethereal Vortex",
            "description": "A slow spiral.",
            "svg_code": svg,
        })
        .to_string();
        let service = ScriptedService::with_raw_replies(vec![content]);
        let generator = Generator::new(service);
        let mut rng = StdRng::seed_from_u64(1);

        let result = generator
            .generate_with(&mut rng, "Tesseract", Rarity::Common, "Ethereal Vortex", 3)
            .await;
        match result {
            Err(MesmerError::Validation(reason)) => assert!(reason.contains("attribute map")),
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_random_path_succeeds_with_rich_markup() {
        // 20 directives satisfies every tier, whatever the draw lands on
        let svg = sample_svg(20);
        let service = ScriptedService::with_replies(vec![scripted_reply(&svg, 20, 2000)]);
        let generator = Generator::new(service);
        let mut rng = StdRng::seed_from_u64(99);

        let generated = generator.generate(&mut rng, 12).await.unwrap();
        assert!(generated.artwork.price > 0.0);
        assert!(!generated.artwork.name.is_empty());
        assert!(naming::ART_STYLES.contains(&generated.artwork.style.as_str()));
    }

    #[tokio::test]
    async fn test_service_error_propagates() {
        let service = ScriptedService::with_replies(vec![]);
        let generator = Generator::new(service);
        let mut rng = StdRng::seed_from_u64(1);

        let result = generator.generate(&mut rng, 12).await;
        assert!(matches!(result, Err(MesmerError::Service(_))));
    }
}
