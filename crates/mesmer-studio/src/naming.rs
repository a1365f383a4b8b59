//! Style catalog and creative naming

use rand::Rng;

/// The fixed catalog of artwork styles
pub const ART_STYLES: &[&str] = &[
    "Hypnotic Spirals",
    "Psychedelic Mandala",
    "Kaleidoscope Dreams",
    "Fractal Evolution",
    "Sacred Geometry Motion",
    "DMT Visual Journey",
    "Quantum Particles",
    "Neural Network",
    "Data Flow Streams",
    "Holographic Interface",
    "Neon Circuit Board",
    "Digital DNA Helix",
    "Bioluminescent Ocean",
    "Crystal Formation",
    "Liquid Metal Flow",
    "Aurora Borealis",
    "Plasma Energy",
    "Living Coral Reef",
    "Generative Waves",
    "Particle Symphony",
    "Color Transitions",
    "Geometric Metamorphosis",
    "Perlin Noise Flow",
    "Voronoi Evolution",
    "Galaxy Formation",
    "Black Hole",
    "Nebula Birth",
    "Solar Flare",
    "Glitch Cascade",
    "Digital Decay",
    "Reality Fragmentation",
    "Third Eye Activation",
    "Chakra Flow",
    "Kundalini Rising",
    "4D Hypercube",
    "Tesseract",
    "Klein Bottle",
    "Time Crystal",
];

const NAME_PREFIXES: &[&str] = &[
    "Ethereal",
    "Quantum",
    "Cosmic",
    "Neural",
    "Hypnotic",
    "Celestial",
    "Digital",
    "Infinite",
    "Prismatic",
    "Temporal",
];

const NAME_SUBJECTS: &[&str] = &[
    "Vortex", "Portal", "Nexus", "Matrix", "Flow", "Dream", "Vision", "Pulse", "Wave", "Spiral",
    "Realm", "Echo",
];

/// Pick one style uniformly from the catalog
pub fn pick_style<R: Rng>(rng: &mut R) -> &'static str {
    ART_STYLES[rng.gen_range(0..ART_STYLES.len())]
}

/// Pair a random prefix with a random subject
pub fn creative_name<R: Rng>(rng: &mut R) -> String {
    let prefix = NAME_PREFIXES[rng.gen_range(0..NAME_PREFIXES.len())];
    let subject = NAME_SUBJECTS[rng.gen_range(0..NAME_SUBJECTS.len())];
    format!("{} {}", prefix, subject)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_catalog_size() {
        assert_eq!(ART_STYLES.len(), 38);
    }

    #[test]
    fn test_pick_style_comes_from_catalog() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(ART_STYLES.contains(&pick_style(&mut rng)));
        }
    }

    #[test]
    fn test_creative_name_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let name = creative_name(&mut rng);
            let parts: Vec<&str> = name.split(' ').collect();
            assert_eq!(parts.len(), 2);
            assert!(NAME_PREFIXES.contains(&parts[0]));
            assert!(NAME_SUBJECTS.contains(&parts[1]));
        }
    }
}
