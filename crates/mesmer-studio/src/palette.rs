//! Color palette selection
//!
//! Styles with a curated palette get it verbatim; everything else gets a
//! synthesized palette whose channels are drawn from sub-ranges that
//! keep the result saturated and bright rather than muddy.

use rand::Rng;

/// Curated palette for a style, if one is registered
pub fn curated_palette(style: &str) -> Option<&'static [&'static str; 5]> {
    match style {
        "Hypnotic Spirals" => Some(&["#FF006E", "#FB5607", "#FFBE0B", "#8338EC", "#3A86FF"]),
        "Psychedelic Mandala" => Some(&["#FF0080", "#FF8C00", "#FFD700", "#00CED1", "#9400D3"]),
        "Quantum Particles" => Some(&["#00FFFF", "#FF00FF", "#FFFF00", "#00FF00", "#FF1493"]),
        "Neural Network" => Some(&["#00D9FF", "#00FF88", "#FF0099", "#FFD300", "#9D00FF"]),
        "Sacred Geometry Motion" => Some(&["#FFD700", "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4"]),
        "Neon Circuit Board" => Some(&["#39FF14", "#FF1493", "#00CED1", "#FFD700", "#FF00FF"]),
        "Galaxy Formation" => Some(&["#E94B3C", "#EE7879", "#F6D55C", "#3CAEA3", "#20639B"]),
        "Aurora Borealis" => Some(&["#00FF41", "#00D4FF", "#FF006E", "#FFDD00", "#FF00DC"]),
        _ => None,
    }
}

/// Palette for a style: curated when registered, synthesized otherwise
pub fn select_palette<R: Rng>(style: &str, rng: &mut R) -> Vec<String> {
    if let Some(colors) = curated_palette(style) {
        return colors.iter().map(|c| c.to_string()).collect();
    }
    vibrant_palette(rng)
}

/// Synthesize five vivid colors from biased channel ranges
fn vibrant_palette<R: Rng>(rng: &mut R) -> Vec<String> {
    vec![
        hex_color(
            rng.gen_range(128..=255),
            rng.gen_range(0..=128),
            rng.gen_range(128..=255),
        ),
        hex_color(
            rng.gen_range(0..=128),
            rng.gen_range(128..=255),
            rng.gen_range(128..=255),
        ),
        hex_color(
            rng.gen_range(128..=255),
            rng.gen_range(128..=255),
            rng.gen_range(0..=128),
        ),
        hex_color(255, rng.gen_range(0..=128), rng.gen_range(128..=255)),
        hex_color(
            rng.gen_range(128..=255),
            rng.gen_range(0..=255),
            rng.gen_range(200..=255),
        ),
    ]
}

fn hex_color(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn channels(color: &str) -> (u8, u8, u8) {
        let r = u8::from_str_radix(&color[1..3], 16).unwrap();
        let g = u8::from_str_radix(&color[3..5], 16).unwrap();
        let b = u8::from_str_radix(&color[5..7], 16).unwrap();
        (r, g, b)
    }

    #[test]
    fn test_curated_palette_returned_verbatim() {
        let mut rng = StdRng::seed_from_u64(1);
        let palette = select_palette("Hypnotic Spirals", &mut rng);
        assert_eq!(
            palette,
            vec!["#FF006E", "#FB5607", "#FFBE0B", "#8338EC", "#3A86FF"]
        );
    }

    #[test]
    fn test_unregistered_style_gets_five_colors() {
        let mut rng = StdRng::seed_from_u64(1);
        let palette = select_palette("Time Crystal", &mut rng);
        assert_eq!(palette.len(), 5);
        for color in &palette {
            assert_eq!(color.len(), 7);
            assert!(color.starts_with('#'));
        }
    }

    #[test]
    fn test_synthesized_channels_stay_in_ranges() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..50 {
            let palette = select_palette("Glitch Cascade", &mut rng);

            let (r, g, b) = channels(&palette[0]);
            assert!(r >= 128 && g <= 128 && b >= 128);

            let (r, g, b) = channels(&palette[1]);
            assert!(r <= 128 && g >= 128 && b >= 128);

            let (r, g, b) = channels(&palette[2]);
            assert!(r >= 128 && g >= 128 && b <= 128);

            let (r, g, b) = channels(&palette[3]);
            assert!(r == 255 && g <= 128 && b >= 128);

            let (r, _, b) = channels(&palette[4]);
            assert!(r >= 128 && b >= 200);
        }
    }
}
