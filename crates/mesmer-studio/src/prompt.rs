//! Art prompt construction
//!
//! One prompt carries everything the service needs: the structural
//! contract (viewport, animation minimum, technique categories), the
//! style's visual requirements, the rarity directive, and the exact JSON
//! shape the reply must take. Nothing is negotiated over further turns.

use mesmer_core::{Rarity, TierRequirement};

/// Fixed system role sent with every generation request
pub const SYSTEM_ROLE: &str = "You are a creative genius specialized in surreal, hypnotic SVG \
art. You have complete command of SVG syntax, SMIL animation, filters, gradients and \
transforms. Your creations are visual portals into other dimensions. ALWAYS return valid JSON \
with syntactically perfect SVG.";

const ANIMATION_TECHNIQUES: &str = r##"MANDATORY ANIMATION TECHNIQUES (use ALL of them):

1. HYPNOTIC ROTATIONS:
   <animateTransform attributeName="transform" type="rotate"
    from="0 500 500" to="360 500 500" dur="20s" repeatCount="indefinite"/>
   - Vary direction (360 or -360), rotation center, duration

2. SHAPE MORPHING:
   <animate attributeName="d" values="path1;path2;path3;path1"
    dur="10s" repeatCount="indefinite" calcMode="spline"
    keySplines="0.5 0 0.5 1;0.5 0 0.5 1"/>
   - Turn circles into stars, squares into spirals

3. ORGANIC PULSATIONS:
   <animate attributeName="r" values="50;80;50" dur="4s"
    repeatCount="indefinite" calcMode="spline"/>
   - Apply to radii, widths, heights

4. COLOR WAVES:
   <animate attributeName="fill" values="color1;color2;color3;color1"
    dur="8s" repeatCount="indefinite"/>
   - Cycle through the supplied base colors

5. MOTION ALONG PATHS:
   <animateMotion dur="15s" repeatCount="indefinite">
     <mpath href="#pathId"/>
   </animateMotion>
   - Draw winding paths, spirals, lemniscates

6. GHOSTLY OPACITY:
   <animate attributeName="opacity" values="0;1;0"
    dur="6s" repeatCount="indefinite"/>

7. SCALE TRANSFORMS:
   <animateTransform attributeName="transform" type="scale"
    values="1;1.5;1" dur="7s" repeatCount="indefinite" additive="sum"/>

8. DYNAMIC FILTERS:
   - feTurbulence with animated baseFrequency
   - feGaussianBlur with varying stdDeviation
   - feDisplacementMap for liquid distortion
"##;

const SURREAL_STRUCTURE: &str = r#"MANDATORY SURREAL STRUCTURE:
1. DEPTH: at least 5 layers moving at different speeds (parallax)
2. IMPOSSIBLE ELEMENTS: non-euclidean geometry, optical illusions
3. LIQUID FLOW: everything drifts as if submerged
4. SYNCHRONIZATION: build "moments" where several animations align
5. VISUAL SURPRISES: elements that appear and vanish periodically
"#;

const FORBIDDEN: &str = r#"FORBIDDEN:
- Static elements (EVERYTHING must move)
- Abrupt animations (always use easing/splines)
- Colors too dark or too washed out (stay vibrant)
- Obvious repetition (vary durations for polyrhythm)
- SVG with syntax errors
"#;

/// Build the complete art prompt for one generation request
pub fn build_art_prompt(name: &str, style: &str, rarity: Rarity, palette: &[String]) -> String {
    let requirement = rarity.requirement();
    let colors: Vec<String> = palette.iter().take(requirement.colors).cloned().collect();

    let mut prompt = String::new();

    prompt.push_str("You are a MASTER of surreal, hypnotic, deeply animated SVG art.\n\n");

    prompt.push_str("CONTEXT:\n");
    prompt.push_str(&format!("- Artwork name: {}\n", name));
    prompt.push_str(&format!("- Style: {}\n", style));
    prompt.push_str(&format!("- Rarity: {}\n", rarity));
    prompt.push_str(&format!("- Suggested base colors: {}\n\n", colors.join(", ")));

    prompt.push_str("MANDATORY TECHNICAL REQUIREMENTS:\n");
    prompt.push_str("1. ViewBox: EXACTLY viewBox=\"0 0 1000 1000\"\n");
    prompt.push_str("2. Background: solid color or radial/linear gradient (NEVER transparent)\n");
    prompt.push_str(&format!(
        "3. Minimum of {} DIFFERENT, synchronized animations\n",
        requirement.min_animations
    ));
    prompt.push_str("4. Every animation uses repeatCount=\"indefinite\"\n");
    prompt.push_str("5. Durations between 3s and 30s to create hypnotic polyrhythm\n");
    prompt.push_str("6. Use calcMode=\"spline\" with keySplines for organic motion\n\n");

    prompt.push_str(ANIMATION_TECHNIQUES);

    prompt.push_str(&format!(
        "\nMANDATORY VISUAL ELEMENTS FOR {}:\n{}\n\n",
        style,
        style_requirements(style)
    ));

    prompt.push_str(SURREAL_STRUCTURE);

    prompt.push_str(&format!(
        "\nIMPORTANT FOR {} PIECES: {}\n\n",
        rarity,
        rarity_directive(rarity)
    ));

    prompt.push_str(FORBIDDEN);

    prompt.push_str(&reply_shape(name, requirement, &colors));

    prompt.push_str(
        "\nREMEMBER: this artwork must be a VISUAL PORTAL that hypnotizes and transcends. \
Every element must dance in surreal harmony. The viewer should feel they are looking into \
another dimension.\n",
    );

    prompt
}

/// Detailed visual requirements per style
fn style_requirements(style: &str) -> String {
    match style {
        "Hypnotic Spirals" => "\
- LOGARITHMIC SPIRALS in multiple layers rotating at different speeds
- Use the formula r = a * e^(b*theta) for perfect spirals
- At least 5 spirals with offset centers creating visual interference
- Animated radial gradients from center to edges
- An 'infinite tunnel' effect with scale shrinking toward the center"
            .to_string(),
        "Psychedelic Mandala" => "\
- Perfect RADIAL SYMMETRY with 6, 8 or 12 axes
- Recursive fractal patterns in every section
- Kaleidoscopic rotation with counter-rotating layers
- Morphing between sacred geometric forms (flower of life, sri yantra)
- Complementary colors pulsing in harmony"
            .to_string(),
        "Quantum Particles" => "\
- PARTICLE SYSTEM with at least 50 elements
- Smooth brownian motion (animate with multiple values)
- Dynamic links between nearby particles (lines appearing and vanishing)
- An 'entanglement' effect with particles moving in sync
- Pulsing light halos around every particle"
            .to_string(),
        "Neural Network" => "\
- A WEB OF NEURONS with pulsing connected nodes
- Signals traveling along the connections (use animateMotion)
- Cascading activation: when one node pulses it triggers the next
- Layered structure with visual depth
- Synapses that form and dissolve dynamically"
            .to_string(),
        "Sacred Geometry Motion" => "\
- SACRED GEOMETRIC FORMS morphing into one another
- Golden ratio (1.618) in every element
- Tetrahedron -> Cube -> Octahedron -> Dodecahedron -> Icosahedron
- A merkaba rotating on multiple axes
- Overlapping shapes creating interference patterns"
            .to_string(),
        "Galaxy Formation" => "\
- SPIRAL ARMS of a galaxy in slow rotation
- Nebulae in vibrant colors with turbulence filters
- Stars being born and dying (opacity and scale animations)
- A central black hole with a distortion effect (feDisplacementMap)
- Cosmic dust with drifting particles"
            .to_string(),
        "Aurora Borealis" => "\
- WAVES OF LIGHT flowing vertically
- Animated linear gradients simulating curtains of light
- Undulating motion along sinusoidal paths
- A mirrored reflection below, as if over water
- Particles of light rising gently"
            .to_string(),
        _ => format!(
            "\
- SIGNATURE ELEMENTS of the {} style
- Constant fluid, organic motion
- Visual interplay between all elements
- Depth through layering and transparency
- Visual surprises appearing periodically",
            style
        ),
    }
}

fn rarity_directive(rarity: Rarity) -> &'static str {
    match rarity {
        Rarity::Common => "focus on perfect loops and visual harmony",
        Rarity::Rare => "add elements that periodically break the pattern",
        Rarity::Epic => "multiple visual dimensions interacting",
        Rarity::Legendary => "transcend ordinary perception, create visual portals",
    }
}

/// The JSON object the reply must contain
fn reply_shape(name: &str, requirement: TierRequirement, colors: &[String]) -> String {
    format!(
        r#"
Return a single VALID JSON object:
{{
    "artwork_name": "{} (or a poetic variation)",
    "description": "Surreal, poetic description capturing the hypnotic essence (3-4 sentences)",
    "svg_code": "<!-- COMPLETE, VALID SVG WITH ALL ANIMATIONS -->",
    "attributes": {{
        "animation_count": {} (the exact number of animations),
        "complexity": {},
        "hypnotic_factor": a number from 1-10,
        "primary_colors": {:?},
        "loop_duration": master loop duration in seconds,
        "special_features": ["feature1", "feature2", "feature3"]
    }}
}}
"#,
        name, requirement.min_animations, requirement.complexity, colors
    )
}
