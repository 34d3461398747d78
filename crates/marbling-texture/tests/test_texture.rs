//! End-to-end tests for texture composition.
//!
//! Covers color fallback, output shape, determinism and the count ranges of
//! every primitive family.

use marbling_texture::primitives::{
    CRYSTAL_COUNT, FLOW_COUNT, INCLUSION_COUNT, STRESS_COUNT, SWIRL_COUNT, VEIN_COUNT,
};
use marbling_texture::{
    base_gradient, generate_crystals, generate_flow_patterns, generate_inclusions,
    generate_stress_patterns, generate_swirls, generate_veins, DeterministicRng, FlowSample, Frame,
    MarbleColor, TextureConfig, TextureGenerator,
};
use pretty_assertions::assert_eq;

// ============================================================================
// Output Shape
// ============================================================================

/// Every supported color yields non-empty background and overlay strings.
#[test]
fn test_all_colors_produce_layers() {
    let mut generator = TextureGenerator::new(2024);
    for color in MarbleColor::ALL {
        let texture = generator.generate_texture(color.name(), 320.0, 240.0);
        assert!(!texture.background.is_empty(), "{} background empty", color);
        assert!(!texture.overlay.is_empty(), "{} overlay empty", color);
    }
}

/// The blue texture starts with the blue base gradient.
#[test]
fn test_blue_contains_base_stop() {
    let mut generator = TextureGenerator::new(1);
    let texture = generator.generate_texture("blue", 100.0, 100.0);
    assert!(texture.background.contains("#1e3a8a"));
    assert!(texture
        .background
        .starts_with(&base_gradient(MarbleColor::Blue).to_string()));
    assert!(!texture.overlay.is_empty());
}

/// Layers are comma-joined gradient descriptors.
#[test]
fn test_layers_are_gradient_descriptors() {
    let mut generator = TextureGenerator::new(5);
    let texture = generator.generate("orange", 200.0, 100.0);
    for layer in texture.background.iter().chain(texture.overlay.iter()) {
        let css = layer.to_string();
        assert!(
            css.starts_with("linear-gradient(")
                || css.starts_with("radial-gradient(")
                || css.starts_with("conic-gradient("),
            "unexpected layer {}",
            css
        );
        assert!(css.ends_with(')'));
        assert!(!css.contains("NaN"));
        assert!(!css.contains("inf"));
    }
}

// ============================================================================
// Color Fallback
// ============================================================================

/// An unknown identifier behaves exactly like blue.
#[test]
fn test_unknown_color_matches_blue() {
    let mut unknown = TextureGenerator::new(77);
    let mut blue = TextureGenerator::new(77);

    let a = unknown.generate_texture("not-a-real-color", 50.0, 50.0);
    let b = blue.generate_texture("blue", 50.0, 50.0);

    let base = base_gradient(MarbleColor::Blue).to_string();
    assert!(a.background.starts_with(&base));
    assert_eq!(a, b);
}

// ============================================================================
// Degenerate Input
// ============================================================================

/// Zero, negative and non-finite dimensions still produce output.
#[test]
fn test_degenerate_dimensions_do_not_panic() {
    let mut generator = TextureGenerator::new(3);
    let sizes = [
        (0.0, 0.0),
        (-10.0, 50.0),
        (f64::NAN, 20.0),
        (1.0, f64::INFINITY),
    ];
    for (w, h) in sizes {
        let texture = generator.generate_texture("green", w, h);
        assert!(!texture.background.is_empty());
        assert!(!texture.background.contains("NaN"));
    }
}

// ============================================================================
// Determinism
// ============================================================================

/// Two generators with the same seed replay the same call sequence.
#[test]
fn test_same_seed_same_sequence() {
    let mut a = TextureGenerator::new(4242);
    let mut b = TextureGenerator::new(4242);
    for color in ["red", "yellow", "mystery"] {
        assert_eq!(
            a.generate_texture(color, 300.0, 180.0),
            b.generate_texture(color, 300.0, 180.0)
        );
    }
}

/// Different seeds give different textures.
#[test]
fn test_different_seeds_differ() {
    let a = TextureGenerator::new(1).generate_texture("blue", 100.0, 100.0);
    let b = TextureGenerator::new(2).generate_texture("blue", 100.0, 100.0);
    assert_ne!(a, b);
}

/// Cache size does not change the output.
#[test]
fn test_output_independent_of_cache_capacity() {
    let mut roomy = TextureGenerator::new(9);
    let mut cramped = TextureGenerator::with_config(TextureConfig {
        cache_capacity: 1,
        ..TextureConfig::with_seed(9)
    });

    for _ in 0..2 {
        assert_eq!(
            roomy.generate_texture("purple", 100.0, 100.0),
            cramped.generate_texture("purple", 100.0, 100.0)
        );
    }
    assert!(cramped.cache_stats().noise.entries <= 1);
}

/// Noise is served identically from cache on the second call.
#[test]
fn test_noise_idempotent() {
    let mut generator = TextureGenerator::new(15);
    let params = marbling_texture::NoiseParams::default().with_octaves(5);
    let first = generator.noise(0.75, -1.25, &params);
    let second = generator.noise(0.75, -1.25, &params);
    assert_eq!(first, second);
    assert_eq!(generator.cache_stats().noise.hits, 1);
}

// ============================================================================
// Primitive Counts
// ============================================================================

/// Every family stays within its documented count range.
#[test]
fn test_primitive_counts_over_many_calls() {
    let frame = Frame::new(400.0, 300.0);
    let still = |_: f64, _: f64| FlowSample {
        angle: 0.0,
        strength: 0.5,
    };

    for seed in 0..150 {
        let mut rng = DeterministicRng::new(seed);
        let veins = generate_veins(&mut rng, &frame);
        let swirls = generate_swirls(&mut rng, &frame);
        let crystals = generate_crystals(&mut rng, &frame);
        let inclusions = generate_inclusions(&mut rng, &frame);
        let stress = generate_stress_patterns(&mut rng, &frame);
        let flows = generate_flow_patterns(&mut rng, &frame, still);

        assert!(VEIN_COUNT.contains(&veins.len()));
        assert!(SWIRL_COUNT.contains(&swirls.len()));
        assert!(CRYSTAL_COUNT.contains(&crystals.len()));
        assert!(INCLUSION_COUNT.contains(&inclusions.len()));
        assert!(STRESS_COUNT.contains(&stress.len()));
        assert!(FLOW_COUNT.contains(&flows.len()));
    }
}

/// Count ranges are reached at both ends given enough draws.
#[test]
fn test_vein_count_range_is_covered() {
    let frame = Frame::new(100.0, 100.0);
    let mut seen = std::collections::BTreeSet::new();
    for seed in 0..2000 {
        let veins = generate_veins(&mut DeterministicRng::new(seed), &frame);
        seen.insert(veins.len());
    }
    assert_eq!(seen.first(), Some(&6));
    assert_eq!(seen.last(), Some(&17));
}

// ============================================================================
// Style Rules
// ============================================================================

/// Style rules wrap background and overlay in two selectors.
#[test]
fn test_style_rules_shape() {
    let mut rules_gen = TextureGenerator::new(31);
    let mut texture_gen = TextureGenerator::new(31);

    let css = rules_gen.generate_style_rules("red", "marble-card");
    let texture = texture_gen.generate_texture("red", 400.0, 400.0);

    let expected = format!(
        ".marble-card {{\n  background: {};\n}}\n\n.marble-card::before {{\n  background: {};\n}}\n",
        texture.background, texture.overlay
    );
    assert_eq!(css, expected);
}
