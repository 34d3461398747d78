//! Texture composition.
//!
//! [`TextureGenerator`] owns the seed and the memoization caches and
//! assembles the background and overlay layer stacks in a fixed order.

use serde::Serialize;

use crate::cache::{CacheStats, MemoCache};
use crate::color::{Color, MarbleColor};
use crate::config::TextureConfig;
use crate::frame::Frame;
use crate::gradient::{join_layers, ColorStop, Gradient, RadialShape, StopColor};
use crate::noise::{FlowField, FlowSample, FractalField, Noise2D, NoiseParams, TrigNoise};
use crate::primitives::{
    generate_crystals, generate_flow_patterns, generate_inclusions, generate_stress_patterns,
    generate_swirls, generate_veins, layers_of,
};
use crate::rng::DeterministicRng;

/// Angle of the base gradient.
const BASE_ANGLE: f64 = 135.0;
/// Intensity of the first fractal overlay; each later one drops by 0.1.
const FRACTAL_INTENSITY: f64 = 0.3;
const FRACTAL_INTENSITY_STEP: f64 = 0.1;
const FRACTAL_INTENSITY_MIN: f64 = 0.05;
/// Share of an overlay's intensity kept when the fractal value is zero.
/// Must stay above 2/3 for overlay alphas to keep decreasing.
const FRACTAL_MODULATION_FLOOR: f64 = 0.75;
/// Decorative veining lines painted in the overlay.
const VEINING_COUNT: std::ops::RangeInclusive<usize> = 4..=7;
/// Coordinate scale applied to speckle noise lookups.
const SPECKLE_NOISE_SCALE: f64 = 8.0;
/// Coordinate scale of the flow field.
const FLOW_SCALE: f64 = 3.0;

/// Which stack a layer group is painted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    Background,
    Overlay,
}

/// Number of layers contributed by one feature family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayerGroup {
    pub name: &'static str,
    pub surface: Surface,
    pub layers: usize,
}

/// A composed texture, still in structured form.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    pub color: MarbleColor,
    pub background: Vec<Gradient>,
    pub overlay: Vec<Gradient>,
    /// Layer groups in paint order.
    pub groups: Vec<LayerGroup>,
}

impl Texture {
    /// Layered-background value for the element itself.
    pub fn background_css(&self) -> String {
        join_layers(&self.background)
    }

    /// Layered-background value for the overlay pseudo-layer.
    pub fn overlay_css(&self) -> String {
        join_layers(&self.overlay)
    }

    /// Serialize both stacks.
    pub fn to_generated(&self) -> GeneratedTexture {
        GeneratedTexture {
            background: self.background_css(),
            overlay: self.overlay_css(),
        }
    }
}

/// Serialized texture: two comma-joined gradient lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedTexture {
    pub background: String,
    pub overlay: String,
}

/// Stats for all three caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheReport {
    pub noise: CacheStats,
    pub fractal: CacheStats,
    pub flow: CacheStats,
}

#[derive(Default)]
struct LayerStack {
    background: Vec<Gradient>,
    overlay: Vec<Gradient>,
    groups: Vec<LayerGroup>,
}

impl LayerStack {
    fn push(&mut self, surface: Surface, name: &'static str, layers: Vec<Gradient>) {
        self.groups.push(LayerGroup {
            name,
            surface,
            layers: layers.len(),
        });
        match surface {
            Surface::Background => self.background.extend(layers),
            Surface::Overlay => self.overlay.extend(layers),
        }
    }
}

/// Seeded marble texture generator.
///
/// Each generation call derives its own seed from the base seed and the
/// number of previous calls, so two generators with the same config produce
/// identical output for the same sequence of calls.
#[derive(Debug)]
pub struct TextureGenerator {
    config: TextureConfig,
    calls: u64,
    noise_phase: f64,
    flow_phase: f64,
    noise_cache: MemoCache<[u64; 6], f64>,
    fractal_cache: MemoCache<[u64; 4], f64>,
    flow_cache: MemoCache<[u64; 3], FlowSample>,
}

impl TextureGenerator {
    /// Generator with default settings and the given seed.
    pub fn new(seed: u32) -> Self {
        Self::with_config(TextureConfig::with_seed(seed))
    }

    /// Generator with an explicit config.
    ///
    /// The config is used as given; call [`TextureConfig::validate`] first
    /// when it comes from user input.
    pub fn with_config(config: TextureConfig) -> Self {
        let capacity = config.cache_capacity;
        let seed = config.seed;
        Self {
            config,
            calls: 0,
            noise_phase: noise_phase(seed),
            flow_phase: flow_phase(seed),
            noise_cache: MemoCache::new(capacity),
            fractal_cache: MemoCache::new(capacity),
            flow_cache: MemoCache::new(capacity),
        }
    }

    pub fn config(&self) -> &TextureConfig {
        &self.config
    }

    pub fn seed(&self) -> u32 {
        self.config.seed
    }

    /// Number of generation calls made since construction or the last reseed.
    pub fn calls(&self) -> u64 {
        self.calls
    }

    /// Switch to a new base seed, restarting the call sequence.
    pub fn reseed(&mut self, seed: u32) {
        self.config.seed = seed;
        self.calls = 0;
        self.noise_phase = noise_phase(seed);
        self.flow_phase = flow_phase(seed);
        self.clear_caches();
    }

    /// Drop every memoized noise, fractal and flow value.
    pub fn clear_caches(&mut self) {
        self.noise_cache.clear();
        self.fractal_cache.clear();
        self.flow_cache.clear();
        tracing::debug!(seed = self.config.seed, "cleared texture caches");
    }

    pub fn cache_stats(&self) -> CacheReport {
        CacheReport {
            noise: self.noise_cache.stats(),
            fractal: self.fractal_cache.stats(),
            flow: self.flow_cache.stats(),
        }
    }

    /// Memoized trigonometric noise at `(x, y)`.
    pub fn noise(&mut self, x: f64, y: f64, params: &NoiseParams) -> f64 {
        let [frequency, octaves, persistence, lacunarity] = params.key_bits();
        let key = [
            x.to_bits(),
            y.to_bits(),
            frequency,
            octaves,
            persistence,
            lacunarity,
        ];
        let field = TrigNoise::new(*params, self.noise_phase);
        self.noise_cache
            .get_or_insert_with(key, || field.sample(x, y))
    }

    /// Memoized fractal pattern value at `(x, y)`.
    pub fn fractal_pattern(&mut self, x: f64, y: f64, depth: u32, scale: f64) -> f64 {
        let key = [x.to_bits(), y.to_bits(), depth as u64, scale.to_bits()];
        let field = FractalField::new(depth, scale, self.config.seed);
        self.fractal_cache
            .get_or_insert_with(key, || field.sample(x, y))
    }

    /// Memoized flow field sample at normalized `(x, y)`.
    pub fn flow_at(&mut self, x: f64, y: f64, scale: f64) -> FlowSample {
        let key = [x.to_bits(), y.to_bits(), scale.to_bits()];
        let field = FlowField::new(self.config.noise, self.flow_phase, scale);
        self.flow_cache
            .get_or_insert_with(key, || field.sample(x, y))
    }

    /// Compose a texture in structured form.
    ///
    /// Unknown color identifiers fall back to blue.
    pub fn generate(&mut self, color_id: &str, width: f64, height: f64) -> Texture {
        let color = MarbleColor::resolve(color_id);
        let frame = Frame::new(width, height);
        let call_seed = DeterministicRng::derive_call_seed(self.config.seed, self.calls);
        self.calls += 1;

        let tint = color.base_color();
        let stream = |name: &str| {
            DeterministicRng::new(DeterministicRng::derive_stream_seed(call_seed, name))
        };

        let mut stack = LayerStack::default();
        stack.push(Surface::Background, "base", vec![base_gradient(color)]);

        let fractal = self.fractal_layers(&mut stream("fractal"), tint);
        stack.push(Surface::Background, "fractal", fractal);

        let veins = generate_veins(&mut stream("veins"), &frame);
        stack.push(
            Surface::Background,
            "veins",
            layers_of(&veins, &frame, tint),
        );

        let swirls = generate_swirls(&mut stream("swirls"), &frame);
        stack.push(
            Surface::Background,
            "swirls",
            layers_of(&swirls, &frame, tint),
        );

        let flows = generate_flow_patterns(&mut stream("flows"), &frame, |x, y| {
            self.flow_at(x, y, FLOW_SCALE)
        });
        stack.push(
            Surface::Background,
            "flows",
            layers_of(&flows, &frame, tint),
        );

        let inclusions = generate_inclusions(&mut stream("inclusions"), &frame);
        stack.push(
            Surface::Background,
            "inclusions",
            layers_of(&inclusions, &frame, tint),
        );

        let crystals = generate_crystals(&mut stream("crystals"), &frame);
        stack.push(
            Surface::Overlay,
            "crystals",
            layers_of(&crystals, &frame, tint),
        );

        let stress = generate_stress_patterns(&mut stream("stress"), &frame);
        stack.push(
            Surface::Overlay,
            "stress",
            layers_of(&stress, &frame, tint),
        );

        let veining = veining_layers(&mut stream("veining"), &frame);
        stack.push(Surface::Overlay, "veining", veining);

        let speckles = self.speckle_layers(&mut stream("speckles"));
        stack.push(Surface::Overlay, "speckles", speckles);

        tracing::debug!(
            color = %color,
            width = frame.width(),
            height = frame.height(),
            call = self.calls - 1,
            background = stack.background.len(),
            overlay = stack.overlay.len(),
            "generated marble texture"
        );

        Texture {
            color,
            background: stack.background,
            overlay: stack.overlay,
            groups: stack.groups,
        }
    }

    /// Compose and serialize a texture.
    pub fn generate_texture(
        &mut self,
        color_id: &str,
        width: f64,
        height: f64,
    ) -> GeneratedTexture {
        self.generate(color_id, width, height).to_generated()
    }

    /// Stylesheet rules painting the background on `.class` and the overlay
    /// on `.class::before`.
    ///
    /// A leading `.` on `class_name` is ignored; an empty name becomes `marble`.
    pub fn generate_style_rules(&mut self, color_id: &str, class_name: &str) -> String {
        let [width, height] = self.config.style_box;
        let texture = self.generate_texture(color_id, width, height);
        let class = class_name.trim().trim_start_matches('.');
        let class = if class.is_empty() { "marble" } else { class };

        format!(
            ".{class} {{\n  background: {background};\n}}\n\n.{class}::before {{\n  background: {overlay};\n}}\n",
            class = class,
            background = texture.background,
            overlay = texture.overlay,
        )
    }

    fn fractal_layers(&mut self, rng: &mut DeterministicRng, tint: Color) -> Vec<Gradient> {
        let depth = self.config.fractal_depth;
        let mut layers = Vec::with_capacity(self.config.fractal_layers as usize);

        for index in 0..self.config.fractal_layers {
            let scale = 2f64.powi(index as i32);
            let intensity = (FRACTAL_INTENSITY - FRACTAL_INTENSITY_STEP * index as f64)
                .max(FRACTAL_INTENSITY_MIN);
            let x = rng.gen_f64();
            let y = rng.gen_f64();

            let max = FractalField::new(depth, scale, self.config.seed).max_value();
            let raw = self.fractal_pattern(x, y, depth, scale);
            let value = if max > 0.0 {
                (raw / max).clamp(0.0, 1.0)
            } else {
                0.0
            };

            let modulation = FRACTAL_MODULATION_FLOOR + (1.0 - FRACTAL_MODULATION_FLOOR) * value;
            let alpha = intensity * modulation;
            let radius = 30.0 + 40.0 * value;
            layers.push(Gradient::radial(
                RadialShape::Ellipse {
                    rx: radius,
                    ry: radius * 0.8,
                },
                (x * 100.0, y * 100.0),
                vec![
                    ColorStop::at(StopColor::tint(tint.lighten(0.2), alpha), 0.0),
                    ColorStop::at(StopColor::Transparent, 100.0),
                ],
            ));
        }

        layers
    }

    fn speckle_layers(&mut self, rng: &mut DeterministicRng) -> Vec<Gradient> {
        let grid = self.config.speckle_grid;
        let params = self.config.noise;
        let threshold = self.config.speckle_threshold;
        let mut layers = Vec::new();

        for row in 0..grid {
            for col in 0..grid {
                let u = (col as f64 + rng.gen_f64()) / grid as f64;
                let v = (row as f64 + rng.gen_f64()) / grid as f64;
                let weight = self.noise(u * SPECKLE_NOISE_SCALE, v * SPECKLE_NOISE_SCALE, &params);
                if weight <= threshold {
                    continue;
                }
                let weight = weight.min(1.0);
                layers.push(Gradient::spot(
                    RadialShape::Circle,
                    (u * 100.0, v * 100.0),
                    StopColor::tint(Color::white(), 0.05 + 0.25 * weight),
                    1.0 + 2.0 * weight,
                ));
            }
        }

        layers
    }
}

fn noise_phase(seed: u32) -> f64 {
    TrigNoise::phase_for_seed(DeterministicRng::derive_stream_seed(seed, "noise"))
}

fn flow_phase(seed: u32) -> f64 {
    TrigNoise::phase_for_seed(DeterministicRng::derive_stream_seed(seed, "flow"))
}

/// The color's base gradient, always the first background layer.
pub fn base_gradient(color: MarbleColor) -> Gradient {
    let [dark, mid, deep] = color.base_stops();
    Gradient::linear(
        BASE_ANGLE,
        vec![
            ColorStop::at(StopColor::Hex(dark), 0.0),
            ColorStop::at(StopColor::Hex(mid), 50.0),
            ColorStop::at(StopColor::Hex(deep), 100.0),
        ],
    )
}

fn veining_layers(rng: &mut DeterministicRng, frame: &Frame) -> Vec<Gradient> {
    let count = rng.gen_count(VEINING_COUNT);
    (0..count)
        .map(|_| {
            let x = rng.gen_f64() * frame.width();
            let y = rng.gen_f64() * frame.height();
            let direction = rng.gen_f64() * 360.0;
            let thickness = rng.gen_between(0.001, 0.004) * frame.diagonal();
            let color = StopColor::tint(Color::white(), rng.gen_between(0.08, 0.2));
            frame.stroke(x, y, direction, thickness, color)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_base_gradient_blue() {
        assert_eq!(
            base_gradient(MarbleColor::Blue).to_string(),
            "linear-gradient(135deg, #1e3a8a 0%, #3b82f6 50%, #1e40af 100%)"
        );
    }

    #[test]
    fn test_group_order_is_fixed() {
        let mut generator = TextureGenerator::new(1);
        let texture = generator.generate("green", 300.0, 200.0);
        let names: Vec<_> = texture.groups.iter().map(|g| g.name).collect();
        assert_eq!(
            names,
            vec![
                "base",
                "fractal",
                "veins",
                "swirls",
                "flows",
                "inclusions",
                "crystals",
                "stress",
                "veining",
                "speckles"
            ]
        );

        let background: usize = texture
            .groups
            .iter()
            .filter(|g| g.surface == Surface::Background)
            .map(|g| g.layers)
            .sum();
        let overlay: usize = texture
            .groups
            .iter()
            .filter(|g| g.surface == Surface::Overlay)
            .map(|g| g.layers)
            .sum();
        assert_eq!(background, texture.background.len());
        assert_eq!(overlay, texture.overlay.len());
    }

    #[test]
    fn test_base_layer_is_first() {
        let mut generator = TextureGenerator::new(2);
        let texture = generator.generate("red", 100.0, 100.0);
        assert_eq!(texture.background[0], base_gradient(MarbleColor::Red));
    }

    #[test]
    fn test_fractal_overlays_fade() {
        let mut generator = TextureGenerator::new(3);
        let texture = generator.generate("blue", 100.0, 100.0);
        let fractal = &texture.groups[1];
        assert_eq!(fractal.layers, 3);
        for layer in &texture.background[1..4] {
            assert_eq!(layer.kind_name(), "radial");
        }
    }

    #[test]
    fn test_fractal_alpha_strictly_decreases() {
        for seed in 0..200 {
            let mut generator = TextureGenerator::new(seed);
            let texture = generator.generate("blue", 100.0, 100.0);
            let alphas: Vec<f64> = texture.background[1..4]
                .iter()
                .map(|layer| layer.stops[0].color.alpha())
                .collect();
            assert!(
                alphas[0] > alphas[1] && alphas[1] > alphas[2],
                "seed {}: {:?}",
                seed,
                alphas
            );
            assert!(alphas[0] <= FRACTAL_INTENSITY);
        }
    }

    #[test]
    fn test_generator_debug_output() {
        let generator = TextureGenerator::new(13);
        let text = format!("{:?}", generator);
        assert!(text.starts_with("TextureGenerator {"));
        assert!(text.contains("seed: 13"));
    }

    #[test]
    fn test_successive_calls_differ() {
        let mut generator = TextureGenerator::new(4);
        let first = generator.generate_texture("blue", 100.0, 100.0);
        let second = generator.generate_texture("blue", 100.0, 100.0);
        assert_ne!(first, second);
        assert_eq!(generator.calls(), 2);
    }

    #[test]
    fn test_reseed_restarts_sequence() {
        let mut generator = TextureGenerator::new(5);
        let first = generator.generate_texture("purple", 120.0, 90.0);
        generator.generate_texture("purple", 120.0, 90.0);
        generator.reseed(5);
        assert_eq!(generator.calls(), 0);
        assert_eq!(generator.generate_texture("purple", 120.0, 90.0), first);
    }

    #[test]
    fn test_noise_served_from_cache() {
        let mut generator = TextureGenerator::new(6);
        let params = NoiseParams::default();
        let first = generator.noise(1.5, 2.5, &params);
        let second = generator.noise(1.5, 2.5, &params);
        assert_eq!(first, second);
        assert_eq!(generator.cache_stats().noise.hits, 1);
    }

    #[test]
    fn test_fractal_pattern_cached_and_pure() {
        let mut generator = TextureGenerator::new(7);
        let a = generator.fractal_pattern(0.3, 0.6, 3, 1.0);
        generator.clear_caches();
        let b = generator.fractal_pattern(0.3, 0.6, 3, 1.0);
        assert_eq!(a, b);
        assert_eq!(generator.cache_stats().fractal.misses, 1);
    }

    #[test]
    fn test_clear_caches_empties_all() {
        let mut generator = TextureGenerator::new(8);
        generator.generate("yellow", 200.0, 200.0);
        let stats = generator.cache_stats();
        assert!(stats.noise.entries > 0);
        assert!(stats.fractal.entries > 0);
        assert!(stats.flow.entries > 0);

        generator.clear_caches();
        let stats = generator.cache_stats();
        assert_eq!(stats.noise.entries, 0);
        assert_eq!(stats.fractal.entries, 0);
        assert_eq!(stats.flow.entries, 0);
    }

    #[test]
    fn test_cache_capacity_respected() {
        let config = TextureConfig {
            cache_capacity: 8,
            speckle_grid: 10,
            ..TextureConfig::with_seed(9)
        };
        let mut generator = TextureGenerator::with_config(config);
        generator.generate("orange", 300.0, 300.0);
        let stats = generator.cache_stats();
        assert!(stats.noise.entries <= 8);
        assert!(stats.flow.entries <= 8);
        assert!(stats.fractal.entries <= 8);
    }

    #[test]
    fn test_style_rules_strip_leading_dot() {
        let mut generator = TextureGenerator::new(10);
        let css = generator.generate_style_rules("blue", ".card");
        let head = ".card {\n  background: linear-gradient(135deg, #1e3a8a";
        assert!(css.starts_with(head));
        assert!(css.contains("\n.card::before {\n  background: "));
        assert!(!css.contains("..card"));
    }

    #[test]
    fn test_style_rules_empty_class() {
        let mut generator = TextureGenerator::new(11);
        let css = generator.generate_style_rules("green", "  ");
        assert!(css.starts_with(".marble {"));
        assert!(css.contains(".marble::before {"));
    }

    #[test]
    fn test_speckles_respect_threshold() {
        let config = TextureConfig {
            speckle_threshold: 2.0,
            ..TextureConfig::with_seed(12)
        };
        let mut generator = TextureGenerator::with_config(config);
        let texture = generator.generate("blue", 100.0, 100.0);
        let groups = &texture.groups;
        let speckles = groups.iter().find(|g| g.name == "speckles").unwrap();
        assert_eq!(speckles.layers, 0);
    }
}
