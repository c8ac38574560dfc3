//! Procedural albedo and normal maps for the textured presets.

use bevy::asset::RenderAssetUsages;
use bevy::image::{ImageAddressMode, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use super::definitions::TexturePattern;
use crate::math;

/// Samples a tileable height field in `[0, 1]` for a pattern.
pub struct PatternSampler {
    grain: Fbm<Perlin>,
}

impl PatternSampler {
    /// Creates a sampler whose surface grain is driven by `seed`.
    pub fn new(seed: u32, octaves: usize) -> Self {
        Self {
            grain: Fbm::new(seed).set_octaves(octaves),
        }
    }

    fn grain(&self, u: f32, v: f32, freq_u: f64, freq_v: f64) -> f32 {
        let n = self.grain.get([u as f64 * freq_u, v as f64 * freq_v]);
        math::map_noise_to_range(n, 0.0, 1.0)
    }

    /// Height at texture coordinate `(u, v)`, both in `[0, 1)`.
    pub fn height(&self, pattern: TexturePattern, u: f32, v: f32) -> f32 {
        match pattern {
            TexturePattern::Bricks => {
                const COURSES: f32 = 4.0;
                const MORTAR: f32 = 0.06;
                let row = (v * COURSES).floor();
                let offset = if row as i32 % 2 == 1 { 0.5 } else { 0.0 };
                let x = (u * 2.0 + offset).fract();
                let y = (v * COURSES).fract();
                if x < MORTAR || y < MORTAR * 2.0 {
                    0.1 * self.grain(u, v, 64.0, 64.0)
                } else {
                    0.85 + 0.15 * self.grain(u, v, 24.0, 24.0)
                }
            }
            TexturePattern::Shingles => {
                const ROWS: f32 = 5.0;
                let row = (v * ROWS).floor();
                let offset = if row as i32 % 2 == 1 { 0.25 } else { 0.0 };
                let x = (u * 4.0 + offset).fract();
                let y = (v * ROWS).fract();
                if x < 0.04 {
                    0.0
                } else {
                    // Each shingle thickens towards its lower edge.
                    0.2 + 0.7 * y + 0.1 * self.grain(u, v, 32.0, 8.0)
                }
            }
            TexturePattern::Brushed => 0.5 + 0.5 * self.grain(u, v, 2.0, 180.0) - 0.25,
            TexturePattern::Weave => {
                const THREADS: f32 = 12.0;
                let cu = (u * THREADS).floor() as i32;
                let cv = (v * THREADS).floor() as i32;
                let fu = (u * THREADS).fract();
                let fv = (v * THREADS).fract();
                let across = (cu + cv) % 2 == 0;
                let profile = if across {
                    (fv * std::f32::consts::PI).sin()
                } else {
                    (fu * std::f32::consts::PI).sin()
                };
                0.8 * profile + 0.2 * self.grain(u, v, 48.0, 48.0)
            }
        }
    }
}

/// Raw RGBA8 pixel data for one pattern.
#[derive(Debug, Clone)]
pub struct PatternPixels {
    /// Edge length in texels.
    pub size: u32,
    /// sRGB albedo, 4 bytes per texel.
    pub albedo: Vec<u8>,
    /// Linear tangent-space normal map, 4 bytes per texel.
    pub normal: Vec<u8>,
}

/// Rasterises a pattern into albedo + normal data.
///
/// Albedo is a greyscale luminance map (the preset's base color tints it);
/// the normal map is derived from wrapped central differences so it tiles.
pub fn rasterize(
    sampler: &PatternSampler,
    pattern: TexturePattern,
    size: u32,
    normal_scale: f32,
) -> PatternPixels {
    let n = size.max(1) as usize;
    let heights: Vec<f32> = (0..n * n)
        .map(|i| {
            let (x, y) = (i % n, i / n);
            sampler
                .height(pattern, x as f32 / n as f32, y as f32 / n as f32)
                .clamp(0.0, 1.0)
        })
        .collect();
    let at = |x: usize, y: usize| heights[(y % n) * n + (x % n)];

    let mut albedo = Vec::with_capacity(n * n * 4);
    let mut normal = Vec::with_capacity(n * n * 4);
    for y in 0..n {
        for x in 0..n {
            let lum = ((0.45 + 0.55 * at(x, y)) * 255.0).round() as u8;
            albedo.extend_from_slice(&[lum, lum, lum, 255]);

            let du = (at(x + 1, y) - at(x + n - 1, y)) * 0.5;
            let dv = (at(x, y + 1) - at(x, y + n - 1)) * 0.5;
            let [r, g, b] = math::encode_normal(math::slope_normal(du, dv, normal_scale));
            normal.extend_from_slice(&[r, g, b, 255]);
        }
    }

    PatternPixels {
        size: n as u32,
        albedo,
        normal,
    }
}

/// Wraps texel data into a repeating [`Image`].
pub fn repeating_image(size: u32, data: Vec<u8>, format: TextureFormat) -> Image {
    let mut image = Image::new(
        Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        format,
        RenderAssetUsages::RENDER_WORLD,
    );
    image.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
        address_mode_u: ImageAddressMode::Repeat,
        address_mode_v: ImageAddressMode::Repeat,
        ..ImageSamplerDescriptor::linear()
    });
    image
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_PATTERNS: [TexturePattern; 4] = [
        TexturePattern::Bricks,
        TexturePattern::Shingles,
        TexturePattern::Brushed,
        TexturePattern::Weave,
    ];

    fn sampler() -> PatternSampler {
        PatternSampler::new(7, 3)
    }

    #[test]
    fn rasterize_fills_four_bytes_per_texel() {
        let px = rasterize(&sampler(), TexturePattern::Bricks, 16, 2.0);
        assert_eq!(px.size, 16);
        assert_eq!(px.albedo.len(), 16 * 16 * 4);
        assert_eq!(px.normal.len(), 16 * 16 * 4);
    }

    #[test]
    fn albedo_is_opaque_for_every_pattern() {
        let s = sampler();
        for pattern in ALL_PATTERNS {
            let px = rasterize(&s, pattern, 8, 1.0);
            assert!(px.albedo.chunks(4).all(|t| t[3] == 255), "{pattern:?}");
        }
    }

    #[test]
    fn mortar_is_lower_than_brick_face() {
        let s = sampler();
        let mortar = s.height(TexturePattern::Bricks, 0.01, 0.5);
        let brick = s.height(TexturePattern::Bricks, 0.1, 0.4);
        assert!(mortar < brick);
    }

    #[test]
    fn zero_normal_scale_gives_flat_normal_map() {
        let px = rasterize(&sampler(), TexturePattern::Weave, 8, 0.0);
        assert!(px.normal.chunks(4).all(|t| t == [128, 128, 255, 255]));
    }

    #[test]
    fn zero_size_is_promoted_to_one_texel() {
        let px = rasterize(&sampler(), TexturePattern::Shingles, 0, 1.0);
        assert_eq!(px.size, 1);
        assert_eq!(px.albedo.len(), 4);
    }

    #[test]
    fn repeating_image_uses_repeat_addressing() {
        let image = repeating_image(2, vec![255; 16], TextureFormat::Rgba8UnormSrgb);
        let ImageSampler::Descriptor(desc) = &image.sampler else {
            panic!("expected explicit sampler");
        };
        assert_eq!(desc.address_mode_u, ImageAddressMode::Repeat);
        assert_eq!(desc.address_mode_v, ImageAddressMode::Repeat);
    }
}
