use bevy::platform::collections::HashMap;
use bevy::prelude::*;
use bevy::render::render_resource::TextureFormat;

use super::PresetsConfig;
use super::definitions::MaterialPreset;
use super::textures::{PatternSampler, rasterize, repeating_image};

/// Albedo + normal map handles of one textured preset.
#[derive(Clone, Debug)]
pub struct PresetMaps {
    /// sRGB luminance map, tinted by the preset's base color.
    pub albedo: Handle<Image>,
    /// Linear tangent-space normal map.
    pub normal: Handle<Image>,
}

/// Generated texture maps, keyed by preset. Presets without a pattern are absent.
#[derive(Resource, Default)]
pub struct PresetTextures {
    /// Lookup from preset to its maps.
    pub maps: HashMap<MaterialPreset, PresetMaps>,
}

impl PresetTextures {
    /// Maps for `preset`, if it is textured.
    pub fn get(&self, preset: MaterialPreset) -> Option<&PresetMaps> {
        self.maps.get(&preset)
    }
}

/// Rasterises every preset pattern and inserts [`PresetTextures`].
pub fn generate_preset_textures(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    cfg: Res<PresetsConfig>,
) {
    let sampler = PatternSampler::new(cfg.grain_seed, cfg.grain_octaves);
    let mut maps = HashMap::new();

    for preset in MaterialPreset::ALL {
        let def = preset.definition();
        let Some(pattern) = def.pattern else {
            continue;
        };
        let pixels = rasterize(&sampler, pattern, cfg.texture_size, def.normal_scale);
        let albedo = images.add(repeating_image(
            pixels.size,
            pixels.albedo,
            TextureFormat::Rgba8UnormSrgb,
        ));
        let normal = images.add(repeating_image(
            pixels.size,
            pixels.normal,
            TextureFormat::Rgba8Unorm,
        ));
        maps.insert(preset, PresetMaps { albedo, normal });
    }

    info!(
        "generated {} preset textures at {}px",
        maps.len(),
        cfg.texture_size
    );
    commands.insert_resource(PresetTextures { maps });
}
