//! Material presets: the closed preset enumeration, its immutable
//! definitions, and the textures generated for them at startup.

mod definitions;
mod systems;
mod textures;

pub use definitions::{MaterialDefinition, MaterialPreset, TexturePattern};
pub use systems::{PresetMaps, PresetTextures};
pub use textures::{PatternPixels, PatternSampler, rasterize, repeating_image};

use bevy::prelude::*;

/// Per-plugin configuration for preset texture generation.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct PresetsConfig {
    /// Edge length (texels) of each generated texture.
    pub texture_size: u32,
    /// Seed for the surface grain noise.
    pub grain_seed: u32,
    /// Octaves of surface grain noise.
    pub grain_octaves: usize,
}

impl Default for PresetsConfig {
    fn default() -> Self {
        Self {
            texture_size: 256,
            grain_seed: 11,
            grain_octaves: 3,
        }
    }
}

/// Generates [`PresetTextures`] during `PreStartup` so cube spawning can rely on them.
pub struct PresetsPlugin(pub PresetsConfig);

impl Plugin for PresetsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<PresetsConfig>()
            .register_type::<MaterialPreset>()
            .insert_resource(self.0.clone())
            .add_systems(PreStartup, systems::generate_preset_textures);
    }
}
