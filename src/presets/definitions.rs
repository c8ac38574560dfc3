use std::fmt;

use bevy::prelude::*;

/// A named, predefined bundle of material rendering parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect)]
#[cfg_attr(feature = "native", derive(clap::ValueEnum))]
pub enum MaterialPreset {
    /// Staggered red bricks with recessed mortar.
    #[default]
    Brick,
    /// Overlapping slate roof shingles.
    Shingle,
    /// Brushed, fully metallic steel.
    Metal,
    /// Soft woven cloth.
    Fabric,
}

impl MaterialPreset {
    /// Every preset, in panel order.
    pub const ALL: [MaterialPreset; 4] = [Self::Brick, Self::Shingle, Self::Metal, Self::Fabric];

    /// Human-readable label for the tweak panel.
    pub fn label(self) -> &'static str {
        match self {
            Self::Brick => "Brick",
            Self::Shingle => "Shingle",
            Self::Metal => "Metal",
            Self::Fabric => "Fabric",
        }
    }

    /// The immutable rendering parameters shared by every face using this preset.
    pub fn definition(self) -> &'static MaterialDefinition {
        match self {
            Self::Brick => &BRICK,
            Self::Shingle => &SHINGLE,
            Self::Metal => &METAL,
            Self::Fabric => &FABRIC,
        }
    }
}

impl fmt::Display for MaterialPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            Self::Brick => "brick",
            Self::Shingle => "shingle",
            Self::Metal => "metal",
            Self::Fabric => "fabric",
        };
        f.write_str(key)
    }
}

/// Procedural height field used to build a preset's albedo and normal maps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
pub enum TexturePattern {
    /// Running-bond brick courses.
    Bricks,
    /// Staggered rows of sloped shingles.
    Shingles,
    /// Fine streaks along U.
    Brushed,
    /// Alternating over/under threads.
    Weave,
}

/// Rendering parameters of one preset.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialDefinition {
    /// Albedo tint, multiplied with the pattern texture when there is one.
    pub base_color: Color,
    /// 0 = dielectric, 1 = metal.
    pub metallic: f32,
    /// Perceptual roughness in `[0, 1]`.
    pub roughness: f32,
    /// Optional albedo + normal map pattern.
    pub pattern: Option<TexturePattern>,
    /// How many times the pattern tiles across one face.
    pub repeat: f32,
    /// Bump strength baked into the normal map.
    pub normal_scale: f32,
}

static BRICK: MaterialDefinition = MaterialDefinition {
    base_color: Color::srgb(0.72, 0.33, 0.24),
    metallic: 0.0,
    roughness: 0.85,
    pattern: Some(TexturePattern::Bricks),
    repeat: 2.0,
    normal_scale: 6.0,
};

static SHINGLE: MaterialDefinition = MaterialDefinition {
    base_color: Color::srgb(0.36, 0.35, 0.38),
    metallic: 0.0,
    roughness: 0.9,
    pattern: Some(TexturePattern::Shingles),
    repeat: 3.0,
    normal_scale: 4.0,
};

static METAL: MaterialDefinition = MaterialDefinition {
    base_color: Color::srgb(0.82, 0.82, 0.85),
    metallic: 1.0,
    roughness: 0.3,
    pattern: Some(TexturePattern::Brushed),
    repeat: 1.0,
    normal_scale: 1.0,
};

static FABRIC: MaterialDefinition = MaterialDefinition {
    base_color: Color::srgb(0.26, 0.32, 0.58),
    metallic: 0.0,
    roughness: 1.0,
    pattern: Some(TexturePattern::Weave),
    repeat: 4.0,
    normal_scale: 2.5,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_lowercase_keys() {
        let keys: Vec<String> = MaterialPreset::ALL.iter().map(|p| p.to_string()).collect();
        assert_eq!(keys, ["brick", "shingle", "metal", "fabric"]);
    }

    #[test]
    fn each_preset_has_its_own_pattern() {
        let mut patterns: Vec<TexturePattern> = MaterialPreset::ALL
            .iter()
            .filter_map(|p| p.definition().pattern)
            .collect();
        patterns.dedup();
        assert_eq!(patterns.len(), MaterialPreset::ALL.len());
    }

    #[test]
    fn definitions_stay_in_physical_ranges() {
        for preset in MaterialPreset::ALL {
            let def = preset.definition();
            assert!((0.0..=1.0).contains(&def.metallic), "{preset}");
            assert!((0.0..=1.0).contains(&def.roughness), "{preset}");
            assert!(def.repeat > 0.0, "{preset}");
        }
    }

    #[test]
    fn metal_is_the_only_metallic_preset() {
        for preset in MaterialPreset::ALL {
            let metallic = preset.definition().metallic > 0.5;
            assert_eq!(metallic, preset == MaterialPreset::Metal);
        }
    }
}
