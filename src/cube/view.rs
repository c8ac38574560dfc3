//! Per-face render parameters derived from [`FaceMaterialState`].

use bevy::math::Affine2;
use bevy::prelude::*;

use super::entities::{BasicLook, FACE_COUNT, FaceIndex, FaceMaterialState};
use crate::MaterialMode;
use crate::presets::{MaterialPreset, PresetTextures};

/// Resolved material parameters for one face.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceRenderParams {
    /// Preset whose texture maps to bind; `None` for untextured faces.
    pub textured: Option<MaterialPreset>,
    /// Base color (tint when textured).
    pub base_color: Color,
    /// Metallic factor.
    pub metallic: f32,
    /// Perceptual roughness.
    pub roughness: f32,
    /// UV tiling factor.
    pub repeat: f32,
    /// Highlight overlay; black when the face is not selected.
    pub emissive: LinearRgba,
}

/// Derives render parameters for every face.
///
/// Pure: the same state, mode, look and highlight always give the same result.
pub fn resolve_face_params(
    state: &FaceMaterialState,
    mode: MaterialMode,
    basic: &BasicLook,
    highlight: LinearRgba,
) -> [FaceRenderParams; FACE_COUNT] {
    FaceIndex::ALL.map(|face| match mode {
        MaterialMode::Basic => FaceRenderParams {
            textured: None,
            base_color: basic.color,
            metallic: 0.0,
            roughness: 0.5,
            repeat: 1.0,
            emissive: LinearRgba::BLACK,
        },
        MaterialMode::Pbr => {
            let preset = state.preset(face);
            let def = preset.definition();
            FaceRenderParams {
                textured: def.pattern.map(|_| preset),
                base_color: def.base_color,
                metallic: def.metallic,
                roughness: def.roughness,
                repeat: def.repeat,
                emissive: if state.selected() == Some(face) {
                    highlight
                } else {
                    LinearRgba::BLACK
                },
            }
        }
    })
}

/// Writes `params` into a face material, binding maps from `textures`.
pub fn apply_params(
    material: &mut StandardMaterial,
    params: &FaceRenderParams,
    textures: &PresetTextures,
) {
    let maps = params.textured.and_then(|preset| textures.get(preset));
    material.base_color = params.base_color;
    material.metallic = params.metallic;
    material.perceptual_roughness = params.roughness;
    material.emissive = params.emissive;
    material.base_color_texture = maps.map(|m| m.albedo.clone());
    material.normal_map_texture = maps.map(|m| m.normal.clone());
    material.uv_transform = Affine2::from_scale(Vec2::splat(params.repeat));
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::cube::entities::SurfaceHit;

    const GLOW: LinearRgba = LinearRgba {
        red: 1.0,
        green: 0.6,
        blue: 0.1,
        alpha: 1.0,
    };

    fn face(i: usize) -> FaceIndex {
        FaceIndex::new(i).unwrap()
    }

    #[test]
    fn unselected_faces_use_plain_definition() {
        let state = FaceMaterialState::new(MaterialPreset::Brick);
        let params = resolve_face_params(&state, MaterialMode::Pbr, &BasicLook::default(), GLOW);
        let brick = MaterialPreset::Brick.definition();
        for p in &params {
            assert_eq!(p.base_color, brick.base_color);
            assert_eq!(p.textured, Some(MaterialPreset::Brick));
            assert_eq!(p.emissive, LinearRgba::BLACK);
        }
    }

    #[test]
    fn basic_mode_paints_every_face_flat() {
        let mut state = FaceMaterialState::new(MaterialPreset::Metal);
        state.select_face(face(0));
        let look = BasicLook::default();
        let params = resolve_face_params(&state, MaterialMode::Basic, &look, GLOW);
        for p in &params {
            assert_eq!(p.base_color, look.color);
            assert_eq!(p.textured, None);
            assert_eq!(p.emissive, LinearRgba::BLACK);
        }
    }

    #[test]
    fn resolve_is_deterministic() {
        let mut state = FaceMaterialState::new(MaterialPreset::Fabric);
        state.set_face_preset(face(2), MaterialPreset::Shingle);
        let look = BasicLook::default();
        let a = resolve_face_params(&state, MaterialMode::Pbr, &look, GLOW);
        let b = resolve_face_params(&state, MaterialMode::Pbr, &look, GLOW);
        assert_eq!(a, b);
    }

    #[test]
    fn pick_then_dropdown_change_highlights_only_that_face() {
        let mut state = FaceMaterialState::new(MaterialPreset::Brick);
        let hit = SurfaceHit {
            triangle_index: Some(7),
        };
        state.pick_face_by_surface_hit(hit, MaterialMode::Pbr);
        assert_eq!(state.selected(), Some(face(3)));

        state.set_face_preset(face(3), MaterialPreset::Metal);
        assert_eq!(state.selected(), Some(face(3)));

        let params = resolve_face_params(&state, MaterialMode::Pbr, &BasicLook::default(), GLOW);
        let metal = MaterialPreset::Metal.definition();
        let brick = MaterialPreset::Brick.definition();
        for f in FaceIndex::ALL {
            let p = &params[f.index()];
            if f == face(3) {
                assert_eq!(state.preset(f), MaterialPreset::Metal);
                assert_eq!(p.base_color, metal.base_color);
                assert_eq!(p.metallic, metal.metallic);
                assert_eq!(p.emissive, GLOW);
            } else {
                assert_eq!(state.preset(f), MaterialPreset::Brick);
                assert_eq!(p.base_color, brick.base_color);
                assert_eq!(p.emissive, LinearRgba::BLACK);
            }
        }
    }

    #[test]
    fn apply_params_binds_preset_maps() {
        let mut textures = PresetTextures::default();
        let albedo = Handle::<Image>::default();
        let normal = Handle::<Image>::default();
        textures.maps.insert(
            MaterialPreset::Brick,
            crate::presets::PresetMaps {
                albedo: albedo.clone(),
                normal: normal.clone(),
            },
        );
        let state = FaceMaterialState::new(MaterialPreset::Brick);
        let params = resolve_face_params(&state, MaterialMode::Pbr, &BasicLook::default(), GLOW);

        let mut material = StandardMaterial::default();
        apply_params(&mut material, &params[0], &textures);
        assert_eq!(material.base_color_texture, Some(albedo));
        assert_eq!(material.normal_map_texture, Some(normal));
        assert_eq!(material.uv_transform, Affine2::from_scale(Vec2::splat(2.0)));
    }

    #[test]
    fn apply_params_unbinds_maps_in_basic_mode() {
        let state = FaceMaterialState::new(MaterialPreset::Brick);
        let params = resolve_face_params(&state, MaterialMode::Basic, &BasicLook::default(), GLOW);
        let mut material = StandardMaterial::default();
        apply_params(&mut material, &params[0], &PresetTextures::default());
        assert!(material.base_color_texture.is_none());
        assert_eq!(material.base_color, BasicLook::default().color);
    }
}
