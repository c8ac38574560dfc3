//! The material cube: per-face preset state, face picking, arrow-key rotation,
//! and the systems that keep the six face materials in sync.
//!
//! [`FaceMaterialState`] on the cube root is the single source of truth. Picks,
//! panel edits and mode changes mutate it through its methods; rendering is
//! re-derived from it by [`resolve_face_params`].

mod entities;
mod systems;
mod view;

pub use entities::{
    BasicLook, CubeFace, CubeHull, FACE_COUNT, FaceAssignment, FaceEdit, FaceIndex,
    FaceMaterialState, KeyboardRotation, MaterialCube, PickOutcome, SurfaceHit,
};
pub use view::{FaceRenderParams, apply_params, resolve_face_params};

use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;

use crate::MaterialMode;
use crate::presets::{MaterialPreset, PresetTextures};

/// Per-plugin configuration for the cube.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct CubeConfig {
    /// Edge length in world units.
    pub size: f32,
    /// Preset every face starts with.
    pub default_preset: MaterialPreset,
    /// Arrow-key rotation speed (radians per second).
    pub rotation_speed: f32,
    /// Up/Down arrows rotate about X.
    pub rotate_x: bool,
    /// Left/Right arrows rotate about Y.
    pub rotate_y: bool,
    /// Emissive overlay on the selected face.
    pub highlight_emissive: LinearRgba,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            size: 1.5,
            default_preset: MaterialPreset::Brick,
            rotation_speed: 3.0,
            rotate_x: true,
            rotate_y: true,
            highlight_emissive: LinearRgba::rgb(0.9, 0.55, 0.1),
        }
    }
}

/// Spawns the cube and wires picking, rotation and material updates.
///
/// Expects [`MaterialMode`] to be registered as a state by the app.
pub struct CubePlugin(pub CubeConfig);

impl Plugin for CubePlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<MeshPickingPlugin>() {
            app.add_plugins(MeshPickingPlugin);
        }
        app.register_type::<CubeConfig>()
            .register_type::<MaterialCube>()
            .register_type::<CubeFace>()
            .register_type::<CubeHull>()
            .register_type::<KeyboardRotation>()
            .register_type::<BasicLook>()
            .insert_resource(self.0.clone())
            .init_resource::<BasicLook>()
            .add_systems(Startup, systems::spawn_cube)
            .add_systems(
                OnExit(MaterialMode::Pbr),
                systems::clear_selection_outside_pbr,
            )
            .add_systems(
                Update,
                (
                    systems::rotate_with_arrows,
                    systems::apply_face_materials.run_if(resource_exists::<PresetTextures>),
                ),
            );
    }
}
