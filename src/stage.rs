//! Scene around the cube: orbit camera, lights, floor and background.

mod entities;
mod systems;

pub use entities::{Floor, OrbitCamera, StageLight};

use bevy::prelude::*;

use crate::AppState;

/// Per-plugin configuration for camera, lighting and floor.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct StageConfig {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Near clip plane.
    pub near: f32,
    /// Far clip plane.
    pub far: f32,
    /// Initial camera position; the camera always looks at the origin.
    pub camera_start: Vec3,
    /// Closest zoom distance.
    pub min_distance: f32,
    /// Farthest zoom distance.
    pub max_distance: f32,
    /// Orbit speed (radians per pixel dragged).
    pub orbit_sensitivity: f32,
    /// Margin from vertical to keep the orbit from flipping (radians).
    pub pitch_margin: f32,
    /// Distance factor per wheel line.
    pub zoom_step: f32,
    /// Bloom post-processing intensity.
    pub bloom_intensity: f32,
    /// Clear color and fog color.
    pub background: Color,
    /// Distance where fog starts.
    pub fog_start: f32,
    /// Distance where fog is opaque.
    pub fog_end: f32,
    /// Global ambient brightness.
    pub ambient_brightness: f32,
    /// Point light position.
    pub point_position: Vec3,
    /// Point light intensity (lumens).
    pub point_intensity: f32,
    /// Directional light position, aimed at the origin.
    pub sun_position: Vec3,
    /// Directional light illuminance (lux).
    pub sun_illuminance: f32,
    /// Directional shadow map resolution (texels per side).
    pub shadow_map_size: usize,
    /// Directional shadow depth bias.
    pub shadow_depth_bias: f32,
    /// Distance from the camera covered by the single shadow cascade.
    pub shadow_distance: f32,
    /// Floor height.
    pub floor_y: f32,
    /// Floor edge length.
    pub floor_size: f32,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            near: 0.1,
            far: 200.0,
            camera_start: Vec3::new(3.0, 2.0, 8.0),
            min_distance: 2.0,
            max_distance: 35.0,
            orbit_sensitivity: 0.005,
            pitch_margin: 0.05,
            zoom_step: 1.1,
            bloom_intensity: 0.15,
            background: Color::srgb_u8(0x1a, 0x1a, 0x1a),
            fog_start: 1.0,
            fog_end: 60.0,
            ambient_brightness: 150.0,
            point_position: Vec3::new(0.0, 10.0, 0.0),
            point_intensity: 400_000.0,
            sun_position: Vec3::new(11.0, 26.0, -22.0),
            sun_illuminance: 6_000.0,
            shadow_map_size: 2048,
            shadow_depth_bias: 0.1,
            shadow_distance: 40.0,
            floor_y: -1.5,
            floor_size: 100.0,
        }
    }
}

/// Camera, lights and floor. Light gizmos show while inspecting.
pub struct StagePlugin(pub StageConfig);

impl Plugin for StagePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<StageConfig>()
            .register_type::<OrbitCamera>()
            .register_type::<StageLight>()
            .register_type::<Floor>()
            .insert_resource(self.0.clone())
            .insert_resource(ClearColor(self.0.background))
            .add_systems(
                Startup,
                (systems::spawn_camera, systems::spawn_lighting, systems::spawn_floor),
            )
            .add_systems(Update, systems::orbit_camera)
            .add_systems(
                Update,
                systems::draw_light_gizmos.run_if(in_state(AppState::Inspecting)),
            );
    }
}
