use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::light::{CascadeShadowConfigBuilder, DirectionalLightShadowMap};
use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::post_process::bloom::{Bloom, BloomCompositeMode};
use bevy::prelude::*;
use bevy::render::view::Hdr;

use super::StageConfig;
use super::entities::{Floor, OrbitCamera, StageLight};
use crate::math;
use crate::panel::PanelState;

/// Spawns the HDR orbit camera with bloom and distance fog.
pub fn spawn_camera(mut commands: Commands, cfg: Res<StageConfig>) {
    let orbit = OrbitCamera::from_position(cfg.camera_start);
    commands.spawn((
        Name::new("StageCamera"),
        Camera3d::default(),
        Hdr,
        Tonemapping::TonyMcMapface,
        Bloom {
            intensity: cfg.bloom_intensity,
            composite_mode: BloomCompositeMode::Additive,
            ..Bloom::NATURAL
        },
        Projection::Perspective(PerspectiveProjection {
            fov: cfg.fov_degrees.to_radians(),
            near: cfg.near,
            far: cfg.far,
            ..default()
        }),
        DistanceFog {
            color: cfg.background,
            falloff: FogFalloff::Linear {
                start: cfg.fog_start,
                end: cfg.fog_end,
            },
            ..default()
        },
        orbit.transform(),
        orbit,
    ));
}

/// Ambient, point and shadow-casting directional light.
///
/// The sun casts through one cascade sized to the scene around the cube.
pub fn spawn_lighting(mut commands: Commands, cfg: Res<StageConfig>) {
    commands.insert_resource(DirectionalLightShadowMap {
        size: cfg.shadow_map_size,
    });
    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: cfg.ambient_brightness,
        ..default()
    });
    commands.spawn((
        Name::new("PointLight"),
        StageLight,
        PointLight {
            intensity: cfg.point_intensity,
            range: 40.0,
            ..default()
        },
        Transform::from_translation(cfg.point_position),
    ));
    commands.spawn((
        Name::new("SunLight"),
        StageLight,
        DirectionalLight {
            illuminance: cfg.sun_illuminance,
            shadows_enabled: true,
            shadow_depth_bias: cfg.shadow_depth_bias,
            ..default()
        },
        CascadeShadowConfigBuilder {
            num_cascades: 1,
            minimum_distance: cfg.near,
            maximum_distance: cfg.shadow_distance,
            ..default()
        }
        .build(),
        Transform::from_translation(cfg.sun_position).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Glossy floor plane under the cube.
pub fn spawn_floor(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cfg: Res<StageConfig>,
) {
    commands.spawn((
        Name::new("Floor"),
        Floor,
        Mesh3d(meshes.add(Plane3d::default().mesh().size(cfg.floor_size, cfg.floor_size))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x20, 0x20, 0x20),
            metallic: 0.4,
            perceptual_roughness: 0.1,
            ..default()
        })),
        Transform::from_xyz(0.0, cfg.floor_y, 0.0),
    ));
}

/// Left-drag orbits around the origin, the wheel zooms. Ignored while the
/// pointer is over the tweak panel.
pub fn orbit_camera(
    mut motion: MessageReader<MouseMotion>,
    mut wheel: MessageReader<MouseWheel>,
    buttons: Res<ButtonInput<MouseButton>>,
    panel: Option<Res<PanelState>>,
    cfg: Res<StageConfig>,
    mut cameras: Query<(&mut OrbitCamera, &mut Transform)>,
) {
    let drag: Vec2 = motion.read().map(|ev| ev.delta).sum();
    let scroll: f32 = wheel
        .read()
        .map(|ev| match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y / 40.0,
        })
        .sum();
    if panel.is_some_and(|p| p.pointer_over_panel) {
        return;
    }
    let dragging = buttons.pressed(MouseButton::Left) && drag != Vec2::ZERO;
    if !dragging && scroll == 0.0 {
        return;
    }

    for (mut orbit, mut transform) in &mut cameras {
        if dragging {
            orbit.yaw -= drag.x * cfg.orbit_sensitivity;
            let pitch = orbit.pitch;
            orbit.pitch += math::clamp_pitch(pitch, drag.y * cfg.orbit_sensitivity, cfg.pitch_margin);
        }
        if scroll != 0.0 {
            orbit.distance = math::zoom_distance(
                orbit.distance,
                scroll,
                cfg.zoom_step,
                cfg.min_distance,
                cfg.max_distance,
            );
        }
        *transform = orbit.transform();
    }
}

/// Light positions as wire spheres, with the sun's aim towards the origin.
pub fn draw_light_gizmos(
    mut gizmos: Gizmos,
    lights: Query<(&GlobalTransform, Has<DirectionalLight>), With<StageLight>>,
) {
    for (transform, directional) in &lights {
        let position = transform.translation();
        gizmos.sphere(Isometry3d::from_translation(position), 0.5, Color::srgb(1.0, 0.85, 0.2));
        if directional {
            gizmos.line(position, Vec3::ZERO, Color::srgb(1.0, 0.6, 0.1));
        }
    }
}
