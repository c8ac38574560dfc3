use bevy::picking::Pickable;
use bevy::picking::events::{Pointer, Press};
use bevy::picking::mesh_picking::ray_cast::{MeshRayCast, MeshRayCastSettings, RayCastVisibility};
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;

use super::CubeConfig;
use super::entities::{
    BasicLook, CubeFace, CubeHull, FaceIndex, FaceMaterialState, KeyboardRotation, MaterialCube,
    PickOutcome, SurfaceHit,
};
use super::view::{apply_params, resolve_face_params};
use crate::MaterialMode;
use crate::math::{self, ArrowKeys};
use crate::presets::PresetTextures;

/// Flat square facing +Z with tangents for normal mapping.
fn face_mesh(size: f32) -> Mesh {
    // Tangent is +U; w = -1 turns the shader's cross(N, T) into +V.
    Mesh::from(Rectangle::new(size, size))
        .with_inserted_attribute(Mesh::ATTRIBUTE_TANGENT, vec![[1.0_f32, 0.0, 0.0, -1.0]; 4])
}

/// Spawns the cube root, one material-carrying child per face and the hidden
/// hull used to resolve triangle indices.
pub fn spawn_cube(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cfg: Res<CubeConfig>,
) {
    let half = cfg.size / 2.0;
    let face = meshes.add(face_mesh(cfg.size));
    let hull = meshes.add(Cuboid::from_length(cfg.size));

    commands
        .spawn((
            Name::new("MaterialCube"),
            MaterialCube,
            FaceMaterialState::new(cfg.default_preset),
            KeyboardRotation::default(),
            Transform::default(),
            Visibility::default(),
        ))
        .with_children(|cube| {
            cube.spawn((
                Name::new("CubeHull"),
                CubeHull,
                Mesh3d(hull),
                Transform::default(),
                Visibility::Hidden,
                Pickable::IGNORE,
            ));
            for index in FaceIndex::ALL {
                let normal = index.normal();
                cube.spawn((
                    Name::new(format!("CubeFace {}", index.label())),
                    CubeFace(index),
                    Mesh3d(face.clone()),
                    MeshMaterial3d(materials.add(StandardMaterial::default())),
                    Transform::from_translation(normal * half)
                        .with_rotation(Quat::from_rotation_arc(Vec3::Z, normal)),
                ))
                .observe(pick_face_on_press);
            }
        });

    info!("spawned material cube ({}, size {})", cfg.default_preset, cfg.size);
}

/// Re-casts the press ray against the hull of `cube` and reports the raw triangle.
fn hull_hit(
    cube: Entity,
    origin: Vec3,
    target: Vec3,
    hulls: &Query<&ChildOf, With<CubeHull>>,
    ray_cast: &mut MeshRayCast,
) -> SurfaceHit {
    let Ok(direction) = Dir3::new(target - origin) else {
        return SurfaceHit::default();
    };
    let filter = |entity: Entity| hulls.get(entity).is_ok_and(|c| c.parent() == cube);
    let settings = MeshRayCastSettings::default()
        .with_visibility(RayCastVisibility::Any)
        .with_filter(&filter);
    let triangle_index = ray_cast
        .cast_ray(Ray3d::new(origin, direction), &settings)
        .first()
        .and_then(|(_, hit)| hit.triangle_index);
    SurfaceHit { triangle_index }
}

/// Observer on each face: selects the pressed face.
///
/// The press never propagates past the cube, whether or not picking is
/// allowed in the current mode.
pub fn pick_face_on_press(
    mut press: On<Pointer<Press>>,
    mode: Res<State<MaterialMode>>,
    faces: Query<&ChildOf, With<CubeFace>>,
    hulls: Query<&ChildOf, With<CubeHull>>,
    cameras: Query<&GlobalTransform, With<Camera>>,
    mut ray_cast: MeshRayCast,
    mut cubes: Query<&mut FaceMaterialState>,
) {
    press.propagate(false);
    if press.event.button != PointerButton::Primary {
        return;
    }
    let Ok(cube) = faces.get(press.entity).map(ChildOf::parent) else {
        return;
    };
    let Ok(mut state) = cubes.get_mut(cube) else {
        return;
    };

    let mode = *mode.get();
    let hit = match (mode, press.event.hit.position, cameras.get(press.event.hit.camera)) {
        (MaterialMode::Pbr, Some(target), Ok(camera)) => {
            hull_hit(cube, camera.translation(), target, &hulls, &mut ray_cast)
        }
        _ => SurfaceHit::default(),
    };

    let before = state.selected();
    match state.bypass_change_detection().pick_face_by_surface_hit(hit, mode) {
        PickOutcome::Selected(face) => {
            if before != Some(face) {
                state.set_changed();
            }
            debug!("picked {face}");
        }
        PickOutcome::Blocked => debug!("face picking disabled in {} mode", mode.label()),
        PickOutcome::Ignored => debug!("press on cube without a triangle index"),
    }
}

/// Runs on leaving [`MaterialMode::Pbr`]: no face stays highlighted.
pub fn clear_selection_outside_pbr(mut cubes: Query<&mut FaceMaterialState>) {
    for mut state in &mut cubes {
        if state.bypass_change_detection().clear_selection() {
            state.set_changed();
            info!("cleared face selection");
        }
    }
}

/// Writes resolved parameters into every face material when state, mode or
/// basic look changed.
pub fn apply_face_materials(
    cubes: Query<(Ref<FaceMaterialState>, &Children), With<MaterialCube>>,
    faces: Query<(&CubeFace, &MeshMaterial3d<StandardMaterial>)>,
    mode: Res<State<MaterialMode>>,
    basic: Res<BasicLook>,
    cfg: Res<CubeConfig>,
    textures: Res<PresetTextures>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let global_change = mode.is_changed() || basic.is_changed() || textures.is_changed();
    for (state, children) in &cubes {
        if !global_change && !state.is_changed() {
            continue;
        }
        let params = resolve_face_params(&state, *mode.get(), &basic, cfg.highlight_emissive);
        for child in children.iter() {
            let Ok((face, handle)) = faces.get(child) else {
                continue;
            };
            if let Some(material) = materials.get_mut(&handle.0) {
                apply_params(material, &params[face.0.index()], &textures);
            }
        }
    }
}

/// Arrow keys rotate the cube about X (up/down) and Y (left/right).
pub fn rotate_with_arrows(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    cfg: Res<CubeConfig>,
    mut cubes: Query<(&mut KeyboardRotation, &mut Transform), With<MaterialCube>>,
) {
    let arrows = ArrowKeys {
        up: keys.pressed(KeyCode::ArrowUp),
        down: keys.pressed(KeyCode::ArrowDown),
        left: keys.pressed(KeyCode::ArrowLeft),
        right: keys.pressed(KeyCode::ArrowRight),
    };
    let delta = math::arrow_rotation_delta(
        arrows,
        cfg.rotate_x,
        cfg.rotate_y,
        cfg.rotation_speed,
        time.delta_secs(),
    );
    if delta == Vec2::ZERO {
        return;
    }
    for (mut rotation, mut transform) in &mut cubes {
        rotation.x += delta.x;
        rotation.y += delta.y;
        transform.rotation = Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, 0.0);
    }
}
