//! Pure computation helpers extracted for testability.
//!
//! All functions in this module are free of Bevy ECS dependencies and operate
//! on plain numeric / `Vec2` / `Vec3` inputs, making them straightforward to unit-test.

use bevy::prelude::{Vec2, Vec3};

/// Maps a noise value from the standard `[-1, 1]` range into `[min, max]`.
///
/// Noise generators (e.g. `Fbm<Perlin>`) produce values centred around zero.
/// This linearly rescales to an arbitrary output range.
///
/// # Examples
/// ```
/// # use material_cube::math::map_noise_to_range;
/// assert_eq!(map_noise_to_range(-1.0, 0.0, 10.0), 0.0);
/// assert_eq!(map_noise_to_range( 1.0, 0.0, 10.0), 10.0);
/// assert_eq!(map_noise_to_range( 0.0, 2.0, 6.0),  4.0);
/// ```
pub fn map_noise_to_range(noise_val: f64, min: f32, max: f32) -> f32 {
    min + ((noise_val as f32 + 1.0) / 2.0) * (max - min)
}

/// Clamps a pitch angle so the camera cannot flip past vertical.
///
/// `current` is the existing pitch in radians, `delta` the desired change.
/// The result is clamped to `(-PI/2 + margin, PI/2 - margin)` and the
/// *effective* delta is returned (i.e. how much to actually rotate).
pub fn clamp_pitch(current: f32, delta: f32, margin: f32) -> f32 {
    let limit = std::f32::consts::FRAC_PI_2 - margin;
    let clamped = (current + delta).clamp(-limit, limit);
    clamped - current
}

/// Camera offset from its orbit focus for the given yaw, pitch and distance.
///
/// Yaw 0 looks down `-Z` from the `+Z` side; positive pitch lifts the camera.
pub fn orbit_offset(yaw: f32, pitch: f32, distance: f32) -> Vec3 {
    Vec3::new(
        distance * pitch.cos() * yaw.sin(),
        distance * pitch.sin(),
        distance * pitch.cos() * yaw.cos(),
    )
}

/// Inverse of [`orbit_offset`]: returns `(yaw, pitch, distance)`.
///
/// A zero offset yields all zeros.
pub fn orbit_angles(offset: Vec3) -> (f32, f32, f32) {
    let distance = offset.length();
    if distance <= f32::EPSILON {
        return (0.0, 0.0, 0.0);
    }
    let yaw = offset.x.atan2(offset.z);
    let pitch = (offset.y / distance).clamp(-1.0, 1.0).asin();
    (yaw, pitch, distance)
}

/// Orbit distance after `scroll` wheel lines, clamped to `[min, max]`.
///
/// Each line scales the distance by `step`; positive scroll moves closer.
pub fn zoom_distance(distance: f32, scroll: f32, step: f32, min: f32, max: f32) -> f32 {
    (distance * step.powf(-scroll)).clamp(min, max)
}

/// Which arrow keys are held this frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArrowKeys {
    /// `ArrowUp`
    pub up: bool,
    /// `ArrowDown`
    pub down: bool,
    /// `ArrowLeft`
    pub left: bool,
    /// `ArrowRight`
    pub right: bool,
}

/// Rotation change `(x, y)` in radians for one frame of arrow-key input.
///
/// Up tilts the top away (negative X), Left turns towards the viewer's left
/// (positive Y). Opposite keys cancel out. Disabled axes always yield zero.
pub fn arrow_rotation_delta(
    keys: ArrowKeys,
    enable_x: bool,
    enable_y: bool,
    speed: f32,
    dt: f32,
) -> Vec2 {
    let step = speed * dt;
    let mut delta = Vec2::ZERO;
    if enable_x {
        if keys.up {
            delta.x -= step;
        }
        if keys.down {
            delta.x += step;
        }
    }
    if enable_y {
        if keys.left {
            delta.y += step;
        }
        if keys.right {
            delta.y -= step;
        }
    }
    delta
}

/// Tangent-space normal of a height field from its two partial slopes.
///
/// `du`/`dv` are height differences per texel; `strength` scales the bumps
/// (0 gives a flat `+Z` normal).
pub fn slope_normal(du: f32, dv: f32, strength: f32) -> Vec3 {
    Vec3::new(-du * strength, -dv * strength, 1.0).normalize()
}

/// Packs a unit vector into an RGB normal-map texel.
pub fn encode_normal(n: Vec3) -> [u8; 3] {
    let to_byte = |c: f32| ((c * 0.5 + 0.5).clamp(0.0, 1.0) * 255.0).round() as u8;
    [to_byte(n.x), to_byte(n.y), to_byte(n.z)]
}
