use bevy::prelude::*;

/// Orbit parameters of a camera circling the origin.
#[derive(Component, Clone, Debug, Reflect)]
pub struct OrbitCamera {
    /// Rotation about Y (radians).
    pub yaw: f32,
    /// Elevation above the XZ plane (radians).
    pub pitch: f32,
    /// Distance from the origin.
    pub distance: f32,
}

impl OrbitCamera {
    /// Orbit that places the camera at `position`.
    pub fn from_position(position: Vec3) -> Self {
        let (yaw, pitch, distance) = crate::math::orbit_angles(position);
        Self {
            yaw,
            pitch,
            distance,
        }
    }

    /// Camera transform for the current orbit, looking at the origin.
    pub fn transform(&self) -> Transform {
        Transform::from_translation(crate::math::orbit_offset(self.yaw, self.pitch, self.distance))
            .looking_at(Vec3::ZERO, Vec3::Y)
    }
}

/// Marker on the scene lights, drawn as gizmos while inspecting.
#[derive(Component, Reflect)]
pub struct StageLight;

/// Marker on the floor plane.
#[derive(Component, Reflect)]
pub struct Floor;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_round_trips_start_position() {
        let start = Vec3::new(3.0, 2.0, 8.0);
        let t = OrbitCamera::from_position(start).transform();
        assert!(t.translation.distance(start) < 1e-4);
    }

    #[test]
    fn orbit_camera_faces_origin() {
        let t = OrbitCamera::from_position(Vec3::new(-4.0, 1.0, 2.0)).transform();
        let to_origin = (-t.translation).normalize();
        assert!(t.forward().dot(to_origin) > 0.9999);
    }
}
