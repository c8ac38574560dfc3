use std::fmt;
use std::sync::Arc;

use bevy::prelude::*;

use crate::MaterialMode;
use crate::presets::MaterialPreset;

/// Number of logical faces on the cube.
pub const FACE_COUNT: usize = 6;

/// One preset per face, indexed by [`FaceIndex`].
pub type FaceAssignment = [MaterialPreset; FACE_COUNT];

/// One of the six logical faces, in the cuboid mesh's triangle order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect)]
pub struct FaceIndex(u8);

impl FaceIndex {
    /// All faces, in order.
    pub const ALL: [FaceIndex; FACE_COUNT] = [
        FaceIndex(0),
        FaceIndex(1),
        FaceIndex(2),
        FaceIndex(3),
        FaceIndex(4),
        FaceIndex(5),
    ];

    /// `None` when `index >= 6`.
    pub fn new(index: usize) -> Option<Self> {
        (index < FACE_COUNT).then_some(Self(index as u8))
    }

    /// Logical face owning a raw triangle; each face is two triangles.
    pub fn from_triangle(triangle_index: usize) -> Option<Self> {
        Self::new(triangle_index / 2)
    }

    /// Position in `[0, 6)`.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Panel label.
    pub fn label(self) -> &'static str {
        ["Front", "Back", "Right", "Left", "Top", "Bottom"][self.index()]
    }

    /// Outward unit normal of the face in cube-local space.
    pub fn normal(self) -> Vec3 {
        [
            Vec3::Z,
            Vec3::NEG_Z,
            Vec3::X,
            Vec3::NEG_X,
            Vec3::Y,
            Vec3::NEG_Y,
        ][self.index()]
    }
}

impl fmt::Display for FaceIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.0)
    }
}

/// Raw pick data from the renderer: the hit triangle of the cube hull, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceHit {
    /// Triangle index within the triangulated cube.
    pub triangle_index: Option<usize>,
}

/// What a pick did to the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickOutcome {
    /// The hit carried no usable face; nothing changed.
    Ignored,
    /// Picking is unavailable in the current mode; nothing changed.
    Blocked,
    /// The face is now selected.
    Selected(FaceIndex),
}

/// A user edit coming from the tweak panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaceEdit {
    /// A new preset was picked in a face's dropdown.
    Preset(FaceIndex, MaterialPreset),
    /// A face's row was clicked.
    Select(FaceIndex),
}

/// Per-face presets and the highlighted face of one cube.
///
/// The assignment lives behind an [`Arc`] that is replaced, never mutated in
/// place, so an update that changes nothing keeps the same pointer.
#[derive(Component, Clone, Debug)]
pub struct FaceMaterialState {
    assignment: Arc<FaceAssignment>,
    selected: Option<FaceIndex>,
}

impl FaceMaterialState {
    /// Every face starts with `preset`; nothing is selected.
    pub fn new(preset: MaterialPreset) -> Self {
        Self {
            assignment: Arc::new([preset; FACE_COUNT]),
            selected: None,
        }
    }

    /// Shared handle to the current assignment.
    pub fn assignment(&self) -> &Arc<FaceAssignment> {
        &self.assignment
    }

    /// Preset currently on `face`.
    pub fn preset(&self, face: FaceIndex) -> MaterialPreset {
        self.assignment[face.index()]
    }

    /// Highlighted face, if any.
    pub fn selected(&self) -> Option<FaceIndex> {
        self.selected
    }

    /// Assigns `preset` to `face` and selects it. Returns whether anything changed.
    ///
    /// Assigning the preset a face already has leaves the assignment untouched.
    pub fn set_face_preset(&mut self, face: FaceIndex, preset: MaterialPreset) -> bool {
        let selection_changed = self.select_face(face);
        if self.assignment[face.index()] == preset {
            return selection_changed;
        }
        let mut next = *self.assignment;
        next[face.index()] = preset;
        self.assignment = Arc::new(next);
        true
    }

    /// Selects `face` without touching presets. Returns whether the selection changed.
    pub fn select_face(&mut self, face: FaceIndex) -> bool {
        let changed = self.selected != Some(face);
        self.selected = Some(face);
        changed
    }

    /// Applies a panel edit. Returns whether anything changed.
    pub fn apply(&mut self, edit: FaceEdit) -> bool {
        match edit {
            FaceEdit::Preset(face, preset) => self.set_face_preset(face, preset),
            FaceEdit::Select(face) => self.select_face(face),
        }
    }

    /// Clears the selection. Returns whether there was one.
    pub fn clear_selection(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Selects the face owning the hit triangle, if picking is allowed in `mode`.
    pub fn pick_face_by_surface_hit(&mut self, hit: SurfaceHit, mode: MaterialMode) -> PickOutcome {
        if mode != MaterialMode::Pbr {
            return PickOutcome::Blocked;
        }
        let Some(face) = hit.triangle_index.and_then(FaceIndex::from_triangle) else {
            return PickOutcome::Ignored;
        };
        self.select_face(face);
        PickOutcome::Selected(face)
    }
}

/// Marker on the cube root entity.
#[derive(Component, Reflect)]
pub struct MaterialCube;

/// One rendered face. Child of the [`MaterialCube`].
#[derive(Component, Reflect)]
pub struct CubeFace(pub FaceIndex);

/// Hidden full cuboid used to recover the raw triangle index of a pick.
#[derive(Component, Reflect)]
pub struct CubeHull;

/// Accumulated arrow-key rotation of a cube.
#[derive(Component, Clone, Debug, Default, Reflect)]
pub struct KeyboardRotation {
    /// Rotation about X (radians).
    pub x: f32,
    /// Rotation about Y (radians).
    pub y: f32,
}

/// Flat color used for the whole cube in [`MaterialMode::Basic`].
#[derive(Resource, Clone, Debug, Reflect)]
pub struct BasicLook {
    /// Base color.
    pub color: Color,
}

impl Default for BasicLook {
    fn default() -> Self {
        Self {
            // mediumpurple
            color: Color::srgb_u8(147, 112, 219),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(i: usize) -> FaceIndex {
        FaceIndex::new(i).unwrap()
    }

    // ── FaceIndex ───────────────────────────────────────────────────

    #[test]
    fn face_index_rejects_out_of_range() {
        assert!(FaceIndex::new(5).is_some());
        assert!(FaceIndex::new(6).is_none());
    }

    #[test]
    fn triangles_map_pairwise_to_faces() {
        for raw in 0..12 {
            assert_eq!(FaceIndex::from_triangle(raw), Some(face(raw / 2)));
        }
        assert_eq!(FaceIndex::from_triangle(7), Some(face(3)));
        assert_eq!(FaceIndex::from_triangle(12), None);
    }

    #[test]
    fn face_normals_are_distinct_axes() {
        for a in FaceIndex::ALL {
            for b in FaceIndex::ALL {
                let dot = a.normal().dot(b.normal());
                if a == b {
                    assert_eq!(dot, 1.0);
                } else {
                    assert!(dot <= 0.0, "{a} and {b} share a direction");
                }
            }
        }
    }

    // ── set_face_preset ─────────────────────────────────────────────

    #[test]
    fn set_face_preset_changes_only_that_face() {
        for i in FaceIndex::ALL {
            for preset in MaterialPreset::ALL {
                let mut state = FaceMaterialState::new(MaterialPreset::Brick);
                let before = **state.assignment();
                state.set_face_preset(i, preset);
                for j in FaceIndex::ALL {
                    let expected = if j == i { preset } else { before[j.index()] };
                    assert_eq!(state.preset(j), expected);
                }
            }
        }
    }

    #[test]
    fn same_preset_keeps_assignment_identity() {
        let mut state = FaceMaterialState::new(MaterialPreset::Shingle);
        let before = Arc::clone(state.assignment());
        state.set_face_preset(face(2), MaterialPreset::Shingle);
        assert!(Arc::ptr_eq(&before, state.assignment()));
    }

    #[test]
    fn new_preset_replaces_assignment() {
        let mut state = FaceMaterialState::new(MaterialPreset::Brick);
        let before = Arc::clone(state.assignment());
        assert!(state.set_face_preset(face(0), MaterialPreset::Fabric));
        assert!(!Arc::ptr_eq(&before, state.assignment()));
        assert_eq!(before[0], MaterialPreset::Brick);
    }

    #[test]
    fn set_face_preset_always_selects_face() {
        let mut state = FaceMaterialState::new(MaterialPreset::Brick);
        state.select_face(face(5));
        state.set_face_preset(face(1), MaterialPreset::Brick);
        assert_eq!(state.selected(), Some(face(1)));
        state.set_face_preset(face(4), MaterialPreset::Metal);
        assert_eq!(state.selected(), Some(face(4)));
    }

    #[test]
    fn repeated_identical_update_reports_no_change() {
        let mut state = FaceMaterialState::new(MaterialPreset::Brick);
        assert!(state.set_face_preset(face(3), MaterialPreset::Metal));
        assert!(!state.set_face_preset(face(3), MaterialPreset::Metal));
    }

    #[test]
    fn select_edit_keeps_presets() {
        let mut state = FaceMaterialState::new(MaterialPreset::Fabric);
        let before = Arc::clone(state.assignment());
        assert!(state.apply(FaceEdit::Select(face(4))));
        assert_eq!(state.selected(), Some(face(4)));
        assert!(Arc::ptr_eq(&before, state.assignment()));
        assert!(!state.apply(FaceEdit::Select(face(4))));
    }

    #[test]
    fn preset_edit_goes_through_set_face_preset() {
        let mut state = FaceMaterialState::new(MaterialPreset::Brick);
        assert!(state.apply(FaceEdit::Preset(face(1), MaterialPreset::Shingle)));
        assert_eq!(state.preset(face(1)), MaterialPreset::Shingle);
        assert_eq!(state.selected(), Some(face(1)));
    }

    // ── picking ─────────────────────────────────────────────────────

    #[test]
    fn pick_selects_face_of_triangle() {
        let mut state = FaceMaterialState::new(MaterialPreset::Brick);
        let hit = SurfaceHit {
            triangle_index: Some(10),
        };
        assert_eq!(
            state.pick_face_by_surface_hit(hit, MaterialMode::Pbr),
            PickOutcome::Selected(face(5))
        );
        assert_eq!(state.selected(), Some(face(5)));
    }

    #[test]
    fn pick_without_triangle_is_ignored() {
        let mut state = FaceMaterialState::new(MaterialPreset::Brick);
        state.select_face(face(2));
        let outcome = state.pick_face_by_surface_hit(SurfaceHit::default(), MaterialMode::Pbr);
        assert_eq!(outcome, PickOutcome::Ignored);
        assert_eq!(state.selected(), Some(face(2)));
    }

    #[test]
    fn pick_beyond_last_triangle_is_ignored() {
        let mut state = FaceMaterialState::new(MaterialPreset::Brick);
        let hit = SurfaceHit {
            triangle_index: Some(40),
        };
        assert_eq!(
            state.pick_face_by_surface_hit(hit, MaterialMode::Pbr),
            PickOutcome::Ignored
        );
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn pick_in_basic_mode_is_blocked() {
        let mut state = FaceMaterialState::new(MaterialPreset::Brick);
        let hit = SurfaceHit {
            triangle_index: Some(0),
        };
        assert_eq!(
            state.pick_face_by_surface_hit(hit, MaterialMode::Basic),
            PickOutcome::Blocked
        );
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn clear_selection_reports_previous_state() {
        let mut state = FaceMaterialState::new(MaterialPreset::Brick);
        assert!(!state.clear_selection());
        state.select_face(face(0));
        assert!(state.clear_selection());
        assert_eq!(state.selected(), None);
    }
}
