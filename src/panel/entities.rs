use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::MaterialMode;
use crate::cube::BasicLook;

/// Live panel state shared with other plugins.
#[derive(Resource, Clone, Debug, Default, PartialEq, Reflect)]
pub struct PanelState {
    /// Frame-time overlay visible.
    pub show_stats: bool,
    /// The pointer is over egui this frame; camera controls stand down.
    pub pointer_over_panel: bool,
}

// ── Shared context bundles ──────────────────────────────────────────

/// Scene settings the panel edits directly.
#[derive(SystemParam)]
pub struct SceneControls<'w> {
    pub(super) clear_color: ResMut<'w, ClearColor>,
    pub(super) mode: Res<'w, State<MaterialMode>>,
    pub(super) next_mode: ResMut<'w, NextState<MaterialMode>>,
    pub(super) basic: ResMut<'w, BasicLook>,
}
