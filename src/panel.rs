//! egui tweak panel and frame-time overlay.
//!
//! The face section is rebuilt each frame from [`FaceMaterialState`](crate::cube::FaceMaterialState)
//! by [`face_controls`]; user input comes back as [`FaceEdit`](crate::cube::FaceEdit)s
//! applied after drawing.

mod controls;
mod entities;
mod systems;

pub use controls::{FaceControl, face_controls};
pub use entities::PanelState;

use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

/// Per-plugin configuration for the tweak panel.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct PanelConfig {
    /// Default side panel width in points.
    pub width: f32,
    /// Whether the frame-time overlay starts enabled.
    pub show_stats: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: 280.0,
            show_stats: true,
        }
    }
}

/// Draws the tweak panel. Needs the cube plugin and an egui context.
pub struct PanelPlugin(pub PanelConfig);

impl Plugin for PanelPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<FrameTimeDiagnosticsPlugin>() {
            app.add_plugins(FrameTimeDiagnosticsPlugin::default());
        }
        app.register_type::<PanelConfig>()
            .register_type::<PanelState>()
            .insert_resource(self.0.clone())
            .insert_resource(PanelState {
                show_stats: self.0.show_stats,
                pointer_over_panel: false,
            })
            .add_systems(
                EguiPrimaryContextPass,
                (
                    systems::draw_tweak_panel,
                    systems::draw_stats_overlay.run_if(|panel: Res<PanelState>| panel.show_stats),
                )
                    .chain(),
            );
    }
}
