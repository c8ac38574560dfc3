use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::PanelConfig;
use super::controls::{FaceControl, face_controls};
use super::entities::{PanelState, SceneControls};
use crate::MaterialMode;
use crate::cube::{FaceEdit, FaceMaterialState, MaterialCube};
use crate::select::HighlightedSelect;

/// sRGB color button; returns the new color once the user changes it.
fn srgb_edit(ui: &mut egui::Ui, color: Color) -> Option<Color> {
    let c = color.to_srgba();
    let mut rgb = [c.red, c.green, c.blue];
    ui.color_edit_button_rgb(&mut rgb)
        .changed()
        .then(|| Color::srgb(rgb[0], rgb[1], rgb[2]))
}

fn face_rows(ui: &mut egui::Ui, controls: &[FaceControl], edits: &mut Vec<FaceEdit>) {
    if controls.iter().all(|c| !c.render) {
        ui.weak("Face presets are available in PBR mode.");
        return;
    }
    for control in controls.iter().filter(|c| c.render) {
        let response = HighlightedSelect::new(
            ("face-preset", control.face),
            control.label,
            &control.value,
            &control.settings,
        )
        .disabled(control.disabled)
        .show(ui);
        if let Some(preset) = response.updated {
            edits.push(FaceEdit::Preset(control.face, preset));
        } else if response.row_clicked {
            edits.push(FaceEdit::Select(control.face));
        }
    }
}

/// Right-hand tweak panel: stats toggle, background, material mode and
/// one highlighted dropdown per face.
pub fn draw_tweak_panel(
    mut contexts: EguiContexts,
    cfg: Res<PanelConfig>,
    mut panel: ResMut<PanelState>,
    mut scene: SceneControls,
    mut cubes: Query<&mut FaceMaterialState, With<MaterialCube>>,
) -> Result {
    let ctx = contexts.ctx_mut()?;
    let current_mode = *scene.mode.get();
    let controls = cubes
        .iter()
        .next()
        .map(|state| face_controls(state, current_mode));

    let mut show_stats = panel.show_stats;
    let mut picked_mode = current_mode;
    let mut background = None;
    let mut basic_color = None;
    let mut edits = Vec::new();

    egui::SidePanel::right("tweak_panel")
        .resizable(false)
        .default_width(cfg.width)
        .show(ctx, |ui| {
            ui.heading("Stats");
            ui.checkbox(&mut show_stats, "enable");
            ui.separator();

            ui.heading("Background");
            ui.horizontal(|ui| {
                ui.label("color");
                background = srgb_edit(ui, scene.clear_color.0);
            });
            ui.separator();

            ui.heading("Material");
            ui.horizontal(|ui| {
                for m in [MaterialMode::Pbr, MaterialMode::Basic] {
                    ui.radio_value(&mut picked_mode, m, m.label());
                }
            });
            ui.horizontal(|ui| {
                ui.label("basic color");
                basic_color = srgb_edit(ui, scene.basic.color);
            });
            ui.separator();

            ui.heading("Faces");
            match &controls {
                Some(controls) => face_rows(ui, controls, &mut edits),
                None => {
                    ui.weak("No cube in the scene.");
                }
            }
        });

    let pointer_over_panel = ctx.is_pointer_over_area() || ctx.wants_pointer_input();
    panel.set_if_neq(PanelState {
        show_stats,
        pointer_over_panel,
    });

    if let Some(color) = background {
        scene.clear_color.0 = color;
    }
    if let Some(color) = basic_color {
        scene.basic.color = color;
    }
    if picked_mode != current_mode {
        info!("material mode: {} -> {}", current_mode.label(), picked_mode.label());
        scene.next_mode.set(picked_mode);
    }
    if let Some(mut state) = cubes.iter_mut().next() {
        for edit in edits {
            if state.bypass_change_detection().apply(edit) {
                state.set_changed();
                debug!("face edit {edit:?}");
            }
        }
    }
    Ok(())
}

/// Frame-time overlay in the bottom-left corner.
pub fn draw_stats_overlay(mut contexts: EguiContexts, diagnostics: Res<DiagnosticsStore>) -> Result {
    let ctx = contexts.ctx_mut()?;
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|d| d.smoothed());
    let frame_time = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FRAME_TIME)
        .and_then(|d| d.smoothed());

    egui::Area::new(egui::Id::new("stats_overlay"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(8.0, -8.0))
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                match fps {
                    Some(fps) => ui.monospace(format!("{fps:>5.0} FPS")),
                    None => ui.monospace("  --- FPS"),
                };
                if let Some(ms) = frame_time {
                    ui.monospace(format!("{ms:>5.2} ms"));
                }
            });
        });
    Ok(())
}
