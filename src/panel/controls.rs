use crate::MaterialMode;
use crate::cube::{FaceIndex, FaceMaterialState};
use crate::presets::MaterialPreset;
use crate::select::{HighlightedSelectInput, HighlightedSelectSettings, OptionSource, normalize};

/// Everything the panel needs to draw one face's dropdown.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceControl {
    /// Face the control edits.
    pub face: FaceIndex,
    /// Row label.
    pub label: &'static str,
    /// Preset shown in the dropdown.
    pub value: MaterialPreset,
    /// Whether the row is drawn at all.
    pub render: bool,
    /// Whether the row ignores input.
    pub disabled: bool,
    /// Normalized dropdown options and highlight flag.
    pub settings: HighlightedSelectSettings<MaterialPreset>,
}

fn preset_options() -> OptionSource<MaterialPreset> {
    OptionSource::Keyed(
        MaterialPreset::ALL
            .iter()
            .map(|p| (p.label().to_owned(), *p))
            .collect(),
    )
}

/// Derives one control per face. Rebuilt every frame from the current state.
pub fn face_controls(state: &FaceMaterialState, mode: MaterialMode) -> Vec<FaceControl> {
    let pbr = mode == MaterialMode::Pbr;
    FaceIndex::ALL
        .into_iter()
        .map(|face| {
            let current = state.preset(face);
            let normalized = normalize(HighlightedSelectInput {
                selected: Some(current),
                options: preset_options(),
                highlight: pbr && state.selected() == Some(face),
            });
            FaceControl {
                face,
                label: face.label(),
                value: normalized.value.unwrap_or(current),
                render: pbr,
                disabled: !pbr,
                settings: normalized.settings,
            }
        })
        .collect()
}
