#![warn(missing_docs)]
//! Rotating material cube with per-face presets and a live tweak panel.
//!
//! A cube whose six faces each carry a selectable material preset, lit above a
//! glossy floor. Faces are picked with the pointer; an egui side panel exposes
//! one highlighted dropdown per face, synced with the current selection.

pub mod cube;
pub mod math;
pub mod panel;
pub mod presets;
pub mod select;
pub mod stage;

use bevy::prelude::*;

pub use presets::MaterialPreset;

/// Application-wide debug state, used for system scheduling.
#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash, Reflect)]
pub enum AppState {
    /// Normal interaction with the scene.
    #[default]
    Running,
    /// World inspector visible (Tab to toggle).
    Inspecting,
}

/// How the cube is shaded.
#[derive(States, Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
#[cfg_attr(feature = "native", derive(clap::ValueEnum))]
pub enum MaterialMode {
    /// Per-face presets with textures; faces can be selected and edited.
    #[default]
    Pbr,
    /// A single flat color for the whole cube.
    Basic,
}

impl MaterialMode {
    /// Label shown in the tweak panel.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pbr => "PBR",
            Self::Basic => "Basic",
        }
    }
}

/// Startup overrides, filled from the command line on native builds.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct AppConfig {
    /// Initial [`MaterialMode`].
    pub mode: MaterialMode,
    /// Preset every face starts with.
    pub default_preset: MaterialPreset,
    /// Arrow-key rotation speed (radians per second).
    pub rotation_speed: f32,
    /// Whether the frame-time overlay starts enabled.
    pub show_stats: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: MaterialMode::Pbr,
            default_preset: MaterialPreset::Brick,
            rotation_speed: 3.0,
            show_stats: true,
        }
    }
}
