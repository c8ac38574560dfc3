use bevy::app::AppExit;
use bevy::prelude::*;
use bevy_inspector_egui::quick::WorldInspectorPlugin;

use material_cube::cube::{CubeConfig, CubePlugin};
use material_cube::panel::{PanelConfig, PanelPlugin};
use material_cube::presets::{PresetsConfig, PresetsPlugin};
use material_cube::stage::{StageConfig, StagePlugin};
use material_cube::{AppConfig, AppState, MaterialMode};

#[cfg(feature = "native")]
mod cli {
    use clap::Parser;

    use material_cube::{AppConfig, MaterialMode, MaterialPreset};

    /// Rotating material cube with per-face presets.
    #[derive(Parser, Debug)]
    #[command(version, about)]
    pub struct Cli {
        /// Initial shading mode.
        #[arg(long, value_enum, default_value_t = MaterialMode::Pbr)]
        pub mode: MaterialMode,
        /// Preset every face starts with.
        #[arg(long, value_enum, default_value_t = MaterialPreset::Brick)]
        pub default_preset: MaterialPreset,
        /// Arrow-key rotation speed in radians per second.
        #[arg(long, default_value_t = 3.0)]
        pub rotation_speed: f32,
        /// Start with the frame-time overlay hidden.
        #[arg(long)]
        pub hide_stats: bool,
    }

    impl From<Cli> for AppConfig {
        fn from(cli: Cli) -> Self {
            Self {
                mode: cli.mode,
                default_preset: cli.default_preset,
                rotation_speed: cli.rotation_speed,
                show_stats: !cli.hide_stats,
            }
        }
    }

    pub fn parse() -> AppConfig {
        Cli::parse().into()
    }
}

fn app_config() -> AppConfig {
    #[cfg(feature = "native")]
    {
        cli::parse()
    }
    #[cfg(not(feature = "native"))]
    {
        AppConfig::default()
    }
}

fn main() {
    let config = app_config();
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Material Cube".into(),
            ..default()
        }),
        ..default()
    }))
    .register_type::<AppState>()
    .register_type::<MaterialMode>()
    .register_type::<AppConfig>()
    .insert_resource(config.clone())
    .init_state::<AppState>()
    .insert_state(config.mode);

    #[cfg(feature = "native")]
    app.add_plugins(bevy::remote::RemotePlugin::default())
        .add_plugins(bevy::remote::http::RemoteHttpPlugin::default());

    app.add_plugins(bevy_egui::EguiPlugin::default())
        .add_plugins(PresetsPlugin(PresetsConfig::default()))
        .add_plugins(CubePlugin(CubeConfig {
            default_preset: config.default_preset,
            rotation_speed: config.rotation_speed,
            ..default()
        }))
        .add_plugins(StagePlugin(StageConfig::default()))
        .add_plugins(PanelPlugin(PanelConfig {
            show_stats: config.show_stats,
            ..default()
        }))
        .add_systems(Update, (exit_on_esc, toggle_inspector))
        .add_plugins(WorldInspectorPlugin::new().run_if(in_state(AppState::Inspecting)));

    info!(
        "starting in {} mode, faces default to {}",
        config.mode.label(),
        config.default_preset
    );
    app.run();
}

fn toggle_inspector(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<AppState>>,
    mut next: ResMut<NextState<AppState>>,
) {
    if keys.just_pressed(KeyCode::Tab) {
        next.set(match state.get() {
            AppState::Running => AppState::Inspecting,
            AppState::Inspecting => AppState::Running,
        });
    }
}

fn exit_on_esc(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
