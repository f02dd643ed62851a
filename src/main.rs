use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

mod model;
mod state;
mod ui;

use state::AppState;
use ui::ui_system;

fn main() {
    env_logger::init();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "RunShot".into(),
                        resolution: (520., 940.).into(),
                        resizable: true,
                        ..default()
                    }),
                    ..default()
                })
                // env_logger is the global logger; LogPlugin would try to
                // install a second one
                .disable::<LogPlugin>(),
        )
        .add_plugins(EguiPlugin)
        .init_resource::<AppState>()
        .add_systems(Startup, setup)
        .add_systems(Update, ui_system)
        .run();
}

fn setup(mut commands: Commands, mut state: ResMut<AppState>) {
    commands.spawn(Camera2d);
    *state = AppState::new();
}
