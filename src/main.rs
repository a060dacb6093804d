use bevy::prelude::*;

use skydash::plugins::{add_game_plugins, GameSet};
use skydash::resources::{GameConfig, StepMode};
use skydash::systems::render;

fn main() {
    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("failed to load {}: {}", path, err);
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "skydash".into(),
            ..default()
        }),
        ..default()
    }));

    add_game_plugins(&mut app, &config, StepMode::RealTime);

    app.add_systems(Startup, render::setup_scene)
        .add_systems(
            Update,
            (
                render::decorate_runway,
                render::sync_vehicle_visuals,
                render::sync_obstacle_visuals,
                render::sync_camera,
                render::sync_sky,
            )
                .after(GameSet::Hud),
        )
        .run();
}
