mod camera;
mod environment;
mod game;
mod obstacles;
mod vehicle;

use bevy::prelude::*;

pub use camera::CameraPlugin;
pub use environment::EnvironmentPlugin;
pub use game::{session_active, GamePlugin, GameSet, RestartEvent};
pub use obstacles::ObstaclePlugin;
pub use vehicle::VehiclePlugin;

use crate::resources::{GameConfig, StepMode};

/// Registers the full game onto an app from one aggregate config.
pub fn add_game_plugins(app: &mut App, config: &GameConfig, mode: StepMode) {
    app.add_plugins((
        GamePlugin::with_config(config.physics.clone(), mode),
        VehiclePlugin::new(config.vehicle.clone()),
        ObstaclePlugin::new(config.obstacles.clone()),
        CameraPlugin::new(config.camera.clone()),
        EnvironmentPlugin::new(config.environment.clone()),
    ));
}
