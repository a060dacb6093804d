use bevy::prelude::*;

use crate::components::CameraComponent;
use crate::plugins::GameSet;
use crate::resources::CameraConfig;
use crate::systems::camera_follow_system;

/// Spawns the chase camera and keeps it glued to the airplane. The camera
/// entity only carries the derived pose; the presentation layer binds it to
/// an actual render camera.
pub struct CameraPlugin {
    config: CameraConfig,
}

impl CameraPlugin {
    pub fn new(config: CameraConfig) -> Self {
        Self { config }
    }

    fn spawn_chase_camera(mut commands: Commands, config: CameraConfig) {
        commands.spawn((
            CameraComponent {
                fov: config.fov,
                taxi_offset: config.taxi_offset,
                flight_offset: config.flight_offset,
                look_ahead: config.look_ahead,
                ..default()
            },
            Name::new("ChaseCamera"),
        ));
    }
}

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();

        app.add_systems(
            Startup,
            move |commands: Commands| Self::spawn_chase_camera(commands, config.clone()),
        )
        .add_systems(Update, camera_follow_system.in_set(GameSet::Camera));
    }
}
