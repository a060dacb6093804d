use bevy::prelude::*;

use crate::plugins::{session_active, GameSet, RestartEvent};
use crate::resources::{FlightPhase, ObstacleConfig};
use crate::systems::{
    collision_detection_system, despawn_passed_obstacles, refresh_collision_volumes,
    replenish_obstacles, spawn_initial_obstacles, spin_obstacles_system, ObstacleSpawner,
};

/// Owns the obstacle field: an initial batch on entering flight, then a
/// steady-state spin/volume/collision/despawn/replenish pass every airborne
/// frame.
pub struct ObstaclePlugin {
    config: ObstacleConfig,
}

impl ObstaclePlugin {
    pub fn new(config: ObstacleConfig) -> Self {
        Self { config }
    }
}

impl Plugin for ObstaclePlugin {
    fn build(&self, app: &mut App) {
        let seed = self.config.seed.unwrap_or_else(rand::random);

        app.insert_resource(self.config.clone())
            .insert_resource(ObstacleSpawner::from_seed(seed))
            .add_systems(OnEnter(FlightPhase::Flight), spawn_initial_obstacles)
            .add_systems(
                Update,
                (
                    spin_obstacles_system,
                    refresh_collision_volumes,
                    collision_detection_system,
                    despawn_passed_obstacles,
                    replenish_obstacles,
                )
                    .chain()
                    .in_set(GameSet::Obstacles)
                    .run_if(in_state(FlightPhase::Flight))
                    .run_if(session_active)
                    .run_if(not(on_event::<RestartEvent>)),
            );
    }
}
