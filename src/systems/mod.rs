mod camera;
mod environment;
mod flight;
mod input;
mod obstacles;
pub mod render;
mod reset;
mod scoring;
mod taxi;

pub use camera::camera_follow_system;
pub use environment::environment_system;
pub use flight::flight_system;
pub use input::{keyboard_intent_system, restart_key_system};
pub use obstacles::{
    collision_detection_system, despawn_passed_obstacles, refresh_collision_volumes,
    replenish_obstacles, spawn_initial_obstacles, spin_obstacles_system, ObstacleSpawner,
};
pub use reset::restart_system;
pub use scoring::{game_over_system, hud_snapshot_system, scoring_system};
pub use taxi::{takeoff_gate_system, taxi_takeoff_system};
