use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Chase camera pose, derived from the airplane every frame.
///
/// `position` and `target` are outputs: the follow system overwrites both
/// each tick as a pure function of the airplane pose and the current phase.
/// The offsets are fixed per phase; the flight offset is rotated by the
/// airplane attitude so the view stays chase-relative.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct CameraComponent {
    pub position: Vector3<f64>,
    pub target: Vector3<f64>,
    pub up: Vector3<f64>,
    pub fov: f32,
    /// World-axis offset used while rolling down the runway
    pub taxi_offset: Vector3<f64>,
    /// Body-axis offset used once airborne
    pub flight_offset: Vector3<f64>,
    /// Distance ahead of the nose the airborne camera aims at [m]
    pub look_ahead: f64,
}

impl Default for CameraComponent {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 7.0, 14.0),
            target: Vector3::zeros(),
            up: Vector3::y(),
            fov: 60.0,
            taxi_offset: Vector3::new(0.0, 6.0, 14.0),
            flight_offset: Vector3::new(0.0, 4.0, 12.0),
            look_ahead: 30.0,
        }
    }
}
