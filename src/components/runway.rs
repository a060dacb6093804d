use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct RunwayComponent {
    /// Center of the runway threshold (start) [m]
    pub position: Vector3<f64>,
    /// Heading of the centerline in radians, zero pointing down -z
    pub heading: f64,
    /// Width of the runway [m]
    pub width: f64,
    /// Length of the runway [m]
    pub length: f64,
    /// Height of the paved surface [m]
    pub surface_height: f64,
}

impl Default for RunwayComponent {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            heading: 0.0,
            width: 15.0,
            length: 300.0,
            surface_height: 0.0,
        }
    }
}
