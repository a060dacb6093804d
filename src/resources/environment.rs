use bevy::prelude::*;
use nalgebra::Vector3;

use crate::resources::EnvironmentConfig;

/// Decorative world state: sky hue phase, cloud band drift and the anchor
/// the ground/sky meshes are recentered on. Receives the frame delta and the
/// airplane position every tick and feeds nothing back into the simulation.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct EnvironmentModel {
    pub sky_phase: f64,
    pub cloud_offset: f64,
    pub anchor: Vector3<f64>,
}

impl Default for EnvironmentModel {
    fn default() -> Self {
        Self {
            sky_phase: 0.0,
            cloud_offset: 0.0,
            anchor: Vector3::zeros(),
        }
    }
}

impl EnvironmentModel {
    pub fn advance(
        &mut self,
        config: &EnvironmentConfig,
        dt: f64,
        vehicle_position: &Vector3<f64>,
    ) {
        self.sky_phase = (self.sky_phase + config.sky_cycle_rate * dt) % std::f64::consts::TAU;
        self.cloud_offset += config.cloud_drift_rate * dt;
        // Keep the scenery centered under the airplane.
        self.anchor = Vector3::new(vehicle_position.x, 0.0, vehicle_position.z);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
