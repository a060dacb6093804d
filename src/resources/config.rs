use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::VehicleConfig;
use crate::resources::errors::{ConfigError, Result};

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Fixed timestep used in stepped mode [s]
    pub time_step: f64,
    /// Ceiling applied to the wall-clock delta, guards against tab-stalls [s]
    pub max_frame_time: f64,
    /// Downward acceleration during the takeoff roll [m/s^2]
    pub gravity: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            time_step: 1.0 / 60.0,
            max_frame_time: 0.1,
            gravity: 9.81,
        }
    }
}

/// Placement and lifecycle parameters for the obstacle field.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleConfig {
    /// The working set is kept at least this large while airborne
    pub min_active: usize,
    /// Lateral offset range for new obstacles [m]
    pub lateral_range: (f64, f64),
    /// Altitude range for new obstacles [m]
    pub altitude_range: (f64, f64),
    /// Spacing between consecutive obstacles of the initial batch [m]
    pub initial_gap: (f64, f64),
    /// Longitudinal lead of replenished obstacles over the airplane [m]
    pub replenish_gap: (f64, f64),
    /// Obstacles this far behind the airplane are recycled [m]
    pub despawn_behind: f64,
    /// Seed for the placement RNG; random when absent
    pub seed: Option<u64>,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            min_active: 5,
            lateral_range: (-30.0, 30.0),
            altitude_range: (10.0, 30.0),
            initial_gap: (100.0, 200.0),
            replenish_gap: (200.0, 250.0),
            despawn_behind: 50.0,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    pub fov: f32,
    pub taxi_offset: Vector3<f64>,
    pub flight_offset: Vector3<f64>,
    pub look_ahead: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 60.0,
            taxi_offset: Vector3::new(0.0, 6.0, 14.0),
            flight_offset: Vector3::new(0.0, 4.0, 12.0),
            look_ahead: 30.0,
        }
    }
}

/// Tunables for the decorative surroundings. Nothing in here affects the
/// simulation outcome.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Sky hue cycle rate [rad/s]
    pub sky_cycle_rate: f64,
    /// Cloud band drift rate [m/s]
    pub cloud_drift_rate: f64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            sky_cycle_rate: 0.02,
            cloud_drift_rate: 1.5,
        }
    }
}

/// Aggregate of every tunable the game reads, loadable from YAML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameConfig {
    pub physics: PhysicsConfig,
    pub vehicle: VehicleConfig,
    pub obstacles: ObstacleConfig,
    pub camera: CameraConfig,
    pub environment: EnvironmentConfig,
}

impl GameConfig {
    pub fn load(path: &str) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.physics.time_step <= 0.0 {
            return Err(ConfigError::Validation(
                "physics.time_step must be positive".into(),
            ));
        }
        if self.physics.max_frame_time < self.physics.time_step {
            return Err(ConfigError::Validation(
                "physics.max_frame_time must cover at least one time step".into(),
            ));
        }
        if self.vehicle.takeoff_speed <= 0.0 {
            return Err(ConfigError::Validation(
                "vehicle.takeoff_speed must be positive".into(),
            ));
        }
        if self.obstacles.min_active == 0 {
            return Err(ConfigError::Validation(
                "obstacles.min_active must be at least 1".into(),
            ));
        }
        for (name, (lo, hi)) in [
            ("obstacles.lateral_range", self.obstacles.lateral_range),
            ("obstacles.altitude_range", self.obstacles.altitude_range),
            ("obstacles.initial_gap", self.obstacles.initial_gap),
            ("obstacles.replenish_gap", self.obstacles.replenish_gap),
        ] {
            if lo >= hi {
                return Err(ConfigError::Validation(format!(
                    "{} must be an increasing range",
                    name
                )));
            }
        }
        Ok(())
    }
}
