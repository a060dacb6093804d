use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::SpatialComponent;

/// Unit vector pointing down the runway in the direction of travel.
///
/// The whole simulation treats "forward" as this constant: distance, the
/// backward-velocity clamp and obstacle placement all project onto it, so a
/// change of world convention only touches this one definition.
pub fn runway_forward() -> Vector3<f64> {
    Vector3::new(0.0, 0.0, -1.0)
}

/// State of the player airplane.
///
/// `pitch`/`roll`/`yaw` are the physical Euler state (radians, world Y-up,
/// positive pitch = nose up, positive roll = bank left). `display_bank` is a
/// smoothed copy of the bank used only for drawing and never feeds back into
/// the physics.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct VehicleState {
    pub spatial: SpatialComponent,
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
    pub display_bank: f64,
}

impl VehicleState {
    /// Airplane at rest on the runway threshold.
    pub fn at_runway_start(config: &VehicleConfig) -> Self {
        Self {
            spatial: SpatialComponent::at_position(Vector3::new(0.0, config.resting_height, 0.0)),
            pitch: 0.0,
            roll: 0.0,
            yaw: 0.0,
            display_bank: 0.0,
        }
    }

    /// Rebuild the attitude quaternion from the current Euler state.
    pub fn refresh_attitude(&mut self) {
        self.spatial.attitude = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), self.yaw)
            * UnitQuaternion::from_axis_angle(&Vector3::x_axis(), self.pitch)
            * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), self.roll);
    }

    /// Velocity component along the runway direction of travel [m/s].
    pub fn forward_speed(&self) -> f64 {
        self.spatial.velocity.dot(&runway_forward())
    }

    /// Signed distance travelled down the runway from `origin` [m].
    pub fn forward_distance(&self, origin: &Vector3<f64>) -> f64 {
        (self.spatial.position - origin).dot(&runway_forward())
    }
}

/// Tunables for both control laws of the airplane.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct VehicleConfig {
    /// Ground acceleration while the throttle is held [m/s^2]
    pub taxi_acceleration: f64,
    /// Rolling drag deceleration with the throttle released [m/s^2]
    pub taxi_drag: f64,
    /// Speed at which the wings carry the airplane [m/s]
    pub takeoff_speed: f64,
    /// Pitch command rate [rad/s]
    pub pitch_rate: f64,
    /// Roll command rate [rad/s]
    pub roll_rate: f64,
    /// Pitch magnitude limit [rad]
    pub max_pitch: f64,
    /// Roll magnitude limit [rad]
    pub max_roll: f64,
    /// Vertical acceleration per unit of lift demand [m/s^2]
    pub lift_gain: f64,
    /// Airborne speed with the throttle released [m/s]
    pub cruise_speed: f64,
    /// Airborne speed with the throttle held [m/s]
    pub boost_speed: f64,
    /// Radius of the coarse collision sphere around the airplane [m]
    pub collision_radius: f64,
    /// Height of the airframe reference point when parked [m]
    pub resting_height: f64,
    /// Below this ground speed the airplane counts as stationary [m/s]
    pub rest_speed_epsilon: f64,
    /// Longitudinal distance required before rotation counts as takeoff [m]
    pub takeoff_gate_distance: f64,
    /// Altitude required before rotation counts as takeoff [m]
    pub takeoff_gate_altitude: f64,
    /// Overshoot factor applied to the visual bank target
    pub bank_overshoot: f64,
    /// Exponential rate at which the visual bank chases its target [1/s]
    pub bank_smoothing: f64,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            taxi_acceleration: 6.0,
            taxi_drag: 4.0,
            takeoff_speed: 30.0,
            pitch_rate: std::f64::consts::FRAC_PI_4,
            roll_rate: std::f64::consts::FRAC_PI_4,
            max_pitch: std::f64::consts::FRAC_PI_4,
            max_roll: std::f64::consts::FRAC_PI_4,
            lift_gain: 25.0,
            cruise_speed: 40.0,
            boost_speed: 80.0,
            collision_radius: 1.5,
            resting_height: 1.2,
            rest_speed_epsilon: 0.5,
            takeoff_gate_distance: 50.0,
            takeoff_gate_altitude: 5.0,
            bank_overshoot: 1.25,
            bank_smoothing: 5.0,
        }
    }
}
