use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{
    runway_forward, ControlIntent, PlayerController, RunwayComponent, VehicleConfig, VehicleState,
};
use crate::resources::{FlightPhase, GameSession, PhysicsConfig, SimTime};

/// Ground-roll and takeoff control law.
///
/// The throttle integrates speed along the runway axis, pitch authority is
/// gated on airspeed, and lift fights gravity once the airplane is rolling.
pub fn taxi_takeoff_system(
    mut query: Query<(&mut VehicleState, &VehicleConfig, &ControlIntent), With<PlayerController>>,
    runway_query: Query<&RunwayComponent>,
    physics: Res<PhysicsConfig>,
    time: Res<SimTime>,
) {
    let Ok((mut state, config, intent)) = query.get_single_mut() else {
        return;
    };
    let Ok(runway) = runway_query.get_single() else {
        return;
    };

    update_taxi(&mut state, config, intent, &physics, runway, time.delta);
}

/// Updates one airplane through a single takeoff-roll step.
///
/// # Arguments
/// * `state` - The mutable state of the airplane to update.
/// * `config` - The airplane's control-law tunables.
/// * `intent` - The latched controls for this tick.
/// * `dt` - The time step (in seconds) over which to apply the update.
fn update_taxi(
    state: &mut VehicleState,
    config: &VehicleConfig,
    intent: &ControlIntent,
    physics: &PhysicsConfig,
    runway: &RunwayComponent,
    dt: f64,
) {
    let accel = if intent.boost {
        config.taxi_acceleration
    } else {
        -config.taxi_drag
    };

    // The airplane never rolls backward off the threshold.
    let forward_speed = (state.forward_speed() + accel * dt).max(0.0);

    // Rotation is only honored once the wings have some authority.
    if intent.pitch_up && forward_speed > 0.5 * config.takeoff_speed {
        state.pitch = (state.pitch + config.pitch_rate * dt).min(config.max_pitch);
    } else if state.pitch > 0.0 {
        state.pitch = (state.pitch - config.pitch_rate * dt).max(0.0);
    }

    let resting = runway.surface_height + config.resting_height;
    let mut vertical_speed = state.spatial.velocity.y;

    if forward_speed > config.rest_speed_epsilon {
        let lift = (forward_speed / config.takeoff_speed) * state.pitch.sin() * config.lift_gain;
        vertical_speed += (lift - physics.gravity) * dt;
    } else {
        // Parked or nearly so: kill any vertical drift.
        vertical_speed = 0.0;
        state.spatial.position.y = resting;
    }

    state.spatial.velocity = runway_forward() * forward_speed + Vector3::y() * vertical_speed;
    let step = state.spatial.velocity * dt;
    state.spatial.position += step;

    // Never sink through the runway while descending.
    if state.spatial.position.y < resting && state.spatial.velocity.y < 0.0 {
        state.spatial.position.y = resting;
        state.spatial.velocity.y = 0.0;
    }

    state.yaw = runway.heading;
    state.roll = 0.0;
    state.display_bank = 0.0;
    state.refresh_attitude();
}

/// Promotes Taxi to Flight once the takeoff gate is cleared: the airplane
/// must be both far enough down the runway and high enough, at the same
/// time. Speed alone never triggers the transition.
pub fn takeoff_gate_system(
    query: Query<(&VehicleState, &VehicleConfig), With<PlayerController>>,
    session: Res<GameSession>,
    mut next_phase: ResMut<NextState<FlightPhase>>,
) {
    let Ok((state, config)) = query.get_single() else {
        return;
    };

    let distance = state.forward_distance(&session.origin);
    let altitude = state.spatial.altitude();

    if distance > config.takeoff_gate_distance && altitude > config.takeoff_gate_altitude {
        info!(
            "airborne: {:.1}m down the runway at {:.1}m altitude",
            distance, altitude
        );
        next_phase.set(FlightPhase::Flight);
    }
}
