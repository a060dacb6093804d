use bevy::prelude::*;

use crate::components::{runway_forward, ControlIntent, PlayerController, VehicleConfig, VehicleState};
use crate::resources::SimTime;

/// Free-flight control law.
///
/// Pitch and roll chase the held intents at fixed rates; velocity has no
/// inertia and is rebuilt from the attitude every tick.
pub fn flight_system(
    mut query: Query<(&mut VehicleState, &VehicleConfig, &ControlIntent), With<PlayerController>>,
    time: Res<SimTime>,
) {
    let Ok((mut state, config, intent)) = query.get_single_mut() else {
        return;
    };

    update_flight(&mut state, config, intent, time.delta);
}

fn update_flight(state: &mut VehicleState, config: &VehicleConfig, intent: &ControlIntent, dt: f64) {
    let pitch_demand = intent.pitch_axis();
    state.pitch = if pitch_demand != 0.0 {
        state.pitch + pitch_demand * config.pitch_rate * dt
    } else {
        decay_toward_zero(state.pitch, config.pitch_rate * dt)
    }
    .clamp(-config.max_pitch, config.max_pitch);

    let roll_demand = intent.roll_axis();
    state.roll = if roll_demand != 0.0 {
        state.roll + roll_demand * config.roll_rate * dt
    } else {
        decay_toward_zero(state.roll, config.roll_rate * dt)
    }
    .clamp(-config.max_roll, config.max_roll);

    // Turn with bank: full deflection yaws at half the roll rate.
    state.yaw += (state.roll / config.max_roll) * (config.roll_rate * 0.5) * dt;

    state.refresh_attitude();

    // No inertia in the air: velocity snaps to nose direction times the
    // commanded speed every tick.
    let target_speed = if intent.boost {
        config.boost_speed
    } else {
        config.cruise_speed
    };
    let direction = state.spatial.attitude * runway_forward();
    state.spatial.velocity = direction * target_speed;
    let step = state.spatial.velocity * dt;
    state.spatial.position += step;

    // Cosmetic bank chases an overshot target so turns read on screen. The
    // physical roll state above never sees this value.
    let bank_target = state.roll * config.bank_overshoot;
    let blend = 1.0 - (-config.bank_smoothing * dt).exp();
    state.display_bank += (bank_target - state.display_bank) * blend;
}

fn decay_toward_zero(value: f64, step: f64) -> f64 {
    if value.abs() <= step {
        0.0
    } else {
        value - value.signum() * step
    }
}
