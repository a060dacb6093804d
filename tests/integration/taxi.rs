use nalgebra::Vector3;

use skydash::components::runway_forward;
use skydash::resources::FlightPhase;

use crate::common::{assert_angles_within_limits, assert_vehicle_state_valid, TestAppBuilder};

#[test]
fn test_never_sinks_below_runway_during_taxi() {
    let mut app = TestAppBuilder::new().build();
    let resting = app.vehicle_state().spatial.position.y;

    app.edit_intent(|intent| intent.boost = true);

    // Full throttle with no rotation: the airplane must stay planted for
    // the whole roll.
    for _ in 0..600 {
        app.run_frame();
        let state = app.vehicle_state();
        assert_vehicle_state_valid(&state);
        assert!(
            state.spatial.position.y >= resting - 1e-9,
            "airplane sank below the runway at y={}",
            state.spatial.position.y
        );
    }
    assert_eq!(app.phase(), FlightPhase::Taxi);
}

#[test]
fn test_throttle_roll_and_release() {
    let mut app = TestAppBuilder::new().build();
    app.edit_intent(|intent| intent.boost = true);

    // Hold the throttle for three simulated seconds.
    app.run_steps(180);

    let state = app.vehicle_state();
    assert!(state.forward_speed() > 0.0);
    assert!(
        state.spatial.position.z < 0.0,
        "airplane did not move down the runway"
    );
    let speed_at_release = state.forward_speed();
    let z_at_release = state.spatial.position.z;

    // Releasing the throttle decelerates but never claws back displacement.
    app.edit_intent(|intent| intent.boost = false);
    let mut previous_z = z_at_release;
    for _ in 0..240 {
        app.run_frame();
        let state = app.vehicle_state();
        assert!(
            state.spatial.position.z <= previous_z + 1e-9,
            "forward displacement reversed"
        );
        assert!(state.forward_speed() >= 0.0);
        previous_z = state.spatial.position.z;
    }

    let state = app.vehicle_state();
    assert!(state.forward_speed() < speed_at_release);
    assert!(state.spatial.position.z <= z_at_release);
}

#[test]
fn test_stationary_without_throttle() {
    let mut app = TestAppBuilder::new().build();

    app.run_steps(120);

    let state = app.vehicle_state();
    assert_eq!(state.forward_speed(), 0.0);
    assert_eq!(state.spatial.position.z, 0.0);
}

#[test]
fn test_rotation_gated_on_airspeed() {
    let mut app = TestAppBuilder::new().build();
    app.edit_intent(|intent| {
        intent.boost = true;
        intent.pitch_up = true;
    });

    // Under half takeoff speed the elevator has no authority.
    app.run_steps(100);
    let state = app.vehicle_state();
    assert!(state.forward_speed() < 15.0);
    assert_eq!(state.pitch, 0.0);

    // Past the gate the nose comes up.
    app.run_steps(100);
    let state = app.vehicle_state();
    assert!(state.forward_speed() > 15.0);
    assert!(state.pitch > 0.0);
}

#[test]
fn test_takeoff_gate_requires_both_conditions() {
    let mut app = TestAppBuilder::new().build();

    // High enough but not far enough: must stay in Taxi.
    app.edit_vehicle_state(|state| {
        state.spatial.position = Vector3::new(0.0, 6.0, -40.0);
        state.spatial.velocity = runway_forward() * 20.0;
    });
    app.run_steps(2);
    assert_eq!(app.phase(), FlightPhase::Taxi);
}

#[test]
fn test_takeoff_gate_transitions_when_both_hold() {
    let mut app = TestAppBuilder::new().build();

    app.edit_vehicle_state(|state| {
        state.spatial.position = Vector3::new(0.0, 10.0, -60.0);
        state.spatial.velocity = runway_forward() * 20.0;
    });
    app.run_steps(2);
    assert_eq!(app.phase(), FlightPhase::Flight);
}

#[test]
fn test_full_takeoff_run() {
    let mut app = TestAppBuilder::new().build();
    app.edit_intent(|intent| {
        intent.boost = true;
        intent.pitch_up = true;
    });

    // Ten simulated seconds of full throttle with the stick held back is
    // plenty to rotate and climb through the gate.
    app.run_steps(600);

    assert_eq!(app.phase(), FlightPhase::Flight);
    let state = app.vehicle_state();
    let config = skydash::components::VehicleConfig::default();
    assert_angles_within_limits(&state, &config);
    assert!(state.spatial.altitude() > config.takeoff_gate_altitude);
}

#[test]
fn test_taxi_camera_hangs_behind() {
    let mut app = TestAppBuilder::new().build();
    app.edit_intent(|intent| intent.boost = true);
    app.run_steps(60);

    let state = app.vehicle_state();
    let camera = app.camera();
    let expected = state.spatial.position + camera.taxi_offset;
    assert_eq!(camera.position, expected);
    assert_eq!(camera.target, state.spatial.position);
}
