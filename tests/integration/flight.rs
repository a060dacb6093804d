use approx::assert_relative_eq;

use skydash::components::{runway_forward, VehicleConfig};

use crate::common::{assert_angles_within_limits, assert_vehicle_state_valid, TestAppBuilder};

#[test]
fn test_velocity_snaps_to_cruise() {
    let mut app = TestAppBuilder::new().build();
    app.make_airborne();

    app.run_frame();
    let state = app.vehicle_state();
    let config = VehicleConfig::default();
    assert_relative_eq!(state.spatial.speed(), config.cruise_speed, epsilon = 1e-9);
}

#[test]
fn test_boost_speed() {
    let mut app = TestAppBuilder::new().build();
    app.make_airborne();

    app.edit_intent(|intent| intent.boost = true);
    app.run_frame();
    let state = app.vehicle_state();
    let config = VehicleConfig::default();
    assert_relative_eq!(state.spatial.speed(), config.boost_speed, epsilon = 1e-9);

    // Releasing the throttle drops straight back to cruise; there is no
    // inertia in the air.
    app.edit_intent(|intent| intent.boost = false);
    app.run_frame();
    let state = app.vehicle_state();
    assert_relative_eq!(state.spatial.speed(), config.cruise_speed, epsilon = 1e-9);
}

#[test]
fn test_pitch_and_roll_stay_clamped() {
    let mut app = TestAppBuilder::new().build();
    app.make_airborne();
    let config = VehicleConfig::default();

    app.edit_intent(|intent| {
        intent.pitch_up = true;
        intent.roll_left = true;
    });

    for _ in 0..300 {
        app.run_frame();
        let state = app.vehicle_state();
        assert_vehicle_state_valid(&state);
        assert_angles_within_limits(&state, &config);
    }

    // Held long enough, both sit exactly on their limits.
    let state = app.vehicle_state();
    assert_relative_eq!(state.pitch, config.max_pitch, epsilon = 1e-9);
    assert_relative_eq!(state.roll, config.max_roll, epsilon = 1e-9);

    // And the other direction clamps symmetrically.
    app.edit_intent(|intent| {
        intent.pitch_up = false;
        intent.pitch_down = true;
        intent.roll_left = false;
        intent.roll_right = true;
    });
    for _ in 0..300 {
        app.run_frame();
        assert_angles_within_limits(&app.vehicle_state(), &config);
    }
    let state = app.vehicle_state();
    assert_relative_eq!(state.pitch, -config.max_pitch, epsilon = 1e-9);
    assert_relative_eq!(state.roll, -config.max_roll, epsilon = 1e-9);
}

#[test]
fn test_pitch_up_climbs() {
    let mut app = TestAppBuilder::new().build();
    app.make_airborne();

    let initial_altitude = app.vehicle_state().spatial.altitude();
    app.edit_intent(|intent| intent.pitch_up = true);
    app.run_steps(120);

    let state = app.vehicle_state();
    assert!(state.spatial.altitude() > initial_altitude);
    assert!(state.spatial.velocity.y > 0.0);
}

#[test]
fn test_bank_turns_the_airplane() {
    let mut app = TestAppBuilder::new().build();
    app.make_airborne();

    app.edit_intent(|intent| intent.roll_left = true);
    app.run_steps(240);

    let state = app.vehicle_state();
    // Banking left yaws left and bends the track off the centerline.
    assert!(state.roll > 0.0);
    assert!(state.yaw > 0.0);
    assert!(state.spatial.position.x < 0.0);
}

#[test]
fn test_attitude_decays_to_level() {
    let mut app = TestAppBuilder::new().build();
    app.make_airborne();

    app.edit_intent(|intent| {
        intent.pitch_up = true;
        intent.roll_left = true;
    });
    app.run_steps(120);
    assert!(app.vehicle_state().pitch > 0.0);
    assert!(app.vehicle_state().roll > 0.0);

    // Hands off: everything relaxes back to level.
    app.edit_intent(|intent| intent.clear());
    app.run_steps(300);

    let state = app.vehicle_state();
    assert_eq!(state.pitch, 0.0);
    assert_eq!(state.roll, 0.0);
    assert!(state.display_bank.abs() < 1e-3);
}

#[test]
fn test_display_bank_follows_roll() {
    let mut app = TestAppBuilder::new().build();
    app.make_airborne();

    app.edit_intent(|intent| intent.roll_right = true);
    app.run_steps(60);

    let state = app.vehicle_state();
    assert!(state.roll < 0.0);
    assert!(
        state.display_bank < 0.0,
        "visual bank should chase the physical roll"
    );
}

#[test]
fn test_chase_camera_in_flight() {
    let mut app = TestAppBuilder::new().build();
    app.make_airborne();

    // Straight and level: the rotated offsets reduce to plain translation.
    app.run_steps(5);
    let state = app.vehicle_state();
    let camera = app.camera();

    let expected_position = state.spatial.position + state.spatial.attitude * camera.flight_offset;
    let expected_target =
        state.spatial.position + state.spatial.attitude * (runway_forward() * camera.look_ahead);

    assert!((camera.position - expected_position).norm() < 1e-9);
    assert!((camera.target - expected_target).norm() < 1e-9);
}
