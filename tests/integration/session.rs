use nalgebra::Vector3;
use pretty_assertions::assert_eq;

use skydash::components::VehicleConfig;
use skydash::resources::{EnvironmentModel, FlightPhase, GameSession};

use crate::common::{assert_position_eq, TestAppBuilder};

#[test]
fn test_score_is_monotone() {
    let mut app = TestAppBuilder::new().build();
    app.make_airborne();

    let mut last_score = app.session().score;
    for _ in 0..400 {
        app.run_frame();
        let session = app.session();
        assert!(
            session.score >= last_score,
            "score regressed from {} to {}",
            last_score,
            session.score
        );
        last_score = session.score;

        // On sampling frames the score agrees exactly with the distance
        // formula.
        if app.sim_time().frame % 60 == 0 {
            assert_eq!(session.score, (session.distance.abs() / 10.0) as u64);
        }
    }

    assert!(last_score > 0, "no points scored over four hundred frames");
}

#[test]
fn test_distance_latch_survives_turning_back() {
    let mut app = TestAppBuilder::new().build();
    app.make_airborne();
    app.run_steps(120);

    let peak = app.session().distance;
    assert!(peak > 0.0);

    // Roll hard into a turn; even flying back toward the runway the
    // recorded distance holds.
    app.edit_intent(|intent| intent.roll_left = true);
    app.run_steps(300);
    assert!(app.session().distance >= peak);
}

#[test]
fn test_restart_restores_initial_session() {
    let mut app = TestAppBuilder::new().build();
    app.make_airborne();
    app.run_steps(200);
    assert!(app.session().distance > 0.0);

    app.send_restart();
    app.run_steps(2);

    assert_eq!(app.phase(), FlightPhase::Taxi);
    assert_eq!(app.session(), GameSession::default());
    assert_eq!(app.obstacle_count(), 0);

    let config = VehicleConfig::default();
    let state = app.vehicle_state();
    assert_position_eq(
        &state.spatial.position,
        &Vector3::new(0.0, config.resting_height, 0.0),
        1e-12,
    );
    assert_eq!(state.spatial.velocity, Vector3::zeros());
    assert_eq!(state.pitch, 0.0);
    assert_eq!(state.roll, 0.0);
}

#[test]
fn test_restart_allows_a_fresh_takeoff() {
    let mut app = TestAppBuilder::new().build();
    app.make_airborne();
    app.run_steps(60);

    app.send_restart();
    app.run_steps(2);
    assert_eq!(app.phase(), FlightPhase::Taxi);

    // The reset world flies again.
    app.make_airborne();
    assert_eq!(app.phase(), FlightPhase::Flight);
    assert_eq!(app.obstacle_count(), 5);
}

#[test]
fn test_hud_snapshot_mirrors_the_session() {
    let mut app = TestAppBuilder::new().build();
    app.make_airborne();
    app.run_steps(90);

    let hud = app.hud();
    let session = app.session();
    let state = app.vehicle_state();

    assert_eq!(hud.phase, FlightPhase::Flight);
    assert_eq!(hud.score, session.score);
    assert_eq!(hud.game_over, session.game_over);
    assert!((hud.speed - state.spatial.speed()).abs() < 1e-9);
    assert!((hud.altitude - state.spatial.altitude()).abs() < 1e-9);
}

#[test]
fn test_stepped_clock_uses_fixed_delta() {
    let mut app = TestAppBuilder::new().build();
    app.run_steps(3);
    let time = app.sim_time();
    assert!((time.delta - app.time_step).abs() < 1e-12);
    assert!(time.frame >= 3);
}

#[test]
fn test_environment_tracks_the_airplane() {
    let mut app = TestAppBuilder::new().build();
    app.make_airborne();
    app.run_steps(30);

    let state = app.vehicle_state();
    let model = app.app.world().resource::<EnvironmentModel>().clone();

    assert_eq!(model.anchor.x, state.spatial.position.x);
    assert_eq!(model.anchor.z, state.spatial.position.z);
    assert_eq!(model.anchor.y, 0.0);
    assert!(model.sky_phase > 0.0);
}
