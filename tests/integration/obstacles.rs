use nalgebra::Vector3;

use skydash::resources::FlightPhase;

use crate::common::TestAppBuilder;

#[test]
fn test_initial_batch_spawns_ahead() {
    let mut app = TestAppBuilder::new().build();
    app.make_airborne();

    assert_eq!(app.obstacle_count(), 5);

    let vehicle_z = app.vehicle_state().spatial.position.z;
    for position in app.obstacle_positions() {
        assert!(
            position.z < vehicle_z,
            "obstacle at z={} spawned behind the airplane",
            position.z
        );
        assert!((-30.0..=30.0).contains(&position.x));
        assert!((10.0..=30.0).contains(&position.y));
    }
}

#[test]
fn test_working_set_never_drops_below_floor() {
    let mut app = TestAppBuilder::new().build();
    app.make_airborne();

    // Cruise straight for ten seconds; recycling must keep pace.
    for _ in 0..600 {
        app.run_frame();
        assert!(
            app.obstacle_count() >= 5,
            "obstacle floor broken at frame {}",
            app.sim_time().frame
        );

        let vehicle_z = app.vehicle_state().spatial.position.z;
        for position in app.obstacle_positions() {
            assert!(
                position.z <= vehicle_z + 50.0 + 1e-9,
                "obstacle left behind at z={} with airplane at z={}",
                position.z,
                vehicle_z
            );
        }
    }
}

#[test]
fn test_passed_obstacle_is_recycled() {
    let mut app = TestAppBuilder::new().build();
    app.make_airborne();

    let vehicle_z = app.vehicle_state().spatial.position.z;
    app.place_first_obstacle(Vector3::new(0.0, 20.0, vehicle_z + 60.0));

    app.run_steps(2);

    let vehicle_z = app.vehicle_state().spatial.position.z;
    for position in app.obstacle_positions() {
        assert!(position.z <= vehicle_z + 50.0 + 1e-9);
    }
    assert_eq!(app.obstacle_count(), 5, "replenishment did not keep pace");
}

#[test]
fn test_collision_is_fatal_within_the_frame() {
    let mut app = TestAppBuilder::new().build();
    app.make_airborne();
    assert!(!app.session().game_over);

    // Park an obstacle directly on the airplane.
    let vehicle_position = app.vehicle_state().spatial.position;
    app.place_first_obstacle(vehicle_position);

    app.run_frame();
    assert!(app.session().game_over, "collision did not end the game");
    assert_eq!(app.phase(), FlightPhase::Flight);
}

#[test]
fn test_game_over_freezes_the_world() {
    let mut app = TestAppBuilder::new().build();
    app.make_airborne();

    let vehicle_position = app.vehicle_state().spatial.position;
    app.place_first_obstacle(vehicle_position);
    app.run_frame();
    assert!(app.session().game_over);

    let frozen = app.vehicle_state();
    let score = app.session().score;
    app.run_steps(30);

    // The latch holds and nothing moves until an explicit restart.
    assert!(app.session().game_over);
    assert_eq!(app.session().score, score);
    let state = app.vehicle_state();
    assert_eq!(state.spatial.position, frozen.spatial.position);
    assert_eq!(state.spatial.velocity, frozen.spatial.velocity);
}

#[test]
fn test_restart_clears_the_field() {
    let mut app = TestAppBuilder::new().build();
    app.make_airborne();

    let vehicle_position = app.vehicle_state().spatial.position;
    app.place_first_obstacle(vehicle_position);
    app.run_frame();
    assert!(app.session().game_over);

    app.send_restart();
    app.run_frame();

    assert_eq!(app.obstacle_count(), 0);
    assert!(!app.session().game_over);

    app.run_frame();
    assert_eq!(app.phase(), FlightPhase::Taxi);
}
