use bevy::prelude::*;

use crate::components::{ControlIntent, Obstacle, PlayerController, VehicleConfig, VehicleState};
use crate::plugins::RestartEvent;
use crate::resources::{EnvironmentModel, FlightPhase, GameSession, SimTime};
use crate::systems::ObstacleSpawner;

/// Handles a restart request: clears the obstacle field, puts the airplane
/// back on the threshold and rewinds session state to its initial values,
/// then re-enters Taxi. Everything is reset in place; no entity except the
/// obstacles is recreated.
pub fn restart_system(
    mut restarts: EventReader<RestartEvent>,
    mut commands: Commands,
    mut vehicle_query: Query<
        (&mut VehicleState, &mut ControlIntent, &VehicleConfig),
        With<PlayerController>,
    >,
    obstacle_query: Query<Entity, With<Obstacle>>,
    mut session: ResMut<GameSession>,
    mut time: ResMut<SimTime>,
    spawner: Option<ResMut<ObstacleSpawner>>,
    environment: Option<ResMut<EnvironmentModel>>,
    phase: Res<State<FlightPhase>>,
    mut next_phase: ResMut<NextState<FlightPhase>>,
) {
    if restarts.is_empty() {
        return;
    }
    restarts.clear();

    for entity in obstacle_query.iter() {
        commands.entity(entity).despawn();
    }

    if let Ok((mut state, mut intent, config)) = vehicle_query.get_single_mut() {
        *state = VehicleState::at_runway_start(config);
        intent.clear();
    }

    session.reset();
    time.reset();
    if let Some(mut spawner) = spawner {
        spawner.reseed();
    }
    if let Some(mut environment) = environment {
        environment.reset();
    }

    if *phase.get() != FlightPhase::Taxi {
        next_phase.set(FlightPhase::Taxi);
    }

    info!("session restarted");
}
