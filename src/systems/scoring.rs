use bevy::prelude::*;

use crate::components::{CollisionEvent, PlayerController, VehicleState};
use crate::resources::{FlightPhase, GameSession, HudSnapshot, SimTime};

/// The score only needs to move at a human cadence, so the recompute is
/// sampled rather than run on every tick. The distance latch still runs
/// every frame.
const SCORE_UPDATE_INTERVAL: u64 = 60;

pub fn scoring_system(
    mut session: ResMut<GameSession>,
    time: Res<SimTime>,
    query: Query<&VehicleState, With<PlayerController>>,
) {
    let Ok(state) = query.get_single() else {
        return;
    };

    session.record_progress(&state.spatial.position);
    if time.frame % SCORE_UPDATE_INTERVAL == 0 {
        session.recompute_score();
    }
}

/// Latches game-over when anything collided this frame. The flag only ever
/// goes one way; a restart is the sole way back.
pub fn game_over_system(
    mut collisions: EventReader<CollisionEvent>,
    mut session: ResMut<GameSession>,
) {
    for collision in collisions.read() {
        if !session.game_over {
            session.game_over = true;
            info!("airplane down at {:?}", collision.impact_point);
        }
    }
}

/// Refreshes the read-only overlay snapshot at the end of the frame.
pub fn hud_snapshot_system(
    mut hud: ResMut<HudSnapshot>,
    session: Res<GameSession>,
    phase: Res<State<FlightPhase>>,
    query: Query<&VehicleState, With<PlayerController>>,
) {
    let Ok(state) = query.get_single() else {
        return;
    };

    *hud = HudSnapshot {
        score: session.score,
        speed: state.spatial.speed(),
        altitude: state.spatial.altitude(),
        phase: *phase.get(),
        game_over: session.game_over,
    };
}
