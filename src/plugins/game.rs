use bevy::prelude::*;

use crate::components::{CollisionEvent, RunwayComponent};
use crate::resources::{
    FlightPhase, GameSession, HudSnapshot, PhysicsConfig, SimTime, StepMode,
};
use crate::systems::{
    game_over_system, hud_snapshot_system, restart_key_system, restart_system, scoring_system,
};

/// Zero-argument restart request. Anything may send it; the input surface
/// binds it to a key.
#[derive(Event)]
pub struct RestartEvent;

/// Fixed per-frame order of the whole simulation. Every gameplay system
/// lives in exactly one of these sets and the chain never reorders.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum GameSet {
    Time,
    Input,
    Vehicle,
    Camera,
    Environment,
    Obstacles,
    Scoring,
    Hud,
}

/// Run condition: the session is still being played.
pub fn session_active(session: Res<GameSession>) -> bool {
    !session.game_over
}

/// Owns the phase state machine, the session resources, the frame clock and
/// the scoring/game-over/restart half of the loop. The vehicle, obstacle,
/// camera and environment plugins hang their systems into the `GameSet`
/// chain this plugin configures.
pub struct GamePlugin {
    physics: PhysicsConfig,
    mode: StepMode,
}

impl GamePlugin {
    pub fn new(mode: StepMode) -> Self {
        Self::with_config(PhysicsConfig::default(), mode)
    }

    pub fn with_config(physics: PhysicsConfig, mode: StepMode) -> Self {
        Self { physics, mode }
    }

    fn setup_runway(mut commands: Commands) {
        commands.spawn((RunwayComponent::default(), Name::new("Runway")));
    }

    /// Advances the frame clock. Real-time deltas are clamped so a stalled
    /// tab cannot blow up the integration; stepped mode always advances one
    /// fixed step.
    fn advance_time(
        time: Res<Time>,
        mode: Res<StepMode>,
        physics: Res<PhysicsConfig>,
        mut sim: ResMut<SimTime>,
    ) {
        let dt = match *mode {
            StepMode::RealTime => time.delta_secs_f64().min(physics.max_frame_time),
            StepMode::Stepped => physics.time_step,
        };
        sim.advance(dt);
    }
}

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<FlightPhase>()
            .add_event::<RestartEvent>()
            .add_event::<CollisionEvent>()
            .insert_resource(self.physics.clone())
            .insert_resource(self.mode)
            .init_resource::<SimTime>()
            .init_resource::<GameSession>()
            .init_resource::<HudSnapshot>()
            .configure_sets(
                Update,
                (
                    GameSet::Time,
                    GameSet::Input,
                    GameSet::Vehicle,
                    GameSet::Camera,
                    GameSet::Environment,
                    GameSet::Obstacles,
                    GameSet::Scoring,
                    GameSet::Hud,
                )
                    .chain(),
            )
            .add_systems(Startup, Self::setup_runway)
            .add_systems(Update, Self::advance_time.in_set(GameSet::Time))
            .add_systems(
                Update,
                (restart_key_system, restart_system)
                    .chain()
                    .in_set(GameSet::Input),
            )
            .add_systems(
                Update,
                (
                    scoring_system
                        .run_if(in_state(FlightPhase::Flight))
                        .run_if(session_active),
                    game_over_system,
                )
                    .chain()
                    .in_set(GameSet::Scoring),
            )
            .add_systems(Update, hud_snapshot_system.in_set(GameSet::Hud));
    }
}
