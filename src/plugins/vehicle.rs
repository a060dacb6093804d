use bevy::prelude::*;

use crate::components::{ControlIntent, PlayerController, VehicleConfig, VehicleState};
use crate::plugins::{session_active, GameSet, RestartEvent};
use crate::resources::FlightPhase;
use crate::systems::{
    flight_system, keyboard_intent_system, takeoff_gate_system, taxi_takeoff_system,
};

/// Spawns the player airplane and wires its two control laws into the frame
/// order. Exactly one of the taxi and flight updates runs per tick, selected
/// by the current phase; both freeze on the frame a restart lands so the
/// reset state survives untouched into the next tick.
pub struct VehiclePlugin {
    config: VehicleConfig,
}

impl VehiclePlugin {
    pub fn new(config: VehicleConfig) -> Self {
        Self { config }
    }

    fn setup_vehicle(mut commands: Commands, config: VehicleConfig) {
        commands.spawn((
            VehicleState::at_runway_start(&config),
            config,
            ControlIntent::default(),
            PlayerController::new(),
            Name::new("Player"),
        ));
    }
}

impl Plugin for VehiclePlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();

        app.add_systems(
            Startup,
            move |commands: Commands| Self::setup_vehicle(commands, config.clone()),
        )
        .add_systems(Update, keyboard_intent_system.in_set(GameSet::Input))
        .add_systems(
            Update,
            (taxi_takeoff_system, takeoff_gate_system)
                .chain()
                .in_set(GameSet::Vehicle)
                .run_if(in_state(FlightPhase::Taxi))
                .run_if(session_active)
                .run_if(not(on_event::<RestartEvent>)),
        )
        .add_systems(
            Update,
            flight_system
                .in_set(GameSet::Vehicle)
                .run_if(in_state(FlightPhase::Flight))
                .run_if(session_active)
                .run_if(not(on_event::<RestartEvent>)),
        );
    }
}
