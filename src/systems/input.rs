use bevy::prelude::*;

use crate::components::{ControlIntent, PlayerController};
use crate::plugins::RestartEvent;

/// Latches the currently held keys into the player's `ControlIntent`.
///
/// The latch is the only point where raw input reaches the simulation; every
/// flag mirrors the held state of its keys for exactly as long as they are
/// down. Runs as a no-op when no input device or player exists.
pub fn keyboard_intent_system(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mut query: Query<&mut ControlIntent, With<PlayerController>>,
) {
    let Some(keyboard) = keyboard else { return };
    let Ok(mut intent) = query.get_single_mut() else { return };

    let latched = ControlIntent {
        pitch_up: keyboard.pressed(KeyCode::ArrowUp) || keyboard.pressed(KeyCode::KeyW),
        pitch_down: keyboard.pressed(KeyCode::ArrowDown) || keyboard.pressed(KeyCode::KeyS),
        roll_left: keyboard.pressed(KeyCode::ArrowLeft) || keyboard.pressed(KeyCode::KeyA),
        roll_right: keyboard.pressed(KeyCode::ArrowRight) || keyboard.pressed(KeyCode::KeyD),
        boost: keyboard.pressed(KeyCode::Space) || keyboard.pressed(KeyCode::ShiftLeft),
    };

    if *intent != latched {
        *intent = latched;
    }
}

/// Emits a restart request when the restart key is tapped.
pub fn restart_key_system(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mut restarts: EventWriter<RestartEvent>,
) {
    let Some(keyboard) = keyboard else { return };
    if keyboard.just_pressed(KeyCode::KeyR) {
        restarts.send(RestartEvent);
    }
}
