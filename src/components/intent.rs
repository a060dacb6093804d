use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Marker for the entity driven by player input.
#[derive(Component, Debug, Default)]
pub struct PlayerController {
    pub active: bool,
}

impl PlayerController {
    pub fn new() -> Self {
        Self { active: true }
    }

    pub fn disabled() -> Self {
        Self { active: false }
    }
}

/// Latched record of the controls currently held down.
///
/// The input surface is the only writer; simulation systems read it once per
/// tick and never mutate it. Each flag stays true for as long as the
/// corresponding key or button is held.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlIntent {
    pub pitch_up: bool,
    pub pitch_down: bool,
    pub roll_left: bool,
    pub roll_right: bool,
    pub boost: bool,
}

impl ControlIntent {
    /// Signed pitch demand: +1 nose up, -1 nose down, 0 neutral.
    pub fn pitch_axis(&self) -> f64 {
        match (self.pitch_up, self.pitch_down) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    /// Signed roll demand: +1 bank left, -1 bank right, 0 neutral.
    pub fn roll_axis(&self) -> f64 {
        match (self.roll_left, self.roll_right) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    pub fn any_held(&self) -> bool {
        self.pitch_up || self.pitch_down || self.roll_left || self.roll_right || self.boost
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
