use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::runway_forward;

/// Simulation phase. The transition is one-way: the game loop promotes
/// Taxi to Flight once the takeoff gate is cleared, and only a restart
/// returns to Taxi.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FlightPhase {
    #[default]
    Taxi,
    Flight,
}

/// Mutable state of one play session: score, the game-over latch and the
/// progress the score derives from.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameSession {
    pub score: u64,
    pub game_over: bool,
    /// Farthest distance reached along the runway axis [m]; never decreases
    pub distance: f64,
    /// Session start position the distance is measured from
    pub origin: Vector3<f64>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Vector3::zeros())
    }
}

impl GameSession {
    pub fn new(origin: Vector3<f64>) -> Self {
        Self {
            score: 0,
            game_over: false,
            distance: 0.0,
            origin,
        }
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.game_over = false;
        self.distance = 0.0;
    }

    /// Latch forward progress. Turning back never lowers the value, which is
    /// what keeps the score monotone.
    pub fn record_progress(&mut self, position: &Vector3<f64>) {
        let travelled = (position - self.origin).dot(&runway_forward());
        if travelled > self.distance {
            self.distance = travelled;
        }
    }

    /// Score formula: one point per ten meters of progress.
    pub fn recompute_score(&mut self) {
        self.score = (self.distance.abs() / 10.0).floor() as u64;
    }
}

/// Per-frame clock fed to every simulation system.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SimTime {
    /// Clamped delta for the current frame [s]
    pub delta: f64,
    /// Accumulated simulated time [s]
    pub elapsed: f64,
    /// Frames advanced since session start
    pub frame: u64,
}

impl Default for SimTime {
    fn default() -> Self {
        Self {
            delta: 0.0,
            elapsed: 0.0,
            frame: 0,
        }
    }
}

impl SimTime {
    pub fn advance(&mut self, dt: f64) {
        self.delta = dt;
        self.elapsed += dt;
        self.frame += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Where the per-frame delta comes from.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepMode {
    /// Wall-clock delta, clamped to the configured ceiling
    #[default]
    RealTime,
    /// One fixed time step per app update; used by tests and headless runs
    Stepped,
}

/// Read-only frame summary for overlay consumers.
#[derive(Resource, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HudSnapshot {
    pub score: u64,
    pub speed: f64,
    pub altitude: f64,
    pub phase: FlightPhase,
    pub game_over: bool,
}
