use bevy::prelude::*;

use crate::plugins::GameSet;
use crate::resources::{EnvironmentConfig, EnvironmentModel};
use crate::systems::environment_system;

/// Decorative surroundings. Keeps running after game-over so the scene does
/// not freeze around the wreck.
pub struct EnvironmentPlugin {
    config: EnvironmentConfig,
}

impl EnvironmentPlugin {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self { config }
    }
}

impl Plugin for EnvironmentPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .init_resource::<EnvironmentModel>()
            .add_systems(Update, environment_system.in_set(GameSet::Environment));
    }
}
