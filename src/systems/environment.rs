use bevy::prelude::*;

use crate::components::{PlayerController, VehicleState};
use crate::resources::{EnvironmentConfig, EnvironmentModel, SimTime};

/// Feeds the decorative surroundings their per-frame inputs: the clamped
/// delta and the airplane position. Strictly one-way; the simulation never
/// reads the model back.
pub fn environment_system(
    config: Res<EnvironmentConfig>,
    mut model: ResMut<EnvironmentModel>,
    time: Res<SimTime>,
    query: Query<&VehicleState, With<PlayerController>>,
) {
    let Ok(state) = query.get_single() else {
        return;
    };

    model.advance(&config, time.delta, &state.spatial.position);
}
