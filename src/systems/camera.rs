use bevy::prelude::*;

use crate::components::{runway_forward, CameraComponent, PlayerController, VehicleState};
use crate::resources::FlightPhase;

/// Derives the chase-camera pose from the airplane pose and the phase.
///
/// On the runway the camera hangs on a fixed world-axis offset; in the air
/// both the offset and the aim point are rotated by the airplane attitude so
/// the view banks and pitches with it.
pub fn camera_follow_system(
    mut camera_query: Query<&mut CameraComponent>,
    vehicle_query: Query<&VehicleState, With<PlayerController>>,
    phase: Res<State<FlightPhase>>,
) {
    if let (Ok(mut camera), Ok(state)) =
        (camera_query.get_single_mut(), vehicle_query.get_single())
    {
        match phase.get() {
            FlightPhase::Taxi => {
                camera.position = state.spatial.position + camera.taxi_offset;
                camera.target = state.spatial.position;
            }
            FlightPhase::Flight => {
                camera.position =
                    state.spatial.position + state.spatial.attitude * camera.flight_offset;
                camera.target = state.spatial.position
                    + state.spatial.attitude * (runway_forward() * camera.look_ahead);
            }
        }
    }
}
