pub mod camera;
pub mod intent;
pub mod obstacle;
pub mod runway;
pub mod spatial;
pub mod vehicle;

pub use camera::CameraComponent;
pub use intent::{ControlIntent, PlayerController};
pub use obstacle::{CollisionEvent, CollisionVolume, Obstacle, VolumeShape};
pub use runway::RunwayComponent;
pub use spatial::SpatialComponent;
pub use vehicle::{runway_forward, VehicleConfig, VehicleState};
