pub mod config;
pub mod environment;
pub mod errors;
pub mod session;

pub use config::{
    CameraConfig, EnvironmentConfig, GameConfig, ObstacleConfig, PhysicsConfig,
};
pub use environment::EnvironmentModel;
pub use errors::ConfigError;
pub use session::{FlightPhase, GameSession, HudSnapshot, SimTime, StepMode};
