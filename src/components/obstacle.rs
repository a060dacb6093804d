use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::SpatialComponent;

/// Fired in the frame an obstacle volume intersects the airplane sphere.
#[derive(Event)]
pub struct CollisionEvent {
    /// Obstacle that was hit
    pub obstacle: Entity,
    /// Airplane position at the moment of impact
    pub impact_point: Vector3<f64>,
}

/// Local-space shape of an obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum VolumeShape {
    Sphere { radius: f64 },
    Box { half_extents: Vector3<f64> },
}

/// A hazard placed along the flight corridor.
///
/// Obstacles never translate on their own; longitudinal progress only happens
/// through despawn and respawn. The spinner variant rotates in place at
/// `spin_rate` and is otherwise identical.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub shape: VolumeShape,
    /// Rotation rate about the vertical axis [rad/s], zero for static blocks
    pub spin_rate: f64,
}

impl Obstacle {
    pub fn fixed(shape: VolumeShape) -> Self {
        Self {
            shape,
            spin_rate: 0.0,
        }
    }

    pub fn spinner(shape: VolumeShape, spin_rate: f64) -> Self {
        Self { shape, spin_rate }
    }

    pub fn is_spinner(&self) -> bool {
        self.spin_rate != 0.0
    }
}

/// World-space collision volume, recomputed from the live transform every
/// frame so it stays correct for the rotating variant.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub enum CollisionVolume {
    Sphere {
        center: Vector3<f64>,
        radius: f64,
    },
    Aabb {
        min: Vector3<f64>,
        max: Vector3<f64>,
    },
}

impl CollisionVolume {
    /// Build the world-space volume for `shape` at the given transform.
    ///
    /// Boxes are conservatively wrapped in the axis-aligned bounds of their
    /// rotated corners, so a spinner sweeping past the vertical stays covered.
    pub fn from_shape(shape: &VolumeShape, spatial: &SpatialComponent) -> Self {
        match *shape {
            VolumeShape::Sphere { radius } => Self::Sphere {
                center: spatial.position,
                radius,
            },
            VolumeShape::Box { half_extents } => {
                let mut min = spatial.position;
                let mut max = spatial.position;
                for sx in [-1.0, 1.0] {
                    for sy in [-1.0, 1.0] {
                        for sz in [-1.0, 1.0] {
                            let corner = Vector3::new(
                                sx * half_extents.x,
                                sy * half_extents.y,
                                sz * half_extents.z,
                            );
                            let world = spatial.position + spatial.attitude * corner;
                            min = min.inf(&world);
                            max = max.sup(&world);
                        }
                    }
                }
                Self::Aabb { min, max }
            }
        }
    }

    /// Test against a sphere, the airplane's coarse collision proxy.
    pub fn intersects_sphere(&self, center: &Vector3<f64>, radius: f64) -> bool {
        match self {
            Self::Sphere {
                center: own_center,
                radius: own_radius,
            } => {
                let limit = radius + own_radius;
                (center - own_center).norm_squared() <= limit * limit
            }
            Self::Aabb { min, max } => {
                let closest = Vector3::new(
                    center.x.clamp(min.x, max.x),
                    center.y.clamp(min.y, max.y),
                    center.z.clamp(min.z, max.z),
                );
                (center - closest).norm_squared() <= radius * radius
            }
        }
    }
}
