use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::components::{
    runway_forward, CollisionEvent, CollisionVolume, Obstacle, PlayerController, SpatialComponent,
    VehicleConfig, VehicleState, VolumeShape,
};
use crate::resources::{ObstacleConfig, SimTime};

/// Placement state of the obstacle field: the RNG all offsets are drawn from
/// and the seed it restarts from.
#[derive(Resource, Debug)]
pub struct ObstacleSpawner {
    rng: ChaCha8Rng,
    seed: u64,
}

impl ObstacleSpawner {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Rewind the RNG so a restarted session sees the same layout.
    pub fn reseed(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
    }

    fn sample_obstacle(&mut self) -> Obstacle {
        match self.rng.gen_range(0..10) {
            0..=4 => Obstacle::fixed(VolumeShape::Box {
                half_extents: Vector3::new(
                    self.rng.gen_range(1.5..4.0),
                    self.rng.gen_range(1.5..4.0),
                    self.rng.gen_range(1.5..4.0),
                ),
            }),
            5..=7 => Obstacle::fixed(VolumeShape::Sphere {
                radius: self.rng.gen_range(2.0..4.0),
            }),
            _ => Obstacle::spinner(
                VolumeShape::Box {
                    half_extents: Vector3::new(self.rng.gen_range(4.0..7.0), 0.8, 0.8),
                },
                self.rng.gen_range(0.5..2.0),
            ),
        }
    }
}

fn spawn_obstacle(
    commands: &mut Commands,
    spawner: &mut ObstacleSpawner,
    config: &ObstacleConfig,
    longitudinal: f64,
) {
    let position = Vector3::new(
        spawner
            .rng
            .gen_range(config.lateral_range.0..config.lateral_range.1),
        spawner
            .rng
            .gen_range(config.altitude_range.0..config.altitude_range.1),
        longitudinal,
    );
    let obstacle = spawner.sample_obstacle();
    let spatial = SpatialComponent::at_position(position);
    let volume = CollisionVolume::from_shape(&obstacle.shape, &spatial);

    debug!("obstacle spawned at {:?}", position);
    commands.spawn((obstacle, spatial, volume, Name::new("Obstacle")));
}

/// Seeds the corridor when the airplane first gets airborne: a batch of
/// obstacles staggered along an advancing frontier ahead of the airplane.
pub fn spawn_initial_obstacles(
    mut commands: Commands,
    mut spawner: ResMut<ObstacleSpawner>,
    config: Res<ObstacleConfig>,
    query: Query<&VehicleState, With<PlayerController>>,
) {
    let Ok(vehicle) = query.get_single() else {
        return;
    };

    let mut frontier = vehicle.spatial.position.z;
    for _ in 0..config.min_active {
        frontier -= spawner
            .rng
            .gen_range(config.initial_gap.0..config.initial_gap.1);
        spawn_obstacle(&mut commands, &mut spawner, &config, frontier);
    }
}

/// Rotates the spinner variant in place. Static obstacles are untouched.
pub fn spin_obstacles_system(
    mut query: Query<(&Obstacle, &mut SpatialComponent)>,
    time: Res<SimTime>,
) {
    for (obstacle, mut spatial) in query.iter_mut() {
        if obstacle.is_spinner() {
            let spin =
                UnitQuaternion::from_axis_angle(&Vector3::y_axis(), obstacle.spin_rate * time.delta);
            spatial.attitude = spin * spatial.attitude;
        }
    }
}

/// Rebuilds every world-space collision volume from its live transform.
pub fn refresh_collision_volumes(
    mut query: Query<(&Obstacle, &SpatialComponent, &mut CollisionVolume)>,
) {
    for (obstacle, spatial, mut volume) in query.iter_mut() {
        *volume = CollisionVolume::from_shape(&obstacle.shape, spatial);
    }
}

/// Tests every obstacle volume against the airplane's collision sphere.
/// A single intersection is fatal; the event is latched downstream.
pub fn collision_detection_system(
    vehicle_query: Query<(&VehicleState, &VehicleConfig), With<PlayerController>>,
    obstacle_query: Query<(Entity, &CollisionVolume), With<Obstacle>>,
    mut collisions: EventWriter<CollisionEvent>,
) {
    let Ok((state, config)) = vehicle_query.get_single() else {
        return;
    };

    for (entity, volume) in obstacle_query.iter() {
        if volume.intersects_sphere(&state.spatial.position, config.collision_radius) {
            collisions.send(CollisionEvent {
                obstacle: entity,
                impact_point: state.spatial.position,
            });
        }
    }
}

/// Recycles obstacles that have fallen behind the despawn frontier.
pub fn despawn_passed_obstacles(
    mut commands: Commands,
    config: Res<ObstacleConfig>,
    vehicle_query: Query<&VehicleState, With<PlayerController>>,
    obstacle_query: Query<(Entity, &SpatialComponent), With<Obstacle>>,
) {
    let Ok(vehicle) = vehicle_query.get_single() else {
        return;
    };

    for (entity, spatial) in obstacle_query.iter() {
        let lead = (spatial.position - vehicle.spatial.position).dot(&runway_forward());
        if lead < -config.despawn_behind {
            debug!("obstacle recycled at {:?}", spatial.position);
            commands.entity(entity).despawn();
        }
    }
}

/// Tops the working set back up to the configured floor, placing each new
/// obstacle well ahead of the airplane.
pub fn replenish_obstacles(
    mut commands: Commands,
    mut spawner: ResMut<ObstacleSpawner>,
    config: Res<ObstacleConfig>,
    vehicle_query: Query<&VehicleState, With<PlayerController>>,
    obstacle_query: Query<Entity, With<Obstacle>>,
) {
    let Ok(vehicle) = vehicle_query.get_single() else {
        return;
    };

    let mut active = obstacle_query.iter().count();
    while active < config.min_active {
        let lead = spawner
            .rng
            .gen_range(config.replenish_gap.0..config.replenish_gap.1);
        spawn_obstacle(
            &mut commands,
            &mut spawner,
            &config,
            vehicle.spatial.position.z - lead,
        );
        active += 1;
    }
}
