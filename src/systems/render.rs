use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};

use crate::components::{
    CameraComponent, Obstacle, PlayerController, RunwayComponent, SpatialComponent, VehicleState,
    VolumeShape,
};
use crate::resources::EnvironmentModel;

/// Handles for the primitive meshes and materials the presentation layer
/// dresses simulation entities with.
#[derive(Resource)]
pub struct SceneAssets {
    pub airplane_mesh: Handle<Mesh>,
    pub airplane_material: Handle<StandardMaterial>,
    pub unit_sphere: Handle<Mesh>,
    pub unit_cube: Handle<Mesh>,
    pub obstacle_material: Handle<StandardMaterial>,
    pub spinner_material: Handle<StandardMaterial>,
    pub runway_material: Handle<StandardMaterial>,
}

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        DirectionalLight {
            illuminance: 12_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -0.9, 0.6, 0.0)),
    ));

    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 7.0, 14.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Ground sheet; the runway strip is dressed onto the simulation's runway
    // entity once it exists.
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(4000.0, 4000.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.35, 0.55, 0.3))),
        Transform::from_xyz(0.0, -0.1, 0.0),
    ));

    commands.insert_resource(SceneAssets {
        airplane_mesh: meshes.add(Cuboid::new(3.0, 0.8, 2.4)),
        airplane_material: materials.add(Color::srgb(0.85, 0.2, 0.15)),
        // Unit-size primitives, scaled per obstacle.
        unit_sphere: meshes.add(Sphere::new(1.0)),
        unit_cube: meshes.add(Cuboid::new(2.0, 2.0, 2.0)),
        obstacle_material: materials.add(Color::srgb(0.4, 0.4, 0.45)),
        spinner_material: materials.add(Color::srgb(0.8, 0.6, 0.1)),
        runway_material: materials.add(Color::srgb(0.25, 0.25, 0.28)),
    });
}

fn to_vec3(v: &Vector3<f64>) -> Vec3 {
    Vec3::new(v.x as f32, v.y as f32, v.z as f32)
}

fn to_quat(q: &UnitQuaternion<f64>) -> Quat {
    let inner = q.quaternion();
    Quat::from_xyzw(inner.i as f32, inner.j as f32, inner.k as f32, inner.w as f32)
}

/// Lazily dresses the runway entity with its strip mesh.
pub fn decorate_runway(
    mut commands: Commands,
    assets: Option<Res<SceneAssets>>,
    mut meshes: ResMut<Assets<Mesh>>,
    query: Query<(Entity, &RunwayComponent), Without<Mesh3d>>,
) {
    let Some(assets) = assets else { return };

    for (entity, runway) in query.iter() {
        let center = runway.position
            + Vector3::new(0.0, runway.surface_height, -runway.length / 2.0);
        commands.entity(entity).insert((
            Mesh3d(meshes.add(Cuboid::new(
                runway.width as f32,
                0.05,
                runway.length as f32,
            ))),
            MeshMaterial3d(assets.runway_material.clone()),
            Transform::from_translation(to_vec3(&center)),
        ));
    }
}

/// Mirrors the airplane pose into its render transform, attaching the mesh
/// on first sight. The visual attitude uses the smoothed display bank
/// instead of the raw roll state.
pub fn sync_vehicle_visuals(
    mut commands: Commands,
    assets: Option<Res<SceneAssets>>,
    mut query: Query<(Entity, &VehicleState, Option<&mut Transform>), With<PlayerController>>,
) {
    let Some(assets) = assets else { return };

    for (entity, state, transform) in query.iter_mut() {
        let visual_attitude =
            UnitQuaternion::from_axis_angle(&Vector3::y_axis(), state.yaw)
                * UnitQuaternion::from_axis_angle(&Vector3::x_axis(), state.pitch)
                * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), state.display_bank);
        let pose = Transform {
            translation: to_vec3(&state.spatial.position),
            rotation: to_quat(&visual_attitude),
            scale: Vec3::ONE,
        };

        match transform {
            Some(mut transform) => *transform = pose,
            None => {
                commands.entity(entity).insert((
                    Mesh3d(assets.airplane_mesh.clone()),
                    MeshMaterial3d(assets.airplane_material.clone()),
                    pose,
                ));
            }
        }
    }
}

/// Same lazy-attach pattern for obstacles, which appear and disappear as the
/// manager recycles them.
pub fn sync_obstacle_visuals(
    mut commands: Commands,
    assets: Option<Res<SceneAssets>>,
    mut query: Query<(Entity, &Obstacle, &SpatialComponent, Option<&mut Transform>)>,
) {
    let Some(assets) = assets else { return };

    for (entity, obstacle, spatial, transform) in query.iter_mut() {
        let scale = match obstacle.shape {
            VolumeShape::Sphere { radius } => Vec3::splat(radius as f32),
            VolumeShape::Box { half_extents } => to_vec3(&half_extents),
        };
        let pose = Transform {
            translation: to_vec3(&spatial.position),
            rotation: to_quat(&spatial.attitude),
            scale,
        };

        match transform {
            Some(mut transform) => *transform = pose,
            None => {
                let mesh = match obstacle.shape {
                    VolumeShape::Sphere { .. } => assets.unit_sphere.clone(),
                    VolumeShape::Box { .. } => assets.unit_cube.clone(),
                };
                let material = if obstacle.is_spinner() {
                    assets.spinner_material.clone()
                } else {
                    assets.obstacle_material.clone()
                };
                commands
                    .entity(entity)
                    .insert((Mesh3d(mesh), MeshMaterial3d(material), pose));
            }
        }
    }
}

/// Copies the derived camera pose onto the render camera.
pub fn sync_camera(
    camera_query: Query<&CameraComponent>,
    mut render_query: Query<&mut Transform, With<Camera3d>>,
) {
    if let (Ok(camera), Ok(mut transform)) =
        (camera_query.get_single(), render_query.get_single_mut())
    {
        *transform = Transform::from_translation(to_vec3(&camera.position))
            .looking_at(to_vec3(&camera.target), to_vec3(&camera.up));
    }
}

/// Tints the sky from the environment model's hue cycle.
pub fn sync_sky(model: Option<Res<EnvironmentModel>>, mut clear_color: ResMut<ClearColor>) {
    let Some(model) = model else { return };

    let blend = 0.5 + 0.5 * model.sky_phase.sin() as f32;
    clear_color.0 = Color::srgb(
        0.35 + 0.15 * blend,
        0.55 + 0.1 * blend,
        0.85 - 0.1 * blend,
    );
}
