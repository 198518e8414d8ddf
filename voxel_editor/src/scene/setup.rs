//! Fixed camera, lights and the lattice root entity.

use bevy::prelude::*;

use crate::trackball::TrackSphere;

/// Camera position; the cube sits right of center to leave room for the panel.
pub const CAMERA_EYE: Vec3 = Vec3::new(-5.0, 12.0, 24.0);
pub const CAMERA_TARGET: Vec3 = Vec3::new(-5.0, 0.0, 0.0);
/// Half the space diagonal of the 11-unit cube, 5.5·√3.
pub const SPHERE_RADIUS: f32 = 9.526_279;

/// The sphere enclosing the whole lattice, grabbed by the trackball.
pub fn trackball_sphere() -> TrackSphere {
    TrackSphere::new(Vec3::ZERO, SPHERE_RADIUS)
}

/// Marker for the single camera the editor casts pointer rays from.
#[derive(Component)]
pub struct EditorCamera;

/// Parent of every voxel entity; carries the effective trackball rotation.
#[derive(Component)]
pub struct LatticeRoot;

pub fn setup_scene(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(CAMERA_EYE).looking_at(CAMERA_TARGET, Vec3::Y),
        EditorCamera,
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 4_000.0,
            ..default()
        },
        Transform::from_xyz(-6., 14., 18.).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
    });
    commands.spawn((LatticeRoot, Transform::default(), Visibility::Visible));
}

/// Draws the outline on top of the voxels.
pub fn configure_gizmos(mut store: ResMut<GizmoConfigStore>) {
    let (config, _) = store.config_mut::<DefaultGizmoConfigGroup>();
    config.depth_bias = -1.0;
    config.line_width = 1.5;
}
