//! Keeps voxel entities in step with the lattice and the trackball.

use bevy::prelude::*;

use crate::model::{CellIndex, Lattice};
use crate::render::{RendererResource, VoxelAssetCache};
use crate::scene::setup::LatticeRoot;
use crate::trackball::Trackball;

/// Marker + coordinate for spawned voxel entities.
#[derive(Component, Debug)]
pub struct VoxelCube {
    pub cell: CellIndex,
}

/// Rebuilds the root's children whenever the lattice changes.
pub fn sync_voxels_system(
    mut commands: Commands,
    lattice: Res<Lattice>,
    renderer: Res<RendererResource>,
    roots: Query<Entity, With<LatticeRoot>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut cache: ResMut<VoxelAssetCache>,
) {
    if !lattice.is_changed() {
        return;
    }
    let Ok(root) = roots.get_single() else {
        return;
    };

    commands
        .entity(root)
        .despawn_descendants()
        .with_children(|parent| {
            for (cell, color) in lattice.occupied() {
                renderer
                    .0
                    .spawn_voxel(parent, &mut meshes, &mut materials, &mut cache, cell, color);
            }
        });
    debug!("voxbox: rebuilt {} voxels", lattice.occupied_count());
}

/// Copies the effective trackball rotation onto the lattice root.
pub fn apply_rotation_system(
    trackball: Res<Trackball>,
    mut roots: Query<&mut Transform, With<LatticeRoot>>,
) {
    let rotation = trackball.rotation();
    for mut transform in &mut roots {
        if transform.rotation != rotation {
            transform.rotation = rotation;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::UnitCubeRenderer;
    use crate::scene::setup::{setup_scene, trackball_sphere};
    use crate::trackball::geometry::tests::Pinhole;

    fn voxel_app() -> App {
        let mut app = App::new();
        app.init_resource::<Lattice>()
            .init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<VoxelAssetCache>()
            .insert_resource(RendererResource::new(UnitCubeRenderer::default()))
            .insert_resource(Trackball::new(trackball_sphere()))
            .add_systems(Startup, setup_scene)
            .add_systems(Update, (sync_voxels_system, apply_rotation_system));
        app
    }

    fn voxel_count(app: &mut App) -> usize {
        let world = app.world_mut();
        world.query::<&VoxelCube>().iter(world).count()
    }

    #[test]
    fn voxels_follow_lattice_edits() {
        let mut app = voxel_app();
        app.update();
        assert_eq!(voxel_count(&mut app), 0);

        {
            let mut lattice = app.world_mut().resource_mut::<Lattice>();
            lattice.set(CellIndex::new(0, 0, 0).unwrap(), Color::WHITE);
            lattice.set(CellIndex::new(10, 10, 10).unwrap(), Color::BLACK);
        }
        app.update();
        assert_eq!(voxel_count(&mut app), 2);

        app.world_mut()
            .resource_mut::<Lattice>()
            .clear(CellIndex::new(0, 0, 0).unwrap());
        app.update();
        assert_eq!(voxel_count(&mut app), 1);

        let world = app.world_mut();
        let (cube, transform) = world
            .query::<(&VoxelCube, &Transform)>()
            .single(world);
        assert_eq!(cube.cell, CellIndex::new(10, 10, 10).unwrap());
        assert_eq!(transform.translation, Vec3::new(5.0, -5.0, 5.0));
    }

    #[test]
    fn root_rotation_tracks_the_trackball() {
        let mut app = voxel_app();
        app.update();

        let view = Pinhole::default();
        {
            let mut ball = app.world_mut().resource_mut::<Trackball>();
            ball.press(view.center, &view);
            ball.track(view.center + Vec2::new(100.0, 40.0), &view);
        }
        app.update();

        let expected = app.world().resource::<Trackball>().rotation();
        let world = app.world_mut();
        let transform = world
            .query_filtered::<&Transform, With<LatticeRoot>>()
            .single(world);
        assert!(transform.rotation.abs_diff_eq(expected, 1e-6));
        assert!(!expected.abs_diff_eq(Quat::IDENTITY, 1e-3));
    }
}
