use std::collections::HashMap;

use bevy::color::ColorToPacked;
use bevy::prelude::*;

use crate::model::CellIndex;
use crate::render::VoxelRenderer;
use crate::scene::VoxelCube;

#[derive(Clone, Debug)]
pub struct UnitCubeSettings {
    /// Edge length of each cube; 1.0 makes neighbours touch.
    pub size: f32,
    pub perceptual_roughness: f32,
}

impl Default for UnitCubeSettings {
    fn default() -> Self {
        Self {
            size: 1.0,
            perceptual_roughness: 0.8,
        }
    }
}

/// Shared mesh and one material per distinct color, reused across rebuilds.
#[derive(Resource, Default)]
pub struct VoxelAssetCache {
    mesh: Option<Handle<Mesh>>,
    materials: HashMap<[u8; 4], Handle<StandardMaterial>>,
}

impl VoxelAssetCache {
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }
}

/// Draws every occupied cell as a solid cube at its lattice position.
#[derive(Default)]
pub struct UnitCubeRenderer {
    pub settings: UnitCubeSettings,
}

impl UnitCubeRenderer {
    fn mesh(&self, meshes: &mut Assets<Mesh>, cache: &mut VoxelAssetCache) -> Handle<Mesh> {
        let size = self.settings.size;
        cache
            .mesh
            .get_or_insert_with(|| meshes.add(Cuboid::new(size, size, size)))
            .clone()
    }

    fn material(
        &self,
        materials: &mut Assets<StandardMaterial>,
        cache: &mut VoxelAssetCache,
        color: Color,
    ) -> Handle<StandardMaterial> {
        let key = color.to_srgba().to_u8_array();
        let roughness = self.settings.perceptual_roughness;
        cache
            .materials
            .entry(key)
            .or_insert_with(|| {
                materials.add(StandardMaterial {
                    base_color: color,
                    perceptual_roughness: roughness,
                    ..default()
                })
            })
            .clone()
    }
}

impl VoxelRenderer for UnitCubeRenderer {
    fn spawn_voxel(
        &self,
        parent: &mut ChildBuilder,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
        cache: &mut VoxelAssetCache,
        cell: CellIndex,
        color: Color,
    ) {
        let mesh = self.mesh(meshes, cache);
        let material = self.material(materials, cache, color);
        parent.spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::from_translation(cell.world_position()),
            VoxelCube { cell },
        ));
    }
}
