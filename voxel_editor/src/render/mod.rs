//! Renderer trait and default implementation for occupied cells.

mod unit_cubes;

use bevy::prelude::*;

use crate::model::CellIndex;

pub use unit_cubes::{UnitCubeRenderer, UnitCubeSettings, VoxelAssetCache};

/// Spawns the entity for one occupied cell under the lattice root.
pub trait VoxelRenderer: Send + Sync + 'static {
    fn setup(&self, _app: &mut App) {}
    fn spawn_voxel(
        &self,
        parent: &mut ChildBuilder,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
        cache: &mut VoxelAssetCache,
        cell: CellIndex,
        color: Color,
    );
}

#[derive(Resource)]
pub struct RendererResource(pub Box<dyn VoxelRenderer>);

impl RendererResource {
    pub fn new(renderer: impl VoxelRenderer) -> Self {
        Self(Box::new(renderer))
    }
}
