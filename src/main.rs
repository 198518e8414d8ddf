//! Voxbox — 11×11×11 voxel painter. Runs the voxel_editor app.

use voxel_editor::VoxelEditorBuilder;

fn main() {
    let _ = dotenvy::dotenv();

    VoxelEditorBuilder::new().from_env().build().run();
}
