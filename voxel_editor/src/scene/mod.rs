mod input;
mod outline;
mod setup;
mod voxels;

pub use input::{route_pointer, trackball_input_system, PointerFrame};
pub use outline::{cube_corners, draw_outline_system, pulse_alpha, CUBE_EDGES};
pub use setup::{
    configure_gizmos, setup_scene, trackball_sphere, EditorCamera, LatticeRoot, CAMERA_EYE,
    CAMERA_TARGET, SPHERE_RADIUS,
};
pub use voxels::{apply_rotation_system, sync_voxels_system, VoxelCube};
