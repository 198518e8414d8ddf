//! Voxel editor — paint an 11×11×11 block model slice by slice and turn it
//! with a trackball.
//!
//! Library root: model, trackball, scene and UI modules plus the SDK builder.

pub mod config;
pub mod model;
pub mod render;
pub mod scene;
pub mod trackball;
mod ui;

pub mod prelude;
pub mod sdk;

pub use model::{CellIndex, Lattice, LayerSelection, LayerView, PaintAction, PenColor};
pub use scene::{cube_corners, pulse_alpha, trackball_sphere, VoxelCube, CUBE_EDGES};
pub use sdk::VoxelEditorBuilder;
pub use trackball::{Trackball, TrackSphere};
pub use ui::{hit_test, panel_commands, PanelCommand, PanelHit, PanelInput};
