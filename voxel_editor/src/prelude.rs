//! Minimal prelude for SDK consumers.

pub use crate::config::{editor_config, editor_config_from, EditorConfig};
pub use crate::model::{CellIndex, Lattice, LayerSelection, LayerView, PaintAction, PenColor};
pub use crate::render::{UnitCubeRenderer, VoxelRenderer};
pub use crate::sdk::VoxelEditorBuilder;
pub use crate::trackball::{ScreenRay, TrackSphere, Trackball};
