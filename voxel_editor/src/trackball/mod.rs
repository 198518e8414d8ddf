//! Trackball rotation: geometry helpers and the drag controller.

mod controller;
pub(crate) mod geometry;

pub use controller::{rotation_arc, Drag, DragState, Trackball};
pub use geometry::{
    find_silhouette_boundary, intersect_ray_sphere, ray_towards, screen_hits_sphere,
    screen_sphere_point, CameraView, ScreenRay, TrackSphere, BOUNDARY_SEARCH_MAX,
    BOUNDARY_TOLERANCE,
};
