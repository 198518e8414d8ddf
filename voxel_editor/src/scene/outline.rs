//! Cube outline and trackball sphere gizmos, plus the shared pulse alpha.

use std::f32::consts::TAU;
use std::time::Duration;

use bevy::math::Isometry3d;
use bevy::prelude::*;

use crate::trackball::Trackball;

const PULSE_PERIOD_MS: u128 = 3000;
const HALF_EXTENT: f32 = 5.5;

/// Corner index pairs of the 12 cube edges.
pub const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 3),
    (3, 2),
    (2, 0),
    (0, 4),
    (1, 5),
    (3, 7),
    (2, 6),
    (4, 5),
    (5, 7),
    (7, 6),
    (6, 4),
];

/// Opacity that breathes between 0.1 and 0.4 every three seconds.
pub fn pulse_alpha(elapsed: Duration) -> f32 {
    let phase = (elapsed.as_millis() % PULSE_PERIOD_MS) as f32 / PULSE_PERIOD_MS as f32;
    ((phase * TAU).sin() + 1.0) * 0.15 + 0.1
}

/// The lattice's bounding cube corners after `rotation`, top face first.
pub fn cube_corners(rotation: Quat) -> [Vec3; 8] {
    let h = HALF_EXTENT;
    [
        Vec3::new(-h, h, -h),
        Vec3::new(h, h, -h),
        Vec3::new(-h, h, h),
        Vec3::new(h, h, h),
        Vec3::new(-h, -h, -h),
        Vec3::new(h, -h, -h),
        Vec3::new(-h, -h, h),
        Vec3::new(h, -h, h),
    ]
    .map(|corner| rotation * corner)
}

pub fn draw_outline_system(mut gizmos: Gizmos, time: Res<Time>, trackball: Res<Trackball>) {
    let alpha = pulse_alpha(time.elapsed());
    let edge_color = Color::srgba(1.0, 1.0, 1.0, alpha * 2.0);
    let corners = cube_corners(trackball.rotation());
    for (a, b) in CUBE_EDGES {
        gizmos.line(corners[a], corners[b], edge_color);
    }

    let sphere = trackball.sphere();
    let sphere_color = if trackball.is_dragging() {
        Color::srgba(1.0, 1.0, 1.0, 0.25)
    } else {
        Color::srgba(1.0, 1.0, 1.0, 0.08)
    };
    gizmos
        .sphere(
            Isometry3d::from_translation(sphere.center),
            sphere.radius,
            sphere_color,
        )
        .resolution(48);
}
