//! Ray/sphere hit testing and the silhouette boundary search used once a
//! drag leaves the sphere's screen-space disk.

use bevy::math::{Dir3, Ray3d, Vec2, Vec3};
use bevy::prelude::{Camera, GlobalTransform};

/// Upper bound of the screen-space search, far enough to leave any silhouette.
pub const BOUNDARY_SEARCH_MAX: f32 = 2048.0;
/// Width at which the bisection interval is considered converged.
pub const BOUNDARY_TOLERANCE: f32 = 1e-3;
/// Hard cap on bisection steps; the tolerance is normally reached in ~21.
const MAX_BISECTION_STEPS: u32 = 64;

/// A sphere in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackSphere {
    pub center: Vec3,
    pub radius: f32,
}

impl TrackSphere {
    pub const fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Turns a screen position into a world-space ray through the scene.
pub trait ScreenRay {
    fn ray_through(&self, screen: Vec2) -> Option<Ray3d>;
}

/// A camera and its transform, as the scene sees them this frame.
pub struct CameraView<'a> {
    pub camera: &'a Camera,
    pub transform: &'a GlobalTransform,
}

impl ScreenRay for CameraView<'_> {
    fn ray_through(&self, screen: Vec2) -> Option<Ray3d> {
        self.camera.viewport_to_world(self.transform, screen).ok()
    }
}

/// Nearest intersection in front of the ray origin, if any.
pub fn intersect_ray_sphere(ray: Ray3d, sphere: TrackSphere) -> Option<Vec3> {
    let dir: Vec3 = *ray.direction;
    let oc = ray.origin - sphere.center;
    let b = oc.dot(dir);
    let c = oc.length_squared() - sphere.radius * sphere.radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let root = discriminant.sqrt();
    let t_near = -b - root;
    let t_far = -b + root;
    let t = if t_near > 0.0 {
        t_near
    } else if t_far > 0.0 {
        t_far
    } else {
        return None;
    };
    Some(ray.origin + dir * t)
}

/// Whether the screen point projects onto the sphere.
pub fn screen_hits_sphere(view: &impl ScreenRay, screen: Vec2, sphere: TrackSphere) -> bool {
    screen_sphere_point(view, screen, sphere).is_some()
}

/// World point where the ray through `screen` meets the sphere.
pub fn screen_sphere_point(view: &impl ScreenRay, screen: Vec2, sphere: TrackSphere) -> Option<Vec3> {
    view.ray_through(screen)
        .and_then(|ray| intersect_ray_sphere(ray, sphere))
}

/// Farthest point along `start + t·dir` (t in `0..=BOUNDARY_SEARCH_MAX`)
/// that still projects onto the sphere. `start` must project onto the sphere;
/// `dir` should be unit length.
pub fn find_silhouette_boundary(
    start: Vec2,
    dir: Vec2,
    sphere: TrackSphere,
    view: &impl ScreenRay,
) -> Vec2 {
    let mut inside = 0.0_f32;
    let mut outside = BOUNDARY_SEARCH_MAX;
    let mut steps = 0;

    while outside - inside >= BOUNDARY_TOLERANCE && steps < MAX_BISECTION_STEPS {
        let mid = (inside + outside) * 0.5;
        if screen_hits_sphere(view, start + dir * mid, sphere) {
            inside = mid;
        } else {
            outside = mid;
        }
        steps += 1;
    }

    start + dir * inside
}

/// Builds a ray from an origin and a non-zero direction.
pub fn ray_towards(origin: Vec3, direction: Vec3) -> Option<Ray3d> {
    Some(Ray3d {
        origin,
        direction: Dir3::new(direction).ok()?,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Pinhole camera on +z looking at the origin; screen y grows downward.
    pub(crate) struct Pinhole {
        pub eye: Vec3,
        pub focal: f32,
        pub center: Vec2,
    }

    impl Default for Pinhole {
        fn default() -> Self {
            Self {
                eye: Vec3::new(0.0, 0.0, 24.0),
                focal: 800.0,
                center: Vec2::new(640.0, 360.0),
            }
        }
    }

    impl Pinhole {
        /// Screen radius of a sphere of `radius` centered at the origin.
        pub fn silhouette_radius(&self, radius: f32) -> f32 {
            let half_angle = (radius / self.eye.length()).asin();
            self.focal * half_angle.tan()
        }
    }

    impl ScreenRay for Pinhole {
        fn ray_through(&self, screen: Vec2) -> Option<Ray3d> {
            let d = (screen - self.center) / self.focal;
            ray_towards(self.eye, Vec3::new(d.x, -d.y, -1.0))
        }
    }

    pub(crate) fn unit_sphere_of_cube() -> TrackSphere {
        TrackSphere::new(Vec3::ZERO, 5.5 * 3.0_f32.sqrt())
    }

    #[test]
    fn ray_through_center_hits_near_side() {
        let ray = ray_towards(Vec3::new(0.0, 0.0, 24.0), Vec3::NEG_Z).unwrap();
        let hit = intersect_ray_sphere(ray, TrackSphere::new(Vec3::ZERO, 2.0)).unwrap();
        assert!((hit - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-5);
    }

    #[test]
    fn ray_pointing_away_misses() {
        let ray = ray_towards(Vec3::new(0.0, 0.0, 24.0), Vec3::Z).unwrap();
        assert_eq!(intersect_ray_sphere(ray, TrackSphere::new(Vec3::ZERO, 2.0)), None);
    }

    #[test]
    fn ray_passing_beside_misses() {
        let ray = ray_towards(Vec3::new(3.0, 0.0, 24.0), Vec3::NEG_Z).unwrap();
        assert_eq!(intersect_ray_sphere(ray, TrackSphere::new(Vec3::ZERO, 2.0)), None);
    }

    #[test]
    fn ray_from_inside_returns_exit_point() {
        let ray = ray_towards(Vec3::ZERO, Vec3::X).unwrap();
        let hit = intersect_ray_sphere(ray, TrackSphere::new(Vec3::ZERO, 2.0)).unwrap();
        assert!((hit - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn boundary_sits_on_the_silhouette_edge() {
        let view = Pinhole::default();
        let sphere = unit_sphere_of_cube();
        let dir = Vec2::new(1.0, 0.5).normalize();

        let boundary = find_silhouette_boundary(view.center, dir, sphere, &view);

        assert!(screen_hits_sphere(&view, boundary, sphere));
        assert!(!screen_hits_sphere(&view, boundary + dir * 2e-3, sphere));

        let expected = view.silhouette_radius(sphere.radius);
        assert!(((boundary - view.center).length() - expected).abs() < 1e-2);
    }

    #[test]
    fn boundary_from_off_center_start() {
        let view = Pinhole::default();
        let sphere = unit_sphere_of_cube();
        let start = view.center + Vec2::new(-40.0, 25.0);

        for dir in [Vec2::X, Vec2::NEG_X, Vec2::Y, Vec2::new(-0.6, -0.8)] {
            let boundary = find_silhouette_boundary(start, dir, sphere, &view);
            assert!(screen_hits_sphere(&view, boundary, sphere));
            assert!(!screen_hits_sphere(&view, boundary + dir * 2e-3, sphere));
        }
    }

    #[test]
    fn boundary_search_terminates_for_degenerate_direction() {
        let view = Pinhole::default();
        let sphere = unit_sphere_of_cube();

        let boundary = find_silhouette_boundary(view.center, Vec2::ZERO, sphere, &view);

        assert_eq!(boundary, view.center);
    }
}
