//! Trackball state machine: press on the sphere to grab it, drag to rotate,
//! release to commit the drag into the accumulated orientation.

use bevy::prelude::*;

use super::geometry::{find_silhouette_boundary, screen_sphere_point, ScreenRay, TrackSphere};

/// An active drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drag {
    /// Screen position of the press.
    pub anchor_screen: Vec2,
    /// Sphere point under the press.
    pub anchor: Vec3,
    /// Sphere point currently tracked.
    pub current: Vec3,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(Drag),
}

/// Bevy resource holding the cube orientation.
#[derive(Resource, Clone, Debug)]
pub struct Trackball {
    sphere: TrackSphere,
    committed: Quat,
    pending: Quat,
    state: DragState,
}

impl Trackball {
    pub fn new(sphere: TrackSphere) -> Self {
        Self {
            sphere,
            committed: Quat::IDENTITY,
            pending: Quat::IDENTITY,
            state: DragState::Idle,
        }
    }

    pub fn sphere(&self) -> TrackSphere {
        self.sphere
    }

    pub fn committed(&self) -> Quat {
        self.committed
    }

    pub fn pending(&self) -> Quat {
        self.pending
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Committed orientation followed by the in-progress drag.
    pub fn rotation(&self) -> Quat {
        self.pending * self.committed
    }

    /// Starts a drag if `screen` lands on the sphere. Returns whether it did.
    pub fn press(&mut self, screen: Vec2, view: &impl ScreenRay) -> bool {
        if self.is_dragging() {
            return true;
        }
        let Some(hit) = screen_sphere_point(view, screen, self.sphere) else {
            return false;
        };
        let local = hit - self.sphere.center;
        self.state = DragState::Dragging(Drag {
            anchor_screen: screen,
            anchor: local,
            current: local,
        });
        self.pending = Quat::IDENTITY;
        true
    }

    /// Updates the in-progress rotation for the pointer at `screen`.
    pub fn track(&mut self, screen: Vec2, view: &impl ScreenRay) {
        let DragState::Dragging(mut drag) = self.state else {
            return;
        };

        if let Some(hit) = screen_sphere_point(view, screen, self.sphere) {
            drag.current = hit - self.sphere.center;
            self.pending = rotation_arc(drag.anchor, drag.current);
        } else if screen != drag.anchor_screen {
            let Some((current, pending)) = self.off_silhouette(&drag, screen, view) else {
                return;
            };
            drag.current = current;
            self.pending = pending;
        }

        self.state = DragState::Dragging(drag);
    }

    /// Rubber-band rotation for a pointer outside the sphere's disk: rotate
    /// toward the silhouette point in the drag direction, scaled by how far the
    /// pointer is from the anchor relative to that point. The scale is not
    /// clamped, so pulling past the edge keeps turning.
    fn off_silhouette(
        &self,
        drag: &Drag,
        screen: Vec2,
        view: &impl ScreenRay,
    ) -> Option<(Vec3, Quat)> {
        let dir = (screen - drag.anchor_screen).normalize_or_zero();
        if dir == Vec2::ZERO {
            return None;
        }
        let boundary = find_silhouette_boundary(drag.anchor_screen, dir, self.sphere, view);
        let span = drag.anchor_screen.distance(boundary);
        if span <= f32::EPSILON {
            return None;
        }
        let s = screen.distance(drag.anchor_screen) / span;
        let edge = screen_sphere_point(view, boundary, self.sphere)? - self.sphere.center;
        let full = rotation_arc(drag.anchor, edge);
        Some((edge, Quat::IDENTITY.slerp(full, s)))
    }

    /// Ends the drag and folds its rotation into the committed orientation.
    pub fn release(&mut self) -> Option<Quat> {
        if !self.is_dragging() {
            return None;
        }
        let delta = self.pending;
        self.committed = (delta * self.committed).normalize();
        self.pending = Quat::IDENTITY;
        self.state = DragState::Idle;
        Some(delta)
    }
}

/// Minimal rotation taking direction `from` onto direction `to`.
pub fn rotation_arc(from: Vec3, to: Vec3) -> Quat {
    let (Some(from), Some(to)) = (from.try_normalize(), to.try_normalize()) else {
        return Quat::IDENTITY;
    };
    Quat::from_rotation_arc(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trackball::geometry::tests::{unit_sphere_of_cube, Pinhole};

    fn trackball() -> Trackball {
        Trackball::new(unit_sphere_of_cube())
    }

    fn angle(q: Quat) -> f32 {
        q.angle_between(Quat::IDENTITY)
    }

    #[test]
    fn press_off_sphere_stays_idle() {
        let view = Pinhole::default();
        let mut ball = trackball();

        assert!(!ball.press(view.center + Vec2::new(600.0, 0.0), &view));
        assert_eq!(ball.state(), DragState::Idle);
        assert_eq!(ball.release(), None);
    }

    #[test]
    fn press_and_release_in_place_changes_nothing() {
        let view = Pinhole::default();
        let mut ball = trackball();
        let start = view.center + Vec2::new(30.0, -20.0);

        assert!(ball.press(start, &view));
        ball.track(start, &view);
        ball.release();

        assert!(ball.committed().abs_diff_eq(Quat::IDENTITY, 1e-6));
        assert_eq!(ball.pending(), Quat::IDENTITY);
        assert!(!ball.is_dragging());
    }

    #[test]
    fn drag_on_sphere_maps_anchor_onto_current_point() {
        let view = Pinhole::default();
        let mut ball = trackball();

        ball.press(view.center, &view);
        ball.track(view.center + Vec2::new(120.0, 0.0), &view);

        let DragState::Dragging(drag) = ball.state() else {
            panic!("expected an active drag");
        };
        let moved = ball.pending() * drag.anchor.normalize();
        assert!(moved.abs_diff_eq(drag.current.normalize(), 1e-5));
        // Dragging right turns the front of the sphere toward +x.
        assert!(moved.x > 0.0);
    }

    #[test]
    fn release_commits_and_resets_pending() {
        let view = Pinhole::default();
        let mut ball = trackball();

        ball.press(view.center, &view);
        ball.track(view.center + Vec2::new(0.0, 150.0), &view);
        let pending = ball.pending();
        let committed = ball.release().unwrap();

        assert_eq!(committed, pending);
        assert_eq!(ball.pending(), Quat::IDENTITY);
        assert!(ball.committed().abs_diff_eq(pending.normalize(), 1e-6));
        assert!(ball.rotation().abs_diff_eq(ball.committed(), 1e-6));
    }

    #[test]
    fn committed_stays_unit_over_many_drags() {
        let view = Pinhole::default();
        let mut ball = trackball();
        let offsets = [
            Vec2::new(200.0, 40.0),
            Vec2::new(-150.0, 90.0),
            Vec2::new(10.0, -300.0),
            Vec2::new(900.0, 500.0),
            Vec2::new(-700.0, -20.0),
        ];

        for round in 0..200 {
            let from = view.center + offsets[round % offsets.len()] * 0.1;
            let to = view.center + offsets[(round + 2) % offsets.len()];
            ball.press(from, &view);
            ball.track((from + to) * 0.5, &view);
            ball.track(to, &view);
            ball.release();
            assert!((ball.committed().length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn rotation_composes_pending_after_committed() {
        let view = Pinhole::default();
        let mut ball = trackball();

        ball.press(view.center, &view);
        ball.track(view.center + Vec2::new(150.0, 0.0), &view);
        ball.release();
        let first = ball.committed();

        ball.press(view.center, &view);
        ball.track(view.center + Vec2::new(0.0, 150.0), &view);
        let second = ball.pending();

        assert!(ball.rotation().abs_diff_eq(second * first, 1e-6));
    }

    #[test]
    fn dragging_past_silhouette_keeps_rotating() {
        let view = Pinhole::default();
        let mut ball = trackball();
        let edge = view.silhouette_radius(ball.sphere().radius);

        ball.press(view.center, &view);
        ball.track(view.center + Vec2::new(edge * 0.9, 0.0), &view);
        let inside = angle(ball.pending());

        ball.track(view.center + Vec2::new(edge * 1.5, 0.0), &view);
        let outside = angle(ball.pending());

        ball.track(view.center + Vec2::new(edge * 2.0, 0.0), &view);
        let far = angle(ball.pending());

        assert!(ball.is_dragging());
        assert!(outside > inside);
        assert!(far > outside);
        assert!((ball.pending().length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn off_silhouette_scale_is_distance_ratio() {
        let view = Pinhole::default();
        let mut ball = trackball();
        let edge = view.silhouette_radius(ball.sphere().radius);

        ball.press(view.center, &view);
        ball.track(view.center + Vec2::new(edge * 1.2, 0.0), &view);
        let DragState::Dragging(drag) = ball.state() else {
            panic!("expected an active drag");
        };
        let full = rotation_arc(drag.anchor, drag.current);

        assert!((angle(ball.pending()) - angle(full) * 1.2).abs() < 1e-2);
    }

    #[test]
    fn slerp_angle_grows_with_fraction() {
        let full = rotation_arc(Vec3::Z, Vec3::new(1.0, 0.3, 0.2));
        let mut last = 0.0;
        for step in 0..=20 {
            let s = step as f32 / 20.0;
            let a = angle(Quat::IDENTITY.slerp(full, s));
            assert!(a + 1e-5 >= last, "angle shrank at s={s}");
            last = a;
        }
        assert!((last - angle(full)).abs() < 1e-4);
    }

    #[test]
    fn rotation_arc_ignores_zero_vectors() {
        assert_eq!(rotation_arc(Vec3::ZERO, Vec3::X), Quat::IDENTITY);
    }
}
