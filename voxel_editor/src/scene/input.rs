//! Pointer routing for the trackball: press on the sphere, drag, release.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowFocused};
use bevy_egui::EguiContexts;

use crate::scene::setup::EditorCamera;
use crate::trackball::{CameraView, ScreenRay, Trackball};

/// Everything the trackball needs to know about the pointer for one frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerFrame {
    pub cursor: Option<Vec2>,
    pub just_pressed: bool,
    pub just_released: bool,
    pub lost_focus: bool,
    /// The pointer is over an egui area, which owns the press.
    pub over_ui: bool,
}

/// Advances the trackball by one frame of pointer input.
pub fn route_pointer<V: ScreenRay>(
    trackball: &mut Trackball,
    frame: PointerFrame,
    view: Option<&V>,
) {
    if let (Some(cursor), Some(view)) = (frame.cursor, view) {
        if frame.just_pressed
            && !trackball.is_dragging()
            && !frame.over_ui
            && trackball.press(cursor, view)
        {
            debug!("voxbox: grabbed trackball at {cursor}");
        }
        if trackball.is_dragging() {
            trackball.track(cursor, view);
        }
    }

    // Losing focus mid-drag counts as letting go.
    if (frame.just_released || frame.lost_focus) && trackball.is_dragging() {
        if let Some(delta) = trackball.release() {
            let (axis, angle) = delta.to_axis_angle();
            debug!(
                "voxbox: committed {:.1}° about {axis}",
                angle.to_degrees()
            );
        }
    }
}

pub fn trackball_input_system(
    mouse: Res<ButtonInput<MouseButton>>,
    mut focus_events: EventReader<WindowFocused>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<EditorCamera>>,
    mut contexts: EguiContexts,
    mut trackball: ResMut<Trackball>,
) {
    let frame = PointerFrame {
        cursor: windows
            .get_single()
            .ok()
            .and_then(|window| window.cursor_position()),
        just_pressed: mouse.just_pressed(MouseButton::Left),
        just_released: mouse.just_released(MouseButton::Left),
        lost_focus: focus_events.read().any(|event| !event.focused),
        over_ui: contexts.ctx_mut().is_pointer_over_area(),
    };
    let view = cameras
        .get_single()
        .ok()
        .map(|(camera, transform)| CameraView { camera, transform });

    route_pointer(&mut trackball, frame, view.as_ref());
}
