//! HUD overlay: model stats, active layer and pen, orientation, FPS.

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::model::{Lattice, LayerView, PenColor, CELL_COUNT};
use crate::trackball::Trackball;

pub fn hud_plugin(app: &mut App) {
    if !app.is_plugin_added::<FrameTimeDiagnosticsPlugin>() {
        app.add_plugins(FrameTimeDiagnosticsPlugin);
    }
    app.add_systems(Update, hud_overlay_system);
}

fn hud_overlay_system(
    mut contexts: EguiContexts,
    lattice: Res<Lattice>,
    layers: Res<LayerView>,
    pen: Res<PenColor>,
    trackball: Res<Trackball>,
    diagnostics: Res<DiagnosticsStore>,
) {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|d| d.smoothed())
        .unwrap_or(0.0);

    let filled = lattice.occupied_count();
    let fill = filled as f32 / CELL_COUNT as f32;

    egui::Window::new("Voxbox")
        .anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(false)
        .frame(
            egui::Frame::default()
                .fill(egui::Color32::from_rgba_premultiplied(15, 15, 25, 210))
                .inner_margin(egui::Margin::same(12))
                .corner_radius(egui::CornerRadius::same(6)),
        )
        .show(contexts.ctx_mut(), |ui| {
            ui.style_mut().override_text_style = Some(egui::TextStyle::Monospace);
            ui.visuals_mut().override_text_color = Some(egui::Color32::from_rgb(200, 220, 240));

            ui.label(
                egui::RichText::new(format!("Layer {}", layers.selection()))
                    .size(16.0)
                    .color(egui::Color32::from_rgb(100, 220, 180)),
            );
            ui.add_space(4.0);

            ui.label(format!("Voxels {filled}/{CELL_COUNT}"));
            ui.add(
                egui::ProgressBar::new(fill)
                    .text(format!("{:.1}%", fill * 100.0))
                    .fill(egui::Color32::from_rgb(80, 180, 140)),
            );
            ui.add_space(4.0);

            ui.label(format!("Pen swatch {}", pen.selected()));
            ui.label(format_rotation(trackball.rotation()));
            if trackball.is_dragging() {
                ui.label("Rotating");
            }

            ui.separator();
            ui.label(format!("FPS  {fps:.0}"));
        });
}

fn format_rotation(rotation: Quat) -> String {
    let (axis, angle) = rotation.to_axis_angle();
    if angle.abs() < 1e-4 {
        return "Rotation 0.0°".to_string();
    }
    format!(
        "Rotation {:.1}° about ({:.2}, {:.2}, {:.2})",
        angle.to_degrees(),
        axis.x,
        axis.y,
        axis.z
    )
}
