//! Layer editor panel: the 11×11 slice grid with its ghost preview, the
//! layer pickers, and the palette.

use bevy::color::ColorToPacked;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::model::{Edit, Lattice, LayerSelection, LayerView, PaintAction, PenColor, GRID};
use crate::scene::{pulse_alpha, trackball_input_system};
use crate::trackball::Trackball;
use crate::ui::layout::{
    cell_rect, hit_test, swatch_rect, y_disc_center, z_disc_center, PanelHit, DISC_RADIUS,
    PANEL_SIZE,
};

/// Offset of the ghost square relative to its cell.
const GHOST_OFFSET: egui::Vec2 = egui::vec2(-2.0, 2.0);
const FRAME_GRAY: egui::Color32 = egui::Color32::from_rgb(127, 127, 127);
const SWATCH_INSET: f32 = 5.0;

/// Pointer state over the panel for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanelInput {
    pub hovered: Option<PanelHit>,
    /// The primary button went down this frame. Layer and pen picks fire here,
    /// not on release.
    pub primary_pressed: bool,
    pub primary_down: bool,
    pub secondary_down: bool,
}

/// A state change requested through the panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanelCommand {
    SelectLayer(LayerSelection),
    SelectPen(usize),
    Edit(Edit),
}

/// Commands for one frame of panel input, skipping anything that would not
/// change state.
pub fn panel_commands(
    input: &PanelInput,
    layers: &LayerView,
    pen: &PenColor,
    lattice: &Lattice,
    dragging: bool,
) -> Vec<PanelCommand> {
    let mut commands = Vec::new();

    let picked = input.primary_pressed.then_some(input.hovered).flatten();
    match picked {
        Some(PanelHit::YLayer(i)) if layers.selection() != LayerSelection::Y(i) => {
            commands.push(PanelCommand::SelectLayer(LayerSelection::Y(i)));
        }
        Some(PanelHit::ZLayer(i)) if layers.selection() != LayerSelection::Z(i) => {
            commands.push(PanelCommand::SelectLayer(LayerSelection::Z(i)));
        }
        Some(PanelHit::Swatch(i)) if pen.selected() != i => {
            commands.push(PanelCommand::SelectPen(i));
        }
        _ => {}
    }

    let action = if input.primary_down {
        Some(PaintAction::Paint)
    } else if input.secondary_down {
        Some(PaintAction::Erase)
    } else {
        None
    };
    if let (Some(PanelHit::Cell { row, col }), Some(action)) = (input.hovered, action) {
        if let Some(edit) = layers.edit_at(row, col, action, pen.color(), dragging) {
            if lattice.differs(&edit) {
                commands.push(PanelCommand::Edit(edit));
            }
        }
    }

    commands
}

pub fn panel_plugin(app: &mut App) {
    app.add_systems(Update, editor_panel_system.after(trackball_input_system));
}

fn editor_panel_system(
    mut contexts: EguiContexts,
    time: Res<Time>,
    trackball: Res<Trackball>,
    mut lattice: ResMut<Lattice>,
    mut layers: ResMut<LayerView>,
    mut pen: ResMut<PenColor>,
) {
    let alpha = pulse_alpha(time.elapsed());

    let shown = egui::Window::new("Layers")
        .anchor(egui::Align2::LEFT_TOP, [20.0, 20.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(false)
        .frame(
            egui::Frame::default()
                .fill(egui::Color32::from_rgba_unmultiplied(255, 255, 255, 40))
                .inner_margin(egui::Margin::same(12))
                .corner_radius(egui::CornerRadius::same(6)),
        )
        .show(contexts.ctx_mut(), |ui| {
            let (response, painter) = ui.allocate_painter(PANEL_SIZE, egui::Sense::click());
            let origin = response.rect.min.to_vec2();

            draw_grid(&painter, origin, &lattice, &layers, alpha);
            draw_layer_discs(&painter, origin, layers.selection());
            draw_palette(&painter, origin, &pen);

            let (hover, primary_pressed, primary_down, secondary_down) = ui.input(|i| {
                (
                    i.pointer.hover_pos(),
                    i.pointer.primary_pressed(),
                    i.pointer.primary_down(),
                    i.pointer.secondary_down(),
                )
            });
            let local_hit = |pos: egui::Pos2| {
                response
                    .rect
                    .contains(pos)
                    .then(|| hit_test(pos - origin))
                    .flatten()
            };
            PanelInput {
                hovered: hover.and_then(local_hit),
                primary_pressed,
                primary_down,
                secondary_down,
            }
        });

    let Some(input) = shown.and_then(|window| window.inner) else {
        return;
    };

    for command in panel_commands(&input, &layers, &pen, &lattice, trackball.is_dragging()) {
        match command {
            PanelCommand::SelectLayer(LayerSelection::Y(i)) => {
                layers.select_y(i);
                info!("voxbox: editing layer Y {i}");
            }
            PanelCommand::SelectLayer(LayerSelection::Z(i)) => {
                layers.select_z(i);
                info!("voxbox: editing layer Z {i}");
            }
            PanelCommand::SelectLayer(LayerSelection::None) => {}
            PanelCommand::SelectPen(i) => {
                pen.select(i);
                info!("voxbox: pen set to swatch {i}");
            }
            PanelCommand::Edit(edit) => {
                lattice.apply(edit);
            }
        }
    }
}

fn draw_grid(
    painter: &egui::Painter,
    origin: egui::Vec2,
    lattice: &Lattice,
    layers: &LayerView,
    alpha: f32,
) {
    for row in 0..GRID {
        for col in 0..GRID {
            let rect = cell_rect(row, col).translate(origin);

            if let Some(color) = layers.cell_at(row, col).and_then(|cell| lattice.get(cell)) {
                painter.rect_filled(rect, 0.0, to_egui(color, 1.0));
            }
            if let Some(ghost) = layers.ghost_cell(lattice, row, col) {
                painter.rect_filled(rect.translate(GHOST_OFFSET), 0.0, to_egui(ghost, alpha));
            }
            painter.rect_stroke(
                rect,
                0.0,
                egui::Stroke::new(0.5, FRAME_GRAY),
                egui::StrokeKind::Inside,
            );
        }
    }
}

fn draw_layer_discs(painter: &egui::Painter, origin: egui::Vec2, selection: LayerSelection) {
    let frame = egui::Stroke::new(1.0, FRAME_GRAY);
    for layer in 0..GRID {
        let y = y_disc_center(layer) + origin;
        if selection == LayerSelection::Y(layer) {
            painter.circle_filled(y, DISC_RADIUS, egui::Color32::WHITE);
        }
        painter.circle_stroke(y, DISC_RADIUS, frame);

        let z = z_disc_center(layer) + origin;
        if selection == LayerSelection::Z(layer) {
            painter.circle_filled(z, DISC_RADIUS, egui::Color32::WHITE);
        }
        painter.circle_stroke(z, DISC_RADIUS, frame);
    }
}

fn draw_palette(painter: &egui::Painter, origin: egui::Vec2, pen: &PenColor) {
    let frame = egui::Stroke::new(1.0, egui::Color32::from_rgba_unmultiplied(0, 0, 0, 80));
    for (index, color) in pen.palette().iter().enumerate() {
        let mut rect = swatch_rect(index).translate(origin);
        if index == pen.selected() {
            rect = rect.shrink(SWATCH_INSET);
        }
        painter.rect_filled(rect, 0.0, to_egui(color, 1.0));
        painter.rect_stroke(rect, 0.0, frame, egui::StrokeKind::Inside);
    }
}

fn to_egui(color: Color, alpha: f32) -> egui::Color32 {
    let [r, g, b, a] = color.to_srgba().to_u8_array();
    let a = (a as f32 * alpha.clamp(0.0, 1.0)).round() as u8;
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}
