//! Panel geometry in panel-local coordinates and pointer hit-testing.

use bevy_egui::egui::{pos2, vec2, Pos2, Rect, Vec2};

use crate::model::{Palette, GRID, PALETTE_LEN, PALETTE_ROWS};

pub const TILE: f32 = 30.0;
pub const DISC_RADIUS: f32 = TILE * 0.4;
pub const SWATCH: f32 = 65.0;

const GRID_EXTENT: f32 = TILE * GRID as f32;
/// Y-layer discs run down a column right of the grid.
const Y_DISC_X: f32 = GRID_EXTENT + TILE;
/// Z-layer discs run along a row under the grid.
const Z_DISC_Y: f32 = GRID_EXTENT + TILE;
const PALETTE_TOP: f32 = GRID_EXTENT + 70.0;

/// Space the panel allocates.
pub const PANEL_SIZE: Vec2 = vec2(
    Y_DISC_X + TILE * 0.5,
    PALETTE_TOP + SWATCH * PALETTE_ROWS as f32,
);

/// What the pointer is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelHit {
    Cell { row: usize, col: usize },
    YLayer(usize),
    ZLayer(usize),
    Swatch(usize),
}

pub fn cell_rect(row: usize, col: usize) -> Rect {
    Rect::from_min_size(
        pos2(col as f32 * TILE, row as f32 * TILE),
        Vec2::splat(TILE),
    )
}

pub fn y_disc_center(layer: usize) -> Pos2 {
    pos2(Y_DISC_X, TILE * 0.5 + TILE * layer as f32)
}

pub fn z_disc_center(layer: usize) -> Pos2 {
    pos2(TILE * 0.5 + TILE * layer as f32, Z_DISC_Y)
}

pub fn swatch_rect(index: usize) -> Rect {
    let (col, row) = Palette::position(index);
    Rect::from_min_size(
        pos2(col as f32 * SWATCH, PALETTE_TOP + row as f32 * SWATCH),
        Vec2::splat(SWATCH),
    )
}

/// Region under a panel-local point.
pub fn hit_test(local: Pos2) -> Option<PanelHit> {
    if local.x >= 0.0 && local.y >= 0.0 && local.x < GRID_EXTENT && local.y < GRID_EXTENT {
        return Some(PanelHit::Cell {
            row: (local.y / TILE) as usize,
            col: (local.x / TILE) as usize,
        });
    }
    if let Some(layer) = (0..GRID).find(|&i| y_disc_center(i).distance(local) <= DISC_RADIUS) {
        return Some(PanelHit::YLayer(layer));
    }
    if let Some(layer) = (0..GRID).find(|&i| z_disc_center(i).distance(local) <= DISC_RADIUS) {
        return Some(PanelHit::ZLayer(layer));
    }
    (0..PALETTE_LEN)
        .find(|&i| swatch_rect(i).contains(local))
        .map(PanelHit::Swatch)
}
