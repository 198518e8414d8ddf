//! Orthogonal slice editing: which layer the 2D grid shows and how its
//! (row, col) cells map back into the lattice.

use bevy::prelude::*;

use crate::model::lattice::{CellIndex, Edit, Lattice, MAX_INDEX};

/// The slicing plane shown in the 2D grid. Only one axis can be fixed at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayerSelection {
    /// Horizontal slice at a fixed y; rows walk z.
    Y(usize),
    /// Depth slice at a fixed z; rows walk y.
    Z(usize),
    #[default]
    None,
}

impl LayerSelection {
    pub fn y_layer(self) -> Option<usize> {
        match self {
            Self::Y(i) => Some(i),
            _ => None,
        }
    }

    pub fn z_layer(self) -> Option<usize> {
        match self {
            Self::Z(i) => Some(i),
            _ => None,
        }
    }
}

impl std::fmt::Display for LayerSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Y(i) => write!(f, "Y {i}"),
            Self::Z(i) => write!(f, "Z {i}"),
            Self::None => f.write_str("none"),
        }
    }
}

/// Which pointer action is editing a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintAction {
    /// Primary button: paint with the pen.
    Paint,
    /// Secondary button: erase.
    Erase,
}

/// Bevy resource for the layer-slice editor.
#[derive(Resource, Clone, Debug, PartialEq, Eq)]
pub struct LayerView {
    selection: LayerSelection,
}

impl Default for LayerView {
    fn default() -> Self {
        Self::new(LayerSelection::Y(MAX_INDEX))
    }
}

impl LayerView {
    pub fn new(selection: LayerSelection) -> Self {
        Self {
            selection: clamp_selection(selection),
        }
    }

    pub fn selection(&self) -> LayerSelection {
        self.selection
    }

    /// Shows the horizontal slice `i`, dropping any depth slice.
    pub fn select_y(&mut self, i: usize) {
        debug_assert!(i <= MAX_INDEX, "y layer {i} outside the lattice");
        self.selection = LayerSelection::Y(i.min(MAX_INDEX));
    }

    /// Shows the depth slice `i`, dropping any horizontal slice.
    pub fn select_z(&mut self, i: usize) {
        debug_assert!(i <= MAX_INDEX, "z layer {i} outside the lattice");
        self.selection = LayerSelection::Z(i.min(MAX_INDEX));
    }

    /// Lattice cell under grid position (row, col). Columns always walk x.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<CellIndex> {
        match self.selection {
            LayerSelection::Y(y) => CellIndex::new(y, row, col),
            LayerSelection::Z(z) => CellIndex::new(row, z, col),
            LayerSelection::None => None,
        }
    }

    /// The neighbouring slice previewed under the grid: one layer below for
    /// Y slices, one layer further back for Z slices.
    fn adjacent(&self) -> Option<LayerSelection> {
        match self.selection {
            LayerSelection::Y(y) if y < MAX_INDEX => Some(LayerSelection::Y(y + 1)),
            LayerSelection::Z(z) if z > 0 => Some(LayerSelection::Z(z - 1)),
            _ => None,
        }
    }

    /// Color of the adjacent slice at (row, col), if that slice exists and is filled there.
    pub fn ghost_cell(&self, lattice: &Lattice, row: usize, col: usize) -> Option<Color> {
        let adjacent = LayerView {
            selection: self.adjacent()?,
        };
        lattice.get(adjacent.cell_at(row, col)?)
    }

    /// The edit a pointer action on (row, col) produces. Nothing is edited
    /// while the trackball is being dragged.
    pub fn edit_at(
        &self,
        row: usize,
        col: usize,
        action: PaintAction,
        pen: Color,
        dragging: bool,
    ) -> Option<Edit> {
        if dragging {
            return None;
        }
        let cell = self.cell_at(row, col)?;
        let color = match action {
            PaintAction::Paint => Some(pen),
            PaintAction::Erase => None,
        };
        Some(Edit { cell, color })
    }

    /// Applies a pointer action directly. Returns whether the lattice changed.
    pub fn paint(
        &self,
        lattice: &mut Lattice,
        row: usize,
        col: usize,
        action: PaintAction,
        pen: Color,
        dragging: bool,
    ) -> bool {
        self.edit_at(row, col, action, pen, dragging)
            .is_some_and(|edit| lattice.apply(edit))
    }
}

fn clamp_selection(selection: LayerSelection) -> LayerSelection {
    match selection {
        LayerSelection::Y(i) => LayerSelection::Y(i.min(MAX_INDEX)),
        LayerSelection::Z(i) => LayerSelection::Z(i.min(MAX_INDEX)),
        LayerSelection::None => LayerSelection::None,
    }
}
