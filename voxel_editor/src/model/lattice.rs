//! The 11×11×11 block lattice: fixed-size, flat, one optional color per cell.

use bevy::prelude::*;

/// Cells along each axis.
pub const GRID: usize = 11;
/// Largest valid coordinate on any axis.
pub const MAX_INDEX: usize = GRID - 1;
/// Total number of cells.
pub const CELL_COUNT: usize = GRID * GRID * GRID;

const CENTER: f32 = (GRID / 2) as f32;

/// A lattice coordinate, always within `0..=10` on every axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellIndex {
    y: usize,
    z: usize,
    x: usize,
}

impl CellIndex {
    /// Checked constructor for coordinates that did not come from a bounded UI region.
    pub fn new(y: usize, z: usize, x: usize) -> Option<Self> {
        (y <= MAX_INDEX && z <= MAX_INDEX && x <= MAX_INDEX).then_some(Self { y, z, x })
    }

    pub fn y(self) -> usize {
        self.y
    }

    pub fn z(self) -> usize {
        self.z
    }

    pub fn x(self) -> usize {
        self.x
    }

    fn offset(self) -> usize {
        assert!(
            self.y <= MAX_INDEX && self.z <= MAX_INDEX && self.x <= MAX_INDEX,
            "cell {self:?} outside the lattice"
        );
        (self.y * GRID + self.z) * GRID + self.x
    }

    fn from_offset(offset: usize) -> Self {
        Self {
            y: offset / (GRID * GRID),
            z: (offset / GRID) % GRID,
            x: offset % GRID,
        }
    }

    /// Center of the cell in editor space, where cell (5,5,5) sits at the origin.
    /// Editor space is left-handed: +y up, +z away from the viewer.
    pub fn editor_position(self) -> Vec3 {
        Vec3::new(
            self.x as f32 - CENTER,
            CENTER - self.y as f32,
            CENTER - self.z as f32,
        )
    }

    /// Same point in Bevy's right-handed world.
    pub fn world_position(self) -> Vec3 {
        let p = self.editor_position();
        Vec3::new(p.x, p.y, -p.z)
    }
}

/// One write to the lattice: `Some` paints, `None` clears.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edit {
    pub cell: CellIndex,
    pub color: Option<Color>,
}

/// Bevy resource holding every cell of the model. Starts empty.
#[derive(Resource, Clone)]
pub struct Lattice {
    cells: Box<[Option<Color>; CELL_COUNT]>,
}

impl Default for Lattice {
    fn default() -> Self {
        Self {
            cells: Box::new([None; CELL_COUNT]),
        }
    }
}

impl Lattice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, cell: CellIndex) -> Option<Color> {
        self.cells[cell.offset()]
    }

    /// Occupy the cell with `color`.
    pub fn set(&mut self, cell: CellIndex, color: Color) {
        self.cells[cell.offset()] = Some(color);
    }

    pub fn clear(&mut self, cell: CellIndex) {
        self.cells[cell.offset()] = None;
    }

    /// Applies an edit. Returns whether the cell actually changed.
    pub fn apply(&mut self, edit: Edit) -> bool {
        let slot = &mut self.cells[edit.cell.offset()];
        if *slot == edit.color {
            return false;
        }
        *slot = edit.color;
        true
    }

    /// Whether applying `edit` would change anything.
    pub fn differs(&self, edit: &Edit) -> bool {
        self.get(edit.cell) != edit.color
    }

    /// Occupied cells in (y, z, x) order.
    pub fn occupied(&self) -> impl Iterator<Item = (CellIndex, Color)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(offset, cell)| cell.map(|color| (CellIndex::from_offset(offset), color)))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}
