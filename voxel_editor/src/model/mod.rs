mod layers;
mod lattice;
mod palette;

pub use lattice::{CellIndex, Edit, Lattice, CELL_COUNT, GRID, MAX_INDEX};
pub use layers::{LayerSelection, LayerView, PaintAction};
pub use palette::{Palette, PenColor, DEFAULT_PEN, PALETTE_COLUMNS, PALETTE_LEN, PALETTE_ROWS};
