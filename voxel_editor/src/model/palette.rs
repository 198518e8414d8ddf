//! Fixed paint palette and the active pen color.

use bevy::prelude::*;

/// Swatches per palette row.
pub const PALETTE_COLUMNS: usize = 5;
/// Palette rows.
pub const PALETTE_ROWS: usize = 3;
/// Total swatches.
pub const PALETTE_LEN: usize = PALETTE_COLUMNS * PALETTE_ROWS;
/// Row 1, column 0: the 150° hue.
pub const DEFAULT_PEN: usize = PALETTE_COLUMNS;

const HUE_STEP: f32 = 30.0;
const HUE_SWATCHES: usize = 12;
const GRAYS: [u8; 3] = [255, 160, 40];

/// Twelve hues 30° apart followed by white, gray and dark gray, row-major.
#[derive(Clone, Debug)]
pub struct Palette {
    colors: [Color; PALETTE_LEN],
}

impl Default for Palette {
    fn default() -> Self {
        let colors = std::array::from_fn(|i| {
            if i < HUE_SWATCHES {
                Color::hsv(i as f32 * HUE_STEP, 1.0, 1.0)
            } else {
                let v = GRAYS[i - HUE_SWATCHES];
                Color::srgb_u8(v, v, v)
            }
        });
        Self { colors }
    }
}

impl Palette {
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied()
    }

    /// Grid position (column, row) of a swatch.
    pub fn position(index: usize) -> (usize, usize) {
        (index % PALETTE_COLUMNS, index / PALETTE_COLUMNS)
    }
}

/// Bevy resource: the palette and which swatch the pen currently holds.
#[derive(Resource, Clone, Debug)]
pub struct PenColor {
    palette: Palette,
    selected: usize,
}

impl Default for PenColor {
    fn default() -> Self {
        Self::new(DEFAULT_PEN)
    }
}

impl PenColor {
    /// Starts on `index`, or the default swatch if `index` is outside the palette.
    pub fn new(index: usize) -> Self {
        let palette = Palette::default();
        let selected = if index < palette.len() { index } else { DEFAULT_PEN };
        Self { palette, selected }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn color(&self) -> Color {
        self.palette.colors[self.selected]
    }

    /// Switches to swatch `index`. Ignores indices outside the palette.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.palette.len() || index == self.selected {
            return false;
        }
        self.selected = index;
        true
    }
}
