use crate::grid::COLS;
use crate::grid::ROWS;
use crate::SURFACE_HEIGHT;
use crate::SURFACE_WIDTH;

/// One entry of the zoom table. Row and column ranges are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoomSpec {
    pub row_start: usize,
    pub row_end: usize,
    pub col_start: usize,
    pub col_end: usize,

    /// Side length of a cell on the surface, in pixels
    pub scale: u32,
}

impl ZoomSpec {
    pub const fn rows(&self) -> usize {
        self.row_end - self.row_start + 1
    }

    pub const fn cols(&self) -> usize {
        self.col_end - self.col_start + 1
    }

    /// Width and height of the area covered by the visible cells, in pixels
    pub const fn pixel_extent(&self) -> (u32, u32) {
        (
            self.cols() as u32 * self.scale,
            self.rows() as u32 * self.scale,
        )
    }
}

/// Nested views centred on the middle of the grid. Every level covers the whole surface.
const ZOOM_TABLE: [ZoomSpec; 5] = [
    ZoomSpec { row_start: 0, row_end: 63, col_start: 0, col_end: 127, scale: 8 },
    ZoomSpec { row_start: 16, row_end: 47, col_start: 32, col_end: 95, scale: 16 },
    ZoomSpec { row_start: 24, row_end: 39, col_start: 48, col_end: 79, scale: 32 },
    ZoomSpec { row_start: 28, row_end: 35, col_start: 56, col_end: 71, scale: 64 },
    ZoomSpec { row_start: 30, row_end: 33, col_start: 60, col_end: 67, scale: 128 },
];

const _: () = {
    let mut i = 0;
    while i < ZOOM_TABLE.len() {
        let z = ZOOM_TABLE[i];
        assert!(z.row_end < ROWS && z.col_end < COLS);
        assert!(z.cols() as u32 * z.scale <= SURFACE_WIDTH);
        assert!(z.rows() as u32 * z.scale <= SURFACE_HEIGHT);
        i += 1;
    }
};

/// Index into the zoom table. `0` shows the whole grid, [`ZoomLevel::MAX`] is the closest view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZoomLevel(u8);

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(1)
    }
}

impl ZoomLevel {
    pub const MIN: ZoomLevel = ZoomLevel(0);
    pub const MAX: ZoomLevel = ZoomLevel(ZOOM_TABLE.len() as u8 - 1);

    /// Returns `None` when `index` is past [`ZoomLevel::MAX`]
    pub fn new(index: u8) -> Option<Self> {
        (index <= Self::MAX.0).then_some(Self(index))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn spec(self) -> &'static ZoomSpec {
        &ZOOM_TABLE[self.0 as usize]
    }

    pub fn scale(self) -> u32 {
        self.spec().scale
    }

    /// One step closer, clamped at [`ZoomLevel::MAX`]
    pub fn zoom_in(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::MAX.0))
    }

    /// One step further out, clamped at [`ZoomLevel::MIN`]
    pub fn zoom_out(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// Maps a surface pixel to the absolute `(row, col)` of the grid cell drawn under it.
    ///
    /// Pixels outside the area covered by the visible cells map to nothing.
    pub fn cell_at(self, x: u32, y: u32) -> Option<(usize, usize)> {
        let spec = self.spec();
        let (w, h) = spec.pixel_extent();

        if x >= w || y >= h {
            return None;
        }

        let row = spec.row_start + (y / spec.scale) as usize;
        let col = spec.col_start + (x / spec.scale) as usize;

        Some((row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::ZoomLevel;

    #[test]
    fn zoom_clamps() {
        assert_eq!(ZoomLevel::MIN.zoom_out(), ZoomLevel::MIN);
        assert_eq!(ZoomLevel::MAX.zoom_in(), ZoomLevel::MAX);
        assert_eq!(ZoomLevel::default().zoom_in().index(), 2);
        assert_eq!(ZoomLevel::default().zoom_out().index(), 0);
        assert_eq!(ZoomLevel::new(5), None);
    }

    #[test]
    fn scales_are_powers_of_two() {
        let scales: Vec<u32> = (0..=4).filter_map(ZoomLevel::new).map(ZoomLevel::scale).collect();

        assert_eq!(scales, [8, 16, 32, 64, 128]);
    }

    #[test]
    fn every_level_fills_the_surface() {
        for level in (0..=4).filter_map(ZoomLevel::new) {
            assert_eq!(level.spec().pixel_extent(), (1024, 512), "level {}", level.index());
        }
    }

    #[test]
    fn cell_at_corners() {
        for level in (0..=4).filter_map(ZoomLevel::new) {
            let spec = level.spec();
            let (w, h) = spec.pixel_extent();

            assert_eq!(level.cell_at(0, 0), Some((spec.row_start, spec.col_start)));
            assert_eq!(level.cell_at(w - 1, h - 1), Some((spec.row_end, spec.col_end)));
            assert_eq!(level.cell_at(w, 0), None);
            assert_eq!(level.cell_at(0, h), None);
        }
    }

    #[test]
    fn cell_at_divides_by_scale() {
        let level = ZoomLevel::new(2).unwrap();

        // 32 pixels per cell, view starts at (24, 48)
        assert_eq!(level.cell_at(31, 31), Some((24, 48)));
        assert_eq!(level.cell_at(32, 95), Some((26, 49)));
    }
}
