//! Reference page geometry for the palette report.
//!
//! All measurements are PDF points (1/72"). The defaults describe an A4 page
//! with a coloured header band, a "Palette tested" swatch column on the left,
//! result tiles to its right, and a footer band at the bottom.
//!
//! ```text
//! y=0    ┌──────────────── header ────────────────┐
//! y=186  ├────────────────────────────────────────┤
//! y=207  │ Palette tested   AA compliant ...      │
//! y=234  │ [sw]          [t][t][t][t][t][t]       │  ← grid row 0
//! y=324  │ [sw]          [t][t]                   │  ← grid row 1
//!        │  ...                                   │
//! y=785  ├──────────────── footer ────────────────┤
//! y=842  └────────────────────────────────────────┘
//!        x=35           x=145, pitch 72
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Page dimensions and grid pitches used to place swatches and tiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub header_height: f32,
    /// Baseline of the "Palette tested" and results headings.
    pub headings_y: f32,
    /// Left edge of the swatch column.
    pub palette_x: f32,
    /// Left edge of the first result column.
    pub results_x: f32,
    /// Top of grid row 0.
    pub content_top: f32,
    /// Top of the footer band; blocks must end above it.
    pub footer_top: f32,
    /// Side length of swatches and tiles.
    pub tile_size: f32,
    /// Horizontal distance between tile origins.
    pub column_pitch: f32,
    /// Vertical distance between grid rows (tile + caption).
    pub row_pitch: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        a4_geometry()
    }
}

/// A4 portrait (595 × 842pt) reference layout.
pub fn a4_geometry() -> PageGeometry {
    PageGeometry {
        page_width: 595.0,
        page_height: 842.0,
        header_height: 186.0,
        headings_y: 207.0,
        palette_x: 35.0,
        results_x: 145.0,
        content_top: 234.0,
        footer_top: 785.0,
        tile_size: 60.0,
        column_pitch: 72.0,
        row_pitch: 90.0,
    }
}

impl PageGeometry {
    /// Number of result columns that fit between `results_x` and the page edge.
    ///
    /// The last tile does not need its trailing gutter.
    pub fn max_cols(&self) -> usize {
        let gutter = self.column_pitch - self.tile_size;
        let usable = self.page_width - self.results_x + gutter;
        (usable / self.column_pitch).floor().max(0.0) as usize
    }

    /// Number of grid rows between `content_top` and the footer.
    pub fn max_rows_per_page(&self) -> usize {
        let usable = self.footer_top - self.content_top;
        (usable / self.row_pitch).floor().max(0.0) as usize
    }

    /// Top-left of the swatch for a block starting at grid row `row_offset`.
    pub fn swatch_origin(&self, row_offset: usize) -> Point {
        Point {
            x: self.palette_x,
            y: self.grid_row_y(row_offset),
        }
    }

    /// Top-left of a result tile.
    pub fn tile_origin(&self, row_offset: usize, column: usize, row_in_block: usize) -> Point {
        Point {
            x: self.results_x + column as f32 * self.column_pitch,
            y: self.grid_row_y(row_offset + row_in_block),
        }
    }

    fn grid_row_y(&self, grid_row: usize) -> f32 {
        self.content_top + grid_row as f32 * self.row_pitch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_capacity_is_six_by_six() {
        let geometry = a4_geometry();
        assert_eq!(geometry.max_cols(), 6);
        assert_eq!(geometry.max_rows_per_page(), 6);
    }

    #[test]
    fn test_last_column_fits_on_page() {
        let geometry = a4_geometry();
        let last = geometry.tile_origin(0, geometry.max_cols() - 1, 0);
        assert!(last.x + geometry.tile_size <= geometry.page_width);
        let overflow = geometry.tile_origin(0, geometry.max_cols(), 0);
        assert!(overflow.x + geometry.tile_size > geometry.page_width);
    }

    #[test]
    fn test_last_row_ends_above_footer() {
        let geometry = a4_geometry();
        let last = geometry.swatch_origin(geometry.max_rows_per_page() - 1);
        assert!(last.y + geometry.row_pitch <= geometry.footer_top);
    }

    #[test]
    fn test_tile_origin_accounts_for_block_offset() {
        let geometry = a4_geometry();
        let p = geometry.tile_origin(2, 3, 1);
        assert_eq!(p, Point { x: 145.0 + 3.0 * 72.0, y: 234.0 + 3.0 * 90.0 });
        assert_eq!(geometry.swatch_origin(2), Point { x: 35.0, y: 414.0 });
    }

    #[test]
    fn test_degenerate_geometry_has_zero_capacity() {
        let geometry = PageGeometry {
            footer_top: 200.0,
            results_x: 600.0,
            ..a4_geometry()
        };
        assert_eq!(geometry.max_rows_per_page(), 0);
        assert_eq!(geometry.max_cols(), 0);
    }
}
