//! Page Packer: partitions a compliance matrix into fixed-capacity pages.
//!
//! Each colour row occupies a block of grid rows: its compliant results flow
//! left-to-right across `max_cols` columns and wrap. Blocks are packed greedily
//! in palette order and are never split across pages.
//!
//! # Packing rules
//! - `rows_needed = max(1, ceil(safe_count / max_cols))` (an empty block still
//!   needs a row for the "no compliant results" notice)
//! - A block that does not fit the current page starts a new page
//! - A block taller than a whole page is placed alone on its own page

use serde::{Deserialize, Serialize};

use crate::contrast::{ColorRow, ComplianceMatrix, PairResult};

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// A compliant result with its grid position inside its row's block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedResult {
    pub result: PairResult,
    pub column: usize,
    pub row_in_block: usize,
}

/// A colour row assigned to a page.
///
/// `row` is the complete matrix row (not-safe results included); `tiles` holds
/// only the compliant results, positioned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedRow {
    pub row: ColorRow,
    /// Starting grid row of this block within the page.
    pub row_offset: usize,
    pub rows_needed: usize,
    pub tiles: Vec<PlacedResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// 1-based page number.
    pub number: usize,
    /// Grid rows consumed by the blocks on this page.
    pub rows_used: usize,
    pub rows: Vec<PlacedRow>,
}

impl Page {
    fn new(number: usize) -> Self {
        Page {
            number,
            rows_used: 0,
            rows: Vec::new(),
        }
    }

    /// True when a single block alone exceeds the page capacity.
    pub fn is_oversized(&self, max_rows_per_page: usize) -> bool {
        self.rows_used > max_rows_per_page
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core functions
// ────────────────────────────────────────────────────────────────────────────

/// Grid rows a colour row's block needs at `max_cols` columns.
pub fn rows_needed(row: &ColorRow, max_cols: usize) -> usize {
    let cols = max_cols.max(1);
    row.safe_count().div_ceil(cols).max(1)
}

/// Packs `matrix` into pages of at most `max_rows_per_page` grid rows.
///
/// `max_cols` of 0 is treated as 1. An empty matrix yields no pages.
pub fn paginate(matrix: &ComplianceMatrix, max_cols: usize, max_rows_per_page: usize) -> Vec<Page> {
    let cols = max_cols.max(1);
    let mut pages = Vec::new();
    let mut current = Page::new(1);

    for row in &matrix.rows {
        let needed = rows_needed(row, cols);

        if !current.rows.is_empty() && current.rows_used + needed > max_rows_per_page {
            let next = Page::new(current.number + 1);
            pages.push(std::mem::replace(&mut current, next));
        }

        let placed = place_row(row, cols, current.rows_used, needed);
        current.rows_used += needed;
        current.rows.push(placed);
    }

    if !current.rows.is_empty() {
        pages.push(current);
    }

    pages
}

/// Assigns grid coordinates to a row's compliant results.
fn place_row(row: &ColorRow, cols: usize, row_offset: usize, rows_needed: usize) -> PlacedRow {
    let tiles = row
        .compliant_results()
        .enumerate()
        .map(|(k, result)| PlacedResult {
            result: result.clone(),
            column: k % cols,
            row_in_block: k / cols,
        })
        .collect();

    PlacedRow {
        row: row.clone(),
        row_offset,
        rows_needed,
        tiles,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
