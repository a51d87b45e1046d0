//! Document plan: everything a renderer needs to draw the report.
//!
//! The plan resolves grid coordinates to points and spells out every
//! level-dependent string, so the renderer only draws what it is given.

use serde::{Deserialize, Serialize};

use crate::contrast::{Color, WcagLevel};
use crate::layout::geometry::PageGeometry;
use crate::layout::packer::Page;

pub const DOCUMENT_TITLE: &str = "Accessible Colour Palette";
pub const PALETTE_HEADING: &str = "Palette tested";

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// A palette colour square with the colour string captioned underneath.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwatchPlacement {
    pub color: Color,
    pub caption: String,
    pub x: f32,
    pub y: f32,
}

/// A background square with the foreground colour's name drawn in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TilePlacement {
    pub background: Color,
    pub foreground: Color,
    pub label: String,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPlacement {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagePlan {
    pub number: usize,
    /// "Palette tested" and the results heading, repeated on every page.
    pub headings: Vec<TextPlacement>,
    pub swatches: Vec<SwatchPlacement>,
    pub tiles: Vec<TilePlacement>,
    pub notices: Vec<TextPlacement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentPlan {
    pub title: String,
    /// e.g. "WCAG 2.2 AA standards"
    pub standard: String,
    pub palette_heading: String,
    /// e.g. "AA compliant text colour combinations"
    pub results_heading: String,
    pub geometry: PageGeometry,
    pub pages: Vec<PagePlan>,
}

// ────────────────────────────────────────────────────────────────────────────
// Core functions
// ────────────────────────────────────────────────────────────────────────────

pub fn standard_heading(level: WcagLevel) -> String {
    format!("WCAG 2.2 {} standards", level.tag())
}

pub fn results_heading(level: WcagLevel) -> String {
    format!("{} compliant text colour combinations", level.tag())
}

pub fn no_results_notice(level: WcagLevel) -> String {
    format!(
        "There are no {} compliant results for this colour.",
        level.tag()
    )
}

/// Resolves packed pages into point placements on `geometry`.
pub fn plan_document(pages: &[Page], level: WcagLevel, geometry: &PageGeometry) -> DocumentPlan {
    let pages = pages
        .iter()
        .map(|page| plan_page(page, level, geometry))
        .collect();

    DocumentPlan {
        title: DOCUMENT_TITLE.to_string(),
        standard: standard_heading(level),
        palette_heading: PALETTE_HEADING.to_string(),
        results_heading: results_heading(level),
        geometry: geometry.clone(),
        pages,
    }
}

fn plan_page(page: &Page, level: WcagLevel, geometry: &PageGeometry) -> PagePlan {
    let mut swatches = Vec::with_capacity(page.rows.len());
    let mut tiles = Vec::new();
    let mut notices = Vec::new();

    for placed in &page.rows {
        let background = &placed.row.background;
        let origin = geometry.swatch_origin(placed.row_offset);
        swatches.push(SwatchPlacement {
            color: background.clone(),
            caption: background.to_string(),
            x: origin.x,
            y: origin.y,
        });

        if placed.tiles.is_empty() {
            notices.push(TextPlacement {
                text: no_results_notice(level),
                x: geometry.results_x,
                y: origin.y,
            });
            continue;
        }

        tiles.extend(placed.tiles.iter().map(|tile| {
            let p = geometry.tile_origin(placed.row_offset, tile.column, tile.row_in_block);
            TilePlacement {
                background: background.clone(),
                foreground: tile.result.foreground.clone(),
                label: tile.result.label.clone(),
                x: p.x,
                y: p.y,
            }
        }));
    }

    let headings = vec![
        TextPlacement {
            text: PALETTE_HEADING.to_string(),
            x: geometry.palette_x,
            y: geometry.headings_y,
        },
        TextPlacement {
            text: results_heading(level),
            x: geometry.results_x,
            y: geometry.headings_y,
        },
    ];

    PagePlan {
        number: page.number,
        headings,
        swatches,
        tiles,
        notices,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::evaluate;
    use crate::layout::geometry::a4_geometry;
    use crate::layout::packer::paginate;

    fn plan(colors: &[&str], level: WcagLevel) -> DocumentPlan {
        let palette: Vec<Color> = colors.iter().map(|c| Color::from(*c)).collect();
        let matrix = evaluate(&palette, level).unwrap();
        let geometry = a4_geometry();
        let pages = paginate(&matrix, geometry.max_cols(), geometry.max_rows_per_page());
        plan_document(&pages, level, &geometry)
    }

    #[test]
    fn test_headings_follow_level() {
        let aa = plan(&["#000", "#fff"], WcagLevel::AA);
        assert_eq!(aa.standard, "WCAG 2.2 AA standards");
        assert_eq!(aa.results_heading, "AA compliant text colour combinations");

        let aaa = plan(&["#000", "#fff"], WcagLevel::AAA);
        assert_eq!(aaa.standard, "WCAG 2.2 AAA standards");
        assert_eq!(aaa.results_heading, "AAA compliant text colour combinations");
        assert_eq!(aaa.title, DOCUMENT_TITLE);

        let headings = &aaa.pages[0].headings;
        assert_eq!(headings[0].text, "Palette tested");
        assert_eq!((headings[0].x, headings[0].y), (35.0, 207.0));
        assert_eq!(headings[1].text, aaa.results_heading);
        assert_eq!(headings[1].x, 145.0);
    }

    #[test]
    fn test_black_and_white_tiles() {
        let doc = plan(&["#000000", "#ffffff"], WcagLevel::AA);
        assert_eq!(doc.pages.len(), 1);
        let page = &doc.pages[0];

        assert_eq!(page.swatches.len(), 2);
        assert_eq!(page.swatches[0].caption, "#000000");
        assert_eq!((page.swatches[0].x, page.swatches[0].y), (35.0, 234.0));
        assert_eq!((page.swatches[1].x, page.swatches[1].y), (35.0, 324.0));

        assert_eq!(page.tiles.len(), 2);
        assert_eq!(page.tiles[0].background.as_str(), "#000000");
        assert_eq!(page.tiles[0].foreground.as_str(), "#ffffff");
        assert_eq!(page.tiles[0].label, "AA Safe");
        assert_eq!((page.tiles[0].x, page.tiles[0].y), (145.0, 234.0));
        assert!(page.notices.is_empty());
    }

    #[test]
    fn test_notice_for_row_without_compliant_results() {
        let doc = plan(&["#777777"], WcagLevel::AAA);
        let page = &doc.pages[0];
        assert!(page.tiles.is_empty());
        assert_eq!(page.notices.len(), 1);
        assert_eq!(
            page.notices[0].text,
            "There are no AAA compliant results for this colour."
        );
        assert_eq!((page.notices[0].x, page.notices[0].y), (145.0, 234.0));
    }

    #[test]
    fn test_wrapped_tiles_move_down_a_row() {
        // White against eight dark colours: every pair is compliant, 7 results wrap.
        let colors = [
            "#ffffff", "#000000", "#111111", "#222222", "#333333", "#1a1a1a", "#0a0a0a", "#2b2b2b",
        ];
        let doc = plan(&colors, WcagLevel::AA);
        let page = &doc.pages[0];
        let white_tiles: Vec<&TilePlacement> = page
            .tiles
            .iter()
            .filter(|t| t.background.as_str() == "#ffffff")
            .collect();
        assert_eq!(white_tiles.len(), 7);
        assert_eq!((white_tiles[5].x, white_tiles[5].y), (145.0 + 5.0 * 72.0, 234.0));
        assert_eq!((white_tiles[6].x, white_tiles[6].y), (145.0, 324.0));
        // the next swatch starts below the two-row block
        assert_eq!(page.swatches[1].y, 234.0 + 2.0 * 90.0);
    }

    #[test]
    fn test_empty_palette_has_no_pages() {
        let doc = plan(&[], WcagLevel::AA);
        assert!(doc.pages.is_empty());
    }
}
