//! Axum route handlers for the Palette API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::{Config, LayoutConfig};
use crate::contrast::{evaluate, Color, ColorRow, WcagLevel};
use crate::errors::AppError;
use crate::layout::{paginate, plan_document, DocumentPlan, Page};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PaletteRequest {
    pub palette: Option<Vec<Color>>,
    #[serde(rename = "levelAAA", default)]
    pub level_aaa: bool,
}

#[derive(Debug, Serialize)]
pub struct ContrastResponse {
    pub level: WcagLevel,
    pub total_pairs: usize,
    pub matrix: Vec<ColorRow>,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub level: WcagLevel,
    pub layout: LayoutConfig,
    pub page_count: usize,
    pub pages: Vec<Page>,
    pub document: DocumentPlan,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/palette/contrast
///
/// Returns the full pairwise compliance matrix for the submitted palette.
pub async fn handle_contrast(
    State(state): State<AppState>,
    payload: Result<Json<PaletteRequest>, JsonRejection>,
) -> Result<Json<ContrastResponse>, AppError> {
    let (palette, level) = decode_request(payload, &state.config)?;
    info!("Evaluating {} colours at {}", palette.len(), level.tag());

    let matrix = run_blocking(move || Ok(evaluate(&palette, level)?)).await?;
    if matrix.is_empty() {
        debug!("Empty palette received; returning an empty matrix");
    }

    Ok(Json(ContrastResponse {
        level,
        total_pairs: matrix.total_pairs(),
        matrix: matrix.rows,
    }))
}

/// POST /api/v1/palette/report
///
/// Evaluates the palette, packs the results into pages and resolves the
/// document plan for the renderer.
pub async fn handle_report(
    State(state): State<AppState>,
    payload: Result<Json<PaletteRequest>, JsonRejection>,
) -> Result<Json<ReportResponse>, AppError> {
    let (palette, level) = decode_request(payload, &state.config)?;
    let layout = state.config.layout;
    let geometry = state.geometry.clone();

    let (pages, document) = run_blocking(move || {
        let matrix = evaluate(&palette, level)?;
        let pages = paginate(&matrix, layout.max_cols, layout.max_rows_per_page);
        let document = plan_document(&pages, level, &geometry);
        Ok((pages, document))
    })
    .await?;

    let report_id = Uuid::new_v4();
    for page in pages
        .iter()
        .filter(|page| page.is_oversized(layout.max_rows_per_page))
    {
        warn!(
            "Report {report_id}: page {} holds a single block of {} rows (capacity {})",
            page.number, page.rows_used, layout.max_rows_per_page
        );
    }
    info!(
        "Report {report_id}: {} pages at {} ({}x{} grid)",
        pages.len(),
        level.tag(),
        layout.max_cols,
        layout.max_rows_per_page
    );

    Ok(Json(ReportResponse {
        report_id,
        generated_at: Utc::now(),
        level,
        layout,
        page_count: pages.len(),
        pages,
        document,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

/// Validates the request body and resolves the WCAG level.
fn decode_request(
    payload: Result<Json<PaletteRequest>, JsonRejection>,
    config: &Config,
) -> Result<(Vec<Color>, WcagLevel), AppError> {
    let Json(request) = payload.map_err(|rejection| {
        AppError::Validation(format!(
            "Use POST with a JSON palette body: {}",
            rejection.body_text()
        ))
    })?;

    let palette = request
        .palette
        .ok_or_else(|| AppError::Validation("No palette was received".to_string()))?;

    if palette.len() > config.max_palette_size {
        return Err(AppError::Validation(format!(
            "Palette has {} colours; at most {} are allowed",
            palette.len(),
            config.max_palette_size
        )));
    }

    Ok((palette, WcagLevel::from_aaa_flag(request.level_aaa)))
}

/// Runs CPU-bound work on the blocking pool so the scheduler is never stalled.
async fn run_blocking<T, F>(work: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::Internal(anyhow::Error::new(e).context("palette worker failed")))?
}
