use std::sync::Arc;

use crate::config::Config;
use crate::layout::PageGeometry;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Read-only after startup. Per-request settings such as the WCAG level travel
/// with the request and are never stored here.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Geometry the document plan is resolved against.
    pub geometry: Arc<PageGeometry>,
}

impl AppState {
    pub fn new(config: Config, geometry: PageGeometry) -> Self {
        AppState {
            config: Arc::new(config),
            geometry: Arc::new(geometry),
        }
    }
}
