// Report layout: packs the compliance matrix into pages and resolves the
// packed grid onto the reference page geometry.
// Packing is pure and CPU-bound; handlers run it inside tokio::task::spawn_blocking.

pub mod document;
pub mod geometry;
pub mod packer;

// Re-export the public API consumed by the handlers and config.
pub use document::{plan_document, DocumentPlan};
pub use geometry::{a4_geometry, PageGeometry};
pub use packer::{paginate, Page};
