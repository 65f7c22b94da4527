/// State management module
///
/// This module owns all viewer state, including:
/// - The fixed page catalog (catalog.rs)
/// - Zoom and pan transform transitions (transform.rs)
/// - Thumbnail drawer state (drawer.rs)

pub mod catalog;
pub mod drawer;
pub mod transform;
