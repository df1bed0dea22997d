//! Shared application service layer for sonoflow.
//!
//! This crate provides one interface for frontends, centralizing design
//! file handling, the recommendation -> sizing -> layout pipeline, and
//! exporting placed markers.

pub mod design_service;
pub mod error;
pub mod project_service;
pub mod query;

// Re-export key types for convenience
pub use design_service::{
    evaluate, evaluate_with_mount, recommend, BomLine, DesignReport, Recommendation,
};
pub use error::{AppError, AppResult};
pub use project_service::{load_design, save_design, starter_design, validate_design};
pub use query::{bracket_rows, marker_rows, markers_to_csv, BracketRow, MarkerRow};
