//! Waymark Path - waypoint path tables
//!
//! A [`PathTable`] is an ordered list of named paths. Tables are built
//! fresh for each operation: imported from CSV, read from a TOML path
//! document, or authored point by point, and then exported, written out,
//! or turned into walk-collider placements.

pub mod authoring;
pub mod config;
pub mod document;
pub mod export;
pub mod import;
pub mod segments;
mod types;

pub use authoring::PathAuthoring;
pub use config::WaymarkConfig;
pub use document::{ColliderDocument, PathDef, PathDocument};
pub use export::{export_file, export_rows, export_table, HEADER};
pub use import::{import_file, import_table, ImportOptions, ImportReport};
pub use segments::{collider_placements, segment_count, segments, ColliderPlacement, Segment};
pub use types::{
    BezierHandles, BezierPayload, BezierSettings, Path, PathKind, PathKindName, PathTable, Point,
    MIN_USABLE_POINTS,
};
