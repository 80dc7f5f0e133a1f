//! Waymark Core - Foundational types for waymark
//!
//! This crate provides the types that all other waymark crates depend on:
//! - `Vec3`, `Transform` - Spatial types
//! - Cubic bezier sampling used by bezier paths
//! - Error types and Result alias

pub mod bezier;
mod error;
mod types;

pub use error::{Result, WaymarkError};
pub use types::{Transform, Vec3};
