//! TOML path and collider documents
//!
//! These stand in for the scene: a path document holds authored paths the
//! way a scene holds path containers, and a collider document lists the
//! walk colliders generated from them.

use crate::segments::ColliderPlacement;
use crate::types::{BezierHandles, BezierSettings, Path, PathKind, PathKindName, PathTable};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path as FsPath;
use waymark_core::{Result, Vec3};
use waymark_csv::write_text_file;

/// Root structure of a path document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathDocument {
    #[serde(default)]
    pub paths: Vec<PathDef>,
}

/// One path in a path document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathDef {
    pub name: String,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub kind: PathKindName,
    /// Container position; defaults to the first point
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<[f32; 3]>,
    #[serde(default)]
    pub points: Vec<[f32; 3]>,
    /// Bezier handles as `[lx, ly, lz, rx, ry, rz]`, one per point
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handles: Option<Vec<[f32; 6]>>,
    /// Bezier samples per segment, one per point
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Vec<u32>>,
}

impl PathDef {
    fn from_path(path: &Path) -> Self {
        let (handles, detail) = match &path.kind {
            PathKind::Standard => (None, None),
            PathKind::Bezier(payload) => (
                Some(
                    payload
                        .handles
                        .iter()
                        .map(|h| [h.left.x, h.left.y, h.left.z, h.right.x, h.right.y, h.right.z])
                        .collect(),
                ),
                Some(payload.detail.clone()),
            ),
        };
        Self {
            name: path.name.clone(),
            closed: path.closed,
            kind: path.kind.name(),
            origin: Some(path.origin.to_array()),
            points: path.points.iter().map(Vec3::to_array).collect(),
            handles,
            detail,
        }
    }

    fn into_path(self, settings: BezierSettings) -> Path {
        let mut path = Path::new(self.name, PathKind::new(self.kind, settings), Vec3::ZERO)
            .with_closed(self.closed);
        for point in &self.points {
            path.place(Vec3::from_array(*point));
        }

        if let PathKind::Bezier(payload) = &mut path.kind {
            match self.handles {
                Some(handles) if handles.len() == payload.handles.len() => {
                    payload.handles = handles
                        .iter()
                        .map(|h| BezierHandles {
                            left: Vec3::new(h[0], h[1], h[2]),
                            right: Vec3::new(h[3], h[4], h[5]),
                        })
                        .collect();
                }
                Some(handles) => log::warn!(
                    "Path '{}' has {} handles for {} points, regenerating",
                    path.name,
                    handles.len(),
                    payload.handles.len()
                ),
                None => {}
            }
            match self.detail {
                Some(detail) if detail.len() == payload.detail.len() => payload.detail = detail,
                Some(_) => log::warn!("Path '{}' detail length mismatch, using defaults", path.name),
                None => {}
            }
        }

        if let Some(origin) = self.origin {
            path.origin = Vec3::from_array(origin);
        }
        path.elevation = path.origin.y;
        path
    }
}

impl PathDocument {
    pub fn from_table(table: &PathTable) -> Self {
        Self {
            paths: table.iter().map(PathDef::from_path).collect(),
        }
    }

    /// Build a table; bezier paths without stored handles get fresh ones.
    pub fn into_table(self, settings: BezierSettings) -> PathTable {
        let mut table = PathTable::new();
        for def in self.paths {
            table.push(def.into_path(settings));
        }
        table
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn load<P: AsRef<FsPath>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn save<P: AsRef<FsPath>>(&self, path: P) -> Result<()> {
        write_text_file(path, &self.to_toml_string()?)
    }
}

/// Generated walk colliders, grouped under one parent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColliderDocument {
    pub parent: String,
    #[serde(default)]
    pub colliders: Vec<ColliderPlacement>,
}

impl ColliderDocument {
    pub fn new(parent: impl Into<String>, colliders: Vec<ColliderPlacement>) -> Self {
        Self {
            parent: parent.into(),
            colliders,
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save<P: AsRef<FsPath>>(&self, path: P) -> Result<()> {
        write_text_file(path, &self.to_toml_string()?)
    }
}
