//! Path and path table types

use serde::{Deserialize, Serialize};
use waymark_core::bezier::{sample_bezier_path, BezierControlPoint};
use waymark_core::Vec3;

/// A waypoint position
pub type Point = Vec3;

/// Minimum number of points for a path to be usable
pub const MIN_USABLE_POINTS: usize = 2;

/// Which kind of path to create, as written in config and path documents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKindName {
    #[default]
    Standard,
    Bezier,
}

/// Settings applied to newly placed bezier points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierSettings {
    /// Samples per segment
    #[serde(default = "default_detail")]
    pub detail: u32,
    /// Handle distance along X
    #[serde(default = "default_handle_offset")]
    pub handle_offset: f32,
}

fn default_detail() -> u32 {
    10
}

fn default_handle_offset() -> f32 {
    2.0
}

impl Default for BezierSettings {
    fn default() -> Self {
        Self {
            detail: default_detail(),
            handle_offset: default_handle_offset(),
        }
    }
}

/// Incoming and outgoing handle of one bezier waypoint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierHandles {
    pub left: Vec3,
    pub right: Vec3,
}

/// Bezier-specific data, one entry per waypoint
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BezierPayload {
    pub settings: BezierSettings,
    pub handles: Vec<BezierHandles>,
    pub detail: Vec<u32>,
}

/// Path flavour, fixed when the path is begun
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PathKind {
    #[default]
    Standard,
    Bezier(BezierPayload),
}

impl PathKind {
    pub fn new(name: PathKindName, settings: BezierSettings) -> Self {
        match name {
            PathKindName::Standard => PathKind::Standard,
            PathKindName::Bezier => PathKind::Bezier(BezierPayload {
                settings,
                ..Default::default()
            }),
        }
    }

    pub fn name(&self) -> PathKindName {
        match self {
            PathKind::Standard => PathKindName::Standard,
            PathKind::Bezier(_) => PathKindName::Bezier,
        }
    }
}

/// A named, ordered sequence of waypoints
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub name: String,
    pub kind: PathKind,
    /// Whether the last point connects back to the first
    pub closed: bool,
    /// Baseline elevation given to every imported point
    pub elevation: f32,
    /// World position of the path container
    pub origin: Vec3,
    pub points: Vec<Point>,
}

impl Path {
    pub fn new(name: impl Into<String>, kind: PathKind, origin: Vec3) -> Self {
        Self {
            name: name.into(),
            kind,
            closed: false,
            elevation: origin.y,
            origin,
            points: Vec::new(),
        }
    }

    pub fn with_closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    /// Append a waypoint.
    ///
    /// The first waypoint also moves the path origin onto itself. Bezier
    /// waypoints get mirrored handles and the default segment detail.
    pub fn place(&mut self, point: Point) {
        if self.points.is_empty() {
            self.origin = point;
        }
        if let PathKind::Bezier(payload) = &mut self.kind {
            let cp = BezierControlPoint::with_handle_offset(point, payload.settings.handle_offset);
            payload.handles.push(BezierHandles {
                left: cp.left,
                right: cp.right,
            });
            payload.detail.push(payload.settings.detail);
        }
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// At least two points, enough to form a segment
    pub fn is_usable(&self) -> bool {
        self.points.len() >= MIN_USABLE_POINTS
    }

    /// Waypoints paired with their handles, for bezier paths only
    pub fn control_points(&self) -> Option<Vec<BezierControlPoint>> {
        match &self.kind {
            PathKind::Standard => None,
            PathKind::Bezier(payload) => Some(
                self.points
                    .iter()
                    .zip(&payload.handles)
                    .map(|(&position, h)| BezierControlPoint {
                        position,
                        left: h.left,
                        right: h.right,
                    })
                    .collect(),
            ),
        }
    }

    /// The points that make up the path as it is walked.
    ///
    /// Standard paths return their waypoints; bezier paths return the
    /// sampled curve.
    pub fn path_points(&self) -> Vec<Point> {
        match &self.kind {
            PathKind::Standard => self.points.clone(),
            PathKind::Bezier(payload) => {
                let controls = self.control_points().unwrap_or_default();
                sample_bezier_path(&controls, &payload.detail, self.closed)
            }
        }
    }
}

/// Ordered collection of paths; insertion order is declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathTable {
    origin: Vec3,
    paths: Vec<Path>,
}

impl PathTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table whose new paths start at `origin`
    pub fn with_origin(origin: Vec3) -> Self {
        Self {
            origin,
            paths: Vec::new(),
        }
    }

    /// Start a new, empty path at the table origin and return it.
    pub fn begin_path(&mut self, name: impl Into<String>, kind: PathKind) -> &mut Path {
        let path = Path::new(name, kind, self.origin);
        self.paths.push(path);
        let last = self.paths.len() - 1;
        &mut self.paths[last]
    }

    pub fn push(&mut self, path: Path) {
        self.paths.push(path);
    }

    pub fn remove(&mut self, index: usize) -> Option<Path> {
        if index < self.paths.len() {
            Some(self.paths.remove(index))
        } else {
            None
        }
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.paths.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Path> {
        self.paths.get_mut(index)
    }

    /// First path with the given name
    pub fn find(&self, name: &str) -> Option<&Path> {
        self.paths.iter().find(|p| p.name == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.paths.iter().position(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Path> {
        self.paths.iter()
    }

    pub fn total_points(&self) -> usize {
        self.paths.iter().map(Path::len).sum()
    }

    /// Paths with enough points to be consumed
    pub fn usable_paths(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().filter(|p| p.is_usable())
    }

    /// Fail on the first path with fewer than two points.
    pub fn validate(&self) -> waymark_core::Result<()> {
        match self.paths.iter().find(|p| !p.is_usable()) {
            Some(path) => Err(waymark_core::WaymarkError::NotEnoughPoints {
                name: path.name.clone(),
                count: path.len(),
            }),
            None => Ok(()),
        }
    }
}

impl<'a> IntoIterator for &'a PathTable {
    type Item = &'a Path;
    type IntoIter = std::slice::Iter<'a, Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}
