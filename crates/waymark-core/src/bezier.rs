//! Cubic bezier path sampling.
//!
//! A bezier path is a chain of waypoints, each carrying an incoming
//! (`left`) and outgoing (`right`) handle. Segment `i` runs from waypoint
//! `i` through its outgoing handle and the next waypoint's incoming handle.

use crate::Vec3;
use serde::{Deserialize, Serialize};

/// A waypoint on a bezier path with its two handles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierControlPoint {
    pub position: Vec3,
    /// Incoming handle
    pub left: Vec3,
    /// Outgoing handle
    pub right: Vec3,
}

impl BezierControlPoint {
    /// Waypoint with handles mirrored `offset` units along X.
    pub fn with_handle_offset(position: Vec3, offset: f32) -> Self {
        let shift = Vec3::RIGHT * offset;
        Self {
            position,
            left: position + shift,
            right: position - shift,
        }
    }
}

/// Cubic bezier interpolation between four points.
pub fn cubic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let u = 1.0 - t;
    let uu = u * u;
    let tt = t * t;
    p0 * (uu * u) + p1 * (3.0 * uu * t) + p2 * (3.0 * u * tt) + p3 * (tt * t)
}

/// Sample a bezier path into a polyline.
///
/// `detail[i]` is the number of samples taken on segment `i` (missing or
/// zero entries count as 1). Open paths end with the last waypoint; closed
/// paths add a wrap segment back to the first one and do not repeat it.
pub fn sample_bezier_path(points: &[BezierControlPoint], detail: &[u32], closed: bool) -> Vec<Vec3> {
    let n = points.len();
    if n < 2 {
        return points.iter().map(|p| p.position).collect();
    }

    let num_segs = if closed { n } else { n - 1 };
    let mut samples = Vec::new();

    for seg in 0..num_segs {
        let a = &points[seg];
        let b = &points[(seg + 1) % n];
        let steps = detail.get(seg).copied().unwrap_or(1).max(1);
        for j in 0..steps {
            let t = j as f32 / steps as f32;
            samples.push(cubic_bezier(a.position, a.right, b.left, b.position, t));
        }
    }

    if !closed {
        samples.push(points[n - 1].position);
    }

    samples
}
