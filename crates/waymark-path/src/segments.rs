//! Segment topology and walk-collider placement.
//!
//! A closed path has one segment per point, the last wrapping back to the
//! first. An open path has one fewer. Paths with fewer than two points
//! have no segments.

use crate::types::{Path, PathTable, Point, MIN_USABLE_POINTS};
use serde::{Deserialize, Serialize};
use waymark_core::{Transform, Vec3};

/// One straight piece of a path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub index: usize,
    pub start: Point,
    pub end: Point,
    pub midpoint: Point,
    pub length: f32,
}

impl Segment {
    pub fn between(index: usize, start: Point, end: Point) -> Self {
        Self {
            index,
            start,
            end,
            midpoint: start.midpoint(&end),
            length: start.distance(&end),
        }
    }

    /// Placement for a collider spanning this segment.
    ///
    /// Local +Z faces the end point at the midpoint's height, so the
    /// collider never pitches. `base_scale.z` is replaced by the length.
    pub fn transform(&self, base_scale: Vec3) -> Transform {
        Transform::from_position(self.midpoint)
            .looking_at(self.end.with_y(self.midpoint.y))
            .with_scale(base_scale.with_z(self.length))
    }
}

/// Number of segments `point_count` points form.
pub fn segment_count(point_count: usize, closed: bool) -> usize {
    if point_count < MIN_USABLE_POINTS {
        0
    } else if closed {
        point_count
    } else {
        point_count - 1
    }
}

/// Segments through `points` in order.
pub fn segments(points: &[Point], closed: bool) -> Vec<Segment> {
    let n = points.len();
    (0..segment_count(n, closed))
        .map(|i| Segment::between(i, points[i], points[(i + 1) % n]))
        .collect()
}

impl Path {
    /// Segments along [`Path::path_points`].
    pub fn segments(&self) -> Vec<Segment> {
        segments(&self.path_points(), self.closed)
    }
}

/// A collider to place for one segment of one path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColliderPlacement {
    pub path: String,
    pub segment: usize,
    pub transform: Transform,
}

/// Collider placements for every segment of every path, in table order.
pub fn collider_placements(table: &PathTable, base_scale: Vec3) -> Vec<ColliderPlacement> {
    let mut placements = Vec::new();
    for path in table {
        if !path.is_usable() {
            log::warn!(
                "Path '{}' has {} point(s), no colliders generated",
                path.name,
                path.len()
            );
            continue;
        }
        placements.extend(path.segments().iter().map(|seg| ColliderPlacement {
            path: path.name.clone(),
            segment: seg.index,
            transform: seg.transform(base_scale),
        }));
    }
    placements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PathKind;

    fn triangle() -> Vec<Point> {
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(4.0, 0.0, 3.0),
        ]
    }

    #[test]
    fn test_closed_path_wraps() {
        let segs = segments(&triangle(), true);
        assert_eq!(segs.len(), 3);
        assert_eq!((segs[0].start, segs[0].end), (triangle()[0], triangle()[1]));
        assert_eq!((segs[1].start, segs[1].end), (triangle()[1], triangle()[2]));
        assert_eq!((segs[2].start, segs[2].end), (triangle()[2], triangle()[0]));
        assert!((segs[2].length - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_open_path_has_no_wrap() {
        let segs = segments(&triangle(), false);
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[1].end, triangle()[2]);
    }

    #[test]
    fn test_too_few_points() {
        assert!(segments(&[Vec3::ONE], true).is_empty());
        assert!(segments(&[], false).is_empty());
        assert_eq!(segment_count(1, true), 0);
    }

    #[test]
    fn test_transform_sits_at_midpoint_and_faces_next() {
        let seg = Segment::between(0, Vec3::new(0.0, 0.0, 0.0), Vec3::new(4.0, 0.0, 0.0));
        let t = seg.transform(Vec3::new(0.5, 2.0, 1.0));
        assert_eq!(t.position, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(t.scale, Vec3::new(0.5, 2.0, 4.0));
        assert!((t.rotation.y - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_facing_ignores_elevation_change() {
        let seg = Segment::between(0, Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 4.0, 3.0));
        let t = seg.transform(Vec3::ONE);
        assert_eq!(t.rotation.x, 0.0);
        assert!((t.forward() - Vec3::FORWARD).length() < 1e-5);
        assert!((seg.length - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_level_segment_pitch_is_positive_zero() {
        let seg = Segment::between(0, Vec3::new(0.0, 0.0, 0.0), Vec3::new(4.0, 1.0, 0.0));
        let placement = ColliderPlacement {
            path: "ramp".into(),
            segment: 0,
            transform: seg.transform(Vec3::ONE),
        };
        assert!(placement.transform.rotation.x.is_sign_positive());
        let text = toml::to_string(&placement).unwrap();
        assert!(!text.contains("-0.0"));
    }

    #[test]
    fn test_vertical_segment_faces_forward() {
        let seg = Segment::between(0, Vec3::ZERO, Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(seg.transform(Vec3::ONE).rotation, Vec3::ZERO);
    }

    #[test]
    fn test_placements_skip_short_paths() {
        let mut table = PathTable::new();
        let loop_path = table.begin_path("loop", PathKind::Standard);
        for p in triangle() {
            loop_path.place(p);
        }
        loop_path.closed = true;
        table.begin_path("stub", PathKind::Standard).place(Vec3::ONE);

        let placements = collider_placements(&table, Vec3::ONE);
        assert_eq!(placements.len(), 3);
        assert!(placements.iter().all(|p| p.path == "loop"));
        assert_eq!(placements[2].segment, 2);
    }
}
