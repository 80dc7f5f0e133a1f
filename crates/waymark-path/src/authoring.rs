//! Interactive path authoring without a host editor.
//!
//! Mirrors the editor workflow: begin a named path, place points one at a
//! time (picked by whatever the host uses), then finish or cancel. Picking
//! itself is the host's business; this only owns the table bookkeeping.

use crate::types::{PathKind, PathTable, Point, MIN_USABLE_POINTS};
use waymark_core::{Result, WaymarkError};

/// State of one authoring session
#[derive(Debug, Default)]
pub struct PathAuthoring {
    /// Index of the path being placed. Only this session adds or removes
    /// paths while it is set.
    active: Option<usize>,
    /// Flatten placed points onto z = 0
    pub mode_2d: bool,
}

impl PathAuthoring {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode_2d(mut self, mode_2d: bool) -> Self {
        self.mode_2d = mode_2d;
        self
    }

    pub fn is_placing(&self) -> bool {
        self.active.is_some()
    }

    /// Name of the path currently being placed
    pub fn active_name<'a>(&self, table: &'a PathTable) -> Option<&'a str> {
        self.active
            .and_then(|i| table.get(i))
            .map(|p| p.name.as_str())
    }

    /// Begin a new path. Names must be non-empty and unique in `table`.
    pub fn start(&mut self, table: &mut PathTable, name: &str, kind: PathKind) -> Result<()> {
        if let Some(active) = self.active_name(table) {
            return Err(WaymarkError::AlreadyPlacing(active.to_string()));
        }
        if name.is_empty() {
            log::warn!("No path name defined. Cancelling.");
            return Err(WaymarkError::EmptyPathName);
        }
        if table.contains(name) {
            log::warn!("Path name already given. Cancelling.");
            return Err(WaymarkError::DuplicatePathName(name.to_string()));
        }

        table.begin_path(name, kind);
        self.active = Some(table.len() - 1);
        Ok(())
    }

    /// Place a point on the active path; returns its point count.
    pub fn place(&mut self, table: &mut PathTable, point: Point) -> Result<usize> {
        let path = self
            .active
            .and_then(|i| table.get_mut(i))
            .ok_or(WaymarkError::NoActivePath)?;
        let point = if self.mode_2d { point.with_z(0.0) } else { point };
        path.place(point);
        Ok(path.len())
    }

    /// End the session.
    ///
    /// A path with fewer than two points is dropped from the table and
    /// reported as [`WaymarkError::NotEnoughPoints`]. Otherwise returns the
    /// index of the finished path.
    pub fn finish(&mut self, table: &mut PathTable) -> Result<usize> {
        let index = self.active.take().ok_or(WaymarkError::NoActivePath)?;
        let count = table.get(index).map(|p| p.len()).unwrap_or(0);
        if count < MIN_USABLE_POINTS {
            log::warn!("Not enough waypoints placed. Cancelling.");
            let name = table
                .remove(index)
                .map(|p| p.name)
                .unwrap_or_default();
            return Err(WaymarkError::NotEnoughPoints { name, count });
        }
        Ok(index)
    }

    /// Abandon the session and drop the in-progress path.
    pub fn cancel(&mut self, table: &mut PathTable) -> Option<crate::types::Path> {
        let index = self.active.take()?;
        log::warn!("Lost focus when placing waypoints. Destroying path.");
        table.remove(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BezierSettings, PathKindName};
    use waymark_core::Vec3;

    #[test]
    fn test_place_and_finish() {
        let mut table = PathTable::new();
        let mut session = PathAuthoring::new();
        session.start(&mut table, "route", PathKind::Standard).unwrap();
        assert!(session.is_placing());
        assert_eq!(session.active_name(&table), Some("route"));

        session.place(&mut table, Vec3::new(1.0, 0.0, 1.0)).unwrap();
        assert_eq!(session.place(&mut table, Vec3::new(2.0, 0.0, 2.0)).unwrap(), 2);
        assert_eq!(session.finish(&mut table).unwrap(), 0);
        assert!(!session.is_placing());
        assert_eq!(table.paths()[0].origin, Vec3::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_rejects_empty_and_duplicate_names() {
        let mut table = PathTable::new();
        table.begin_path("taken", PathKind::Standard);
        let mut session = PathAuthoring::new();

        assert!(matches!(
            session.start(&mut table, "", PathKind::Standard),
            Err(WaymarkError::EmptyPathName)
        ));
        assert!(matches!(
            session.start(&mut table, "taken", PathKind::Standard),
            Err(WaymarkError::DuplicatePathName(_))
        ));
        assert!(!session.is_placing());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_second_start_while_placing_fails() {
        let mut table = PathTable::new();
        let mut session = PathAuthoring::new();
        session.start(&mut table, "one", PathKind::Standard).unwrap();
        assert!(matches!(
            session.start(&mut table, "two", PathKind::Standard),
            Err(WaymarkError::AlreadyPlacing(name)) if name == "one"
        ));
    }

    #[test]
    fn test_finishing_short_path_drops_it() {
        let mut table = PathTable::new();
        let mut session = PathAuthoring::new();
        session.start(&mut table, "short", PathKind::Standard).unwrap();
        session.place(&mut table, Vec3::ONE).unwrap();

        let err = session.finish(&mut table).unwrap_err();
        assert!(matches!(err, WaymarkError::NotEnoughPoints { count: 1, .. }));
        assert!(table.is_empty());
    }

    #[test]
    fn test_place_without_session_fails() {
        let mut table = PathTable::new();
        let mut session = PathAuthoring::new();
        assert!(matches!(
            session.place(&mut table, Vec3::ONE),
            Err(WaymarkError::NoActivePath)
        ));
        assert!(session.finish(&mut table).is_err());
    }

    #[test]
    fn test_mode_2d_flattens_z() {
        let mut table = PathTable::new();
        let mut session = PathAuthoring::new().with_mode_2d(true);
        let kind = PathKind::new(PathKindName::Bezier, BezierSettings::default());
        session.start(&mut table, "flat", kind).unwrap();
        session.place(&mut table, Vec3::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(table.paths()[0].points[0], Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(table.paths()[0].control_points().unwrap().len(), 1);
    }

    #[test]
    fn test_cancel_removes_path() {
        let mut table = PathTable::new();
        let mut session = PathAuthoring::new();
        session.start(&mut table, "gone", PathKind::Standard).unwrap();
        let removed = session.cancel(&mut table).unwrap();
        assert_eq!(removed.name, "gone");
        assert!(table.is_empty());
        assert!(session.cancel(&mut table).is_none());
    }
}
