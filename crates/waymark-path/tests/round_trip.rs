//! Export followed by import, through text and through the file system.

use std::path::PathBuf;
use waymark_core::Vec3;
use waymark_path::{
    collider_placements, export_file, export_table, import_file, import_table, ImportOptions,
    PathAuthoring, PathKind, PathTable,
};

fn authored_table() -> PathTable {
    let mut table = PathTable::new();
    let mut session = PathAuthoring::new();

    session.start(&mut table, "tower", PathKind::Standard).unwrap();
    session.place(&mut table, Vec3::new(0.0, 5.0, 0.0)).unwrap();
    session.place(&mut table, Vec3::new(2.5, 6.0, -1.0)).unwrap();
    session.finish(&mut table).unwrap();

    session.start(&mut table, "yard", PathKind::Standard).unwrap();
    session.place(&mut table, Vec3::new(10.0, 0.0, 10.0)).unwrap();
    session.place(&mut table, Vec3::new(12.0, 1.0, 10.0)).unwrap();
    session.place(&mut table, Vec3::new(12.0, 2.0, 14.75)).unwrap();
    session.finish(&mut table).unwrap();

    table
}

#[test]
fn test_names_and_plan_coordinates_survive() {
    let table = authored_table();
    let text = export_table(&table);
    let back = import_table(&text, &ImportOptions::default()).unwrap().table;

    assert_eq!(back.len(), table.len());
    for (before, after) in table.iter().zip(back.iter()) {
        assert_eq!(before.name, after.name);
        let xz = |p: &Vec3| (p.x, p.z);
        assert_eq!(
            before.points.iter().map(xz).collect::<Vec<_>>(),
            after.points.iter().map(xz).collect::<Vec<_>>()
        );
    }
}

#[test]
fn test_per_point_height_collapses_to_path_height() {
    let table = authored_table();
    let back = import_table(&export_table(&table), &ImportOptions::default())
        .unwrap()
        .table;

    // "tower" was authored at heights 5 and 6; only the container height
    // (the first point) is written, so both points come back at 5.
    let tower = back.find("tower").unwrap();
    assert!(tower.points.iter().all(|p| p.y == 5.0));
    assert_ne!(table.find("tower").unwrap().points[1].y, tower.points[1].y);

    let yard = back.find("yard").unwrap();
    assert!(yard.points.iter().all(|p| p.y == 0.0));
}

#[test]
fn test_second_export_is_stable() {
    let once = export_table(&authored_table());
    let back = import_table(&once, &ImportOptions::default()).unwrap().table;
    assert_eq!(export_table(&back), once);
}

#[test]
fn test_through_the_file_system() {
    let dir = std::env::temp_dir().join(format!("waymark_round_trip_{}", uuid::Uuid::new_v4()));
    let file: PathBuf = dir.join("out").join("PathInfo.csv");

    export_file(&authored_table(), &file).unwrap();
    let report = import_file(&file, &ImportOptions::strict()).unwrap().unwrap();
    assert_eq!(report.table.total_points(), 5);
    assert_eq!(report.skipped_rows, 0);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_imported_paths_feed_collider_generation() {
    let mut back = import_table(&export_table(&authored_table()), &ImportOptions::default())
        .unwrap()
        .table;
    // closure is not part of the CSV format; mark the yard as a loop
    back.get_mut(1).unwrap().closed = true;

    let placements = collider_placements(&back, Vec3::ONE);
    assert_eq!(placements.len(), 1 + 3);
    assert_eq!(placements[0].path, "tower");
    assert!(placements.iter().all(|p| p.transform.rotation.x.abs() < 1e-6));
}
