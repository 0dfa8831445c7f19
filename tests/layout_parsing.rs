mod common;

use common::{approx, preset};
use keyfit::core_types::{Finger, Hand, Row};
use keyfit::error::KeyFitError;
use keyfit::geometry::KeyboardGeometry;
use keyfit::layouts::{KnownLayout, Layout};
use keyfit::scorer::KeyMetricsTable;
use rstest::rstest;
use std::fs;
use std::str::FromStr;

#[test]
fn test_shifted_keys_cost_more() {
    let layout = preset(KnownLayout::Qwerty);
    let a = layout.table.get('a').unwrap();
    let shifted = layout.table.get('A').unwrap();

    assert_eq!(shifted.finger, a.finger);
    assert_eq!(shifted.row, a.row);
    assert!(approx(shifted.effort, a.effort + 1.0));
    assert_eq!(shifted.distance, a.distance);
}

#[test]
fn test_enter_and_space() {
    let layout = preset(KnownLayout::Qwerty);

    let enter = layout.table.get('\n').unwrap();
    assert_eq!(enter.finger, Finger::RightPinky);
    assert_eq!(enter.row, Row::Home);
    // Shifted Enter is a duplicate; the unshifted key wins.
    assert!(approx(enter.effort, 4.5));

    let space = layout.table.get(' ').unwrap();
    assert_eq!(space.finger, Finger::Thumb);
    assert_eq!(space.hand, Hand::Neutral);
    assert_eq!(space.row, Row::Bottom);
}

#[rstest]
#[case::odd_rows("a b\nA B\nc d")]
#[case::unequal_pair("a b c\nA B")]
#[case::multi_char_token("ab c\nAB C")]
#[case::too_many_pairs("a\nA\nb\nB\nc\nC\nd\nD\ne\nE")]
fn test_malformed_grids(#[case] grid: &str) {
    let err = KeyMetricsTable::from_grid(grid, &KeyboardGeometry::standard()).unwrap_err();
    assert!(matches!(err, KeyFitError::Layout(_)), "{:?}", err);
}

#[test]
fn test_row_wider_than_geometry() {
    let plain = "a ".repeat(14);
    let grid = format!("{}\n{}", plain, plain.to_uppercase());
    assert!(KeyMetricsTable::from_grid(&grid, &KeyboardGeometry::standard()).is_err());
}

#[test]
fn test_first_occurrence_wins() {
    let grid = "a b a\nA B A";
    let table = KeyMetricsTable::from_grid(grid, &KeyboardGeometry::standard()).unwrap();
    let a = table.get('a').unwrap();
    assert_eq!(a.finger, Finger::LeftPinky);
    // 'a', 'b', 'A', 'B' and space
    assert_eq!(table.len(), 5);
}

#[test]
fn test_resolve_preset_case_insensitive() {
    let geom = KeyboardGeometry::standard();
    let layout = Layout::resolve("Colemak", &geom).unwrap();
    assert_eq!(layout.name, "colemak");
    assert_eq!(KnownLayout::from_str("halmak22").unwrap(), KnownLayout::Halmak22);
}

#[test]
fn test_resolve_unknown() {
    let err = Layout::resolve("not-a-layout", &KeyboardGeometry::standard()).unwrap_err();
    assert!(matches!(err, KeyFitError::UnknownLayout(_)));
}

#[test]
fn test_resolve_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mini.txt");
    fs::write(&path, "1 2\n! @\nq w\nQ W\n").unwrap();

    let layout = Layout::resolve(path.to_str().unwrap(), &KeyboardGeometry::standard()).unwrap();
    assert_eq!(layout.name, "mini");
    assert_eq!(layout.table.get('q').unwrap().row, Row::Top);
    assert_eq!(layout.table.get('1').unwrap().row, Row::Number);
}

#[test]
fn test_custom_geometry_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tiny.json");
    fs::write(
        &path,
        r#"{
            "name": "tiny",
            "fingers": [["l-pinky", "r-point"]],
            "efforts": [[1.0, 2.0]],
            "distances": [[0.0, 0.5]]
        }"#,
    )
    .unwrap();

    let geom = KeyboardGeometry::load_from_file(&path).unwrap();
    assert_eq!(geom.shift_effort, 1.0);

    let table = KeyMetricsTable::from_grid("x y\nX Y", &geom).unwrap();
    let y = table.get('y').unwrap();
    assert_eq!(y.finger, Finger::RightIndex);
    assert_eq!(y.row, Row::Number);
    assert!(approx(table.get('Y').unwrap().effort, 3.0));
}

#[test]
fn test_inconsistent_geometry_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(
        &path,
        r#"{
            "name": "broken",
            "fingers": [["l-pinky", "l-ring"]],
            "efforts": [[1.0]],
            "distances": [[0.0, 0.0]]
        }"#,
    )
    .unwrap();
    assert!(KeyboardGeometry::load_from_file(&path).is_err());
}
