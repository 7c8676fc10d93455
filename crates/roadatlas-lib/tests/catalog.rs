use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use roadatlas_lib::{load_places, Error, PLACEHOLDER_NAME};

fn write_places(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("Place.txt");
    fs::write(&path, contents).expect("write places file");
    (dir, path)
}

#[test]
fn loads_ids_and_names() {
    let (_dir, path) = write_places("1,Lexington\n2,Columbia\n");
    let catalog = load_places(&path).expect("catalog loads");

    assert_eq!(catalog.place_count(), 2);
    assert_eq!(catalog.name_count(), 2);
    assert_eq!(catalog.place_id_by_name("Lexington"), Some(1));
    assert_eq!(catalog.place_name(2), Some("Columbia"));
}

#[test]
fn blank_lines_are_skipped() {
    let (_dir, path) = write_places("\n1,Lexington\n\n   \n2,Columbia\n\n");
    let catalog = load_places(&path).expect("catalog loads");

    assert_eq!(catalog.place_count(), 2);
}

#[test]
fn names_may_contain_commas() {
    let (_dir, path) = write_places("1,Portland, OR\n");
    let catalog = load_places(&path).expect("catalog loads");

    assert_eq!(catalog.place_name(1), Some("Portland, OR"));
    assert_eq!(catalog.place_id_by_name("Portland, OR"), Some(1));
}

#[test]
fn empty_name_becomes_placeholder() {
    let (_dir, path) = write_places("7,   \n");
    let catalog = load_places(&path).expect("catalog loads");

    assert_eq!(catalog.place_name(7), Some(PLACEHOLDER_NAME));
    assert_eq!(catalog.place_id_by_name(PLACEHOLDER_NAME), Some(7));
}

#[test]
fn duplicate_ids_keep_first_name() {
    let (_dir, path) = write_places("1,Lexington\n1,Columbia\n");
    let catalog = load_places(&path).expect("catalog loads");

    assert_eq!(catalog.place_count(), 1);
    assert_eq!(catalog.place_name(1), Some("Lexington"));
    // The duplicate record's name still resolves, to the first-seen id.
    assert_eq!(catalog.place_id_by_name("Columbia"), Some(1));
}

#[test]
fn duplicate_names_keep_first_id() {
    let (_dir, path) = write_places("1,Springfield\n2,Springfield\n");
    let catalog = load_places(&path).expect("catalog loads");

    assert_eq!(catalog.place_id_by_name("Springfield"), Some(1));
    // Both identifiers still carry their name in the reverse map.
    assert_eq!(catalog.place_name(1), Some("Springfield"));
    assert_eq!(catalog.place_name(2), Some("Springfield"));
}

#[test]
fn missing_file_is_a_not_found_error() {
    let dir = TempDir::new().expect("create temp dir");
    let error = load_places(&dir.path().join("absent.txt")).expect_err("missing file");
    assert!(matches!(error, Error::PlaceFileNotFound { .. }));
}

#[test]
fn line_without_separator_fails_loading() {
    let (_dir, path) = write_places("1,Lexington\nColumbia\n");
    let error = load_places(&path).expect_err("malformed line");
    assert!(matches!(error, Error::MalformedPlace { line: 2, .. }));
}

#[test]
fn empty_id_field_fails_loading() {
    let (_dir, path) = write_places("  ,Lexington\n");
    let error = load_places(&path).expect_err("empty id");
    assert!(matches!(error, Error::MalformedPlace { line: 1, .. }));
}

#[test]
fn non_integer_id_fails_loading() {
    let (_dir, path) = write_places("abc,Lexington\n");
    let error = load_places(&path).expect_err("bad id");
    assert!(format!("{error}").contains("invalid place record"));
}
