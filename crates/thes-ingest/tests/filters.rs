use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use thes_ingest::{filter_dir, list_filter_files, load_filter_dir};
use thes_model::ConfigurationError;

fn write_filters(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).expect("write filter");
    }
    dir
}

#[test]
fn loads_txt_files_as_filters() {
    let dir = write_filters(&[
        ("AWL.txt", "analyse\nConcept\n\n"),
        ("basic.TXT", "happy\r\nglad\r\n"),
        ("notes.md", "# not a filter"),
    ]);
    fs::create_dir(dir.path().join("nested.txt")).expect("nested dir");

    let files = list_filter_files(dir.path()).expect("list");
    assert_eq!(files.len(), 2);

    let filters = load_filter_dir(dir.path()).expect("load");
    assert_eq!(filters.names(), vec!["AWL", "basic"]);
    let awl = filters.get_ignore_case("awl").expect("AWL");
    assert_eq!(awl.len(), 2);
    assert!(awl.contains("concept"));
    let basic = filters.get_ignore_case("basic").expect("basic");
    assert!(basic.contains("happy"));
    assert!(basic.contains("glad"));
}

#[test]
fn missing_directory_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.path().join("absent");
    let result = load_filter_dir(&missing);
    assert!(matches!(
        result,
        Err(ConfigurationError::FilterDirectoryNotFound { .. })
    ));
}

#[test]
fn non_utf8_filter_is_malformed() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("bad.txt"), [0xff, 0xfe, b'\n']).expect("write filter");
    let result = load_filter_dir(dir.path());
    match result {
        Err(ConfigurationError::MalformedFilter { path, .. }) => {
            assert!(path.ends_with("bad.txt"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn empty_directory_gives_no_filters() {
    let dir = TempDir::new().expect("temp dir");
    let filters = load_filter_dir(dir.path()).expect("load");
    assert!(filters.is_empty());
}

#[test]
fn flag_beats_configured_directory() {
    let dir = filter_dir(Some(Path::new("from-flag")), Some(Path::new("from-settings")));
    assert_eq!(dir, PathBuf::from("from-flag"));
}
