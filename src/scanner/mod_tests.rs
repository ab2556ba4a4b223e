use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use super::*;

#[test]
fn subdirectories_are_listed_sorted() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("zeta")).unwrap();
    fs::create_dir(temp_dir.path().join("alpha")).unwrap();
    fs::create_dir(temp_dir.path().join("mid")).unwrap();

    let names = list_subdirectories(temp_dir.path()).unwrap();

    assert_eq!(
        names,
        vec![
            PathBuf::from("alpha"),
            PathBuf::from("mid"),
            PathBuf::from("zeta")
        ]
    );
}

#[test]
fn subdirectories_skip_files() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("sub")).unwrap();
    fs::write(temp_dir.path().join("file.go"), "package main\n").unwrap();

    let names = list_subdirectories(temp_dir.path()).unwrap();

    assert_eq!(names, vec![PathBuf::from("sub")]);
}

#[test]
fn subdirectories_visits_each_exactly_once() {
    let temp_dir = TempDir::new().unwrap();
    for name in ["a", "b", "c", "d"] {
        fs::create_dir(temp_dir.path().join(name)).unwrap();
    }

    let names = list_subdirectories(temp_dir.path()).unwrap();

    assert_eq!(names.len(), 4);
    let mut deduped = names.clone();
    deduped.dedup();
    assert_eq!(deduped, names);
}

#[test]
fn missing_directory_is_root_folder_missing() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("gone");

    let err = list_subdirectories(&missing).unwrap_err();

    assert!(matches!(err, DocGuardError::RootFolderMissing { .. }));
}

#[test]
fn empty_directory_lists_nothing() {
    let temp_dir = TempDir::new().unwrap();

    let names = list_subdirectories(temp_dir.path()).unwrap();

    assert!(names.is_empty());
}
