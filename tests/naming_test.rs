use std::fs;
use tasa_version::naming::{locate_executable, NamingScheme, Platform};
use tempfile::TempDir;

fn dist_with(files: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for file in files {
        fs::write(dir.path().join(file), b"binary").unwrap();
    }
    dir
}

#[test]
fn test_locate_exact_match() {
    let dir = dist_with(&["tasa-25.07.0-42.exe", "tasa-installer-25.07.0-42.exe"]);
    let scheme = NamingScheme::default();
    let names = scheme.artifact_names("25.07.0-42", Platform::Windows, None);

    let path = locate_executable(dir.path(), &names, &scheme).unwrap();
    assert_eq!(path.file_name().unwrap(), "tasa-25.07.0-42.exe");
}

#[test]
fn test_locate_reports_near_misses() {
    let dir = dist_with(&["tasa-25.06.0-41.exe", "readme.txt"]);
    let scheme = NamingScheme::default();
    let names = scheme.artifact_names("25.07.0-42", Platform::Windows, None);

    let err = locate_executable(dir.path(), &names, &scheme).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("tasa-25.07.0-42.exe"));
    assert!(msg.contains("found: tasa-25.06.0-41.exe"));
    assert!(!msg.contains("readme.txt"));
}

#[test]
fn test_locate_ignores_directories_with_matching_name() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("tasa-25.07.0-42")).unwrap();
    let scheme = NamingScheme::default();
    let names = scheme.artifact_names("25.07.0-42", Platform::Linux, None);

    assert!(locate_executable(dir.path(), &names, &scheme).is_err());
}

#[test]
fn test_locate_with_postfix_requires_postfixed_name() {
    let dir = dist_with(&["tasa-25.07.0-42.exe"]);
    let scheme = NamingScheme::default();
    let names = scheme.artifact_names("25.07.0-42", Platform::Windows, Some("-beta"));

    assert!(locate_executable(dir.path(), &names, &scheme).is_err());

    fs::write(dir.path().join("tasa-25.07.0-42-beta.exe"), b"binary").unwrap();
    assert!(locate_executable(dir.path(), &names, &scheme).is_ok());
}

#[test]
fn test_custom_product_prefix() {
    let scheme = NamingScheme {
        product: "tasa-lite".to_string(),
        tag_prefix: "v".to_string(),
    };
    let names = scheme.artifact_names("25.07.0-42", Platform::Linux, None);
    assert_eq!(names.executable, "tasa-lite-25.07.0-42");
    assert_eq!(names.installer, "tasa-lite-installer-25.07.0-42");
}
