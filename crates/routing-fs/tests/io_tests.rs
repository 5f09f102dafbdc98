use pretty_assertions::assert_eq;
use routing_fs::{NormalizedPath, io};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_atomic_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("routing.yml"));

    io::write_atomic(&path, b"foo:\n").unwrap();

    let content = fs::read_to_string(path.to_native()).unwrap();
    assert_eq!(content, "foo:\n");
}

#[test]
fn test_write_atomic_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("routing.yml");
    fs::write(&file_path, "original").unwrap();

    let path = NormalizedPath::new(&file_path);
    io::write_atomic(&path, b"updated").unwrap();

    assert_eq!(fs::read_to_string(&file_path).unwrap(), "updated");
}

#[test]
fn test_write_atomic_creates_missing_parents() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("app").join("config").join("routing.xml"));

    io::write_text(&path, "<routes/>").unwrap();

    assert_eq!(io::read_text(&path).unwrap(), "<routes/>");
}

#[test]
fn test_write_atomic_leaves_no_temp_files() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("routing.php"));

    io::write_text(&path, "<?php\n").unwrap();
    io::write_text(&path, "<?php\nreturn $collection;").unwrap();

    let leftovers: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "found temp files: {leftovers:?}");
}

#[test]
fn test_write_atomic_refuses_readonly_target() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("routing.yml");
    fs::write(&file_path, "original").unwrap();

    let mut permissions = fs::metadata(&file_path).unwrap().permissions();
    permissions.set_readonly(true);
    fs::set_permissions(&file_path, permissions).unwrap();

    let path = NormalizedPath::new(&file_path);
    let err = io::write_text(&path, "new content").unwrap_err();

    let mut permissions = fs::metadata(&file_path).unwrap().permissions();
    permissions.set_readonly(false);
    fs::set_permissions(&file_path, permissions).unwrap();

    assert!(err.is_permission_denied());
    assert_eq!(fs::read_to_string(&file_path).unwrap(), "original");
}

#[cfg(unix)]
#[test]
fn test_write_atomic_keeps_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("routing.yml");
    fs::write(&file_path, "original").unwrap();
    fs::set_permissions(&file_path, fs::Permissions::from_mode(0o640)).unwrap();

    io::write_text(&NormalizedPath::new(&file_path), "updated").unwrap();

    let mode = fs::metadata(&file_path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o640);
}

#[test]
fn test_read_text_if_exists_absent() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("missing.yml"));
    assert!(io::read_text_if_exists(&path).unwrap().is_none());
}

#[test]
fn test_read_text_if_exists_present() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("routing.yml");
    fs::write(&file_path, "").unwrap();

    let content = io::read_text_if_exists(&NormalizedPath::new(&file_path)).unwrap();
    assert_eq!(content.as_deref(), Some(""));
}

#[test]
fn test_read_text_nonexistent_file() {
    let path = NormalizedPath::new("/nonexistent/routing.yml");
    assert!(io::read_text(&path).is_err());
}

#[test]
fn test_ensure_dir_nested_and_idempotent() {
    let temp = TempDir::new().unwrap();
    let dir = NormalizedPath::new(temp.path().join("a").join("b").join("c"));

    io::ensure_dir(&dir).unwrap();
    io::ensure_dir(&dir).unwrap();

    assert!(dir.is_dir());
}
