//! Tests for OS entropy seeds and directory creation

use progen_rng_core_rs::{create_directory, generate_seed, Engine};
use tempfile::TempDir;

#[test]
fn test_generate_seed_does_not_touch_engines() {
    let mut engine = Engine::new(11);
    engine.draw();

    generate_seed().unwrap();

    assert_eq!(engine.seed(), 11);
    assert_eq!(engine.draws(), 1);
}

#[test]
fn test_generated_seeds_differ() {
    let a = generate_seed().unwrap();
    let b = generate_seed().unwrap();
    let c = generate_seed().unwrap();

    assert!(a != b || b != c, "Three identical entropy seeds in a row");
}

#[test]
fn test_entropy_seed_drives_engine() {
    let seed = generate_seed().unwrap();
    let mut engine1 = Engine::new(seed);
    let mut engine2 = Engine::new(seed);

    assert_eq!(engine1.draw(), engine2.draw());
}

#[test]
fn test_engine_from_entropy_records_seed() {
    let mut engine = Engine::from_entropy().unwrap();
    let first = engine.draw();

    let mut replay = Engine::new(engine.seed());
    assert_eq!(replay.draw(), first);
}

#[test]
fn test_create_directory_fresh_path() {
    let root = TempDir::new().unwrap();
    let dir = root.path().join("output");

    assert!(create_directory(&dir));
    assert!(dir.is_dir());
}

#[test]
fn test_create_directory_idempotent() {
    let root = TempDir::new().unwrap();
    let dir = root.path().join("twice");

    assert!(create_directory(&dir));
    assert!(create_directory(&dir));
    assert!(dir.is_dir());
}

#[test]
fn test_create_directory_missing_parent() {
    let root = TempDir::new().unwrap();
    let dir = root.path().join("missing").join("child");

    assert!(!create_directory(&dir));
    assert!(!dir.exists());
}

#[test]
fn test_create_directory_accepts_str_paths() {
    let root = TempDir::new().unwrap();
    let dir = root.path().join("as_str");
    let path = dir.to_str().unwrap().to_string();

    assert!(create_directory(path.as_str()));
    assert!(dir.is_dir());
}

#[cfg(unix)]
#[test]
fn test_create_directory_mode() {
    use std::os::unix::fs::PermissionsExt;

    let root = TempDir::new().unwrap();
    let dir = root.path().join("mode");
    assert!(create_directory(&dir));

    // umask can only clear bits, never add world access
    let mode = std::fs::metadata(&dir).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode & 0o007, 0, "world bits set: {:o}", mode);
    assert_eq!(mode & 0o700, 0o700, "owner rwx missing: {:o}", mode);
}

#[cfg(unix)]
#[test]
fn test_create_directory_permission_denied() {
    use std::os::unix::fs::PermissionsExt;

    let root = TempDir::new().unwrap();
    let locked = root.path().join("locked");
    std::fs::create_dir(&locked).unwrap();
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o500)).unwrap();

    let target = locked.join("child");
    let created = create_directory(&target);

    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o700)).unwrap();

    // root ignores directory permissions
    if !is_root() {
        assert!(!created);
    }
}

#[cfg(unix)]
fn is_root() -> bool {
    std::fs::metadata("/proc/self")
        .map(|m| {
            use std::os::unix::fs::MetadataExt;
            m.uid() == 0
        })
        .unwrap_or(false)
}
