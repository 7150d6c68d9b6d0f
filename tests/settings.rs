use once_cell::sync::Lazy;
use start_page::settings::{Settings, SETTINGS_FILE};
use std::sync::Mutex;
use tempfile::tempdir;

static TEST_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

#[test]
fn missing_settings_file_gives_defaults() {
    let _lock = TEST_MUTEX.lock().unwrap();
    let dir = tempdir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let settings = Settings::load(SETTINGS_FILE).unwrap();
    assert!(!settings.debug_logging);
    assert!(settings.enable_toasts);
    assert!(settings.storage_path.is_none());
}

#[test]
fn settings_roundtrip_through_file() {
    let _lock = TEST_MUTEX.lock().unwrap();
    let dir = tempdir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let settings = Settings {
        debug_logging: true,
        storage_path: Some("data/storage.json".into()),
        tile_columns: 4,
        ..Settings::default()
    };
    settings.save(SETTINGS_FILE).unwrap();

    let loaded = Settings::load(SETTINGS_FILE).unwrap();
    assert!(loaded.debug_logging);
    assert_eq!(loaded.tile_columns(), 4);
    assert_eq!(
        loaded.storage_path(),
        std::path::PathBuf::from("data/storage.json")
    );
}

#[test]
fn invalid_settings_file_is_an_error() {
    let _lock = TEST_MUTEX.lock().unwrap();
    let dir = tempdir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    std::fs::write(SETTINGS_FILE, "{ nope").unwrap();
    assert!(Settings::load(SETTINGS_FILE).is_err());
}
