use crate::preferences::Theme;
use crate::shortcuts::Shortcut;
use anyhow::Context;
use std::collections::{BTreeMap, HashMap};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const SHORTCUTS_KEY: &str = "shortcuts";
pub const ENGINE_KEY: &str = "search_engine";
pub const THEME_KEY: &str = "theme";

/// Synchronous string key-value store shared by every window using the same
/// backing location. Writes are last-write-wins.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Store persisted as a single JSON object of string values.
///
/// Every read goes back to disk so that changes made by another window are
/// picked up before the next read-modify-write.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty store. Any other read failure is an error
    /// so that a later `set` cannot overwrite keys it failed to read.
    fn read_map(&self) -> anyhow::Result<BTreeMap<String, String>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()));
            }
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        match serde_json::from_str(&content) {
            Ok(map) => Ok(map),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "ignoring malformed storage file: {e}"
                );
                Ok(BTreeMap::new())
            }
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.read_map() {
            Ok(mut map) => map.remove(key),
            Err(e) => {
                tracing::warn!(key, "storage read failed: {e:#}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&map)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store. Counts writes so callers can tell whether a no-op
/// operation touched storage.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Typed access to the persisted keys.
#[derive(Debug, Clone)]
pub struct Storage<S> {
    store: S,
}

impl<S: KeyValueStore> Storage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Load the shortcut list. Missing or malformed content yields an empty
    /// list.
    pub fn load_shortcuts(&self) -> Vec<Shortcut> {
        let Some(content) = self.store.get(SHORTCUTS_KEY) else {
            return Vec::new();
        };
        if content.trim().is_empty() {
            return Vec::new();
        }
        match serde_json::from_str(&content) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!("stored shortcut list is malformed, starting empty: {e}");
                Vec::new()
            }
        }
    }

    pub fn save_shortcuts(&mut self, shortcuts: &[Shortcut]) -> anyhow::Result<()> {
        let json = serde_json::to_string(shortcuts)?;
        self.store.set(SHORTCUTS_KEY, &json)
    }

    pub fn load_engine(&self) -> Option<String> {
        self.store.get(ENGINE_KEY)
    }

    pub fn save_engine(&mut self, key: &str) -> anyhow::Result<()> {
        self.store.set(ENGINE_KEY, key)
    }

    pub fn load_theme(&self) -> Option<String> {
        self.store.get(THEME_KEY)
    }

    pub fn save_theme(&mut self, theme: Theme) -> anyhow::Result<()> {
        self.store.set(THEME_KEY, theme.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shortcut(name: &str, url: &str) -> Shortcut {
        Shortcut {
            name: name.into(),
            url: url.into(),
        }
    }

    #[test]
    fn missing_key_loads_empty_list() {
        let storage = Storage::new(MemoryStore::new());
        assert!(storage.load_shortcuts().is_empty());
        assert_eq!(storage.load_engine(), None);
        assert_eq!(storage.load_theme(), None);
    }

    #[test]
    fn malformed_list_loads_empty() {
        let store = MemoryStore::new().with_value(SHORTCUTS_KEY, "{not json");
        let storage = Storage::new(store);
        assert!(storage.load_shortcuts().is_empty());
    }

    #[test]
    fn wrong_shape_loads_empty() {
        let store = MemoryStore::new().with_value(SHORTCUTS_KEY, r#"{"name":"x"}"#);
        let storage = Storage::new(store);
        assert!(storage.load_shortcuts().is_empty());
    }

    #[test]
    fn shortcuts_are_stored_as_name_url_records() {
        let mut storage = Storage::new(MemoryStore::new());
        storage
            .save_shortcuts(&[shortcut("Mail", "https://gmail.com")])
            .unwrap();
        let raw = storage.store().get(SHORTCUTS_KEY).unwrap();
        assert_eq!(raw, r#"[{"name":"Mail","url":"https://gmail.com"}]"#);
        assert_eq!(storage.store().writes(), 1);
    }

    #[test]
    fn file_store_persists_all_keys_in_one_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");
        let mut storage = Storage::new(JsonFileStore::new(&path));
        storage.save_engine("bing").unwrap();
        storage.save_theme(Theme::Dark).unwrap();
        storage
            .save_shortcuts(&[shortcut("Code", "https://github.com")])
            .unwrap();

        let reopened = Storage::new(JsonFileStore::new(&path));
        assert_eq!(reopened.load_engine().as_deref(), Some("bing"));
        assert_eq!(reopened.load_theme().as_deref(), Some("dark"));
        assert_eq!(reopened.load_shortcuts(), vec![shortcut("Code", "https://github.com")]);

        let raw: BTreeMap<String, String> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw.len(), 3);
    }

    #[test]
    fn file_store_sees_writes_from_other_handles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let first = JsonFileStore::new(&path);
        let mut second = JsonFileStore::new(&path);
        assert_eq!(first.get(THEME_KEY), None);
        second.set(THEME_KEY, "dark").unwrap();
        assert_eq!(first.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn corrupt_file_reads_as_empty_and_is_replaced_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "garbage").unwrap();
        let mut store = JsonFileStore::new(&path);
        assert_eq!(store.get(ENGINE_KEY), None);
        store.set(ENGINE_KEY, "brave").unwrap();
        assert_eq!(store.get(ENGINE_KEY).as_deref(), Some("brave"));
    }

    #[test]
    fn unreadable_file_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        // not valid UTF-8, so the read fails with something other than NotFound
        let bytes = [b'{', 0xff, 0xfe, b'}'];
        std::fs::write(&path, bytes).unwrap();
        let mut store = JsonFileStore::new(&path);
        assert_eq!(store.get(THEME_KEY), None);
        assert!(store.set(THEME_KEY, "dark").is_err());
        assert_eq!(std::fs::read(&path).unwrap(), bytes);
    }

    #[test]
    fn missing_file_is_created_on_first_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");
        let mut store = JsonFileStore::new(&path);
        assert_eq!(store.get(THEME_KEY), None);
        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    }
}
