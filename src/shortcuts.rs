use crate::storage::{KeyValueStore, Storage};
use serde::{Deserialize, Serialize};

/// A bookmarked tile. Shortcuts are identified by their position in the
/// list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    pub name: String,
    pub url: String,
}

/// Trim `raw` and default the scheme to `https://` when it is missing.
///
/// Returns `None` for empty input.
pub fn normalize_url(raw: &str) -> Option<String> {
    let url = raw.trim();
    if url.is_empty() {
        return None;
    }
    if url.starts_with("http://") || url.starts_with("https://") {
        return Some(url.to_string());
    }
    Some(format!("https://{}", url.trim_start_matches('/')))
}

/// Ordered shortcut list mirrored to storage.
///
/// Each mutation re-reads the persisted list, applies the change and writes
/// the whole list back before returning.
pub struct ShortcutStore<S> {
    storage: Storage<S>,
    items: Vec<Shortcut>,
}

impl<S: KeyValueStore> ShortcutStore<S> {
    pub fn open(storage: Storage<S>) -> Self {
        let items = storage.load_shortcuts();
        tracing::debug!(count = items.len(), "loaded shortcuts");
        Self { storage, items }
    }

    pub fn list(&self) -> &[Shortcut] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Shortcut> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn storage(&self) -> &Storage<S> {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut Storage<S> {
        &mut self.storage
    }

    /// Pick up changes written by another window.
    pub fn reload(&mut self) {
        self.items = self.storage.load_shortcuts();
    }

    /// Append a shortcut. Returns `false` when the name or URL is blank.
    pub fn add(&mut self, name: &str, url: &str) -> anyhow::Result<bool> {
        let name = name.trim();
        let Some(url) = normalize_url(url) else {
            return Ok(false);
        };
        if name.is_empty() {
            return Ok(false);
        }
        let mut list = self.storage.load_shortcuts();
        list.push(Shortcut {
            name: name.to_string(),
            url,
        });
        self.commit(list)?;
        tracing::info!(name, "added shortcut");
        Ok(true)
    }

    /// Remove the shortcut at `index`, returning it. Confirmation is up to
    /// the caller.
    ///
    /// `expected` is the entry the user confirmed. Nothing is removed unless
    /// the persisted list still holds that entry at `index`.
    pub fn remove(
        &mut self,
        index: usize,
        expected: &Shortcut,
    ) -> anyhow::Result<Option<Shortcut>> {
        let mut list = self.storage.load_shortcuts();
        if list.get(index) != Some(expected) {
            tracing::debug!(
                index,
                len = list.len(),
                name = %expected.name,
                "ignoring remove of an entry no longer at that position"
            );
            self.items = list;
            return Ok(None);
        }
        let removed = list.remove(index);
        self.commit(list)?;
        tracing::info!(name = %removed.name, "removed shortcut");
        Ok(Some(removed))
    }

    /// Move the shortcut at `from` so it ends up at `to`.
    ///
    /// `to` indexes the list after the item was taken out. Equal or
    /// out-of-range indices leave the list and storage untouched.
    pub fn reorder(&mut self, from: usize, to: usize) -> anyhow::Result<bool> {
        let mut list = self.storage.load_shortcuts();
        if from == to || from >= list.len() || to >= list.len() {
            self.items = list;
            return Ok(false);
        }
        let moved = list.remove(from);
        list.insert(to, moved);
        self.commit(list)?;
        tracing::debug!(from, to, "reordered shortcuts");
        Ok(true)
    }

    fn commit(&mut self, list: Vec<Shortcut>) -> anyhow::Result<()> {
        self.storage.save_shortcuts(&list)?;
        self.items = list;
        Ok(())
    }
}
