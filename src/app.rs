use crate::drag::DragController;
use crate::preferences::{PreferenceController, SystemOpener, Theme, UrlOpener};
use crate::shortcuts::{Shortcut, ShortcutStore};
use crate::storage::{KeyValueStore, Storage};

/// Everything the user can ask the start page to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    AddShortcut { name: String, url: String },
    /// Remove the shortcut the user confirmed, if it is still at `index`.
    RemoveShortcut { index: usize, shortcut: Shortcut },
    Reorder { from: usize, to: usize },
    SetEngine(String),
    SetTheme(Theme),
    ToggleTheme,
    Submit(String),
    OpenShortcut(usize),
    Reload,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    Unchanged,
    Opened(String),
}

impl Outcome {
    fn from_changed(changed: bool) -> Self {
        if changed {
            Outcome::Changed
        } else {
            Outcome::Unchanged
        }
    }
}

/// Application state: the shortcut list, preferences and the drag in
/// progress. The GUI owns one of these and renders from it every frame.
pub struct StartPage<S> {
    shortcuts: ShortcutStore<S>,
    prefs: PreferenceController,
    drag: DragController,
    opener: Box<dyn UrlOpener>,
}

impl<S: KeyValueStore> StartPage<S> {
    pub fn new(store: S) -> Self {
        Self::with_opener(store, Box::new(SystemOpener))
    }

    pub fn with_opener(store: S, opener: Box<dyn UrlOpener>) -> Self {
        let storage = Storage::new(store);
        let prefs = PreferenceController::load(&storage);
        let shortcuts = ShortcutStore::open(storage);
        tracing::info!(
            engine = prefs.engine().key,
            theme = %prefs.theme(),
            shortcuts = shortcuts.len(),
            "start page loaded"
        );
        Self {
            shortcuts,
            prefs,
            drag: DragController::new(),
            opener,
        }
    }

    pub fn shortcuts(&self) -> &[Shortcut] {
        self.shortcuts.list()
    }

    pub fn preferences(&self) -> &PreferenceController {
        &self.prefs
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn store(&self) -> &S {
        self.shortcuts.storage().store()
    }

    pub fn dispatch(&mut self, intent: Intent) -> anyhow::Result<Outcome> {
        tracing::trace!(?intent, "dispatch");
        match intent {
            Intent::AddShortcut { name, url } => {
                Ok(Outcome::from_changed(self.shortcuts.add(&name, &url)?))
            }
            Intent::RemoveShortcut { index, shortcut } => Ok(Outcome::from_changed(
                self.shortcuts.remove(index, &shortcut)?.is_some(),
            )),
            Intent::Reorder { from, to } => {
                Ok(Outcome::from_changed(self.shortcuts.reorder(from, to)?))
            }
            Intent::SetEngine(key) => {
                self.prefs.set_engine(&key, self.shortcuts.storage_mut())?;
                Ok(Outcome::Changed)
            }
            Intent::SetTheme(theme) => {
                self.prefs.set_theme(theme, self.shortcuts.storage_mut())?;
                Ok(Outcome::Changed)
            }
            Intent::ToggleTheme => {
                self.prefs.toggle_theme(self.shortcuts.storage_mut())?;
                Ok(Outcome::Changed)
            }
            Intent::Submit(query) => {
                match self.prefs.submit_search(&query, self.opener.as_ref())? {
                    Some(url) => Ok(Outcome::Opened(url)),
                    None => Ok(Outcome::Unchanged),
                }
            }
            Intent::OpenShortcut(index) => {
                let Some(url) = self.shortcuts.get(index).map(|s| s.url.clone()) else {
                    return Ok(Outcome::Unchanged);
                };
                self.opener.open(&url)?;
                Ok(Outcome::Opened(url))
            }
            Intent::Reload => {
                self.shortcuts.reload();
                Ok(Outcome::Changed)
            }
        }
    }

    pub fn drag_start(&mut self, index: usize) -> bool {
        self.drag.drag_start(index, self.shortcuts.len())
    }

    pub fn drag_over(&mut self, target: usize) {
        if target < self.shortcuts.len() {
            self.drag.drag_over(target);
        }
    }

    pub fn drag_leave(&mut self, target: usize) {
        self.drag.drag_leave(target);
    }

    /// Finish a drag on the tile at `target`, reordering when it came from a
    /// different tile.
    pub fn drop_on(&mut self, target: usize) -> anyhow::Result<Outcome> {
        match self.drag.drop_on(target) {
            Some(reorder) => self.dispatch(Intent::Reorder {
                from: reorder.from,
                to: reorder.to,
            }),
            None => Ok(Outcome::Unchanged),
        }
    }

    pub fn drag_end(&mut self) {
        self.drag.drag_end();
    }
}
