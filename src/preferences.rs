use crate::catalog::{default_engine, find_engine, Engine};
use crate::storage::{KeyValueStore, Storage};
use urlencoding::encode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Glyph shown on the theme toggle button.
    pub fn glyph(self) -> &'static str {
        match self {
            Theme::Light => "🌞",
            Theme::Dark => "🌙",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opens URLs in the user's browser.
pub trait UrlOpener {
    fn open(&self, url: &str) -> anyhow::Result<()>;
}

/// Hands URLs to the platform's default handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> anyhow::Result<()> {
        open::that(url).map_err(|e| e.into())
    }
}

/// Active search engine and theme.
#[derive(Debug, Clone)]
pub struct PreferenceController {
    engine: &'static Engine,
    theme: Theme,
}

impl Default for PreferenceController {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            theme: Theme::default(),
        }
    }
}

fn resolve_engine(key: &str) -> &'static Engine {
    find_engine(key).unwrap_or_else(|| {
        tracing::warn!("unknown search engine '{key}', using {}", default_engine().key);
        default_engine()
    })
}

impl PreferenceController {
    /// Read the stored preferences. Missing or unrecognised values fall back
    /// to the defaults independently.
    pub fn load<S: KeyValueStore>(storage: &Storage<S>) -> Self {
        let engine = storage
            .load_engine()
            .map(|key| resolve_engine(&key))
            .unwrap_or_else(default_engine);
        let theme = storage
            .load_theme()
            .and_then(|value| {
                let theme = Theme::parse(&value);
                if theme.is_none() {
                    tracing::warn!("unknown theme '{value}', using light");
                }
                theme
            })
            .unwrap_or_default();
        Self { engine, theme }
    }

    pub fn engine(&self) -> &'static Engine {
        self.engine
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.engine.key == key
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_glyph(&self) -> &'static str {
        self.theme.glyph()
    }

    /// Select the engine named `key`. Unknown keys select the default
    /// engine; the resolved key is what gets persisted.
    pub fn set_engine<S: KeyValueStore>(
        &mut self,
        key: &str,
        storage: &mut Storage<S>,
    ) -> anyhow::Result<&'static Engine> {
        let engine = resolve_engine(key);
        storage.save_engine(engine.key)?;
        self.engine = engine;
        tracing::debug!(engine = engine.key, "search engine selected");
        Ok(engine)
    }

    pub fn set_theme<S: KeyValueStore>(
        &mut self,
        theme: Theme,
        storage: &mut Storage<S>,
    ) -> anyhow::Result<()> {
        storage.save_theme(theme)?;
        self.theme = theme;
        tracing::debug!(%theme, "theme changed");
        Ok(())
    }

    pub fn toggle_theme<S: KeyValueStore>(
        &mut self,
        storage: &mut Storage<S>,
    ) -> anyhow::Result<Theme> {
        let next = self.theme.toggled();
        self.set_theme(next, storage)?;
        Ok(next)
    }

    /// Result page URL for `query`, or `None` when the query is blank.
    pub fn search_url(&self, query: &str) -> Option<String> {
        let q = query.trim();
        if q.is_empty() {
            return None;
        }
        Some(format!("{}{}", self.engine.url, encode(q)))
    }

    /// Open the result page for `query`. Returns the opened URL.
    pub fn submit_search(
        &self,
        query: &str,
        opener: &dyn UrlOpener,
    ) -> anyhow::Result<Option<String>> {
        let Some(url) = self.search_url(query) else {
            return Ok(None);
        };
        opener.open(&url)?;
        tracing::info!(engine = self.engine.key, "opened search");
        Ok(Some(url))
    }
}
