/// A search provider. The percent-encoded query is appended to `url`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    pub key: &'static str,
    pub name: &'static str,
    pub url: &'static str,
}

pub const DEFAULT_ENGINE: &str = "google";

/// Known search engines in display order.
pub const ENGINES: &[Engine] = &[
    Engine {
        key: "google",
        name: "Google",
        url: "https://www.google.com/search?q=",
    },
    Engine {
        key: "bing",
        name: "Bing",
        url: "https://www.bing.com/search?q=",
    },
    Engine {
        key: "brave",
        name: "Brave",
        url: "https://search.brave.com/search?q=",
    },
    Engine {
        key: "duckduckgo",
        name: "DuckDuckGo",
        url: "https://duckduckgo.com/?q=",
    },
    Engine {
        key: "baidu",
        name: "Baidu",
        url: "https://www.baidu.com/s?wd=",
    },
];

pub fn find_engine(key: &str) -> Option<&'static Engine> {
    ENGINES.iter().find(|e| e.key == key)
}

pub fn default_engine() -> &'static Engine {
    &ENGINES[0]
}

/// Glyph used when no site entry matches.
pub const FALLBACK_ICON: &str = "🔗";

/// Hostname substrings and their glyphs. Checked in order; the first match
/// wins.
pub const SITE_ICONS: &[(&str, &str)] = &[
    ("youtube.com", "📺"),
    ("github.com", "💻"),
    ("gmail.com", "📧"),
    ("mail.google.com", "📧"),
    ("maps.google.com", "🗺️"),
    ("drive.google.com", "📁"),
    ("translate.google.com", "🌍"),
    ("netflix.com", "🎬"),
    ("twitter.com", "🐦"),
    ("facebook.com", "👥"),
    ("instagram.com", "📸"),
    ("linkedin.com", "💼"),
    ("reddit.com", "👽"),
    ("amazon.com", "🛒"),
    ("wikipedia.org", "📚"),
    ("spotify.com", "🎵"),
    ("discord.com", "💬"),
    ("notion.so", "📝"),
    ("trello.com", "📋"),
    ("slack.com", "💬"),
    ("zoom.us", "🎥"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_engine_is_in_catalog() {
        assert_eq!(default_engine().key, DEFAULT_ENGINE);
        assert_eq!(find_engine(DEFAULT_ENGINE), Some(default_engine()));
    }

    #[test]
    fn engine_keys_are_unique() {
        for (i, a) in ENGINES.iter().enumerate() {
            assert!(ENGINES[i + 1..].iter().all(|b| b.key != a.key), "{}", a.key);
        }
    }

    #[test]
    fn unknown_engine_is_none() {
        assert!(find_engine("altavista").is_none());
        assert!(find_engine("").is_none());
    }
}
