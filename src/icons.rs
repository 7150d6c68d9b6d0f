use crate::catalog::{FALLBACK_ICON, SITE_ICONS};
use url::Url;

/// Number of tile colour buckets.
pub const COLOR_BUCKETS: u8 = 8;

/// Pick a glyph for `url` from the site table.
pub fn resolve_icon(url: &str) -> &'static str {
    let Ok(parsed) = Url::parse(url) else {
        return FALLBACK_ICON;
    };
    let Some(host) = parsed.host_str() else {
        return FALLBACK_ICON;
    };
    SITE_ICONS
        .iter()
        .find(|(domain, _)| host.contains(domain))
        .map(|(_, icon)| *icon)
        .unwrap_or(FALLBACK_ICON)
}

/// Deterministic colour bucket in `1..=COLOR_BUCKETS` for a tile label.
///
/// Polynomial hash over UTF-16 code units with 32-bit wraparound, so the
/// bucket of a label never changes between runs.
pub fn color_bucket(label: &str) -> u8 {
    let hash = label
        .encode_utf16()
        .fold(0i32, |h, c| h.wrapping_mul(31).wrapping_add(c as i32));
    (hash.unsigned_abs() % COLOR_BUCKETS as u32) as u8 + 1
}
