use crate::icons::COLOR_BUCKETS;
use crate::preferences::Theme;
use eframe::egui;

const LIGHT_TILES: [(u8, u8, u8); COLOR_BUCKETS as usize] = [
    (255, 205, 210),
    (248, 187, 208),
    (225, 190, 231),
    (197, 202, 233),
    (187, 222, 251),
    (178, 235, 242),
    (200, 230, 201),
    (255, 236, 179),
];

const DARK_TILES: [(u8, u8, u8); COLOR_BUCKETS as usize] = [
    (183, 28, 28),
    (136, 14, 79),
    (74, 20, 140),
    (26, 35, 126),
    (13, 71, 161),
    (0, 96, 100),
    (27, 94, 32),
    (130, 119, 23),
];

pub fn visuals_for(theme: Theme) -> egui::Visuals {
    match theme {
        Theme::Light => egui::Visuals::light(),
        Theme::Dark => egui::Visuals::dark(),
    }
}

/// Background colour for a tile in colour bucket `bucket` (1-based).
pub fn tile_color(theme: Theme, bucket: u8) -> egui::Color32 {
    let palette = match theme {
        Theme::Light => &LIGHT_TILES,
        Theme::Dark => &DARK_TILES,
    };
    let idx = (bucket.clamp(1, COLOR_BUCKETS) - 1) as usize;
    let (r, g, b) = palette[idx];
    egui::Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visuals_follow_theme() {
        assert!(!visuals_for(Theme::Light).dark_mode);
        assert!(visuals_for(Theme::Dark).dark_mode);
    }

    #[test]
    fn buckets_map_to_distinct_colors() {
        for theme in [Theme::Light, Theme::Dark] {
            let colors: Vec<_> = (1..=COLOR_BUCKETS).map(|b| tile_color(theme, b)).collect();
            for (i, c) in colors.iter().enumerate() {
                assert!(!colors[i + 1..].contains(c));
            }
        }
    }

    #[test]
    fn out_of_range_bucket_is_clamped() {
        assert_eq!(tile_color(Theme::Light, 0), tile_color(Theme::Light, 1));
        assert_eq!(tile_color(Theme::Dark, 99), tile_color(Theme::Dark, COLOR_BUCKETS));
    }
}
