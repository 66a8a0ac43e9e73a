/// Screen views
///
/// Pure view code: every function takes form state and returns an
/// `Element`. All behavior lives in the update loop in main.rs.

pub mod comparator;
pub mod dashboard;
pub mod home;
pub mod predictor;

use iced::Color;

/// Parse a `#rrggbb` display color coming from match details.
/// Falls back to white so a malformed color can never break rendering.
pub fn tier_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Color::WHITE;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();

    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => Color::from_rgb8(r, g, b),
        _ => Color::WHITE,
    }
}
