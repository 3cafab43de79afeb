//! Theme tokens — class colours and shared styles.
//!
//! The three prediction classes keep the upstream report's semantics:
//! green for UP, red for DOWN, grey for NEUTRAL. Everything else is the
//! usual dashboard furniture: a blue accent for focus and info, steel blue
//! for muted chrome, orange for warnings.

use predlab_core::Direction;
use ratatui::style::{Color, Modifier, Style};

/// Blue accent (focus, info).
pub const ACCENT: Color = Color::Rgb(26, 115, 232);
/// UP class.
pub const POSITIVE: Color = Color::Rgb(76, 175, 80);
/// DOWN class.
pub const NEGATIVE: Color = Color::Rgb(244, 67, 54);
/// NEUTRAL class.
pub const NEUTRAL: Color = Color::Rgb(158, 158, 158);
/// Warnings.
pub const WARNING: Color = Color::Rgb(255, 140, 0);
/// Muted chrome and secondary text.
pub const MUTED: Color = Color::Rgb(100, 149, 237);
/// Primary text.
pub const TEXT: Color = Color::White;

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

pub fn direction_color(direction: Direction) -> Color {
    match direction {
        Direction::Up => POSITIVE,
        Direction::Down => NEGATIVE,
        Direction::Neutral => NEUTRAL,
    }
}

pub fn direction_style(direction: Direction) -> Style {
    Style::default().fg(direction_color(direction))
}

pub fn success_style(success: bool) -> Style {
    if success {
        positive()
    } else {
        negative()
    }
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Colour for a price series, keyed by its name.
pub fn price_color(name: &str) -> Color {
    match name {
        "Predicted Open" => ACCENT,
        "Actual Open" => Color::Rgb(255, 255, 0),
        "Predicted Close" => NEGATIVE,
        "Actual Close" => TEXT,
        "Predicted High" => POSITIVE,
        "Actual High" => WARNING,
        "Predicted Low" => Color::Rgb(233, 30, 99),
        "Actual Low" => Color::Rgb(255, 215, 0),
        _ => MUTED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_colours_follow_the_report_semantics() {
        assert_eq!(direction_color(Direction::Up), POSITIVE);
        assert_eq!(direction_color(Direction::Down), NEGATIVE);
        assert_eq!(direction_color(Direction::Neutral), NEUTRAL);
    }

    #[test]
    fn success_styles_split_hit_and_miss() {
        assert_eq!(success_style(true), positive());
        assert_eq!(success_style(false), negative());
    }

    #[test]
    fn every_price_series_has_a_distinct_colour() {
        let names = [
            "Predicted Open",
            "Actual Open",
            "Predicted Close",
            "Actual Close",
            "Predicted High",
            "Actual High",
            "Predicted Low",
            "Actual Low",
        ];
        let colours: Vec<Color> = names.iter().map(|n| price_color(n)).collect();
        for (i, a) in colours.iter().enumerate() {
            for b in colours.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        assert_eq!(price_color("Unknown"), MUTED);
    }
}
