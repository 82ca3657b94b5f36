#![forbid(unsafe_code)]

//! Palette and text styles shared by the page sections.

use crate::frame::{Color, Style};

/// Heritage/parchment/gold tones.
pub mod palette {
    use super::Color;

    pub const HERITAGE_200: Color = Color::Rgb(0xeb, 0xe3, 0xd1);
    pub const HERITAGE_500: Color = Color::Rgb(0xb8, 0x99, 0x68);
    pub const HERITAGE_700: Color = Color::Rgb(0x8a, 0x66, 0x38);
    pub const PARCHMENT_100: Color = Color::Rgb(0xfa, 0xf7, 0xf0);
    pub const GOLD_400: Color = Color::Rgb(0xe5, 0xbc, 0x4a);
    pub const GOLD_600: Color = Color::Rgb(0xc0, 0x83, 0x23);
}

/// Page and section titles.
pub const fn title() -> Style {
    Style::new().fg(palette::PARCHMENT_100).bold()
}

/// Section eyebrow labels ("Our Scale", "Immersive exhibition").
pub const fn label() -> Style {
    Style::new().fg(palette::GOLD_400).bold()
}

/// Running text.
pub const fn body() -> Style {
    Style::new().fg(palette::HERITAGE_200)
}

/// Secondary text: dates, counts, descriptions.
pub const fn muted() -> Style {
    Style::new().fg(palette::HERITAGE_500)
}

/// Category badges.
pub const fn badge() -> Style {
    Style::new().fg(Color::Black).bg(palette::GOLD_600)
}

/// Buttons and calls to action.
pub const fn button() -> Style {
    Style::new().fg(Color::Black).bg(palette::GOLD_400).bold()
}

/// The selected item of a menu or nav bar.
pub const fn active() -> Style {
    Style::new().fg(palette::GOLD_400).bold().underline()
}

/// Large statistic numbers.
pub const fn figure() -> Style {
    Style::new().fg(palette::GOLD_400).bold()
}

/// Horizontal rules.
pub const fn rule() -> Style {
    Style::new().fg(palette::HERITAGE_700)
}

/// Applied over a style while the carousel settles.
pub const fn dimmed(style: Style) -> Style {
    style.dim()
}
