use colored::Color;
use herbarium_common::models::Tone;
use herbarium_core::model::Rgb;

pub const PRIMARY: Color = Color::TrueColor { r: 106, g: 168, b: 50 };
pub const SECONDARY: Color = Color::TrueColor { r: 90, g: 139, b: 42 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 107, b: 53 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const BOTANICAL: Color = Color::TrueColor { r: 170, g: 190, b: 150 };
pub const RATING: Color = Color::BrightYellow;
pub const BOOKMARK: Color = Color::TrueColor { r: 155, g: 77, b: 202 };
pub const LIKE: Color = Color::BrightRed;

pub fn tone(tone: Tone) -> Color {
    match tone {
        Tone::Primary => PRIMARY,
        Tone::PrimarySoft => Color::TrueColor { r: 150, g: 200, b: 110 },
        Tone::Accent => ACCENT,
        Tone::AccentSoft => Color::TrueColor { r: 255, g: 160, b: 120 },
        Tone::Secondary => Color::Cyan,
        Tone::Muted => Color::BrightBlack,
        Tone::Calm => Color::Green,
        Tone::Caution => Color::Yellow,
        Tone::Alert => Color::Red,
    }
}

pub fn rgb(color: Rgb) -> Color {
    let Rgb(r, g, b) = color;
    Color::TrueColor { r, g, b }
}
