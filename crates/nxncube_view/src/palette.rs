use nxncube_core::Color;
use owo_colors::AnsiColors;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Terminal background color used for a sticker.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[allow(missing_docs)]
pub enum PaletteColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl PaletteColor {
    /// Returns the ANSI color.
    pub fn ansi(self) -> AnsiColors {
        match self {
            PaletteColor::Black => AnsiColors::Black,
            PaletteColor::Red => AnsiColors::Red,
            PaletteColor::Green => AnsiColors::Green,
            PaletteColor::Yellow => AnsiColors::Yellow,
            PaletteColor::Blue => AnsiColors::Blue,
            PaletteColor::Magenta => AnsiColors::Magenta,
            PaletteColor::Cyan => AnsiColors::Cyan,
            PaletteColor::White => AnsiColors::White,
            PaletteColor::BrightBlack => AnsiColors::BrightBlack,
            PaletteColor::BrightRed => AnsiColors::BrightRed,
            PaletteColor::BrightGreen => AnsiColors::BrightGreen,
            PaletteColor::BrightYellow => AnsiColors::BrightYellow,
            PaletteColor::BrightBlue => AnsiColors::BrightBlue,
            PaletteColor::BrightMagenta => AnsiColors::BrightMagenta,
            PaletteColor::BrightCyan => AnsiColors::BrightCyan,
            PaletteColor::BrightWhite => AnsiColors::BrightWhite,
        }
    }
}

/// Background color for each of the six sticker colors.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Palette(pub [PaletteColor; Color::COUNT]);

impl Default for Palette {
    fn default() -> Self {
        Self([
            PaletteColor::Red,
            PaletteColor::Blue,
            PaletteColor::White,
            PaletteColor::Green,
            PaletteColor::Yellow,
            PaletteColor::Magenta,
        ])
    }
}

impl Palette {
    /// Returns the background for a sticker color, or `None` if the color is
    /// invalid. Invalid colors are drawn with the terminal's default colors.
    pub fn get(&self, color: Color) -> Option<PaletteColor> {
        self.0.get(color.index()).copied()
    }
}
