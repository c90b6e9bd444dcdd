use std::fmt;

use nxncube_core::{Color, Cube, Face};
use owo_colors::OwoColorize;

use crate::Palette;

/// Faces drawn in the middle band of the net, left to right.
const BAND: [Face; 4] = [Face::Left, Face::Front, Face::Right, Face::Back];

/// Display wrapper that draws a cube as a cross-shaped net.
///
/// ```text
///    +--+
///    |00|
///    |00|
/// +--+--+--+--+
/// |11|22|33|44|
/// |11|22|33|44|
/// +--+--+--+--+
///    |55|
///    |55|
///    +--+
/// ```
#[derive(Debug, Copy, Clone)]
pub struct CubeNet<'a> {
    cube: &'a Cube,
    palette: Palette,
    show_digits: bool,
    color: bool,
}

impl<'a> CubeNet<'a> {
    /// Constructs a net with the default palette, digits, and ANSI colors.
    pub fn new(cube: &'a Cube) -> Self {
        Self {
            cube,
            palette: Palette::default(),
            show_digits: true,
            color: true,
        }
    }

    /// Sets the palette.
    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Sets whether to print each sticker's color index.
    #[must_use]
    pub fn show_digits(mut self, show_digits: bool) -> Self {
        self.show_digits = show_digits;
        self
    }

    /// Sets whether to emit ANSI escape codes.
    #[must_use]
    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn write_sticker(&self, f: &mut fmt::Formatter<'_>, color: Color) -> fmt::Result {
        let symbol = match (color.is_valid(), self.show_digits) {
            (false, _) => '?',
            (true, true) => char::from(b'0' + color.0),
            (true, false) => ' ',
        };
        match self.palette.get(color).filter(|_| self.color) {
            // Each styled sticker ends by restoring the default background.
            Some(background) => write!(f, "{}", symbol.on_color(background.ansi())),
            None => write!(f, "{symbol}"),
        }
    }

    fn write_row(&self, f: &mut fmt::Formatter<'_>, row: &[Color]) -> fmt::Result {
        row.iter().try_for_each(|&color| self.write_sticker(f, color))
    }

    fn write_lone_face(
        &self,
        f: &mut fmt::Formatter<'_>,
        face: Face,
        indent: &str,
    ) -> fmt::Result {
        for row in self.cube.face_rows(face) {
            write!(f, "{indent}|")?;
            self.write_row(f, row)?;
            writeln!(f, "|")?;
        }
        Ok(())
    }
}

impl fmt::Display for CubeNet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.cube.size();
        let segment = format!("{}+", "-".repeat(size));
        let indent = " ".repeat(size + 1);
        let band_border = format!("+{}", segment.repeat(BAND.len()));

        writeln!(f, "{indent}+{segment}")?;
        self.write_lone_face(f, Face::Top, &indent)?;

        writeln!(f, "{band_border}")?;
        let mut band_rows = BAND.map(|face| self.cube.face_rows(face));
        for _ in 0..size {
            for rows in &mut band_rows {
                write!(f, "|")?;
                if let Some(row) = rows.next() {
                    self.write_row(f, row)?;
                }
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{band_border}")?;

        self.write_lone_face(f, Face::Bottom, &indent)?;
        writeln!(f, "{indent}+{segment}")
    }
}
