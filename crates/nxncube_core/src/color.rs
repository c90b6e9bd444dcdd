use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Face;

/// Color of a single sticker.
///
/// Color `i` is the color of face `i` on a solved cube. Only colors less than
/// [`Color::COUNT`] are valid, but any value may be stored; see
/// [`crate::Cube::validate()`].
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone)]
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Color(pub u8);

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Face> for Color {
    fn from(face: Face) -> Self {
        face.solved_color()
    }
}

impl Color {
    /// Number of distinct valid colors.
    pub const COUNT: usize = 6;

    /// Returns the color as an index.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns whether the color is one of the six colors on a real cube.
    pub fn is_valid(self) -> bool {
        self.index() < Self::COUNT
    }
}
