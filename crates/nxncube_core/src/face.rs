//! Face identities and the fixed topology that connects them.
//!
//! The faces are laid out as a cross-shaped net, each seen from outside the
//! cube with rows running down and columns running right:
//!
//! ```text
//!       +---+
//!       | 0 |
//!   +---+---+---+---+
//!   | 1 | 2 | 3 | 4 |
//!   +---+---+---+---+
//!       | 5 |
//!       +---+
//! ```

use strum::{Display, EnumString};

use crate::{Color, Transform};

/// Face of the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Face {
    /// Top face (`U`).
    #[strum(to_string = "top", serialize = "U")]
    Top = 0,
    /// Left face (`L`).
    #[strum(to_string = "left", serialize = "L")]
    Left = 1,
    /// Front face (`F`).
    #[strum(to_string = "front", serialize = "F")]
    Front = 2,
    /// Right face (`R`).
    #[strum(to_string = "right", serialize = "R")]
    Right = 3,
    /// Back face (`B`).
    #[strum(to_string = "back", serialize = "B")]
    Back = 4,
    /// Bottom face (`D`).
    #[strum(to_string = "bottom", serialize = "D")]
    Bottom = 5,
}

/// Neighbors of each face, in the order that stickers travel during one
/// clockwise quarter turn of that face. Stickers on `ADJACENCY[f][i]` move to
/// `ADJACENCY[f][(i + 1) % 4]`.
pub const ADJACENCY: [[Face; 4]; 6] = {
    use Face::*;
    [
        [Right, Front, Left, Back],
        [Front, Bottom, Back, Top],
        [Right, Bottom, Left, Top],
        [Back, Bottom, Front, Top],
        [Left, Bottom, Right, Top],
        [Right, Back, Left, Front],
    ]
};

/// Orientation of each neighbor in [`ADJACENCY`] relative to the turned face.
///
/// `RING_TRANSFORMS[f][i]` maps a ring coordinate `(layer, position)` to the
/// `(row, col)` of that sticker on `ADJACENCY[f][i]`, where layer 0 is the
/// row or column bordering `f`. Positions line up across the ring, so a
/// sticker at `(layer, position)` on one neighbor moves to the same
/// `(layer, position)` on the next.
pub const RING_TRANSFORMS: [[Transform; 4]; 6] = {
    use Transform::*;
    [
        [Identity, Identity, Identity, Identity],
        [CounterClockwise, CounterClockwise, Clockwise, CounterClockwise],
        [CounterClockwise, Identity, Clockwise, HalfTurn],
        [CounterClockwise, Clockwise, Clockwise, Clockwise],
        [CounterClockwise, HalfTurn, Clockwise, Identity],
        [HalfTurn, HalfTurn, HalfTurn, HalfTurn],
    ]
};

/// Neighbor of a turned face, together with its orientation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RingSlot {
    /// Neighboring face.
    pub face: Face,
    /// Transform from ring coordinates to the neighbor's own coordinates.
    pub transform: Transform,
}

impl Face {
    /// All faces, in index order.
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Left,
        Face::Front,
        Face::Right,
        Face::Back,
        Face::Bottom,
    ];

    /// Returns the face with index `i`, or `None` if `i` is not in `0..6`.
    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// Returns the index of the face.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the face on the other side of the cube.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Face::Top => Face::Bottom,
            Face::Left => Face::Right,
            Face::Front => Face::Back,
            Face::Right => Face::Left,
            Face::Back => Face::Front,
            Face::Bottom => Face::Top,
        }
    }

    /// Returns the color of this face when the cube is solved.
    pub fn solved_color(self) -> Color {
        Color(self as u8)
    }

    /// Returns the four neighbors of the face, in the order that stickers
    /// travel during a clockwise quarter turn.
    pub fn ring(self) -> [RingSlot; 4] {
        let faces = ADJACENCY[self.index()];
        let transforms = RING_TRANSFORMS[self.index()];
        std::array::from_fn(|i| RingSlot {
            face: faces[i],
            transform: transforms[i],
        })
    }
}
