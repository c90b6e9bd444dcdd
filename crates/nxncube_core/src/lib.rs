//! State and rotation engine for an NxNxN twisty puzzle cube.
//!
//! A [`Cube`] holds six [`Face`] grids of [`Color`] stickers. Turns are
//! performed with [`Cube::rotate()`], which moves a chosen face together with
//! any number of layers behind it.

mod color;
mod cube;
mod error;
mod face;
mod transform;
mod twist;
mod validate;

pub use color::Color;
pub use cube::Cube;
pub use error::{CubeError, Defect, ParseTwistError};
pub use face::{ADJACENCY, Face, RING_TRANSFORMS, RingSlot};
pub use transform::Transform;
pub use twist::{Twist, parse_twists};

/// Size of the cube constructed when none is specified.
pub const DEFAULT_SIZE: usize = 4;

#[cfg(test)]
mod tests;
