use thiserror::Error;

use crate::{Color, Face};

/// Error produced by an operation on a [`crate::Cube`].
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CubeError {
    /// Face index is not in `0..6`.
    #[error("invalid face {0}; face must be in 0..6")]
    InvalidFace(usize),
    /// Turn depth is not in `1..=size`.
    #[error("invalid depth {depth}; depth must be in 1..={size}")]
    InvalidDepth {
        /// Requested depth.
        depth: usize,
        /// Size of the cube.
        size: usize,
    },
    /// Cube size is zero.
    #[error("cube size must be at least 1")]
    InvalidSize,
    /// Wrong number of sticker values supplied.
    #[error("expected {expected} stickers, got {got}")]
    StickerCount {
        /// Number of stickers on a cube of the requested size.
        expected: usize,
        /// Number of stickers supplied.
        got: usize,
    },
    /// Layout does not have six square faces of the declared size.
    #[error("layout must have 6 faces of {size}x{size} stickers")]
    LayoutShape {
        /// Declared size of the cube.
        size: usize,
    },
}

impl CubeError {
    /// Returns whether the error was caused by an invalid argument to
    /// [`crate::Cube::rotate()`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidFace(_) | Self::InvalidDepth { .. })
    }
}

/// Reason that a cube state is impossible.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum Defect {
    /// Sticker has a color outside `0..6`.
    #[error("sticker at {face} ({row}, {col}) has invalid color {color}")]
    ColorOutOfRange {
        /// Face of the sticker.
        face: Face,
        /// Row of the sticker.
        row: usize,
        /// Column of the sticker.
        col: usize,
        /// Invalid color.
        color: Color,
    },
    /// Color appears the wrong number of times.
    #[error("color {color} appears {count} times; expected {expected}")]
    WrongColorCount {
        /// Color with the wrong count.
        color: Color,
        /// Number of stickers with the color.
        count: usize,
        /// Number of stickers on each face.
        expected: usize,
    },
}

/// Error produced when parsing a [`crate::Twist`].
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseTwistError {
    /// String does not match `<face>[:<depth>][:<times>]`.
    #[error("invalid twist {0:?}; expected <face>[:<depth>][:<times>]")]
    Syntax(String),
}
