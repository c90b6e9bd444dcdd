use std::ops::{Index, IndexMut};

use itertools::{Itertools, iproduct};
use serde::{Deserialize, Serialize};

use crate::{Color, CubeError, Face, Transform};

/// State of an NxNxN cube.
///
/// Stickers are addressed by `(face, row, col)`, with rows and columns in
/// `0..size` as drawn in the net described in [`crate::Face`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(into = "CubeLayout", try_from = "CubeLayout")]
pub struct Cube {
    size: usize,
    /// Stickers in load order: face-major, then row-major.
    stickers: Vec<Color>,
}

impl Cube {
    /// Constructs a solved cube with edge length `size`.
    pub fn new(size: usize) -> Result<Self, CubeError> {
        Self::from_stickers(
            size,
            Face::ALL
                .into_iter()
                .flat_map(|face| std::iter::repeat_n(face.solved_color(), size * size)),
        )
    }

    /// Constructs a cube from `6 * size * size` stickers, given face by face
    /// with each face in row-major order.
    ///
    /// Colors are not checked; use [`Cube::validate()`] afterwards if the
    /// source is untrusted.
    pub fn from_stickers(
        size: usize,
        stickers: impl IntoIterator<Item = Color>,
    ) -> Result<Self, CubeError> {
        if size == 0 {
            return Err(CubeError::InvalidSize);
        }
        let stickers = stickers.into_iter().collect_vec();
        let expected = 6 * size * size;
        if stickers.len() != expected {
            return Err(CubeError::StickerCount {
                expected,
                got: stickers.len(),
            });
        }
        Ok(Self { size, stickers })
    }

    /// Returns the edge length of the cube.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns all stickers in load order.
    pub fn stickers(&self) -> &[Color] {
        &self.stickers
    }

    /// Returns the stickers of a face in row-major order.
    pub fn face_stickers(&self, face: Face) -> &[Color] {
        let len = self.size * self.size;
        &self.stickers[face.index() * len..][..len]
    }

    /// Returns an iterator over the rows of a face.
    pub fn face_rows(&self, face: Face) -> impl Iterator<Item = &[Color]> {
        self.face_stickers(face).chunks(self.size)
    }

    /// Returns the sticker at a position, or `None` if the row or column is
    /// out of range.
    pub fn get(&self, face: Face, row: usize, col: usize) -> Option<Color> {
        let i = self.checked_index(face, row, col)?;
        Some(self.stickers[i])
    }

    /// Returns a mutable reference to the sticker at a position, or `None` if
    /// the row or column is out of range.
    ///
    /// Nothing prevents writing an impossible state.
    pub fn get_mut(&mut self, face: Face, row: usize, col: usize) -> Option<&mut Color> {
        let i = self.checked_index(face, row, col)?;
        Some(&mut self.stickers[i])
    }

    /// Returns an iterator over every sticker along with its position.
    pub fn iter(&self) -> impl Iterator<Item = (Face, usize, usize, Color)> + '_ {
        let n = self.size;
        iproduct!(Face::ALL, 0..n, 0..n)
            .zip(&self.stickers)
            .map(|((face, row, col), &color)| (face, row, col, color))
    }

    fn checked_index(&self, face: Face, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| sticker_index(self.size, face, row, col))
    }

    /// Turns `face` by `times` clockwise quarter turns, as seen from outside
    /// the cube, along with the `depth - 1` layers behind it.
    ///
    /// `times` is taken modulo 4, so negative values turn counterclockwise.
    /// With `depth == size` this reorients the whole cube.
    ///
    /// If `times` is a multiple of 4, this does nothing and `face` and `depth`
    /// are not checked.
    pub fn rotate(
        &mut self,
        face: usize,
        depth: usize,
        times: i32,
    ) -> Result<&mut Self, CubeError> {
        let quarter_turns = times.rem_euclid(4);
        if quarter_turns == 0 {
            return Ok(self);
        }

        let face = Face::from_index(face).ok_or(CubeError::InvalidFace(face))?;
        if !(1..=self.size).contains(&depth) {
            return Err(CubeError::InvalidDepth {
                depth,
                size: self.size,
            });
        }

        log::debug!("turning {face} face, depth {depth}, {quarter_turns} quarter turn(s)");
        for _ in 0..quarter_turns {
            self.quarter_turn(face, depth);
        }
        Ok(self)
    }

    /// Performs one clockwise quarter turn. `depth` must be in `1..=size`.
    fn quarter_turn(&mut self, face: Face, depth: usize) {
        let n = self.size;
        let source = &self.stickers;
        let mut scratch = source.clone();

        let mut rotate_face = |face: Face, transform: Transform| {
            for coords in iproduct!(0..n, 0..n) {
                let (row, col) = transform.apply(n, coords);
                scratch[sticker_index(n, face, row, col)] =
                    source[sticker_index(n, face, coords.0, coords.1)];
            }
        };
        rotate_face(face, Transform::Clockwise);
        if depth == n {
            // Seen from its own side, the far face turns the other way.
            rotate_face(face.opposite(), Transform::CounterClockwise);
        }

        for (from, to) in face.ring().into_iter().circular_tuple_windows() {
            for ring_coords in iproduct!(0..depth, 0..n) {
                let (src_row, src_col) = from.transform.apply(n, ring_coords);
                let (dst_row, dst_col) = to.transform.apply(n, ring_coords);
                scratch[sticker_index(n, to.face, dst_row, dst_col)] =
                    source[sticker_index(n, from.face, src_row, src_col)];
            }
        }

        log::trace!("committed quarter turn of {face} face");
        self.stickers = scratch;
    }
}

fn sticker_index(size: usize, face: Face, row: usize, col: usize) -> usize {
    (face.index() * size + row) * size + col
}

impl Index<(Face, usize, usize)> for Cube {
    type Output = Color;

    fn index(&self, (face, row, col): (Face, usize, usize)) -> &Self::Output {
        assert!(
            row < self.size && col < self.size,
            "sticker ({row}, {col}) out of range for size {}",
            self.size,
        );
        &self.stickers[sticker_index(self.size, face, row, col)]
    }
}

impl IndexMut<(Face, usize, usize)> for Cube {
    fn index_mut(&mut self, (face, row, col): (Face, usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.size && col < self.size,
            "sticker ({row}, {col}) out of range for size {}",
            self.size,
        );
        &mut self.stickers[sticker_index(self.size, face, row, col)]
    }
}

/// Serialization format for [`Cube`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
struct CubeLayout {
    size: usize,
    /// Six faces, each a list of rows.
    faces: Vec<Vec<Vec<Color>>>,
}

impl From<Cube> for CubeLayout {
    fn from(cube: Cube) -> Self {
        let faces = Face::ALL
            .into_iter()
            .map(|face| cube.face_rows(face).map(<[Color]>::to_vec).collect())
            .collect();
        CubeLayout {
            size: cube.size,
            faces,
        }
    }
}

impl TryFrom<CubeLayout> for Cube {
    type Error = CubeError;

    fn try_from(layout: CubeLayout) -> Result<Self, Self::Error> {
        let size = layout.size;
        let is_square = |face: &Vec<Vec<Color>>| {
            face.len() == size && face.iter().all(|row| row.len() == size)
        };
        if layout.faces.len() != 6 || !layout.faces.iter().all(is_square) {
            return Err(CubeError::LayoutShape { size });
        }
        Cube::from_stickers(size, layout.faces.into_iter().flatten().flatten())
    }
}
