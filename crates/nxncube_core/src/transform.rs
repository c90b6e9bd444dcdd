//! Quarter-turn rotations of a square grid of coordinates.

/// Rotation of an N×N grid, acting on `(row, col)` coordinates.
///
/// These are the four rotations of the square (no reflections). They are used
/// to reindex a sticker as it crosses from one face's local coordinate frame
/// into another's.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Transform {
    /// No rotation.
    #[default]
    Identity,
    /// Quarter turn clockwise: `(x, y) -> (y, N-1-x)`.
    Clockwise,
    /// Quarter turn counterclockwise: `(x, y) -> (N-1-y, x)`.
    CounterClockwise,
    /// Half turn: `(x, y) -> (N-1-x, N-1-y)`.
    HalfTurn,
}

impl Transform {
    /// All transforms, ordered by number of clockwise quarter turns.
    pub const ALL: [Transform; 4] = [
        Transform::Identity,
        Transform::Clockwise,
        Transform::HalfTurn,
        Transform::CounterClockwise,
    ];

    /// Applies the transform to a coordinate pair in a grid of size `size`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn apply(self, size: usize, (x, y): (usize, usize)) -> (usize, usize) {
        debug_assert!(size > 0, "transform applied to an empty grid");
        let max = size - 1;
        match self {
            Transform::Identity => (x, y),
            Transform::Clockwise => (y, max - x),
            Transform::CounterClockwise => (max - y, x),
            Transform::HalfTurn => (max - x, max - y),
        }
    }

    /// Returns the number of clockwise quarter turns, in the range `0..4`.
    pub fn quarter_turns(self) -> u8 {
        match self {
            Transform::Identity => 0,
            Transform::Clockwise => 1,
            Transform::HalfTurn => 2,
            Transform::CounterClockwise => 3,
        }
    }

    /// Returns the transform consisting of `n` clockwise quarter turns.
    pub fn from_quarter_turns(n: i32) -> Self {
        Self::ALL[n.rem_euclid(4) as usize]
    }

    /// Returns the transform that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self::from_quarter_turns(-i32::from(self.quarter_turns()))
    }

    /// Returns the transform equivalent to applying `self` and then `other`.
    #[must_use]
    pub fn then(self, other: Self) -> Self {
        let total = i32::from(self.quarter_turns()) + i32::from(other.quarter_turns());
        Self::from_quarter_turns(total)
    }
}

#[cfg(test)]
mod tests {
    use itertools::iproduct;
    use proptest::prelude::*;

    use super::*;

    fn all_coords(size: usize) -> impl Iterator<Item = (usize, usize)> {
        iproduct!(0..size, 0..size)
    }

    #[test]
    #[should_panic = "empty grid"]
    #[cfg(debug_assertions)]
    fn test_transform_empty_grid() {
        Transform::Identity.apply(0, (0, 0));
    }

    #[test]
    fn test_transform_formulas() {
        assert_eq!(Transform::Identity.apply(4, (1, 2)), (1, 2));
        assert_eq!(Transform::Clockwise.apply(4, (1, 2)), (2, 2));
        assert_eq!(Transform::CounterClockwise.apply(4, (1, 2)), (1, 1));
        assert_eq!(Transform::HalfTurn.apply(4, (1, 2)), (2, 1));
        assert_eq!(Transform::Clockwise.apply(1, (0, 0)), (0, 0));
    }

    #[test]
    fn test_transforms_are_bijections() {
        for size in 1..=6 {
            for t in Transform::ALL {
                let mut seen = vec![false; size * size];
                for coords in all_coords(size) {
                    let (x, y) = t.apply(size, coords);
                    assert!(x < size && y < size, "{t:?} left the grid");
                    assert!(!seen[x * size + y], "{t:?} is not injective");
                    seen[x * size + y] = true;
                }
            }
        }
    }

    #[test]
    fn test_transform_cycles() {
        for size in 1..=5 {
            for coords in all_coords(size) {
                let four_times = |t: Transform| (0..4).fold(coords, |c, _| t.apply(size, c));
                assert_eq!(four_times(Transform::Clockwise), coords);
                assert_eq!(four_times(Transform::CounterClockwise), coords);
                let half = Transform::HalfTurn;
                assert_eq!(half.apply(size, half.apply(size, coords)), coords);
            }
        }
    }

    proptest! {
        #[test]
        fn proptest_transform_composition(
            a in any::<Transform>(),
            b in any::<Transform>(),
            size in 1..8_usize
        ) {
            for coords in all_coords(size) {
                let composed = a.then(b).apply(size, coords);
                prop_assert_eq!(composed, b.apply(size, a.apply(size, coords)));
                prop_assert_eq!(a.inverse().apply(size, a.apply(size, coords)), coords);
            }
        }
    }
}
