use itertools::Itertools;

use crate::{Color, Cube, Defect, Face};

impl Cube {
    /// Returns whether every face is a single color, with no color used on
    /// two faces.
    ///
    /// This does not check that colors are in range; see [`Cube::validate()`].
    pub fn is_solved(&self) -> bool {
        Face::ALL
            .into_iter()
            .map(|face| {
                let (&first, rest) = self.face_stickers(face).split_first()?;
                rest.iter().all(|&c| c == first).then_some(first)
            })
            .collect::<Option<Vec<Color>>>()
            .is_some_and(|colors| colors.into_iter().all_unique())
    }

    /// Checks that every sticker has a valid color and that each color
    /// appears exactly `size * size` times.
    ///
    /// This does not check whether the state can be reached by turning a
    /// solved cube.
    pub fn validate(&self) -> Result<(), Defect> {
        let mut counts = [0_usize; Color::COUNT];
        for (face, row, col, color) in self.iter() {
            match counts.get_mut(color.index()) {
                Some(count) => *count += 1,
                None => {
                    return Err(Defect::ColorOutOfRange {
                        face,
                        row,
                        col,
                        color,
                    });
                }
            }
        }

        let expected = self.size() * self.size();
        for (color, &count) in Face::ALL.map(Face::solved_color).iter().zip(&counts) {
            if count != expected {
                return Err(Defect::WrongColorCount {
                    color: *color,
                    count,
                    expected,
                });
            }
        }
        Ok(())
    }

    /// Returns whether [`Cube::validate()`] succeeds.
    pub fn is_correct(&self) -> bool {
        self.validate().is_ok()
    }
}
