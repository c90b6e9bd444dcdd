//! Plain-text cube layouts: `6 * size * size` whitespace-separated color
//! indices, face by face, each face in row-major order.

use std::fmt;
use std::io::Read;
use std::num::ParseIntError;

use nxncube_core::{Color, Cube, CubeError, Face};
use thiserror::Error;

/// Error produced when reading a layout.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Token is not a color index.
    #[error("invalid sticker {token:?}: {source}")]
    Sticker {
        /// Offending token.
        token: String,
        /// Underlying parse error.
        #[source]
        source: ParseIntError,
    },
    /// Number of stickers is not `6 * size * size` for any size.
    #[error("{0} stickers do not form a cube")]
    UnknownSize(usize),
    /// Stickers do not fit the requested size.
    #[error(transparent)]
    Cube(#[from] CubeError),
    /// Reading failed.
    #[error("error reading layout: {0}")]
    Io(#[from] std::io::Error),
}

/// Returns the size of a cube with `count` stickers, if there is one.
pub fn infer_size(count: usize) -> Option<usize> {
    let per_face = count / 6;
    if count == 0 || per_face * 6 != count {
        return None;
    }
    let size = per_face.isqrt();
    (size * size == per_face).then_some(size)
}

/// Reads a cube layout from text.
///
/// If `size` is `None`, it is inferred from the number of stickers. Colors
/// from 6 to 255 are accepted; use [`Cube::validate()`] to reject them.
pub fn read_layout(text: &str, size: Option<usize>) -> Result<Cube, LoadError> {
    let stickers = text
        .split_whitespace()
        .map(|token| {
            token.parse().map(Color).map_err(|source| LoadError::Sticker {
                token: token.to_owned(),
                source,
            })
        })
        .collect::<Result<Vec<Color>, LoadError>>()?;

    let size = match size {
        Some(size) => size,
        None => infer_size(stickers.len()).ok_or(LoadError::UnknownSize(stickers.len()))?,
    };
    log::debug!("read {} stickers for a cube of size {size}", stickers.len());
    Ok(Cube::from_stickers(size, stickers)?)
}

/// Reads a cube layout from a reader. See [`read_layout()`].
pub fn read_layout_from(mut reader: impl Read, size: Option<usize>) -> Result<Cube, LoadError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    read_layout(&text, size)
}

/// Display wrapper that writes a cube in the format accepted by
/// [`read_layout()`], one face per paragraph.
#[derive(Debug, Copy, Clone)]
pub struct LayoutText<'a>(pub &'a Cube);

impl fmt::Display for LayoutText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, face) in Face::ALL.into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for row in self.0.face_rows(face) {
                let mut first = true;
                for color in row {
                    if !first {
                        write!(f, " ")?;
                    }
                    first = false;
                    write!(f, "{color}")?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
