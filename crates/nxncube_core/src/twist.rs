//! Text notation for turns.
//!
//! A twist is written `<face>[:<depth>][:<times>]`, where `<face>` is either a
//! face index or a face name such as `front` or `F`. Depth and times both
//! default to 1. A `'` directly after the face inverts the twist, so `F'`
//! means `front:1:-1`.

use std::fmt;
use std::str::FromStr;

use nom::branch::alt;
use nom::character::complete::{self as character, alpha1, char, digit1};
use nom::combinator::{all_consuming, map_res, opt};
use nom::sequence::preceded;
use nom::{IResult, Parser};

use crate::{Cube, CubeError, Face, ParseTwistError};

/// Single call to [`Cube::rotate()`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Twist {
    /// Index of the face to turn.
    pub face: usize,
    /// Number of layers to turn, counting from the face inward.
    pub depth: usize,
    /// Number of clockwise quarter turns.
    pub times: i32,
}

impl Twist {
    /// Constructs a twist of a face.
    pub fn new(face: Face, depth: usize, times: i32) -> Self {
        Self {
            face: face.index(),
            depth,
            times,
        }
    }

    /// Returns the twist that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            times: self.times.wrapping_neg(),
            ..self
        }
    }
}

impl fmt::Display for Twist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Face::from_index(self.face) {
            Some(face) => write!(f, "{face}")?,
            None => write!(f, "{}", self.face)?,
        }
        write!(f, ":{}:{}", self.depth, self.times)
    }
}

impl FromStr for Twist {
    type Err = ParseTwistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all_consuming(twist)
            .parse(s.trim())
            .map(|(_rest, twist)| twist)
            .map_err(|_| ParseTwistError::Syntax(s.to_owned()))
    }
}

fn number(input: &str) -> IResult<&str, usize> {
    map_res(digit1, str::parse::<usize>).parse(input)
}

fn face(input: &str) -> IResult<&str, usize> {
    alt((
        number,
        map_res(alpha1, |name: &str| name.parse::<Face>().map(Face::index)),
    ))
    .parse(input)
}

fn twist(input: &str) -> IResult<&str, Twist> {
    let (input, face) = face(input)?;
    let (input, prime) = opt(char('\'')).parse(input)?;
    let (input, depth) = opt(preceded(char(':'), number)).parse(input)?;
    let (input, times) = opt(preceded(char(':'), character::i32)).parse(input)?;

    let times = times.unwrap_or(1);
    let twist = Twist {
        face,
        depth: depth.unwrap_or(1),
        times: if prime.is_some() { times.wrapping_neg() } else { times },
    };
    Ok((input, twist))
}

/// Parses a whitespace-separated sequence of twists.
pub fn parse_twists(s: &str) -> Result<Vec<Twist>, ParseTwistError> {
    s.split_whitespace().map(str::parse).collect()
}

impl Cube {
    /// Applies a twist. See [`Cube::rotate()`].
    pub fn apply(&mut self, twist: Twist) -> Result<&mut Self, CubeError> {
        self.rotate(twist.face, twist.depth, twist.times)
    }

    /// Applies a sequence of twists, stopping at the first one that fails.
    pub fn apply_all(
        &mut self,
        twists: impl IntoIterator<Item = Twist>,
    ) -> Result<&mut Self, CubeError> {
        for twist in twists {
            self.apply(twist)?;
        }
        Ok(self)
    }
}
