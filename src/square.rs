use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    num::ParseIntError,
    ops::{Add, Mul},
    str::FromStr,
};

use crate::color::Color;

pub const BOARD_SIZE: i8 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseSquareError {
    InvalidFile(char),
    InvalidRank(char),
    Int(ParseIntError),
    Empty,
    Unexpected(String),
}
impl From<ParseIntError> for ParseSquareError {
    fn from(value: ParseIntError) -> Self {
        ParseSquareError::Int(value)
    }
}
impl Display for ParseSquareError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseSquareError::InvalidFile(c) => write!(
                f,
                "found `{c}`, characters from `a` to `h` were expected instead"
            )?,
            ParseSquareError::InvalidRank(c) => write!(
                f,
                "found `{c}`, characters from `1` to `8` were expected instead"
            )?,
            ParseSquareError::Int(err) => write!(f, "{err}")?,
            ParseSquareError::Empty => write!(f, "expected a square, found nothing")?,
            ParseSquareError::Unexpected(rest) => write!(f, "unexpected `{rest}`")?,
        }
        Ok(())
    }
}
impl Error for ParseSquareError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseSquareError::Int(err) => Some(err),
            _ => None,
        }
    }
}

/// A (row, column) pair. Row 0 is black's back rank.
///
/// Components are signed because move generation for some pieces produces
/// squares past the edge of the board; use [`Square::is_in_bounds`] before
/// indexing with one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}
impl Square {
    pub const fn new(row: i8, col: i8) -> Self {
        Square { row, col }
    }
    pub fn from_chars(file: char, rank: char) -> Result<Self, ParseSquareError> {
        let col = match file {
            'a'..='h' => (file as u8 - b'a') as i8,
            _ => return Err(ParseSquareError::InvalidFile(file)),
        };
        let row = match rank {
            '1'..='8' => 7 - (rank as u8 - b'1') as i8,
            _ => return Err(ParseSquareError::InvalidRank(rank)),
        };
        Ok(Square::new(row, col))
    }
    pub fn is_in_bounds(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }
    /// Every square of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::new(row, col)))
    }
    /// Squares along `direction`, excluding `self`, up to the edge of the board.
    pub fn line_exclusive(self, direction: Vector) -> impl Iterator<Item = Self> {
        debug_assert_ne!(direction, Vector::ZERO);
        (1..)
            .map(move |distance| self + direction * distance)
            .take_while(|square| square.is_in_bounds())
    }
    pub fn lines(self, directions: &[Vector]) -> impl Iterator<Item = Self> {
        directions
            .iter()
            .copied()
            .flat_map(move |direction| self.line_exclusive(direction))
    }
    pub fn offsets(self, offsets: &[Vector]) -> impl Iterator<Item = Self> {
        offsets.iter().map(move |offset| self + *offset)
    }
    pub fn color(self) -> Color {
        if (self.row + self.col) % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }
    pub(crate) fn index(self) -> (usize, usize) {
        debug_assert!(self.is_in_bounds());
        (self.row as usize, self.col as usize)
    }
}
impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)?;
        Ok(())
    }
}
/// Accepts `row col`, `row,col`, `(row, col)` or algebraic `e2`.
impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')')
            .trim();
        if s.is_empty() {
            return Err(ParseSquareError::Empty);
        }
        let mut parts = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());
        let first = parts.next().ok_or(ParseSquareError::Empty)?;
        match parts.next() {
            Some(second) => {
                let rest: Vec<_> = parts.collect();
                if !rest.is_empty() {
                    return Err(ParseSquareError::Unexpected(rest.join(" ")));
                }
                Ok(Square::new(first.parse()?, second.parse()?))
            }
            None => {
                let mut chars = first.chars();
                let (Some(file), Some(rank)) = (chars.next(), chars.next()) else {
                    return Err(ParseSquareError::Unexpected(first.to_owned()));
                };
                let rest = chars.as_str();
                if !rest.is_empty() {
                    return Err(ParseSquareError::Unexpected(rest.to_owned()));
                }
                Square::from_chars(file, rank)
            }
        }
    }
}
impl Add<Vector> for Square {
    type Output = Square;

    fn add(self, rhs: Vector) -> Self::Output {
        Square {
            row: self.row + rhs.row,
            col: self.col + rhs.col,
        }
    }
}
impl From<(i8, i8)> for Square {
    fn from((row, col): (i8, i8)) -> Self {
        Square::new(row, col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector {
    pub row: i8,
    pub col: i8,
}
impl Vector {
    pub const ZERO: Self = Vector { row: 0, col: 0 };

    pub const KNIGHT_MOVES: [Self; 8] = [
        Vector { row: -1, col: 2 },
        Vector { row: 1, col: 2 },
        Vector { row: -2, col: 1 },
        Vector { row: 2, col: 1 },
        Vector { row: -2, col: -1 },
        Vector { row: 2, col: -1 },
        Vector { row: -1, col: -2 },
        Vector { row: 1, col: -2 },
    ];
    // orthogonal steps only
    pub const KING_MOVES: [Self; 4] = [
        Vector { row: -1, col: 0 },
        Vector { row: 1, col: 0 },
        Vector { row: 0, col: -1 },
        Vector { row: 0, col: 1 },
    ];
    pub const ROOK_DIRECTIONS: [Self; 4] = [
        Vector { row: 1, col: 0 },
        Vector { row: -1, col: 0 },
        Vector { row: 0, col: 1 },
        Vector { row: 0, col: -1 },
    ];
    pub const BISHOP_DIRECTIONS: [Self; 4] = [
        Vector { row: 1, col: 1 },
        Vector { row: -1, col: 1 },
        Vector { row: 1, col: -1 },
        Vector { row: -1, col: -1 },
    ];

    pub fn pawn_single_move(color: Color) -> Self {
        Vector {
            row: color.pawn_direction(),
            col: 0,
        }
    }
    pub fn pawn_double_move(color: Color) -> Self {
        Vector::pawn_single_move(color) * 2
    }
    pub fn pawn_attacks(color: Color) -> [Self; 2] {
        [-1, 1].map(|col| Vector {
            row: color.pawn_direction(),
            col,
        })
    }
}
impl Mul<i8> for Vector {
    type Output = Vector;

    fn mul(self, rhs: i8) -> Self::Output {
        Vector {
            row: self.row * rhs,
            col: self.col * rhs,
        }
    }
}
