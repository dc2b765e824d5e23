use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use crate::square::Square;

/// A coordinate outside the 8×8 board was used to address a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutOfBounds(pub Square);

impl OutOfBounds {
    pub fn check(square: Square) -> Result<Square, Self> {
        if square.is_in_bounds() {
            Ok(square)
        } else {
            Err(OutOfBounds(square))
        }
    }
}
impl Display for OutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is outside of the board, row and column must be within 0 to 7",
            self.0
        )?;
        Ok(())
    }
}
impl Error for OutOfBounds {}
