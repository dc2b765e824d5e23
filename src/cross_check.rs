use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use chess::{BitBoard, File, Rank, get_bishop_rays, get_knight_moves, get_rook_rays};
use log::{info, warn};
use rand::Rng;
use rustc_hash::FxHashSet;

use crate::{
    board::Board,
    color::Color,
    error::OutOfBounds,
    piece::{Piece, PieceKind},
    square::Square,
};

// kings only step orthogonally here and pawns depend on occupancy, so the
// `chess` tables have nothing comparable for them
const CHECKED_KINDS: [PieceKind; 4] = [
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::Knight,
];

impl From<chess::Square> for Square {
    fn from(value: chess::Square) -> Self {
        Square::new(
            7 - value.get_rank().to_index() as i8,
            value.get_file().to_index() as i8,
        )
    }
}
fn to_chess(square: Square) -> chess::Square {
    debug_assert!(square.is_in_bounds());
    chess::Square::make_square(
        Rank::from_index(7 - square.row as usize),
        File::from_index(square.col as usize),
    )
}
fn reference_moves(kind: PieceKind, square: Square) -> Option<BitBoard> {
    let square = to_chess(square);
    let moves = match kind {
        PieceKind::Rook => get_rook_rays(square),
        PieceKind::Bishop => get_bishop_rays(square),
        PieceKind::Queen => get_rook_rays(square) | get_bishop_rays(square),
        PieceKind::Knight => get_knight_moves(square),
        PieceKind::King | PieceKind::Pawn => return None,
    };
    Some(moves)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub piece: Piece,
    pub square: Square,
    pub missing: Vec<Square>,
    pub extra: Vec<Square>,
    pub board: String,
}
impl Display for Mismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {} disagrees with the reference", self.piece, self.square)?;
        if !self.missing.is_empty() {
            write!(f, "; missing")?;
            for square in &self.missing {
                write!(f, " {square}")?;
            }
        }
        if !self.extra.is_empty() {
            write!(f, "; unexpected")?;
            for square in &self.extra {
                write!(f, " {square}")?;
            }
        }
        write!(f, "\n{}", self.board)?;
        Ok(())
    }
}
impl Error for Mismatch {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrossCheckError {
    OutOfBounds(OutOfBounds),
    Mismatch(Mismatch),
}
impl From<OutOfBounds> for CrossCheckError {
    fn from(value: OutOfBounds) -> Self {
        CrossCheckError::OutOfBounds(value)
    }
}
impl From<Mismatch> for CrossCheckError {
    fn from(value: Mismatch) -> Self {
        CrossCheckError::Mismatch(value)
    }
}
impl Display for CrossCheckError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CrossCheckError::OutOfBounds(err) => write!(f, "{err}")?,
            CrossCheckError::Mismatch(err) => write!(f, "{err}")?,
        }
        Ok(())
    }
}
impl Error for CrossCheckError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CrossCheckError::OutOfBounds(err) => Some(err),
            CrossCheckError::Mismatch(err) => Some(err),
        }
    }
}

/// Places `piece` alone on `square` and compares its in-bounds destinations
/// with the `chess` crate. Kinds without a reference always pass.
pub fn check_square(piece: Piece, square: Square) -> Result<(), CrossCheckError> {
    let mut board = Board::empty();
    board.set_piece(Some(piece), square.row, square.col)?;
    let Some(reference) = reference_moves(piece.kind, square) else {
        return Ok(());
    };
    let reference: FxHashSet<Square> = reference.map(Square::from).collect();
    let moves: FxHashSet<Square> = board
        .moves_in_bounds(square.row, square.col)?
        .into_iter()
        .collect();

    if moves == reference {
        return Ok(());
    }
    let mut missing: Vec<_> = reference.difference(&moves).copied().collect();
    let mut extra: Vec<_> = moves.difference(&reference).copied().collect();
    missing.sort_unstable();
    extra.sort_unstable();
    Err(Mismatch {
        piece,
        square,
        missing,
        extra,
        board: board.to_human_display(),
    }
    .into())
}
pub fn cross_check<G>(iterations: u32, rng: &mut G) -> Result<(), CrossCheckError>
where
    G: Rng,
{
    for _ in 0..iterations {
        let square = Square::new(rng.random_range(0..8), rng.random_range(0..8));
        let kind = CHECKED_KINDS[rng.random_range(0..CHECKED_KINDS.len())];
        let color = if rng.random() {
            Color::White
        } else {
            Color::Black
        };
        if let Err(err) = check_square(Piece::new(kind, color), square) {
            warn!("{err}");
            return Err(err);
        }
    }
    info!("cross-checked {iterations} placements without a mismatch");
    Ok(())
}
#[cfg(test)]
mod test {
    use rand::{SeedableRng, rngs::SmallRng};

    use crate::{
        color::Color,
        cross_check::{CHECKED_KINDS, CrossCheckError, check_square, cross_check, to_chess},
        error::OutOfBounds,
        piece::{Piece, PieceKind},
        square::Square,
    };

    #[test]
    fn square_conversion() {
        assert_eq!(to_chess(Square::new(0, 0)), chess::Square::A8);
        assert_eq!(to_chess(Square::new(7, 7)), chess::Square::H1);
        assert_eq!(to_chess(Square::new(6, 4)), chess::Square::E2);
        for square in Square::all() {
            assert_eq!(Square::from(to_chess(square)), square);
        }
    }
    #[test]
    fn every_square_agrees() {
        for kind in CHECKED_KINDS {
            for square in Square::all() {
                assert_eq!(check_square(Piece::new(kind, Color::White), square), Ok(()));
            }
        }
    }
    #[test]
    fn kinds_without_reference_pass() {
        assert_eq!(
            check_square(Piece::new(PieceKind::King, Color::Black), Square::new(0, 0)),
            Ok(())
        );
    }
    #[test]
    fn off_board_square_is_rejected() {
        assert_eq!(
            check_square(Piece::new(PieceKind::Rook, Color::White), Square::new(8, 0)),
            Err(CrossCheckError::OutOfBounds(OutOfBounds(Square::new(8, 0))))
        );
    }
    #[test]
    fn random_placements_agree() {
        assert_eq!(cross_check(500, &mut SmallRng::seed_from_u64(0)), Ok(()));
    }
}
