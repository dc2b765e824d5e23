use crate::{
    color::Color,
    grid::Grid,
    piece::{Piece, PieceKind},
    square::{Square, Vector},
};

/// What a board needs from a rule set: the pieces it starts with and the
/// squares a piece may reach.
pub trait Rules {
    fn initialize_pieces(&self, grid: &mut Grid<Option<Piece>>);

    /// `square` is always on the board. The returned squares need not be.
    fn compute_moves(&self, grid: &Grid<Option<Piece>>, square: Square) -> Vec<Square>;
}

/// Pseudo-legal movement: no turns, no check, occupancy only matters for
/// pawn captures. King, knight and pawn destinations are not bounds-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Standard;

impl Standard {
    fn pawn_moves(grid: &Grid<Option<Piece>>, square: Square, color: Color) -> Vec<Square> {
        let mut moves = vec![square + Vector::pawn_single_move(color)];
        if square.row == color.pawn_home_row() {
            moves.push(square + Vector::pawn_double_move(color));
        }
        // an off-board diagonal holds nothing to capture
        moves.extend(
            square
                .offsets(&Vector::pawn_attacks(color))
                .filter(|target| {
                    target.is_in_bounds()
                        && grid[*target].is_some_and(|occupant| occupant.color == !color)
                }),
        );
        moves
    }
}
impl Rules for Standard {
    fn initialize_pieces(&self, grid: &mut Grid<Option<Piece>>) {
        *grid = Grid::default();
        for color in Color::ALL {
            for (col, kind) in (0..).zip(PieceKind::STARTING_CONFIGURATION) {
                grid[Square::new(color.back_row(), col)] = Some(Piece::new(kind, color));
                grid[Square::new(color.pawn_row(), col)] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
    }
    fn compute_moves(&self, grid: &Grid<Option<Piece>>, square: Square) -> Vec<Square> {
        let Some(piece) = grid[square] else {
            return Vec::new();
        };
        match piece.kind {
            PieceKind::King => square.offsets(&Vector::KING_MOVES).collect(),
            PieceKind::Queen => square
                .lines(&Vector::ROOK_DIRECTIONS)
                .chain(square.lines(&Vector::BISHOP_DIRECTIONS))
                .collect(),
            PieceKind::Bishop => square.lines(&Vector::BISHOP_DIRECTIONS).collect(),
            PieceKind::Knight => square.offsets(&Vector::KNIGHT_MOVES).collect(),
            PieceKind::Rook => square.lines(&Vector::ROOK_DIRECTIONS).collect(),
            PieceKind::Pawn => Standard::pawn_moves(grid, square, piece.color),
        }
    }
}

/// Wraps another rule set and drops every destination that falls off the
/// board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InBounds<R>(pub R);

impl<R> Rules for InBounds<R>
where
    R: Rules,
{
    fn initialize_pieces(&self, grid: &mut Grid<Option<Piece>>) {
        self.0.initialize_pieces(grid);
    }
    fn compute_moves(&self, grid: &Grid<Option<Piece>>, square: Square) -> Vec<Square> {
        let mut moves = self.0.compute_moves(grid, square);
        moves.retain(|destination| destination.is_in_bounds());
        moves
    }
}
