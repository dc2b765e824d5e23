use std::fmt::{self, Display, Formatter};

use log::debug;
use rand::Rng;

use crate::{
    board_display::IndexableBoard,
    error::OutOfBounds,
    grid::Grid,
    piece::Piece,
    rules::{Rules, Standard},
    square::Square,
};

/// An 8×8 board of optional pieces, paired with the rules that set it up and
/// generate moves on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<R = Standard> {
    grid: Grid<Option<Piece>>,
    rules: R,
}
impl Board {
    /// The standard starting position under [`Standard`] rules.
    pub fn new() -> Self {
        Board::with_rules(Standard)
    }
    pub fn empty() -> Self {
        let mut board = Board::new();
        board.clear();
        board
    }
}
impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
impl<R> Board<R>
where
    R: Rules,
{
    pub fn with_rules(rules: R) -> Self {
        let mut grid = Grid::default();
        rules.initialize_pieces(&mut grid);
        Board { grid, rules }
    }
    /// Puts the board back into the starting position of its rules.
    pub fn reset(&mut self) {
        self.rules.initialize_pieces(&mut self.grid);
    }
    pub fn is_in_bounds(&self, row: i8, col: i8) -> bool {
        Square::new(row, col).is_in_bounds()
    }
    pub fn get_piece(&self, row: i8, col: i8) -> Result<Option<Piece>, OutOfBounds> {
        let square = OutOfBounds::check(Square::new(row, col))?;
        Ok(self.grid[square])
    }
    /// Overwrites whatever is on the square. No legality checks are made.
    pub fn set_piece(&mut self, piece: Option<Piece>, row: i8, col: i8) -> Result<(), OutOfBounds> {
        let square = OutOfBounds::check(Square::new(row, col))?;
        self.grid[square] = piece;
        Ok(())
    }
    /// Candidate destinations of the piece on the square, in generation
    /// order. An empty square has no moves.
    pub fn get_moves(&self, row: i8, col: i8) -> Result<Vec<Square>, OutOfBounds> {
        let square = OutOfBounds::check(Square::new(row, col))?;
        Ok(self.rules.compute_moves(&self.grid, square))
    }
    /// Like [`Board::get_moves`] but with every off-board destination removed.
    pub fn moves_in_bounds(&self, row: i8, col: i8) -> Result<Vec<Square>, OutOfBounds> {
        let mut moves = self.get_moves(row, col)?;
        moves.retain(|square| square.is_in_bounds());
        Ok(moves)
    }
}
impl<R> Board<R> {
    pub fn clear(&mut self) {
        self.grid = Grid::default();
    }
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> {
        self.grid
            .positioned_values()
            .filter_map(|(square, &piece)| piece.map(|piece| (square, piece)))
    }
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }
    pub fn to_human_display(&self) -> String {
        self.to_string()
    }
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }
    /// Swaps every square, in row-major order, with a square drawn uniformly
    /// from the whole board. The result is not a uniform permutation.
    pub fn shuffle_with<G>(&mut self, rng: &mut G)
    where
        G: Rng,
    {
        for square in Square::all() {
            let other = Square::new(rng.random_range(0..8), rng.random_range(0..8));
            self.grid.swap(square, other);
        }
        debug!("shuffled board, {} pieces on it", self.piece_count());
    }
}
impl<R> Display for Board<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            for cell in row {
                match cell {
                    Some(piece) => write!(f, " {} ", piece.figurine())?,
                    None => write!(f, " . ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
impl<R> IndexableBoard for Board<R> {
    fn index(&self, position: Square) -> Option<Piece> {
        self.grid[position]
    }
}
