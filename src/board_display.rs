use std::fmt::{self, Display, Formatter};

use crate::{color::Color, piece::Piece, square::Square};

const WHITE: &str = "\x1b[30;107m";
const BLACK: &str = "\x1b[30;47m";
const HIGHLIGHTED: &str = "\x1b[30;103m";
const RESET: &str = "\x1b[0m";

pub trait IndexableBoard {
    fn index(&self, position: Square) -> Option<Piece>;
}
pub struct BoardDisplay<'a, 'b, 'c, T: ?Sized> {
    pub board: &'a T,
    pub colors: bool,
    pub show_coordinates: bool,
    pub highlighted: &'b [Square],
    pub info: &'c str,
}
impl<'a, T> BoardDisplay<'a, '_, '_, T>
where
    T: IndexableBoard + ?Sized,
{
    pub fn new(board: &'a T) -> Self {
        BoardDisplay {
            board,
            colors: false,
            show_coordinates: false,
            highlighted: &[],
            info: "",
        }
    }
}
impl<T> Display for BoardDisplay<'_, '_, '_, T>
where
    T: IndexableBoard + ?Sized,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut lines = self.info.lines().fuse();
        for row in 0..8 {
            for col in 0..8 {
                let position = Square::new(row, col);
                let piece = self.board.index(position);
                let highlighted = self.highlighted.contains(&position);
                if self.colors {
                    let color = if highlighted {
                        HIGHLIGHTED
                    } else {
                        match position.color() {
                            Color::White => WHITE,
                            Color::Black => BLACK,
                        }
                    };
                    let figurine = piece.map(Piece::figurine).unwrap_or(' ');
                    write!(f, "{color} {figurine} {RESET}")?;
                } else {
                    let figurine = piece.map(Piece::figurine).unwrap_or('.');
                    if highlighted {
                        write!(f, "[{figurine}]")?;
                    } else {
                        write!(f, " {figurine} ")?;
                    }
                }
            }
            if self.show_coordinates {
                write!(f, " {row}")?;
            }
            if let Some(line) = lines.next() {
                write!(f, " {line}")?;
            }
            writeln!(f)?;
        }
        if self.show_coordinates {
            for col in 0..8 {
                write!(f, " {col} ")?;
            }
            if let Some(line) = lines.next() {
                write!(f, "   {line}")?;
            }
            writeln!(f)?;
        }
        for line in lines {
            writeln!(f, "{:27}{line}", "")?;
        }
        Ok(())
    }
}
#[cfg(test)]
mod test {
    use crate::{board::Board, board_display::BoardDisplay, square::Square};

    #[test]
    fn plain_matches_human_display() {
        let board = Board::new();
        assert_eq!(
            BoardDisplay::new(&board).to_string(),
            board.to_human_display()
        );
    }
    #[test]
    fn highlighted_squares_are_bracketed() {
        let board = Board::new();
        let highlighted = [Square::new(5, 3), Square::new(6, 3)];
        let display = BoardDisplay {
            highlighted: &highlighted,
            ..BoardDisplay::new(&board)
        }
        .to_string();
        let lines: Vec<_> = display.lines().collect();
        assert_eq!(lines[5], " .  .  . [.] .  .  .  . ");
        assert_eq!(lines[6], " ♙  ♙  ♙ [♙] ♙  ♙  ♙  ♙ ");
    }
    #[test]
    fn coordinates_and_info() {
        let board = Board::empty();
        let display = BoardDisplay {
            show_coordinates: true,
            info: "first\nsecond",
            ..BoardDisplay::new(&board)
        }
        .to_string();
        let lines: Vec<_> = display.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], " .  .  .  .  .  .  .  .  0 first");
        assert_eq!(lines[1], " .  .  .  .  .  .  .  .  1 second");
        assert_eq!(lines[8], " 0  1  2  3  4  5  6  7 ");
    }
    #[test]
    fn colored_cells_use_escape_codes() {
        let board = Board::new();
        let display = BoardDisplay {
            colors: true,
            ..BoardDisplay::new(&board)
        }
        .to_string();
        assert!(display.starts_with("\x1b[30;107m ♜ \x1b[0m"));
    }
}
